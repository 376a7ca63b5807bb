use dioxus::prelude::*;
use crate::backend::paper::{star_states, Category, Faculty};

pub fn faculty_badge_class(faculty: Faculty) -> &'static str {
    match faculty {
        Faculty::Science => "text-primary-600 bg-primary-50",
        Faculty::Management => "text-secondary-600 bg-secondary-50",
        Faculty::Humanities => "text-purple-600 bg-purple-50",
        Faculty::Law => "text-red-600 bg-red-50",
        Faculty::Education => "text-orange-600 bg-orange-50",
    }
}

pub fn category_badge_class(category: Category) -> &'static str {
    match category {
        Category::BoardExam => "text-red-600 bg-red-50",
        Category::ModelQuestion => "text-secondary-600 bg-secondary-50",
        Category::ImportantQuestions => "text-orange-600 bg-orange-50",
    }
}

#[component]
pub fn StarRating(rating: f32) -> Element {
    let stars = star_states(rating);

    rsx! {
        div { class: "flex items-center gap-1",
            for (i, filled) in stars.into_iter().enumerate() {
                span {
                    key: "{i}",
                    class: if filled { "star star-filled" } else { "star" },
                    "★"
                }
            }
            span { class: "text-xs", "({rating})" }
        }
    }
}

#[component]
pub fn StatCard(value: String, label: String, accent: String) -> Element {
    rsx! {
        div { class: "panel stat-card text-center",
            div { class: "text-2xl font-bold {accent}", "{value}" }
            div { class: "text-sm text-[var(--text-secondary)]", "{label}" }
        }
    }
}

#[component]
pub fn EmptyState(icon: String, title: String, text: String) -> Element {
    rsx! {
        div { class: "empty-state py-12 col-span-full",
            div { class: "empty-state-icon", "{icon}" }
            p { class: "empty-state-title", "{title}" }
            p { class: "empty-state-text", "{text}" }
        }
    }
}
