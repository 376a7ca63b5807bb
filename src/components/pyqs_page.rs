use chrono::Utc;
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::backend::catalog::{most_downloaded, FilterCriteria, PageStats, MOST_DOWNLOADED_LIMIT};
use crate::backend::paper::{format_time_ago, Category, NewPaper, PaperRecord};
use crate::components::common::{category_badge_class, faculty_badge_class, EmptyState, StarRating, StatCard};
use crate::components::solution_modal::SolutionModal;
use crate::components::upload_modal::UploadPaperModal;
use crate::components::AppState;

#[component]
pub fn PyqsComponent() -> Element {
    let mut app_state = use_context::<AppState>();

    let mut search_term = use_signal(|| String::new());
    let mut filter_subject = use_signal(|| String::new());
    let mut filter_year = use_signal(|| String::new());
    let mut filter_type = use_signal(|| String::new());
    let mut show_upload_modal = use_signal(|| false);
    let mut show_solution_modal = use_signal(|| None::<String>);

    let faculty = app_state.session.read().faculty;
    let faculty_label = app_state.session.read().faculty_label();

    let criteria = FilterCriteria {
        term: search_term(),
        subject: filter_subject(),
        year: filter_year(),
        category: Category::parse(&filter_type()),
    };

    // Recomputed on every render; the working set is small.
    let (papers, top_papers, subjects, years, stats) = {
        let catalog = app_state.catalog.read();
        let visible = catalog.filter(faculty, &criteria);
        let subjects = catalog.subject_facets(faculty);
        let years = catalog.year_facets();
        let stats = PageStats::collect(&visible, &subjects, &years);
        let top: Vec<PaperRecord> = most_downloaded(&visible, MOST_DOWNLOADED_LIMIT)
            .into_iter()
            .cloned()
            .collect();
        let papers: Vec<PaperRecord> = visible.into_iter().cloned().collect();
        (papers, top, subjects, years, stats)
    };

    let on_upload_submit = move |new_paper: NewPaper| {
        let Some(faculty) = app_state.session.read().faculty else {
            warn!("Upload submitted without a signed-in faculty");
            return;
        };
        let id = app_state.catalog.write().create(new_paper, faculty, Utc::now()).id.clone();
        info!(id = %id, "Upload added to listing");
        show_upload_modal.set(false);
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",

            // Header
            div { class: "page-header",
                div { class: "flex justify-between items-center",
                    div {
                        h1 { class: "page-title", "Past Year Questions & Important Questions" }
                        p { class: "text-[var(--text-secondary)] mt-1",
                            "Access previous year questions and important questions for {faculty_label} faculty"
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_upload_modal.set(true),
                        "⬆ Upload PYQ"
                    }
                }
            }

            // Search and filters
            div { class: "flex flex-col lg:flex-row gap-4 mb-6",
                input {
                    class: "input flex-1",
                    placeholder: "Search PYQs and important questions...",
                    value: "{search_term}",
                    oninput: move |e| search_term.set(e.value())
                }
                select {
                    class: "input",
                    value: "{filter_subject}",
                    oninput: move |e| filter_subject.set(e.value()),
                    option { value: "", "All Subjects" }
                    for subject in subjects.iter() {
                        option { key: "{subject}", value: "{subject}", "{subject}" }
                    }
                }
                select {
                    class: "input",
                    value: "{filter_year}",
                    oninput: move |e| filter_year.set(e.value()),
                    option { value: "", "All Years" }
                    for year in years.iter() {
                        option { key: "{year}", value: "{year}", "{year}" }
                    }
                }
                select {
                    class: "input",
                    value: "{filter_type}",
                    oninput: move |e| filter_type.set(e.value()),
                    option { value: "", "All Types" }
                    for category in Category::ALL {
                        option { key: "{category}", value: "{category}", "{category}" }
                    }
                }
            }

            // Stats
            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-8",
                StatCard { value: stats.available_papers.to_string(), label: "Available Papers", accent: "text-secondary-600" }
                StatCard { value: stats.subjects_covered.to_string(), label: "Subjects Covered", accent: "text-primary-600" }
                StatCard { value: stats.years_available.to_string(), label: "Years Available", accent: "text-orange-600" }
                StatCard { value: stats.total_downloads.to_string(), label: "Total Downloads", accent: "text-purple-600" }
            }

            // Papers grid
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                if papers.is_empty() {
                    EmptyState {
                        icon: "📄",
                        title: "No PYQs found",
                        text: "No past year questions available for the selected criteria."
                    }
                } else {
                    for paper in papers.iter() {
                        PaperCard {
                            key: "{paper.id}",
                            paper: paper.clone(),
                            on_see_solutions: move |id: String| show_solution_modal.set(Some(id))
                        }
                    }
                }
            }

            // Most downloaded
            div { class: "mt-12",
                h2 { class: "text-xl font-bold mb-6", "Most Downloaded This Month" }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                    for (rank, paper) in top_papers.iter().enumerate().map(|(i, p)| (i + 1, p)) {
                        div { class: "panel featured-card", key: "{paper.id}",
                            div { class: "flex items-center gap-3",
                                div { class: "rank-badge", "#{rank}" }
                                div { class: "flex-1",
                                    h4 { class: "font-medium text-sm", "{paper.title}" }
                                    p { class: "text-xs text-[var(--text-secondary)]", "{paper.downloads} downloads" }
                                }
                            }
                        }
                    }
                }
            }

            if show_upload_modal() {
                UploadPaperModal {
                    on_close: move |_| show_upload_modal.set(false),
                    on_submit: on_upload_submit
                }
            }

            if let Some(paper_id) = show_solution_modal() {
                SolutionModal {
                    paper_id: paper_id,
                    on_close: move |_| show_solution_modal.set(None)
                }
            }
        }
    }
}

#[component]
fn PaperCard(paper: PaperRecord, on_see_solutions: EventHandler<String>) -> Element {
    let app_state = use_context::<AppState>();
    let file_url = app_state.blobs.read().resolve(&paper.file_ref);
    let time_ago = format_time_ago(paper.created_at, Utc::now());
    let faculty_class = faculty_badge_class(paper.faculty);
    let type_class = category_badge_class(paper.category);
    let paper_id = paper.id.clone();

    rsx! {
        div { class: "panel paper-card",
            div { class: "flex items-start justify-between mb-4",
                div { class: "flex items-center gap-2",
                    span { class: "paper-icon", "📄" }
                    span { class: "badge {faculty_class}", "{paper.subject}" }
                    span { class: "badge bg-gray-100 text-gray-600", "Class {paper.class_level}" }
                }
                span { class: "badge {type_class}", "{paper.category}" }
            }

            h3 { class: "font-semibold mb-2 line-clamp-2", "{paper.title}" }

            div { class: "flex items-center gap-4 mb-4 text-sm text-[var(--text-secondary)]",
                span { class: "font-medium", "Year: {paper.year}" }
                StarRating { rating: paper.rating }
            }

            div { class: "flex items-center justify-between text-sm text-[var(--text-muted)] mb-4",
                span { "⬇ {paper.downloads} downloads" }
                span { "🕒 {time_ago}" }
            }

            div { class: "space-y-2",
                div { class: "flex gap-2",
                    if let Some(url) = file_url.clone() {
                        a { class: "btn btn-primary btn-sm flex-1", href: "{url}", download: "{paper.title}", "⬇ Download" }
                        a { class: "btn btn-secondary btn-sm", href: "{url}", target: "_blank", "👁" }
                    } else {
                        button { class: "btn btn-primary btn-sm flex-1", "⬇ Download" }
                        button { class: "btn btn-secondary btn-sm", "👁" }
                    }
                }
                if paper.has_solution {
                    button {
                        class: "btn btn-accent btn-sm w-full",
                        onclick: move |_| on_see_solutions.call(paper_id.clone()),
                        "See Solutions"
                    }
                } else {
                    div { class: "no-solution", "No Solutions Available" }
                }
            }
        }
    }
}
