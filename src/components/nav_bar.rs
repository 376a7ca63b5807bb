use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn NavComponent() -> Element {
    let app_state = use_context::<crate::components::AppState>();
    let session = app_state.session.read().clone();

    rsx! {
        div { class: "min-h-screen flex flex-col",
            nav { class: "nav-bar",
                div { class: "page-container",
                    // Logo section
                    div { class: "nav-logo",
                        div { class: "logo-icon" }
                        span { class: "logo-text", "Student Portal" }
                        if let Some(faculty) = session.faculty {
                            span { class: "badge badge-faculty ml-2", "{faculty}" }
                        }
                    }

                    // Navigation links
                    div { class: "nav-links",
                        Link {
                            to: Route::PyqsComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "PYQs"
                        }
                    }

                    div { class: "nav-user",
                        if session.is_signed_in() {
                            span { class: "text-sm text-[var(--text-secondary)]", "{session.display_name}" }
                        } else {
                            span { class: "text-sm text-[var(--text-muted)]", "Signed out" }
                        }
                    }
                }
            }

            div { class: "fixed-header-spacer" }

            div { class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}
