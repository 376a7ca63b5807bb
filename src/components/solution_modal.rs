use dioxus::prelude::*;
use tracing::warn;

use crate::backend::solution::SolutionView;
use crate::components::AppState;

#[component]
pub fn SolutionModal(paper_id: String, on_close: EventHandler<()>) -> Element {
    let app_state = use_context::<AppState>();

    let view = SolutionView::open(&app_state.catalog.read(), &app_state.blobs.read(), &paper_id);

    let body = match view {
        Ok(view) => {
            let download_name = view.download_name();
            rsx! {
                div { class: "flex justify-between items-start mb-4",
                    div {
                        h2 { class: "panel-title", "{view.heading}" }
                        p { class: "text-[var(--text-secondary)]", "{view.subtitle}" }
                    }
                    button { class: "modal-close", onclick: move |_| on_close.call(()), "✕" }
                }

                div { class: "solution-body text-center",
                    div { class: "solution-icon", "📄" }
                    if view.has_solution {
                        h3 { class: "text-lg font-medium mb-2", "Solution Available" }
                        p { class: "text-[var(--text-secondary)] mb-4", "{view.description}" }
                    } else {
                        h3 { class: "text-lg font-medium mb-2", "No solution uploaded yet" }
                    }
                    div { class: "flex justify-center gap-3",
                        if let Some(url) = view.artifact_url.clone() {
                            a { class: "btn btn-primary", href: "{url}", download: "{download_name}", "⬇ Download Solution" }
                            a { class: "btn btn-secondary", href: "{url}", target: "_blank", "👁 View Online" }
                        } else {
                            button { class: "btn btn-primary", "⬇ Download Solution" }
                            button { class: "btn btn-secondary", "👁 View Online" }
                        }
                    }
                }
            }
        }
        Err(e) => {
            warn!(paper_id = %paper_id, error = %e, "Solution requested for unknown paper");
            rsx! {
                div { class: "flex justify-between items-start mb-4",
                    h2 { class: "panel-title", "Solutions" }
                    button { class: "modal-close", onclick: move |_| on_close.call(()), "✕" }
                }
                div { class: "empty-state",
                    div { class: "empty-state-icon", "🔍" }
                    p { class: "empty-state-title", "Paper not found" }
                    p { class: "empty-state-text", "{e}" }
                }
            }
        }
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal modal-wide panel",
                {body}
            }
        }
    }
}
