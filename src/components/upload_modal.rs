use chrono::Utc;
use dioxus::prelude::*;
use tracing::warn;

use crate::backend::paper::{Category, ClassLevel, NewPaper};
use crate::backend::upload::{SelectedFile, UploadForm};
use crate::backend::upload_rules;
use crate::components::AppState;

/// Reads the first picked file into memory and stores it in `target`.
fn read_first_file(evt: Event<FormData>, mut target: Signal<Option<SelectedFile>>, mut error: Signal<Option<String>>) {
    let files: Vec<_> = evt.files().into_iter().collect();
    spawn(async move {
        if let Some(file_data) = files.into_iter().next() {
            let name = file_data.name();
            let content_type = file_data.content_type();
            match file_data.read_bytes().await {
                Ok(bytes) => {
                    target.set(Some(SelectedFile {
                        name,
                        content_type,
                        bytes: bytes.to_vec(),
                    }));
                }
                Err(e) => {
                    warn!(file = %name, error = ?e, "Failed to read selected file");
                    error.set(Some(format!("Could not read {}", name)));
                }
            }
        }
    });
}

#[component]
pub fn UploadPaperModal(on_close: EventHandler<()>, on_submit: EventHandler<NewPaper>) -> Element {
    let mut app_state = use_context::<AppState>();

    let mut title = use_signal(|| String::new());
    let mut subject = use_signal(|| String::new());
    let mut class_level = use_signal(|| String::new());
    let mut year = use_signal(|| String::new());
    let mut category = use_signal(|| Category::BoardExam.to_string());
    let selected_file = use_signal(|| None::<SelectedFile>);
    let selected_solution = use_signal(|| None::<SelectedFile>);
    let mut upload_error = use_signal(|| None::<String>);

    let faculty = app_state.session.read().faculty;
    let subjects: &'static [&'static str] = faculty.map(|f| f.subjects()).unwrap_or(&[]);
    let rules = upload_rules(&app_state.config.read(), Utc::now());
    let years = rules.allowed_years();
    let file_hint = rules.file_hint();

    let on_upload = move |_| {
        let form = UploadForm {
            title: title(),
            subject: subject(),
            class_level: ClassLevel::parse(&class_level()),
            year: year(),
            category: Category::parse(&category()).unwrap_or_default(),
            file: selected_file(),
            solution: selected_solution(),
        };

        match form.validate(faculty, &rules) {
            Ok(draft) => {
                let new_paper = {
                    let mut blobs = app_state.blobs.write();
                    draft.into_new_paper(&mut blobs)
                };
                upload_error.set(None);
                on_submit.call(new_paper);
            }
            Err(e) => upload_error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal panel",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Upload PYQ" }
                }

                div { class: "grid gap-4",
                    div { class: "grid grid-cols-2 gap-4",
                        div { class: "form-group",
                            label { class: "form-label", "Subject" }
                            select {
                                class: "input",
                                value: "{subject}",
                                oninput: move |e| subject.set(e.value()),
                                option { value: "", "Select subject" }
                                for subj in subjects.iter() {
                                    option { key: "{subj}", value: "{subj}", "{subj}" }
                                }
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", "Class" }
                            select {
                                class: "input",
                                value: "{class_level}",
                                oninput: move |e| class_level.set(e.value()),
                                option { value: "", "Select class" }
                                for level in ClassLevel::ALL {
                                    option { key: "{level}", value: "{level}", "Class {level}" }
                                }
                            }
                        }
                    }

                    div { class: "grid grid-cols-2 gap-4",
                        div { class: "form-group",
                            label { class: "form-label", "Year" }
                            select {
                                class: "input",
                                value: "{year}",
                                oninput: move |e| year.set(e.value()),
                                option { value: "", "Select year" }
                                for yr in years.iter() {
                                    option { key: "{yr}", value: "{yr}", "{yr}" }
                                }
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", "Type" }
                            select {
                                class: "input",
                                value: "{category}",
                                oninput: move |e| category.set(e.value()),
                                for cat in Category::ALL {
                                    option { key: "{cat}", value: "{cat}", "{cat}" }
                                }
                            }
                        }
                    }

                    div { class: "form-group",
                        label { class: "form-label", "Title" }
                        input {
                            class: "input",
                            placeholder: "Enter PYQ title",
                            value: "{title}",
                            oninput: move |e| title.set(e.value())
                        }
                    }

                    FilePicker {
                        label: "Upload Question Paper",
                        prompt: "Click to upload question paper",
                        hint: file_hint.clone(),
                        selected: selected_file(),
                        on_pick: move |evt: Event<FormData>| read_first_file(evt, selected_file, upload_error)
                    }

                    FilePicker {
                        label: "Upload Solution (Optional)",
                        prompt: "Click to upload solution",
                        hint: file_hint.clone(),
                        selected: selected_solution(),
                        on_pick: move |evt: Event<FormData>| read_first_file(evt, selected_solution, upload_error)
                    }

                    if let Some(message) = upload_error() {
                        p { class: "form-error", "{message}" }
                    }

                    div { class: "flex justify-end gap-3 pt-4",
                        button { class: "btn btn-secondary", onclick: move |_| on_close.call(()), "Cancel" }
                        button { class: "btn btn-primary", onclick: on_upload, "Upload PYQ" }
                    }
                }
            }
        }
    }
}

#[component]
fn FilePicker(
    label: String,
    prompt: String,
    hint: String,
    #[props(!optional)] selected: Option<SelectedFile>,
    on_pick: EventHandler<Event<FormData>>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{label}" }
            div { class: "file-drop",
                input {
                    class: "input",
                    r#type: "file",
                    accept: ".pdf,.doc,.docx",
                    onchange: move |evt| on_pick.call(evt)
                }
                if let Some(file) = selected {
                    p { class: "font-medium", "{file.name}" }
                    p { class: "text-xs text-[var(--text-muted)] mt-1", "{file.size_label()}" }
                } else {
                    p { class: "text-[var(--text-secondary)]", "{prompt}" }
                    p { class: "text-xs text-[var(--text-muted)] mt-1", "{hint}" }
                }
            }
        }
    }
}
