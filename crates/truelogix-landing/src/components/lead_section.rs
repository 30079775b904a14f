//! Project quote request section.

use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use tokio::time::sleep;
use truelogix_core::LeadField;

use crate::state::{LeadFormState, TOAST_DURATION};

#[component]
pub fn LeadSection() -> Element {
    let mut lead = use_signal(LeadFormState::new);
    let toast_task = use_signal(|| None::<Task>);

    let toast = lead.read().toast.clone();

    rsx! {
        section {
            id: "make-your-website",
            class: "lead-section",

            div {
                class: "container lead-grid",

                div {
                    class: "lead-copy",
                    div { class: "badge", "Make Your Website" }
                    h2 {
                        class: "section-title",
                        "Have an Idea? Let's Build It Together."
                    }
                    p {
                        class: "section-text",
                        "From simple landing pages to complex web applications, our team has the expertise to bring your vision to life. Fill out the form to get a project quote."
                    }
                }

                div {
                    class: "card",

                    div {
                        class: "card-header",
                        h3 { class: "card-title", "Request a Project Quote" }
                        p { class: "card-description", "Tell us about your project and we'll get back to you." }
                    }

                    form {
                        class: "card-content lead-form",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            submit_lead(lead, toast_task);
                        },

                        LeadInput { field: LeadField::Name, lead }
                        LeadInput { field: LeadField::Email, lead }
                        LeadInput { field: LeadField::Whatsapp, lead }
                        LeadInput { field: LeadField::ProjectDetails, lead, multiline: true }

                        button {
                            class: "btn btn-primary btn-lg btn-block",
                            r#type: "submit",
                            "Get Quote"
                        }
                    }
                }
            }

            if let Some(toast) = toast {
                div {
                    class: "toast",
                    role: "status",
                    div { class: "toast-title", "{toast.title}" }
                    div { class: "toast-description", "{toast.description}" }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        onclick: move |_| lead.write().dismiss_toast(),
                        "×"
                    }
                }
            }
        }
    }
}

/// Validate the form; on success log the lead and raise the toast.
fn submit_lead(mut lead: Signal<LeadFormState>, mut toast_task: Signal<Option<Task>>) {
    let Some(submission) = lead.write().submit() else {
        tracing::debug!("Lead form rejected");
        return;
    };

    match serde_json::to_string(&submission) {
        Ok(json) => tracing::info!(lead = %json, "Lead submitted"),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize lead"),
    }

    let previous = toast_task.write().take();
    if let Some(previous) = previous {
        previous.cancel();
    }
    let task = spawn(async move {
        sleep(TOAST_DURATION).await;
        lead.write().dismiss_toast();
    });
    toast_task.set(Some(task));
}

/// Labelled input bound to one lead form field.
#[component]
fn LeadInput(
    field: LeadField,
    mut lead: Signal<LeadFormState>,
    #[props(default)] multiline: bool,
) -> Element {
    let value = lead.read().form.value(field).to_string();
    let error = lead.read().error_for(field);
    let id = format!("lead-{:?}", field).to_lowercase();
    let label_class = if error.is_some() { "form-label form-label-error" } else { "form-label" };
    let input_type = if field == LeadField::Whatsapp { "tel" } else { "text" };

    rsx! {
        div {
            class: "form-item",

            label {
                class: "{label_class}",
                r#for: "{id}",
                "{field.label()}"
            }

            if multiline {
                textarea {
                    id: "{id}",
                    class: "form-textarea",
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| lead.write().update(field, evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    class: "form-input",
                    r#type: input_type,
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| lead.write().update(field, evt.value()),
                }
            }

            if let Some(message) = error {
                p {
                    class: "form-message",
                    "{message}"
                }
            }
        }
    }
}
