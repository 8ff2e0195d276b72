use content::contact::{FAILED_NOTICE, SENT_NOTICE};
use content::ContactMessage;
use dioxus::prelude::*;

use crate::api_store::content;
use crate::notifier::FunctionNotifier;
use crate::toasts::Toasts;
use crate::views::{Field, SectionTitle};

#[component]
pub fn Contact(toasts: Toasts) -> Element {
    let mut toasts = toasts;
    let mut form = use_signal(ContactMessage::default);
    let mut sending = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            sending.set(true);
            let message = form();
            let notifier = FunctionNotifier::from_location();
            match content().submit_contact(&notifier, &message).await {
                Ok(()) => {
                    toasts.success(SENT_NOTICE);
                    form.set(ContactMessage::default());
                }
                Err(e) => {
                    tracing::error!("Error sending contact message: {}", e);
                    toasts.error(FAILED_NOTICE);
                }
            }
            sending.set(false);
        }
    };

    rsx! {
        section { id: "contact", class: "section",
            div { class: "container",
                SectionTitle {
                    title: "Get In Touch",
                    subtitle: "Feel free to reach out about work or suggestions.",
                }
                form { class: "card contact-form", onsubmit: submit,
                    h3 { "Send Message" }
                    Field {
                        label: "Your Name",
                        value: form.read().name.clone(),
                        oninput: move |v| form.write().name = v,
                    }
                    Field {
                        label: "Your Email",
                        kind: "email",
                        value: form.read().email.clone(),
                        oninput: move |v| form.write().email = v,
                    }
                    Field {
                        label: "Subject",
                        value: form.read().subject.clone(),
                        oninput: move |v| form.write().subject = v,
                    }
                    Field {
                        label: "Message",
                        multiline: true,
                        value: form.read().message.clone(),
                        oninput: move |v| form.write().message = v,
                    }
                    button {
                        class: "btn btn-block",
                        r#type: "submit",
                        disabled: sending(),
                        if sending() { "Sending..." } else { "Send Message" }
                    }
                }
            }
        }
    }
}
