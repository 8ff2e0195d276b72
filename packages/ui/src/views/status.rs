use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

#[component]
pub fn ErrorText(message: String) -> Element {
    rsx! {
        p { class: "error-text", "{message}" }
    }
}

#[component]
pub fn SectionTitle(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "section-title",
            h2 { "{title}" }
            p { "{subtitle}" }
        }
    }
}

/// Labelled form input bound to a string.
#[component]
pub fn Field(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default = false)] multiline: bool,
    #[props(default = true)] required: bool,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{label}" }
            if multiline {
                textarea {
                    class: "field-input",
                    rows: 4,
                    required,
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            } else {
                input {
                    class: "field-input",
                    r#type: "{kind}",
                    required,
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
        }
    }
}
