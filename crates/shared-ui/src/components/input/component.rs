use dioxus::prelude::*;

/// Labelled text input.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label",
                    "{label}"
                    if required {
                        span { class: "input-required", " *" }
                    }
                }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordInput(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut revealed = use_signal(|| false);
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let input_type = if revealed() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            div { class: "input-reveal",
                input {
                    r#type: input_type,
                    value: value,
                    placeholder: placeholder,
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
                button {
                    class: "input-reveal-toggle",
                    r#type: "button",
                    aria_label: if revealed() { "Hide password" } else { "Show password" },
                    onclick: move |_| revealed.toggle(),
                    if revealed() { "Hide" } else { "Show" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_input_marks_label() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { label: "Full Name", required: true }
        });
        assert!(html.contains("input-required"), "{html}");
    }

    #[test]
    fn password_starts_hidden() {
        let html = dioxus_ssr::render_element(rsx! {
            PasswordInput { label: "Password" }
        });
        assert!(html.contains(r#"type="password""#), "{html}");
        assert!(html.contains("Show"));
    }
}
