use dioxus::prelude::*;

/// Native `<select>` with clinic styling.
///
/// Children are `option { value: "...", "Label" }` elements. When
/// `placeholder` is set a disabled empty option is rendered first so the
/// field starts unselected.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                name: name,
                value: value,
                disabled: disabled,
                required: required,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", disabled: true, "{placeholder}" }
                }
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_option_comes_first() {
        let html = dioxus_ssr::render_element(rsx! {
            FormSelect { placeholder: "Select role",
                option { value: "Doctor", "Doctor" }
            }
        });
        let placeholder = html.find("Select role").unwrap();
        let doctor = html.find(">Doctor<").unwrap();
        assert!(placeholder < doctor, "{html}");
    }
}
