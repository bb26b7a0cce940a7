use dioxus::prelude::*;

/// Colour of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    Neutral,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Info => "info",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Neutral => "neutral",
        }
    }

    /// Pick a variant for a queue or appointment status word.
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "done" | "completed" | "seen" | "paid" => BadgeVariant::Success,
            "waiting" | "pending" | "in queue" => BadgeVariant::Warning,
            "urgent" | "critical" | "overdue" => BadgeVariant::Danger,
            "cancelled" | "closed" => BadgeVariant::Neutral,
            _ => BadgeVariant::Info,
        }
    }
}

/// Inline status pill.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-variant", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_words_map_to_variants() {
        assert_eq!(BadgeVariant::for_status("Waiting"), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::for_status(" seen "), BadgeVariant::Success);
        assert_eq!(BadgeVariant::for_status("urgent"), BadgeVariant::Danger);
        assert_eq!(BadgeVariant::for_status("triage"), BadgeVariant::Info);
    }

    #[test]
    fn renders_variant_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Danger, "Urgent" }
        });
        assert!(html.contains(r#"data-variant="danger""#), "{html}");
        assert!(html.contains("Urgent"));
    }
}
