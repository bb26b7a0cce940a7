use dioxus::prelude::*;

/// Pulsing placeholder block shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of skeleton lines, the last one shorter.
#[component]
pub fn SkeletonText(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "skeleton-text",
            for i in 0..lines.saturating_sub(1) {
                Skeleton { key: "{i}", class: "skeleton-line" }
            }
            if lines > 0 {
                Skeleton { class: "skeleton-line skeleton-line-short" }
            }
        }
    }
}
