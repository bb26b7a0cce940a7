use dioxus::prelude::*;
use dioxus_primitives::toast as prim;
use std::time::Duration;

pub use dioxus_primitives::toast::{consume_toast, use_toast, ToastOptions, ToastType, Toasts};

/// Default time a toast stays on screen.
pub const TOAST_MS: u64 = 3000;
/// Customer care uses a shorter toast.
pub const SHORT_TOAST_MS: u64 = 2500;

/// Options for a toast that hides after `ms` milliseconds.
pub fn toast_for(ms: u64) -> ToastOptions {
    ToastOptions::new().duration(Duration::from_millis(ms))
}

#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}
