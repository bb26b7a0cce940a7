use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMessageCircle, LdSend, LdX};
use dioxus_free_icons::Icon;

/// Chat bubble text for a message the user sent. `None` for blank input.
pub fn outgoing_bubble(input: &str) -> Option<String> {
    let msg = input.trim();
    (!msg.is_empty()).then(|| msg.to_string())
}

/// Floating staff chat. Messages stay local to the page.
#[component]
pub fn ChatWidget() -> Element {
    let mut open = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut messages = use_signal(Vec::<String>::new);

    let mut send = move || {
        if let Some(msg) = outgoing_bubble(&draft.read()) {
            messages.write().push(msg);
            draft.set(String::new());
        }
    };

    rsx! {
        button {
            class: "floating-chat-btn",
            r#type: "button",
            aria_label: "Open chat",
            onclick: move |_| open.toggle(),
            Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 22, height: 22 }
        }
        if open() {
            div { class: "chat-modal active",
                div { class: "chat-modal-header",
                    h3 { "Staff Chat" }
                    button {
                        class: "chat-modal-close",
                        r#type: "button",
                        aria_label: "Close chat",
                        onclick: move |_| open.set(false),
                        Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                    }
                }
                div { class: "chat-messages",
                    for (i, msg) in messages.read().iter().enumerate() {
                        div { class: "chat-bubble", key: "{i}",
                            strong { "You:" }
                            " {msg}"
                        }
                    }
                }
                div { class: "chat-input",
                    input {
                        id: "chatMessage",
                        r#type: "text",
                        placeholder: "Type a message...",
                        value: draft(),
                        oninput: move |e: FormEvent| draft.set(e.value()),
                        onkeydown: move |e: KeyboardEvent| {
                            if e.key() == Key::Enter {
                                send();
                            }
                        },
                    }
                    button {
                        id: "chatSendBtn",
                        r#type: "button",
                        aria_label: "Send",
                        onclick: move |_| send(),
                        Icon::<LdSend> { icon: LdSend, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
