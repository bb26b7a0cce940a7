use crate::auth::use_auth;
use crate::routes::Route;
use crate::timer::sleep_ms;
use crate::typewriter::Typewriter;
use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest, STAFF_ROLES};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect,
    Input, PasswordInput,
};

const REDIRECT_DELAY_MS: u64 = 1000;
const BLANK_FIELDS: &str = "Please fill in all fields.";
const SERVER_ERROR: &str = "Server error. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
enum Feedback {
    Success(String),
    Error(String),
}

/// Staff sign-in: role, username and password.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut role = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut feedback = use_signal(|| Option::<Feedback>::None);
    let mut loading = use_signal(|| false);
    let mut tagline = use_signal(String::new);

    use_effect(move || {
        spawn(async move {
            let mut typewriter = Typewriter::default();
            loop {
                let (text, delay) = typewriter.tick();
                tagline.set(text);
                sleep_ms(delay).await;
            }
        });
    });

    if auth.is_authenticated() {
        navigator().push(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        let req = LoginRequest {
            role: role(),
            username: username(),
            password: password(),
        };
        if req.has_blank_field() {
            feedback.set(Some(Feedback::Error(BLANK_FIELDS.to_string())));
            return;
        }
        let req = req.trimmed();

        loading.set(true);
        feedback.set(None);

        match server::api::login(req.role, req.username, req.password).await {
            Ok(resp) if resp.success => {
                feedback.set(Some(Feedback::Success(format!(
                    "{} Redirecting...",
                    resp.message
                ))));
                sleep_ms(REDIRECT_DELAY_MS).await;
                if let Ok(Some(user)) = server::api::get_current_user().await {
                    auth.set_user(user);
                }
                navigator().push(Route::Home {});
            }
            Ok(resp) => {
                feedback.set(Some(Feedback::Error(resp.message)));
            }
            Err(e) => {
                let message = AppError::from_server_error(&e.to_string())
                    .map(|err| err.message)
                    .unwrap_or_else(|| SERVER_ERROR.to_string());
                feedback.set(Some(Feedback::Error(message)));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            section { class: "login-brand",
                h1 { class: "login-brand-title", "Epiconsult e-Clinic" }
                p { id: "typewriter", class: "login-typewriter", "{tagline}" }
            }

            Card { class: "login-card",
                CardHeader {
                    CardTitle { "Staff Login" }
                    CardDescription { "Choose your role and enter your credentials." }
                }
                CardContent {
                    form { id: "loginForm", class: "login-form", onsubmit: handle_login,
                        FormSelect {
                            label: "Role",
                            name: "role",
                            placeholder: "Select Role",
                            value: role(),
                            onchange: move |e: Event<FormData>| role.set(e.value()),
                            for staff_role in STAFF_ROLES {
                                option { value: staff_role.name, "{staff_role.name}" }
                            }
                        }
                        Input {
                            label: "Username",
                            id: "username",
                            placeholder: "Enter your username",
                            value: username(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        PasswordInput {
                            label: "Password",
                            id: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Login" }
                        }
                        {match feedback() {
                            Some(Feedback::Success(msg)) => rsx! {
                                p { id: "loginMessage", class: "login-message success", "{msg}" }
                            },
                            Some(Feedback::Error(msg)) => rsx! {
                                p { id: "loginMessage", class: "login-message error", "{msg}" }
                            },
                            None => rsx! {},
                        }}
                    }
                }
            }
        }
    }
}
