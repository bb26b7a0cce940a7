use dioxus::prelude::*;
use shared_types::{AccessPolicy, FeatureFlags, PortalConfig};

mod advisory;
mod auth;
mod components;
mod feed;
mod format_helpers;
mod routes;
mod stats;
mod timer;
mod typewriter;
use auth::AuthState;
use routes::Route;

const PORTAL_CSS: Asset = asset!("/assets/portal.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_portal_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let roster = server::roster::roster();
        tracing::info!(staff = roster.len(), "Staff roster loaded");

        let mut router =
            dioxus::server::router(App).merge(server::openapi::api_router(roster));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn(
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// The loaded portal config, or the stock one when loading failed.
fn resolve_portal_config(loaded: Option<&Result<PortalConfig, ServerFnError>>) -> PortalConfig {
    match loaded {
        Some(Ok(config)) => config.clone(),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Portal config unavailable; using defaults");
            PortalConfig::default()
        }
        None => PortalConfig::default(),
    }
}

#[component]
fn App() -> Element {
    // Portal config drives both the optional chrome and the access policy.
    let config_resource =
        use_server_future(move || async move { server::api::get_portal_config().await })?;

    let config = resolve_portal_config(config_resource.read().as_ref());

    let flags: FeatureFlags = config.features.clone();
    use_context_provider(|| flags);
    use_context_provider(|| AccessPolicy::from_settings(&config.access));
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "auth-guard-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::MissingRolePolicy;

    #[test]
    fn loaded_config_is_kept() {
        let mut config = PortalConfig::default();
        config.access.missing_role = MissingRolePolicy::FailClosed;
        let resolved = resolve_portal_config(Some(&Ok(config.clone())));
        assert_eq!(resolved, config);
    }

    #[test]
    fn failed_load_falls_back_to_defaults() {
        let failed = Err(ServerFnError::new("connection refused"));
        assert_eq!(resolve_portal_config(Some(&failed)), PortalConfig::default());
        assert_eq!(resolve_portal_config(None), PortalConfig::default());
    }
}
