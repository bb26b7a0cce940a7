use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::validate_session_token;

/// Permissive auth middleware that handles session validation and cookie
/// management.
///
/// On each request it validates the session token (cookie, or Bearer
/// header) and inserts the `Claims` into request extensions, then inserts a
/// `CookieSlot` so server functions can schedule cookie changes. After the
/// handler runs, any pending cookie action is applied to the response.
///
/// Does NOT reject unauthenticated requests; downstream handlers decide.
pub async fn auth_middleware(mut req: Request, next: Next) -> Response {
    let mut stale_cookie = false;

    if let Some(token) = cookies::extract_session_token(req.headers()) {
        match validate_session_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!(%e, "Discarding invalid session token");
                stale_cookie = true;
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    match cookie_slot.take() {
        Some(PendingCookieAction::Set { token }) => {
            cookies::set_session_cookie(response.headers_mut(), &token);
        }
        Some(PendingCookieAction::Clear) => {
            cookies::clear_session_cookie(response.headers_mut());
        }
        None if stale_cookie => {
            cookies::clear_session_cookie(response.headers_mut());
        }
        None => {}
    }

    response
}
