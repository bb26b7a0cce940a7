use dioxus::prelude::*;
use shared_types::{AccessPolicy, AuthUser, Department};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    /// Role of the signed-in user, as the roster holds it.
    pub fn role(&self) -> Option<String> {
        self.current_user.read().as_ref().map(|u| u.role.clone())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the access policy built from the portal config.
pub fn use_access_policy() -> AccessPolicy {
    use_context::<AccessPolicy>()
}

/// Departments the signed-in user may open, in navigation order.
///
/// Uses the session's own list when the server sent one, else derives it
/// from the client's policy.
pub fn use_accessible_departments() -> Vec<Department> {
    let auth = use_auth();
    let policy = use_access_policy();
    let guard = auth.current_user.read();
    match guard.as_ref() {
        Some(user) if !user.accessible.is_empty() => user.accessible.clone(),
        Some(user) => policy.accessible_departments(&user.role),
        None => Vec::new(),
    }
}
