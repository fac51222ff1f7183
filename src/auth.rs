//! Auth Collaborator
//!
//! Thin wrapper over the hosted auth provider. The rest of the app consumes
//! three things: the current user, the admin flag, and sign-out. Mutating
//! operations call [`AuthContext::require_admin`] once at their boundary
//! instead of scattering conditional checks through presentation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config;
use crate::models::User;

/// Why a guarded operation was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    NotSignedIn,
    NotAdmin,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::NotSignedIn => write!(f, "Not signed in"),
            AuthError::NotAdmin => write!(f, "Admin access required"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Session state provided via context at the app root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<User>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    /// A context that starts with `user` already signed in.
    #[cfg(test)]
    pub(crate) fn signed_in(user: User) -> Self {
        Self {
            user: RwSignal::new(Some(user)),
        }
    }

    /// Revalidate a stored session against the auth provider. Any failure
    /// leaves the app signed out; an expired token is also cleared.
    pub fn restore(self) {
        let Some(token) = stored_token() else {
            return;
        };
        spawn_local(async move {
            match api::session::fetch_user(&token).await {
                Ok(user) => self.user.set(Some(user)),
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("Session restore failed: {err}").into(),
                    );
                    clear_stored_token();
                }
            }
        });
    }

    /// Reactive read of the signed-in user.
    pub fn current_user(&self) -> Option<User> {
        self.user.get()
    }

    /// Reactive admin flag, for gating admin-only markup.
    pub fn is_admin(&self) -> bool {
        self.user
            .get()
            .map(|user| role_is_admin(&user.app_metadata))
            .unwrap_or(false)
    }

    /// Capability check at the boundary of every mutating operation.
    /// Untracked: guards run inside event handlers, not reactive scopes.
    pub fn require_admin(&self) -> Result<(), AuthError> {
        match self.user.get_untracked() {
            None => Err(AuthError::NotSignedIn),
            Some(user) if role_is_admin(&user.app_metadata) => Ok(()),
            Some(_) => Err(AuthError::NotAdmin),
        }
    }

    /// End the session with the provider and locally.
    pub fn sign_out(self) {
        let token = stored_token();
        self.user.set(None);
        clear_stored_token();
        spawn_local(async move {
            if let Some(token) = token {
                if let Err(err) = api::session::logout(&token).await {
                    web_sys::console::warn_1(&format!("Sign out failed: {err}").into());
                }
            }
        });
    }
}

/// Admin role lives in the provider-managed `app_metadata`.
pub fn role_is_admin(app_metadata: &serde_json::Value) -> bool {
    app_metadata
        .get("role")
        .and_then(|role| role.as_str())
        .map(|role| role == "admin")
        .unwrap_or(false)
}

/// Access token from browser local storage, if a session was saved.
pub fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(config::SESSION_STORAGE_KEY).ok()?
}

fn clear_stored_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(config::SESSION_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_admin_role_detected() {
        assert!(role_is_admin(&json!({ "role": "admin" })));
    }

    #[test]
    fn test_other_roles_rejected() {
        assert!(!role_is_admin(&json!({ "role": "editor" })));
        assert!(!role_is_admin(&json!({})));
        assert!(!role_is_admin(&json!(null)));
        assert!(!role_is_admin(&json!({ "role": 3 })));
    }
}
