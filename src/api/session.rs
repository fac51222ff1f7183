//! Auth Session Calls
//!
//! The two provider calls the app needs: revalidate a stored token into a
//! user, and end a session. Everything else about the provider is opaque.

use super::{check, http, ApiError};
use crate::config;
use crate::models::User;

fn auth_url(path: &str) -> String {
    format!("{}/auth/v1/{path}", config::SUPABASE_URL)
}

/// Resolve an access token into the signed-in user.
pub async fn fetch_user(token: &str) -> Result<User, ApiError> {
    let resp = check(
        http()
            .get(auth_url("user"))
            .header("apikey", config::SUPABASE_ANON_KEY)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?,
    )
    .await?;
    resp.json::<User>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Invalidate the session server-side.
pub async fn logout(token: &str) -> Result<(), ApiError> {
    check(
        http()
            .post(auth_url("logout"))
            .header("apikey", config::SUPABASE_ANON_KEY)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?,
    )
    .await?;
    Ok(())
}
