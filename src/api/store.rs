//! Remote Collection Operations
//!
//! Generic CRUD over the data store's REST surface (`/rest/v1/{table}`),
//! parameterized by a [`Collection`]. Writes ask for the affected rows back
//! (`Prefer: return=representation`); an empty result on a row-targeted
//! write means the id matched nothing and is reported as such.

use serde::Serialize;

use super::{check, http, store_headers, ApiError, Collection};
use crate::config;

fn table_url<C: Collection>() -> String {
    format!("{}/rest/v1/{}", config::SUPABASE_URL, C::TABLE)
}

/// Body for the featured-flag partial update.
fn featured_body(featured: bool) -> serde_json::Value {
    serde_json::json!({ "featured": featured })
}

/// A row-targeted write echoes the affected rows back; an empty echo means
/// the id matched nothing.
fn single_row<T>(mut rows: Vec<T>, id: &str) -> Result<T, ApiError> {
    match rows.pop() {
        Some(row) => Ok(row),
        None => Err(ApiError::NotFound(id.to_string())),
    }
}

/// All rows of the collection, newest first. No pagination by design.
pub async fn fetch_all<C: Collection>() -> Result<Vec<C::Record>, ApiError> {
    let url = format!("{}?select=*&order=created_at.desc", table_url::<C>());
    let resp = check(store_headers(http().get(&url)).send().await?).await?;
    resp.json::<Vec<C::Record>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Insert one row; the store assigns `id` and `created_at`.
pub async fn insert<C: Collection>(payload: &C::Payload) -> Result<C::Record, ApiError> {
    let resp = check(
        store_headers(http().post(&table_url::<C>()))
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?,
    )
    .await?;
    let mut rows = resp
        .json::<Vec<C::Record>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    match rows.pop() {
        Some(row) => Ok(row),
        None => Err(ApiError::Decode("insert returned no row".to_string())),
    }
}

/// Full-field update of one row by id.
pub async fn update<C: Collection>(id: &str, payload: &C::Payload) -> Result<C::Record, ApiError> {
    patch::<C, _>(id, payload).await
}

/// Partial update flipping only the `featured` flag.
pub async fn set_featured<C: Collection>(id: &str, featured: bool) -> Result<C::Record, ApiError> {
    patch::<C, _>(id, &featured_body(featured)).await
}

async fn patch<C: Collection, B: Serialize + ?Sized>(
    id: &str,
    body: &B,
) -> Result<C::Record, ApiError> {
    let url = format!("{}?id=eq.{id}", table_url::<C>());
    let resp = check(
        store_headers(http().patch(&url))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?,
    )
    .await?;
    let rows = resp
        .json::<Vec<C::Record>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    single_row(rows, id)
}

/// Delete one row by id. Deleting an unknown id is an error, not a no-op.
pub async fn delete<C: Collection>(id: &str) -> Result<(), ApiError> {
    let url = format!("{}?id=eq.{id}", table_url::<C>());
    let resp = check(
        store_headers(http().delete(&url))
            .header("Prefer", "return=representation")
            .send()
            .await?,
    )
    .await?;
    let rows = resp
        .json::<Vec<C::Record>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    single_row(rows, id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_write_matching_no_row_is_not_found() {
        let err = single_row::<Value>(vec![], "a9").unwrap_err();
        assert!(matches!(&err, ApiError::NotFound(id) if id == "a9"));
        assert_eq!(err.to_string(), "no row with id a9");
    }

    #[test]
    fn test_write_returns_affected_row() {
        let row = single_row(vec![json!({ "id": "a1" })], "a1").unwrap();
        assert_eq!(row["id"], "a1");
    }

    #[test]
    fn test_flipping_featured_twice_restores_flag() {
        for initial in [true, false] {
            let once = featured_body(!initial)["featured"].as_bool().unwrap();
            let twice = featured_body(!once)["featured"].as_bool().unwrap();
            assert_eq!(twice, initial);
        }
    }

    #[test]
    fn test_featured_body_touches_only_featured() {
        let body = featured_body(true);
        assert_eq!(body, json!({ "featured": true }));
    }
}
