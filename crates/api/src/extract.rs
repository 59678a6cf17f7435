//! Request extractors whose rejections render as [`AppError`] JSON.
//!
//! axum's own `Query` and `Path` reject with plain-text bodies. These wrappers
//! route every failure through [`AppError`] so clients always get
//! `{ error, code }`.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Query-string extractor that tolerates repeated keys.
///
/// The first occurrence of a key wins (`?page=1&page=2` reads as `page=1`);
/// later ones are discarded before `T` is deserialized. `T` should capture
/// raw strings so that no value can fail to parse here.
#[derive(Debug, Clone)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;

        let mut first_values = Map::new();
        for (key, value) in pairs {
            first_values.entry(key).or_insert(Value::String(value));
        }

        let params = T::deserialize(Value::Object(first_values))
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {e}")))?;
        Ok(Self(params))
    }
}

/// Path extractor with JSON rejections (e.g. `%FF` in a segment).
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
