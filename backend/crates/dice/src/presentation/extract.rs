//! Request extractors

use axum::extract::FromRequest;

use crate::error::DiceError;

/// JSON body whose rejections render as [`DiceError`] problem documents
/// instead of axum's plain-text 4xx responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(DiceError))]
pub struct RollJson<T>(pub T);
