//! Extractors whose rejections are rendered through [`crate::Error`], so a
//! malformed body, id or query string answers 422 with a `detail` message.

use axum::extract::{FromRequest, FromRequestParts};

use crate::Error;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct AppQuery<T>(pub T);
