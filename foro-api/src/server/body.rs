use crate::server::{ServerError, json::Json};
use axum::{
    Form,
    extract::{FromRequest, Request},
};
use headers::{ContentType, HeaderMapExt};
use serde::de::DeserializeOwned;

/// A request body sent either as JSON or as an urlencoded form.
///
/// Anything that is not declared as a form goes through the JSON
/// extractor, which also reports a missing or foreign content type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Body<T>(pub T);

impl<S, T> FromRequest<S> for Body<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ServerError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&request) {
            let Form(value) = Form::<T>::from_request(request, state).await?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(request, state).await?;
            Ok(Self(value))
        }
    }
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .typed_get::<ContentType>()
        .is_some_and(|content_type| {
            content_type
                .to_string()
                .starts_with("application/x-www-form-urlencoded")
        })
}
