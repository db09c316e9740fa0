//! Request extractors for the `text` field.
//!
//! [`FormText`] reads a urlencoded or multipart form. [`PayloadText`] reads a
//! JSON body when the request is JSON and otherwise behaves like
//! [`FormText`]. Both are infallible: anything unreadable yields empty text,
//! and the handlers decide what empty text means.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header,
    Form, Json,
};
use serde::Deserialize;
use serde_json::Value;

const TEXT_FIELD: &str = "text";

#[derive(Debug, Default, Deserialize)]
struct TextForm {
    #[serde(default)]
    text: String,
}

/// Media type of the request without parameters, lowercased.
fn essence(req: &Request) -> String {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

fn is_json(essence: &str) -> bool {
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

async fn multipart_text(mut multipart: Multipart) -> String {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some(TEXT_FIELD) {
            return field.text().await.unwrap_or_default();
        }
    }
    String::new()
}

/// `text` from a urlencoded or multipart form body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormText(pub String);

#[async_trait]
impl<S> FromRequest<S> for FormText
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let text = if essence(&req) == "multipart/form-data" {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => multipart_text(multipart).await,
                Err(e) => {
                    tracing::debug!("Unreadable multipart body: {}", e);
                    String::new()
                }
            }
        } else {
            Form::<TextForm>::from_request(req, state)
                .await
                .map(|Form(form)| form.text)
                .unwrap_or_default()
        };
        Ok(Self(text))
    }
}

/// `text` from a JSON body, or from the form for non-JSON requests.
///
/// A JSON body that does not parse, or whose `text` is not a string, yields
/// empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadText(pub String);

#[async_trait]
impl<S> FromRequest<S> for PayloadText
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(&essence(&req)) {
            let FormText(text) = FormText::from_request(req, state).await?;
            return Ok(Self(text));
        }

        let text = Json::<Value>::from_request(req, state)
            .await
            .ok()
            .and_then(|Json(payload)| {
                payload
                    .get(TEXT_FIELD)
                    .and_then(Value::as_str)
                    .map(String::from)
            })
            .unwrap_or_default();
        Ok(Self(text))
    }
}
