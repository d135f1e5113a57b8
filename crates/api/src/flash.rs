//! Flash notice transport.
//!
//! Handlers never touch session state. They return a [`FlashRedirect`]
//! carrying an explicit [`Notice`]; its response sets a short-lived `flash`
//! cookie. The page rendered on the next request reads it through the
//! [`IncomingFlash`] extractor and clears it.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use inventory_core::notice::Notice;

/// Name of the cookie carrying the pending notice.
pub const FLASH_COOKIE: &str = "flash";

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

/// Encode a notice as a cookie-safe token (base64url of its JSON form).
pub fn encode_notice(notice: &Notice) -> Option<String> {
    serde_json::to_vec(notice)
        .ok()
        .map(|json| URL_SAFE_NO_PAD.encode(json))
}

/// Decode a token produced by [`encode_notice`]. Garbage yields `None`.
pub fn decode_notice(token: &str) -> Option<Notice> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Find and decode the flash cookie among the request's `Cookie` headers.
pub fn read_flash(headers: &HeaderMap) -> Option<Notice> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .and_then(|(_, token)| decode_notice(token))
}

/// `Set-Cookie` value storing `notice` for the next request.
pub fn set_cookie_value(notice: &Notice) -> Option<HeaderValue> {
    let token = encode_notice(notice)?;
    HeaderValue::from_str(&format!("{FLASH_COOKIE}={token}; {COOKIE_ATTRIBUTES}")).ok()
}

/// `Set-Cookie` value expiring the flash cookie.
pub fn clear_cookie_value() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// The notice (if any) left for this request by the previous response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingFlash(pub Option<Notice>);

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(read_flash(&parts.headers)))
    }
}

/// A `303 See Other` redirect with an optional notice for the next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashRedirect {
    pub to: String,
    pub notice: Option<Notice>,
}

impl FlashRedirect {
    /// Redirect without a notice.
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            to: path.into(),
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        let mut response = Redirect::to(&self.to).into_response();
        if let Some(value) = self.notice.as_ref().and_then(set_cookie_value) {
            response.headers_mut().append(SET_COOKIE, value);
        }
        response
    }
}
