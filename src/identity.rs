//! Authenticated-identity extraction.
//!
//! The identity provider sits in front of this service as an
//! authenticating proxy. For every request it has authenticated it
//! forwards the subject id and basic profile fields as headers; this
//! service never sees credentials, sessions, or tokens. The extractor
//! turns those headers into an explicit [`Identity`] value that is passed
//! into every workflow call, so nothing in the core reads ambient
//! request state.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub const SUBJECT_HEADER: &str = "x-identity-subject";
pub const EMAIL_HEADER: &str = "x-identity-email";
pub const GIVEN_NAME_HEADER: &str = "x-identity-given-name";
pub const FAMILY_NAME_HEADER: &str = "x-identity-family-name";

/// The authenticated caller, as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Opaque stable subject identifier.
    pub subject: String,
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

impl Identity {
    /// Display name composed from the provider's profile fields, or None
    /// when the provider supplied no given name.
    pub fn display_name(&self) -> Option<String> {
        let given = self.given_name.as_deref()?;
        let composed = match self.family_name.as_deref() {
            Some(family) => format!("{given} {family}"),
            None => given.to_string(),
        };
        Some(composed.trim().to_string())
    }
}

/// Optional identity extractor: `None` means the request reached us
/// unauthenticated, which the workflows translate into their own error.
#[derive(Clone, Debug)]
pub struct MaybeIdentity(pub Option<Identity>);

fn header_string(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = header_string(parts, SUBJECT_HEADER).map(|subject| Identity {
            subject,
            email: header_string(parts, EMAIL_HEADER),
            given_name: header_string(parts, GIVEN_NAME_HEADER),
            family_name: header_string(parts, FAMILY_NAME_HEADER),
        });

        Ok(Self(identity))
    }
}
