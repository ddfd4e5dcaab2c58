//! HTTP Basic authentication for the cash card endpoints.
//!
//! [`CardOwner`] decodes the `Authorization` header, checks it through the
//! [`crate::domain::ports::LoginService`] port and only lets card owners
//! through. Missing or wrong credentials yield 401, authenticated accounts
//! without the card owner role yield 403.

use actix_web::dev::Payload;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{FromRequest, HttpRequest, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::{Error, LoginCredentials, Owner};

use super::state::HttpState;

const BASIC_SCHEME: &str = "basic";

fn invalid_credentials() -> Error {
    Error::unauthorized("invalid credentials")
}

/// Decode an `Authorization: Basic ...` header into credentials.
pub(crate) fn parse_basic_credentials(value: Option<&HeaderValue>) -> Result<LoginCredentials, Error> {
    let raw = value
        .ok_or_else(|| Error::unauthorized("authentication required"))?
        .to_str()
        .map_err(|_| invalid_credentials())?;
    let (scheme, encoded) = raw
        .trim()
        .split_once(' ')
        .ok_or_else(invalid_credentials)?;
    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
        return Err(invalid_credentials());
    }
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| invalid_credentials())?;
    let pair = String::from_utf8(decoded).map_err(|_| invalid_credentials())?;
    LoginCredentials::from_pair(&pair).map_err(|err| {
        debug!(%err, "malformed basic credentials");
        invalid_credentials()
    })
}

/// Authenticated caller holding the card owner role.
///
/// Use as a handler argument; the wrapped [`Owner`] scopes every card
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOwner(Owner);

impl CardOwner {
    pub fn owner(&self) -> &Owner {
        &self.0
    }
}

impl FromRequest for CardOwner {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = req.headers().get(header::AUTHORIZATION).cloned();
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let state = state.ok_or_else(|| Error::internal("HTTP state is not configured"))?;
            let credentials = parse_basic_credentials(header.as_ref())?;
            let user = state.login.authenticate(&credentials).await?;
            if !user.is_card_owner() {
                debug!(user = %user.owner(), "rejected caller without card owner role");
                return Err(Error::forbidden("card owner role required").into());
            }
            Ok(Self(user.into_owner()))
        })
    }
}
