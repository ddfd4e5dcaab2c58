//! Maps domain errors onto HTTP responses.
//!
//! Status codes follow the [`ErrorCode`]; bodies are the serialised domain
//! error with internal failures reduced to a generic message.

use actix_web::http::StatusCode;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result type returned by cash card handlers.
pub type ApiResult<T> = Result<T, Error>;

/// `WWW-Authenticate` value attached to 401 responses.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"cashcard\"";

const REDACTED_MESSAGE: &str = "Internal server error";

/// Body sent to the client: internal errors keep only their trace id.
fn client_view(err: &Error) -> Error {
    match (err.code(), err.trace_id()) {
        (ErrorCode::InternalError, Some(trace_id)) => {
            Error::internal(REDACTED_MESSAGE).with_trace_id(trace_id.to_owned())
        }
        (ErrorCode::InternalError, None) => Error::internal(REDACTED_MESSAGE),
        _ => err.clone(),
    }
}

fn attach_trace_id(builder: &mut HttpResponseBuilder, err: &Error) {
    let Some(trace_id) = err.trace_id() else {
        return;
    };
    match HeaderValue::from_str(trace_id) {
        Ok(value) => {
            builder.insert_header((TRACE_ID_HEADER, value));
        }
        Err(encode_err) => error!(%encode_err, "trace id is not a valid header value"),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        attach_trace_id(&mut builder, self);
        if self.code() == ErrorCode::Unauthorized {
            builder.insert_header((
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(BASIC_CHALLENGE),
            ));
        }
        builder.json(client_view(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "unexpected framework error");
        Self::internal(REDACTED_MESSAGE)
    }
}
