//! # Error response
//!
//! The module contains a result type that represents parsed service error
//! responses for [`PubNubError`] consumption.

use crate::core::PubNubError;

/// Error description.
///
/// This structure used by [`APIErrorBody::AsObjectWithErrorObject`] to
/// represent error in response.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorObject {
    /// A message explaining what went wrong.
    message: String,

    /// Service / sub-system which reported an error.
    source: String,
}

/// PubNub service error response.
///
/// `ErrorResponse` enum variants covers [`PubNub API`] error responses which
/// can be received from the publish endpoint.
///
/// [`PubNub API`]: https://www.pubnub.com/docs
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum APIErrorBody {
    /// Error response in format of an array.
    ///
    /// Such data includes information about when the error occurred.
    ///
    /// # Example
    /// ```json
    /// [0,"Message Too Large","15782702375048763"]
    /// ```
    AsArray3(u8, String, Option<String>),

    /// Error response in format of an array.
    ///
    /// # Example
    /// ```json
    /// [0,"Invalid Key"]
    /// ```
    AsArray2(u8, String),

    /// Error response in format of dictionary.
    ///
    /// # Example
    /// ```json
    /// {
    ///     "message": "Forbidden",
    ///     "error": true,
    ///     "service": "Access Manager",
    ///     "status": 403
    /// }
    /// ```
    AsObjectWithService {
        /// Operation status (HTTP) code.
        status: u16,

        /// Whether service reported error or not.
        error: bool,

        /// Service / sub-system which reported an error.
        service: String,

        /// A message explaining what went wrong.
        message: String,
    },

    /// Error response in format of dictionary with error object.
    ///
    /// # Example
    /// ```json
    /// {
    ///     "error": {
    ///         "message": "Invalid Subscribe Key",
    ///         "source": "publish"
    ///     },
    ///     "service": "Publish",
    ///     "status": 400
    /// }
    /// ```
    AsObjectWithErrorObject {
        /// Operation status (HTTP) code.
        status: u16,

        /// Error information.
        error: ErrorObject,

        /// Service / sub-system which reported an error.
        service: String,
    },

    /// Error response with message only.
    ///
    /// # Example
    /// ```json
    /// { "message": "Invalid JSON" }
    /// ```
    AsObjectWithMessage {
        /// A message explaining what went wrong.
        message: String,
    },
}

impl APIErrorBody {
    /// Message which explains the failure reason.
    pub fn message(&self) -> String {
        match self {
            APIErrorBody::AsArray3(_, message, _)
            | APIErrorBody::AsArray2(_, message)
            | APIErrorBody::AsObjectWithService { message, .. }
            | APIErrorBody::AsObjectWithMessage { message } => message.clone(),
            APIErrorBody::AsObjectWithErrorObject { error, .. } => error.message.clone(),
        }
    }

    /// Service / sub-system which reported an error.
    pub fn service(&self) -> Option<String> {
        match self {
            APIErrorBody::AsObjectWithService { service, .. }
            | APIErrorBody::AsObjectWithErrorObject { service, .. } => Some(service.clone()),
            _ => None,
        }
    }

    /// Build [`PubNubError::API`] with response status as fallback.
    ///
    /// Status code from the body has higher priority than the one from the
    /// transport response.
    pub(crate) fn into_error(self, response_status: u16) -> PubNubError {
        let status = match &self {
            APIErrorBody::AsObjectWithService { status, .. }
            | APIErrorBody::AsObjectWithErrorObject { status, .. } => *status,
            _ => response_status,
        };

        PubNubError::API {
            status,
            message: self.message(),
            service: self.service(),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test_case(r#"[0,"Invalid Key"]"#, "Invalid Key", None; "two elements array")]
    #[test_case(r#"[0,"Message Too Large","15782702375048763"]"#, "Message Too Large", None; "three elements array")]
    #[test_case(
        r#"{"message":"Forbidden","error":true,"service":"Access Manager","status":403}"#,
        "Forbidden",
        Some("Access Manager".into());
        "object with service"
    )]
    #[test_case(
        r#"{"error":{"message":"Invalid Subscribe Key","source":"publish"},"service":"Publish","status":400}"#,
        "Invalid Subscribe Key",
        Some("Publish".into());
        "object with error object"
    )]
    #[test_case(r#"{"message":"Invalid JSON"}"#, "Invalid JSON", None; "object with message")]
    fn parse_error_body(body: &str, message: &str, service: Option<String>) {
        let parsed: APIErrorBody = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.message(), message);
        assert_eq!(parsed.service(), service);
    }

    #[test]
    fn prefer_status_from_body() {
        let body = APIErrorBody::AsObjectWithService {
            status: 403,
            error: true,
            service: "Access Manager".into(),
            message: "Forbidden".into(),
        };

        assert!(matches!(
            body.into_error(400),
            PubNubError::API { status: 403, .. }
        ));
    }

    #[test]
    fn use_response_status_for_arrays() {
        let body = APIErrorBody::AsArray2(0, "Invalid Key".into());

        assert!(matches!(
            body.into_error(400),
            PubNubError::API { status: 400, .. }
        ));
    }
}
