//! # Error types
//!
//! This module contains the error types for the [`pubnub_publish`] crate.
//!
//! [`pubnub_publish`]: ../index.html

use snafu::Snafu;

/// PubNub error type
///
/// This type is used to represent errors that can occur while a message is
/// prepared, sent to the [`PubNub API`] and its acknowledgement is decoded.
/// It is used as the error type for the [`Result`] type.
///
/// Callers are expected to branch on the variant: [`InvalidArgument`] means
/// that the request should be fixed before retrying, while
/// [`MalformedResponse`] and [`Transport`] point at the network or the
/// service.
///
/// # Examples
/// ```
/// use pubnub_publish::core::PubNubError;
///
/// fn foo() -> Result<(), PubNubError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   PubNubError::Transport { .. } => println!("Transport error"),
///   PubNubError::InvalidArgument { .. } => println!("Fix the request"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
/// [`PubNub API`]: https://www.pubnub.com/docs
/// [`InvalidArgument`]: PubNubError::InvalidArgument
/// [`MalformedResponse`]: PubNubError::MalformedResponse
/// [`Transport`]: PubNubError::Transport
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
pub enum PubNubError {
    /// this error is returned when the transport layer fails
    #[snafu(display("Transport error: {details}"))]
    Transport {
        /// Error details
        details: String,
    },

    /// this error is returned when the request can't be created from the
    /// provided arguments
    ///
    /// Missing message, empty channel, missing publish key and values which
    /// can't be serialized end up here. No network call is made.
    #[snafu(display("Invalid argument: {details}"))]
    InvalidArgument {
        /// Error details
        details: String,
    },

    /// this error is returned when the service response doesn't follow the
    /// expected format
    #[snafu(display("Malformed response: {details}"))]
    MalformedResponse {
        /// Error details
        details: String,
    },

    /// this error is returned when the serialization of the value fails
    #[snafu(display("Serialization error: {details}"))]
    Serialization {
        /// Error details
        details: String,
    },

    /// this error is returned when the deserialization of the response fails
    #[snafu(display("Deserialization error: {details}"))]
    Deserialization {
        /// Error details
        details: String,
    },

    /// this error is returned when the initialization of client fails
    #[snafu(display("Client initialization error: {details}"))]
    ClientInitialization {
        /// Error details
        details: String,
    },

    /// this error is returned when the crypto provider can't be created
    #[snafu(display("Cryptor initialization error: {details}"))]
    CryptoInitialization {
        /// Error details
        details: String,
    },

    /// this error is returned when the data encryption fails
    #[snafu(display("Data encryption error: {details}"))]
    Encryption {
        /// Error details
        details: String,
    },

    /// this error is returned when the data decryption fails
    #[snafu(display("Data decryption error: {details}"))]
    Decryption {
        /// Error details
        details: String,
    },

    /// this error is returned when the [`PubNub API`] reports a service error
    ///
    /// [`PubNub API`]: https://www.pubnub.com/docs
    #[snafu(display("REST API error: {message}"))]
    API {
        /// HTTP status code of the response
        status: u16,

        /// Message reported by the service
        message: String,

        /// Service which reported the error
        service: Option<String>,
    },
}

impl PubNubError {
    /// Create [`PubNubError::InvalidArgument`] from anything printable.
    pub(crate) fn invalid_argument<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        PubNubError::InvalidArgument {
            details: details.into(),
        }
    }

    /// Create [`PubNubError::MalformedResponse`] from anything printable.
    pub(crate) fn malformed_response<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        PubNubError::MalformedResponse {
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn display_details() {
        let error = PubNubError::invalid_argument("Channel can't be empty");

        assert_eq!(error.to_string(), "Invalid argument: Channel can't be empty");
    }

    #[test]
    fn display_api_message() {
        let error = PubNubError::API {
            status: 403,
            message: "Forbidden".into(),
            service: Some("Access Manager".into()),
        };

        assert_eq!(error.to_string(), "REST API error: Forbidden");
    }
}
