//! Publish result module.
//!
//! This module contains the [`PublishResult`] type and the decoding of the
//! service acknowledgement.

use crate::core::{APIErrorBody, Deserializer, PubNubError, TransportResponse};
use serde_json::Value;

/// The result of a publish operation.
/// It contains the timetoken of the published message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublishResult {
    /// The timetoken of the published message.
    pub timetoken: u64,
}

/// Turn the service response into [`PublishResult`].
///
/// Successful acknowledgement is an array `[status, description, timetoken]`
/// and only the timetoken is used. It may be sent as a number or as a string.
pub(crate) fn decode_response<D>(
    response: TransportResponse,
    deserializer: &D,
) -> Result<PublishResult, PubNubError>
where
    D: Deserializer,
{
    if response.status >= 400 {
        return Err(api_error(response, deserializer));
    }

    let body = response
        .body
        .filter(|body| !body.is_empty())
        .ok_or_else(|| PubNubError::malformed_response("Response body is empty"))?;

    let elements: Vec<Value> = deserializer
        .deserialize(&body)
        .map_err(|err| PubNubError::malformed_response(err.to_string()))?;

    elements
        .get(2)
        .ok_or_else(|| {
            PubNubError::malformed_response(format!(
                "Expected at least 3 elements, got {}",
                elements.len()
            ))
        })
        .and_then(|value| {
            parse_timetoken(value).ok_or_else(|| {
                PubNubError::malformed_response(format!("Timetoken is not an integer: {value}"))
            })
        })
        .map(|timetoken| PublishResult { timetoken })
}

fn parse_timetoken(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(string) => string.parse().ok(),
        _ => None,
    }
}

fn api_error<D>(response: TransportResponse, deserializer: &D) -> PubNubError
where
    D: Deserializer,
{
    let status = response.status;

    match response.body {
        Some(body) => match deserializer.deserialize::<APIErrorBody>(&body) {
            Ok(error_body) => error_body.into_error(status),
            Err(_) => PubNubError::API {
                status,
                message: String::from_utf8_lossy(&body).into_owned(),
                service: None,
            },
        },
        None => PubNubError::API {
            status,
            message: format!("HTTP status {status}"),
            service: None,
        },
    }
}
