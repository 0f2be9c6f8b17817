//! Publish request shape.
//!
//! The message travels either in the request path ([`PublishShape::Get`]) or
//! in the request body ([`PublishShape::Post`]).

use crate::{
    core::{
        utils::{
            encoding::url_encode,
            headers::{APPLICATION_JSON, CONTENT_TYPE},
        },
        TransportMethod, TransportRequest,
    },
    dx::publish::EncodedPayload,
};
use std::{collections::HashMap, fmt::Display};

/// Physical form of the publish request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishShape {
    /// Payload percent-encoded into the last path segment.
    #[default]
    Get,

    /// Payload sent as JSON request body.
    Post,
}

impl PublishShape {
    /// `POST` is used only when explicitly requested.
    pub fn choose(use_post: Option<bool>) -> Self {
        match use_post {
            Some(true) => PublishShape::Post,
            _ => PublishShape::Get,
        }
    }

    pub(crate) fn transport_request(
        self,
        publish_key: &str,
        subscribe_key: &str,
        channel: &str,
        payload: &EncodedPayload,
        query_parameters: HashMap<String, String>,
    ) -> TransportRequest {
        let path = format!(
            "/publish/{publish_key}/{subscribe_key}/0/{}/0",
            url_encode(channel.as_bytes())
        );

        match self {
            PublishShape::Get => TransportRequest {
                path: format!("{path}/{}", url_encode(payload.wire_json().as_bytes())),
                query_parameters,
                method: TransportMethod::Get,
                ..Default::default()
            },
            PublishShape::Post => TransportRequest {
                path,
                query_parameters,
                method: TransportMethod::Post,
                headers: [(CONTENT_TYPE.into(), APPLICATION_JSON.into())].into(),
                body: Some(payload.wire_json().into_bytes()),
                ..Default::default()
            },
        }
    }
}

impl Display for PublishShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishShape::Get => write!(f, "path"),
            PublishShape::Post => write!(f, "body"),
        }
    }
}
