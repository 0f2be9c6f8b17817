//! # PubNub middleware
//!
//! [`PubNubMiddleware`] wraps any transport and adds query parameters which
//! identify the client to each request.

use crate::core::{
    utils::encoding::url_encode, PubNubError, Transport, TransportRequest, TransportResponse,
};
use uuid::Uuid;

/// SDK name sent with `pnsdk` query parameter.
pub(crate) const SDK_ID: &str = "PubNub-Rust";

/// Crate version sent with `pnsdk` query parameter.
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transport decorator used by the [`PubNubClient`].
///
/// Parameters set by the publish operation (`uuid`, `auth`) are left intact.
///
/// [`PubNubClient`]: crate::dx::pubnub_client::PubNubClient
#[derive(Debug)]
pub struct PubNubMiddleware<T> {
    /// Wrapped transport.
    pub transport: T,

    /// Whether unique `requestid` should be added to each request.
    pub include_request_id: bool,

    /// Identifier of the client instance.
    pub instance_id: Option<String>,
}

impl<T> PubNubMiddleware<T> {
    fn prepare_request(&self, mut req: TransportRequest) -> TransportRequest {
        if self.include_request_id {
            req.query_parameters
                .insert("requestid".into(), Uuid::new_v4().to_string());
        }

        req.query_parameters.insert(
            "pnsdk".into(),
            url_encode(format!("{SDK_ID}/{VERSION}").as_bytes()),
        );

        if let Some(instance_id) = &self.instance_id {
            req.query_parameters
                .insert("instanceid".into(), url_encode(instance_id.as_bytes()));
        }

        req
    }
}

#[async_trait::async_trait]
impl<T> Transport for PubNubMiddleware<T>
where
    T: Transport,
{
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, PubNubError> {
        self.transport.send(self.prepare_request(req)).await
    }
}

#[cfg(feature = "blocking")]
impl<T> crate::core::blocking::Transport for PubNubMiddleware<T>
where
    T: crate::core::blocking::Transport,
{
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, PubNubError> {
        self.transport.send(self.prepare_request(req))
    }
}
