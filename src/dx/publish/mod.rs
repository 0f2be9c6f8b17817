//! Publish module.
//!
//! Publish message to a channel.
//! The publish module contains the [`PublishRequest`] type which describes a
//! single message to publish and the [`PublishResult`] returned by the
//! [`PubNub`] network for it.
//!
//! Each call validates the request, serializes the message (and encrypts it
//! when a cryptor is configured), assembles query parameters, picks the
//! request shape and makes exactly one network call.
//!
//! [`PubNub`]: https://www.pubnub.com/

#[doc(inline)]
pub use result::PublishResult;
pub mod result;

#[doc(inline)]
pub use payload::EncodedPayload;
pub mod payload;

#[doc(inline)]
pub use shape::PublishShape;
pub mod shape;

mod parameters;

use crate::{
    core::{CryptoProvider, Deserializer, PubNubError, Serialize, Transport, TransportRequest},
    dx::pubnub_client::{PubNubClientInstance, PubNubConfig},
};
use log::debug;

/// Message which should be published to a channel.
///
/// Optional fields left as `None` fall back to the [`PubNub API`] defaults.
///
/// # Example
/// ```
/// use pubnub_publish::PublishRequest;
///
/// let request = PublishRequest {
///     store: Some(false),
///     use_post: Some(true),
///     ..PublishRequest::new("Hello, world!", "my_channel")
/// };
/// ```
///
/// [`PubNub API`]: https://www.pubnub.com/docs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest<M, Meta = serde_json::Value> {
    /// Message to publish.
    pub message: Option<M>,

    /// Name of the target channel.
    pub channel: String,

    /// Whether the message should be stored in history.
    pub store: Option<bool>,

    /// Whether the message should be sent in the request body.
    pub use_post: Option<bool>,

    /// Metadata which can be used to filter messages.
    pub meta: Option<Meta>,

    /// How many hours the message should be kept in history.
    pub ttl: Option<u32>,

    /// Whether the message should be replicated to other data centers.
    pub replicate: Option<bool>,
}

impl<M> PublishRequest<M> {
    /// Create request to publish `message` to `channel`.
    pub fn new<S>(message: M, channel: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: Some(message),
            channel: channel.into(),
            ..Default::default()
        }
    }
}

impl<M, Meta> PublishRequest<M, Meta> {
    /// Attach metadata of any serializable type.
    pub fn with_meta<X>(self, meta: X) -> PublishRequest<M, X> {
        PublishRequest {
            message: self.message,
            channel: self.channel,
            store: self.store,
            use_post: self.use_post,
            meta: Some(meta),
            ttl: self.ttl,
            replicate: self.replicate,
        }
    }
}

impl<M, Meta> Default for PublishRequest<M, Meta> {
    fn default() -> Self {
        Self {
            message: None,
            channel: String::new(),
            store: None,
            use_post: None,
            meta: None,
            ttl: None,
            replicate: None,
        }
    }
}

impl<M, Meta> PublishRequest<M, Meta>
where
    M: Serialize,
    Meta: Serialize,
{
    /// Turn request into [`TransportRequest`] without touching the network.
    ///
    /// # Errors
    /// Returns [`PubNubError::InvalidArgument`] when the message is missing,
    /// the channel is empty, the publish key isn't configured or the message
    /// or metadata can't be serialized. A message which serializes to `null`
    /// counts as missing. Metadata which serializes to `null` is left out.
    pub fn prepare(
        self,
        config: &PubNubConfig,
        cryptor: Option<&dyn CryptoProvider>,
    ) -> Result<TransportRequest, PubNubError> {
        let message = self
            .message
            .ok_or_else(|| PubNubError::invalid_argument("Message can't be empty"))?;

        if self.channel.is_empty() {
            return Err(PubNubError::invalid_argument("Channel can't be empty"));
        }

        let publish_key = config
            .publish_key
            .as_deref()
            .ok_or_else(|| PubNubError::invalid_argument("Publish key is not set"))?;

        let payload = EncodedPayload::encode(message, cryptor)?;
        let meta = self
            .meta
            .map(payload::encode_value)
            .transpose()
            .map_err(|err| PubNubError::invalid_argument(format!("Metadata: {err}")))?
            .filter(|meta| meta != payload::NULL);

        let query_parameters =
            parameters::assemble(config, self.store, self.ttl, self.replicate, meta);
        let shape = PublishShape::choose(self.use_post);

        debug!("Publishing to '{}' with payload in {shape}", self.channel);

        Ok(TransportRequest {
            connect_timeout: Some(config.transport.connect_timeout()),
            request_timeout: Some(config.transport.request_timeout()),
            ..shape.transport_request(
                publish_key,
                &config.subscribe_key,
                &self.channel,
                &payload,
                query_parameters,
            )
        })
    }

    /// Publish the message and decode the service acknowledgement.
    ///
    /// Invalid requests fail before the `transport` is called.
    pub async fn execute<T, D>(
        self,
        config: &PubNubConfig,
        cryptor: Option<&dyn CryptoProvider>,
        transport: &T,
        deserializer: &D,
    ) -> Result<PublishResult, PubNubError>
    where
        T: Transport,
        D: Deserializer,
    {
        let request = self.prepare(config, cryptor)?;
        let response = transport.send(request).await?;

        result::decode_response(response, deserializer)
    }

    /// Blocking version of [`execute`](Self::execute).
    #[cfg(feature = "blocking")]
    pub fn execute_blocking<T, D>(
        self,
        config: &PubNubConfig,
        cryptor: Option<&dyn CryptoProvider>,
        transport: &T,
        deserializer: &D,
    ) -> Result<PublishResult, PubNubError>
    where
        T: crate::core::blocking::Transport,
        D: Deserializer,
    {
        let request = self.prepare(config, cryptor)?;
        let response = transport.send(request)?;

        result::decode_response(response, deserializer)
    }
}

impl<T, D> PubNubClientInstance<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Publish a message to a channel.
    ///
    /// # Example
    /// ```no_run
    /// # use pubnub_publish::{PubNubClientBuilder, Keyset, PublishRequest};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let pubnub = // PubNubClient
    /// # PubNubClientBuilder::with_reqwest_transport()
    /// #     .with_keyset(Keyset{
    /// #         subscribe_key: "demo",
    /// #         publish_key: Some("demo"),
    /// #      })
    /// #     .with_user_id("uuid")
    /// #     .build()?;
    ///
    /// let result = pubnub
    ///     .publish(PublishRequest::new("Hello, world!", "my_channel"))
    ///     .await?;
    ///
    /// println!("Published at {}", result.timetoken);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn publish<M, Meta>(
        &self,
        request: PublishRequest<M, Meta>,
    ) -> Result<PublishResult, PubNubError>
    where
        M: Serialize,
        Meta: Serialize,
    {
        request
            .execute(
                &self.config,
                self.cryptor.as_deref(),
                &self.transport,
                self.deserializer.as_ref(),
            )
            .await
    }
}

#[cfg(feature = "blocking")]
impl<T, D> PubNubClientInstance<T, D>
where
    T: crate::core::blocking::Transport,
    D: Deserializer,
{
    /// Publish a message to a channel and block until acknowledged.
    ///
    /// # Example
    /// ```no_run
    /// # use pubnub_publish::{PubNubClientBuilder, Keyset, PublishRequest};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let pubnub = // PubNubClient
    /// # PubNubClientBuilder::with_reqwest_blocking_transport()
    /// #     .with_keyset(Keyset{
    /// #         subscribe_key: "demo",
    /// #         publish_key: Some("demo"),
    /// #      })
    /// #     .with_user_id("uuid")
    /// #     .build()?;
    ///
    /// pubnub.publish_blocking(PublishRequest::new("Hello, world!", "my_channel"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn publish_blocking<M, Meta>(
        &self,
        request: PublishRequest<M, Meta>,
    ) -> Result<PublishResult, PubNubError>
    where
        M: Serialize,
        Meta: Serialize,
    {
        request.execute_blocking(
            &self.config,
            self.cryptor.as_deref(),
            &self.transport,
            self.deserializer.as_ref(),
        )
    }
}
