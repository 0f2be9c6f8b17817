//! PubNub client module
//!
//! This module contains the [`PubNubClient`] struct and the builders used to
//! create it.
//! It's used to publish messages to the [`PubNub API`].
//! It's intended to be used by the [`pubnub_publish`] crate.
//!
//! [`PubNub API`]: https://www.pubnub.com/docs
//! [`pubnub_publish`]: ../index.html

use derive_builder::Builder;
use log::info;
use std::{ops::Deref, sync::Arc, time::Duration};
use uuid::Uuid;

#[cfg(feature = "crypto")]
use crate::providers::crypto_aescbc::AesCbcCrypto;
#[cfg(feature = "reqwest")]
use crate::transport::TransportReqwest;
use crate::{
    core::{CryptoProvider, Deserializer, PubNubError},
    providers::deserialization_serde::DeserializerSerde,
    transport::middleware::PubNubMiddleware,
};

/// PubNub client
///
/// Client for the PubNub publish API.
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// You can create clients using the [`PubNubClientBuilder::with_transport`].
/// You must provide a valid [`Keyset`] with pub/sub keys and a string User ID
/// to identify the client.
///
/// # Examples
/// ```
/// use pubnub_publish::{Keyset, PubNubClientBuilder};
///
/// # use pubnub_publish::core::{Transport, TransportRequest, TransportResponse, PubNubError};
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, PubNubError> {
/// #         unimplemented!()
/// #     }
/// # }
/// # fn main() -> Result<(), PubNubError> {
/// // note that MyTransport must implement the `Transport` trait
/// let pubnub = PubNubClientBuilder::with_transport(MyTransport)
///    .with_keyset(Keyset {
///         publish_key: Some("pub-c-abc123"),
///         subscribe_key: "sub-c-abc123",
///    })
///    .with_user_id("my-user-id")
///    .build()?;
/// # Ok(())
/// # }
/// ```
///
/// [`Transport`]: crate::core::Transport
pub type PubNubGenericClient<T, D> = PubNubClientInstance<PubNubMiddleware<T>, D>;

/// PubNub client
///
/// Client for the PubNub publish API which uses [`reqwest`] as a transport
/// layer and [`serde`] for responses deserialization.
///
/// # Examples
/// ```
/// use pubnub_publish::{Keyset, PubNubClientBuilder};
///
/// # fn main() -> Result<(), pubnub_publish::core::PubNubError> {
/// let pubnub = PubNubClientBuilder::with_reqwest_transport()
///    .with_keyset(Keyset {
///         publish_key: Some("pub-c-abc123"),
///         subscribe_key: "sub-c-abc123",
///    })
///    .with_user_id("my-user-id")
///    .build()?;
/// # Ok(())
/// # }
/// ```
///
/// [`reqwest`]: https://crates.io/crates/reqwest
/// [`serde`]: https://crates.io/crates/serde
#[cfg(feature = "reqwest")]
pub type PubNubClient = PubNubGenericClient<TransportReqwest, DeserializerSerde>;

/// PubNub client raw instance.
///
/// Cheap to clone: all clones share the same immutable client state.
/// It shouldn't be used directly. Use [`PubNubGenericClient`] or
/// [`PubNubClient`] instead.
#[derive(Debug)]
pub struct PubNubClientInstance<T, D> {
    pub(crate) inner: Arc<PubNubClientRef<T, D>>,
}

impl<T, D> Deref for PubNubClientInstance<T, D> {
    type Target = PubNubClientRef<T, D>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, D> Clone for PubNubClientInstance<T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Client reference
///
/// This struct contains the actual client state. Nothing in it changes after
/// [`build`](PubNubClientConfigBuilder::build), so concurrent publish calls
/// don't need any synchronization.
///
/// Not intended to be used directly. Use [`PubNubClient`] instead.
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    name = "PubNubClientConfigBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct PubNubClientRef<T, D> {
    /// Transport layer
    #[builder(setter(custom))]
    pub(crate) transport: T,

    /// [`PubNub API`] responses deserializer
    ///
    /// [`PubNub API`]: https://www.pubnub.com/docs
    #[builder(setter(custom))]
    pub(crate) deserializer: Arc<D>,

    /// Data encryption provider
    ///
    /// When not set explicitly, it is created from the configured cipher key.
    #[builder(setter(custom), default = "None")]
    pub(crate) cryptor: Option<Arc<dyn CryptoProvider>>,

    /// Instance ID
    #[builder(setter(into), default = "Uuid::new_v4().to_string()")]
    pub(crate) instance_id: String,

    /// Configuration
    #[builder(setter(custom))]
    pub(crate) config: PubNubConfig,
}

impl<T, D> PubNubClientConfigBuilder<T, D> {
    /// Set client authentication key.
    ///
    /// The key is sent as `auth` query parameter with each publish call.
    pub fn with_auth_key<S>(mut self, auth_key: S) -> Self
    where
        S: Into<String>,
    {
        if let Some(configuration) = self.config.as_mut() {
            configuration.auth_key = Some(Arc::new(auth_key.into()));
        }

        self
    }

    /// Set the key used to encrypt published messages.
    ///
    /// An empty key makes [`build`](Self::build) fail.
    pub fn with_cipher_key<S>(mut self, cipher_key: S) -> Self
    where
        S: Into<String>,
    {
        if let Some(configuration) = self.config.as_mut() {
            configuration.cipher_key = Some(cipher_key.into());
        }

        self
    }

    /// Whether a random initialization vector should be used for encryption.
    ///
    /// **Default:** `false`
    pub fn with_random_iv(mut self, use_random_iv: bool) -> Self {
        if let Some(configuration) = self.config.as_mut() {
            configuration.use_random_iv = use_random_iv;
        }

        self
    }

    /// Time in seconds allowed to establish connection.
    pub fn with_connect_timeout(mut self, timeout: u64) -> Self {
        if let Some(configuration) = self.config.as_mut() {
            configuration.transport.connect_timeout = timeout;
        }

        self
    }

    /// Time in seconds allowed for the publish request to complete.
    pub fn with_request_timeout(mut self, timeout: u64) -> Self {
        if let Some(configuration) = self.config.as_mut() {
            configuration.transport.request_timeout = timeout;
        }

        self
    }

    /// Whether each request should carry unique `requestid` query parameter.
    pub fn with_request_id(mut self, include_request_id: bool) -> Self {
        if let Some(configuration) = self.config.as_mut() {
            configuration.include_request_id = include_request_id;
        }

        self
    }

    /// Data encryption provider.
    ///
    /// Takes precedence over [`with_cipher_key`](Self::with_cipher_key).
    pub fn with_cryptor<C>(mut self, cryptor: C) -> Self
    where
        C: CryptoProvider + 'static,
    {
        self.cryptor = Some(Some(Arc::new(cryptor)));

        self
    }

    /// Build a [`PubNubClient`] from the builder
    ///
    /// # Errors
    /// Returns [`PubNubError::ClientInitialization`] if required parts are
    /// missing and [`PubNubError::CryptoInitialization`] if the cipher key
    /// can't be used.
    pub fn build(self) -> Result<PubNubClientInstance<PubNubMiddleware<T>, D>, PubNubError> {
        let pre_build = self
            .build_internal()
            .map_err(|err| PubNubError::ClientInitialization {
                details: err.to_string(),
            })?;

        let cryptor = match pre_build.cryptor {
            Some(cryptor) => Some(cryptor),
            None => pre_build.config.cryptor()?,
        };

        info!(
            "Client Configuration: \n publish_key: {:?}\n subscribe_key: {}\n user_id: {}\n instance_id: {}\n encrypted: {}",
            pre_build.config.publish_key,
            pre_build.config.subscribe_key,
            pre_build.config.user_id,
            pre_build.instance_id,
            cryptor.is_some()
        );

        Ok(PubNubClientInstance {
            inner: Arc::new(PubNubClientRef {
                transport: PubNubMiddleware {
                    transport: pre_build.transport,
                    include_request_id: pre_build.config.include_request_id,
                    instance_id: Some(pre_build.instance_id.clone()),
                },
                deserializer: pre_build.deserializer,
                cryptor,
                instance_id: pre_build.instance_id,
                config: pre_build.config,
            }),
        })
    }
}

/// Transport specific configuration
///
/// Timeouts are passed with each request to the transport which is
/// responsible for applying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfiguration {
    /// Time in seconds allowed to establish connection with remote origin.
    pub connect_timeout: u64,

    /// Time in seconds after which publish request will be cancelled.
    pub request_timeout: u64,
}

impl TransportConfiguration {
    pub(crate) fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for TransportConfiguration {
    fn default() -> Self {
        Self {
            connect_timeout: 5,
            request_timeout: 10,
        }
    }
}

/// PubNub configuration
///
/// Configuration for [`PubNubClient`].
/// This struct separates the configuration from the actual client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubNubConfig {
    /// Subscribe key
    pub(crate) subscribe_key: String,

    /// Publish key
    pub(crate) publish_key: Option<String>,

    /// User ID
    pub(crate) user_id: Arc<String>,

    /// Authorization key
    pub(crate) auth_key: Option<Arc<String>>,

    /// Messages encryption key
    pub(crate) cipher_key: Option<String>,

    /// Whether random initialization vector should be used for encryption
    pub(crate) use_random_iv: bool,

    /// Whether each request should be marked with unique identifier
    pub(crate) include_request_id: bool,

    /// Transport configuration.
    pub transport: TransportConfiguration,
}

impl PubNubConfig {
    #[cfg(feature = "crypto")]
    fn cryptor(&self) -> Result<Option<Arc<dyn CryptoProvider>>, PubNubError> {
        self.cipher_key
            .as_ref()
            .map(|cipher_key| {
                AesCbcCrypto::new(cipher_key.as_str(), self.use_random_iv)
                    .map(|cryptor| Arc::new(cryptor) as Arc<dyn CryptoProvider>)
            })
            .transpose()
    }

    #[cfg(not(feature = "crypto"))]
    fn cryptor(&self) -> Result<Option<Arc<dyn CryptoProvider>>, PubNubError> {
        match self.cipher_key {
            Some(_) => Err(PubNubError::CryptoInitialization {
                details: "Cipher key requires the `crypto` feature or a custom cryptor".into(),
            }),
            None => Ok(None),
        }
    }
}

/// PubNub builder for [`PubNubClient`]
///
/// Builder for [`PubNubClient`] that is a first step to create a client.
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// See [`PubNubClient`] for more information.
///
/// [`Transport`]: crate::core::Transport
#[derive(Debug, Clone, Default)]
pub struct PubNubClientBuilder;

impl PubNubClientBuilder {
    /// Set the transport layer for the client.
    ///
    /// Returns [`PubNubClientDeserializerBuilder`] where the [`PubNub API`]
    /// responses deserializer or the keyset can be set.
    ///
    /// # Examples
    /// ```
    /// # use pubnub_publish::core::{Transport, TransportRequest, TransportResponse, PubNubError};
    /// use pubnub_publish::{Keyset, PubNubClientBuilder};
    /// #
    /// # struct MyTransport;
    /// # #[async_trait::async_trait]
    /// # impl Transport for MyTransport {
    /// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, PubNubError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let pubnub = PubNubClientBuilder::with_transport(MyTransport)
    ///     .with_keyset(Keyset {
    ///         publish_key: Some("pub-c-abc123"),
    ///         subscribe_key: "sub-c-abc123",
    ///     })
    ///     .with_user_id("my-user-id")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`PubNub API`]: https://www.pubnub.com/docs
    pub fn with_transport<T>(transport: T) -> PubNubClientDeserializerBuilder<T>
    where
        T: crate::core::Transport,
    {
        PubNubClientDeserializerBuilder { transport }
    }

    /// Set the blocking transport layer for the client.
    ///
    /// Clients built this way publish with
    /// [`publish_blocking`](PubNubClientInstance::publish_blocking).
    #[cfg(feature = "blocking")]
    pub fn with_blocking_transport<T>(transport: T) -> PubNubClientDeserializerBuilder<T>
    where
        T: crate::core::blocking::Transport + Send + Sync,
    {
        PubNubClientDeserializerBuilder { transport }
    }
}

/// PubNub builder for [`PubNubClient`] used to set the responses deserializer.
///
/// [`DeserializerSerde`] is used when [`with_keyset`](Self::with_keyset) is
/// called right away.
#[derive(Debug, Clone)]
pub struct PubNubClientDeserializerBuilder<T> {
    /// Transport layer.
    pub(crate) transport: T,
}

impl<T> PubNubClientDeserializerBuilder<T> {
    /// Set [`PubNub API`] responses deserializer.
    ///
    /// [`PubNub API`]: https://www.pubnub.com/docs
    pub fn with_deserializer<D>(self, deserializer: D) -> PubNubClientKeySetBuilder<T, D>
    where
        D: Deserializer,
    {
        PubNubClientKeySetBuilder {
            transport: self.transport,
            deserializer,
        }
    }

    /// Set the keyset for the client.
    ///
    /// It returns [`PubNubClientUserIdBuilder`] builder that you can use
    /// to set User ID for the client.
    pub fn with_keyset<S>(
        self,
        keyset: Keyset<S>,
    ) -> PubNubClientUserIdBuilder<T, S, DeserializerSerde>
    where
        S: Into<String>,
    {
        PubNubClientUserIdBuilder {
            transport: self.transport,
            deserializer: DeserializerSerde,
            keyset,
        }
    }
}

/// PubNub builder for [`PubNubClient`] to set API keys.
#[derive(Debug, Clone)]
pub struct PubNubClientKeySetBuilder<T, D> {
    /// Transport layer.
    pub(crate) transport: T,

    /// [`PubNub API`] responses deserializer
    ///
    /// [`PubNub API`]: https://www.pubnub.com/docs
    pub(crate) deserializer: D,
}

impl<T, D> PubNubClientKeySetBuilder<T, D> {
    /// Set the keyset for the client
    ///
    /// It returns [`PubNubClientUserIdBuilder`] builder that you can use
    /// to set the User ID for the client.
    pub fn with_keyset<S>(self, keyset: Keyset<S>) -> PubNubClientUserIdBuilder<T, S, D>
    where
        S: Into<String>,
    {
        PubNubClientUserIdBuilder {
            transport: self.transport,
            deserializer: self.deserializer,
            keyset,
        }
    }
}

/// PubNub builder for [`PubNubClient`] used to set the User ID.
///
/// # Examples
/// ```
/// use pubnub_publish::{PubNubClientBuilder, Keyset};
///
/// let builder = PubNubClientBuilder::with_reqwest_transport()
///     .with_keyset(Keyset {
///         subscribe_key: "sub-c-abc123",
///         publish_key: Some("pub-c-abc123"),
///     })
///     .with_user_id("my-user_id");
/// ```
#[derive(Debug, Clone)]
pub struct PubNubClientUserIdBuilder<T, S, D>
where
    S: Into<String>,
{
    transport: T,
    deserializer: D,
    keyset: Keyset<S>,
}

impl<T, S, D> PubNubClientUserIdBuilder<T, S, D>
where
    S: Into<String>,
{
    /// Set user id for the client.
    ///
    /// It returns [`PubNubClientConfigBuilder`] that you can use
    /// to set the configuration for the client.
    pub fn with_user_id<U>(self, user_id: U) -> PubNubClientConfigBuilder<T, D>
    where
        U: Into<String>,
    {
        PubNubClientConfigBuilder {
            transport: Some(self.transport),
            config: Some(PubNubConfig {
                publish_key: self.keyset.publish_key.map(Into::into),
                subscribe_key: self.keyset.subscribe_key.into(),
                user_id: Arc::new(user_id.into()),
                auth_key: None,
                cipher_key: None,
                use_random_iv: false,
                include_request_id: false,
                transport: Default::default(),
            }),
            deserializer: Some(Arc::new(self.deserializer)),
            ..Default::default()
        }
    }
}

/// Keyset for the PubNub client
///
/// # Examples
/// ```
/// use pubnub_publish::Keyset;
///
/// Keyset {
///    subscribe_key: "sub-c-abc123",
///    publish_key: Some("pub-c-abc123"),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Keyset<S>
where
    S: Into<String>,
{
    /// Subscribe key
    pub subscribe_key: S,

    /// Publish key
    ///
    /// Client without publish key fails each publish call.
    pub publish_key: Option<S>,
}
