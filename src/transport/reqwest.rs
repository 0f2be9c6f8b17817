//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to send requests to the [`PubNub API`] using the [`reqwest`] crate.
//! It is intended to be used by the [`pubnub_publish`] crate.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`PubNub API`]: https://www.pubnub.com/docs
//! [`reqwest`]: https://docs.rs/reqwest
//! [`pubnub_publish`]: ../../index.html
//! [`reqwest` feature]: ../../index.html#features

use crate::{
    core::{PubNubError, Transport, TransportMethod, TransportRequest, TransportResponse},
    dx::pubnub_client::{PubNubClientBuilder, PubNubClientDeserializerBuilder},
};
use bytes::Bytes;
use log::info;
use reqwest::{header::HeaderMap, StatusCode};
use spin::RwLock;
use std::{collections::HashMap, sync::Arc, time::Duration};

/// Default origin of the [`PubNub API`].
///
/// [`PubNub API`]: https://www.pubnub.com/docs
pub(crate) const DEFAULT_HOSTNAME: &str = "https://ps.pndsn.com";

/// This struct is used to send requests to the [`PubNub API`] using the [`reqwest`] crate.
/// It is used as the transport type for the [`PubNubClient`].
///
/// Request timeout is applied to each request. Connect timeout can only be
/// set on a [`reqwest::Client`], so one client is kept per distinct value.
///
/// [`PubNub API`]: https://www.pubnub.com/docs
/// [`reqwest`]: https://docs.rs/reqwest
/// [`PubNubClient`]: crate::dx::pubnub_client::PubNubClient
#[derive(Clone, Debug)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,

    clients: Arc<RwLock<HashMap<Duration, reqwest::Client>>>,

    /// The hostname to use for requests.
    /// It is used as the base URL for all requests.
    ///
    /// It defaults to `https://ps.pndsn.com`.
    /// # Examples
    /// ```
    /// use pubnub_publish::transport::TransportReqwest;
    ///
    /// let transport = {
    ///    let mut transport = TransportReqwest::default();
    ///    transport.hostname = "https://wherever.you.want.com".into();
    ///    transport
    /// };
    /// ```
    pub hostname: String,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, PubNubError> {
        let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
        info!("{} {}", request.method, request_url);
        let headers = prepare_headers(&request.headers)?;
        let client = self.client_for(request.connect_timeout)?;
        let request_timeout = request.request_timeout;

        let mut builder = match request.method {
            TransportMethod::Get => client.get(request_url),
            TransportMethod::Post => client.post(request_url).body(
                request
                    .body
                    .ok_or_else(|| transport_error("Body should not be empty for POST"))?,
            ),
        };

        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }

        let result = builder
            .headers(headers)
            .send()
            .await
            .map_err(transport_error)?;

        let status = result.status();
        result
            .bytes()
            .await
            .map_err(transport_error)
            .and_then(|bytes| create_result(status, bytes))
    }
}

impl Default for TransportReqwest {
    fn default() -> Self {
        Self {
            reqwest_client: reqwest::Client::default(),
            clients: Default::default(),
            hostname: DEFAULT_HOSTNAME.into(),
        }
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    ///
    /// It provides a default [`reqwest`] client using [`reqwest::Client::default()`]
    /// and a default hostname of `https://ps.pndsn.com`.
    ///
    /// # Example
    /// ```
    /// use pubnub_publish::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    /// ```
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// set the custom hostname for request
    pub fn set_hostname<S>(&mut self, hostname: S)
    where
        S: Into<String>,
    {
        self.hostname = hostname.into();
    }

    fn client_for(&self, connect_timeout: Option<Duration>) -> Result<reqwest::Client, PubNubError> {
        let Some(timeout) = connect_timeout else {
            return Ok(self.reqwest_client.clone());
        };

        if let Some(client) = self.clients.read().get(&timeout) {
            return Ok(client.clone());
        }

        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(self
            .clients
            .write()
            .entry(timeout)
            .or_insert(client)
            .clone())
    }
}

fn transport_error<E>(err: E) -> PubNubError
where
    E: ToString,
{
    PubNubError::Transport {
        details: err.to_string(),
    }
}

fn prepare_headers(request_headers: &HashMap<String, String>) -> Result<HeaderMap, PubNubError> {
    HeaderMap::try_from(request_headers).map_err(transport_error)
}

/// Join origin, path and query.
///
/// Query values are expected to be percent-encoded already. Parameters are
/// sorted by name, so the same request always gives the same URL.
fn prepare_url(hostname: &str, path: &str, query_params: &HashMap<String, String>) -> String {
    if query_params.is_empty() {
        return format!("{hostname}{path}");
    }

    let mut query_params = query_params.iter().collect::<Vec<_>>();
    query_params.sort_unstable();

    let query = query_params
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{hostname}{path}?{query}")
}

fn create_result(status: StatusCode, body: Bytes) -> Result<TransportResponse, PubNubError> {
    Ok(TransportResponse {
        status: status.as_u16(),
        body: (!body.is_empty()).then(|| body.to_vec()),
        ..Default::default()
    })
}

impl PubNubClientBuilder {
    /// Creates a new [`PubNubClientBuilder`] with the default [`TransportReqwest`] transport.
    /// The default transport uses the [`reqwest`] crate to send requests to the [`PubNub API`].
    /// The default hostname is `https://ps.pndsn.com`.
    ///
    /// # Examples
    /// ```
    /// use pubnub_publish::{PubNubClientBuilder, Keyset};
    ///
    /// let client = PubNubClientBuilder::with_reqwest_transport()
    ///     .with_keyset(Keyset {
    ///         subscribe_key: "sub-c-abc123",
    ///         publish_key: Some("pub-c-abc123"),
    ///     })
    ///     .with_user_id("user-123")
    ///     .build();
    /// ```
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    /// [`PubNub API`]: https://www.pubnub.com/docs
    pub fn with_reqwest_transport() -> PubNubClientDeserializerBuilder<TransportReqwest> {
        PubNubClientBuilder::with_transport(TransportReqwest::new())
    }
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Reqwest Transport Blocking Implementation
    //!
    //! This module contains the blocking [`TransportReqwest`] struct.
    //! It is used to send requests to the [`PubNub API`] using the [`reqwest`] crate.
    //!
    //! It requires the [`reqwest` and `blocking` feature] to be enabled.
    //!
    //! [`PubNub API`]: https://www.pubnub.com/docs
    //! [`reqwest`]: https://docs.rs/reqwest
    //! [`reqwest` and `blocking` feature]: ../../../index.html#features

    use super::{create_result, prepare_headers, prepare_url, transport_error, DEFAULT_HOSTNAME};
    use crate::{
        core::{PubNubError, TransportMethod, TransportRequest, TransportResponse},
        dx::pubnub_client::{PubNubClientBuilder, PubNubClientDeserializerBuilder},
    };
    use log::info;
    use spin::RwLock;
    use std::{collections::HashMap, sync::Arc, time::Duration};

    /// This struct is used to send requests to the [`PubNub API`] using the
    /// blocking [`reqwest`] client.
    ///
    /// The blocking client runs its own runtime, so it must not be created or
    /// dropped inside an async context.
    ///
    /// [`PubNub API`]: https://www.pubnub.com/docs
    /// [`reqwest`]: https://docs.rs/reqwest
    #[derive(Clone, Debug)]
    pub struct TransportReqwest {
        reqwest_client: reqwest::blocking::Client,

        clients: Arc<RwLock<HashMap<Duration, reqwest::blocking::Client>>>,

        /// The hostname to use for requests.
        /// It is used as the base URL for all requests.
        ///
        /// It defaults to `https://ps.pndsn.com`.
        pub hostname: String,
    }

    impl crate::core::blocking::Transport for TransportReqwest {
        fn send(&self, request: TransportRequest) -> Result<TransportResponse, PubNubError> {
            let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
            info!("{} {}", request.method, request_url);
            let headers = prepare_headers(&request.headers)?;
            let client = self.client_for(request.connect_timeout)?;

            let mut builder = match request.method {
                TransportMethod::Get => client.get(request_url),
                TransportMethod::Post => client.post(request_url).body(
                    request
                        .body
                        .ok_or_else(|| transport_error("Body should not be empty for POST"))?,
                ),
            };

            if let Some(timeout) = request.request_timeout {
                builder = builder.timeout(timeout);
            }

            let result = builder.headers(headers).send().map_err(transport_error)?;

            let status = result.status();
            result
                .bytes()
                .map_err(transport_error)
                .and_then(|bytes| create_result(status, bytes))
        }
    }

    impl Default for TransportReqwest {
        fn default() -> Self {
            Self {
                reqwest_client: reqwest::blocking::Client::default(),
                clients: Default::default(),
                hostname: DEFAULT_HOSTNAME.into(),
            }
        }
    }

    impl TransportReqwest {
        /// Create a new blocking [`TransportReqwest`] instance.
        pub fn new() -> Self {
            Self::default()
        }

        /// set the custom hostname for request
        pub fn set_hostname<S>(&mut self, hostname: S)
        where
            S: Into<String>,
        {
            self.hostname = hostname.into();
        }

        fn client_for(
            &self,
            connect_timeout: Option<Duration>,
        ) -> Result<reqwest::blocking::Client, PubNubError> {
            let Some(timeout) = connect_timeout else {
                return Ok(self.reqwest_client.clone());
            };

            if let Some(client) = self.clients.read().get(&timeout) {
                return Ok(client.clone());
            }

            let client = reqwest::blocking::Client::builder()
                .connect_timeout(timeout)
                .build()
                .map_err(transport_error)?;

            Ok(self
                .clients
                .write()
                .entry(timeout)
                .or_insert(client)
                .clone())
        }
    }

    impl PubNubClientBuilder {
        /// Creates a new [`PubNubClientBuilder`] with the blocking
        /// [`TransportReqwest`] transport.
        ///
        /// # Examples
        /// ```no_run
        /// use pubnub_publish::{PubNubClientBuilder, Keyset};
        ///
        /// let client = PubNubClientBuilder::with_reqwest_blocking_transport()
        ///     .with_keyset(Keyset {
        ///         subscribe_key: "sub-c-abc123",
        ///         publish_key: Some("pub-c-abc123"),
        ///     })
        ///     .with_user_id("user-123")
        ///     .build();
        /// ```
        pub fn with_reqwest_blocking_transport() -> PubNubClientDeserializerBuilder<TransportReqwest>
        {
            PubNubClientBuilder::with_blocking_transport(TransportReqwest::new())
        }
    }

}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;
    use wiremock::matchers::{body_string, header, method, path as path_matcher, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(server: &MockServer) -> TransportReqwest {
        TransportReqwest {
            hostname: server.uri(),
            ..Default::default()
        }
    }

    #[test_case(&[] => "https://ps.pndsn.com/time/0"; "without query")]
    #[test_case(&[("uuid", "user%20id")] => "https://ps.pndsn.com/time/0?uuid=user%20id"; "with encoded query")]
    #[test_case(
        &[("uuid", "user"), ("store", "0"), ("auth", "key"), ("pnsdk", "PubNub-Rust%2F0.1.0")]
        => "https://ps.pndsn.com/time/0?auth=key&pnsdk=PubNub-Rust%2F0.1.0&store=0&uuid=user";
        "with sorted query"
    )]
    fn join_url_parts(query: &[(&str, &str)]) -> String {
        let query = query
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        prepare_url(DEFAULT_HOSTNAME, "/time/0", &query)
    }

    #[test_case("/path/%22Hello%22" ; "sending string")]
    #[test_case("/path/%7B%22a%22%3A%22b%22%7D" ; "sending object")]
    #[test_case("/path/1" ; "sending number")]
    #[test_case("/path/true" ; "sending boolean")]
    #[tokio::test]
    async fn send_via_get_method(path: &str) {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_matcher(path))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("[1,\"Sent\",\"16787176144828000\"]"),
            )
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: path.into(),
            query_parameters: [("uuid".into(), "Phoenix".into())].into(),
            method: TransportMethod::Get,
            ..Default::default()
        };

        let response = transport(&server).send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn not_encode_query_values_twice() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_matcher("/path"))
            .and(query_param("meta", "{\"foo\":\"bar\"}"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: "/path".into(),
            query_parameters: [("meta".into(), "%7B%22foo%22%3A%22bar%22%7D".into())].into(),
            ..Default::default()
        };

        let response = transport(&server).send(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, None);
    }

    #[tokio::test]
    async fn send_via_post_method() {
        let message = "{\"text\":\"Hello from post\"}";
        let path = "/publish/pub/sub/0/chat/0";

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_matcher(path))
            .and(body_string(message.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("[1,\"Sent\",\"16787176144828000\"]"),
            )
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: path.into(),
            method: TransportMethod::Post,
            body: Some(message.as_bytes().to_vec()),
            ..Default::default()
        };

        let response = transport(&server).send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn send_headers() {
        let path = "/publish/pub/sub/0/chat/0";

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_matcher(path))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: path.into(),
            method: TransportMethod::Post,
            headers: HashMap::from([("Content-Type".into(), "application/json".into())]),
            body: Some(b"1".to_vec()),
            ..Default::default()
        };

        let response = transport(&server).send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn return_service_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_string("[0,\"Invalid Key\"]"))
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: "/path".into(),
            ..Default::default()
        };

        let response = transport(&server).send(request).await.unwrap();

        assert_eq!(response.status, 400);
        assert_eq!(response.body, Some(b"[0,\"Invalid Key\"]".to_vec()));
    }

    #[tokio::test]
    async fn return_err_on_request_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: "/path".into(),
            request_timeout: Some(Duration::from_millis(100)),
            ..Default::default()
        };

        let result = transport(&server).send(request).await;

        assert!(matches!(result, Err(PubNubError::Transport { .. })));
    }

    #[tokio::test]
    async fn return_err_on_post_empty_body() {
        let transport = TransportReqwest::default();

        let request = TransportRequest {
            method: TransportMethod::Post,
            body: None,
            ..Default::default()
        };

        assert!(matches!(
            transport.send(request).await,
            Err(PubNubError::Transport { .. })
        ));
    }

    #[test]
    fn reuse_client_for_same_connect_timeout() {
        let transport = TransportReqwest::default();

        transport.client_for(Some(Duration::from_secs(5))).unwrap();
        transport.client_for(Some(Duration::from_secs(5))).unwrap();
        transport.client_for(Some(Duration::from_secs(3))).unwrap();
        transport.client_for(None).unwrap();

        assert_eq!(transport.clients.read().len(), 2);
    }
}
