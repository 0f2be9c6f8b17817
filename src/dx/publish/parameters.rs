//! Publish query parameters.
//!
//! Every value is percent-encoded here. Transports append them to the request
//! URL verbatim.

use crate::{core::utils::encoding::url_encode, dx::pubnub_client::PubNubConfig};
use std::collections::HashMap;

/// Build query parameters for a single publish call.
///
/// `meta_json` is the already serialized metadata.
pub(crate) fn assemble(
    config: &PubNubConfig,
    store: Option<bool>,
    ttl: Option<u32>,
    replicate: Option<bool>,
    meta_json: Option<String>,
) -> HashMap<String, String> {
    let mut query_params: HashMap<String, String> = HashMap::new();

    if let Some(auth_key) = &config.auth_key {
        query_params.insert("auth".into(), url_encode(auth_key.as_bytes()));
    }

    query_params.insert("uuid".into(), url_encode(config.user_id.as_bytes()));

    // Storage is on by default, so only opting out is sent.
    store
        .filter(|store| !store)
        .and_then(|_| query_params.insert("store".into(), "0".into()));

    ttl.and_then(|ttl| query_params.insert("ttl".into(), ttl.to_string()));

    replicate
        .filter(|replicate| !replicate)
        .and_then(|_| query_params.insert("norep".into(), true.to_string()));

    meta_json.and_then(|meta| query_params.insert("meta".into(), url_encode(meta.as_bytes())));

    query_params
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::dx::pubnub_client::TransportConfiguration;
    use std::sync::Arc;
    use test_case::test_case;

    fn config(auth_key: Option<&str>) -> PubNubConfig {
        PubNubConfig {
            subscribe_key: "sub_key".into(),
            publish_key: Some("pub_key".into()),
            user_id: Arc::new("user id".into()),
            auth_key: auth_key.map(|key| Arc::new(key.into())),
            cipher_key: None,
            use_random_iv: false,
            include_request_id: false,
            transport: TransportConfiguration::default(),
        }
    }

    #[test]
    fn always_contain_encoded_uuid() {
        let params = assemble(&config(None), None, None, None, None);

        assert_eq!(params.get("uuid"), Some(&"user%20id".to_string()));
        assert_eq!(params.len(), 1);
    }

    #[test_case(Some("mySecret") => Some("mySecret".to_string()); "configured auth key")]
    #[test_case(None => None; "no auth key")]
    fn contain_auth_only_when_configured(auth_key: Option<&str>) -> Option<String> {
        assemble(&config(auth_key), None, None, None, None)
            .get("auth")
            .cloned()
    }

    #[test_case(Some(false) => Some("0".to_string()); "storage disabled")]
    #[test_case(Some(true) => None; "storage enabled")]
    #[test_case(None => None; "storage not specified")]
    fn contain_store_only_when_disabled(store: Option<bool>) -> Option<String> {
        assemble(&config(None), store, None, None, None)
            .get("store")
            .cloned()
    }

    #[test_case(Some(false) => Some("true".to_string()); "replication disabled")]
    #[test_case(Some(true) => None; "replication enabled")]
    #[test_case(None => None; "replication not specified")]
    fn contain_norep_only_when_replication_disabled(replicate: Option<bool>) -> Option<String> {
        assemble(&config(None), None, None, replicate, None)
            .get("norep")
            .cloned()
    }

    #[test]
    fn contain_ttl() {
        let params = assemble(&config(None), None, Some(24), None, None);

        assert_eq!(params.get("ttl"), Some(&"24".to_string()));
    }

    #[test]
    fn contain_percent_encoded_meta() {
        let params = assemble(
            &config(None),
            None,
            None,
            None,
            Some("{\"foo\":\"bar\"}".into()),
        );

        assert_eq!(
            params.get("meta"),
            Some(&"%7B%22foo%22%3A%22bar%22%7D".to_string())
        );
    }
}
