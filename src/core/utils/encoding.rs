//! Percent-encoding helpers.
//!
//! Every value which ends up in the request path or query string goes through
//! [`url_encode`], so transports can append them verbatim.

use percent_encoding::{percent_encode, AsciiSet, CONTROLS};

/// https://url.spec.whatwg.org/#fragment-percent-encode-set
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// https://url.spec.whatwg.org/#path-percent-encode-set
const PATH: &AsciiSet = &FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');

/// https://url.spec.whatwg.org/#userinfo-percent-encode-set
const USERINFO: &AsciiSet = &PATH
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// `+`, `%`, `&` and `,` signs needed by PubNub API
const PUBNUB_SET: &AsciiSet = &USERINFO.add(b'+').add(b'%').add(b'&').add(b',');

/// `percent_encoding` crate recommends you to create your own set for encoding.
/// To be consistent in the whole codebase - we created a function that can be used
/// for encoding related stuff.
pub fn url_encode(data: &[u8]) -> String {
    percent_encode(data, PUBNUB_SET).to_string()
}
