pub mod encoding;
pub mod headers;
