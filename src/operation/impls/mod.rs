#[cfg(feature = "http")]
pub mod http_get;
