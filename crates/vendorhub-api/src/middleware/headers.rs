//! Static response headers.

use axum::http::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::warn;

use vendorhub_core::config::app::ServerConfig;

/// `Cross-Origin-Opener-Policy` header name.
pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");

/// Layer stamping the configured opener policy on every response.
///
/// Returns `None` when the policy is empty or not a valid header value.
pub fn opener_policy_layer(config: &ServerConfig) -> Option<SetResponseHeaderLayer<HeaderValue>> {
    let policy = config.cross_origin_opener_policy.trim();
    if policy.is_empty() {
        return None;
    }
    match HeaderValue::from_str(policy) {
        Ok(value) => Some(SetResponseHeaderLayer::overriding(
            CROSS_ORIGIN_OPENER_POLICY,
            value,
        )),
        Err(_) => {
            warn!(policy = %policy, "Ignoring invalid cross_origin_opener_policy");
            None
        }
    }
}
