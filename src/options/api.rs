use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "API", inline)]
#[serde(default)]
/// Where the tour backend lives and how its media is reached.
pub struct ApiOptions {
    /// API root, e.g. `http://127.0.0.1:8000/api`.
    #[schemars(title = "Base URL")]
    pub base_url: String,
    /// Absolute media URL prefixes that are rewritten to
    /// [`media_proxy_prefix`](Self::media_proxy_prefix).
    #[schemars(skip)]
    pub media_origins: Vec<String>,
    /// Same-origin path that proxies the backend's media.
    #[schemars(title = "Media Proxy Prefix")]
    pub media_proxy_prefix: String,
    /// CSRF token supplied by the admin page, required for hotspot writes.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
    /// Global request timeout in milliseconds; unset uses the transport
    /// default.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".into(),
            media_origins: vec![
                "http://127.0.0.1:8000/media".into(),
                "http://localhost:8000/media".into(),
            ],
            media_proxy_prefix: "/media".into(),
            csrf_token: None,
            timeout_ms: None,
        }
    }
}
