//! Blocking HTTP client for the tour REST API.

use ureq::Agent;
use web_time::Duration;

use super::{decode_list, error_detail, HotspotStore, NewHotspot, SceneSource};
use crate::error::TourError;
use crate::options::ApiOptions;
use crate::scene::{Hotspot, Scene, SceneSummary};

/// Header carrying the admin page's CSRF token on write requests.
const CSRF_HEADER: &str = "X-CSRFToken";

/// `ureq`-backed implementation of [`SceneSource`] and [`HotspotStore`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    agent: Agent,
    base_url: String,
    csrf_token: Option<String>,
}

impl ApiClient {
    /// Client for the API described by `options`.
    #[must_use]
    pub fn new(options: &ApiOptions) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(options.timeout_ms.map(Duration::from_millis))
            .build();
        Self {
            agent: Agent::new_with_config(config),
            base_url: options.base_url.trim_end_matches('/').to_owned(),
            csrf_token: options.csrf_token.clone(),
        }
    }

    /// Set the CSRF token used for hotspot writes.
    #[must_use]
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// API root without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn csrf_token(&self) -> Result<&str, TourError> {
        self.csrf_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(TourError::MissingCsrfToken)
    }

    /// GET `path` and return the body of a 2xx response.
    fn get_text(&self, path: &str) -> Result<String, TourError> {
        let url = self.url(path);
        log::debug!("GET {url}");
        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| TourError::Http(e.to_string()))?;
        read_success(response)
    }
}

/// Turn a response into its body, or a [`TourError::Status`] carrying the
/// error body's detail.
fn read_success(
    response: ureq::http::Response<ureq::Body>,
) -> Result<String, TourError> {
    let status = response.status();
    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| TourError::Http(e.to_string()))?;
    if status.is_success() {
        Ok(body)
    } else {
        let code = status.as_u16();
        let detail = error_detail(&body);
        log::error!(
            "backend returned {code}: {}",
            detail.as_deref().unwrap_or("(no detail)")
        );
        Err(TourError::Status { code, detail })
    }
}

impl SceneSource for ApiClient {
    fn fetch_scene_list(&self) -> Result<Vec<SceneSummary>, TourError> {
        let body = self.get_text("scenes/")?;
        decode_list(&body)
    }

    fn fetch_scene(&self, slug: &str) -> Result<Scene, TourError> {
        let body = self.get_text(&format!("scenes/{slug}/")).map_err(
            |e| match e {
                TourError::Status { code: 404, detail: None } => {
                    TourError::NotFound(slug.to_owned())
                }
                other => other,
            },
        )?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch_featured(&self) -> Result<Scene, TourError> {
        let body = self.get_text("scenes/featured/")?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl HotspotStore for ApiClient {
    fn create_hotspot(
        &mut self,
        hotspot: &NewHotspot,
    ) -> Result<Hotspot, TourError> {
        let token = self.csrf_token()?;
        let url = self.url("hotspots/");
        let payload = serde_json::to_string(hotspot)?;
        log::info!(
            "POST {url} ({} at pitch {:.1} yaw {:.1})",
            hotspot.hotspot_type,
            hotspot.pitch,
            hotspot.yaw
        );
        let response = self
            .agent
            .post(&url)
            .header(CSRF_HEADER, token)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(payload)
            .map_err(|e| TourError::Http(e.to_string()))?;
        let body = read_success(response)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn delete_hotspot(&mut self, id: u64) -> Result<(), TourError> {
        let token = self.csrf_token()?;
        let url = self.url(&format!("hotspots/{id}/"));
        log::info!("DELETE {url}");
        let response = self
            .agent
            .delete(&url)
            .header(CSRF_HEADER, token)
            .call()
            .map_err(|e| TourError::Http(e.to_string()))?;
        let _ = read_success(response)?;
        Ok(())
    }
}
