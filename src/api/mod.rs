//! Scene data client.
//!
//! The tour backend is reached only through two traits: [`SceneSource`]
//! for the public read endpoints and [`HotspotStore`] for the admin write
//! endpoints. [`ApiClient`] implements both over HTTP (feature `http`);
//! [`StaticSceneSource`] serves an in-memory or JSON-file fixture.

#[cfg(feature = "http")]
mod client;
mod media;
mod static_source;

#[cfg(feature = "http")]
pub use client::ApiClient;
pub use media::proxied_media_url;
use serde::{Deserialize, Serialize};
pub use static_source::StaticSceneSource;

use crate::error::TourError;
use crate::scene::{Hotspot, HotspotType, Scene, SceneSummary};

/// Read side of the backend.
pub trait SceneSource {
    /// `GET /api/scenes/`: every scene at list granularity.
    fn fetch_scene_list(&self) -> Result<Vec<SceneSummary>, TourError>;

    /// `GET /api/scenes/{slug}/`: one scene with its hotspots.
    fn fetch_scene(&self, slug: &str) -> Result<Scene, TourError>;

    /// `GET /api/scenes/featured/`: the tour's entry scene.
    fn fetch_featured(&self) -> Result<Scene, TourError>;
}

/// Admin write side of the backend.
pub trait HotspotStore {
    /// `POST /api/hotspots/`: create a hotspot and return the stored record.
    fn create_hotspot(&mut self, hotspot: &NewHotspot)
        -> Result<Hotspot, TourError>;

    /// `DELETE /api/hotspots/{id}/`.
    fn delete_hotspot(&mut self, id: u64) -> Result<(), TourError>;
}

/// Body of a hotspot creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHotspot {
    /// Id of the scene the hotspot is placed on.
    pub from_scene: u64,
    /// Type tag.
    pub hotspot_type: HotspotType,
    /// Target scene id for navigation hotspots.
    pub to_scene: Option<u64>,
    /// Tooltip label.
    pub text: String,
    /// Long-form description, empty unless `info`.
    pub info_description: String,
    /// Vertical angle in degrees.
    pub pitch: f64,
    /// Horizontal angle in degrees.
    pub yaw: f64,
}

/// List endpoint payload: a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> ListBody<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Paged { results: items } => items,
        }
    }
}

/// Decode a list endpoint body.
pub(crate) fn decode_list<T: for<'de> Deserialize<'de>>(
    body: &str,
) -> Result<Vec<T>, TourError> {
    let list: ListBody<T> = serde_json::from_str(body)?;
    Ok(list.into_vec())
}

/// Error payload: `{"detail": ..}` or the wrapped
/// `{"status": "error", "code": N, "detail": .., "errors": ..}` form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
    errors: Option<serde_json::Value>,
}

/// Best-effort extraction of a human-readable detail from an error body.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let value = parsed.detail.or(parsed.errors)?;
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::String(_) | serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
