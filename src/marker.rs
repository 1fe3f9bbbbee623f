//! Hotspot records to renderable marker descriptors.
//!
//! One marker per hotspot, in hotspot order. Positions are copied unchanged
//! (degrees); the payload carries what the controller needs when the marker
//! is selected.

use serde::Serialize;

use crate::options::MarkerOptions;
use crate::scene::{Hotspot, HotspotType};

/// Anchor point of every marker icon.
pub const MARKER_ANCHOR: &str = "bottom center";

/// Icon glyph of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerIcon {
    /// Directional arrow for scene navigation.
    Arrow,
    /// Info glyph for info points and floor changes.
    Info,
}

impl MarkerIcon {
    /// Icon for a hotspot type.
    #[must_use]
    pub fn for_type(kind: HotspotType) -> Self {
        match kind {
            HotspotType::Scene => Self::Arrow,
            HotspotType::Info | HotspotType::Floor => Self::Info,
        }
    }
}

/// Angular marker position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerPosition {
    /// Vertical angle.
    pub pitch: f64,
    /// Horizontal angle.
    pub yaw: f64,
}

/// What the controller needs to act on a selected marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPayload {
    /// Hotspot type tag.
    #[serde(rename = "type")]
    pub kind: HotspotType,
    /// Target scene slug, if any.
    pub target_slug: Option<String>,
    /// Long-form description, or the hotspot label when it has none.
    pub description: String,
}

/// Renderable marker descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Stable id, `hotspot-{id}`.
    pub id: String,
    /// Icon glyph.
    pub icon: MarkerIcon,
    /// Square icon size in pixels.
    pub size: u32,
    /// Icon anchor.
    pub anchor: &'static str,
    /// Position on the sphere.
    pub position: MarkerPosition,
    /// Tooltip text (the hotspot label).
    pub tooltip: String,
    /// Selection payload.
    pub payload: MarkerPayload,
}

/// Marker id for a hotspot id.
#[must_use]
pub fn marker_id(hotspot_id: u64) -> String {
    format!("hotspot-{hotspot_id}")
}

/// Build the marker for one hotspot.
#[must_use]
pub fn build_marker(hotspot: &Hotspot, options: &MarkerOptions) -> Marker {
    let icon = MarkerIcon::for_type(hotspot.hotspot_type);
    let size = match icon {
        MarkerIcon::Arrow => options.arrow_size,
        MarkerIcon::Info => options.info_size,
    };
    Marker {
        id: marker_id(hotspot.id),
        icon,
        size,
        anchor: MARKER_ANCHOR,
        position: MarkerPosition {
            pitch: hotspot.pitch,
            yaw: hotspot.yaw,
        },
        tooltip: hotspot.text.clone(),
        payload: MarkerPayload {
            kind: hotspot.hotspot_type,
            target_slug: hotspot.target_slug().map(str::to_owned),
            description: if hotspot.info_description.trim().is_empty() {
                hotspot.text.clone()
            } else {
                hotspot.info_description.clone()
            },
        },
    }
}

/// Build markers for a scene's hotspots, one per hotspot.
#[must_use]
pub fn build_markers(hotspots: &[Hotspot], options: &MarkerOptions) -> Vec<Marker> {
    hotspots.iter().map(|h| build_marker(h, options)).collect()
}
