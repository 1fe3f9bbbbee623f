//! Scene and hotspot records as served by the tour API.
//!
//! Records are created and edited on the backend; this crate only reads
//! them. Every optional field tolerates both a missing key and an explicit
//! `null`, since the list and detail endpoints serialize different subsets.

/// Gallery and menu helpers: grouping by building, floor labels.
pub mod gallery;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::camera::CameraPose;

/// One 360° panoramic location with its hotspots and initial camera pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Numeric backend id.
    pub id: u64,
    /// URL-safe unique identifier used for navigation.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Long-form description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Building the scene belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub building: String,
    /// Floor number (1-9); `None` for outdoor areas.
    #[serde(default)]
    pub floor: Option<u8>,
    /// Short description of the floor.
    #[serde(default, deserialize_with = "null_as_default")]
    pub floor_description: String,
    /// City / area label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// Photographer / author credit.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// Publication date as sent by the backend (`YYYY-MM-DD`).
    #[serde(default)]
    pub published_date: Option<String>,
    /// Equirectangular panorama image URL.
    #[serde(default)]
    pub panorama_image: Option<String>,
    /// Gallery thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Initial camera pitch in degrees.
    #[serde(default, deserialize_with = "null_as_default")]
    pub initial_pitch: f64,
    /// Initial camera yaw in degrees.
    #[serde(default, deserialize_with = "null_as_default")]
    pub initial_yaw: f64,
    /// Initial field of view in degrees, when the author set one.
    #[serde(default)]
    pub initial_fov: Option<f64>,
    /// Whether this scene is the tour's entry point.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    /// Hotspots placed on this scene, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hotspots: Vec<Hotspot>,
}

impl Scene {
    /// The authored initial camera pose. `default_fov` fills in when the
    /// scene does not set its own field of view.
    #[must_use]
    pub fn initial_pose(&self, default_fov: f64) -> CameraPose {
        CameraPose {
            fov: self.initial_fov.unwrap_or(default_fov),
            pitch: self.initial_pitch,
            yaw: self.initial_yaw,
        }
    }

    /// Human-readable location, e.g. `"Main Building, Floor 2"`.
    #[must_use]
    pub fn location_label(&self) -> String {
        gallery::location_label(&self.building, self.floor)
    }

    /// List-granularity view of this scene.
    #[must_use]
    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            thumbnail: self.thumbnail.clone(),
            building: self.building.clone(),
            floor: self.floor,
            location: self.location.clone(),
            is_featured: self.is_featured,
        }
    }

    /// Hotspots that break the type invariants, paired with the problem.
    pub fn invalid_hotspots(
        &self,
    ) -> impl Iterator<Item = (&Hotspot, HotspotIssue)> + '_ {
        self.hotspots
            .iter()
            .filter_map(|h| h.validate().err().map(|issue| (h, issue)))
    }
}

/// List-granularity scene record (`GET /api/scenes/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSummary {
    /// Numeric backend id.
    pub id: u64,
    /// Navigation slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Gallery thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Building the scene belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub building: String,
    /// Floor number; `None` outdoors.
    #[serde(default)]
    pub floor: Option<u8>,
    /// City / area label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// Whether this scene is the tour's entry point.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
}

/// What a hotspot does when selected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HotspotType {
    /// Navigates to another scene.
    #[default]
    Scene,
    /// Shows an information popup.
    Info,
    /// Floor change; navigates when it has a target, otherwise informs.
    Floor,
}

impl HotspotType {
    /// Wire name of the type tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scene => "scene",
            Self::Info => "info",
            Self::Floor => "floor",
        }
    }
}

impl fmt::Display for HotspotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clickable point on a scene's sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Backend id.
    pub id: u64,
    /// Owning scene id (present on admin responses).
    #[serde(default)]
    pub from_scene: Option<u64>,
    /// Target scene id.
    #[serde(default)]
    pub to_scene: Option<u64>,
    /// Type tag.
    pub hotspot_type: HotspotType,
    /// Target scene slug, for navigation hotspots.
    #[serde(default)]
    pub to_scene_slug: Option<String>,
    /// Target scene title, for display in the editor list.
    #[serde(default)]
    pub to_scene_title: Option<String>,
    /// Label shown in the tooltip.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Long-form description for info points.
    #[serde(default, deserialize_with = "null_as_default")]
    pub info_description: String,
    /// Vertical angle in degrees (-90 down .. 90 up).
    pub pitch: f64,
    /// Horizontal angle in degrees (-180 .. 180).
    pub yaw: f64,
}

impl Hotspot {
    /// Target slug, treating an empty string as absent.
    #[must_use]
    pub fn target_slug(&self) -> Option<&str> {
        self.to_scene_slug.as_deref().filter(|s| !s.is_empty())
    }

    /// Check the per-type invariants.
    pub fn validate(&self) -> Result<(), HotspotIssue> {
        match self.hotspot_type {
            HotspotType::Scene if self.target_slug().is_none() => {
                Err(HotspotIssue::MissingTarget)
            }
            HotspotType::Info if self.info_description.trim().is_empty() => {
                Err(HotspotIssue::MissingDescription)
            }
            _ => Ok(()),
        }
    }
}

/// A broken hotspot invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotIssue {
    /// A `scene` hotspot without a target slug.
    MissingTarget,
    /// An `info` hotspot without a description.
    MissingDescription,
}

impl fmt::Display for HotspotIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget => {
                write!(f, "navigation hotspot has no target scene")
            }
            Self::MissingDescription => {
                write!(f, "info hotspot has no description")
            }
        }
    }
}

/// Deserialize `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
