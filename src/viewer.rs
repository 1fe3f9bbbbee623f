//! The seam to the panorama-rendering library.
//!
//! Projection, texture loading and marker drawing belong to the viewer
//! library. The controller, the animator and the editor reach it only
//! through [`PanoramaViewer`]. [`HeadlessViewer`] keeps the viewer state in
//! memory and logs every call; the CLI uses it for offline tour walks.

use std::fmt;

use crate::camera::ViewerPose;
use crate::marker::Marker;

/// The panorama image could not be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerError(pub String);

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "viewer error: {}", self.0)
    }
}

impl std::error::Error for ViewerError {}

/// Operations the tour needs from a live panorama viewer.
///
/// Angles in [`ViewerPose`] and [`PanoramaViewer::look_at`] are radians;
/// field of view stays in degrees.
pub trait PanoramaViewer {
    /// Replace the displayed panorama.
    fn set_panorama(&mut self, url: &str) -> Result<(), ViewerError>;

    /// Remove every marker.
    fn clear_markers(&mut self);

    /// Add one marker.
    fn add_marker(&mut self, marker: &Marker);

    /// Remove the marker with `id`, if present.
    fn remove_marker(&mut self, id: &str);

    /// Set field of view, pitch and yaw at once.
    fn set_pose(&mut self, pose: ViewerPose);

    /// Point the camera at `pitch`/`yaw`, keeping the field of view.
    fn look_at(&mut self, pitch: f64, yaw: f64);

    /// Start idle auto-rotation.
    fn start_auto_rotate(&mut self);

    /// Stop idle auto-rotation.
    fn stop_auto_rotate(&mut self);

    /// Whether idle auto-rotation is running.
    fn is_auto_rotating(&self) -> bool;
}

/// In-memory viewer that records state instead of rendering.
#[derive(Debug, Clone, Default)]
pub struct HeadlessViewer {
    panorama: Option<String>,
    markers: Vec<Marker>,
    pose: ViewerPose,
    auto_rotating: bool,
    panorama_loads: usize,
    pose_updates: usize,
}

impl HeadlessViewer {
    /// Empty viewer: no panorama, no markers, default pose.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed panorama URL.
    #[must_use]
    pub fn panorama(&self) -> Option<&str> {
        self.panorama.as_deref()
    }

    /// Markers currently placed.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> ViewerPose {
        self.pose
    }

    /// How many times a panorama was loaded.
    #[must_use]
    pub fn panorama_loads(&self) -> usize {
        self.panorama_loads
    }

    /// How many pose updates (full or look-at) were applied.
    #[must_use]
    pub fn pose_updates(&self) -> usize {
        self.pose_updates
    }
}

impl PanoramaViewer for HeadlessViewer {
    fn set_panorama(&mut self, url: &str) -> Result<(), ViewerError> {
        if url.is_empty() {
            return Err(ViewerError("scene has no panorama image".into()));
        }
        log::debug!("viewer: panorama {url}");
        self.panorama = Some(url.to_owned());
        self.panorama_loads += 1;
        Ok(())
    }

    fn clear_markers(&mut self) {
        log::debug!("viewer: clear {} markers", self.markers.len());
        self.markers.clear();
    }

    fn add_marker(&mut self, marker: &Marker) {
        log::debug!(
            "viewer: marker {} at pitch {:.1} yaw {:.1}",
            marker.id,
            marker.position.pitch,
            marker.position.yaw
        );
        self.markers.retain(|m| m.id != marker.id);
        self.markers.push(marker.clone());
    }

    fn remove_marker(&mut self, id: &str) {
        self.markers.retain(|m| m.id != id);
    }

    fn set_pose(&mut self, pose: ViewerPose) {
        self.pose = pose;
        self.pose_updates += 1;
    }

    fn look_at(&mut self, pitch: f64, yaw: f64) {
        self.pose.pitch = pitch;
        self.pose.yaw = yaw;
        self.pose_updates += 1;
    }

    fn start_auto_rotate(&mut self) {
        log::debug!("viewer: auto-rotate on");
        self.auto_rotating = true;
    }

    fn stop_auto_rotate(&mut self) {
        log::debug!("viewer: auto-rotate off");
        self.auto_rotating = false;
    }

    fn is_auto_rotating(&self) -> bool {
        self.auto_rotating
    }
}
