//! Admin-side hotspot placement editor.
//!
//! One editor per scene being edited. The admin clicks the panorama to
//! pick a position, fills in the form, and submits; the editor validates
//! client-side before anything is sent, then mirrors the backend's answer
//! into its list and the viewer.

use std::fmt;

use crate::api::{HotspotStore, NewHotspot};
use crate::error::TourError;
use crate::marker::{build_marker, marker_id};
use crate::navigation::{NotificationQueue, Severity};
use crate::options::MarkerOptions;
use crate::scene::{Hotspot, HotspotType, SceneSummary};
use crate::util::angle::{clamp_pitch, to_radians, wrap_yaw};
use crate::viewer::PanoramaViewer;

/// Why a hotspot form was rejected before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No position was picked on the panorama.
    NoPosition,
    /// The label is empty.
    MissingText,
    /// A navigation hotspot without a target scene.
    MissingTarget,
    /// An info hotspot without a description.
    MissingDescription,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NoPosition => {
                "click the panorama to choose the hotspot position first"
            }
            Self::MissingText => "the hotspot label is required",
            Self::MissingTarget => {
                "a navigation hotspot needs a target scene"
            }
            Self::MissingDescription => "an info point needs a description",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

/// Contents of the hotspot form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotspotForm {
    /// Selected type.
    pub hotspot_type: HotspotType,
    /// Selected target scene id.
    pub to_scene: Option<u64>,
    /// Label.
    pub text: String,
    /// Description, for info points.
    pub info_description: String,
}

/// Visual hotspot editor for one scene.
pub struct HotspotEditor<V: PanoramaViewer, H: HotspotStore> {
    scene_id: u64,
    viewer: V,
    store: H,
    markers: MarkerOptions,
    hotspots: Vec<Hotspot>,
    picked: Option<(f64, f64)>,
    targets: Vec<SceneSummary>,
    notifications: NotificationQueue,
}

impl<V: PanoramaViewer, H: HotspotStore> HotspotEditor<V, H> {
    /// Editor for scene `scene_id`.
    pub fn new(scene_id: u64, viewer: V, store: H, markers: MarkerOptions) -> Self {
        Self {
            scene_id,
            viewer,
            store,
            markers,
            hotspots: Vec::new(),
            picked: None,
            targets: Vec::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Scenes offered as navigation targets. Used to fill in the target
    /// slug and title of created hotspots.
    #[must_use]
    pub fn with_targets(mut self, scenes: Vec<SceneSummary>) -> Self {
        self.targets = scenes;
        self
    }

    /// Target choices, excluding the scene being edited.
    pub fn target_choices(&self) -> impl Iterator<Item = &SceneSummary> {
        self.targets.iter().filter(move |s| s.id != self.scene_id)
    }

    /// Hotspots of the scene, in list order.
    #[must_use]
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Picked `(pitch, yaw)` in degrees.
    #[must_use]
    pub fn picked_position(&self) -> Option<(f64, f64)> {
        self.picked
    }

    /// The viewer.
    #[must_use]
    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// The backend store.
    #[must_use]
    pub fn store(&self) -> &H {
        &self.store
    }

    /// Success and failure toasts.
    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Show the scene's existing hotspots.
    pub fn load_existing(&mut self, hotspots: Vec<Hotspot>) {
        self.viewer.clear_markers();
        for hotspot in &hotspots {
            self.viewer.add_marker(&build_marker(hotspot, &self.markers));
        }
        log::info!(
            "editing scene {} with {} hotspots",
            self.scene_id,
            hotspots.len()
        );
        self.hotspots = hotspots;
    }

    /// Record a click on the panorama (degrees).
    pub fn pick_position(&mut self, pitch: f64, yaw: f64) {
        let position = (clamp_pitch(pitch), wrap_yaw(yaw));
        log::debug!("picked pitch {:.2} yaw {:.2}", position.0, position.1);
        self.picked = Some(position);
    }

    /// Check `form` against the picked position without sending anything.
    pub fn validate(&self, form: &HotspotForm) -> Result<NewHotspot, ValidationError> {
        let (pitch, yaw) = self.picked.ok_or(ValidationError::NoPosition)?;
        let text = form.text.trim();
        if text.is_empty() {
            return Err(ValidationError::MissingText);
        }
        if form.hotspot_type == HotspotType::Scene && form.to_scene.is_none() {
            return Err(ValidationError::MissingTarget);
        }
        let info_description = form.info_description.trim();
        if form.hotspot_type == HotspotType::Info && info_description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        Ok(NewHotspot {
            from_scene: self.scene_id,
            hotspot_type: form.hotspot_type,
            to_scene: match form.hotspot_type {
                HotspotType::Info => None,
                HotspotType::Scene | HotspotType::Floor => form.to_scene,
            },
            text: text.to_owned(),
            info_description: info_description.to_owned(),
            pitch,
            yaw,
        })
    }

    /// Validate and create the hotspot.
    ///
    /// On success the hotspot joins the list and the viewer and the picked
    /// position is reset. Nothing changes on failure.
    pub fn submit(&mut self, form: &HotspotForm) -> Result<&Hotspot, TourError> {
        let draft = self.validate(form)?;
        let mut created = match self.store.create_hotspot(&draft) {
            Ok(created) => created,
            Err(e) => {
                log::error!("failed to create hotspot: {e}");
                let _ = self.notifications.push(
                    Severity::Error,
                    format!("Failed to add hotspot: {}", e.user_message()),
                );
                return Err(e);
            }
        };
        self.fill_target(&mut created);

        self.viewer.add_marker(&build_marker(&created, &self.markers));
        self.picked = None;
        let _ = self
            .notifications
            .push(Severity::Success, "Hotspot added.");
        log::info!("created hotspot {}", created.id);
        self.hotspots.push(created);
        let index = self.hotspots.len() - 1;
        Ok(&self.hotspots[index])
    }

    /// Delete hotspot `id` from the backend, the list and the viewer.
    pub fn delete(&mut self, id: u64) -> Result<(), TourError> {
        if let Err(e) = self.store.delete_hotspot(id) {
            log::error!("failed to delete hotspot {id}: {e}");
            let _ = self
                .notifications
                .push(Severity::Error, "Failed to delete hotspot.");
            return Err(e);
        }
        self.hotspots.retain(|h| h.id != id);
        self.viewer.remove_marker(&marker_id(id));
        let _ = self
            .notifications
            .push(Severity::Success, "Hotspot deleted.");
        Ok(())
    }

    /// Point the camera at hotspot `id`. Returns `false` for unknown ids.
    pub fn goto(&mut self, id: u64) -> bool {
        let Some(hotspot) = self.hotspots.iter().find(|h| h.id == id) else {
            return false;
        };
        self.viewer
            .look_at(to_radians(hotspot.pitch), to_radians(hotspot.yaw));
        true
    }

    fn fill_target(&self, hotspot: &mut Hotspot) {
        if hotspot.target_slug().is_some() {
            return;
        }
        let target = hotspot
            .to_scene
            .and_then(|id| self.targets.iter().find(|s| s.id == id));
        if let Some(target) = target {
            hotspot.to_scene_slug = Some(target.slug.clone());
            hotspot.to_scene_title = Some(target.title.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StaticSceneSource;
    use crate::test_support::{info_hotspot, nav_hotspot, scene, scene_id, summary};
    use crate::viewer::HeadlessViewer;

    type Editor = HotspotEditor<HeadlessViewer, StaticSceneSource>;

    fn editor() -> Editor {
        let store = StaticSceneSource::new(vec![
            scene("a", vec![nav_hotspot(1, "b")]),
            scene("b", Vec::new()),
        ]);
        let mut editor = HotspotEditor::new(
            scene_id("a"),
            HeadlessViewer::new(),
            store,
            MarkerOptions::default(),
        )
        .with_targets(vec![
            summary("a", "Gedung Utama", Some(1)),
            summary("b", "Gedung Utama", Some(2)),
        ]);
        editor.load_existing(vec![nav_hotspot(1, "b")]);
        editor
    }

    fn nav_form(target: &str) -> HotspotForm {
        HotspotForm {
            hotspot_type: HotspotType::Scene,
            to_scene: Some(scene_id(target)),
            text: "To b".into(),
            info_description: String::new(),
        }
    }

    #[test]
    fn validation_order() {
        let mut e = editor();
        let mut form = HotspotForm::default();
        assert_eq!(e.validate(&form), Err(ValidationError::NoPosition));

        e.pick_position(5.0, 10.0);
        assert_eq!(e.validate(&form), Err(ValidationError::MissingText));

        form.text = "  Door  ".into();
        assert_eq!(e.validate(&form), Err(ValidationError::MissingTarget));

        form.hotspot_type = HotspotType::Info;
        assert_eq!(e.validate(&form), Err(ValidationError::MissingDescription));

        form.info_description = "Main entrance".into();
        let draft = e.validate(&form).unwrap();
        assert_eq!(draft.text, "Door");
        assert_eq!(draft.to_scene, None);
        assert_eq!((draft.pitch, draft.yaw), (5.0, 10.0));
    }

    #[test]
    fn floor_needs_only_a_label() {
        let mut e = editor();
        e.pick_position(0.0, 0.0);
        let form = HotspotForm {
            hotspot_type: HotspotType::Floor,
            text: "Upstairs".into(),
            ..HotspotForm::default()
        };
        assert!(e.validate(&form).is_ok());
    }

    #[test]
    fn invalid_form_sends_nothing() {
        let mut e = editor();
        let err = e.submit(&nav_form("b")).unwrap_err();
        assert!(matches!(err, TourError::Validation(ValidationError::NoPosition)));
        assert_eq!(e.store().scenes()[0].hotspots.len(), 1);
    }

    #[test]
    fn picked_position_is_normalized() {
        let mut e = editor();
        e.pick_position(95.0, 200.0);
        assert_eq!(e.picked_position(), Some((90.0, -160.0)));
    }

    #[test]
    fn submit_adds_to_list_and_viewer() {
        let mut e = editor();
        e.pick_position(-3.0, 42.0);
        let created = e.submit(&nav_form("b")).unwrap().clone();

        assert_eq!(created.target_slug(), Some("b"));
        assert_eq!(e.hotspots().len(), 2);
        assert_eq!(e.viewer().markers().len(), 2);
        assert_eq!(e.picked_position(), None);
        assert!(e
            .notifications()
            .visible()
            .any(|n| n.severity() == Severity::Success));
    }

    #[test]
    fn delete_removes_marker() {
        let mut e = editor();
        e.delete(1).unwrap();
        assert!(e.hotspots().is_empty());
        assert!(e.viewer().markers().is_empty());

        assert!(e.delete(1).is_err());
        assert!(e
            .notifications()
            .visible()
            .any(|n| n.severity() == Severity::Error));
    }

    #[test]
    fn goto_rotates_viewer() {
        let mut e = editor();
        let mut info = info_hotspot(8, "Masjid", "Built in 2019");
        info.pitch = 30.0;
        info.yaw = -60.0;
        e.load_existing(vec![info]);

        assert!(e.goto(8));
        let pose = e.viewer().pose();
        assert!((pose.pitch - to_radians(30.0)).abs() < 1e-12);
        assert!((pose.yaw - to_radians(-60.0)).abs() < 1e-12);
        assert!(!e.goto(99));
    }

    #[test]
    fn target_choices_exclude_current_scene() {
        let e = editor();
        let slugs: Vec<_> = e.target_choices().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["b"]);
    }
}
