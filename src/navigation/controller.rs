//! The navigation controller.

use web_time::{Duration, Instant};

use super::events::TransitionHandlers;
use super::notify::{NotificationId, NotificationQueue, Severity};
use super::{NavigationStatus, PendingTransition};
use crate::api::{proxied_media_url, SceneSource};
use crate::camera::{CameraAnimation, CameraPose};
use crate::error::TourError;
use crate::marker::{build_markers, MarkerPayload};
use crate::options::TourOptions;
use crate::scene::gallery::{self, BuildingGroup};
use crate::scene::{HotspotType, Scene, SceneSummary};
use crate::viewer::{PanoramaViewer, ViewerError};

/// Transition label for the featured scene, whose slug is unknown until it
/// has been fetched.
pub const FEATURED_TRANSITION: &str = "featured";

/// Auto-rotation waiting to resume after the intro.
#[derive(Debug, Clone, Copy)]
struct PendingResume {
    /// When the countdown started; armed on the next tick if unknown.
    since: Option<Instant>,
}

/// Owns the displayed scene, the viewer and all transient tour state.
///
/// One value per tour view. Views read state through the accessors and
/// subscribe to transitions with the `on_transition_*` methods.
pub struct NavigationController<S: SceneSource, V: PanoramaViewer> {
    source: S,
    viewer: V,
    options: TourOptions,

    current: Option<Scene>,
    in_flight: Option<PendingTransition>,
    generation: u64,
    last_error: Option<String>,
    viewer_error: Option<String>,

    menu_open: bool,
    info_panel_open: bool,
    scene_list: Vec<SceneSummary>,

    intro: Option<CameraAnimation>,
    resume_after_intro: bool,
    resume: Option<PendingResume>,

    notifications: NotificationQueue,
    handlers: TransitionHandlers,
}

impl<S: SceneSource, V: PanoramaViewer> NavigationController<S, V> {
    /// Controller with no scene displayed.
    pub fn new(source: S, viewer: V, options: TourOptions) -> Self {
        Self {
            source,
            viewer,
            options,
            current: None,
            in_flight: None,
            generation: 0,
            last_error: None,
            viewer_error: None,
            menu_open: false,
            info_panel_open: false,
            scene_list: Vec::new(),
            intro: None,
            resume_after_intro: false,
            resume: None,
            notifications: NotificationQueue::new(),
            handlers: TransitionHandlers::default(),
        }
    }

    // -- Accessors -------------------------------------------------------

    /// The scene currently displayed.
    #[must_use]
    pub fn current_scene(&self) -> Option<&Scene> {
        self.current.as_ref()
    }

    /// Whether `slug` is the displayed scene (the active thumbnail).
    #[must_use]
    pub fn is_current(&self, slug: &str) -> bool {
        self.current.as_ref().is_some_and(|s| s.slug == slug)
    }

    /// Coarse state for views.
    #[must_use]
    pub fn status(&self) -> NavigationStatus {
        if self.in_flight.is_some() {
            NavigationStatus::Transitioning
        } else if self.last_error.is_some() {
            NavigationStatus::Error
        } else {
            NavigationStatus::Idle
        }
    }

    /// Whether a scene fetch is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingTransition> {
        self.in_flight.as_ref()
    }

    /// User-facing message of the last failed transition.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Full-overlay viewer error, if the panorama could not be displayed.
    #[must_use]
    pub fn viewer_error(&self) -> Option<&str> {
        self.viewer_error.as_deref()
    }

    /// Whether the location menu is open.
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the scene info panel is open.
    #[must_use]
    pub fn is_info_panel_open(&self) -> bool {
        self.info_panel_open
    }

    /// Scenes listed in the menu.
    #[must_use]
    pub fn scene_list(&self) -> &[SceneSummary] {
        &self.scene_list
    }

    /// Menu entries grouped by building.
    #[must_use]
    pub fn menu_groups(&self) -> Vec<BuildingGroup<'_>> {
        gallery::group_by_building(&self.scene_list)
    }

    /// Whether the intro animation is still running.
    #[must_use]
    pub fn is_intro_running(&self) -> bool {
        self.intro.as_ref().is_some_and(CameraAnimation::is_active)
    }

    /// Toast notifications.
    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Dismiss a toast. Returns `true` if it was shown or queued.
    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &TourOptions {
        &self.options
    }

    /// The panorama viewer.
    #[must_use]
    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Mutable access to the panorama viewer.
    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }

    /// The scene source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    // -- Handlers --------------------------------------------------------

    /// Call `handler` with the target slug whenever a transition starts.
    pub fn on_transition_start(&mut self, handler: impl FnMut(&str) + 'static) {
        self.handlers.add_start(Box::new(handler));
    }

    /// Call `handler` with the target slug and message when one fails.
    pub fn on_transition_error(
        &mut self,
        handler: impl FnMut(&str, &str) + 'static,
    ) {
        self.handlers.add_error(Box::new(handler));
    }

    /// Call `handler` with the new scene when a transition completes.
    pub fn on_transition_complete(
        &mut self,
        handler: impl FnMut(&Scene) + 'static,
    ) {
        self.handlers.add_complete(Box::new(handler));
    }

    // -- Transitions -----------------------------------------------------

    /// Fetch and display `slug`.
    ///
    /// Returns `true` when the scene was committed. Does nothing, without
    /// fetching, while another transition is in flight or when `slug` is
    /// already displayed.
    pub fn load_scene(&mut self, slug: &str) -> bool {
        let Some(pending) = self.begin_load(slug) else {
            return false;
        };
        let result = self.source.fetch_scene(pending.slug());
        self.finish_load(&pending, result)
    }

    /// First half of [`load_scene`](Self::load_scene), for hosts that fetch
    /// asynchronously.
    ///
    /// Returns `None` when the request is dropped by the same guards.
    pub fn begin_load(&mut self, slug: &str) -> Option<PendingTransition> {
        if let Some(pending) = &self.in_flight {
            log::debug!(
                "dropping request for '{slug}': '{}' still loading",
                pending.slug
            );
            return None;
        }
        if self.is_current(slug) {
            log::debug!("'{slug}' is already displayed");
            return None;
        }

        self.generation += 1;
        let pending = PendingTransition {
            slug: slug.to_owned(),
            generation: self.generation,
        };
        self.in_flight = Some(pending.clone());
        self.last_error = None;
        log::info!("loading scene '{slug}'");
        self.handlers.started(slug);
        Some(pending)
    }

    /// Second half of [`load_scene`](Self::load_scene): commit or report
    /// `result`.
    ///
    /// Results for a transition that is no longer in flight (cancelled or
    /// superseded) are discarded. Returns `true` when the scene was
    /// committed.
    pub fn finish_load(
        &mut self,
        pending: &PendingTransition,
        result: Result<Scene, TourError>,
    ) -> bool {
        if self.in_flight.as_ref() != Some(pending) {
            log::debug!(
                "discarding stale result for '{}' (transition {})",
                pending.slug,
                pending.generation
            );
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(scene) => match self.commit_scene(scene) {
                Ok(()) => true,
                Err(e) => {
                    self.report_viewer_failure(&e.0);
                    self.handlers.failed(&pending.slug, &e.0);
                    false
                }
            },
            Err(e) => {
                self.fail_transition(&pending.slug, &e);
                false
            }
        }
    }

    /// Abandon the in-flight transition. Its late result will be discarded.
    pub fn cancel_transition(&mut self) -> bool {
        match self.in_flight.take() {
            Some(pending) => {
                log::info!("cancelled transition to '{}'", pending.slug);
                true
            }
            None => false,
        }
    }

    /// Act on a selected marker.
    ///
    /// Navigation markers load their target; info markers raise an info
    /// toast; floor markers navigate when they have a target and inform
    /// otherwise. Returns `true` when a scene was committed.
    pub fn select_marker(&mut self, payload: &MarkerPayload) -> bool {
        match (payload.kind, payload.target_slug.as_deref()) {
            (HotspotType::Scene | HotspotType::Floor, Some(target)) => {
                self.load_scene(target)
            }
            (HotspotType::Scene, None) => {
                log::warn!("navigation marker without a target scene ignored");
                false
            }
            (HotspotType::Info | HotspotType::Floor, _) => {
                if payload.description.trim().is_empty() {
                    log::warn!("info marker without text ignored");
                } else {
                    let _ = self
                        .notifications
                        .push(Severity::Info, payload.description.clone());
                }
                false
            }
        }
    }

    /// Fetch and display the featured scene.
    ///
    /// With `with_intro`, the camera starts at the little-planet pose and
    /// [`tick`](Self::tick) animates it to the scene's authored pose.
    ///
    /// Follows the same sequencing as [`load_scene`](Self::load_scene): the
    /// request is dropped, returning `Ok(false)`, while another transition
    /// is in flight. Returns `Ok(true)` when the scene was committed.
    pub fn open_featured_scene(
        &mut self,
        with_intro: bool,
    ) -> Result<bool, TourError> {
        if let Some(pending) = &self.in_flight {
            log::debug!(
                "dropping featured scene request: '{}' still loading",
                pending.slug
            );
            return Ok(false);
        }

        self.generation += 1;
        self.in_flight = Some(PendingTransition {
            slug: FEATURED_TRANSITION.to_owned(),
            generation: self.generation,
        });
        self.last_error = None;
        log::info!("loading featured scene");
        self.handlers.started(FEATURED_TRANSITION);

        let result = self.source.fetch_featured();
        self.in_flight = None;
        let scene = match result {
            Ok(scene) => scene,
            Err(e) => {
                self.fail_transition(FEATURED_TRANSITION, &e);
                return Err(e);
            }
        };
        let end = scene.initial_pose(self.options.camera.default_fov);

        if let Err(e) = self.commit_scene(scene) {
            self.report_viewer_failure(&e.0);
            self.handlers.failed(FEATURED_TRANSITION, &e.0);
            return Err(e.into());
        }

        if with_intro {
            self.start_intro(end);
        } else if self.options.camera.auto_rotate {
            self.viewer.start_auto_rotate();
        }
        Ok(true)
    }

    /// Re-fetch the menu's scene list. A failure keeps the previous list.
    pub fn refresh_scene_list(&mut self) {
        match self.source.fetch_scene_list() {
            Ok(list) => {
                log::info!("scene list: {} scenes", list.len());
                self.scene_list = list;
            }
            Err(e) => log::error!("failed to fetch scene list: {e}"),
        }
    }

    // -- Intro and per-frame work -----------------------------------------

    /// Advance per-frame work to `now`: the intro animation, delayed
    /// auto-rotation and toast expiry.
    pub fn tick(&mut self, now: Instant) {
        let viewer = &mut self.viewer;
        let frame = self.intro.as_mut().and_then(|anim| {
            anim.tick_and_apply(now, |frame| viewer.set_pose(frame.pose.to_viewer()))
        });
        if let Some(frame) = frame {
            if frame.finished {
                log::info!("intro finished");
                self.intro = None;
                self.schedule_resume(Some(now));
            }
        }

        let delay = self.resume_delay();
        if let Some(resume) = &mut self.resume {
            let since = *resume.since.get_or_insert(now);
            if now.saturating_duration_since(since) >= delay {
                self.resume = None;
                self.viewer.start_auto_rotate();
            }
        }

        self.notifications.prune(now);
    }

    /// Jump the intro to its end pose. Auto-rotation resumes as after a
    /// natural finish.
    pub fn skip_intro(&mut self) {
        let Some(mut anim) = self.intro.take() else {
            return;
        };
        let viewer = &mut self.viewer;
        let skipped =
            anim.skip_and_apply(|frame| viewer.set_pose(frame.pose.to_viewer()));
        if skipped.is_some() {
            log::info!("intro skipped");
            self.schedule_resume(None);
        }
    }

    /// Halt the intro where it is, without resuming auto-rotation.
    pub fn stop_intro(&mut self) {
        if let Some(mut anim) = self.intro.take() {
            anim.stop();
            log::info!("intro stopped");
        }
    }

    /// Start or stop idle auto-rotation. Cancels a pending resume.
    pub fn toggle_auto_rotate(&mut self) {
        self.resume = None;
        if self.viewer.is_auto_rotating() {
            self.viewer.stop_auto_rotate();
        } else {
            self.viewer.start_auto_rotate();
        }
    }

    // -- Menu and panels --------------------------------------------------

    /// Open the location menu, fetching the scene list on first use.
    pub fn open_menu(&mut self) {
        if self.scene_list.is_empty() {
            self.refresh_scene_list();
        }
        self.menu_open = true;
    }

    /// Close the location menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Flip the location menu.
    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Flip the scene info panel.
    pub fn toggle_info_panel(&mut self) {
        self.info_panel_open = !self.info_panel_open;
    }

    /// Close the menu and the info panel.
    pub fn close_panels(&mut self) {
        self.menu_open = false;
        self.info_panel_open = false;
    }

    // -- Viewer failures --------------------------------------------------

    /// Put the view into the full-overlay error state.
    pub fn report_viewer_failure(&mut self, message: &str) {
        log::error!("viewer failure: {message}");
        self.viewer_error = Some(message.to_owned());
    }

    /// Leave the overlay error state.
    pub fn clear_viewer_failure(&mut self) {
        self.viewer_error = None;
    }

    // -- Internals --------------------------------------------------------

    /// Swap the viewer to `scene`. On error nothing has changed.
    fn commit_scene(&mut self, scene: Scene) -> Result<(), ViewerError> {
        let url = scene
            .panorama_image
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| proxied_media_url(u, &self.options.api))
            .ok_or_else(|| {
                ViewerError(format!(
                    "scene '{}' has no panorama image",
                    scene.slug
                ))
            })?;
        self.viewer.set_panorama(&url)?;

        for (hotspot, issue) in scene.invalid_hotspots() {
            log::warn!(
                "scene '{}': hotspot {} is invalid: {issue}",
                scene.slug,
                hotspot.id
            );
        }

        self.viewer.clear_markers();
        for marker in build_markers(&scene.hotspots, &self.options.markers) {
            self.viewer.add_marker(&marker);
        }

        // A transition during the intro supersedes it.
        if self.intro.take().is_some() {
            self.schedule_resume(None);
        }
        let pose = scene.initial_pose(self.options.camera.default_fov);
        self.viewer.set_pose(pose.to_viewer());

        log::info!(
            "showing '{}' ({} hotspots)",
            scene.slug,
            scene.hotspots.len()
        );
        self.viewer_error = None;
        self.menu_open = false;
        let scene = self.current.insert(scene);
        self.handlers.completed(scene);
        Ok(())
    }

    fn fail_transition(&mut self, slug: &str, error: &TourError) {
        log::error!("failed to load '{slug}': {error}");
        let message = error.user_message();
        let _ = self.notifications.push(Severity::Error, message.clone());
        self.handlers.failed(slug, &message);
        self.last_error = Some(message);
    }

    fn start_intro(&mut self, end: CameraPose) {
        let intro = &self.options.intro;
        let start = intro.start_pose();
        let anim = CameraAnimation::new(start, end, intro.duration())
            .with_easing(intro.easing)
            .with_delay(intro.delay());

        self.resume_after_intro =
            self.options.camera.auto_rotate || self.viewer.is_auto_rotating();
        self.resume = None;
        self.viewer.stop_auto_rotate();
        self.viewer.set_pose(start.to_viewer());
        log::info!("intro: {start:?} -> {end:?}");
        self.intro = Some(anim);
    }

    fn schedule_resume(&mut self, since: Option<Instant>) {
        if self.resume_after_intro {
            self.resume = Some(PendingResume { since });
        }
    }

    fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.options.camera.auto_rotate_resume_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::api::StaticSceneSource;
    use crate::marker::marker_id;
    use crate::test_support::{
        controller_with, fixture_controller, info_hotspot, nav_hotspot, scene,
        FixtureController,
    };
    use crate::util::angle::to_radians;
    use crate::viewer::HeadlessViewer;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Scenes "a" (no hotspots) and "b" (one hotspot back to "a").
    fn two_scenes() -> FixtureController {
        fixture_controller(vec![
            scene("a", Vec::new()),
            scene("b", vec![nav_hotspot(1, "a")]),
        ])
    }

    fn nav_payload(target: &str) -> MarkerPayload {
        MarkerPayload {
            kind: HotspotType::Scene,
            target_slug: Some(target.into()),
            description: String::new(),
        }
    }

    #[test]
    fn loading_current_scene_is_a_no_op() {
        let mut c = two_scenes();
        let fetches = c.source().fetches();
        let loads = c.viewer().panorama_loads();

        assert!(!c.load_scene("a"));
        assert_eq!(c.source().fetches(), fetches);
        assert_eq!(c.viewer().panorama_loads(), loads);
        assert_eq!(c.status(), NavigationStatus::Idle);
        assert_eq!(c.current_scene().map(|s| s.slug.as_str()), Some("a"));
    }

    #[test]
    fn selecting_nav_marker_rebuilds_markers() {
        let mut c = two_scenes();
        assert!(c.viewer().markers().is_empty());

        assert!(c.select_marker(&nav_payload("b")));
        assert_eq!(c.current_scene().map(|s| s.slug.as_str()), Some("b"));
        let markers = c.viewer().markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, marker_id(1));
        assert_eq!(markers[0].payload.target_slug.as_deref(), Some("a"));
        assert_eq!(
            c.viewer().panorama(),
            Some("/media/panoramas/b.jpg"),
            "backend media is proxied"
        );
    }

    #[test]
    fn commit_applies_initial_pose_in_radians() {
        let mut b = scene("b", Vec::new());
        b.initial_pitch = 15.0;
        b.initial_yaw = -90.0;
        b.initial_fov = Some(75.0);
        let mut c = fixture_controller(vec![scene("a", Vec::new()), b]);

        assert!(c.load_scene("b"));
        let pose = c.viewer().pose();
        assert_eq!(pose.fov, 75.0);
        assert!((pose.pitch - to_radians(15.0)).abs() < 1e-12);
        assert!((pose.yaw - to_radians(-90.0)).abs() < 1e-12);
    }

    #[test]
    fn request_during_transition_is_dropped() {
        let mut c = fixture_controller(vec![
            scene("a", Vec::new()),
            scene("b", Vec::new()),
            scene("c", Vec::new()),
        ]);
        let pending = c.begin_load("b").unwrap();
        assert_eq!(c.status(), NavigationStatus::Transitioning);

        let fetches = c.source().fetches();
        assert!(!c.load_scene("c"));
        assert_eq!(c.source().fetches(), fetches);

        let result = c.source().fetch_scene("b");
        assert!(c.finish_load(&pending, result));
        assert_eq!(c.current_scene().map(|s| s.slug.as_str()), Some("b"));
        assert_eq!(c.status(), NavigationStatus::Idle);
    }

    #[test]
    fn cancelled_result_is_discarded() {
        let mut c = fixture_controller(vec![
            scene("a", Vec::new()),
            scene("b", vec![nav_hotspot(7, "a")]),
            scene("c", Vec::new()),
        ]);
        let stale = c.begin_load("b").unwrap();
        assert!(c.cancel_transition());
        assert!(!c.cancel_transition());

        assert!(c.load_scene("c"));
        let late = c.source().fetch_scene("b");
        assert!(!c.finish_load(&stale, late));

        // Never a mix of "c" and "b".
        assert_eq!(c.current_scene().map(|s| s.slug.as_str()), Some("c"));
        assert!(c.viewer().markers().is_empty());
        assert_eq!(c.viewer().panorama(), Some("/media/panoramas/c.jpg"));
    }

    #[test]
    fn failed_fetch_keeps_scene_and_records_error() {
        let source = StaticSceneSource::new(vec![
            scene("a", Vec::new()),
            scene("x", Vec::new()),
        ])
        .failing("x", 500);
        let mut c = controller_with(source, TourOptions::default());
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&errors);
        c.on_transition_error(move |slug, msg| {
            sink.borrow_mut().push((slug.to_owned(), msg.to_owned()));
        });
        let loads = c.viewer().panorama_loads();

        assert!(!c.load_scene("x"));
        assert_eq!(c.current_scene().map(|s| s.slug.as_str()), Some("a"));
        assert_eq!(c.viewer().panorama_loads(), loads);
        assert_eq!(c.status(), NavigationStatus::Error);
        assert!(!c.last_error().unwrap_or_default().is_empty());
        assert_eq!(errors.borrow().len(), 1);
        assert_eq!(errors.borrow()[0].0, "x");
        assert!(c
            .notifications()
            .visible()
            .any(|n| n.severity() == Severity::Error));
    }

    #[test]
    fn missing_scene_names_slug() {
        let mut c = two_scenes();
        assert!(!c.load_scene("nowhere"));
        assert!(c.last_error().unwrap_or_default().contains("nowhere"));
    }

    #[test]
    fn next_transition_clears_error() {
        let source = StaticSceneSource::new(vec![
            scene("a", Vec::new()),
            scene("b", Vec::new()),
        ])
        .failing("x", 503);
        let mut c = controller_with(source, TourOptions::default());
        assert!(!c.load_scene("x"));
        assert!(c.last_error().is_some());
        assert!(c.load_scene("b"));
        assert_eq!(c.last_error(), None);
        assert_eq!(c.status(), NavigationStatus::Idle);
    }

    #[test]
    fn handlers_fire_in_order() {
        let mut c = two_scenes();
        let log = Rc::new(RefCell::new(Vec::new()));
        let (l1, l2) = (Rc::clone(&log), Rc::clone(&log));
        c.on_transition_start(move |slug| l1.borrow_mut().push(format!("start {slug}")));
        c.on_transition_complete(move |scene| {
            l2.borrow_mut().push(format!("done {}", scene.slug));
        });

        assert!(c.load_scene("b"));
        assert_eq!(*log.borrow(), ["start b", "done b"]);
    }

    #[test]
    fn info_marker_raises_toast() {
        let mut c = two_scenes();
        let marker = crate::marker::build_marker(
            &info_hotspot(3, "Masjid", "Built in 2019"),
            &c.options().markers,
        );
        assert!(!c.select_marker(&marker.payload));
        let messages: Vec<_> =
            c.notifications().visible().map(|n| n.message().to_owned()).collect();
        assert_eq!(messages, ["Built in 2019"]);
        assert_eq!(c.current_scene().map(|s| s.slug.as_str()), Some("a"));
    }

    #[test]
    fn floor_marker_navigates_only_with_target() {
        let mut c = two_scenes();
        let mut payload = nav_payload("b");
        payload.kind = HotspotType::Floor;
        assert!(c.select_marker(&payload));
        assert!(c.is_current("b"));

        payload.target_slug = None;
        payload.description = "Second floor".into();
        assert!(!c.select_marker(&payload));
        assert!(c.notifications().visible().any(|n| n.message() == "Second floor"));
    }

    #[test]
    fn nav_marker_without_target_is_ignored() {
        let mut c = two_scenes();
        let mut payload = nav_payload("b");
        payload.target_slug = None;
        let fetches = c.source().fetches();
        assert!(!c.select_marker(&payload));
        assert_eq!(c.source().fetches(), fetches);
    }

    #[test]
    fn scene_without_panorama_sets_viewer_error_and_rolls_back() {
        let mut broken = scene("b", vec![nav_hotspot(1, "a")]);
        broken.panorama_image = None;
        let mut c = fixture_controller(vec![scene("a", Vec::new()), broken]);

        assert!(!c.load_scene("b"));
        assert!(c.is_current("a"));
        assert!(c.viewer().markers().is_empty());
        assert!(c.viewer_error().is_some());
        assert_eq!(c.status(), NavigationStatus::Idle);

        c.clear_viewer_failure();
        assert_eq!(c.viewer_error(), None);
    }

    #[test]
    fn transition_closes_menu() {
        let mut c = two_scenes();
        c.open_menu();
        assert!(c.is_menu_open());
        assert_eq!(c.scene_list().len(), 2);
        assert_eq!(c.menu_groups().len(), 1);

        assert!(c.load_scene("b"));
        assert!(!c.is_menu_open());
    }

    #[test]
    fn scene_list_failure_keeps_previous_list() {
        let mut c = two_scenes();
        c.refresh_scene_list();
        assert_eq!(c.scene_list().len(), 2);

        let source = StaticSceneSource::new(vec![scene("a", Vec::new())])
            .failing("", 500);
        let mut failing = controller_with(source, TourOptions::default());
        failing.refresh_scene_list();
        assert!(failing.scene_list().is_empty());
    }

    fn featured_tour(options: TourOptions) -> FixtureController {
        let mut lobby = scene("lobby", Vec::new());
        lobby.is_featured = true;
        lobby.initial_pitch = -10.0;
        lobby.initial_yaw = 40.0;
        let source = StaticSceneSource::new(vec![lobby]);
        NavigationController::new(source, HeadlessViewer::new(), options)
    }

    #[test]
    fn featured_intro_runs_from_little_planet() {
        let mut c = featured_tour(TourOptions::default());
        assert!(c.open_featured_scene(true).unwrap());
        assert!(c.is_intro_running());
        assert_eq!(c.viewer().pose(), CameraPose::little_planet().to_viewer());

        let t0 = Instant::now();
        c.tick(t0);
        // Still inside the 500 ms start delay.
        assert_eq!(c.viewer().pose(), CameraPose::little_planet().to_viewer());

        c.tick(t0 + ms(500));
        c.tick(t0 + ms(2000));
        assert!(c.is_intro_running());
        c.tick(t0 + ms(3500));
        assert!(!c.is_intro_running());
        assert_eq!(
            c.viewer().pose(),
            CameraPose::new(90.0, -10.0, 40.0).to_viewer()
        );
    }

    #[test]
    fn auto_rotate_resumes_after_delay() {
        let mut options = TourOptions::default();
        options.camera.auto_rotate = true;
        let mut c = featured_tour(options);
        assert!(c.open_featured_scene(true).unwrap());
        assert!(!c.viewer().is_auto_rotating());

        let t0 = Instant::now();
        c.tick(t0);
        c.tick(t0 + ms(500));
        c.tick(t0 + ms(3500));
        assert!(!c.is_intro_running());
        assert!(!c.viewer().is_auto_rotating());

        c.tick(t0 + ms(4499));
        assert!(!c.viewer().is_auto_rotating());
        c.tick(t0 + ms(4500));
        assert!(c.viewer().is_auto_rotating());
    }

    #[test]
    fn skip_intro_applies_end_pose() {
        let mut options = TourOptions::default();
        options.camera.auto_rotate = true;
        let mut c = featured_tour(options);
        assert!(c.open_featured_scene(true).unwrap());
        let t0 = Instant::now();
        c.tick(t0 + ms(600));

        c.skip_intro();
        assert!(!c.is_intro_running());
        let end = CameraPose::new(90.0, -10.0, 40.0).to_viewer();
        assert_eq!(c.viewer().pose(), end);

        // A second skip does nothing.
        let updates = c.viewer().pose_updates();
        c.skip_intro();
        assert_eq!(c.viewer().pose_updates(), updates);

        c.tick(t0 + ms(700));
        c.tick(t0 + ms(1700));
        assert!(c.viewer().is_auto_rotating());
    }

    #[test]
    fn stop_intro_does_not_resume() {
        let mut options = TourOptions::default();
        options.camera.auto_rotate = true;
        let mut c = featured_tour(options);
        assert!(c.open_featured_scene(true).unwrap());
        c.stop_intro();
        let t0 = Instant::now();
        c.tick(t0);
        c.tick(t0 + ms(10_000));
        assert!(!c.viewer().is_auto_rotating());
    }

    #[test]
    fn featured_without_intro_uses_initial_pose() {
        let mut c = featured_tour(TourOptions::default());
        assert!(c.open_featured_scene(false).unwrap());
        assert!(!c.is_intro_running());
        assert_eq!(
            c.viewer().pose(),
            CameraPose::new(90.0, -10.0, 40.0).to_viewer()
        );
    }

    #[test]
    fn featured_failure_is_returned() {
        let source = StaticSceneSource::default();
        let mut c = NavigationController::new(
            source,
            HeadlessViewer::new(),
            TourOptions::default(),
        );
        assert!(c.open_featured_scene(true).is_err());
        assert!(c.current_scene().is_none());
        assert_eq!(c.status(), NavigationStatus::Error);
    }

    /// Controller with nothing displayed yet.
    fn lobby_and_b(source: StaticSceneSource) -> FixtureController {
        NavigationController::new(source, HeadlessViewer::new(), TourOptions::default())
    }

    /// Featured "lobby" plus a plain "b".
    fn lobby_and_b_source() -> StaticSceneSource {
        let mut lobby = scene("lobby", Vec::new());
        lobby.is_featured = true;
        StaticSceneSource::new(vec![lobby, scene("b", Vec::new())])
    }

    #[test]
    fn featured_open_dropped_while_transition_in_flight() {
        let mut c = lobby_and_b(lobby_and_b_source());
        let pending = c.begin_load("b").unwrap();
        let fetches = c.source().fetches();

        assert!(!c.open_featured_scene(false).unwrap());
        assert_eq!(c.source().fetches(), fetches);
        assert!(c.current_scene().is_none());
        assert_eq!(c.pending(), Some(&pending));
        assert_eq!(c.status(), NavigationStatus::Transitioning);

        let result = c.source().fetch_scene("b");
        assert!(c.finish_load(&pending, result));
        assert!(c.is_current("b"));
        assert_eq!(c.status(), NavigationStatus::Idle);

        assert!(c.open_featured_scene(false).unwrap());
        assert!(c.is_current("lobby"));
        assert_eq!(c.status(), NavigationStatus::Idle);
    }

    #[test]
    fn featured_open_invalidates_older_tickets() {
        let mut c = lobby_and_b(lobby_and_b_source());
        let stale = c.begin_load("b").unwrap();
        assert!(c.cancel_transition());

        assert!(c.open_featured_scene(false).unwrap());
        let result = c.source().fetch_scene("b");
        assert!(!c.finish_load(&stale, result));
        assert!(c.is_current("lobby"));
    }

    #[test]
    fn featured_open_clears_previous_error() {
        let mut c = lobby_and_b(lobby_and_b_source().failing("x", 500));
        assert!(!c.load_scene("x"));
        assert_eq!(c.status(), NavigationStatus::Error);

        assert!(c.open_featured_scene(false).unwrap());
        assert!(c.is_current("lobby"));
        assert_eq!(c.last_error(), None);
        assert_eq!(c.status(), NavigationStatus::Idle);
    }

    #[test]
    fn featured_handlers_pair_start_with_outcome() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let watch = |c: &mut FixtureController| {
            let (l1, l2, l3) = (Rc::clone(&log), Rc::clone(&log), Rc::clone(&log));
            c.on_transition_start(move |slug| l1.borrow_mut().push(format!("start {slug}")));
            c.on_transition_error(move |slug, _| {
                l2.borrow_mut().push(format!("error {slug}"));
            });
            c.on_transition_complete(move |scene| {
                l3.borrow_mut().push(format!("done {}", scene.slug));
            });
        };

        let mut failing =
            lobby_and_b(lobby_and_b_source().failing(FEATURED_TRANSITION, 500));
        watch(&mut failing);
        assert!(failing.open_featured_scene(true).is_err());
        assert_eq!(*log.borrow(), ["start featured", "error featured"]);

        log.borrow_mut().clear();
        let mut ok = lobby_and_b(lobby_and_b_source());
        watch(&mut ok);
        assert!(ok.open_featured_scene(false).unwrap());
        assert_eq!(*log.borrow(), ["start featured", "done lobby"]);
    }

    #[test]
    fn panels_toggle_and_close() {
        let mut c = two_scenes();
        c.toggle_info_panel();
        c.toggle_menu();
        assert!(c.is_info_panel_open() && c.is_menu_open());
        c.close_panels();
        assert!(!c.is_info_panel_open() && !c.is_menu_open());
        c.toggle_menu();
        c.close_menu();
        assert!(!c.is_menu_open());
    }
}
