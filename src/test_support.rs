//! Builders shared by unit tests.

use crate::api::StaticSceneSource;
use crate::navigation::NavigationController;
use crate::options::TourOptions;
use crate::scene::{Hotspot, HotspotType, Scene, SceneSummary};
use crate::viewer::HeadlessViewer;

/// Stable id derived from a slug, so tests can refer to scenes by slug.
pub(crate) fn scene_id(slug: &str) -> u64 {
    slug.bytes()
        .fold(0, |acc: u64, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)))
}

pub(crate) fn scene(slug: &str, hotspots: Vec<Hotspot>) -> Scene {
    Scene {
        id: scene_id(slug),
        slug: slug.to_owned(),
        title: slug.to_uppercase(),
        description: String::new(),
        building: "Gedung Utama".into(),
        floor: Some(1),
        floor_description: String::new(),
        location: "Yogyakarta".into(),
        author: String::new(),
        published_date: None,
        panorama_image: Some(format!(
            "http://127.0.0.1:8000/media/panoramas/{slug}.jpg"
        )),
        thumbnail: None,
        initial_pitch: 0.0,
        initial_yaw: 0.0,
        initial_fov: None,
        is_featured: false,
        hotspots,
    }
}

pub(crate) fn nav_hotspot(id: u64, target: &str) -> Hotspot {
    Hotspot {
        id,
        from_scene: None,
        to_scene: Some(scene_id(target)),
        hotspot_type: HotspotType::Scene,
        to_scene_slug: Some(target.to_owned()),
        to_scene_title: Some(target.to_uppercase()),
        text: format!("To {target}"),
        info_description: String::new(),
        pitch: -5.0,
        yaw: 30.0,
    }
}

pub(crate) fn info_hotspot(id: u64, text: &str, description: &str) -> Hotspot {
    Hotspot {
        id,
        from_scene: None,
        to_scene: None,
        hotspot_type: HotspotType::Info,
        to_scene_slug: None,
        to_scene_title: None,
        text: text.to_owned(),
        info_description: description.to_owned(),
        pitch: 10.0,
        yaw: -45.0,
    }
}

pub(crate) fn summary(
    slug: &str,
    building: &str,
    floor: Option<u8>,
) -> SceneSummary {
    SceneSummary {
        id: scene_id(slug),
        slug: slug.to_owned(),
        title: slug.to_uppercase(),
        thumbnail: None,
        building: building.to_owned(),
        floor,
        location: String::new(),
        is_featured: false,
    }
}

pub(crate) type FixtureController =
    NavigationController<StaticSceneSource, HeadlessViewer>;

/// Controller over `scenes` with the first scene already displayed.
pub(crate) fn fixture_controller(scenes: Vec<Scene>) -> FixtureController {
    controller_with(StaticSceneSource::new(scenes), TourOptions::default())
}

/// Controller over `source`, showing its first scene when it has one.
pub(crate) fn controller_with(
    source: StaticSceneSource,
    options: TourOptions,
) -> FixtureController {
    let first = source.scenes().first().map(|s| s.slug.clone());
    let mut controller =
        NavigationController::new(source, HeadlessViewer::new(), options);
    if let Some(slug) = first {
        assert!(controller.load_scene(&slug), "fixture scene '{slug}' failed");
    }
    controller
}
