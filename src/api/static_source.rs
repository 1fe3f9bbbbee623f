//! Fixture-backed scene source.

use std::cell::Cell;
use std::path::Path;

use rustc_hash::FxHashMap;

use super::{HotspotStore, NewHotspot, SceneSource};
use crate::error::TourError;
use crate::scene::{Hotspot, Scene, SceneSummary};

/// Serves scenes from memory.
///
/// Individual slugs can be made to fail with an HTTP status, which is how
/// offline walks and tests exercise the error paths. Hotspot writes mutate
/// the stored scenes.
#[derive(Debug, Default)]
pub struct StaticSceneSource {
    scenes: Vec<Scene>,
    failures: FxHashMap<String, u16>,
    next_hotspot_id: u64,
    fetches: Cell<usize>,
}

impl StaticSceneSource {
    /// Source over `scenes`, in list order.
    #[must_use]
    pub fn new(scenes: Vec<Scene>) -> Self {
        let next_hotspot_id = scenes
            .iter()
            .flat_map(|s| &s.hotspots)
            .map(|h| h.id)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            scenes,
            failures: FxHashMap::default(),
            next_hotspot_id,
            fetches: Cell::new(0),
        }
    }

    /// Load a fixture: a JSON array of scene detail records.
    pub fn from_json_file(path: &Path) -> Result<Self, TourError> {
        let content = std::fs::read_to_string(path)?;
        let scenes: Vec<Scene> = super::decode_list(&content)?;
        log::info!(
            "loaded {} fixture scenes from {}",
            scenes.len(),
            path.display()
        );
        Ok(Self::new(scenes))
    }

    /// Make every fetch of `slug` fail with `status`.
    #[must_use]
    pub fn failing(mut self, slug: &str, status: u16) -> Self {
        let _ = self.failures.insert(slug.to_owned(), status);
        self
    }

    /// Number of fetch calls served so far, failures included.
    #[must_use]
    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }

    /// Stored scenes.
    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    fn check_failure(&self, key: &str) -> Result<(), TourError> {
        self.fetches.set(self.fetches.get() + 1);
        match self.failures.get(key) {
            Some(&code) => Err(TourError::Status {
                code,
                detail: None,
            }),
            None => Ok(()),
        }
    }
}

impl SceneSource for StaticSceneSource {
    fn fetch_scene_list(&self) -> Result<Vec<SceneSummary>, TourError> {
        self.check_failure("")?;
        Ok(self.scenes.iter().map(Scene::summary).collect())
    }

    fn fetch_scene(&self, slug: &str) -> Result<Scene, TourError> {
        self.check_failure(slug)?;
        self.scenes
            .iter()
            .find(|s| s.slug == slug)
            .cloned()
            .ok_or_else(|| TourError::NotFound(slug.to_owned()))
    }

    fn fetch_featured(&self) -> Result<Scene, TourError> {
        self.check_failure("featured")?;
        self.scenes
            .iter()
            .find(|s| s.is_featured)
            .or_else(|| self.scenes.first())
            .cloned()
            .ok_or_else(|| TourError::NotFound("featured scene".into()))
    }
}

impl HotspotStore for StaticSceneSource {
    fn create_hotspot(
        &mut self,
        hotspot: &NewHotspot,
    ) -> Result<Hotspot, TourError> {
        let target = hotspot
            .to_scene
            .and_then(|id| self.scenes.iter().find(|s| s.id == id))
            .map(|s| (s.slug.clone(), s.title.clone()));
        let owner = self
            .scenes
            .iter_mut()
            .find(|s| s.id == hotspot.from_scene)
            .ok_or_else(|| {
                TourError::NotFound(format!("scene {}", hotspot.from_scene))
            })?;

        let created = Hotspot {
            id: self.next_hotspot_id,
            from_scene: Some(hotspot.from_scene),
            to_scene: hotspot.to_scene,
            hotspot_type: hotspot.hotspot_type,
            to_scene_slug: target.as_ref().map(|(slug, _)| slug.clone()),
            to_scene_title: target.map(|(_, title)| title),
            text: hotspot.text.clone(),
            info_description: hotspot.info_description.clone(),
            pitch: hotspot.pitch,
            yaw: hotspot.yaw,
        };
        self.next_hotspot_id += 1;
        owner.hotspots.push(created.clone());
        Ok(created)
    }

    fn delete_hotspot(&mut self, id: u64) -> Result<(), TourError> {
        for scene in &mut self.scenes {
            if let Some(pos) = scene.hotspots.iter().position(|h| h.id == id) {
                let _ = scene.hotspots.remove(pos);
                return Ok(());
            }
        }
        Err(TourError::NotFound(format!("hotspot {id}")))
    }
}
