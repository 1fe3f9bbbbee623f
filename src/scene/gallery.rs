//! Gallery and menu shaping.
//!
//! The gallery grid and the in-viewer location menu both list scenes
//! grouped by building, in the order the backend returned them.

use rustc_hash::FxHashMap;

use super::SceneSummary;

/// Group name for scenes that have no building set.
pub const UNGROUPED_BUILDING: &str = "Other";

/// Scenes of one building, in backend order.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingGroup<'a> {
    /// Building name.
    pub building: &'a str,
    /// Scenes in this building.
    pub scenes: Vec<&'a SceneSummary>,
}

/// Group scenes by building, keeping first-seen building order.
#[must_use]
pub fn group_by_building(scenes: &[SceneSummary]) -> Vec<BuildingGroup<'_>> {
    let mut groups: Vec<BuildingGroup<'_>> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for scene in scenes {
        let building = if scene.building.trim().is_empty() {
            UNGROUPED_BUILDING
        } else {
            scene.building.as_str()
        };
        let slot = *index.entry(building).or_insert_with(|| {
            groups.push(BuildingGroup {
                building,
                scenes: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].scenes.push(scene);
    }

    groups
}

/// Short floor badge: `"Floor 3"`, or `"Outdoor"` without a floor.
#[must_use]
pub fn floor_label(floor: Option<u8>) -> String {
    floor.map_or_else(|| "Outdoor".to_owned(), |n| format!("Floor {n}"))
}

/// Full location line: `"Main Building, Floor 3"` or
/// `"Main Building (Outdoor area)"`.
#[must_use]
pub fn location_label(building: &str, floor: Option<u8>) -> String {
    match floor {
        Some(n) => format!("{building}, Floor {n}"),
        None => format!("{building} (Outdoor area)"),
    }
}

/// The featured scene of a list, or the first scene when none is flagged.
#[must_use]
pub fn entry_scene(scenes: &[SceneSummary]) -> Option<&SceneSummary> {
    scenes
        .iter()
        .find(|s| s.is_featured)
        .or_else(|| scenes.first())
}
