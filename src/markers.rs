use std::{fs, io::ErrorKind, path::Path};

use anyhow::{Result, anyhow};
use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::PhysicalSize;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceMarker {
    pub name: String,
    /// Real-world width of the printed marker, in metres
    pub physical_width: f32,
    /// Real-world height of the printed marker, in metres
    pub physical_height: f32,
}

impl ReferenceMarker {
    pub fn new(name: &str, physical_width: f32, physical_height: f32) -> Self {
        ReferenceMarker {
            name: String::from(name),
            physical_width,
            physical_height,
        }
    }

    pub fn physical_size(&self) -> PhysicalSize {
        (self.physical_width, self.physical_height)
    }
}

/// Manifest file shape: the group name plus a flat list of markers
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MarkerManifest {
    name: String,
    markers: Vec<ReferenceMarker>,
}

/// A named group of reference markers, keyed by marker name.
/// Loaded once when the session starts; immutable for its lifetime.
#[derive(Debug, Clone, Default)]
pub struct MarkerGroup {
    pub name: String,
    markers: IndexMap<String, ReferenceMarker>,
}

impl MarkerGroup {
    pub fn new(name: &str) -> MarkerGroup {
        MarkerGroup {
            name: String::from(name),
            markers: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, marker: ReferenceMarker) {
        self.markers.insert(String::from(&marker.name), marker);
    }

    pub fn get(&self, name: &str) -> Option<&ReferenceMarker> {
        self.markers.get(name)
    }

    pub fn markers(&self) -> impl Iterator<Item = &ReferenceMarker> {
        self.markers.values()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

pub fn parse_marker_group(text: &str) -> Result<MarkerGroup> {
    match serde_json::from_str::<MarkerManifest>(text) {
        Ok(manifest) => {
            let mut group = MarkerGroup::new(&manifest.name);
            for marker in manifest.markers {
                // Duplicate names: last entry wins
                group.insert(marker);
            }
            Ok(group)
        }
        Err(e) => Err(anyhow!("Failed to parse marker manifest: {}", e)),
    }
}

/// Load a marker group manifest from disk. A missing file is not an error:
/// tracking simply runs with zero markers configured.
pub fn load_marker_group(manifest_path: &Path) -> Result<MarkerGroup> {
    match fs::read_to_string(manifest_path) {
        Err(e) => {
            if e.kind() == ErrorKind::NotFound {
                warn!(
                    "Marker manifest not found at \"{}\"; using an empty group",
                    manifest_path.display()
                );
                Ok(MarkerGroup::default())
            } else {
                Err(anyhow!(
                    "Failed to read marker manifest \"{}\": {}",
                    manifest_path.display(),
                    e
                ))
            }
        }
        Ok(text) => {
            let group = parse_marker_group(&text)?;
            info!(
                "Loaded {} reference markers OK from group \"{}\"",
                group.len(),
                group.name
            );
            debug!("Marker group parsed from file: {:?}", group);
            Ok(group)
        }
    }
}
