use std::{fs, path::Path};

use anyhow::{Result, anyhow};
use log::{debug, warn};
use nalgebra::Vector3;
use serde::Deserialize;

use crate::scene::{Geometry, Node};

/// One node of a pre-authored model scene, as stored on disk
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ModelNode {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    mesh: Option<String>,
    #[serde(default)]
    position: Option<[f32; 3]>,
    #[serde(default)]
    euler_angles: Option<[f32; 3]>,
    #[serde(default)]
    scale: Option<[f32; 3]>,
    #[serde(default)]
    children: Vec<ModelNode>,
}

#[derive(Deserialize, Debug)]
struct ModelScene {
    nodes: Vec<ModelNode>,
}

fn into_node(model: ModelNode) -> Node {
    let mut node = match model.mesh {
        Some(source) => Node::with_geometry(Geometry::Mesh { source }),
        None => Node::new(),
    };
    node.name = model.name;
    if let Some([x, y, z]) = model.position {
        node.position = Vector3::new(x, y, z);
    }
    if let Some([x, y, z]) = model.euler_angles {
        node.euler_angles = Vector3::new(x, y, z);
    }
    if let Some([x, y, z]) = model.scale {
        node.scale = Vector3::new(x, y, z);
    }
    for child in model.children {
        node.add_child_node(into_node(child));
    }
    node
}

/// Parse a model scene description into its top-level nodes
pub fn parse_model_scene(text: &str) -> Result<Vec<Node>> {
    match serde_json::from_str::<ModelScene>(text) {
        Ok(scene) => Ok(scene.nodes.into_iter().map(into_node).collect()),
        Err(e) => Err(anyhow!("Failed to parse model scene: {}", e)),
    }
}

/// Load a pre-authored model asset and return its first top-level node as
/// the model root. Any failure (missing file, bad data, empty scene) yields
/// None so the caller can decide how to degrade.
pub fn load_model(model_path: &Path) -> Option<Node> {
    let text = match fs::read_to_string(model_path) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "Failed to read model asset \"{}\": {}",
                model_path.display(),
                e
            );
            return None;
        }
    };

    match parse_model_scene(&text) {
        Ok(mut nodes) => {
            if nodes.is_empty() {
                warn!("Model asset \"{}\" contains no nodes", model_path.display());
                None
            } else {
                debug!(
                    "Loaded model asset \"{}\" with {} top-level node(s)",
                    model_path.display(),
                    nodes.len()
                );
                Some(nodes.remove(0))
            }
        }
        Err(e) => {
            warn!("Model asset \"{}\" unusable: {}", model_path.display(), e);
            None
        }
    }
}
