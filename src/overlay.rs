use std::f32::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};

use log::debug;

use crate::anchor::Anchor;
use crate::assets::load_model;
use crate::scene::{Color, Geometry, Material, Node};

/// Alpha for the overlay plane: translucent so the real-world card stays
/// visible beneath it, which makes alignment easy to eyeball
pub const OVERLAY_PLANE_ALPHA: f32 = 0.5;

/// The per-anchor callback the tracking platform invokes when a new anchor
/// is added. Must return quickly; the platform re-poses the returned node
/// every frame on its own.
pub trait AnchorSceneBuilder {
    fn node_for_anchor(&self, anchor: &Anchor) -> Node;
}

/// Builds the overlay fragment for a detected card: a translucent plane
/// sized to the marker, with an optional 3D model standing upright on it.
pub struct CardOverlayBuilder {
    model_path: Option<PathBuf>,
}

impl CardOverlayBuilder {
    pub fn new(model_path: Option<&Path>) -> CardOverlayBuilder {
        CardOverlayBuilder {
            model_path: model_path.map(PathBuf::from),
        }
    }
}

impl AnchorSceneBuilder for CardOverlayBuilder {
    fn node_for_anchor(&self, anchor: &Anchor) -> Node {
        let mut node = Node::new();

        // Anchors of other tracking types pass through as an empty node
        if let Anchor::Image(image_anchor) = anchor {
            let (width, height) = image_anchor.reference_marker.physical_size();
            let plane = Geometry::Plane {
                width,
                height,
                material: Material {
                    diffuse: Color::white_with_alpha(OVERLAY_PLANE_ALPHA),
                },
            };

            let mut plane_node = Node::with_geometry(plane);
            // Planes come up vertical (facing the camera); lay this one flat
            // so it sits coplanar with the card
            plane_node.euler_angles.x = -FRAC_PI_2;

            if let Some(model_path) = &self.model_path {
                if let Some(mut model_node) = load_model(model_path) {
                    // Compensate for the model's authored orientation so it
                    // stands upright on the now-horizontal plane
                    model_node.euler_angles.x = FRAC_PI_2;
                    plane_node.add_child_node(model_node);
                }
            }

            node.add_child_node(plane_node);
            debug!(
                "Built overlay fragment for marker \"{}\"",
                image_anchor.reference_marker.name
            );
        }

        node
    }
}
