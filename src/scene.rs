use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn white_with_alpha(alpha: f32) -> Color {
        Color {
            a: alpha,
            ..Color::WHITE
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Color,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            diffuse: Color::WHITE,
        }
    }
}

/// Renderable geometry attached to a node. Mesh payloads are opaque here;
/// resolving the named source is the renderer's job.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Geometry {
    Plane {
        width: f32,
        height: f32,
        material: Material,
    },
    Mesh {
        source: String,
    },
}

/// One node of an owned scene-graph tree, in the usual
/// position/rotation/scale-plus-children shape.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub position: Vector3<f32>,
    /// Rotation about the node's own x, y, z axes, in radians
    pub euler_angles: Vector3<f32>,
    pub scale: Vector3<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new() -> Node {
        Node {
            name: None,
            position: Vector3::zeros(),
            euler_angles: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            geometry: None,
            children: Vec::new(),
        }
    }

    pub fn with_geometry(geometry: Geometry) -> Node {
        Node {
            geometry: Some(geometry),
            ..Node::new()
        }
    }

    pub fn add_child_node(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Local transform relative to the parent node. Scale is not part of the
    /// isometry; the renderer applies it separately.
    pub fn transform(&self) -> Isometry3<f32> {
        let rotation = UnitQuaternion::from_euler_angles(
            self.euler_angles.x,
            self.euler_angles.y,
            self.euler_angles.z,
        );
        Isometry3::from_parts(Translation3::from(self.position), rotation)
    }

    /// All nodes below this one (depth-first), not including self
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::new()
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn white_with_alpha_only_changes_alpha() {
        let color = Color::white_with_alpha(0.5);
        assert_eq!((color.r, color.g, color.b), (1.0, 1.0, 1.0));
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn transform_combines_position_and_euler_rotation() {
        let mut node = Node::new();
        node.position = Vector3::new(1.0, 2.0, 3.0);
        node.euler_angles.x = -FRAC_PI_2;

        let transform = node.transform();
        assert_eq!(transform.translation.vector, Vector3::new(1.0, 2.0, 3.0));

        let expected = UnitQuaternion::from_euler_angles(-FRAC_PI_2, 0.0, 0.0);
        assert!(transform.rotation.angle_to(&expected) < 1e-6);
    }

    #[test]
    fn identity_node_has_identity_transform() {
        let node = Node::new();
        let transform = node.transform();
        assert_eq!(transform.translation.vector, Vector3::zeros());
        assert!(transform.rotation.angle() < 1e-6);
    }

    #[test]
    fn descendants_walks_whole_tree_depth_first() {
        let mut root = Node::new();
        let mut first = Node::new();
        first.name = Some(String::from("first"));
        let mut grandchild = Node::new();
        grandchild.name = Some(String::from("grandchild"));
        first.add_child_node(grandchild);
        root.add_child_node(first);
        let mut second = Node::new();
        second.name = Some(String::from("second"));
        root.add_child_node(second);

        let names: Vec<&str> = root
            .descendants()
            .filter_map(|n| n.name.as_deref())
            .collect();
        assert_eq!(names, vec!["first", "grandchild", "second"]);
    }
}
