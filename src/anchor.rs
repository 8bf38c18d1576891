use nalgebra::Isometry3;

use crate::markers::ReferenceMarker;

/// Anchor produced when a reference marker is recognised. The pose is the
/// marker's position and orientation in the real world; the platform keeps
/// it updated for as long as the marker stays tracked.
#[derive(Debug, Clone)]
pub struct ImageAnchor {
    pub reference_marker: ReferenceMarker,
    pub pose: Isometry3<f32>,
    pub is_tracked: bool,
}

impl ImageAnchor {
    pub fn new(reference_marker: ReferenceMarker, pose: Isometry3<f32>) -> Self {
        ImageAnchor {
            reference_marker,
            pose,
            is_tracked: true,
        }
    }
}

/// The tracking platform emits anchors for more than one tracking type;
/// only image anchors are of interest here, but other kinds must still be
/// passed through without disrupting the platform's bookkeeping.
#[derive(Debug, Clone)]
pub enum Anchor {
    Image(ImageAnchor),
    World { pose: Isometry3<f32> },
}

impl Anchor {
    pub fn pose(&self) -> &Isometry3<f32> {
        match self {
            Anchor::Image(image_anchor) => &image_anchor.pose,
            Anchor::World { pose } => pose,
        }
    }
}
