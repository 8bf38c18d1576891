use log::{debug, info};
use nalgebra::Isometry3;

use crate::anchor::{Anchor, ImageAnchor};
use crate::session::{TrackingConfiguration, TrackingSession};

/// Headless stand-in for the platform's tracking session. It does no image
/// recognition; callers script "detections" and the simulator only enforces
/// the bookkeeping a real session would: configured markers only, the
/// max-tracked cap, and no events while paused.
#[derive(Default)]
pub struct SimulatedSession {
    configuration: TrackingConfiguration,
    running: bool,
    live_markers: Vec<String>,
}

impl SimulatedSession {
    pub fn new() -> SimulatedSession {
        SimulatedSession::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn configuration(&self) -> &TrackingConfiguration {
        &self.configuration
    }

    /// Script a detection of the named marker at the given pose. Returns the
    /// new anchor, or None when the session would not have produced one.
    pub fn detect(&mut self, marker_name: &str, pose: Isometry3<f32>) -> Option<Anchor> {
        if !self.running {
            debug!("Session paused; ignoring detection of \"{}\"", marker_name);
            return None;
        }

        if self.live_markers.iter().any(|m| m == marker_name) {
            // Already anchored; a re-sighting is an update, not a new anchor
            debug!("Marker \"{}\" already tracked", marker_name);
            return None;
        }

        if self.live_markers.len() >= self.configuration.maximum_number_of_tracked_images {
            debug!(
                "Tracking slots saturated ({}); ignoring \"{}\"",
                self.configuration.maximum_number_of_tracked_images, marker_name
            );
            return None;
        }

        let Some(marker) = self
            .configuration
            .tracking_images
            .iter()
            .find(|m| m.name == marker_name)
        else {
            debug!(
                "Marker \"{}\" is not in the tracking configuration",
                marker_name
            );
            return None;
        };

        let marker = marker.clone();
        self.live_markers.push(String::from(&marker.name));
        info!("Simulated detection of marker \"{}\"", marker.name);
        Some(Anchor::Image(ImageAnchor::new(marker, pose)))
    }

    /// The marker left the camera's view; free its tracking slot
    pub fn remove(&mut self, marker_name: &str) {
        self.live_markers.retain(|m| m != marker_name);
    }
}

impl TrackingSession for SimulatedSession {
    fn run(&mut self, configuration: TrackingConfiguration) {
        info!(
            "Simulated session running with {} tracking image(s), max {} tracked",
            configuration.tracking_images.len(),
            configuration.maximum_number_of_tracked_images
        );
        self.configuration = configuration;
        self.live_markers.clear();
        self.running = true;
    }

    fn pause(&mut self) {
        info!("Simulated session paused");
        self.running = false;
    }
}
