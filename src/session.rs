use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::markers::{MarkerGroup, ReferenceMarker, load_marker_group};

/// The platform caps concurrent tracked markers; one is all this overlay
/// ever needs
pub const MAX_TRACKED_IMAGES: usize = 1;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingConfiguration {
    pub tracking_images: Vec<ReferenceMarker>,
    pub maximum_number_of_tracked_images: usize,
}

/// Seam to the platform's tracking session. `run` replaces any previous
/// configuration and starts detection; `pause` halts camera capture and
/// frame processing.
pub trait TrackingSession {
    fn run(&mut self, configuration: TrackingConfiguration);
    fn pause(&mut self);
}

/// Owns a session handle and toggles it with the display surface lifecycle:
/// `start()` when the surface is about to appear, `stop()` when it is about
/// to disappear. Both are idempotent.
pub struct SessionConfigurator<S: TrackingSession> {
    session: S,
    manifest_path: PathBuf,
    running: bool,
}

impl<S: TrackingSession> SessionConfigurator<S> {
    pub fn new(session: S, manifest_path: impl Into<PathBuf>) -> SessionConfigurator<S> {
        SessionConfigurator {
            session,
            manifest_path: manifest_path.into(),
            running: false,
        }
    }

    pub fn start(&mut self) {
        if self.running {
            debug!("Session already running; start() ignored");
            return;
        }

        let group = match load_marker_group(Path::new(&self.manifest_path)) {
            Ok(group) => group,
            Err(e) => {
                // Reduced fidelity, not a fatal condition: run with no markers
                warn!("Marker group unavailable ({}); tracking will never fire", e);
                MarkerGroup::default()
            }
        };

        if group.is_empty() {
            warn!("No reference markers configured");
        } else {
            info!(
                "{} reference marker(s) added to tracking configuration",
                group.len()
            );
        }

        let configuration = TrackingConfiguration {
            tracking_images: group.markers().cloned().collect(),
            maximum_number_of_tracked_images: MAX_TRACKED_IMAGES,
        };

        self.session.run(configuration);
        self.running = true;
    }

    pub fn stop(&mut self) {
        if !self.running {
            debug!("Session not running; stop() ignored");
            return;
        }
        self.session.pause();
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/markers.json");

    /// Records every call the configurator makes on the platform seam
    #[derive(Default)]
    struct RecordingSession {
        run_configurations: Vec<TrackingConfiguration>,
        pause_count: usize,
    }

    impl TrackingSession for RecordingSession {
        fn run(&mut self, configuration: TrackingConfiguration) {
            self.run_configurations.push(configuration);
        }

        fn pause(&mut self) {
            self.pause_count += 1;
        }
    }

    #[test]
    fn start_submits_markers_with_max_tracked_cap() {
        let mut configurator =
            SessionConfigurator::new(RecordingSession::default(), MANIFEST_FIXTURE);
        configurator.start();

        assert!(configurator.is_running());
        let session = configurator.session();
        assert_eq!(session.run_configurations.len(), 1);

        let configuration = &session.run_configurations[0];
        assert_eq!(configuration.maximum_number_of_tracked_images, 1);
        assert_eq!(configuration.tracking_images.len(), 1);
        assert_eq!(configuration.tracking_images[0].name, "eevee-card");
    }

    #[test]
    fn start_is_idempotent() {
        let mut configurator =
            SessionConfigurator::new(RecordingSession::default(), MANIFEST_FIXTURE);
        configurator.start();
        configurator.start();
        assert_eq!(configurator.session().run_configurations.len(), 1);
    }

    #[test]
    fn stop_is_idempotent_and_only_pauses_when_running() {
        let mut configurator =
            SessionConfigurator::new(RecordingSession::default(), MANIFEST_FIXTURE);
        configurator.stop();
        assert_eq!(configurator.session().pause_count, 0);

        configurator.start();
        configurator.stop();
        configurator.stop();
        assert_eq!(configurator.session().pause_count, 1);
        assert!(!configurator.is_running());
    }

    #[test]
    fn restart_resubmits_the_configuration() {
        let mut configurator =
            SessionConfigurator::new(RecordingSession::default(), MANIFEST_FIXTURE);
        configurator.start();
        configurator.stop();
        configurator.start();
        assert_eq!(configurator.session().run_configurations.len(), 2);
    }

    #[test]
    fn missing_manifest_runs_with_zero_markers() {
        let mut configurator =
            SessionConfigurator::new(RecordingSession::default(), "./no-such-manifest.json");
        configurator.start();

        assert!(configurator.is_running());
        let configuration = &configurator.session().run_configurations[0];
        assert!(configuration.tracking_images.is_empty());
        assert_eq!(configuration.maximum_number_of_tracked_images, 1);
    }
}
