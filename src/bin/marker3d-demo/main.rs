use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use nalgebra::Isometry3;
use std::path::Path;

use marker3d_overlay::overlay::{AnchorSceneBuilder, CardOverlayBuilder};
use marker3d_overlay::session::SessionConfigurator;
use marker3d_overlay::settings::Cli;
use marker3d_overlay::simulator::SimulatedSession;

fn main() {
    let cli = Cli::parse();

    // Initialize the logger from the environment
    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    debug!("Started; args: {:?}", cli);

    // The display surface is "appearing": configure and run the session
    let mut configurator = SessionConfigurator::new(SimulatedSession::new(), &cli.markers_path);
    configurator.start();

    let builder = CardOverlayBuilder::new(Some(Path::new(&cli.model_path)));

    // Script one detection the way the platform would deliver it
    let pose = Isometry3::translation(0.0, 0.0, -cli.simulated_distance);
    match configurator.session_mut().detect(&cli.simulated_marker, pose) {
        Some(anchor) => {
            let fragment = builder.node_for_anchor(&anchor);
            info!(
                "Overlay fragment built for \"{}\"; handing to the renderer would happen here",
                cli.simulated_marker
            );
            println!(
                "{}",
                serde_json::to_string_pretty(&fragment).expect("fragment should serialize")
            );
        }
        None => {
            warn!(
                "Marker \"{}\" was not detected; nothing to build",
                cli.simulated_marker
            );
        }
    }

    // ...and "disappearing" again
    configurator.stop();
}
