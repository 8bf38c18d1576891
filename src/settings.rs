use clap::Parser;

// Some defaults; all of which can be overriden via CLI args
const MARKERS_PATH: &str = "./assets/markers.json";
const MODEL_PATH: &str = "./assets/models/eevee.json";

const SIMULATED_MARKER: &str = "eevee-card";
const SIMULATED_DISTANCE: f32 = 0.3;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load the reference-marker group manifest
    #[arg(long="markersPath", default_value_t=String::from(MARKERS_PATH))]
    pub markers_path: String,

    /// 3D model asset to stand on detected markers
    #[arg(long="modelPath", default_value_t=String::from(MODEL_PATH))]
    pub model_path: String,

    /// Which marker the simulated session should "detect"
    #[arg(long="simulate.marker", default_value_t=String::from(SIMULATED_MARKER))]
    pub simulated_marker: String,

    /// Distance (in metres) from the camera at which the simulated marker appears
    #[arg(long = "simulate.distance", default_value_t = SIMULATED_DISTANCE)]
    pub simulated_distance: f32,

    #[arg(long = "loglevel", default_value_t=String::from("info"))]
    pub log_level: String,
}
