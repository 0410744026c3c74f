use anyhow::Result;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::fmt;

/// Radius of the circular detection plane in mm.
pub const PLANE_RADIUS: f32 = 140.0;

/// Shape of the pads tiling the detection plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PadShape {
    /// Square pads on the circular plane, replicated over four quadrants.
    Squares,
    /// Triangular pads on the hexagonal plane, replicated over six sectors.
    Triangles,
}

/// Runtime configuration for the generator.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_pad_size")]
    pub pad_size: f32,
    pub shape: PadShape,
}

fn default_pad_size() -> f32 {
    2.0
}

pub fn load_default_config() -> Result<Settings> {
    let padplane_dir = retrieve_project_root();
    let default_config_file = padplane_dir.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    validate_config(&config);

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    // Try to find the project directory in different ways
    let padplane_dir = retrieve_project_root();

    let default_config_file = padplane_dir.join("config/default.toml");
    let local_config = padplane_dir.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        println!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        println!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("padplane"))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let mut config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(pad_size) = args.p {
        config.pad_size = pad_size;
    }
    if let Some(shape) = args.shape {
        config.shape = shape;
    }

    validate_config(&config);

    println!("{:#?}", config);

    Ok(config)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the PADPLANE_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
/// If none of these methods work, the function will panic.
fn retrieve_project_root() -> std::path::PathBuf {
    let padplane_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        std::path::PathBuf::from(manifest_dir)
    } else if let Ok(path) = env::var("PADPLANE_ROOT_DIR") {
        // Allow explicit configuration via environment variable
        std::path::PathBuf::from(path)
    } else {
        // Fallback: try to find the nearest directory containing a "config" subdirectory
        // Start from the executable directory and walk upward
        let exe_path = env::current_exe().expect("Failed to get current executable path");
        let mut current_dir = exe_path
            .parent()
            .expect("Failed to get executable directory")
            .to_path_buf();
        let mut found = false;

        while !found && current_dir.parent().is_some() {
            if current_dir.join("config").is_dir() {
                found = true;
            } else {
                current_dir = current_dir.parent().unwrap().to_path_buf();
            }
        }

        if found {
            current_dir
        } else {
            panic!("Could not find project root directory");
        }
    };
    padplane_dir
}

fn validate_config(config: &Settings) {
    assert!(config.pad_size > 0.0, "Pad size must be greater than 0");
    assert!(
        config.pad_size <= PLANE_RADIUS,
        "Pad size must not exceed the plane radius"
    );
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "padplane - readout pad geometry for gaseous tracking detectors"
)]
pub struct CliArgs {
    /// Pad size in mm.
    #[arg(short, long)]
    p: Option<f32>,

    /// Shape of the pads tiling the plane.
    #[arg(short, long)]
    shape: Option<PadShape>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Pad Size: {:.3} mm
  - Pad Shape: {:?}
  ",
            self.pad_size, self.shape,
        )
    }
}
