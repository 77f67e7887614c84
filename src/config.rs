// src/config.rs

//! Configuration for a render run.
//!
//! Every field has a default, so an empty (or absent) configuration renders
//! the canonical 1024x1024 view to `./picture_CPU.png`. A JSON file can
//! override any subset of fields; point `MANDELBROT_CONFIG` at it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::backend::BackendKind;
use crate::view::ViewParameters;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "MANDELBROT_CONFIG";

// --- Top-Level Configuration Structure ---

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Region of the complex plane to render.
    pub view: ViewConfig,
    /// Which backends run and how they are scheduled.
    pub render: RenderConfig,
    /// Where images are written.
    pub output: OutputConfig,
}

impl Config {
    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults when the
    /// variable is unset.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                info!("Loading configuration from {}", path.display());
                Self::from_path(&path)
            }
            None => {
                info!("{} not set, using default configuration.", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse JSON config")?;
        Ok(config)
    }

    /// Checks everything that can be checked before rendering starts.
    pub fn validate(&self) -> Result<ViewParameters> {
        ensure!(
            !self.render.backends.is_empty(),
            "render.backends must name at least one backend"
        );
        self.view.to_parameters()
    }
}

// --- View Configuration ---

/// Raw view settings as they appear in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Width and height of the square image, in pixels.
    pub grid_size: u32,
    /// Half-width of the view in complex units. Smaller zooms in.
    pub scale: f32,
    /// Subtracted from the real coordinate.
    pub center_x: f32,
    /// Added to the imaginary coordinate.
    pub center_y: f32,
}

impl ViewConfig {
    /// The whole set, centered on the origin.
    pub fn full_set() -> Self {
        ViewConfig {
            grid_size: 1024,
            scale: 2.0,
            center_x: 0.0,
            center_y: 0.0,
        }
    }

    pub fn to_parameters(&self) -> Result<ViewParameters> {
        ViewParameters::new(self.grid_size, self.scale, self.center_x, self.center_y)
            .context("Invalid view configuration")
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        // A deep zoom into the seahorse valley.
        ViewConfig {
            grid_size: 1024,
            scale: 0.00002,
            center_x: 0.743643135,
            center_y: 0.131825963,
        }
    }
}

// --- Render Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Backends to run, in order. Each writes its own image.
    pub backends: Vec<BackendKind>,
    /// Worker threads for the parallel backend. 0 lets rayon pick one per
    /// hardware thread.
    pub threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            backends: vec![BackendKind::Cpu],
            threads: 0,
        }
    }
}

// --- Output Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub file_prefix: String,
}

impl OutputConfig {
    /// Output path for a backend label, e.g. `./picture_CPU.png`.
    pub fn path_for(&self, label: &str) -> PathBuf {
        self.directory.join(format!("{}{}.png", self.file_prefix, label))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: PathBuf::from("."),
            file_prefix: "picture_".to_string(),
        }
    }
}
