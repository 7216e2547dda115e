use crate::render::{MAX_THICKNESS, OverlayStyle, Renderer};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File looked up inside the image folder when no config path is given.
pub const CONFIG_FILE_NAME: &str = "triage.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Subfolder (of the image folder) that receives rejected images.
    pub rejected_dir: String,
    pub max_width: u32,
    pub max_height: u32,
    /// How long a status message stays visible.
    pub status_seconds: u64,
    pub overlay_color: [u8; 3],
    pub overlay_thickness: u32,
    /// Optional CSV report written at quit.
    pub report: Option<PathBuf>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            rejected_dir: "hapus".to_string(),
            max_width: 1280,
            max_height: 720,
            status_seconds: 5,
            overlay_color: [0, 255, 0],
            overlay_thickness: 2,
            report: None,
        }
    }
}

impl TriageConfig {
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        let mut cfg: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        cfg.overlay_thickness = cfg.overlay_thickness.clamp(1, MAX_THICKNESS);
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw, path)
    }

    /// `explicit` if given, otherwise `triage.toml` in `folder`, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>, folder: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = folder.join(CONFIG_FILE_NAME);
        if local.is_file() {
            tracing::info!("using config {}", local.display());
            return Self::load(&local);
        }
        Ok(Self::default())
    }

    pub fn status_duration(&self) -> Duration {
        Duration::from_secs(self.status_seconds)
    }

    pub fn rejected_path(&self, folder: &Path) -> PathBuf {
        folder.join(&self.rejected_dir)
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(
            (self.max_width, self.max_height),
            OverlayStyle {
                color: self.overlay_color,
                thickness: self.overlay_thickness,
            },
        )
    }
}
