//! Core of the image triage tool: folder scanning, overlay rendering, review
//! state, navigation and the end-of-session move of rejected images.

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub mod config;
pub mod finalize;
pub mod navigation;
pub mod render;
pub mod report;
pub mod review;
pub mod session;
pub mod status;

pub use config::TriageConfig;
pub use finalize::{FinalizeReport, finalize};
pub use navigation::{Navigator, Step};
pub use render::{OverlayStyle, ReferencePolygon, RenderError, Renderer, fit_within};
pub use report::export_report;
pub use review::{Decision, ReviewState};
pub use session::{Notice, Outcome, Session, SessionAction, SessionError};
pub use status::StatusLine;

/// Sorted, immutable list of the image files directly inside one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStore {
    folder: PathBuf,
    files: Vec<String>,
}

impl ImageStore {
    /// Scan `folder` (non-recursively) for png/jpg/jpeg files.
    pub fn scan(folder: impl AsRef<Path>) -> Result<Self> {
        let root = folder.as_ref();
        if !root.exists() {
            anyhow::bail!("Path does not exist: {}", root.display());
        }
        if !root.is_dir() {
            anyhow::bail!("Path is not a directory: {}", root.display());
        }

        let mut files: Vec<String> = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("walkdir error: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !is_supported_image(path) {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => files.push(name.to_string()),
                None => tracing::warn!("skipping non UTF-8 file name: {}", path.display()),
            }
        }
        files.sort();

        Ok(Self {
            folder: root.to_path_buf(),
            files,
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.files.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.binary_search_by(|f| f.as_str().cmp(filename)).is_ok()
    }

    /// Full path of `filename` inside the scanned folder.
    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.folder.join(filename)
    }
}

fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            matches!(ext.as_str(), "jpg" | "jpeg" | "png")
        }
        None => false,
    }
}
