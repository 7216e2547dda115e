//! End-of-session move of rejected images.

use crate::review::ReviewState;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// What happened to the images marked for deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalizeReport {
    pub moved: Vec<String>,
    /// File name and the error that prevented its move.
    pub failed: Vec<(String, String)>,
}

impl FinalizeReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Move every image marked Delete from `folder` into `rejected`.
///
/// `rejected` is created only when there is something to move. A failed move
/// is logged and skipped; earlier moves are never undone.
pub fn finalize(folder: &Path, rejected: &Path, review: &ReviewState) -> Result<FinalizeReport> {
    let mut report = FinalizeReport::default();
    let mut pending = review.marked_for_deletion().peekable();
    if pending.peek().is_none() {
        return Ok(report);
    }

    fs::create_dir_all(rejected)
        .with_context(|| format!("cannot create {}", rejected.display()))?;

    for name in pending {
        let src = folder.join(name);
        let dst = rejected.join(name);
        match move_file(&src, &dst) {
            Ok(()) => {
                tracing::info!("moved {name} to {}", rejected.display());
                report.moved.push(name.to_string());
            }
            Err(e) => {
                tracing::warn!("failed to move {name}: {e}");
                report.failed.push((name.to_string(), e.to_string()));
            }
        }
    }
    Ok(report)
}

/// Rename, falling back to copy + remove when the rename crosses devices.
fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    if !src.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", src.display()),
        ));
    }
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(src, dst)?;
            fs::remove_file(src)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Decision;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn moves_only_deleted_files() -> Result<()> {
        let dir = tempdir()?;
        for name in ["a.png", "b.png", "c.png"] {
            File::create(dir.path().join(name))?;
        }
        let rejected = dir.path().join("hapus");
        let mut review = ReviewState::new();
        review.mark("a.png", Decision::Delete);
        review.mark("b.png", Decision::Keep);

        let report = finalize(dir.path(), &rejected, &review)?;

        assert_eq!(report.moved, vec!["a.png"]);
        assert!(report.is_clean());
        assert!(!dir.path().join("a.png").exists());
        assert!(rejected.join("a.png").exists());
        assert!(dir.path().join("b.png").exists());
        assert!(dir.path().join("c.png").exists());
        Ok(())
    }

    #[test]
    fn rejected_folder_is_created_lazily() -> Result<()> {
        let dir = tempdir()?;
        File::create(dir.path().join("a.png"))?;
        let rejected = dir.path().join("hapus");
        let mut review = ReviewState::new();
        review.mark("a.png", Decision::Keep);

        let report = finalize(dir.path(), &rejected, &review)?;
        assert_eq!(report, FinalizeReport::default());
        assert!(!rejected.exists());
        Ok(())
    }

    #[test]
    fn missing_file_does_not_stop_the_batch() -> Result<()> {
        let dir = tempdir()?;
        File::create(dir.path().join("b.png"))?;
        let rejected = dir.path().join("hapus");
        let mut review = ReviewState::new();
        review.mark("a.png", Decision::Delete);
        review.mark("b.png", Decision::Delete);

        let report = finalize(dir.path(), &rejected, &review)?;
        assert_eq!(report.moved, vec!["b.png"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "a.png");
        assert!(rejected.join("b.png").exists());
        Ok(())
    }

    #[test]
    fn existing_rejected_folder_is_reused() -> Result<()> {
        let dir = tempdir()?;
        let rejected = dir.path().join("hapus");
        fs::create_dir(&rejected)?;
        File::create(rejected.join("old.png"))?;
        File::create(dir.path().join("a.jpg"))?;
        let mut review = ReviewState::new();
        review.mark("a.jpg", Decision::Delete);

        finalize(dir.path(), &rejected, &review)?;
        assert!(rejected.join("old.png").exists());
        assert!(rejected.join("a.jpg").exists());
        Ok(())
    }
}
