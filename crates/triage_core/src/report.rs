use crate::ImageStore;
use crate::review::ReviewState;
use anyhow::Result;
use std::path::Path;

/// Export one row per image with headers:
/// file,decision,moved
pub fn export_report(
    store: &ImageStore,
    review: &ReviewState,
    moved: &[String],
    path: impl AsRef<Path>,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["file", "decision", "moved"])?;

    for name in store.iter() {
        let was_moved = moved.iter().any(|m| m == name);
        wtr.write_record([
            name,
            review.decision_of(name).as_str(),
            if was_moved { "true" } else { "false" },
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
