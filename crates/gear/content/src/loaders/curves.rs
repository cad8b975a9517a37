//! Cap-curve table loader.

use std::path::Path;

use crate::curves::CapCurves;
use crate::loaders::{LoadResult, read_file};

/// Loader for cap-curve tables from RON files.
pub struct CurveLoader;

impl CurveLoader {
    /// Load a full curve table from a RON file.
    pub fn load(path: &Path) -> LoadResult<CapCurves> {
        let content = read_file(path)?;
        let curves: CapCurves = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse cap curve RON: {}", e))?;
        tracing::debug!(
            path = %path.display(),
            levels = curves.level_count(),
            "loaded cap curves"
        );
        Ok(curves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_round_trips_through_ron() {
        let curves = CapCurves::builtin();
        let text = ron::to_string(&curves).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curves.ron");
        std::fs::write(&path, &text).unwrap();
        let loaded = CurveLoader::load(&path).unwrap();

        assert_eq!(loaded, curves);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = CurveLoader::load(Path::new("/nonexistent/curves.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/curves.ron"));
    }
}
