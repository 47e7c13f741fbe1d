use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{AssetError, CarouselError, Result};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Lists the image files of `dir_path`, sorted by file name.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path).map_err(|source| CarouselError::ReadDir {
        path: dir_path.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CarouselError::ReadDir {
            path: dir_path.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(CarouselError::NoImages(dir_path.to_path_buf()));
    }
    info!("Found {} images in {:?}", paths.len(), dir_path);
    Ok(paths)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collects one readiness signal per slide.
///
/// Failed assets are tolerated: they are logged and counted, and the gate
/// still completes once every slide has reported either way.
#[derive(Debug)]
pub struct AssetGate {
    resolved: Vec<bool>,
    pending: usize,
    failures: Vec<AssetError>,
}

impl AssetGate {
    pub fn new(slides: usize) -> Self {
        Self {
            resolved: vec![false; slides],
            pending: slides,
            failures: Vec::new(),
        }
    }

    /// Records the outcome for `slide`. Returns true when this signal
    /// completed the gate.
    pub fn resolve(&mut self, slide: usize, outcome: std::result::Result<(), AssetError>) -> bool {
        let Some(resolved) = self.resolved.get_mut(slide) else {
            warn!("Ignoring readiness signal for unknown slide {}", slide);
            return false;
        };
        if *resolved {
            debug!("Slide {} already reported, ignoring", slide);
            return false;
        }
        *resolved = true;
        self.pending -= 1;

        if let Err(e) = outcome {
            warn!("Some images failed to load: {}", e);
            self.failures.push(e);
        }

        self.pending == 0
    }

    pub fn is_complete(&self) -> bool {
        self.pending == 0
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn failures(&self) -> &[AssetError] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_images_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.gif"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();
        assert!(matches!(load_sorted_image_paths(dir.path()), Err(CarouselError::NoImages(_))));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(load_sorted_image_paths(&missing), Err(CarouselError::ReadDir { .. })));
    }

    fn failed(slide: usize) -> std::result::Result<(), AssetError> {
        Err(AssetError { slide, reason: "broken".to_string() })
    }

    #[test]
    fn completes_once_everything_reports() {
        let mut gate = AssetGate::new(3);
        assert!(!gate.resolve(0, Ok(())));
        assert!(!gate.resolve(2, Ok(())));
        assert!(!gate.is_complete());
        assert!(gate.resolve(1, Ok(())));
        assert!(gate.is_complete());
    }

    #[test]
    fn failures_do_not_block() {
        let mut gate = AssetGate::new(2);
        gate.resolve(0, failed(0));
        assert!(gate.resolve(1, Ok(())));
        assert_eq!(gate.failures().len(), 1);
        assert_eq!(gate.failures()[0].slide, 0);
    }

    #[test]
    fn duplicate_and_unknown_signals_are_ignored() {
        let mut gate = AssetGate::new(2);
        gate.resolve(0, Ok(()));
        assert!(!gate.resolve(0, Ok(())));
        assert!(!gate.resolve(7, Ok(())));
        assert_eq!(gate.pending(), 1);
    }

    #[test]
    fn empty_gate_is_already_complete() {
        assert!(AssetGate::new(0).is_complete());
    }
}
