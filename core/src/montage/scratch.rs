use log::{debug, warn};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Temporary component images owned by one montage call
///
/// Everything tracked is deleted when the guard drops, on success, error or
/// unwind. The drop also removes files named `{prefix}_*` in `dir` that
/// appeared while the guard was alive, which covers images written before
/// they could be tracked. Files that already existed when the guard was
/// created and paths passed to [`ScratchImages::protect`] are never touched.
#[derive(Debug)]
pub struct ScratchImages {
    dir: PathBuf,
    prefix: String,
    paths: Vec<PathBuf>,
    preexisting: HashSet<PathBuf>,
    protected: Vec<PathBuf>,
}

impl ScratchImages {
    /// Creates an empty guard for files named `{prefix}_*` inside `dir`
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        let mut scratch = Self {
            dir: dir.into(),
            prefix: prefix.into(),
            paths: Vec::new(),
            preexisting: HashSet::new(),
            protected: Vec::new(),
        };
        scratch.preexisting = scratch.matching_files().into_iter().collect();
        scratch
    }

    /// Registers files for deletion
    pub fn track(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.paths.extend(paths);
    }

    /// Keeps `path` on disk even if it was tracked or matches the prefix
    pub fn protect(&mut self, path: impl Into<PathBuf>) {
        self.protected.push(path.into());
    }

    /// Tracked paths, in registration order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn matches_prefix(&self, name: &OsStr) -> bool {
        name.to_str()
            .map(|name| name.starts_with(&format!("{}_", self.prefix)))
            .unwrap_or(false)
    }

    fn matching_files(&self) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot scan {} for temporary images: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        entries
            .flatten()
            .filter(|entry| self.matches_prefix(&entry.file_name()))
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect()
    }

    fn is_protected(&self, path: &Path) -> bool {
        self.protected.iter().any(|kept| same_file(kept, path))
    }
}

/// Compares paths by their canonical form when both exist
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn remove(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => debug!("Removed temporary image {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove temporary image {}: {}", path.display(), e),
    }
}

impl Drop for ScratchImages {
    fn drop(&mut self) {
        for path in &self.paths {
            if !self.is_protected(path) {
                remove(path);
            }
        }

        for path in self.matching_files() {
            if !self.preexisting.contains(&path) && !self.is_protected(&path) {
                remove(&path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tracked_files_removed_on_drop() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.png");
        let b = temp_dir.path().join("b.png");
        std::fs::write(&a, b"a").unwrap();
        std::fs::write(&b, b"b").unwrap();

        {
            let mut scratch = ScratchImages::new(temp_dir.path(), "tmp");
            scratch.track(vec![a.clone(), b.clone(), temp_dir.path().join("missing.png")]);
            assert_eq!(scratch.paths().len(), 3);
        }

        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[test]
    fn test_sweep_removes_only_new_prefix_files() {
        let temp_dir = TempDir::new().unwrap();
        let earlier = temp_dir.path().join("tmp_ant.png");
        std::fs::write(&earlier, b"x").unwrap();

        let stray = temp_dir.path().join("tmp_lat.png");
        let keep = temp_dir.path().join("tmpfile.png");
        let other = temp_dir.path().join("brain_lat.png");
        {
            let _scratch = ScratchImages::new(temp_dir.path(), "tmp");
            for path in [&stray, &keep, &other] {
                std::fs::write(path, b"x").unwrap();
            }
        }

        assert!(!stray.exists());
        assert!(earlier.exists());
        assert!(keep.exists());
        assert!(other.exists());
    }

    #[test]
    fn test_protected_path_survives() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("tmp_montage.png");
        let component = temp_dir.path().join("tmp_med.png");

        {
            let mut scratch = ScratchImages::new(temp_dir.path(), "tmp");
            std::fs::write(&component, b"x").unwrap();
            std::fs::write(&output, b"x").unwrap();
            scratch.track(vec![component.clone(), output.clone()]);
            // A relative spelling of the same file still counts
            scratch.protect(temp_dir.path().join(".").join("tmp_montage.png"));
        }

        assert!(!component.exists());
        assert!(output.exists());
    }

    #[test]
    fn test_removed_on_panic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tmp_med.png");

        let dir = temp_dir.path().to_path_buf();
        let written = path.clone();
        let result = std::panic::catch_unwind(move || {
            let _scratch = ScratchImages::new(dir, "tmp");
            std::fs::write(&written, b"x").unwrap();
            panic!("composition blew up");
        });

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
