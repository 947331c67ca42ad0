//! In-memory filesystem adapter for tests and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use shipwright_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ShipwrightResult,
};

/// In-memory filesystem.
///
/// Clones share the same state, so a test (or the dry-run command) can hand
/// one clone to a service and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All files under `dir`, sorted by path.
    pub fn files_in(&self, dir: &Path) -> Vec<(PathBuf, String)> {
        self.read()
            .map(|inner| {
                inner
                    .files
                    .iter()
                    .filter(|(path, _)| path.parent() == Some(dir))
                    .map(|(path, content)| (path.clone(), content.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn read(&self) -> ShipwrightResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> ShipwrightResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ShipwrightResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "Failed to create directory: a file is in the way".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ShipwrightResult<()> {
        let mut inner = self.write()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> ShipwrightResult<()> {
        let mut inner = self.write()?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to remove directory: not a directory".into(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("out/web.yml"), "x").is_err());

        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(Path::new("out/web.yml"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("out/web.yml")).as_deref(), Some("x"));
    }

    #[test]
    fn remove_dir_all_drops_subtree_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/playbooks")).unwrap();
        fs.create_dir_all(Path::new("other")).unwrap();
        fs.write_file(Path::new("out/playbooks/web.yml"), "x").unwrap();
        fs.write_file(Path::new("other/keep.yml"), "y").unwrap();

        fs.remove_dir_all(Path::new("out")).unwrap();

        assert!(!fs.exists(Path::new("out")));
        assert!(!fs.exists(Path::new("out/playbooks/web.yml")));
        assert_eq!(fs.list_files(), [PathBuf::from("other/keep.yml")]);
    }

    #[test]
    fn remove_dir_all_rejects_files() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(Path::new("out/file"), "x").unwrap();

        assert!(fs.exists(Path::new("out/file")));
        assert!(!fs.is_dir(Path::new("out/file")));
        assert!(fs.remove_dir_all(Path::new("out/file")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        other.create_dir_all(Path::new("out")).unwrap();
        other.write_file(Path::new("out/a.yml"), "a").unwrap();

        assert_eq!(
            fs.files_in(Path::new("out")),
            [(PathBuf::from("out/a.yml"), "a".to_string())]
        );
    }
}
