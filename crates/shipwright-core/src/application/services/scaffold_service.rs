//! Scaffold Service - creates the Ansible project skeleton.
//!
//! The skeleton is always rebuilt from scratch: whatever lives at the base
//! path is deleted first. There is no merge and no backup.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{FsEntry, ProjectScaffold},
    error::ShipwrightResult,
};

/// Creates the `inventory/`, `playbooks/` and `roles/` tree.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Delete everything at `base` and create a fresh skeleton there.
    ///
    /// A non-directory entry at `base` is reported as a filesystem error and
    /// left untouched. Nothing is rolled back if creation fails half-way.
    #[instrument(skip_all, fields(base = %base.as_ref().display()))]
    pub fn replace_scaffold(&self, base: impl AsRef<Path>) -> ShipwrightResult<ProjectScaffold> {
        let base = base.as_ref();
        let scaffold = ProjectScaffold::new(base);

        if self.filesystem.exists(base) {
            if !self.filesystem.is_dir(base) {
                return Err(ApplicationError::FilesystemError {
                    path: base.to_path_buf(),
                    reason: "a file exists where the project directory should go".into(),
                }
                .into());
            }
            debug!("Removing existing directory");
            self.filesystem.remove_dir_all(base)?;
        }

        self.write_all(&scaffold)?;

        info!("Created folder structure at {}", base.display());
        Ok(scaffold)
    }

    fn write_all(&self, scaffold: &ProjectScaffold) -> ShipwrightResult<()> {
        self.filesystem.create_dir_all(scaffold.root())?;

        for entry in scaffold.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem
                        .create_dir_all(&scaffold.root().join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = scaffold.root().join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }
}
