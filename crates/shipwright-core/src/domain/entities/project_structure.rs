use std::path::{Path, PathBuf};

/// Inventory declaring a single local connection target.
pub const INVENTORY_HOSTS: &str = "[local]\nlocalhost ansible_connection=local\n";

pub const INVENTORY_DIR: &str = "inventory";
pub const PLAYBOOKS_DIR: &str = "playbooks";
pub const ROLES_DIR: &str = "roles";

/// Ansible project skeleton rooted at a base directory.
///
/// Pure layout: materialising it is the job of
/// [`ScaffoldService`](crate::application::ScaffoldService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectScaffold {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectScaffold {
    /// The standard layout: `inventory/hosts`, `playbooks/`, `roles/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
        .with_directory(INVENTORY_DIR)
        .with_file(
            Path::new(INVENTORY_DIR).join("hosts"),
            INVENTORY_HOSTS.to_string(),
        )
        .with_directory(PLAYBOOKS_DIR)
        .with_directory(ROLES_DIR)
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
        self
    }

    fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn inventory_file(&self) -> PathBuf {
        self.root.join(INVENTORY_DIR).join("hosts")
    }

    /// Directory playbooks are emitted into.
    pub fn playbooks_dir(&self) -> PathBuf {
        self.root.join(PLAYBOOKS_DIR)
    }

    pub fn roles_dir(&self) -> PathBuf {
        self.root.join(ROLES_DIR)
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }
}

/// Entry paths are relative to the scaffold root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}
