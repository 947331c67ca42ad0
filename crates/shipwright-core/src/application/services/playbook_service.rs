//! Playbook Service - turns a descriptor into one playbook file per service.
//!
//! Workflow:
//! 1. Load the descriptor through the [`DescriptorLoader`] port
//! 2. Render a [`GeneratedPlaybook`] for every service, in document order
//! 3. Write `<output_dir>/<service>.yml` through the [`Filesystem`] port

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::ports::{DescriptorLoader, Filesystem},
    domain::{Descriptor, GeneratedPlaybook},
    error::ShipwrightResult,
};

/// Loads descriptors and emits playbooks.
pub struct PlaybookService {
    loader: Box<dyn DescriptorLoader>,
    filesystem: Box<dyn Filesystem>,
}

impl PlaybookService {
    pub fn new(loader: Box<dyn DescriptorLoader>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { loader, filesystem }
    }

    /// Load the descriptor at `path`.
    ///
    /// A [`Descriptor`] is validated when it is built, so a missing `image`
    /// anywhere fails here, before a single file is written.
    #[instrument(skip_all, fields(descriptor = %path.as_ref().display()))]
    pub fn load_descriptor(&self, path: impl AsRef<Path>) -> ShipwrightResult<Descriptor> {
        let descriptor = self.loader.load(path.as_ref())?;

        info!(services = descriptor.service_count(), "Descriptor loaded");
        Ok(descriptor)
    }

    /// Render every playbook without writing anything.
    pub fn render(&self, descriptor: &Descriptor) -> Vec<GeneratedPlaybook> {
        descriptor
            .services()
            .iter()
            .map(GeneratedPlaybook::render)
            .collect()
    }

    /// Write one playbook per service into `output_dir`.
    ///
    /// Existing files with the same name are overwritten. The first failed
    /// write aborts the run; files written before it stay on disk.
    #[instrument(skip_all, fields(output_dir = %output_dir.as_ref().display()))]
    pub fn emit(
        &self,
        descriptor: &Descriptor,
        output_dir: impl AsRef<Path>,
    ) -> ShipwrightResult<Vec<PathBuf>> {
        let output_dir = output_dir.as_ref();
        let mut written = Vec::with_capacity(descriptor.service_count());

        for playbook in self.render(descriptor) {
            let path = output_dir.join(playbook.file_name());
            self.filesystem.write_file(&path, &playbook.content())?;

            info!(
                "Generated playbook for {} service: {}",
                playbook.service(),
                path.display()
            );
            written.push(path);
        }

        Ok(written)
    }

    /// Load the descriptor at `descriptor_path` and emit its playbooks.
    pub fn generate(
        &self,
        descriptor_path: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> ShipwrightResult<Vec<PathBuf>> {
        let descriptor = self.load_descriptor(descriptor_path)?;
        self.emit(&descriptor, output_dir)
    }
}
