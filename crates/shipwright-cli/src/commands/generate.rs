//! Implementation of the `shipwright generate` command (also the default).
//!
//! Responsibility: resolve the descriptor and output paths, wire adapters
//! into the core services, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use shipwright_adapters::{LocalFilesystem, MemoryFilesystem, YamlDescriptorLoader};
use shipwright_core::{
    application::{PlaybookService, ScaffoldService, ports::Filesystem},
    domain::Descriptor,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON summary of a generate run.
#[derive(Debug, Serialize)]
struct GenerateSummary<'a> {
    status: &'static str,
    descriptor: &'a Path,
    base_dir: &'a Path,
    dry_run: bool,
    playbooks: Vec<PlaybookEntry>,
}

#[derive(Debug, Serialize)]
struct PlaybookEntry {
    service: String,
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

/// Execute the `shipwright generate` command.
///
/// Dispatch sequence:
/// 1. Resolve paths (flag, then config, then built-in default)
/// 2. Load and validate the whole descriptor
/// 3. Replace the project skeleton
/// 4. Write one playbook per service
///
/// With `--dry-run` steps 3 and 4 run against an in-memory filesystem and
/// the playbooks are printed instead.
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let descriptor_path = args.file.unwrap_or(config.paths.descriptor);
    let base_dir = args.output.unwrap_or(config.paths.base_dir);

    debug!(
        descriptor = %descriptor_path.display(),
        base_dir = %base_dir.display(),
        dry_run = args.dry_run,
        "Paths resolved"
    );

    if args.dry_run {
        let memory = MemoryFilesystem::new();
        let entries = run(&descriptor_path, &base_dir, memory.clone())?
            .into_iter()
            .map(|mut entry| {
                entry.content = memory.read_file(&entry.path);
                entry
            })
            .collect();
        return report(&descriptor_path, &base_dir, true, entries, output);
    }

    let entries = run(&descriptor_path, &base_dir, LocalFilesystem::new())?;
    report(&descriptor_path, &base_dir, false, entries, output)
}

/// Load first, then touch the filesystem, so a bad descriptor leaves any
/// previous output in place.
fn run<F>(descriptor_path: &Path, base_dir: &Path, filesystem: F) -> CliResult<Vec<PlaybookEntry>>
where
    F: Filesystem + Clone + 'static,
{
    let emitter = PlaybookService::new(
        Box::new(YamlDescriptorLoader::new()),
        Box::new(filesystem.clone()),
    );
    let scaffolder = ScaffoldService::new(Box::new(filesystem));

    let descriptor = emitter.load_descriptor(descriptor_path)?;
    let scaffold = scaffolder.replace_scaffold(base_dir)?;
    let written = emitter.emit(&descriptor, scaffold.playbooks_dir())?;

    info!(playbooks = written.len(), "Generation finished");
    Ok(entries(&descriptor, written))
}

fn entries(descriptor: &Descriptor, written: Vec<PathBuf>) -> Vec<PlaybookEntry> {
    descriptor
        .services()
        .iter()
        .zip(written)
        .map(|(service, path)| PlaybookEntry {
            service: service.name().to_string(),
            path,
            content: None,
        })
        .collect()
}

fn report(
    descriptor_path: &Path,
    base_dir: &Path,
    dry_run: bool,
    playbooks: Vec<PlaybookEntry>,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        output.json(&GenerateSummary {
            status: "ok",
            descriptor: descriptor_path,
            base_dir,
            dry_run,
            playbooks,
        })?;
        return Ok(());
    }

    if dry_run {
        output.info(&format!(
            "Dry run: nothing written to {}",
            base_dir.display()
        ))?;
        for entry in &playbooks {
            output.raw(&format!("# {}", entry.path.display()))?;
            output.raw(entry.content.as_deref().unwrap_or_default())?;
            output.raw("")?;
        }
        return Ok(());
    }

    if playbooks.is_empty() {
        output.warning(&format!(
            "{} defines no services; only the skeleton was created",
            descriptor_path.display()
        ))?;
    }
    for entry in &playbooks {
        output.print(&format!(
            "Generated playbook for {} service: {}",
            entry.service,
            entry.path.display()
        ))?;
    }
    output.success(&format!(
        "{} playbook(s) written to {}",
        playbooks.len(),
        base_dir.display()
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_leaves_disk_untouched() {
        let temp = tempfile::TempDir::new().unwrap();
        let descriptor = temp.path().join("docker-compose.yml");
        std::fs::write(&descriptor, "services:\n  web:\n    image: nginx\n").unwrap();
        let base_dir = temp.path().join("out");

        let memory = MemoryFilesystem::new();
        let entries = run(&descriptor, &base_dir, memory.clone()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].service, "web");
        assert_eq!(entries[0].path, base_dir.join("playbooks").join("web.yml"));
        assert!(memory.read_file(&entries[0].path).is_some());
        assert!(!base_dir.exists());
    }

    #[test]
    fn bad_descriptor_skips_scaffold() {
        let temp = tempfile::TempDir::new().unwrap();
        let descriptor = temp.path().join("docker-compose.yml");
        std::fs::write(&descriptor, "services:\n  web:\n    ports: ['80:80']\n").unwrap();

        let memory = MemoryFilesystem::new();
        let err = run(&descriptor, Path::new("out"), memory.clone()).unwrap_err();

        assert_eq!(err.exit_code(), 6);
        assert!(!memory.exists(Path::new("out")));
    }
}
