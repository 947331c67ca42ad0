//! Playbook rendering.
//!
//! A playbook is a fixed single-host header, the container name and image,
//! then every present optional section, then the restart policy:
//!
//! ```text
//! - hosts: local
//!   tasks:
//!     - name: Start web container
//!       community.docker.docker_container:
//!         name: web
//!         image: nginx:latest
//!         ports:
//!           - '8080:80'
//!         restart_policy: always
//! ```

use crate::domain::{
    entities::service::ServiceDescriptor,
    value_objects::{Section, SectionValue, ServiceName},
};

/// Fully qualified name of the Ansible module driving the container runtime.
pub const CONTAINER_MODULE: &str = "community.docker.docker_container";

const FIELD_INDENT: &str = "        ";
const ITEM_INDENT: &str = "          ";

/// Playbook generated for exactly one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlaybook {
    service: ServiceName,
    lines: Vec<String>,
}

impl GeneratedPlaybook {
    /// Render the playbook for `service`.
    pub fn render(service: &ServiceDescriptor) -> Self {
        let name = service.name();
        let mut lines = vec![
            "- hosts: local".to_string(),
            "  tasks:".to_string(),
            format!("    - name: Start {name} container"),
            format!("      {CONTAINER_MODULE}:"),
            format!("{FIELD_INDENT}name: {name}"),
            format!("{FIELD_INDENT}image: {}", service.image()),
        ];

        for (section, value) in service.sections() {
            lines.push(format!("{FIELD_INDENT}{}:", section.key()));
            render_section(section, value, &mut lines);
        }

        if let Some(policy) = service.restart() {
            lines.push(format!("{FIELD_INDENT}restart_policy: {}", policy.token()));
        }

        Self {
            service: name.clone(),
            lines,
        }
    }

    pub fn service(&self) -> &ServiceName {
        &self.service
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn file_name(&self) -> String {
        self.service.playbook_file_name()
    }

    /// Lines joined with `\n`, without a trailing newline.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

fn render_section(section: Section, value: &SectionValue, lines: &mut Vec<String>) {
    match value {
        SectionValue::Sequence(items) => {
            for item in items {
                let item = if section.quotes_items() {
                    quote(item)
                } else {
                    item.clone()
                };
                lines.push(format!("{ITEM_INDENT}- {item}"));
            }
        }
        // Attached networks are a list of names; per-network settings are dropped.
        SectionValue::Mapping(entries) if section == Section::Networks => {
            for (network, _) in entries {
                lines.push(format!("{ITEM_INDENT}- {}", quote(network)));
            }
        }
        SectionValue::Mapping(entries) => {
            for (key, value) in entries {
                lines.push(format!("{ITEM_INDENT}{key}: {}", quote(value)));
            }
        }
    }
}

/// Single-quoted YAML scalar.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
