//! Docker Compose YAML descriptor loader.
//!
//! Only the parts of the Compose format that end up in a playbook are read:
//! the `services` mapping and, per service, `image`, `command`, `ports`,
//! `networks`, `volumes`, `labels`, `environment` and `restart`. Every other
//! key is ignored.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::{debug, instrument};

use shipwright_core::{
    application::{ApplicationError, ports::DescriptorLoader},
    domain::{Descriptor, RestartPolicy, Section, SectionValue, ServiceDescriptor},
    error::{ShipwrightError, ShipwrightResult},
};

/// Top-level document. Unknown keys (`version`, `volumes`, ...) are ignored.
///
/// `services: ~` deserializes to `None`, so it is reported like a missing key.
#[derive(Debug, Deserialize)]
struct RawDescriptor {
    #[serde(default)]
    services: Option<Value>,
}

/// Reads Compose files with `serde_yaml`, keeping services in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDescriptorLoader;

impl YamlDescriptorLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse descriptor content. `origin` is only used in error messages.
    pub fn parse_str(content: &str, origin: &Path) -> ShipwrightResult<Descriptor> {
        let raw: RawDescriptor =
            serde_yaml::from_str(content).map_err(|e| parse_error(origin, e.to_string()))?;

        let services = match raw.services {
            Some(Value::Mapping(services)) => services,
            Some(_) => {
                return Err(parse_error(origin, "'services' must be a mapping"));
            }
            None => {
                return Err(parse_error(origin, "missing top-level 'services' mapping"));
            }
        };

        let mut parsed = Vec::with_capacity(services.len());
        for (key, body) in &services {
            let name = key
                .as_str()
                .ok_or_else(|| parse_error(origin, format!("service name {key:?} is not a string")))?;
            parsed.push(parse_service(name, body, origin)?);
        }

        debug!(services = parsed.len(), "Parsed descriptor");
        Descriptor::new(parsed).map_err(ShipwrightError::Domain)
    }
}

impl DescriptorLoader for YamlDescriptorLoader {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> ShipwrightResult<Descriptor> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into(),
            _ => ShipwrightError::from(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to read descriptor: {e}"),
            }),
        })?;

        Self::parse_str(&content, path)
    }
}

fn parse_service(name: &str, body: &Value, origin: &Path) -> ShipwrightResult<ServiceDescriptor> {
    let empty = Mapping::new();
    let config = match body {
        Value::Mapping(config) => config,
        Value::Null => &empty,
        _ => {
            return Err(parse_error(
                origin,
                format!("service '{name}' must be a mapping"),
            ));
        }
    };

    let mut builder = ServiceDescriptor::builder(name);

    match config.get("image") {
        None | Some(Value::Null) => {}
        Some(value) => {
            let image = scalar(value).ok_or_else(|| {
                parse_error(origin, format!("service '{name}': 'image' must be a string"))
            })?;
            builder = builder.image(image);
        }
    }

    for section in Section::ALL {
        let Some(value) = config.get(section.key()) else {
            continue;
        };
        if let Some(value) = section_value(section, value)
            .map_err(|reason| parse_error(origin, format!("service '{name}': {reason}")))?
        {
            builder = builder.section(section, value);
        }
    }

    // A structured restart spec collapses to the unconditional policy.
    if let Some(restart) = config.get("restart") {
        builder = builder.restart(match restart {
            Value::String(token) => RestartPolicy::Token(token.clone()),
            _ => RestartPolicy::Unconditional,
        });
    }

    builder.build().map_err(ShipwrightError::Domain)
}

/// `Ok(None)` for an explicit null, which is treated like an absent section.
fn section_value(section: Section, value: &Value) -> Result<Option<SectionValue>, String> {
    let value = match value {
        Value::Null => return Ok(None),
        Value::Sequence(items) => SectionValue::Sequence(
            items
                .iter()
                .map(|item| {
                    scalar(item).ok_or_else(|| {
                        format!("long-form '{section}' entries are not supported")
                    })
                })
                .collect::<Result<_, _>>()?,
        ),
        Value::Mapping(entries) => SectionValue::Mapping(
            entries
                .iter()
                .map(|(key, value)| {
                    let key = scalar(key)
                        .ok_or_else(|| format!("'{section}' keys must be scalars"))?;
                    // Per-network settings are not rendered, only the name.
                    let value = match scalar(value) {
                        Some(value) => value,
                        None if section == Section::Networks => String::new(),
                        None => return Err(format!("'{section}.{key}' must be a scalar")),
                    };
                    Ok((key, value))
                })
                .collect::<Result<_, _>>()?,
        ),
        Value::Tagged(tagged) => return section_value(section, &tagged.value),
        scalar_value => SectionValue::Sequence(vec![
            scalar(scalar_value).unwrap_or_default(),
        ]),
    };
    Ok(Some(value))
}

/// YAML scalar as text; `None` for sequences and mappings.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn parse_error(origin: &Path, reason: impl Into<String>) -> ShipwrightError {
    ApplicationError::ParseError {
        path: PathBuf::from(origin),
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use shipwright_core::domain::DomainError;

    use super::*;

    fn parse(content: &str) -> ShipwrightResult<Descriptor> {
        YamlDescriptorLoader::parse_str(content, Path::new("docker-compose.yml"))
    }

    fn is_parse_error(result: ShipwrightResult<Descriptor>) -> bool {
        matches!(
            result,
            Err(ShipwrightError::Application(ApplicationError::ParseError { .. }))
        )
    }

    #[test]
    fn services_keep_document_order() {
        let descriptor = parse(
            "services:\n  zeta:\n    image: a\n  alpha:\n    image: b\n  mid:\n    image: c\n",
        )
        .unwrap();

        let names: Vec<_> = descriptor
            .services()
            .iter()
            .map(|s| s.name().as_str())
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn reads_every_section() {
        let descriptor = parse(
            r#"
version: "3.8"
services:
  web:
    image: nginx:latest
    command: ["nginx", "-g", "daemon off;"]
    ports:
      - "8080:80"
      - 9090:90
    networks: [front]
    volumes:
      - ./html:/usr/share/nginx/html
    labels:
      tier: web
    environment:
      DEBUG: true
      WORKERS: 4
    restart: on-failure
    build: .
"#,
        )
        .unwrap();

        let web = &descriptor.services()[0];
        assert_eq!(web.image(), "nginx:latest");
        assert_eq!(
            web.section(Section::Command),
            Some(&SectionValue::Sequence(vec![
                "nginx".into(),
                "-g".into(),
                "daemon off;".into()
            ]))
        );
        assert_eq!(
            web.section(Section::Ports),
            Some(&SectionValue::Sequence(vec!["8080:80".into(), "9090:90".into()]))
        );
        assert_eq!(
            web.section(Section::Environment),
            Some(&SectionValue::Mapping(vec![
                ("DEBUG".into(), "true".into()),
                ("WORKERS".into(), "4".into()),
            ]))
        );
        assert_eq!(
            web.restart(),
            Some(&RestartPolicy::Token("on-failure".into()))
        );
    }

    #[test]
    fn structured_restart_is_unconditional() {
        let descriptor =
            parse("services:\n  web:\n    image: x\n    restart:\n      condition: any\n").unwrap();
        assert_eq!(
            descriptor.services()[0].restart(),
            Some(&RestartPolicy::Unconditional)
        );
    }

    #[test]
    fn string_command_becomes_single_item() {
        let descriptor = parse("services:\n  web:\n    image: x\n    command: npm start\n").unwrap();
        assert_eq!(
            descriptor.services()[0].section(Section::Command),
            Some(&SectionValue::Sequence(vec!["npm start".into()]))
        );
    }

    #[test]
    fn network_mapping_keeps_names() {
        let descriptor = parse(
            "services:\n  web:\n    image: x\n    networks:\n      front:\n        aliases: [w]\n      back:\n",
        )
        .unwrap();
        assert_eq!(
            descriptor.services()[0].section(Section::Networks),
            Some(&SectionValue::Mapping(vec![
                ("front".into(), String::new()),
                ("back".into(), String::new()),
            ]))
        );
    }

    #[test]
    fn null_section_is_absent() {
        let descriptor = parse("services:\n  web:\n    image: x\n    environment:\n").unwrap();
        assert!(descriptor.services()[0].section(Section::Environment).is_none());
    }

    #[test]
    fn missing_image_is_missing_field() {
        let err = parse("services:\n  web:\n    ports: ['80:80']\n").unwrap_err();
        assert!(matches!(
            err,
            ShipwrightError::Domain(DomainError::MissingRequiredField { field: "image", .. })
        ));
    }

    #[test]
    fn null_service_body_is_missing_image() {
        let err = parse("services:\n  web:\n").unwrap_err();
        assert!(matches!(
            err,
            ShipwrightError::Domain(DomainError::MissingRequiredField { .. })
        ));
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        assert!(is_parse_error(parse("services: [web, db]\n")));
        assert!(is_parse_error(parse("version: '3'\n")));
        assert!(is_parse_error(parse("- just\n- a list\n")));
        assert!(is_parse_error(parse("services:\n  web: nginx\n")));
        assert!(is_parse_error(parse("services:\n  web:\n    image: [a, b]\n")));
        assert!(is_parse_error(parse("services: {web: {image: x}\n")));
    }

    #[test]
    fn long_form_ports_are_rejected() {
        assert!(is_parse_error(parse(
            "services:\n  web:\n    image: x\n    ports:\n      - target: 80\n        published: 8080\n"
        )));
    }

    #[test]
    fn unsafe_service_name_is_rejected() {
        let err = parse("services:\n  ../escape:\n    image: x\n").unwrap_err();
        assert!(matches!(
            err,
            ShipwrightError::Domain(DomainError::InvalidServiceName { .. })
        ));
    }

    #[test]
    fn multi_line_image_cannot_inject_keys() {
        let err = parse(
            "services:\n  web:\n    image: \"nginx\\n        privileged: true\"\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ShipwrightError::Domain(DomainError::ControlCharacters { ref field, .. })
                if field == "image"
        ));
    }

    #[test]
    fn duplicate_service_keys_are_parse_errors() {
        assert!(is_parse_error(parse(
            "services:\n  web:\n    image: a\n  web:\n    image: b\n"
        )));
    }

    #[test]
    fn empty_services_mapping_is_valid() {
        assert!(parse("services: {}\n").unwrap().is_empty());
        assert!(is_parse_error(parse("services:\n")));
    }

    #[test]
    fn load_missing_file_is_input_not_found() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = YamlDescriptorLoader::new()
            .load(&temp.path().join("docker-compose.yml"))
            .unwrap_err();
        assert!(matches!(
            err,
            ShipwrightError::Application(ApplicationError::InputNotFound { .. })
        ));
    }

    #[test]
    fn load_reads_from_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("docker-compose.yml");
        std::fs::write(&path, "services:\n  db:\n    image: postgres\n").unwrap();

        let descriptor = YamlDescriptorLoader::new().load(&path).unwrap();
        assert_eq!(descriptor.services()[0].image(), "postgres");
    }
}
