//! Integration tests for shipwright-core, wired to the in-memory adapters.

use std::path::{Path, PathBuf};

use shipwright_adapters::{MemoryFilesystem, YamlDescriptorLoader};
use shipwright_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, INVENTORY_HOSTS},
    prelude::*,
};

const COMPOSE: &str = r#"
services:
  proxy:
    image: traefik:v3
    command: ["--api.insecure=true", "--providers.docker"]
    ports: ["80:80", "8080:8080"]
    networks:
      edge:
      internal:
        aliases: [gateway]
    volumes:
      - /var/run/docker.sock:/var/run/docker.sock
    labels:
      owner: "platform team's"
    restart: always
  app:
    image: example/app:1.2
    environment:
      - RUST_LOG=info
    restart:
      condition: on-failure
"#;

fn services(fs: &MemoryFilesystem) -> (ScaffoldService, PlaybookService) {
    (
        ScaffoldService::new(Box::new(fs.clone())),
        PlaybookService::new(Box::new(YamlDescriptorLoader::new()), Box::new(fs.clone())),
    )
}

fn parse(content: &str) -> ShipwrightResult<Descriptor> {
    YamlDescriptorLoader::parse_str(content, Path::new("docker-compose.yml"))
}

#[test]
fn full_generation_workflow() {
    let fs = MemoryFilesystem::new();
    let (scaffolder, emitter) = services(&fs);
    let descriptor = parse(COMPOSE).unwrap();

    let scaffold = scaffolder.replace_scaffold("/out").unwrap();
    let written = emitter.emit(&descriptor, scaffold.playbooks_dir()).unwrap();

    assert_eq!(
        written,
        [
            PathBuf::from("/out/playbooks/proxy.yml"),
            PathBuf::from("/out/playbooks/app.yml"),
        ]
    );
    assert_eq!(
        fs.read_file(Path::new("/out/inventory/hosts")).as_deref(),
        Some(INVENTORY_HOSTS)
    );
    assert!(fs.is_dir(Path::new("/out/roles")));

    let proxy = fs.read_file(Path::new("/out/playbooks/proxy.yml")).unwrap();
    let expected = [
        "- hosts: local",
        "  tasks:",
        "    - name: Start proxy container",
        "      community.docker.docker_container:",
        "        name: proxy",
        "        image: traefik:v3",
        "        command:",
        "          - '--api.insecure=true'",
        "          - '--providers.docker'",
        "        ports:",
        "          - '80:80'",
        "          - '8080:8080'",
        "        networks:",
        "          - 'edge'",
        "          - 'internal'",
        "        volumes:",
        "          - /var/run/docker.sock:/var/run/docker.sock",
        "        labels:",
        "          owner: 'platform team''s'",
        "        restart_policy: always",
    ]
    .join("\n");
    assert_eq!(proxy, expected);

    let app = fs.read_file(Path::new("/out/playbooks/app.yml")).unwrap();
    assert!(app.contains("        environment:\n          - 'RUST_LOG=info'"));
    assert!(app.ends_with("        restart_policy: always"));
}

#[test]
fn second_scaffold_discards_generated_files() {
    let fs = MemoryFilesystem::new();
    let (scaffolder, emitter) = services(&fs);
    let descriptor = parse(COMPOSE).unwrap();

    let scaffold = scaffolder.replace_scaffold("/out").unwrap();
    emitter.emit(&descriptor, scaffold.playbooks_dir()).unwrap();
    scaffolder.replace_scaffold("/out").unwrap();

    assert_eq!(fs.list_files(), [PathBuf::from("/out/inventory/hosts")]);
}

#[test]
fn emitting_twice_is_byte_identical() {
    let fs = MemoryFilesystem::new();
    let (scaffolder, emitter) = services(&fs);
    let descriptor = parse(COMPOSE).unwrap();

    let scaffold = scaffolder.replace_scaffold("/out").unwrap();
    emitter.emit(&descriptor, scaffold.playbooks_dir()).unwrap();
    let first = fs.files_in(&scaffold.playbooks_dir());

    emitter.emit(&descriptor, scaffold.playbooks_dir()).unwrap();
    assert_eq!(fs.files_in(&scaffold.playbooks_dir()), first);
}

#[test]
fn service_count_matches_file_count() {
    let fs = MemoryFilesystem::new();
    let (scaffolder, emitter) = services(&fs);
    let compose = (0..7)
        .map(|i| format!("  svc{i}:\n    image: img{i}\n"))
        .collect::<String>();
    let descriptor = parse(&format!("services:\n{compose}")).unwrap();

    let scaffold = scaffolder.replace_scaffold("/out").unwrap();
    emitter.emit(&descriptor, scaffold.playbooks_dir()).unwrap();

    assert_eq!(fs.files_in(&scaffold.playbooks_dir()).len(), 7);
}

#[test]
fn rendering_matches_emitted_content() {
    let fs = MemoryFilesystem::new();
    let (scaffolder, emitter) = services(&fs);
    let descriptor = parse(COMPOSE).unwrap();

    let scaffold = scaffolder.replace_scaffold("/out").unwrap();
    emitter.emit(&descriptor, scaffold.playbooks_dir()).unwrap();

    for playbook in emitter.render(&descriptor) {
        let path = scaffold.playbooks_dir().join(playbook.file_name());
        assert_eq!(fs.read_file(&path), Some(playbook.content()));
    }
}

#[test]
fn missing_image_fails_before_any_write() {
    let err = parse("services:\n  ok:\n    image: a\n  broken:\n    ports: ['1:1']\n").unwrap_err();

    assert!(matches!(
        err,
        ShipwrightError::Domain(DomainError::MissingRequiredField { ref service, field: "image" })
            if service == "broken"
    ));
}

#[test]
fn scaffold_refuses_to_replace_a_file() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/work")).unwrap();
    fs.write_file(Path::new("/work/out"), "precious").unwrap();
    let (scaffolder, _) = services(&fs);

    let err = scaffolder.replace_scaffold("/work/out").unwrap_err();

    assert!(matches!(
        err,
        ShipwrightError::Application(ApplicationError::FilesystemError { .. })
    ));
    assert_eq!(
        fs.read_file(Path::new("/work/out")).as_deref(),
        Some("precious")
    );
}
