use std::env::consts::EXE_SUFFIX;
use std::fs::{self, File};
use std::path::Path;

use tempfile::tempdir;

use crate::config::model::Configuration;
use crate::plugin_system::component::ComponentKind;
use crate::plugin_system::discovery::{parse_plugin_file_name, PluginDiscovery};

fn touch(dir: &Path, file_name: &str) -> String {
    let path = dir.join(format!("{}{}", file_name, EXE_SUFFIX));
    File::create(&path).expect("Failed to create fake plugin");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_parse_plugin_file_name() {
    assert_eq!(
        parse_plugin_file_name("kiln-builder-cloud-xyz"),
        Some((ComponentKind::Builder, "cloud-xyz".to_string()))
    );
    assert_eq!(
        parse_plugin_file_name("kiln-provisioner-super-shell"),
        Some((ComponentKind::Provisioner, "super-shell".to_string()))
    );
    assert_eq!(
        parse_plugin_file_name("kiln-post-processor-noop"),
        Some((ComponentKind::PostProcessor, "noop".to_string()))
    );
    assert_eq!(parse_plugin_file_name("kiln-builder-"), None);
    assert_eq!(parse_plugin_file_name("kiln-hook-thing"), None);
    assert_eq!(parse_plugin_file_name("other-builder-thing"), None);
    assert_eq!(parse_plugin_file_name("README.md"), None);
}

#[test]
fn test_discover_scans_directory() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path();
    let builder = touch(dir, "kiln-builder-cloud-xyz");
    let provisioner = touch(dir, "kiln-provisioner-super-shell");
    let post_processor = touch(dir, "kiln-post-processor-noop");
    File::create(dir.join("notes.txt")).unwrap();
    fs::create_dir_all(dir.join("kiln-builder-directory")).unwrap();

    let mut discovery = PluginDiscovery::new();
    discovery.add_plugin_dir(dir);
    let found = discovery.discover().unwrap();

    assert_eq!(found[&ComponentKind::Builder].get("cloud-xyz"), Some(&builder));
    assert_eq!(found[&ComponentKind::Builder].len(), 1);
    assert_eq!(found[&ComponentKind::Provisioner].get("super-shell"), Some(&provisioner));
    assert_eq!(found[&ComponentKind::PostProcessor].get("noop"), Some(&post_processor));
}

#[test]
fn test_later_directories_take_precedence() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    touch(first.path(), "kiln-builder-docker");
    let winner = touch(second.path(), "kiln-builder-docker");

    let mut discovery = PluginDiscovery::new();
    discovery.add_plugin_dir(first.path()).add_plugin_dir(second.path());
    let found = discovery.discover().unwrap();

    assert_eq!(found[&ComponentKind::Builder].get("docker"), Some(&winner));
}

#[test]
fn test_missing_directories_are_skipped() {
    let temp_dir = tempdir().unwrap();
    let mut discovery = PluginDiscovery::new();
    discovery.add_plugin_dir(temp_dir.path().join("nope"));

    let found = discovery.discover().unwrap();
    assert!(found.is_empty());
    assert_eq!(discovery.plugin_dirs().len(), 1);
}

#[test]
fn test_discover_into_keeps_declared_entries() {
    let temp_dir = tempdir().unwrap();
    touch(temp_dir.path(), "kiln-builder-docker");
    let discovered_shell = touch(temp_dir.path(), "kiln-provisioner-shell");

    let mut config = Configuration::new();
    config.raw_builders = Some(
        [("docker".to_string(), "/declared/kiln-builder-docker".to_string())]
            .into_iter()
            .collect(),
    );

    let mut discovery = PluginDiscovery::new();
    discovery.add_plugin_dir(temp_dir.path());
    let added = discovery.discover_into(&mut config).unwrap();

    assert_eq!(added, 1);
    let builders = config.raw_builders.as_ref().unwrap();
    assert_eq!(builders.get("docker").map(String::as_str), Some("/declared/kiln-builder-docker"));
    assert_eq!(config.raw_provisioners.as_ref().unwrap().get("shell"), Some(&discovered_shell));
    assert!(config.raw_post_processors.is_none());
}

#[test]
fn test_discovered_plugins_still_respect_the_gate() {
    let temp_dir = tempdir().unwrap();
    touch(temp_dir.path(), "kiln-builder-cloud-xyz");
    touch(temp_dir.path(), "kiln-provisioner-super-shell");

    let mut config = Configuration::new();
    config.participate(ComponentKind::Provisioner);

    let mut discovery = PluginDiscovery::new();
    discovery.add_plugin_dir(temp_dir.path());
    discovery.discover_into(&mut config).unwrap();

    // Discovery only records declarations
    assert!(config.provisioners.as_ref().unwrap().is_empty());

    config.load_external_components();

    assert!(config.builders.is_none());
    assert_eq!(config.provisioners.as_ref().unwrap().names(), vec!["super-shell"]);
}

#[test]
fn test_default_dirs_include_working_directory() {
    let dirs = PluginDiscovery::default_dirs();
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(dirs.last(), Some(&cwd));
}
