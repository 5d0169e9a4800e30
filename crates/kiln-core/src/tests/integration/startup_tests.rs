#![cfg(test)]

use std::path::Path;

use super::common::generate_fake_plugin_config;
use crate::config::{decode_config, Configuration};
use crate::kernel::error::Result;
use crate::plugin_system::{ComponentKind, PluginDiscovery};

#[test]
fn test_load_external_components_from_config() -> Result<()> {
    let fake = generate_fake_plugin_config();

    let mut config = Configuration::new();
    for kind in ComponentKind::ALL {
        config.participate(kind);
    }

    decode_config(fake.document.as_bytes(), &mut config)?;
    config.load_external_components();

    let builders = config.builders.as_ref().unwrap();
    assert_eq!(builders.len(), 1);
    assert!(builders.has("cloud-xyz"));
    assert_eq!(
        builders.get("cloud-xyz").unwrap().executable(),
        Some(fake.builder.as_path())
    );

    let provisioners = config.provisioners.as_ref().unwrap();
    assert_eq!(provisioners.len(), 1);
    assert!(provisioners.has("super-shell"));

    let post_processors = config.post_processors.as_ref().unwrap();
    assert_eq!(post_processors.len(), 1);
    assert!(post_processors.has("noop"));
    Ok(())
}

#[test]
fn test_load_external_components_only_provisioner() -> Result<()> {
    let fake = generate_fake_plugin_config();

    let mut config = Configuration::new();
    config.participate(ComponentKind::Provisioner);

    decode_config(fake.document.as_bytes(), &mut config)?;

    // Forget the declared builders and post-processors; the files stay on disk
    config.raw_builders = None;
    config.raw_post_processors = None;

    config.load_external_components();

    assert!(config.builders.as_ref().map_or(true, |b| b.is_empty() && !b.has("cloud-xyz")));
    let provisioners = config.provisioners.as_ref().unwrap();
    assert_eq!(provisioners.len(), 1);
    assert!(provisioners.has("super-shell"));
    assert!(config.post_processors.as_ref().map_or(true, |p| p.is_empty() && !p.has("noop")));
    Ok(())
}

#[test]
fn test_declarations_ignored_without_registries() -> Result<()> {
    let fake = generate_fake_plugin_config();

    let mut config = Configuration::new();
    decode_config(fake.document.as_bytes(), &mut config)?;
    config.load_external_components();

    assert!(config.builders.is_none());
    assert!(config.provisioners.is_none());
    assert!(config.post_processors.is_none());
    // Declarations are still recorded
    assert!(config.raw_builders.is_some());
    Ok(())
}

#[test]
fn test_discovery_decode_load_freeze() -> Result<()> {
    let fake = generate_fake_plugin_config();

    let mut config = Configuration::new();
    config.participate(ComponentKind::Builder);
    config.participate(ComponentKind::PostProcessor);

    // Only the builder is declared explicitly; the rest come from the plugin dir
    let document = serde_json::json!({ "builders": { "cloud-xyz": "/declared/cloud-xyz" } }).to_string();
    decode_config(document.as_bytes(), &mut config)?;

    let mut discovery = PluginDiscovery::new();
    discovery.add_plugin_dir(fake.dir.path());
    discovery.discover_into(&mut config)?;
    config.load_external_components();

    let catalog = config.freeze();
    assert_eq!(
        catalog.get(ComponentKind::Builder, "cloud-xyz").unwrap().executable(),
        Some(Path::new("/declared/cloud-xyz"))
    );
    assert_eq!(
        catalog.get(ComponentKind::PostProcessor, "noop").unwrap().executable(),
        Some(fake.post_processor.as_path())
    );
    assert!(!catalog.participates(ComponentKind::Provisioner));
    assert!(fake.provisioner.exists());
    Ok(())
}
