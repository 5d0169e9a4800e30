#![cfg(test)]

use std::env::consts::EXE_SUFFIX;
use std::fs::File;
use std::path::PathBuf;

use tempfile::{tempdir, TempDir};

use crate::plugin_system::component::ComponentKind;

/// Fake plugin binaries on disk plus a config document declaring them.
///
/// The directory is removed when the value is dropped.
pub struct FakePluginConfig {
    pub dir: TempDir,
    pub document: String,
    pub builder: PathBuf,
    pub provisioner: PathBuf,
    pub post_processor: PathBuf,
}

/// Create one empty plugin file per category and a JSON document declaring
/// `cloud-xyz`, `super-shell` and `noop`.
pub fn generate_fake_plugin_config() -> FakePluginConfig {
    let dir = tempdir().expect("Failed to create temp directory");

    let plugin = |kind: ComponentKind, name: &str| {
        let path = dir.path().join(format!("{}{}", kind.binary_name(name), EXE_SUFFIX));
        File::create(&path).expect("Failed to create temporary plugin file");
        path
    };
    let builder = plugin(ComponentKind::Builder, "cloud-xyz");
    let provisioner = plugin(ComponentKind::Provisioner, "super-shell");
    let post_processor = plugin(ComponentKind::PostProcessor, "noop");

    let document = serde_json::json!({
        "PluginMinPort": 10,
        "PluginMaxPort": 25,
        "disable_checkpoint": true,
        "disable_checkpoint_signature": true,
        "builders": { "cloud-xyz": builder },
        "provisioners": { "super-shell": provisioner },
        "post-processors": { "noop": post_processor },
    })
    .to_string();

    FakePluginConfig {
        dir,
        document,
        builder,
        provisioner,
        post_processor,
    }
}
