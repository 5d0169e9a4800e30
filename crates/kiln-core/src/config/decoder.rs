use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Deserializer};

use crate::config::error::ConfigError;
use crate::config::format::ConfigFormat;
use crate::config::model::{Configuration, RawComponents};

// --- Intermediate document for deserialization ---

/// Every key is optional so absent keys can be told apart from present ones.
/// Raw declaration keys are doubly optional: the outer layer records
/// presence, the inner one an explicit `null`.
#[derive(Deserialize, Debug, Default)]
struct RawDocument {
    #[serde(rename = "PluginMinPort", default)]
    plugin_min_port: Option<u16>,
    #[serde(rename = "PluginMaxPort", default)]
    plugin_max_port: Option<u16>,
    #[serde(default)]
    disable_checkpoint: Option<bool>,
    #[serde(default)]
    disable_checkpoint_signature: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    builders: Option<Option<RawComponents>>,
    #[serde(default, deserialize_with = "present")]
    provisioners: Option<Option<RawComponents>>,
    #[serde(rename = "post-processors", default, deserialize_with = "present")]
    post_processors: Option<Option<RawComponents>>,
}

/// Marks a key as present; paired with `#[serde(default)]` for absence.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl RawDocument {
    fn apply_to(self, config: &mut Configuration) {
        if let Some(port) = self.plugin_min_port {
            config.plugin_min_port = port;
        }
        if let Some(port) = self.plugin_max_port {
            config.plugin_max_port = port;
        }
        if let Some(flag) = self.disable_checkpoint {
            config.disable_checkpoint = flag;
        }
        if let Some(flag) = self.disable_checkpoint_signature {
            config.disable_checkpoint_signature = flag;
        }
        merge_raw(&mut config.raw_builders, self.builders);
        merge_raw(&mut config.raw_provisioners, self.provisioners);
        merge_raw(&mut config.raw_post_processors, self.post_processors);
    }
}

fn merge_raw(slot: &mut Option<RawComponents>, declared: Option<Option<RawComponents>>) {
    match declared {
        None => {}
        Some(None) => *slot = None,
        Some(Some(entries)) => slot.get_or_insert_with(RawComponents::new).extend(entries),
    }
}

/// Top-level keys `RawDocument` understands, in their canonical spelling
const DOCUMENT_KEYS: [&str; 7] = [
    "PluginMinPort",
    "PluginMaxPort",
    "disable_checkpoint",
    "disable_checkpoint_signature",
    "builders",
    "provisioners",
    "post-processors",
];

/// Rename top-level keys that match a document key ignoring ASCII case.
///
/// The exact spelling wins when both are present. Keys inside the component
/// mappings are names and are left alone.
fn fold_key_case(value: &mut serde_json::Value) {
    let Some(object) = value.as_object_mut() else {
        return;
    };
    let inexact: Vec<String> = object
        .keys()
        .filter(|key| !DOCUMENT_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();
    for key in inexact {
        let Some(canonical) = DOCUMENT_KEYS.iter().find(|c| c.eq_ignore_ascii_case(&key)) else {
            continue;
        };
        if object.contains_key(*canonical) {
            continue;
        }
        if let Some(entry) = object.remove(&key) {
            object.insert(canonical.to_string(), entry);
        }
    }
}

// --- End intermediate document ---

/// Decode a JSON configuration document into `config`.
///
/// Keys present in the document overwrite the matching fields; absent keys
/// leave whatever the caller put there. Registries are never touched.
/// Top-level keys match ignoring ASCII case (`pluginminport` sets
/// `PluginMinPort`) and a repeated key keeps its last value. YAML and TOML
/// documents match keys exactly.
pub fn decode_config<R: Read>(reader: R, config: &mut Configuration) -> Result<(), ConfigError> {
    decode_config_with_format(reader, ConfigFormat::Json, config)
}

/// Decode a configuration document of the given format into `config`.
///
/// The whole document is parsed before `config` is modified, so a failed
/// decode leaves `config` exactly as it was.
pub fn decode_config_with_format<R: Read>(
    reader: R,
    format: ConfigFormat,
    config: &mut Configuration,
) -> Result<(), ConfigError> {
    let document = parse_document(reader, format)?;
    debug!("Decoded {} configuration document: {:?}", format, document);
    document.apply_to(config);
    Ok(())
}

fn parse_document<R: Read>(reader: R, format: ConfigFormat) -> Result<RawDocument, ConfigError> {
    match format {
        ConfigFormat::Json => {
            // Going through `Value` keeps the last of any repeated key
            let mut value: serde_json::Value =
                serde_json::from_reader(reader).map_err(|e| ConfigError::decode(format, e))?;
            fold_key_case(&mut value);
            RawDocument::deserialize(value).map_err(|e| ConfigError::decode(format, e))
        }
        #[cfg(feature = "yaml-config")]
        ConfigFormat::Yaml => {
            serde_yaml::from_reader(reader).map_err(|e| ConfigError::decode(format, e))
        }
        #[cfg(feature = "toml-config")]
        ConfigFormat::Toml => {
            let mut reader = reader;
            let mut content = String::new();
            reader
                .read_to_string(&mut content)
                .map_err(|e| ConfigError::decode(format, e))?;
            toml::from_str(&content).map_err(|e| ConfigError::decode(format, e))
        }
    }
}

/// Read and decode a configuration file, picking the format from its
/// extension (JSON when the extension is unknown).
pub fn load_config_file<P: AsRef<Path>>(path: P, config: &mut Configuration) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).unwrap_or_default();
    let file = File::open(path).map_err(|e| ConfigError::io(e, "open_config", path.to_path_buf()))?;
    debug!("Loading {} configuration from {}", format, path.display());
    decode_config_with_format(BufReader::new(file), format, config)
}
