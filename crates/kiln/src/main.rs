mod cli; // Declare the cli module
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use cli::{CliArgs, Commands, KindArg, PluginCommand, PolicyArg};
use kiln_core::config::{config_file, load_config_file, Configuration};
use kiln_core::kernel::constants::{DEFAULT_PLUGIN_MAX_PORT, DEFAULT_PLUGIN_MIN_PORT};
use kiln_core::plugin_system::{ComponentCatalog, ComponentKind, PluginDiscovery};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> kiln_core::Result<()> {
    let CliArgs {
        config,
        plugin_dirs,
        no_default_dirs,
        command,
        ..
    } = args;

    match command {
        Commands::Plugins {
            command: PluginCommand::List { only, policy },
        } => {
            let settings = StartupSettings {
                config_path: config,
                plugin_dirs,
                default_dirs: !no_default_dirs,
            };
            let catalog = load_catalog(&settings, &only, policy)?;
            print_catalog(&catalog);
            Ok(())
        }
    }
}

struct StartupSettings {
    /// Explicit config file; must exist when given
    config_path: Option<PathBuf>,
    plugin_dirs: Vec<PathBuf>,
    default_dirs: bool,
}

/// Decode, discover, load and freeze.
fn load_catalog(
    settings: &StartupSettings,
    only: &[KindArg],
    policy: PolicyArg,
) -> kiln_core::Result<ComponentCatalog> {
    let mut config = Configuration::new();
    config.plugin_min_port = DEFAULT_PLUGIN_MIN_PORT;
    config.plugin_max_port = DEFAULT_PLUGIN_MAX_PORT;

    let kinds: Vec<ComponentKind> = if only.is_empty() {
        ComponentKind::ALL.to_vec()
    } else {
        only.iter().copied().map(ComponentKind::from).collect()
    };
    for kind in kinds {
        config.participate(kind);
    }

    match &settings.config_path {
        Some(path) => load_config_file(path, &mut config)?,
        None => match config_file() {
            Some(path) if path.is_file() => load_config_file(&path, &mut config)?,
            Some(path) => debug!("No user configuration at {}", path.display()),
            None => debug!("No home directory; skipping user configuration"),
        },
    }
    let ports = config.plugin_port_range()?;
    debug!("Plugin port range {:?}", ports);

    let mut discovery = if settings.default_dirs {
        PluginDiscovery::with_default_dirs()
    } else {
        PluginDiscovery::new()
    };
    for dir in &settings.plugin_dirs {
        discovery.add_plugin_dir(dir);
    }
    let discovered = discovery.discover_into(&mut config)?;
    info!("Discovered {} plugin binaries", discovered);

    config.load_external_components_with(policy.into());
    Ok(config.freeze())
}

fn print_catalog(catalog: &ComponentCatalog) {
    println!(
        "Plugin port range: {}-{}",
        catalog.plugin_min_port(),
        catalog.plugin_max_port()
    );
    for kind in ComponentKind::ALL {
        let Some(registry) = catalog.registry(kind) else {
            println!("{}: not participating", kind.config_key());
            continue;
        };
        if registry.is_empty() {
            println!("{}: (none)", kind.config_key());
            continue;
        }
        println!("{}:", kind.config_key());
        for name in registry.names() {
            let location = registry
                .get(&name)
                .and_then(|component| component.executable().map(|p| p.display().to_string()))
                .unwrap_or_else(|| "<built-in>".to_string());
            println!("  {}\t{}", name, location);
        }
    }
}
