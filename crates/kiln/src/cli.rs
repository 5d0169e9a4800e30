use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use kiln_core::plugin_system::{ComponentKind, MergePolicy};

/// Kiln: configuration-driven automation with external component plugins
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Configuration file (defaults to $KILN_CONFIG, then ~/.kilnconfig)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Additional plugin directory to scan; may be repeated
    #[arg(long = "plugin-dir", global = true)]
    pub plugin_dirs: Vec<PathBuf>,

    /// Skip scanning the default plugin directories
    #[arg(long, global = true)]
    pub no_default_dirs: bool,

    /// Raise log verbosity to debug
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect external component plugins
    Plugins {
        #[command(subcommand)]
        command: PluginCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum PluginCommand {
    /// List registered components per category
    List {
        /// Only load these categories; the others do not participate
        #[arg(long = "only", value_enum)]
        only: Vec<KindArg>,

        /// What to do when a declared plugin shadows a registered component
        #[arg(long, value_enum, default_value_t = PolicyArg::Overwrite)]
        policy: PolicyArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Builder,
    Provisioner,
    PostProcessor,
}

impl From<KindArg> for ComponentKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Builder => ComponentKind::Builder,
            KindArg::Provisioner => ComponentKind::Provisioner,
            KindArg::PostProcessor => ComponentKind::PostProcessor,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    Overwrite,
    KeepExisting,
}

impl From<PolicyArg> for MergePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Overwrite => MergePolicy::Overwrite,
            PolicyArg::KeepExisting => MergePolicy::KeepExisting,
        }
    }
}
