use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use drift_types::SourceKind;

#[derive(Parser)]
#[command(
    name = "drift",
    about = "Compare two sourced values and report whether they differ",
    version,
)]
pub struct Cli {
    /// Source value: literal text, a path, or a shell command (per --source-kind)
    #[arg(long)]
    pub source: String,

    /// Target value: literal text, a path, or a shell command (per --target-kind)
    #[arg(long)]
    pub target: String,

    /// How the source value is resolved
    #[arg(long, value_enum, default_value_t = KindArg::String)]
    pub source_kind: KindArg,

    /// How the target value is resolved
    #[arg(long, value_enum, default_value_t = KindArg::String)]
    pub target_kind: KindArg,

    /// Dry-run: refuse to execute command-kind values
    #[arg(long)]
    pub check: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file overriding how command-kind values are executed
    #[arg(long)]
    pub exec_config: Option<PathBuf>,
}

/// Wire names of the source kinds, as clap values.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    String,
    File,
    Command,
}

impl From<KindArg> for SourceKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::String => SourceKind::Literal,
            KindArg::File => SourceKind::File,
            KindArg::Command => SourceKind::Command,
        }
    }
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
