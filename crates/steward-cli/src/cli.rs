use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "steward")]
#[command(about = "Steward CLI — converge a declared Jenkins instance")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run convergence passes against an in-memory platform
    Converge(ConvergeArgs),
    /// Print the desired manifests without touching any store
    Build(BuildArgs),
}

#[derive(Args)]
pub struct ConvergeArgs {
    /// Path to the instance manifest (JSON)
    #[arg(short, long, env = "STEWARD_MANIFEST")]
    pub manifest: PathBuf,

    /// Stage a pre-existing endpoint with this router-assigned host
    #[arg(long)]
    pub endpoint_host: Option<String>,

    /// Stage the pre-existing endpoint without TLS termination
    #[arg(long, requires = "endpoint_host")]
    pub plain: bool,

    /// Number of passes to run
    #[arg(long, default_value_t = 2)]
    pub passes: u32,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Path to the instance manifest (JSON)
    #[arg(short, long, env = "STEWARD_MANIFEST")]
    pub manifest: PathBuf,

    /// Assume this endpoint host when assembling the workload
    #[arg(long, default_value = "localhost")]
    pub endpoint_host: String,

    /// Assume plain transport instead of TLS
    #[arg(long)]
    pub plain: bool,
}
