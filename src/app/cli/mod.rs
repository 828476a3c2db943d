//! CLI adapter.

mod build;
mod check;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;
use url::Url;

use crate::domain::{AppError, RuntimeHost};

#[derive(Parser)]
#[command(name = "dashdesk")]
#[command(version)]
#[command(
    about = "Package a Universal Dashboard script as an Electron desktop application",
    long_about = None
)]
struct Cli {
    /// Log each pipeline step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold, configure, and build the desktop application
    #[clap(visible_alias = "b")]
    Build(BuildArgs),
    /// Verify that the Node.js tooling and dashboard runtime are available
    #[clap(visible_alias = "c")]
    Check {
        /// Runtime module directory to verify instead of searching PSModulePath
        #[arg(long)]
        runtime_dir: Option<PathBuf>,
        /// Configuration file (defaults to ./dashdesk.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Dashboard entry script, or a directory containing dashboard.ps1
    source: PathBuf,
    /// Application name (prompted when omitted on a terminal)
    #[arg(short, long)]
    name: Option<String>,
    /// Directory the project is created in
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// PowerShell host the desktop app launches: primary (pwsh) or legacy (powershell)
    #[arg(long)]
    host: Option<RuntimeHost>,
    /// Dashboard listen port, overriding detection from the script
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,
    /// Remote icon URL for the Windows installer
    #[arg(long)]
    icon_url: Option<Url>,
    /// Setup executable icon file
    #[arg(long)]
    setup_icon: Option<PathBuf>,
    /// Image shown while the installer runs
    #[arg(long)]
    loading_gif: Option<PathBuf>,
    /// Runtime module directory to bundle instead of searching PSModulePath
    #[arg(long)]
    runtime_dir: Option<PathBuf>,
    /// Configuration file (defaults to dashdesk.toml next to the source)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop after configuring the project, without running the build tool
    #[arg(long)]
    skip_build: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Build(args) => build::run_build(args).map(|_| 0),
        Commands::Check { runtime_dir, config } => check::run_check(runtime_dir, config),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).format_target(false);
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_parses_all_options() {
        let cli = Cli::try_parse_from([
            "dashdesk",
            "b",
            "app/dashboard.ps1",
            "--name",
            "ops",
            "--host",
            "legacy",
            "--port",
            "8080",
            "--icon-url",
            "https://example.com/app.ico",
            "--skip-build",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Build(args) = cli.command else { panic!("expected build") };
        assert_eq!(args.source, PathBuf::from("app/dashboard.ps1"));
        assert_eq!(args.name.as_deref(), Some("ops"));
        assert_eq!(args.host, Some(RuntimeHost::Legacy));
        assert_eq!(args.port, Some(8080));
        assert!(args.icon_url.is_some());
        assert!(args.skip_build);
    }

    #[test]
    fn zero_port_is_rejected() {
        assert!(Cli::try_parse_from(["dashdesk", "build", "x.ps1", "--port", "0"]).is_err());
    }

    #[test]
    fn unknown_host_is_rejected() {
        assert!(Cli::try_parse_from(["dashdesk", "build", "x.ps1", "--host", "bash"]).is_err());
    }
}
