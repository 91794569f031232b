mod check;
mod cli;
mod config;
mod core;
mod fallback;
mod shell;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, ShellArgs};
use config::Config;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_tracing();

    let exit_code = exit_code_for(run(), &mut std::io::stderr());
    std::process::exit(exit_code);
}

fn exit_code_for<E: Write>(outcome: Result<i32>, err: &mut E) -> i32 {
    match outcome {
        Ok(code) => code,
        Err(failure) => {
            let _ = writeln!(err, "error: {failure:#}");
            2
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("BMICALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    match cli.command.unwrap_or(Commands::Shell(ShellArgs::default())) {
        Commands::Init => {
            let path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILE_NAME));
            let path = if path.is_absolute() { path } else { cwd.join(path) };
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
        Commands::Guide => {
            println!("{}", core::advice::reference_guide());
            Ok(0)
        }
        Commands::Check(args) => {
            let config = config::load_config(cli.config.as_deref(), &cwd)?;
            let stdout = std::io::stdout();
            let stderr = std::io::stderr();
            check::run(&args, &config, &mut stdout.lock(), &mut stderr.lock())
        }
        Commands::Shell(args) => {
            let config = config::load_config(cli.config.as_deref(), &cwd)?;
            run_shell(&args, &config)
        }
    }
}

fn run_shell(args: &ShellArgs, config: &Config) -> Result<i32> {
    if !args.plain {
        match shell::launch(&config.display) {
            Ok(()) => return Ok(0),
            Err(err) => {
                tracing::warn!("interactive shell unavailable: {err:#}");
                eprintln!("程序启动失败: {err:#}");
                eprintln!();
                eprintln!("交互界面启动失败，尝试命令行版本...");
            }
        }
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    fallback::run(&mut stdin.lock(), &mut stdout.lock())
}
