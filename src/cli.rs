use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bmicalc",
    version,
    about = "Body-mass index calculator with health advice"
)]
pub struct Cli {
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive prompt loop (the default)
    Shell(ShellArgs),
    /// Compute once from flags
    Check(CheckArgs),
    /// Print the advice for every band
    Guide,
    /// Write a default bmicalc.toml
    Init,
}

#[derive(Debug, Args, Clone, Default)]
pub struct ShellArgs {
    /// Skip the interactive shell and use plain prompts
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Height in centimeters
    #[arg(long, allow_hyphen_values = true)]
    pub height: String,
    /// Weight in kilograms
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["bmicalc"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_keeps_raw_text_for_validation() {
        let cli = Cli::try_parse_from([
            "bmicalc", "check", "--height", "-170", "--weight", "abc", "--json",
        ])
        .expect("parses");
        let Some(Commands::Check(args)) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.height, "-170");
        assert_eq!(args.weight, "abc");
        assert!(args.json);
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["bmicalc", "guide", "--config", "x.toml"]).expect("parses");
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
