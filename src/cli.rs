//! SureBet server command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rand::Rng as _;

/// Length of a generated token secret, in bytes.
pub const SECRET_LENGTH: usize = 64;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// The command to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Operational commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generates a secret to sign tokens with.
    GenerateSecret,
    /// Creates the database schema, then exits.
    InitDb,
}

/// Generates a random hex-encoded token secret.
pub fn generate_secret() -> String {
    let mut secret = [0u8; SECRET_LENGTH];
    rand::rng().fill(&mut secret);
    base16::encode_lower(&secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_generate_secret() {
        let secret = generate_secret();

        assert_eq!(secret.len(), SECRET_LENGTH * 2);
        assert!(secret.chars().all(|ch| ch.is_ascii_hexdigit()));
        assert_ne!(secret, generate_secret());
    }

    #[test]
    pub fn test_parse_args() {
        let args = Args::parse_from(["surebet", "--config", "prod.toml", "init-db"]);

        assert_eq!(args.config, Some(PathBuf::from("prod.toml")));
        assert!(matches!(args.command, Some(Command::InitDb)));

        let args = Args::parse_from(["surebet"]);
        assert!(args.command.is_none());
    }
}
