//! CLI for sumstream.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use sumstream_core::{config, ChecksumType};

use commands::{run_check, run_completions, run_sum};

/// Top-level CLI for sumstream.
#[derive(Debug, Parser)]
#[command(name = "sumstream")]
#[command(about = "sumstream: streaming checksums of files and stdin", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the checksum of each file (`-` or no path reads stdin).
    Sum {
        /// Files to hash.
        paths: Vec<PathBuf>,
        /// Digest algorithm (default from config).
        #[arg(long, short = 'a', value_name = "NAME")]
        algorithm: Option<ChecksumType>,
    },

    /// Verify a file against an expected hex digest.
    Check {
        /// Path to the file.
        path: PathBuf,
        /// Expected digest as hex.
        expected: String,
        /// Digest algorithm (default from config).
        #[arg(long, short = 'a', value_name = "NAME")]
        algorithm: Option<ChecksumType>,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Sum { paths, algorithm } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_sum(&paths, algorithm.unwrap_or(cfg.algorithm), cfg.buffer_size())?;
            }
            CliCommand::Check {
                path,
                expected,
                algorithm,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_check(
                    &path,
                    &expected,
                    algorithm.unwrap_or(cfg.algorithm),
                    cfg.buffer_size(),
                )?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
