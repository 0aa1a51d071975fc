mod scan;
mod stats;

use clap::{Parser, Subcommand};
use scan::{run as run_scan, ScanOptions};
use stats::run as run_stats;

#[derive(Parser)]
#[command(name = "keybreaker")]
#[command(about = "Cryptanalysis toolkit for classical ciphers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the small keyspaces (Caesar, Rail Fence, XOR bytes) for plausible decryptions
    Scan {
        /// Ciphertext to attack
        ciphertext: String,

        /// Show every candidate, not only plausible ones
        #[arg(long)]
        all: bool,
    },

    /// Statistical profile of a text: letter frequencies, index of coincidence, chi-square
    Stats {
        /// Text to profile
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Scan { ciphertext, all } => {
            let report = run_scan(&ciphertext, &ScanOptions { all })?;
            print!("{}", report);
        }
        Commands::Stats { text } => {
            let report = run_stats(&text)?;
            print!("{}", report);
        }
    }

    Ok(())
}
