use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use threshold_wallet::{Parameters, Share, ShareSet, DEMO_PRIME};

/// Threshold secret sharing: split a secret into n shares, any t of which recover it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a secret and print the shares as JSON.
    Split {
        #[arg(long)]
        secret: BigUint,
        /// Total number of shares (n).
        #[arg(long, required_unless_present = "config")]
        shares: Option<usize>,
        /// Shares needed to reconstruct (t).
        #[arg(long, required_unless_present = "config")]
        threshold: Option<usize>,
        #[arg(long, default_value_t = BigUint::from(DEMO_PRIME))]
        prime: BigUint,
        /// JSON file holding threshold, share_count and prime.
        #[arg(long, conflicts_with_all = ["shares", "threshold"])]
        config: Option<PathBuf>,
    },
    /// Reconstruct a secret from a JSON list of shares (file or stdin).
    Reconstruct {
        #[arg(long, default_value_t = BigUint::from(DEMO_PRIME))]
        prime: BigUint,
        /// Participant indices to use, e.g. 1,3,5. Defaults to every share.
        #[arg(long, value_delimiter = ',')]
        indices: Vec<u32>,
        file: Option<PathBuf>,
    },
    /// Split then reconstruct with the first t shares over the demo prime.
    Demo {
        #[arg(long, default_value_t = BigUint::from(42u32))]
        secret: BigUint,
        #[arg(long, default_value_t = 5)]
        shares: usize,
        #[arg(long, default_value_t = 3)]
        threshold: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Split {
            secret,
            shares,
            threshold,
            prime,
            config,
        } => {
            let params = match (config, shares, threshold) {
                (Some(path), _, _) => load_parameters(&path)?,
                (None, Some(n), Some(t)) => Parameters::new(t, n, prime),
                _ => bail!("either --config or both --shares and --threshold are required"),
            };
            let shares = params.split_secure(&secret).context("splitting secret")?;
            println!("{}", serde_json::to_string_pretty(&shares)?);
        }
        Command::Reconstruct {
            prime,
            indices,
            file,
        } => {
            let shares = read_shares(file.as_deref())?;
            let set = if indices.is_empty() {
                ShareSet::new(shares)
            } else {
                ShareSet::select(&shares, &indices)
            }
            .context("selecting shares")?;
            let secret = set.reconstruct(&prime).context("reconstructing secret")?;
            println!("{secret}");
        }
        Command::Demo {
            secret,
            shares,
            threshold,
        } => demo(&secret, shares, threshold)?,
    }
    Ok(())
}

fn load_parameters(path: &Path) -> Result<Parameters> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading parameters from {}", path.display()))?;
    Parameters::from_json(&json).context("parsing parameters")
}

fn read_shares(file: Option<&Path>) -> Result<Vec<Share>> {
    let json = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading shares from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading shares from stdin")?;
            buf
        }
    };
    serde_json::from_str(&json).context("parsing shares")
}

fn demo(secret: &BigUint, share_count: usize, threshold: usize) -> Result<()> {
    let params = Parameters::demo(threshold, share_count);
    println!("Prime modulus: {}", params.prime);

    let shares = params.split_secure(secret).context("splitting secret")?;
    for share in &shares {
        println!("Share {}: ({}, {})", share.x, share.x, share.y);
    }

    let indices: Vec<u32> = shares.iter().take(threshold).map(|s| s.x).collect();
    let set = params.select(&shares, &indices)?;
    let recovered = set.reconstruct(&params.prime)?;
    println!("Reconstructed from shares {:?}: {}", set.indices(), recovered);

    if &recovered == secret {
        println!("Secret successfully reconstructed");
        Ok(())
    } else {
        bail!("reconstructed {recovered}, expected {secret}")
    }
}
