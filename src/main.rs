// cryptal CLI - print the SHA-256 digest of the command line or stdin

use std::io::Read;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cryptal::cli::assemble_input;
use cryptal::diagnostics;
use cryptal::hash::sha256;

/// Compute the SHA-256 digest of the given words
#[derive(Parser)]
#[command(name = "cryptal")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Words to hash, joined with single spaces
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Hash all of standard input instead of the words
    #[arg(long, conflicts_with = "words")]
    stdin: bool,

    /// Print the padded message and schedules in binary to stderr
    #[arg(long)]
    dump: bool,

    /// Print the digest in uppercase hex
    #[arg(long)]
    upper: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let input = if cli.stdin {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        buf
    } else if cli.words.is_empty() {
        debug!("no input words, nothing to hash");
        return Ok(());
    } else {
        assemble_input(&cli.words).into_bytes()
    };

    debug!(len = input.len(), "hashing input");

    if cli.dump {
        eprintln!("{}", diagnostics::dump(&input)?);
    }

    let digest = sha256(&input)?;

    if cli.upper {
        println!("{:X}", digest);
    } else {
        println!("{}", digest);
    }

    Ok(())
}
