use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "mkcsv",
    about = "Generate a sample CSV of fake personal profiles",
    version
)]
struct Cli {
    /// Number of rows to generate
    #[arg(
        short = 'n',
        long = "rows",
        default_value_t = 500,
        allow_negative_numbers = true
    )]
    rows: i64,

    /// Output file path (e.g. sample.csv)
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Seed the random source for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Print the first N generated rows to stdout after writing
    #[arg(long, value_name = "N")]
    preview: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.rows <= 0 {
        bail!("--rows must be a positive integer (got {})", cli.rows);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let records = mkcsv::record::sample_many(&mut rng, cli.rows as usize);
    mkcsv::output::write_csv(&cli.output, &records)?;

    if let Some(limit) = cli.preview {
        let stdout = io::stdout().lock();
        let mut out = BufWriter::new(stdout);
        mkcsv::output::write_preview(&mut out, &records, limit)?;
        out.flush()?;
    }

    println!("Generated {} rows → {}", cli.rows, cli.output.display());

    Ok(())
}
