mod args;
mod generator;
mod stream;

use std::fs::File;
use std::io::{self, BufWriter};

use args::CliArgs;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use stream::{start_time, write_log_stream};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let start = start_time(*args.seed());

    match args.output() {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            write_log_stream(file, &mut rng, &args, start)?;
            eprintln!("Wrote {} log lines to {}", args.count(), path.display());
        }
        None => write_log_stream(BufWriter::new(io::stdout().lock()), &mut rng, &args, start)?,
    }
    Ok(())
}
