use clap::Parser;
use fastx_split::split_file;
use std::path::PathBuf;
use std::process::ExitCode;

/// Split a FASTA/FASTQ file into size-capped FASTA chunks.
#[derive(Debug, Parser)]
#[command(name = "fastx-split", version, about)]
struct Args {
    /// Path to the FASTA/FASTQ file to split (plain or .gz)
    #[arg(short = 's', long)]
    to_split: PathBuf,

    /// Existing directory to write the chunk files into
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Maximum size of each chunk, in gigabytes
    #[arg(short, long)]
    num_gigs: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let max_bytes = args.num_gigs * 1024 * 1024 * 1024;

    match split_file(&args.to_split, &args.output_dir, max_bytes) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
