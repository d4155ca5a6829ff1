//! CLI for rdaudit — does this bitstream look uniformly random?

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rdaudit")]
#[command(about = "rdaudit — statistical quality audit for hardware RNG sample files")]
#[command(version = rdaudit_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test battery on one raw sample file
    Analyze {
        /// Raw capture file: little-endian 64-bit samples
        file: PathBuf,

        /// Human-readable label for the source
        #[arg(long, default_value = "samples")]
        label: String,

        /// Autocorrelation lag
        #[arg(long, default_value = "1")]
        lag: usize,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Write a value-histogram SVG into this directory
        #[arg(long)]
        plots: Option<PathBuf>,
    },

    /// Run the battery on two sample files and compare the sources
    Compare {
        /// Raw capture file for the first source
        file_a: PathBuf,

        /// Raw capture file for the second source
        file_b: PathBuf,

        /// Label for the first source
        #[arg(long, default_value = "rdrand")]
        label_a: String,

        /// Label for the second source
        #[arg(long, default_value = "rdseed")]
        label_b: String,

        /// Autocorrelation lag
        #[arg(long, default_value = "1")]
        lag: usize,

        /// Maximum positions paired for the scatter view
        #[arg(long, default_value = "5000")]
        pairs: usize,

        /// Print both reports as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Write histogram and scatter SVGs into this directory
        #[arg(long)]
        plots: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            label,
            lag,
            json,
            plots,
        } => commands::analyze::run(&file, &label, lag, json, plots.as_deref()),
        Commands::Compare {
            file_a,
            file_b,
            label_a,
            label_b,
            lag,
            pairs,
            json,
            plots,
        } => commands::compare::run(
            &file_a,
            &file_b,
            &label_a,
            &label_b,
            lag,
            pairs,
            json,
            plots.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
