//! wavjoin CLI - join WAV files and wrap raw PCM captures
//!
//! This binary exposes the wavjoin core operations on files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavjoin_cli::{commands, logging};
use wavjoin_core::FormatDescriptor;

/// wavjoin - WAV concatenation and PCM header synthesis
#[derive(Parser)]
#[command(name = "wavjoin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Concatenate WAV files with matching sample rate and channel count
    Concat {
        /// Input WAV files, joined in the order given
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Reject inputs whose bit depth differs from the first input
        #[arg(long)]
        strict_bit_depth: bool,

        /// JSON file with concatenation options
        #[arg(long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Wrap headerless PCM data in a WAV header
    Pcm2wav {
        /// Raw PCM input file
        #[arg(short, long)]
        input: String,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 16000, value_parser = clap::value_parser!(u32).range(1..))]
        sample_rate: u32,

        /// Number of interleaved channels
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        channels: u16,

        /// Bits per sample
        #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u16).range(1..))]
        bits: u16,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the format and payload statistics of a WAV file
    Inspect {
        /// WAV file to inspect
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Concat {
            inputs,
            output,
            strict_bit_depth,
            config,
            json,
        } => commands::concat::run(&inputs, &output, strict_bit_depth, config.as_deref(), json),
        Commands::Pcm2wav {
            input,
            output,
            sample_rate,
            channels,
            bits,
            json,
        } => commands::pcm2wav::run(
            &input,
            &output,
            FormatDescriptor::new(sample_rate, channels, bits),
            json,
        ),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
