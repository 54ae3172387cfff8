mod encode;
mod exit;
mod logging;

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::logging::{init_logging, LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    name = "lenprefix",
    version,
    about = "Read a stream to the end and write it as <length>:<bytes>"
)]
struct Cli {
    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,

    #[command(flatten)]
    encode: EncodeArgs,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Write the frame to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Bytes to reserve before reading input.
    #[arg(long, value_name = "BYTES", default_value = "0")]
    pub initial_capacity: usize,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    match encode::run(&cli.encode) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
