//! Command line interface for huffzip.
//!
//! Parses the arguments into a HuffOpts struct, sets the log level from
//! the requested verbosity and reports the resulting configuration. The
//! core never touches the command line; it only sees HuffOpts and the bit
//! source/sink handles opened from it.

use std::fmt::{Display, Formatter};

use clap::Parser;
use log::info;

/// Verbosity of user information
#[derive(Debug, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Zip or Unzip
#[derive(Debug)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options controlling a run.
#[derive(Debug)]
pub struct HuffOpts {
    /// Name of the file to read for input
    pub file: String,
    /// Compress or decompress
    pub op_mode: Mode,
    /// Silently overwrite an existing output file
    pub force_overwrite: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

/// Command line interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman tree-header file compressor.",
    long_about = "
    Compresses a file with a Huffman prefix code built from the exact byte
    frequencies of that file. The coding tree is serialized into the stream
    header, so the output is fully self describing and decompression needs
    nothing beyond the compressed file itself."
)]
struct Args {
    /// Filename of the file to process
    #[clap()]
    filename: String,

    /// Perform compression on the input file (the default)
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Force overwriting the output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. -v 1 shows very little, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Put the command line information from CLAP into our internal structure
/// and set the log level to match.
pub fn huffopts_init() -> HuffOpts {
    let args = Args::parse();

    let verbose = match (args.quiet, args.v) {
        (true, _) => Verbosity::Quiet,
        (_, 0 | 1) => Verbosity::Errors,
        (_, 2) => Verbosity::Warnings,
        (_, 3) => Verbosity::Info,
        (_, 4) => Verbosity::Debug,
        (_, _) => Verbosity::Trace,
    };
    let opts = HuffOpts {
        file: args.filename,
        op_mode: if args.decompress && !args.compress {
            Mode::Unzip
        } else {
            Mode::Zip
        },
        force_overwrite: args.force,
        verbose,
    };

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.file);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    opts
}
