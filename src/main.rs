//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]
mod bitstream;
mod compression;
mod huffman_coding;
mod tools;

use compression::compress::compress;
use compression::decompress::decompress;

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use crate::tools::cli::{huffopts_init, Mode};

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    // Parse the command line. This also sets the effective log level.
    let options = huffopts_init();

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
    };

    info!("Done.\n");
    result
}
