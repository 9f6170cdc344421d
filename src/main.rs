//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs;

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffzip::tools::cli::{hzopts_init, Mode};
use huffzip::{compress, decompress, HuffError};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), HuffError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let opts = hzopts_init();

    //----- Figure out what we need to do and go do it
    let result = match opts.op_mode {
        Mode::Zip => run(&opts.input, &opts.output, compress),
        Mode::Unzip => run(&opts.input, &opts.output, decompress),
    };

    if result.is_ok() {
        info!("Done.\n");
    }
    result
}

/// Read the input file, run one engine operation on the buffer, and write
/// the result. The output buffer is fully materialized before any byte is
/// written, so a failed operation leaves no partial file behind.
fn run(
    input: &str,
    output: &str,
    op: fn(&[u8]) -> Result<Vec<u8>, HuffError>,
) -> Result<(), HuffError> {
    let data = fs::read(input)?;
    info!("Read {} bytes from {}.", data.len(), input);

    let out = op(&data)?;

    fs::write(output, &out)?;
    info!("Wrote {} bytes to {}.", out.len(), output);
    Ok(())
}
