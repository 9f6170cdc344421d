use clap::Parser;
use std::fmt::{Display, Formatter};

/// Zip or Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command line arguments, parsed by clap.
#[derive(Parser, Debug)]
#[clap(
    name = "huffzip",
    version,
    about = "A Huffman coding file compressor.",
    long_about = "Compresses a file with a canonical Huffman code built from the byte \
frequencies of the input, or restores the original file from a compressed container."
)]
pub struct Args {
    /// Compress the input file into the output file
    #[clap(short = 'c', long = "compress", conflicts_with = "decompress")]
    compress: bool,

    /// Decompress the input file into the output file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// File to read
    #[clap(value_name = "INPUT")]
    input: String,

    /// File to write
    #[clap(value_name = "OUTPUT")]
    output: String,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: u8,
}

/// User settable options controlling one run of the program.
#[derive(Debug)]
pub struct HzOpts {
    /// Compress or decompress
    pub op_mode: Mode,
    /// Name of the file to read
    pub input: String,
    /// Name of the file to write
    pub output: String,
}

/// Parse the command line into the options struct used by main, and set
/// the log level from the -v occurrences. Defaults to compression when
/// neither -c nor -d is given.
pub fn hzopts_init() -> HzOpts {
    let args = Args::parse();

    let op_mode = if args.decompress { Mode::Unzip } else { Mode::Zip };

    match args.verbose {
        0 => log::set_max_level(log::LevelFilter::Warn),
        1 => log::set_max_level(log::LevelFilter::Info),
        2 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    HzOpts {
        op_mode,
        input: args.input,
        output: args.output,
    }
}
