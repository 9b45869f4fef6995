//! The command-line front end: gathers the input bytes, runs one conversion
//! and writes the result.

use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _};
use clap::Parser;
use itertools::Itertools as _;
use tracing::info;

use crate::types::{Declared, DestinationType, Encoding, SourceType, TYPE_NAMES};
use crate::{decode_with, encode_with};

const TYPE_NOTES: &str = "\
Type notes:
- Type names are case insensitive.
- Source types may be prefixed with BASE64:. The input is stripped of spaces,
  tabs, CR and LF, then base64 decoded as an initial step.
- Destination types may have a :BASE64 suffix. The output is base64 encoded as
  a final step.
- Destination types may be prefixed with CRLF: or LF:. CRLF, CR and LF in the
  data are all taken as line ends and rewritten to the chosen form before
  encoding. A line end is added if the last one is missing.
- UTF input may start with a byte order mark (BOM). UTF output never has one.
- UTF16 and UTF32 default to big-endian if there is no BOM.
- A BOM that contradicts an explicit byte order is an error.
- ESCAPED is printable ASCII where `` is a grave accent, `xhh an 8-bit value,
  `uhhhh a 16-bit value and `u{h...h} a value of 1 to 8 hex digits.";

#[derive(Debug, Parser)]
#[command(version, about, after_long_help = type_help())]
pub struct Cli {
    /// The file to convert. Reads stdin if missing.
    #[arg(short, long, value_name = "PATH")]
    pub src: Option<PathBuf>,

    /// The source type, `[BASE64:]TYPE`.
    #[arg(short = 'S', long, value_name = "TYPE", default_value = "UTF8")]
    pub src_type: String,

    /// The converted file. Writes stdout if missing.
    #[arg(short, long, value_name = "PATH")]
    pub dst: Option<PathBuf>,

    /// The destination type, `[CRLF:|LF:]TYPE[:BASE64]`.
    #[arg(short = 'D', long, value_name = "TYPE", default_value = "UTF8")]
    pub dst_type: String,

    /// Where failures are reported. Writes stderr if missing.
    #[arg(short, long, value_name = "PATH")]
    pub err: Option<PathBuf>,

    /// Log more about the conversion. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

fn type_help() -> String {
    let names = TYPE_NAMES
        .iter()
        .filter(|(_, declared)| *declared != Declared::Concrete(Encoding::String))
        .map(|&(name, declared)| match declared {
            Declared::Utf16 | Declared::Utf32 => {
                format!("  {name:<9}(byte order from BOM, {} without one)", declared.default_encoding())
            }
            Declared::Concrete(encoding) if encoding.name() != name => {
                format!("  {name:<9}(alias for {encoding})")
            }
            Declared::Concrete(_) => format!("  {name}"),
        })
        .join("\n");
    format!("Types:\n{names}\n\n{TYPE_NOTES}")
}

/// Runs one conversion as described by `cli`.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let source: SourceType = cli.src_type.parse()?;
    if source.declared == Declared::Concrete(Encoding::String) {
        bail!("Input type may not be STRING.");
    }
    let destination: DestinationType = cli.dst_type.parse()?;
    if destination.encoding == Encoding::String {
        bail!("Output type may not be STRING.");
    }

    let input = read_source(cli.src.as_deref())?;
    let chars = decode_with(&source, &input)?;
    let output = encode_with(&destination, &chars)?;
    info!(
        read = input.len(),
        chars = chars.len(),
        written = output.len(),
        "converted {} to {}",
        cli.src_type,
        cli.dst_type
    );
    write_destination(cli.dst.as_deref(), &output)
}

/// Writes a failure of [`run`] to the error stream chosen by `cli`, followed
/// by a usage hint.
pub fn report(cli: &Cli, error: &anyhow::Error) -> io::Result<()> {
    let message = format!("EXCEPTION: {error:#}\nTry 'charconv --help' for the list of types.\n");
    match &cli.err {
        Some(path) => fs::write(path, message),
        None => io::stderr().lock().write_all(message.as_bytes()),
    }
}

fn read_source(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("could not read source {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("could not read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_destination(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, bytes)
            .with_context(|| format!("could not write destination {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("could not write stdout")?;
            stdout.flush().context("could not write stdout")
        }
    }
}
