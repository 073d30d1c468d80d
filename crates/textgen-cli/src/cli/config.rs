use super::{output::Output, size::parse_byte_size};
use anyhow::{Context, bail};
use clap::Parser;
use textgen::{CharacterClass, Config, Layout, LineSeparator, Style};

/// Command-line arguments of the `textgen` binary.
///
/// Every option can also be supplied through the environment variable named
/// next to it, or through a `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "textgen",
    version,
    about = "Writes a file of pseudo-random text with an exact size"
)]
pub struct CliArgs {
    /// Size of the output in bytes, with an optional unit: k/K, m/M or g/G.
    ///
    /// Lower-case units are powers of 1024, upper-case units powers of 1000.
    ///
    /// Environment variable: `TEXTGEN_SIZE`
    #[arg(env = "TEXTGEN_SIZE", value_parser = parse_byte_size)]
    pub size: u64,

    /// Path of the file to create, or `std` to write to standard output.
    ///
    /// The file must not exist yet.
    ///
    /// Environment variable: `TEXTGEN_OUTPUT`
    #[arg(env = "TEXTGEN_OUTPUT")]
    pub output: String,

    /// Maximum number of buffers generated concurrently.
    ///
    /// Environment variable: `TEXTGEN_THREADS`
    #[arg(short, long, env = "TEXTGEN_THREADS", default_value_t = 1)]
    pub threads: usize,

    /// Target operating system. `windows` (or `win`) ends lines with CRLF,
    /// anything else with LF. Defaults to the host system.
    ///
    /// Environment variable: `TEXTGEN_SYSTEM`
    #[arg(short = 'y', long, env = "TEXTGEN_SYSTEM")]
    pub system: Option<String>,

    /// Buffer size per thread, with an optional unit like SIZE.
    ///
    /// Environment variable: `TEXTGEN_BUFFER`
    #[arg(short, long, env = "TEXTGEN_BUFFER", value_parser = parse_byte_size, default_value = "8m")]
    pub buffer: u64,

    /// Output letters only.
    #[arg(short, long)]
    pub alpha: bool,

    /// Output lower case letters only.
    #[arg(short, long)]
    pub lower: bool,

    /// Output upper case letters only.
    #[arg(short, long)]
    pub upper: bool,

    /// Output raw random bytes instead of words.
    #[arg(long, conflicts_with_all = ["alpha", "lower", "upper", "system"])]
    pub raw: bool,

    /// Fixed base seed, for reproducible single-threaded output.
    ///
    /// Environment variable: `TEXTGEN_SEED`
    #[arg(long, env = "TEXTGEN_SEED")]
    pub seed: Option<u64>,
}

impl CliArgs {
    /// Picks the character class from the `-a`, `-l` and `-u` flags.
    ///
    /// `-a` together with one case flag narrows to that case; `-l` together
    /// with `-u` means both cases.
    pub const fn class(&self) -> CharacterClass {
        match (self.alpha, self.lower, self.upper) {
            (true, true, _) | (false, true, false) => CharacterClass::LettersLower,
            (true, false, true) | (false, false, true) => CharacterClass::LettersUpper,
            (true, false, false) | (false, true, true) => CharacterClass::LettersMixedCase,
            (false, false, false) => CharacterClass::AllPrintable,
        }
    }

    pub fn separator(&self) -> LineSeparator {
        match self.system.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("windows" | "win") => LineSeparator::Windows,
            Some(_) => LineSeparator::Unix,
            None => LineSeparator::native(),
        }
    }
}

/// Validated settings of one run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub config: Config,
    pub output: Output,
}

impl TryFrom<CliArgs> for RunSettings {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.threads == 0 {
            bail!("number of threads must be greater than 0");
        }

        if args.buffer == 0 {
            bail!("buffer size must be greater than 0");
        }

        let buffer_size = usize::try_from(args.buffer)
            .with_context(|| format!("buffer size {} exceeds the address space", args.buffer))?;

        let style = Style {
            separator: args.separator(),
            class: args.class(),
            layout: if args.raw { Layout::Raw } else { Layout::Words },
        };

        Ok(Self {
            config: Config {
                total_size: args.size,
                buffer_size,
                threads: args.threads,
                style,
                seed: args.seed,
            },
            output: Output::parse(&args.output),
        })
    }
}
