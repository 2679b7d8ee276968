// config.rs
use crate::errors::{InvertError, Result};
use crate::loader::InputFormat;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = InvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(InvertError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: Input,
    pub input_format: Option<InputFormat>,
    pub output: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub last_wins: bool,
    pub pretty: bool,
    pub verbosity: u64,
}

pub fn app() -> App<'static, 'static> {
    App::new("invert_by")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Groups the keys of a mapping under the values they map to")
        .arg(
            Arg::with_name("INPUT")
                .help("JSON or CSV mapping to invert, or '-' to read JSON from stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Write the result to FILE instead of stdout")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .possible_values(&["json", "csv"])
                .default_value("json"),
        )
        .arg(
            Arg::with_name("input-format")
                .long("input-format")
                .value_name("FORMAT")
                .help("Input format, inferred from the extension when omitted")
                .possible_values(&["json", "csv"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("last-wins")
                .long("last-wins")
                .help("Keep only the last key for each value instead of grouping"),
        )
        .arg(
            Arg::with_name("pretty")
                .long("pretty")
                .help("Pretty-print JSON output"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Raise log verbosity (repeatable)"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let input = match matches.value_of("INPUT") {
            Some("-") | None => Input::Stdin,
            Some(path) => Input::Path(PathBuf::from(path)),
        };

        Ok(Config {
            input,
            input_format: matches
                .value_of("input-format")
                .map(str::parse::<InputFormat>)
                .transpose()?,
            output: matches.value_of("output").map(PathBuf::from),
            output_format: matches.value_of("format").unwrap_or("json").parse()?,
            last_wins: matches.is_present("last-wins"),
            pretty: matches.is_present("pretty"),
            verbosity: matches.occurrences_of("verbose"),
        })
    }

    /// The default `tracing` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "invert_by=warn",
            1 => "invert_by=info",
            2 => "invert_by=debug",
            _ => "invert_by=trace",
        }
    }
}
