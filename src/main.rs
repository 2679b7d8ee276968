use anyhow::{Context, Result};
use invert_by::config::{self, Config, Input, OutputFormat};
use invert_by::{
    invert_json, invert_json_last_wins, load_mapping, read_mapping, write_csv, write_csv_rows,
    write_json, InputFormat,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let matches = config::app().get_matches();
    let config = Config::from_matches(&matches)?;
    init_tracing(&config);

    let document = match &config.input {
        Input::Stdin => read_mapping(
            io::stdin().lock(),
            config.input_format.unwrap_or(InputFormat::Json),
        )
        .context("failed to read mapping from stdin")?,
        Input::Path(path) => load_mapping(path, config.input_format)
            .with_context(|| format!("failed to load mapping from '{}'", path.display()))?,
    };

    // The destination is not opened until rendering has succeeded.
    let mut rendered = Vec::new();
    if config.last_wins {
        let inverted = invert_json_last_wins(&document)?;
        match config.output_format {
            OutputFormat::Json => write_json(&mut rendered, &inverted, config.pretty)?,
            OutputFormat::Csv => write_csv_rows(
                &mut rendered,
                inverted.iter().map(|(value, key)| (value.as_str(), key.as_str())),
            )?,
        }
        info!(values = inverted.len(), "inverted mapping, last key wins");
    } else {
        let inverted = invert_json(&document)?;
        match config.output_format {
            OutputFormat::Json => write_json(&mut rendered, &inverted, config.pretty)?,
            OutputFormat::Csv => write_csv(&mut rendered, &inverted)?,
        }
        info!(values = inverted.len(), "inverted mapping");
    }

    let mut out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    out.write_all(&rendered)?;
    out.flush()?;

    if let Some(path) = &config.output {
        info!(path = %path.display(), "wrote output");
    }

    Ok(())
}
