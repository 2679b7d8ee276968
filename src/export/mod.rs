// export/mod.rs
use crate::errors::Result;
use crate::invert::Inverted;
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Writes any inverted mapping as a single JSON document followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes one `value,key` row per grouped key.
pub fn write_csv<W: Write>(writer: W, inverted: &Inverted<String, String>) -> Result<()> {
    let rows = inverted
        .iter()
        .flat_map(|(value, keys)| keys.iter().map(move |key| (value.as_str(), key.as_str())));
    write_csv_rows(writer, rows)
}

pub fn write_csv_rows<'a, W, I>(writer: W, rows: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["value", "key"])?;

    let mut count = 0usize;
    for (value, key) in rows {
        writer.write_record([value, key])?;
        count += 1;
    }

    writer.flush()?;
    info!(rows = count, "wrote CSV output");
    Ok(())
}
