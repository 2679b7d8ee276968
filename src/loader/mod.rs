// loader/mod.rs
use crate::errors::{InvertError, Result};
use crate::file_io::open_file;
use serde_json::{Map, Value};
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Infers the format from the file extension, looking through a trailing `.bz2`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let name = name.strip_suffix(".bz2").unwrap_or(name);
        let ext = Path::new(name).extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl FromStr for InputFormat {
    type Err = InvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "csv" => Ok(InputFormat::Csv),
            other => Err(InvertError::UnknownFormat(other.to_string())),
        }
    }
}

/// Loads a mapping from `path`. Without an explicit `format` it is inferred
/// from the extension.
pub fn load_mapping<P: AsRef<Path>>(path: P, format: Option<InputFormat>) -> Result<Value> {
    let path = path.as_ref();
    let format = match format {
        Some(format) => format,
        None => InputFormat::from_path(path).ok_or_else(|| {
            InvertError::UnknownFormat(
                path.extension()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string(),
            )
        })?,
    };
    debug!(path = %path.display(), ?format, "loading mapping");
    read_mapping(open_file(path)?, format)
}

pub fn read_mapping<R: Read>(reader: R, format: InputFormat) -> Result<Value> {
    match format {
        InputFormat::Json => Ok(serde_json::from_reader(BufReader::new(reader))?),
        InputFormat::Csv => read_csv_mapping(reader),
    }
}

// Key then value after a header row; extra columns are ignored.
fn read_csv_mapping<R: Read>(reader: R) -> Result<Value> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut object = Map::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let (key, value) = match (record.get(0), record.get(1)) {
            (Some(key), Some(value)) => (key, value),
            _ => return Err(InvertError::MalformedRow { line }),
        };
        if object
            .insert(key.to_string(), Value::String(value.to_string()))
            .is_some()
        {
            warn!(key, line, "duplicate key in CSV input, keeping the later value");
        }
    }

    Ok(Value::Object(object))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("a.json")), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path(Path::new("dir/a.CSV")), Some(InputFormat::Csv));
        assert_eq!(
            InputFormat::from_path(Path::new("a.csv.bz2")),
            Some(InputFormat::Csv)
        );
        assert_eq!(InputFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(InputFormat::from_path(Path::new("a.bz2")), None);
    }

    #[test]
    fn test_unknown_format_string() {
        let err = "yaml".parse::<InputFormat>().unwrap_err();
        assert!(matches!(err, InvertError::UnknownFormat(ref f) if f == "yaml"));
    }

    #[test]
    fn test_read_json_keeps_order() {
        let value = read_mapping(r#"{"b": "x", "a": "y"}"#.as_bytes(), InputFormat::Json).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_read_csv() {
        let input = "key,value\nb,x\na,y\nc,x\n";
        let value = read_mapping(input.as_bytes(), InputFormat::Csv).unwrap();
        let object = value.as_object().unwrap();
        let pairs: Vec<_> = object
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str().unwrap()))
            .collect();
        assert_eq!(pairs, vec![("b", "x"), ("a", "y"), ("c", "x")]);
    }

    #[test]
    fn test_csv_duplicate_key_keeps_later_value() {
        let input = "key,value\na,x\nb,y\na,z\n";
        let value = read_mapping(input.as_bytes(), InputFormat::Csv).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["a"], "z");
        assert_eq!(object.keys().next().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_csv_single_column_is_malformed() {
        let input = "key\na\n";
        let err = read_mapping(input.as_bytes(), InputFormat::Csv).unwrap_err();
        assert!(matches!(err, InvertError::MalformedRow { line: 2 }));
    }

    #[test]
    fn test_csv_short_row_is_malformed() {
        let input = "key,value\na,x\nb\n";
        let err = read_mapping(input.as_bytes(), InputFormat::Csv).unwrap_err();
        assert!(matches!(err, InvertError::MalformedRow { line: 3 }));
    }

    #[test]
    fn test_csv_extra_columns_are_ignored() {
        let input = "key,value\na,x,note\n";
        let value = read_mapping(input.as_bytes(), InputFormat::Csv).unwrap();
        assert_eq!(value.as_object().unwrap()["a"], "x");
    }

    #[test]
    fn test_invalid_json() {
        let err = read_mapping("{not json".as_bytes(), InputFormat::Json).unwrap_err();
        assert!(matches!(err, InvertError::Json(_)));
    }
}
