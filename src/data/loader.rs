use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Required input columns, named as the source datasets name them.
const COL_SITE: &str = "Launch Site";
const COL_PAYLOAD: &str = "Payload Mass (kg)";
const COL_CLASS: &str = "class";
const COL_BOOSTER: &str = "Booster Version Category";

/// Structured schema violations, wrapped into `anyhow` at the call sites.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: outcome class {value} is not 0 or 1")]
    InvalidOutcome { row: usize, value: i64 },
    #[error("dataset contains no launch records")]
    EmptyDataset,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch records dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the required columns (extra columns ignored)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names, as written by Pandas
pub fn load_dataset(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Index the parsed rows, rejecting empty inputs (the payload bounds and the
/// site dropdown are undefined without at least one record).
fn finish(records: Vec<LaunchRecord>) -> Result<LaunchDataset> {
    if records.is_empty() {
        return Err(SchemaError::EmptyDataset.into());
    }
    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(&mut reader)
}

/// CSV layout: header row naming at least the four required columns.
/// Any other columns (flight number, orbit, ...) are ignored.
fn read_csv<R: Read>(reader: &mut csv::Reader<R>) -> Result<LaunchDataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SchemaError::MissingColumn(name).into())
    };
    let site_idx = column(COL_SITE)?;
    let payload_idx = column(COL_PAYLOAD)?;
    let class_idx = column(COL_CLASS)?;
    let booster_idx = column(COL_BOOSTER)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let payload_mass_kg: f64 = field(payload_idx)
            .parse()
            .with_context(|| format!("Row {row_no}: '{COL_PAYLOAD}' is not a number"))?;
        let class: i64 = field(class_idx)
            .parse()
            .with_context(|| format!("Row {row_no}: '{COL_CLASS}' is not an integer"))?;
        let outcome = Outcome::from_class(class).ok_or(SchemaError::InvalidOutcome {
            row: row_no,
            value: class,
        })?;

        records.push(LaunchRecord {
            site: field(site_idx).to_string(),
            payload_mass_kg,
            outcome,
            booster_category: field(booster_idx).to_string(),
        });
    }

    finish(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<LaunchDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let site = obj
            .get(COL_SITE)
            .and_then(|v| v.as_str())
            .ok_or(SchemaError::MissingColumn(COL_SITE))
            .with_context(|| format!("Row {i}"))?;
        let payload_mass_kg = obj
            .get(COL_PAYLOAD)
            .and_then(|v| v.as_f64())
            .ok_or(SchemaError::MissingColumn(COL_PAYLOAD))
            .with_context(|| format!("Row {i}"))?;
        let class = obj
            .get(COL_CLASS)
            .and_then(|v| v.as_i64())
            .ok_or(SchemaError::MissingColumn(COL_CLASS))
            .with_context(|| format!("Row {i}"))?;
        let booster = obj
            .get(COL_BOOSTER)
            .and_then(|v| v.as_str())
            .ok_or(SchemaError::MissingColumn(COL_BOOSTER))
            .with_context(|| format!("Row {i}"))?;

        let outcome = Outcome::from_class(class).ok_or(SchemaError::InvalidOutcome {
            row: i,
            value: class,
        })?;

        records.push(LaunchRecord {
            site: site.to_string(),
            payload_mass_kg,
            outcome,
            booster_category: booster.to_string(),
        });
    }

    finish(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing launch records.
///
/// Expected schema: flat columns named as in CSV — `Launch Site` (Utf8),
/// `Payload Mass (kg)` (Float64/Float32/Int64/Int32), `class` (Int64/Int32),
/// `Booster Version Category` (Utf8). Works with files written by
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let column = |name: &'static str| -> Result<usize> {
            schema
                .index_of(name)
                .map_err(|_| SchemaError::MissingColumn(name).into())
        };
        let site_col = batch.column(column(COL_SITE)?).clone();
        let payload_col = batch.column(column(COL_PAYLOAD)?).clone();
        let class_col = batch.column(column(COL_CLASS)?).clone();
        let booster_col = batch.column(column(COL_BOOSTER)?).clone();

        for row in 0..batch.num_rows() {
            let site = extract_string(&site_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_SITE}'"))?;
            let payload_mass_kg = extract_f64(&payload_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_PAYLOAD}'"))?;
            let class = extract_i64(&class_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_CLASS}'"))?;
            let booster = extract_string(&booster_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_BOOSTER}'"))?;

            let outcome = Outcome::from_class(class).ok_or(SchemaError::InvalidOutcome {
                row,
                value: class,
            })?;

            records.push(LaunchRecord {
                site,
                payload_mass_kg,
                outcome,
                booster_category: booster,
            });
        }
    }

    finish(records)
}

// -- Parquet / Arrow helpers --

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 => Ok(extract_i64(col, row)? as f64),
        DataType::Int32 => Ok(extract_i64(col, row)? as f64),
        other => bail!("Expected numeric column, got {other:?}"),
    }
}

fn extract_i64(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    match col.data_type() {
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row) as i64)
        }
        other => bail!("Expected integer column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new().from_reader(text.as_bytes())
    }

    #[test]
    fn csv_parses_required_columns_and_ignores_extras() {
        let text = "\
Flight Number,Launch Site,Payload Mass (kg),class,Booster Version Category
1,CCAFS LC-40,500.0,1,v1.0
2,VAFB SLC-4E,1500,0,v1.1
";
        let ds = read_csv(&mut csv_reader(text)).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "CCAFS LC-40");
        assert_eq!(ds.records[0].payload_mass_kg, 500.0);
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
        assert_eq!(ds.records[1].booster_category, "v1.1");
        assert_eq!(ds.payload_bounds, (500.0, 1500.0));
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let text = "\
Launch Site,Payload Mass (kg),class
CCAFS LC-40,500.0,1
";
        let err = read_csv(&mut csv_reader(text)).unwrap_err();
        assert!(err.to_string().contains("Booster Version Category"));
    }

    #[test]
    fn csv_malformed_payload_is_an_error() {
        let text = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,heavy,1,v1.0
";
        assert!(read_csv(&mut csv_reader(text)).is_err());
    }

    #[test]
    fn csv_unknown_outcome_class_is_an_error() {
        let text = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,500.0,2,v1.0
";
        let err = read_csv(&mut csv_reader(text)).unwrap_err();
        assert!(err.to_string().contains("not 0 or 1"));
    }

    #[test]
    fn csv_with_no_rows_is_an_error() {
        let text = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        let err = read_csv(&mut csv_reader(text)).unwrap_err();
        assert!(err.to_string().contains("no launch records"));
    }

    #[test]
    fn json_records_parse() {
        let text = r#"[
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 3000.0,
             "class": 1, "Booster Version Category": "FT"},
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 9000,
             "class": 0, "Booster Version Category": "B4"}
        ]"#;
        let ds = parse_json(text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.sites, vec!["KSC LC-39A".to_string()]);
        assert_eq!(ds.records[1].payload_mass_kg, 9000.0);
    }

    #[test]
    fn json_missing_key_is_an_error() {
        let text = r#"[{"Launch Site": "KSC LC-39A", "class": 1,
                        "Booster Version Category": "FT"}]"#;
        let err = parse_json(text).unwrap_err();
        assert!(err.to_string().contains("Row 0"));
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = load_dataset(Path::new("records.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
