// src/output.rs
//! Record layout and JSON export for the slide visualizations.
//!
//! Records follow a column-table layout: every record carries every column,
//! and columns that do not apply to a record are written as `null`.

use crate::error::{SdeError, SdeResult};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Path data in a record: a flat series or one row per grid point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Points {
    Series(Vec<f64>),
    Matrix(Vec<Vec<f64>>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub slide: u8,
    pub t: Option<f64>,
    #[serde(rename = "Xt")]
    pub xt: Option<f64>,
    pub jump: Option<f64>,
    pub sample: Option<usize>,
    pub x0: Option<f64>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub sigma: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "T")]
    pub horizon: Option<f64>,
    pub points: Option<Points>,
    pub jumps: Option<Vec<f64>>,
    pub times: Option<Vec<f64>>,
    pub version: Option<String>,
    pub epsilon: Option<usize>,
}

impl Record {
    pub fn new(slide: u8) -> Self {
        Record {
            slide,
            ..Default::default()
        }
    }

    /// One record per grid point: `t`, `Xt` and `jump` from the first coordinate.
    pub fn time_steps(
        template: &Record,
        times: &[f64],
        values: &[f64],
        jumps: &[f64],
    ) -> Vec<Record> {
        times
            .iter()
            .zip(values)
            .zip(jumps)
            .map(|((&t, &x), &j)| Record {
                t: Some(t),
                xt: Some(x),
                jump: Some(j),
                ..template.clone()
            })
            .collect()
    }
}

/// Run metadata written next to the record file.
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub generated_at: String,
    pub crate_version: String,
    pub slides: Vec<u8>,
    pub record_count: usize,
    pub seeds: Vec<u64>,
}

impl RunManifest {
    pub fn new(slides: Vec<u8>, record_count: usize, seeds: Vec<u64>) -> Self {
        RunManifest {
            generated_at: chrono::Utc::now().to_rfc3339(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            slides,
            record_count,
            seeds,
        }
    }
}

fn output_error(path: &Path, reason: impl ToString) -> SdeError {
    SdeError::OutputError {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Serialize `value` to a sibling temporary file, then rename it over `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> SdeResult<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let file = File::create(&tmp).map_err(|e| output_error(&tmp, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(|e| output_error(&tmp, e))?;
    writer.flush().map_err(|e| output_error(&tmp, e))?;
    drop(writer);

    fs::rename(&tmp, path).map_err(|e| output_error(path, e))?;
    debug!(path = %path.display(), "wrote json");
    Ok(())
}

pub fn write_records_json(path: &Path, records: &[Record]) -> SdeResult<()> {
    write_json(path, records)?;
    info!(path = %path.display(), records = records.len(), "exported records");
    Ok(())
}

/// `<out>.manifest.json` beside the record file.
pub fn manifest_path(out: &Path) -> PathBuf {
    let mut name = out.as_os_str().to_owned();
    name.push(".manifest.json");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_record_has_every_column() {
        let record = Record {
            name: Some("poisson".to_string()),
            horizon: Some(5.0),
            points: Some(Points::Matrix(vec![vec![0.0], vec![1.0]])),
            ..Record::new(3)
        };
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 17);
        assert_eq!(obj["slide"], Value::from(3));
        assert_eq!(obj["T"], Value::from(5.0));
        assert!(obj["Xt"].is_null());
        assert!(obj["type"].is_null());
        assert_eq!(obj["points"], serde_json::json!([[0.0], [1.0]]));
    }

    #[test]
    fn test_time_step_records() {
        let template = Record {
            sample: Some(2),
            kind: Some("ball".to_string()),
            ..Record::new(2)
        };
        let rows = Record::time_steps(&template, &[0.0, 0.5], &[1.0, 1.5], &[0.0, 0.25]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].t, Some(0.5));
        assert_eq!(rows[1].xt, Some(1.5));
        assert_eq!(rows[1].jump, Some(0.25));
        assert_eq!(rows[1].kind.as_deref(), Some("ball"));
    }

    #[test]
    fn test_write_records_json() {
        let dir = std::env::temp_dir().join(format!("jump-sde-out-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("data.json");

        let records = vec![Record {
            version: Some("P".to_string()),
            points: Some(Points::Series(vec![0.1, 0.2])),
            ..Record::new(4)
        }];
        write_records_json(&path, &records).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["version"], Value::from("P"));
        assert_eq!(parsed[0]["points"], serde_json::json!([0.1, 0.2]));
        assert!(!dir.join("data.json.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_manifest_path() {
        assert_eq!(
            manifest_path(Path::new("out/data.json")),
            PathBuf::from("out/data.json.manifest.json")
        );
    }
}
