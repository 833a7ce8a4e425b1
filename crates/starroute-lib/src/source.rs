//! Readers for the catalog and anchor data files.
//!
//! Systems come either as JSON (`[{"name": .., "coords": {"x": .., "y": .., "z": ..}}]`)
//! or as CSV with a `name,x,y,z` header. Anchors are JSON
//! (`[{"name": .., "radius_ly": .., "description": ..}]`).

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::{AnchorRecord, SystemPosition, SystemRecord};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct CsvSystemRow {
    #[serde(alias = "system", alias = "System Name")]
    name: String,
    #[serde(alias = "X")]
    x: Option<f64>,
    #[serde(alias = "Y")]
    y: Option<f64>,
    #[serde(alias = "Z")]
    z: Option<f64>,
}

impl From<CsvSystemRow> for SystemRecord {
    fn from(row: CsvSystemRow) -> Self {
        let coords = match (row.x, row.y, row.z) {
            (Some(x), Some(y), Some(z)) => Some(SystemPosition::new(x, y, z)),
            _ => None,
        };
        SystemRecord {
            name: row.name,
            coords,
        }
    }
}

/// Load system records from a `.json` or `.csv` file.
pub fn load_system_records(path: &Path) -> Result<Vec<SystemRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let records = match extension.as_deref() {
        Some("json") => system_records_from_json(fs::File::open(path)?)?,
        Some("csv") => system_records_from_csv(fs::File::open(path)?)?,
        _ => {
            return Err(Error::UnsupportedCatalogFile {
                path: path.to_path_buf(),
            })
        }
    };

    debug!(path = %path.display(), records = records.len(), "read system records");
    Ok(records)
}

pub fn system_records_from_json<R: Read>(reader: R) -> Result<Vec<SystemRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn system_records_from_csv<R: Read>(reader: R) -> Result<Vec<SystemRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<CsvSystemRow>()
        .map(|row| Ok(row?.into()))
        .collect()
}

/// Load anchor descriptors from a JSON file.
pub fn load_anchor_records(path: &Path) -> Result<Vec<AnchorRecord>> {
    let records = anchor_records_from_json(fs::File::open(path)?)?;
    debug!(path = %path.display(), records = records.len(), "read anchor records");
    Ok(records)
}

pub fn anchor_records_from_json<R: Read>(reader: R) -> Result<Vec<AnchorRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn json_records_allow_missing_coords() {
        let json = r#"[
            {"name": "Colonia", "coords": {"x": -9530.5, "y": -910.28125, "z": 19808.125}},
            {"name": "Unsurveyed"}
        ]"#;
        let records = system_records_from_json(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].coords.unwrap().z, 19808.125);
        assert!(records[1].coords.is_none());
    }

    #[test]
    fn csv_records_trim_and_parse() {
        let csv = "name, x, y, z\n Sol , 0, 0, 0\nBroken,1,,3\n";
        let records = system_records_from_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].name, "Sol");
        assert_eq!(records[0].coords, Some(SystemPosition::new(0.0, 0.0, 0.0)));
        assert!(records[1].coords.is_none());
    }

    #[test]
    fn csv_rejects_non_numeric_coordinates() {
        let csv = "name,x,y,z\nSol,zero,0,0\n";
        assert!(matches!(
            system_records_from_csv(csv.as_bytes()),
            Err(Error::Csv(_))
        ));
    }

    #[test]
    fn anchors_default_optional_fields() {
        let json = r#"[{"name": "Colonia", "radius_ly": 50.0, "description": "Hub"}, {"name": "Ratraii"}]"#;
        let anchors = anchor_records_from_json(json.as_bytes()).unwrap();
        assert_eq!(anchors[0].radius_ly, 50.0);
        assert_eq!(anchors[1].description, "");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("systems.xml");
        fs::File::create(&path)
            .unwrap()
            .write_all(b"<systems/>")
            .unwrap();
        assert!(matches!(
            load_system_records(&path),
            Err(Error::UnsupportedCatalogFile { .. })
        ));
    }
}
