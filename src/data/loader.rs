use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Typed load errors
// ---------------------------------------------------------------------------

/// Failures while loading the launch records file. All of these abort
/// startup; there is no way to run the dashboard without data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed launch records CSV")]
    Csv(#[from] csv::Error),

    #[error("row {row}: outcome class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: u8 },

    #[error("row {row}: payload mass must be non-negative, got {value}")]
    NegativePayload { row: usize, value: f64 },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Raw CSV row under the source file's header names. Columns beyond these
/// four (flight number, booster version, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version: String,
}

/// Load the launch records CSV from disk.
pub fn load_csv(path: &Path) -> Result<LaunchDataset, DatasetError> {
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}

/// Parse launch records from any CSV source. Split out from [`load_csv`]
/// so tests can feed in-memory data.
pub fn load_from_reader<R: Read>(reader: R) -> Result<LaunchDataset, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;

        let outcome = Outcome::from_class(raw.class).ok_or(DatasetError::InvalidOutcome {
            row,
            value: raw.class,
        })?;
        if raw.payload_mass_kg < 0.0 {
            return Err(DatasetError::NegativePayload {
                row,
                value: raw.payload_mass_kg,
            });
        }

        records.push(LaunchRecord {
            site: raw.site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome,
            booster_version: raw.booster_version,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n";

    #[test]
    fn parses_records_and_ignores_extra_columns() {
        let csv = format!(
            "{HEADER}1,CCAFS LC-40,0,500,v1.0\n2,VAFB SLC-4E,1,9600.5,FT\n"
        );
        let ds = load_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "CCAFS LC-40");
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[1].payload_mass_kg, 9600.5);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.booster_versions, vec!["FT", "v1.0"]);
    }

    #[test]
    fn payload_bounds_come_from_the_data() {
        let csv = format!("{HEADER}1,A,1,750,v1.0\n2,B,0,6104,FT\n3,A,1,2500,B4\n");
        let ds = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.payload_bounds(), Some((750.0, 6104.0)));
    }

    #[test]
    fn empty_file_loads_as_empty_dataset() {
        let ds = load_from_reader(HEADER.as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), None);
    }

    #[test]
    fn non_binary_outcome_class_is_rejected() {
        let csv = format!("{HEADER}1,A,2,500,v1.0\n");
        let err = load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidOutcome { row: 0, value: 2 }
        ));
    }

    #[test]
    fn negative_payload_is_rejected() {
        let csv = format!("{HEADER}1,A,1,500,v1.0\n2,B,0,-10,FT\n");
        let err = load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::NegativePayload { row: 1, .. }));
    }

    #[test]
    fn missing_required_column_is_a_csv_error() {
        let csv = "Launch Site,class\nA,1\n";
        let err = load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_csv(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
        assert!(err.to_string().contains("/no/such/file.csv"));
    }
}
