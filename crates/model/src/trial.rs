//! Trial table loading.
//!
//! A trial is a numeric CSV with one row per captured frame. Column names
//! come either from a separate one-row header file or from the first row of
//! the data file. Names are normalized (`"heel X"` becomes `heel_X`) and
//! every column except `Time` is multiplied by a unit scale on load, so
//! millimetre recordings come out in meters.

use std::io::Read;
use std::path::Path;

use gaitkin_common::{GaitkinError, GaitkinResult};

use crate::anatomy::Landmark;
use crate::frame::{MarkerFrame, MarkerSeries};
use crate::point::Point2D;

/// Name of the time base column.
pub const TIME_COLUMN: &str = "Time";

/// Normalize a raw header cell into a column name.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}

/// A parsed, unit-converted trial table.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TrialTable {
    /// Parse a headerless data CSV using the names in a one-row header CSV.
    pub fn from_readers<H: Read, D: Read>(
        header: H,
        data: D,
        unit_scale: f64,
    ) -> GaitkinResult<Self> {
        let mut header_reader = csv_reader(header);
        let columns = match header_reader.records().next() {
            Some(record) => record?.iter().map(normalize_header).collect(),
            None => Vec::new(),
        };
        Self::parse_rows(columns, csv_reader(data), unit_scale)
    }

    /// Parse a data CSV whose first row holds the column names.
    pub fn from_reader_with_header_row<D: Read>(data: D, unit_scale: f64) -> GaitkinResult<Self> {
        let mut reader = csv_reader(data);
        let columns = match reader.records().next() {
            Some(record) => record?.iter().map(normalize_header).collect(),
            None => Vec::new(),
        };
        Self::parse_rows(columns, reader, unit_scale)
    }

    /// Load a trial from disk. Without `header_path`, the first row of the
    /// data file is the header.
    pub fn load(
        data_path: &Path,
        header_path: Option<&Path>,
        unit_scale: f64,
    ) -> GaitkinResult<Self> {
        tracing::debug!(
            data = %data_path.display(),
            header = ?header_path.map(Path::display),
            unit_scale,
            "Loading trial"
        );
        let data = std::fs::File::open(data_path)?;
        let table = match header_path {
            Some(header_path) => {
                let header = std::fs::File::open(header_path)?;
                Self::from_readers(header, data, unit_scale)?
            }
            None => Self::from_reader_with_header_row(data, unit_scale)?,
        };
        tracing::info!(
            rows = table.row_count(),
            columns = table.columns.len(),
            "Loaded trial {}",
            data_path.display()
        );
        Ok(table)
    }

    fn parse_rows<R: Read>(
        columns: Vec<String>,
        mut reader: csv::Reader<R>,
        unit_scale: f64,
    ) -> GaitkinResult<Self> {
        let scales: Vec<f64> = columns
            .iter()
            .map(|name| if name == TIME_COLUMN { 1.0 } else { unit_scale })
            .collect();

        let mut rows = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() != columns.len() {
                return Err(GaitkinError::length_mismatch(columns.len(), record.len()));
            }
            let values = record
                .iter()
                .zip(columns.iter().zip(&scales))
                .map(|(cell, (name, scale))| {
                    cell.parse::<f64>()
                        .map(|v| v * scale)
                        .map_err(|_| GaitkinError::invalid_value(row, name, cell))
                })
                .collect::<GaitkinResult<Vec<f64>>>()?;
            rows.push(values);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> GaitkinResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| GaitkinError::missing_column(name))
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, name: &str) -> GaitkinResult<Vec<f64>> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Extract the time base and the six landmark trajectories.
    ///
    /// Every required column is resolved before any row is read, so a
    /// missing column fails without partial work.
    pub fn to_marker_series(&self) -> GaitkinResult<MarkerSeries> {
        let time = self.column_index(TIME_COLUMN)?;
        let mut marker_columns = [(0usize, 0usize); 6];
        for landmark in Landmark::ALL {
            marker_columns[landmark.index()] = (
                self.column_index(&landmark.x_column())?,
                self.column_index(&landmark.z_column())?,
            );
        }

        let frames = self
            .rows
            .iter()
            .map(|row| {
                let markers = marker_columns.map(|(x, z)| Point2D::new(row[x], row[z]));
                MarkerFrame::new(row[time], markers)
            })
            .collect();

        MarkerSeries::new(frames)
    }
}

/// Load a trial straight into a marker series.
pub fn load_trial(
    data_path: &Path,
    header_path: Option<&Path>,
    unit_scale: f64,
) -> GaitkinResult<MarkerSeries> {
    TrialTable::load(data_path, header_path, unit_scale)?.to_marker_series()
}

fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Time,il_crest X,il_crest Z,grt_troc X,grt_troc Z,lat_con X,lat_con Z,\
                          lat_mall X,lat_mall Z,heel X,heel Z,5th_mtar X,5th_mtar Z\n";

    const DATA: &str = "0.00,-1063,955.7,-1113,823.9,-1254,433.8,-1523.84,178.9,-1580,60,-1450,40\n\
                        0.01,-1060,955.0,-1110,823.0,-1250,433.0,-1520.00,178.0,-1575,50,-1445,40\n";

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" heel X "), "heel_X");
        assert_eq!(normalize_header("Time"), "Time");
    }

    #[test]
    fn test_from_readers_scales_all_but_time() {
        let table = TrialTable::from_readers(HEADER.as_bytes(), DATA.as_bytes(), 0.001).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.columns()[1], "il_crest_X");
        assert_eq!(table.column("Time").unwrap(), vec![0.0, 0.01]);
        let heel_z = table.column("heel_Z").unwrap();
        assert!((heel_z[0] - 0.06).abs() < 1e-12);
        assert!((heel_z[1] - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_to_marker_series() {
        let series = TrialTable::from_readers(HEADER.as_bytes(), DATA.as_bytes(), 0.001)
            .unwrap()
            .to_marker_series()
            .unwrap();
        assert_eq!(series.len(), 2);
        let crest = series.frames()[0].marker(Landmark::IliacCrest);
        assert!((crest.x + 1.063).abs() < 1e-12);
        assert!((crest.y - 0.9557).abs() < 1e-12);
    }

    #[test]
    fn test_header_row_in_data_file() {
        let combined = format!("{HEADER}{DATA}");
        let table = TrialTable::from_reader_with_header_row(combined.as_bytes(), 1.0).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("heel_Z").unwrap(), vec![60.0, 50.0]);
    }

    #[test]
    fn test_missing_landmark_column() {
        let header = "Time,il_crest X,il_crest Z\n";
        let data = "0.0,1,2\n";
        let err = TrialTable::from_readers(header.as_bytes(), data.as_bytes(), 1.0)
            .unwrap()
            .to_marker_series()
            .unwrap_err();
        assert!(matches!(err, GaitkinError::MissingColumn { column } if column == "grt_troc_X"));
    }

    #[test]
    fn test_missing_time_column() {
        let header = HEADER.replacen("Time", "Frame", 1);
        let err = TrialTable::from_readers(header.as_bytes(), DATA.as_bytes(), 1.0)
            .unwrap()
            .to_marker_series()
            .unwrap_err();
        assert!(matches!(err, GaitkinError::MissingColumn { column } if column == "Time"));
    }

    #[test]
    fn test_invalid_cell() {
        let data = DATA.replacen("955.7", "n/a", 1);
        let err = TrialTable::from_readers(HEADER.as_bytes(), data.as_bytes(), 1.0).unwrap_err();
        assert!(matches!(
            err,
            GaitkinError::InvalidValue { row: 0, ref column, .. } if column == "il_crest_Z"
        ));
    }

    #[test]
    fn test_row_width_mismatch() {
        let header = "Time,heel X\n";
        let data = "0.0,1.0,2.0\n";
        let err = TrialTable::from_readers(header.as_bytes(), data.as_bytes(), 1.0).unwrap_err();
        assert!(matches!(
            err,
            GaitkinError::LengthMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = std::env::temp_dir().join("gaitkin_test_trial_load");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let header_path = dir.join("headers.csv");
        let data_path = dir.join("data.csv");
        std::fs::write(&header_path, HEADER).unwrap();
        std::fs::write(&data_path, DATA).unwrap();

        let series = load_trial(&data_path, Some(&header_path), 0.001).unwrap();
        assert_eq!(series.len(), 2);

        std::fs::remove_dir_all(&dir).ok();
    }
}
