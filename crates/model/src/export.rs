//! Kinematics CSV export.
//!
//! Writes the augmented series with one header row. Column names follow the
//! trial file convention (`heel_Z`, `knee_angle`, `knee_velocity`, ...).

use std::io::Write;
use std::path::Path;

use gaitkin_common::GaitkinResult;

use crate::anatomy::{Joint, Landmark, Segment};
use crate::kinematics::KinematicSeries;
use crate::trial::TIME_COLUMN;

/// Header row for an exported series.
pub fn kinematics_columns(series: &KinematicSeries) -> Vec<String> {
    let mut columns = vec![TIME_COLUMN.to_string()];
    for landmark in Landmark::ALL {
        columns.push(landmark.x_column());
        columns.push(landmark.z_column());
    }
    for segment in Segment::ALL {
        columns.push(format!("{segment}_angle"));
    }
    for joint in Joint::ALL {
        columns.push(format!("{joint}_angle"));
    }
    for joint in series.joints() {
        columns.push(format!("{joint}_velocity"));
    }
    columns.push("heel_velo".to_string());
    columns.push("heel_accel".to_string());
    columns
}

/// Write the series as CSV to any writer.
pub fn write_kinematics_csv<W: Write>(series: &KinematicSeries, writer: W) -> GaitkinResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(kinematics_columns(series))?;

    for frame in series.frames() {
        let mut record = vec![frame.time_secs()];
        for point in frame.markers.markers() {
            record.push(point.x);
            record.push(point.y);
        }
        record.extend(Segment::ALL.map(|s| frame.segment_angles.get(s)));
        record.extend(Joint::ALL.map(|j| frame.joint_angles.get(j)));
        record.extend(
            series
                .joints()
                .iter()
                .map(|&j| frame.joint_velocities.get(j).unwrap_or(f64::NAN)),
        );
        record.push(frame.heel_velocity);
        record.push(frame.heel_acceleration);

        csv.write_record(record.iter().map(f64::to_string))?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the series to a CSV file.
pub fn save_kinematics_csv(series: &KinematicSeries, path: &Path) -> GaitkinResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_kinematics_csv(series, std::io::BufWriter::new(file))?;
    tracing::info!(frames = series.len(), "Wrote kinematics to {}", path.display());
    Ok(())
}
