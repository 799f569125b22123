//! Fixed-width astorb.dat parsing and binary conversion.
//!
//! The astorb format is one 267-character line per asteroid with the six
//! J2000 orbital elements at fixed column ranges. The converter packs them
//! into the little-endian binary layout of [`crate::AsteroidCatalog`].

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use orrery_kepler::OrbitalElements;

use crate::error::CatalogError;

/// Character count of a valid astorb line.
pub const ASTORB_LINE_LEN: usize = 267;

// Column ranges of the six elements (degrees, degrees, degrees, degrees,
// unitless, AU).
const MEAN_ANOMALY: (usize, usize) = (115, 125);
const ARG_PERIHELION: (usize, usize) = (126, 136);
const LON_ASCENDING: (usize, usize) = (137, 147);
const INCLINATION: (usize, usize) = (148, 157);
const ECCENTRICITY: (usize, usize) = (158, 168);
const SEMI_MAJOR_AXIS: (usize, usize) = (169, 181);

fn field(line: &str, range: (usize, usize)) -> Option<f64> {
    line.get(range.0..range.1)?.trim().parse().ok()
}

/// Parse one astorb line into orbital elements.
///
/// Returns `None` for lines of the wrong length or with unparseable fields;
/// the converter skips such lines rather than failing the whole file.
pub fn parse_astorb_line(line: &str) -> Option<OrbitalElements> {
    if line.len() != ASTORB_LINE_LEN {
        return None;
    }
    Some(OrbitalElements {
        mean_anomaly_deg: field(line, MEAN_ANOMALY)?,
        argument_of_perihelion_deg: field(line, ARG_PERIHELION)?,
        longitude_of_ascending_node_deg: field(line, LON_ASCENDING)?,
        inclination_deg: field(line, INCLINATION)?,
        eccentricity: field(line, ECCENTRICITY)?,
        semi_major_axis_au: field(line, SEMI_MAJOR_AXIS)?,
    })
}

/// Outcome of a text-to-binary conversion.
#[derive(Clone, Copy, Debug)]
pub struct ConvertStats {
    pub converted: usize,
    pub skipped: usize,
    pub average_eccentricity: f64,
}

/// Convert a fixed-width astorb text catalog into the packed binary format.
pub fn convert_dat_to_bin(input: &Path, output: &Path) -> Result<ConvertStats, CatalogError> {
    let reader = BufReader::new(File::open(input).map_err(|source| CatalogError::Open {
        path: input.to_path_buf(),
        source,
    })?);
    let mut writer =
        BufWriter::new(File::create(output).map_err(|source| CatalogError::Write {
            path: output.to_path_buf(),
            source,
        })?);

    let mut converted = 0usize;
    let mut skipped = 0usize;
    let mut total_eccentricity = 0.0f64;

    for (line_number, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CatalogError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        let Some(elements) = parse_astorb_line(&line) else {
            warn!(line = line_number + 1, "skipping unparseable astorb line");
            skipped += 1;
            continue;
        };

        // Binary record order: M, w, node, i, e, a.
        for value in [
            elements.mean_anomaly_deg,
            elements.argument_of_perihelion_deg,
            elements.longitude_of_ascending_node_deg,
            elements.inclination_deg,
            elements.eccentricity,
            elements.semi_major_axis_au,
        ] {
            writer
                .write_all(&(value as f32).to_le_bytes())
                .map_err(|source| CatalogError::Write {
                    path: output.to_path_buf(),
                    source,
                })?;
        }
        total_eccentricity += elements.eccentricity;
        converted += 1;
    }

    writer.flush().map_err(|source| CatalogError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let average_eccentricity = if converted > 0 {
        total_eccentricity / converted as f64
    } else {
        0.0
    };
    info!(converted, skipped, average_eccentricity, "converted astorb catalog");

    Ok(ConvertStats {
        converted,
        skipped,
        average_eccentricity,
    })
}
