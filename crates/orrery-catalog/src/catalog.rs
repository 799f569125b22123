//! The packed binary catalog: six little-endian f32s per asteroid.

use orrery_kepler::OrbitalElements;

/// Floats per record, in the fixed order {mean anomaly, argument of
/// perihelion, longitude of ascending node, inclination, eccentricity,
/// semimajor axis}.
pub const FLOATS_PER_ASTEROID: usize = 6;

/// Bytes per record.
pub const RECORD_BYTES: usize = FLOATS_PER_ASTEROID * 4;

/// An immutable packed buffer of asteroid orbital elements.
///
/// Loaded once, never mutated; per-frame rendering re-interprets the same
/// buffer at multiple sample times through a shader time uniform rather than
/// re-uploading data, which keeps rendering O(1) in asteroid count.
pub struct AsteroidCatalog {
    floats: Vec<f32>,
}

impl AsteroidCatalog {
    /// Interpret a byte payload as packed little-endian records.
    ///
    /// A byte count that is not a whole number of records silently truncates
    /// the partial tail; there is no per-record validation.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let usable = bytes.len() - bytes.len() % RECORD_BYTES;
        let floats = bytes[..usable]
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Self { floats }
    }

    /// Number of asteroids.
    pub fn len(&self) -> usize {
        self.floats.len() / FLOATS_PER_ASTEROID
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }

    /// The orbital elements of record `index`, widened to f64 for solving.
    pub fn element(&self, index: usize) -> OrbitalElements {
        let record = &self.floats[index * FLOATS_PER_ASTEROID..(index + 1) * FLOATS_PER_ASTEROID];
        OrbitalElements {
            mean_anomaly_deg: f64::from(record[0]),
            argument_of_perihelion_deg: f64::from(record[1]),
            longitude_of_ascending_node_deg: f64::from(record[2]),
            inclination_deg: f64::from(record[3]),
            eccentricity: f64::from(record[4]),
            semi_major_axis_au: f64::from(record[5]),
        }
    }

    /// The raw packed floats.
    pub fn as_floats(&self) -> &[f32] {
        &self.floats
    }

    /// The packed buffer as bytes, ready for vertex-buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.floats)
    }
}
