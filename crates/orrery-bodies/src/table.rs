//! The static solar-system table: J2000 osculating elements for planets and
//! dwarf planets, circular-orbit parameters for major moons.
//!
//! Ordering is significant: every satellite's parent appears before it, which
//! lets the evaluator resolve parent positions in a single forward pass.

use orrery_kepler::OrbitalElements;

use crate::body::{BodyKind, CelestialBody, MoonParams, OrbitClass};

fn orbiting(
    class: OrbitClass,
    a_au: f64,
    e: f64,
    i_deg: f64,
    arg_perihelion_deg: f64,
    lon_ascending_deg: f64,
    mean_anomaly_deg: f64,
) -> BodyKind {
    BodyKind::Orbiting {
        elements: OrbitalElements {
            semi_major_axis_au: a_au,
            eccentricity: e,
            inclination_deg: i_deg,
            argument_of_perihelion_deg: arg_perihelion_deg,
            longitude_of_ascending_node_deg: lon_ascending_deg,
            mean_anomaly_deg,
        },
        class,
    }
}

fn satellite(parent: &'static str, a_km: f64, period_days: f64) -> BodyKind {
    BodyKind::Satellite {
        parent,
        params: MoonParams {
            semi_major_axis_km: a_km,
            period_days,
        },
    }
}

/// Build the body table: the Sun, the eight planets, five dwarf planets, and
/// the major moons. Elements are J2000 osculating values.
pub fn solar_system() -> Vec<CelestialBody> {
    use OrbitClass::{DwarfPlanet, Planet};

    let body = |name, kind, radius_km, color, size_scale| CelestialBody {
        name,
        kind,
        radius_km,
        color,
        size_scale,
    };

    vec![
        body("Sun", BodyKind::Star, 696_340.0, [1.0, 0.92, 0.55], 1.0),
        // Planets: argument of perihelion and mean anomaly derived from the
        // J2000 longitude-of-perihelion / mean-longitude tables.
        body(
            "Mercury",
            orbiting(Planet, 0.387_098_93, 0.205_630_69, 7.004_87, 29.124_78, 48.331_67, 174.794_39),
            2_439.7,
            [0.66, 0.62, 0.58],
            1.0,
        ),
        body(
            "Venus",
            orbiting(Planet, 0.723_331_99, 0.006_773_23, 3.394_71, 54.852_29, 76.680_69, 50.446_75),
            6_051.8,
            [0.90, 0.78, 0.55],
            1.0,
        ),
        body(
            "Earth",
            orbiting(Planet, 1.000_000_11, 0.016_710_22, 0.000_05, 114.207_83, -11.260_64, 357.517_16),
            6_371.0,
            [0.35, 0.55, 0.95],
            1.0,
        ),
        body(
            "Mars",
            orbiting(Planet, 1.523_662_31, 0.093_412_33, 1.850_61, 286.462_30, 49.578_54, 19.412_48),
            3_389.5,
            [0.85, 0.45, 0.28],
            1.0,
        ),
        body(
            "Jupiter",
            orbiting(Planet, 5.203_363_01, 0.048_392_66, 1.305_30, 274.197_70, 100.556_15, 19.650_53),
            69_911.0,
            [0.85, 0.72, 0.55],
            1.0,
        ),
        body(
            "Saturn",
            orbiting(Planet, 9.537_070_32, 0.054_150_60, 2.484_46, 338.716_90, 113.715_04, 317.512_38),
            58_232.0,
            [0.90, 0.82, 0.62],
            1.0,
        ),
        body(
            "Uranus",
            orbiting(Planet, 19.191_263_93, 0.047_167_71, 0.769_86, 96.734_36, 74.229_88, 142.267_94),
            25_362.0,
            [0.62, 0.85, 0.88],
            1.0,
        ),
        body(
            "Neptune",
            orbiting(Planet, 30.068_963_48, 0.008_585_87, 1.769_17, 273.249_66, 131.721_69, 259.908_68),
            24_622.0,
            [0.35, 0.45, 0.90],
            1.0,
        ),
        // Dwarf planets, rendered at reduced scale.
        body(
            "Ceres",
            orbiting(DwarfPlanet, 2.767_5, 0.075_8, 10.59, 73.60, 80.33, 95.99),
            469.7,
            [0.60, 0.58, 0.55],
            0.6,
        ),
        body(
            "Pluto",
            orbiting(DwarfPlanet, 39.482, 0.248_8, 17.16, 113.76, 110.30, 14.53),
            1_188.3,
            [0.78, 0.70, 0.62],
            0.6,
        ),
        body(
            "Haumea",
            orbiting(DwarfPlanet, 43.13, 0.195, 28.21, 239.18, 121.90, 217.77),
            816.0,
            [0.85, 0.85, 0.82],
            0.6,
        ),
        body(
            "Makemake",
            orbiting(DwarfPlanet, 45.79, 0.159, 29.01, 297.24, 79.38, 165.51),
            715.0,
            [0.75, 0.55, 0.45],
            0.6,
        ),
        body(
            "Eris",
            orbiting(DwarfPlanet, 67.78, 0.440_7, 44.04, 151.43, 35.88, 204.16),
            1_163.0,
            [0.85, 0.85, 0.88],
            0.6,
        ),
        // Moons. Parents are all listed above. Triton's negative period
        // marks its retrograde orbit.
        body("Moon", satellite("Earth", 384_400.0, 27.321_661), 1_737.4, [0.75, 0.75, 0.75], 0.5),
        body("Io", satellite("Jupiter", 421_700.0, 1.769_138), 1_821.6, [0.92, 0.85, 0.50], 0.5),
        body("Europa", satellite("Jupiter", 671_034.0, 3.551_181), 1_560.8, [0.80, 0.75, 0.65], 0.5),
        body(
            "Ganymede",
            satellite("Jupiter", 1_070_412.0, 7.154_553),
            2_634.1,
            [0.65, 0.62, 0.58],
            0.5,
        ),
        body(
            "Callisto",
            satellite("Jupiter", 1_882_709.0, 16.689_017),
            2_410.3,
            [0.55, 0.50, 0.45],
            0.5,
        ),
        body("Titan", satellite("Saturn", 1_221_870.0, 15.945_421), 2_574.7, [0.90, 0.70, 0.35], 0.5),
        body(
            "Triton",
            satellite("Neptune", 354_759.0, -5.876_854),
            1_353.4,
            [0.70, 0.75, 0.78],
            0.5,
        ),
        body("Charon", satellite("Pluto", 19_591.0, 6.387_230), 606.0, [0.68, 0.65, 0.62], 0.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_precede_satellites() {
        let bodies = solar_system();
        for (index, body) in bodies.iter().enumerate() {
            if let BodyKind::Satellite { parent, .. } = body.kind {
                let parent_index = bodies.iter().position(|b| b.name == parent);
                match parent_index {
                    Some(p) => assert!(p < index, "{} listed before its parent {parent}", body.name),
                    None => panic!("{} references unknown parent {parent}", body.name),
                }
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let bodies = solar_system();
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_sun_is_first_and_only_star() {
        let bodies = solar_system();
        assert!(matches!(bodies[0].kind, BodyKind::Star));
        let star_count = bodies
            .iter()
            .filter(|b| matches!(b.kind, BodyKind::Star))
            .count();
        assert_eq!(star_count, 1);
    }

    #[test]
    fn test_heliocentric_elements_are_bound_orbits() {
        for body in solar_system() {
            if let BodyKind::Orbiting { elements, .. } = body.kind {
                assert!(elements.semi_major_axis_au > 0.0, "{}", body.name);
                assert!(
                    (0.0..1.0).contains(&elements.eccentricity),
                    "{} e={}",
                    body.name,
                    elements.eccentricity
                );
            }
        }
    }

    #[test]
    fn test_triton_is_retrograde() {
        let bodies = solar_system();
        let triton = bodies.iter().find(|b| b.name == "Triton").unwrap();
        match triton.kind {
            BodyKind::Satellite { params, .. } => assert!(params.period_days < 0.0),
            _ => panic!("Triton must be a satellite"),
        }
    }
}
