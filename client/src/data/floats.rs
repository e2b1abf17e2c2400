//! Hardcoded ARGO floats shown on the map.

use std::sync::LazyLock;

use records::{Float, FloatKind, LatLon, Readings};

fn float(id: &str, kind: FloatKind, at: (f64, f64), readings: (f64, f64, f64), track: &[(f64, f64)]) -> Float {
    Float {
        id: id.to_owned(),
        kind,
        position: LatLon::new(at.0, at.1),
        readings: Readings { temperature_c: readings.0, salinity_psu: readings.1, depth_m: readings.2 },
        trajectory: track.iter().map(|&(lat, lon)| LatLon::new(lat, lon)).collect(),
    }
}

pub static FLOATS: LazyLock<Vec<Float>> = LazyLock::new(|| {
    vec![
        float(
            "2902746",
            FloatKind::Core,
            (15.2, 65.4),
            (28.4, 36.1, 2000.0),
            &[(14.1, 64.2), (14.5, 64.7), (14.9, 65.1)],
        ),
        float(
            "2902801",
            FloatKind::Bgc,
            (12.8, 87.9),
            (29.1, 33.4, 2000.0),
            &[(11.6, 86.8), (12.1, 87.3), (12.5, 87.6)],
        ),
        float(
            "2902755",
            FloatKind::Core,
            (8.1, 73.2),
            (29.6, 35.0, 1950.0),
            &[(7.4, 72.1), (7.7, 72.6), (7.9, 72.9)],
        ),
        float(
            "5906527",
            FloatKind::Deep,
            (-12.3, 80.5),
            (26.2, 34.6, 4000.0),
            &[(-13.0, 79.6), (-12.8, 80.0), (-12.5, 80.3)],
        ),
        float(
            "2902819",
            FloatKind::Bgc,
            (18.6, 62.1),
            (27.8, 36.4, 2000.0),
            &[(17.9, 61.2), (18.2, 61.6), (18.4, 61.9)],
        ),
        float(
            "2902770",
            FloatKind::Core,
            (-4.7, 92.3),
            (29.9, 34.1, 2000.0),
            &[(-5.5, 91.4), (-5.2, 91.8), (-4.9, 92.1)],
        ),
        float(
            "5906540",
            FloatKind::Deep,
            (-20.1, 70.8),
            (24.5, 35.2, 5000.0),
            &[(-20.9, 70.0), (-20.6, 70.3), (-20.3, 70.6)],
        ),
    ]
});
