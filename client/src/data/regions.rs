//! Hardcoded regions with economic and fishing-zone metadata.

use std::sync::LazyLock;

use records::{ImpactLevel, LatLon, Region};

fn region(id: &str, name: &str, center: (f64, f64), radius_km: f64, impact: ImpactLevel, value: f64, fishing: bool) -> Region {
    Region {
        id: id.to_owned(),
        name: name.to_owned(),
        center: LatLon::new(center.0, center.1),
        radius_km,
        impact,
        economic_value_musd: value,
        fishing_zone: fishing,
    }
}

pub static REGIONS: LazyLock<Vec<Region>> = LazyLock::new(|| {
    vec![
        region("arabian-sea", "Arabian Sea upwelling", (14.0, 63.0), 600.0, ImpactLevel::High, 2400.0, true),
        region("bay-of-bengal", "Bay of Bengal shelf", (15.5, 88.0), 500.0, ImpactLevel::High, 1850.0, true),
        region("lakshadweep", "Lakshadweep Sea", (10.0, 72.5), 300.0, ImpactLevel::Medium, 420.0, true),
        region("andaman", "Andaman Sea", (11.0, 96.0), 350.0, ImpactLevel::Medium, 610.0, false),
        region("sri-lanka-dome", "Sri Lanka Dome", (8.5, 84.0), 250.0, ImpactLevel::Medium, 280.0, true),
        region("central-indian", "Central Indian Basin", (-12.0, 78.0), 800.0, ImpactLevel::Low, 90.0, false),
    ]
});
