use records::LatLon;

use super::*;
use crate::util::geo::Viewport;

#[test]
fn polyline_ends_at_current_position() {
    let viewport = Viewport::fit(&MAP_BOUNDS, MAP_ZOOM);
    let trail = [LatLon::new(10.0, 60.0), LatLon::new(11.0, 61.0)];
    let current = LatLon::new(12.0, 62.0);
    let points = polyline_points(&viewport, &trail, current);
    let parts: Vec<&str> = points.split(' ').collect();
    assert_eq!(parts.len(), 3);

    let last = viewport.to_screen(current);
    assert_eq!(parts[2], format!("{:.1},{:.1}", last.x, last.y));
}

#[test]
fn polyline_with_empty_trajectory_is_single_point() {
    let viewport = Viewport::fit(&MAP_BOUNDS, MAP_ZOOM);
    let points = polyline_points(&viewport, &[], LatLon::new(0.0, 80.0));
    assert!(!points.contains(' '));
}

#[test]
fn every_static_float_lies_inside_the_map_window() {
    let viewport = Viewport::fit(&MAP_BOUNDS, MAP_ZOOM);
    for f in FLOATS.iter() {
        assert!(viewport.contains(viewport.to_screen(f.position)), "float {} off map", f.id);
    }
}

#[test]
fn every_static_region_centre_lies_inside_the_map_window() {
    let viewport = Viewport::fit(&MAP_BOUNDS, MAP_ZOOM);
    for r in REGIONS.iter() {
        assert!(viewport.contains(viewport.to_screen(r.center)), "region {} off map", r.id);
    }
}

#[test]
fn float_classes_are_distinct_per_kind() {
    let classes: Vec<&str> = FloatKind::ALL.into_iter().map(float_class).collect();
    assert_eq!(classes.len(), 3);
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
}
