use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn project_origin_is_world_center() {
    let px = project(0, LatLon::new(0.0, 0.0));
    assert!(approx(px.x, 128.0));
    assert!(approx(px.y, 128.0));
}

#[test]
fn project_clamps_poles() {
    let north = project(1, LatLon::new(90.0, -180.0));
    assert!(approx(north.x, 0.0));
    assert!(north.y.abs() < 1e-3);
}

#[test]
fn known_tile_for_mumbai_at_zoom_5() {
    let tile = lat_lon_to_tile(5, LatLon::new(19.07, 72.87));
    assert_eq!(tile, TileCoord { z: 5, x: 22, y: 14 });
}

#[test]
fn tiles_covering_is_row_major_and_complete() {
    let bbox = BoundingBox { south: -10.0, west: 60.0, north: 20.0, east: 100.0 };
    let tiles = tiles_covering(&bbox, 3);
    let nw = lat_lon_to_tile(3, LatLon::new(20.0, 60.0));
    let se = lat_lon_to_tile(3, LatLon::new(-10.0, 100.0));
    let expected = ((se.x - nw.x + 1) * (se.y - nw.y + 1)) as usize;
    assert_eq!(tiles.len(), expected);
    assert_eq!(tiles.first().copied(), Some(nw));
    assert_eq!(tiles.last().copied(), Some(se));
    assert!(tiles.windows(2).all(|w| (w[0].y, w[0].x) < (w[1].y, w[1].x)));
}

#[test]
fn tile_url_expands_all_placeholders() {
    let url = tile_url("https://{s}.tile.example.org/{z}/{x}/{y}.png", TileCoord { z: 4, x: 11, y: 7 });
    assert_eq!(url, "https://a.tile.example.org/4/11/7.png");
    let plain = tile_url("/tiles/{z}/{x}/{y}", TileCoord { z: 2, x: 1, y: 2 });
    assert_eq!(plain, "/tiles/2/1/2");
}

#[test]
fn viewport_maps_corners_to_edges() {
    let bbox = BoundingBox { south: -25.0, west: 55.0, north: 25.0, east: 100.0 };
    let vp = Viewport::fit(&bbox, 4);
    let nw = vp.to_screen(LatLon::new(25.0, 55.0));
    let se = vp.to_screen(LatLon::new(-25.0, 100.0));
    assert!(approx(nw.x, 0.0) && approx(nw.y, 0.0));
    assert!(approx(se.x, vp.width) && approx(se.y, vp.height));
    assert!(vp.contains(vp.to_screen(LatLon::new(0.0, 75.0))));
    assert!(!vp.contains(vp.to_screen(LatLon::new(40.0, 75.0))));
}

#[test]
fn tile_offset_places_containing_tile_under_point() {
    let bbox = BoundingBox { south: -25.0, west: 55.0, north: 25.0, east: 100.0 };
    let vp = Viewport::fit(&bbox, 4);
    let p = LatLon::new(10.0, 80.0);
    let tile = lat_lon_to_tile(4, p);
    let off = vp.tile_offset(tile);
    let screen = vp.to_screen(p);
    assert!(screen.x >= off.x && screen.x < off.x + TILE_SIZE);
    assert!(screen.y >= off.y && screen.y < off.y + TILE_SIZE);
}

#[test]
fn km_to_px_grows_with_zoom() {
    let bbox = BoundingBox { south: 0.0, west: 0.0, north: 10.0, east: 10.0 };
    let low = Viewport::fit(&bbox, 3).km_to_px(500.0, 10.0);
    let high = Viewport::fit(&bbox, 4).km_to_px(500.0, 10.0);
    assert!(low > 0.0);
    assert!(approx(high, low * 2.0));
}
