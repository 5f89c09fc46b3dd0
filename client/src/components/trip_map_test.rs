use std::collections::HashSet;

use tripmap::tiles::TileSource;
use tripmap::viewport::MapView;

use super::*;

#[test]
fn container_style_uses_size() {
    let style = container_style(MapSize::new(640.0, 480.0));
    assert!(style.contains("width: 640px"));
    assert!(style.contains("height: 480px"));
    assert!(style.contains("touch-action: none"));
}

#[test]
fn dragging_right_and_down_moves_view_up_and_left() {
    let offset = drag_offset(Point::new(100.0, 100.0), Point::new(130.0, 90.0));
    assert_eq!(offset, Point::new(-30.0, 10.0));
}

#[test]
fn drag_offset_pans_model_so_content_follows_pointer() {
    let size = MapSize::default();
    let places = vec![Place {
        city: "manali".to_owned(),
        place_name: "Old Manali".to_owned(),
        category: String::new(),
        description: String::new(),
        image: String::new(),
        rating: 0.0,
        lat: None,
        lng: None,
    }];
    let placed = layout_builtin(&places);
    let mut map = MapModel::new(size);
    map.sync(&placed);
    let before = map.scene(&placed, &HashSet::new()).markers[0].anchor;
    map.pan_by(drag_offset(Point::new(200.0, 200.0), Point::new(260.0, 170.0)));
    let after = map.scene(&placed, &HashSet::new()).markers[0].anchor;
    assert!((after.x - (before.x + 60.0)).abs() < 1e-6);
    assert!((after.y - (before.y - 30.0)).abs() < 1e-6);
}

#[test]
fn box_style_positions_top_left() {
    let style = box_style(Point::new(12.5, -34.0), (25.0, 41.0));
    assert_eq!(style, "position: absolute; left: 12.5px; top: -34.0px; width: 25px; height: 41px;");
}

#[test]
fn zoom_label_reads_scene_zoom() {
    let scene = MapScene::compose(
        MapView::fallback(),
        MapSize::default(),
        &TileSource::default(),
        &[],
        &HashSet::new(),
    );
    assert_eq!(zoom_label(Some(&scene)), format!("z{}", MapView::fallback().zoom));
    assert_eq!(zoom_label(None), "");
}
