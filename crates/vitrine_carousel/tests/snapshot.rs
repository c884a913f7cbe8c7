use vitrine_carousel::{CarouselConfig, CarouselView, ViewSnapshot};

#[test]
fn every_element_id_resolves() {
    let view = CarouselView::new(&CarouselConfig::default()).unwrap();
    let snapshot = view.snapshot();
    for id in ViewSnapshot::element_ids() {
        assert!(snapshot.element_text(&id).is_some(), "{id}");
    }
    assert_eq!(snapshot.element_text("tile.3"), None);
    assert_eq!(snapshot.element_text("footer"), None);
}

#[test]
fn snapshot_reports_static_copy_and_tiles() {
    let view = CarouselView::new(&CarouselConfig::default()).unwrap();
    let snapshot = view.snapshot();

    assert_eq!(snapshot.element_text("badge").as_deref(), Some("Free engraving"));
    assert_eq!(snapshot.element_text("tile.1").as_deref(), Some("Blue sky"));
    assert_eq!(snapshot.element_text("image.0").as_deref(), Some("Rose Gold"));
    assert_eq!(snapshot.product().model, "Sky Blue");
    assert!(snapshot.tiles[1].active);
    assert_eq!(snapshot.tiles[1].indicator_height, 200.0);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut view = CarouselView::new(&CarouselConfig::default()).unwrap();
    view.toggle_theme();
    view.next();

    let json = serde_json::to_value(view.snapshot()).unwrap();
    assert_eq!(json["index"], 2);
    assert_eq!(json["transitioning"], true);
    assert_eq!(json["scheme"], "dark");
    assert_eq!(json["root_classes"][0], "dark");
    assert_eq!(json["text"]["price"], "$564");
    assert_eq!(json["images"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["images"][0]["image_path"], "/img-3.png");
    assert_eq!(json["colors"]["nav-button"], "#0071e3");
}

#[test]
fn configured_colors_pin_snapshot_variables() {
    let config = CarouselConfig::from_toml_str(
        r##"
        [colors]
        accent = "#000000"
        "##,
    )
    .unwrap();
    let mut view = CarouselView::new(&config).unwrap();
    view.toggle_theme();
    for _ in 0..20 {
        view.tick(16.0);
    }

    let snapshot = view.snapshot();
    assert_eq!(snapshot.colors["accent"], "#000000");
    assert_eq!(snapshot.colors["page-bg"], "#1d1d1f");
}
