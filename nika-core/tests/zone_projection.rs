//! End-to-end scenarios for the overlay geometry pipeline: backend zone
//! records through projection to the rectangles, labels and colors the
//! renderer draws.

use nika_core::{
    initial_tab, project_zone, zone_color, zone_fill_color, ImageAnalysis, OverlayState,
    SurfaceSize, TabId, Zone, ZONE_PALETTE,
};

#[test]
fn half_scale_display_maps_zone_exactly() {
    // Image natural size 800x600 displayed at 400x300 (scale 0.5):
    // zone {100, 50, 200, 100} renders at (50, 25) sized 100x50.
    let zone = Zone::new(0, 100.0, 50.0, 200.0, 100.0);
    let natural = SurfaceSize::new(800, 600);
    let display = SurfaceSize::new(400, 300);

    let rect = project_zone(&zone, natural, display).unwrap();

    assert_eq!((rect.x, rect.y), (50.0, 25.0));
    assert_eq!((rect.width, rect.height), (100.0, 50.0));
    assert_eq!(zone.label(), "Zone 1");
    assert_eq!(zone_color(zone.index), ZONE_PALETTE[0]);
}

#[test]
fn sixth_zone_wraps_around_the_palette() {
    // Six zones with a five-color palette: index 5 reuses palette[0].
    let zones: Vec<Zone> = (0..6).map(|i| Zone::new(i, 0.0, 0.0, 10.0, 10.0)).collect();

    assert_eq!(zone_color(zones[5].index), ZONE_PALETTE[0]);
    assert_eq!(zone_fill_color(zones[5].index), format!("{}20", ZONE_PALETTE[0]));
}

#[test]
fn projection_survives_a_resize_sequence() {
    // Transform must be recomputed from current dimensions on every redraw,
    // so two redraws at the same size agree and a resize in between only
    // changes the output through the new dimensions.
    let zone = Zone::new(0, 100.0, 50.0, 200.0, 100.0);
    let natural = SurfaceSize::new(800, 600);

    let before = project_zone(&zone, natural, SurfaceSize::new(400, 300)).unwrap();
    let after_resize = project_zone(&zone, natural, SurfaceSize::new(800, 600)).unwrap();
    let repeated = project_zone(&zone, natural, SurfaceSize::new(800, 600)).unwrap();

    assert_eq!(before.x * 2.0, after_resize.x);
    assert_eq!(before.width * 2.0, after_resize.width);
    assert_eq!(after_resize, repeated);
}

#[test]
fn backend_zone_records_project_like_hand_built_zones() {
    let json = r#"{
        "original_image": "/media/uploads/core_sample.png",
        "zones": [
            {
                "id": "zone_1",
                "name": "Anomaly Zone 1",
                "confidence": 0.9,
                "mineral_type": "Magnetite",
                "bounding_box": {"x": 100, "y": 50, "width": 200, "height": 100}
            }
        ]
    }"#;

    let analysis: ImageAnalysis = serde_json::from_str(json).unwrap();
    let zones = analysis.overlay_zones();

    let rect = project_zone(
        &zones[0],
        SurfaceSize::new(800, 600),
        SurfaceSize::new(400, 300),
    )
    .unwrap();

    assert_eq!((rect.x, rect.y, rect.width, rect.height), (50.0, 25.0, 100.0, 50.0));
}

#[test]
fn unloaded_image_suppresses_projection_until_dimensions_arrive() {
    // Before the image decodes, naturalWidth/naturalHeight are zero and
    // every drawing operation downgrades to a no-op.
    let zone = Zone::new(0, 100.0, 50.0, 200.0, 100.0);

    assert!(project_zone(&zone, SurfaceSize::new(0, 0), SurfaceSize::new(400, 300)).is_none());

    // Once the load event delivers real dimensions, projection resumes.
    assert!(project_zone(&zone, SurfaceSize::new(800, 600), SurfaceSize::new(400, 300)).is_some());
}

#[test]
fn click_reveals_and_page_arrives_on_image_results() {
    // A click while hidden reveals the overlay and never toggles it back,
    // and a page that has image results lands on the image tab.
    let mut state = OverlayState::default();
    assert!(!state.is_visible());

    state = state.revealed();
    assert!(state.is_visible());
    state = state.revealed();
    assert!(state.is_visible());

    assert_eq!(initial_tab(None, true, true), TabId::ImageResults);
}
