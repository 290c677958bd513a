//! Integration tests for the load-classify-search flow.
//!
//! Exercises the full pipeline the viewer uses: parse a GeoJSON
//! boundary dataset, render the default classification onto a surface,
//! then drive searches against it and check the resulting styles and
//! label overlay.

use choromap::classify::ColorBucket;
use choromap::dataset;
use choromap::search::MapSession;
use choromap::style::{RegionStyle, HIGHLIGHT_YELLOW};
use choromap::surface::MemorySurface;

const COUNTIES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"County": "Nairobi", "Total": 9, "Entities": "Acme Corp, Beta Inc"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[36.0, -2.0], [37.0, -2.0], [37.0, -1.0], [36.0, -1.0], [36.0, -2.0]]]
            }
        },
        {
            "type": "Feature",
            "properties": {"County": "Kisumu", "Total": 0},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[34.0, -0.5], [35.0, -0.5], [35.0, 0.5], [34.0, 0.5], [34.0, -0.5]]]
            }
        },
        {
            "type": "Feature",
            "properties": {"County": "Mombasa", "Total": 3, "Entities": "Beta Inc, Gamma Ltd"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[39.0, -4.2], [39.8, -4.2], [39.8, -3.8], [39.0, -3.8], [39.0, -4.2]]]
            }
        }
    ]
}"#;

fn session() -> (MapSession, MemorySurface) {
    let regions = dataset::from_str(COUNTIES).expect("fixture dataset parses");
    let mut surface = MemorySurface::for_collection(&regions);
    let mut session = MapSession::new(regions);
    session.render_initial(&mut surface);
    (session, surface)
}

#[test]
fn initial_render_classifies_every_region() {
    let (_, surface) = session();
    assert_eq!(
        surface.styles(),
        &[
            RegionStyle::Default(ColorBucket::Dark),
            RegionStyle::Default(ColorBucket::None),
            RegionStyle::Default(ColorBucket::Light),
        ]
    );
    assert!(surface.labels().is_empty());
}

#[test]
fn query_highlights_matching_regions_and_labels_them() {
    let (mut session, mut surface) = session();
    session.apply_search("beta inc", &mut surface);

    // Nairobi and Mombasa both list Beta Inc; Kisumu has no entities.
    assert_eq!(surface.style_of(0), Some(RegionStyle::Highlight));
    assert_eq!(
        surface.style_of(1),
        Some(RegionStyle::Default(ColorBucket::None))
    );
    assert_eq!(surface.style_of(2), Some(RegionStyle::Highlight));

    assert_eq!(surface.style_of(0).unwrap().resolve().fill, HIGHLIGHT_YELLOW);

    let labels: Vec<_> = session.overlay().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(labels, vec!["Nairobi", "Mombasa"]);

    let nairobi = &session.overlay()[0];
    assert!((nairobi.anchor.lon - 36.5).abs() < 1e-9);
    assert!((nairobi.anchor.lat - (-1.5)).abs() < 1e-9);
}

#[test]
fn query_matching_is_case_and_whitespace_insensitive() {
    let (mut session, mut surface) = session();

    session.apply_search(" ACME CORP ", &mut surface);
    assert_eq!(session.match_count(), 1);
    assert_eq!(surface.style_of(0), Some(RegionStyle::Highlight));

    // Substring of an entry is not a match.
    session.apply_search("acme", &mut surface);
    assert_eq!(session.match_count(), 0);
}

#[test]
fn clearing_the_query_restores_the_initial_state() {
    let (mut session, mut surface) = session();
    let initial_styles = surface.styles().to_vec();

    session.apply_search("gamma ltd", &mut surface);
    assert_eq!(session.match_count(), 1);

    session.apply_search("", &mut surface);
    assert_eq!(surface.styles(), initial_styles.as_slice());
    assert!(surface.labels().is_empty());
    assert!(session.overlay().is_empty());
}

#[test]
fn repeated_queries_are_idempotent() {
    let (mut session, mut surface) = session();

    session.apply_search("beta inc", &mut surface);
    let styles = surface.styles().to_vec();
    let labels = surface.labels().to_vec();

    session.apply_search("beta inc", &mut surface);
    assert_eq!(surface.styles(), styles.as_slice());
    assert_eq!(surface.labels(), labels.as_slice());
}

#[test]
fn unmatched_query_reverts_everything_to_defaults() {
    let (mut session, mut surface) = session();
    session.apply_search("beta inc", &mut surface);
    session.apply_search("no such entity", &mut surface);

    assert_eq!(session.match_count(), 0);
    assert!(surface
        .styles()
        .iter()
        .all(|style| !style.is_highlight()));
}

#[test]
fn every_region_always_has_exactly_one_style() {
    let (mut session, mut surface) = session();
    let region_count = session.regions().len();

    for query in ["", "beta inc", "acme", "ACME CORP", "  ", "gamma ltd"] {
        session.apply_search(query, &mut surface);
        assert_eq!(surface.styles().len(), region_count);
    }
}
