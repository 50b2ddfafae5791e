//! Edge case and scenario tests
//!
//! These tests walk through the concrete page scenarios: a file upload
//! entry, the planet cluster hiding on scroll, the cursor trail under a
//! long pointer stroke, and malformed configuration.

use folio_core::content::{JOURNEY_CARDS, PLANETS};
use folio_core::planets::{scroll_target, ClusterVisibility, PlanetNav};
use folio_core::timeline::{marker_center_percent, wiggle_path, TIMELINE_WIGGLE};
use folio_core::typewriter::{Flip, FlipCard, Typewriter};
use folio_core::upload::{data_url, FileList};
use folio_core::{CursorTrail, FolioConfig, FolioError, Rect};

// ============================================================================
// Upload Scenarios
// ============================================================================

/// Selecting a 2048-byte "REPORT.PDF" produces one entry with icon, name and size
#[test]
fn test_report_pdf_entry() {
    let mut list = FileList::new();
    list.add_batch([("REPORT.PDF", 2048)]);

    let entry = &list.entries()[0];
    assert_eq!(entry.icon, "📄");
    assert_eq!(entry.name, "REPORT.PDF");
    assert_eq!(entry.size_label, "2 KB");
}

/// A batch keeps selection order and each entry has its own id
#[test]
fn test_batch_order_and_ids() {
    let mut list = FileList::new();
    let ids = list.add_batch([("a.zip", 1), ("b.DOCX", 2048), ("c", 5_000_000)]);

    let icons: Vec<_> = list.entries().iter().map(|f| f.icon.as_str()).collect();
    assert_eq!(icons, ["📦", "📝", "📎"]);
    assert_eq!(list.entries()[2].size_label, "4.77 MB");

    let mut unique = ids.clone();
    unique.dedup();
    assert_eq!(unique.len(), 3);
}

/// Two selections land in the order they were made, minus unreadable files
#[test]
fn test_successive_selections_keep_order() {
    let mut list = FileList::new();
    let first = list.add_readable([("brief.docx", Some(4096)), ("ghost.bin", None)]);
    let second = list.add_readable([("slides.pptx", Some(10)), ("notes.txt", Some(20))]);

    assert_eq!(first.skipped, ["ghost.bin"]);
    assert!(second.skipped.is_empty());
    assert!(first.added[0] < second.added[0]);

    let names: Vec<_> = list.entries().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["brief.docx", "slides.pptx", "notes.txt"]);
}

/// Empty image files still produce a valid data URL
#[test]
fn test_empty_image_data_url() {
    assert_eq!(data_url("blank.gif", &[]), "data:image/gif;base64,");
}

// ============================================================================
// Planet Navigation Scenarios
// ============================================================================

/// Scrolling past half the viewport hides the cluster; scrolling back restores it
#[test]
fn test_cluster_hides_and_restores() {
    let config = FolioConfig::default();
    let viewport = 900.0;

    let states: Vec<_> = [0.0, 300.0, 451.0, 2000.0, 449.0, 0.0]
        .iter()
        .map(|y| ClusterVisibility::for_scroll(*y, viewport, config.cluster_hide_ratio))
        .collect();

    assert_eq!(
        states,
        [
            ClusterVisibility::Shown,
            ClusterVisibility::Shown,
            ClusterVisibility::Hidden,
            ClusterVisibility::Hidden,
            ClusterVisibility::Shown,
            ClusterVisibility::Shown,
        ]
    );
}

/// Clicking a second planet clears the first before marking the second
#[test]
fn test_second_planet_click_clears_first() {
    let mut nav = PlanetNav::new();
    let first = nav.activate(0);
    nav.activate(1);

    assert!(!nav.is_active(0));
    assert!(nav.is_active(1));

    // The first planet's timer firing later must not clear the second
    assert!(!nav.expire(first));
    assert!(nav.is_active(1));
}

/// Every planet targets a section offset by the header allowance
#[test]
fn test_planet_scroll_targets() {
    let config = FolioConfig::default();
    for (i, _planet) in PLANETS.iter().enumerate() {
        let offset_top = 1000.0 * (i as f64 + 1.0);
        assert_eq!(
            scroll_target(offset_top, config.header_offset_px),
            offset_top - 80.0
        );
    }
}

// ============================================================================
// Motion Scenarios
// ============================================================================

/// A long stroke keeps exactly the newest samples and converges the cursor
#[test]
fn test_long_pointer_stroke() {
    let mut trail = CursorTrail::new(1000.0, 800.0, 30);
    for i in 0..200 {
        trail.pointer_moved(i as f64 * 3.0, 400.0);
    }
    assert_eq!(trail.trail().len(), 30);
    assert_eq!(trail.trail().points().next().unwrap().x, 170.0 * 3.0);

    let mut last = trail.frame();
    for _ in 0..120 {
        last = trail.frame();
    }
    assert!((last.cursor.x - 597.0).abs() < 0.01);
    assert!(last.path.unwrap().starts_with("M 510 400 C "));
}

/// The timeline joins four markers with three alternating segments
#[test]
fn test_timeline_four_markers() {
    let container = Rect::new(0.0, 0.0, 200.0, 1000.0);
    let markers = [
        Rect::new(90.0, 90.0, 20.0, 20.0),
        Rect::new(40.0, 390.0, 20.0, 20.0),
        Rect::new(140.0, 590.0, 20.0, 20.0),
        Rect::new(90.0, 890.0, 20.0, 20.0),
    ];
    let points: Vec<_> = markers
        .iter()
        .filter_map(|m| marker_center_percent(m, &container))
        .collect();
    assert_eq!(points.len(), 4);

    let d = wiggle_path(&points, TIMELINE_WIGGLE).unwrap();
    assert_eq!(d.matches(" Q ").count(), 3);
    assert!(d.starts_with("M 50 10"));
}

/// Flipping a card back mid-typing clears the text and stops the old run
#[test]
fn test_flip_back_mid_typing() {
    let card_text = JOURNEY_CARDS[0].description;
    let mut card = FlipCard::new();
    let mut writer = Typewriter::new(card_text);

    let Flip::ToBack { epoch } = card.toggle() else {
        panic!("expected back side");
    };
    for _ in 0..5 {
        assert!(card.is_current(epoch));
        writer.tick();
    }
    assert_eq!(writer.text(), card_text.chars().take(5).collect::<String>());

    assert_eq!(card.toggle(), Flip::ToFront);
    writer.clear();
    assert!(!card.is_current(epoch));
    assert_eq!(writer.text(), "");
}

// ============================================================================
// Configuration
// ============================================================================

/// Unknown fields are ignored, wrong types are rejected
#[test]
fn test_config_tolerance() {
    let config = FolioConfig::from_json(r#"{ "theme": "dark", "star_count": 3 }"#).unwrap();
    assert_eq!(config.star_count, 3);

    let err = FolioConfig::from_json(r#"{ "star_count": "many" }"#).unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
}
