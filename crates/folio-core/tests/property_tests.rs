//! Property-based tests for page behavior invariants
//!
//! Uses proptest to check the size format, icon lookup, file list, trail
//! buffer, planet navigation, letter float and scroll reveal rules.

use folio_core::geometry::{Point, Rect};
use folio_core::letters::{pick_float_pair, split_title};
use folio_core::planets::PlanetNav;
use folio_core::reveal::{ClassChange, RevealOptions};
use folio_core::trail::TrailBuffer;
use folio_core::upload::{file_icon, format_file_size, FileList, DEFAULT_FILE_ICON, FILE_ICONS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// File stems without dots
fn stem_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_ -]{1,24}").expect("valid regex")
}

/// One of the mapped extensions
fn known_extension_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(FILE_ICONS.iter().map(|(ext, _)| *ext).collect::<Vec<_>>())
}

/// Randomly upper/lower-case each character
fn scramble_case(s: &str, mask: u64) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask >> (i % 64) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Split "1.5 KB" into (1.5, unit index)
fn parse_size(label: &str) -> (f64, usize) {
    let (value, unit) = label.split_once(' ').expect("value and unit");
    let scale = ["Bytes", "KB", "MB", "GB"]
        .iter()
        .position(|u| *u == unit)
        .expect("known unit");
    (value.parse().expect("numeric value"), scale)
}

#[derive(Debug, Clone)]
enum NavOp {
    Click(usize),
    ExpireLatest,
    ExpireOldest,
}

fn nav_ops_strategy() -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..5usize).prop_map(NavOp::Click),
            1 => Just(NavOp::ExpireLatest),
            1 => Just(NavOp::ExpireOldest),
        ],
        0..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Anything under one KiB is reported in bytes
    #[test]
    fn sub_kilobyte_sizes_are_bytes(bytes in 1u64..1024) {
        let label = format_file_size(bytes);
        prop_assert!(label.ends_with(" Bytes"));
        prop_assert_eq!(label, format!("{} Bytes", bytes));
    }

    /// Larger byte counts never produce a smaller label
    #[test]
    fn size_format_is_monotonic(a in 1u64..(1u64 << 42), b in 1u64..(1u64 << 42)) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (lo_value, lo_scale) = parse_size(&format_file_size(lo));
        let (hi_value, hi_scale) = parse_size(&format_file_size(hi));

        prop_assert!(lo_scale <= hi_scale);
        if lo_scale == hi_scale {
            prop_assert!(lo_value <= hi_value);
        }
    }

    /// Extension lookup ignores case
    #[test]
    fn icon_lookup_ignores_case(
        stem in stem_strategy(),
        ext in known_extension_strategy(),
        mask in any::<u64>(),
    ) {
        let lower = format!("{}.{}", stem, ext);
        let mixed = format!("{}.{}", stem, scramble_case(ext, mask));
        prop_assert_eq!(file_icon(&lower), file_icon(&mixed));
        prop_assert_ne!(file_icon(&lower), DEFAULT_FILE_ICON);
    }

    /// Names without a dot always get the default glyph
    #[test]
    fn names_without_extension_use_default(stem in stem_strategy()) {
        prop_assert_eq!(file_icon(&stem), DEFAULT_FILE_ICON);
    }

    /// Removing one entry leaves every sibling in order
    #[test]
    fn removal_keeps_siblings(
        sizes in prop::collection::vec(0u64..10_000_000, 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut list = FileList::new();
        let ids = list.add_batch(sizes.iter().enumerate().map(|(i, s)| (format!("f{i}.txt"), *s)));
        let target = ids[pick.index(ids.len())];

        let before: Vec<_> = list.entries().iter().filter(|f| f.id != target).cloned().collect();
        let removed = list.remove(target);

        prop_assert!(removed.is_some());
        prop_assert_eq!(list.entries(), before.as_slice());
    }

    /// The trail keeps at most `capacity` points and evicts oldest first
    #[test]
    fn trail_is_bounded_fifo(
        xs in prop::collection::vec(-2000.0f64..2000.0, 0..100),
        capacity in 2usize..40,
    ) {
        let mut buf = TrailBuffer::new(capacity);
        for (i, x) in xs.iter().enumerate() {
            buf.push(Point::new(*x, i as f64));
            prop_assert!(buf.len() <= capacity);
        }

        let kept: Vec<f64> = buf.points().map(|p| p.x).collect();
        let start = xs.len().saturating_sub(capacity);
        prop_assert_eq!(kept, xs[start..].to_vec());
    }

    /// At most one planet is active, and it is the last one clicked
    #[test]
    fn single_active_planet(ops in nav_ops_strategy()) {
        let mut nav = PlanetNav::new();
        let mut activations = Vec::new();

        for op in ops {
            match op {
                NavOp::Click(planet) => {
                    activations.push(nav.activate(planet));
                    prop_assert_eq!(nav.active(), Some(planet));
                }
                NavOp::ExpireLatest => {
                    if let Some(last) = activations.last() {
                        nav.expire(*last);
                        prop_assert_eq!(nav.active(), None);
                    }
                }
                NavOp::ExpireOldest => {
                    if activations.len() > 1 {
                        let current = nav.active();
                        nav.expire(activations[0]);
                        prop_assert_eq!(nav.active(), current);
                    }
                }
            }
            let marked = (0..5).filter(|p| nav.is_active(*p)).count();
            prop_assert!(marked <= 1);
        }
    }

    /// The floating letter is never the first or last letter
    #[test]
    fn float_skips_edge_letters(title in "[a-zA-Z ]{0,24}", seed in any::<u64>()) {
        let glyphs = split_title(&title);
        let letters: Vec<usize> = glyphs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(i, _)| i)
            .collect();

        let mut rng = SmallRng::seed_from_u64(seed);
        match pick_float_pair(&glyphs, &mut rng) {
            Some(pair) => {
                prop_assert!(letters.len() >= 3);
                prop_assert_ne!(Some(&pair.floating), letters.first());
                prop_assert_ne!(Some(&pair.floating), letters.last());
                prop_assert!(!glyphs[pair.pulling].is_whitespace());
                prop_assert_ne!(pair.pulling, pair.floating);
            }
            None => prop_assert!(letters.len() < 3),
        }
    }

    /// The class follows the threshold as an element scrolls in and back out
    #[test]
    fn reveal_tracks_scroll_both_ways(
        height in 10.0f64..600.0,
        path in prop::collection::vec(-1500.0f64..1500.0, 1..30),
    ) {
        let options = RevealOptions::default();
        let region = options.reveal_region(1280.0, 800.0);
        let mut has_class = false;

        for top in path {
            let rect = Rect::new(100.0, top, 300.0, height);
            let revealed = options.is_revealed(&rect, &region);
            match ClassChange::for_intersection(revealed) {
                ClassChange::Add => has_class = true,
                ClassChange::Remove => has_class = false,
            }
            prop_assert_eq!(has_class, revealed);
        }
    }
}
