//! Hero title letter float.
//!
//! The heading is rendered one element per character. Periodically an
//! interior letter floats up while a neighbouring letter appears to pull
//! on it.

use std::time::Duration;

use rand::Rng;

use crate::schedule::{DelayRange, Schedule};

/// Non-breaking space substituted for spaces so letter spans keep their width
pub const NBSP: char = '\u{00A0}';

/// How long a letter pair stays marked
pub const FLOAT_DURATION: Duration = Duration::from_millis(1_500);

/// 2s lead-in, then one float every 4-8s
pub const LETTER_FLOAT_SCHEDULE: Schedule =
    Schedule::after_lead_in(DelayRange::fixed(2_000), DelayRange::new(4_000, 8_000));

/// Split a title into per-letter glyphs, swapping spaces for [`NBSP`]
pub fn split_title(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| if c == ' ' { NBSP } else { c })
        .collect()
}

fn is_letter(c: char) -> bool {
    !c.is_whitespace()
}

/// Indices (into the full glyph list) of one float animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatPair {
    pub floating: usize,
    pub pulling: usize,
}

impl FloatPair {
    /// CSS class for the glyph at `index`, if it takes part
    pub fn class_for(&self, index: usize) -> Option<&'static str> {
        if index == self.floating {
            Some("floating")
        } else if index == self.pulling {
            Some("pulling")
        } else {
            None
        }
    }
}

/// Pick a floating letter and its neighbour.
///
/// The floating letter is never the first or last non-space glyph, so
/// titles with fewer than three letters never float. The neighbour is the
/// nearest non-space glyph to the left, falling back to the right.
pub fn pick_float_pair<R: Rng + ?Sized>(glyphs: &[char], rng: &mut R) -> Option<FloatPair> {
    let letters: Vec<usize> = glyphs
        .iter()
        .enumerate()
        .filter(|(_, c)| is_letter(**c))
        .map(|(i, _)| i)
        .collect();

    if letters.len() < 3 {
        return None;
    }

    let floating = letters[rng.random_range(1..letters.len() - 1)];

    let left = (0..floating).rev().find(|&i| is_letter(glyphs[i]));
    let pulling = left.or_else(|| (floating + 1..glyphs.len()).find(|&i| is_letter(glyphs[i])))?;

    Some(FloatPair { floating, pulling })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn spaces_become_nbsp() {
        assert_eq!(split_title("Ab c"), vec!['A', 'b', NBSP, 'c']);
    }

    #[test]
    fn short_titles_never_float() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(pick_float_pair(&split_title(""), &mut rng), None);
        assert_eq!(pick_float_pair(&split_title("A"), &mut rng), None);
        assert_eq!(pick_float_pair(&split_title("A B"), &mut rng), None);
    }

    #[test]
    fn three_letters_float_the_middle() {
        let mut rng = SmallRng::seed_from_u64(5);
        let glyphs = split_title("abc");
        for _ in 0..20 {
            let pair = pick_float_pair(&glyphs, &mut rng).unwrap();
            assert_eq!(pair, FloatPair { floating: 1, pulling: 0 });
        }
    }

    #[test]
    fn neighbour_skips_spaces() {
        let mut rng = SmallRng::seed_from_u64(11);
        let glyphs = split_title("ab c d");
        // letters at 0, 1, 3, 5; interior candidates are 1 and 3
        for _ in 0..50 {
            let pair = pick_float_pair(&glyphs, &mut rng).unwrap();
            match pair.floating {
                1 => assert_eq!(pair.pulling, 0),
                3 => assert_eq!(pair.pulling, 1),
                other => panic!("edge letter {other} selected"),
            }
        }
    }

    #[test]
    fn pair_classes() {
        let pair = FloatPair { floating: 4, pulling: 3 };
        assert_eq!(pair.class_for(4), Some("floating"));
        assert_eq!(pair.class_for(3), Some("pulling"));
        assert_eq!(pair.class_for(0), None);
    }
}
