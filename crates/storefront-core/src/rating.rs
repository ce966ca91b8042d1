//! # Rating Module
//!
//! Turns a raw review score into a star row and a numeric label.
//!
//! The two outputs are rounded independently from the same raw score and may
//! disagree near boundaries:
//!
//! ```text
//!   rating   stars (nearest whole)   label (one decimal)
//!   ──────   ─────────────────────   ───────────────────
//!   4.5      ★★★★★  (5)              (4.5)
//!   3.456    ★★★    (3)              (3.5)
//!   0.0             (0)              (0.0)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest star count a rating can display.
pub const MAX_STARS: u8 = 5;

/// Glyph repeated once per star.
pub const STAR_GLYPH: char = '★';

/// Derived rating values for one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RatingDisplay {
    /// Whole stars to draw, 0 to [`MAX_STARS`].
    pub star_count: u8,
    /// The score in tenths, rounded half up (3.456 → 35).
    pub tenths: i64,
}

impl RatingDisplay {
    /// Derives both rating outputs from a raw score.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::rating::RatingDisplay;
    ///
    /// let rating = RatingDisplay::derive(3.456);
    /// assert_eq!(rating.star_count, 3);
    /// assert_eq!(rating.label(), "(3.5)");
    /// ```
    pub fn derive(rating: f64) -> Self {
        RatingDisplay {
            star_count: star_count(rating),
            tenths: round_to_tenths(rating),
        }
    }

    /// The star row, empty for a zero count.
    pub fn star_glyphs(&self) -> String {
        std::iter::repeat(STAR_GLYPH)
            .take(self.star_count as usize)
            .collect()
    }

    /// The numeric label, e.g. `"(4.5)"`.
    pub fn label(&self) -> String {
        let sign = if self.tenths < 0 { "-" } else { "" };
        let abs = self.tenths.abs();
        format!("({}{}.{})", sign, abs / 10, abs % 10)
    }
}

fn star_count(rating: f64) -> u8 {
    if !rating.is_finite() {
        return 0;
    }
    rating.clamp(0.0, MAX_STARS as f64).round() as u8
}

fn round_to_tenths(rating: f64) -> i64 {
    if !rating.is_finite() {
        return 0;
    }
    (rating * 10.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rounds_up_to_five_stars() {
        let rating = RatingDisplay::derive(4.5);
        assert_eq!(rating.star_count, 5);
        assert_eq!(rating.star_glyphs(), "★★★★★");
        assert_eq!(rating.label(), "(4.5)");
    }

    #[test]
    fn test_rounds_down() {
        let rating = RatingDisplay::derive(3.2);
        assert_eq!(rating.star_count, 3);
        assert_eq!(rating.star_glyphs(), "★★★");
        assert_eq!(rating.label(), "(3.2)");
    }

    #[test]
    fn test_zero_rating_has_no_stars() {
        let rating = RatingDisplay::derive(0.0);
        assert_eq!(rating.star_count, 0);
        assert_eq!(rating.star_glyphs(), "");
        assert_eq!(rating.label(), "(0.0)");
    }

    #[test]
    fn test_star_count_and_label_round_independently() {
        let rating = RatingDisplay::derive(3.456);
        assert_eq!(rating.star_count, 3);
        assert_eq!(rating.label(), "(3.5)");

        // Label rounds up to x.5 but stars stay at the lower whole number.
        let rating = RatingDisplay::derive(2.46);
        assert_eq!(rating.star_count, 2);
        assert_eq!(rating.label(), "(2.5)");
    }

    #[test]
    fn test_whole_numbers_get_trailing_zero() {
        assert_eq!(RatingDisplay::derive(5.0).label(), "(5.0)");
        assert_eq!(RatingDisplay::derive(4.96).label(), "(5.0)");
    }

    #[test]
    fn test_out_of_range_clamps_stars_only() {
        let rating = RatingDisplay::derive(7.25);
        assert_eq!(rating.star_count, MAX_STARS);
        assert_eq!(rating.label(), "(7.3)");

        let rating = RatingDisplay::derive(-1.0);
        assert_eq!(rating.star_count, 0);
        assert_eq!(rating.label(), "(-1.0)");

        let rating = RatingDisplay::derive(f64::NAN);
        assert_eq!(rating.star_count, 0);
        assert_eq!(rating.label(), "(0.0)");
    }
}
