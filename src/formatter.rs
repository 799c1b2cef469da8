//! Text shown on screen.

use thousands::Separable;

/// Formats a score with thousands separators, e.g. `12,340`.
pub fn format_score(score: u32) -> String {
    score.separate_with_commas()
}

/// The heads-up line drawn over the board. `level_index` is zero-based.
pub fn hud_line(score: u32, level_index: usize) -> String {
    format!("Score: {}  Level: {}", format_score(score), level_index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(950), "950");
        assert_eq!(format_score(1250), "1,250");
        assert_eq!(format_score(1_000_000), "1,000,000");
    }

    #[test]
    fn test_hud_line() {
        assert_eq!(hud_line(40, 0), "Score: 40  Level: 1");
        assert_eq!(hud_line(12_340, 1), "Score: 12,340  Level: 2");
    }
}
