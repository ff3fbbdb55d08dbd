//! Scoring module - line-clear points, levels and gravity
//!
//! Flat scoring: every cleared line is worth `100 * level`, with the level taken before
//! the clear is applied. Clearing four lines at once earns no bonus over four singles.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_CLEAR_POINTS, SOFT_DROP_POINTS, START_LEVEL,
};

/// Points for clearing `lines` rows at `level`
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level)
}

/// Level reached after clearing `total_lines` in the session
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval at `level`: `max(50, 1000 - (level - 1) * 50)`
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Points for a drop of `cells` rows.
/// Hard drop: 2 points per cell, soft drop: 1 point per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Counter changes produced by one line-clear pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines: u32,
    pub score: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    /// Points awarded by this clear alone
    pub awarded: u32,
}

/// Apply a clear of `cleared` rows to the running counters.
///
/// Returns the counters unchanged (and `awarded == 0`) when nothing was cleared.
pub fn apply_line_clear(cleared: u32, lines: u32, score: u32, level: u32) -> ScoreResult {
    if cleared == 0 {
        return ScoreResult {
            lines,
            score,
            level,
            drop_interval_ms: drop_interval_ms(level),
            awarded: 0,
        };
    }

    let awarded = line_clear_score(cleared, level);
    let lines = lines.saturating_add(cleared);
    let level = level_for_lines(lines);
    ScoreResult {
        lines,
        score: score.saturating_add(awarded),
        level,
        drop_interval_ms: drop_interval_ms(level),
        awarded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_is_flat_per_line() {
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(4, 1), 400);
        assert_eq!(line_clear_score(2, 3), 600);
        assert_eq!(line_clear_score(0, 9), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 950);
        assert_eq!(drop_interval_ms(10), 550);
        assert_eq!(drop_interval_ms(19), 100);
        assert_eq!(drop_interval_ms(20), 50);
        assert_eq!(drop_interval_ms(500), 50);
        // Level 0 never occurs, but must not underflow.
        assert_eq!(drop_interval_ms(0), 1000);
    }

    #[test]
    fn test_drop_score() {
        assert_eq!(calculate_drop_score(18, true), 36);
        assert_eq!(calculate_drop_score(1, false), 1);
        assert_eq!(calculate_drop_score(0, true), 0);
    }

    #[test]
    fn test_apply_line_clear_uses_level_before_update() {
        // 9 lines at level 1, clear 3 more: scored at level 1, then level 2.
        let r = apply_line_clear(3, 9, 500, 1);
        assert_eq!(r.awarded, 300);
        assert_eq!(r.score, 800);
        assert_eq!(r.lines, 12);
        assert_eq!(r.level, 2);
        assert_eq!(r.drop_interval_ms, 950);
    }

    #[test]
    fn test_apply_line_clear_noop() {
        let r = apply_line_clear(0, 12, 800, 2);
        assert_eq!(
            r,
            ScoreResult {
                lines: 12,
                score: 800,
                level: 2,
                drop_interval_ms: 950,
                awarded: 0
            }
        );
    }
}
