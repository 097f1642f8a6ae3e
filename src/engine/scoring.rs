//! Points policy
//!
//! A solved round earns base points plus a bonus that shrinks with attempt
//! count, plus at most one streak bonus - the highest tier the running streak
//! has reached. A failed round earns a flat consolation value. All tunables
//! are admin-configurable with defaults that exist out of the box.

use serde::{Deserialize, Serialize};

/// Streak length needed for the first bonus tier
pub const STREAK_TIER_1: u32 = 3;
/// Streak length needed for the second bonus tier
pub const STREAK_TIER_2: u32 = 7;
/// Streak length needed for the top bonus tier
pub const STREAK_TIER_3: u32 = 30;

/// Admin-tunable scoring configuration
///
/// Reads always come back fully populated: persisted overrides are merged
/// onto these defaults, so no consumer ever sees a partial configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoreSettings {
    /// Points for solving, before bonuses
    pub base_solve_points: u32,
    /// Flat points for a terminal unsolved round
    pub failed_attempt_points: u32,
    /// Bonus by attempt count; index 0 is a one-guess solve
    pub attempt_bonus: [u32; 6],
    /// Bonus once the streak reaches 3 days
    pub streak_bonus_3_day: u32,
    /// Bonus once the streak reaches 7 days
    pub streak_bonus_7_day: u32,
    /// Bonus once the streak reaches 30 days
    pub streak_bonus_30_day: u32,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            base_solve_points: 10,
            failed_attempt_points: 5,
            attempt_bonus: [5, 4, 3, 2, 1, 1],
            streak_bonus_3_day: 2,
            streak_bonus_7_day: 5,
            streak_bonus_30_day: 10,
        }
    }
}

impl ScoreSettings {
    /// Apply a partial override, field by field
    ///
    /// Only supplied fields change; everything else keeps its current value.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(v) = patch.base_solve_points {
            self.base_solve_points = v;
        }
        if let Some(v) = patch.failed_attempt_points {
            self.failed_attempt_points = v;
        }
        if let Some(v) = patch.attempt_bonus {
            self.attempt_bonus = v;
        }
        if let Some(v) = patch.streak_bonus_3_day {
            self.streak_bonus_3_day = v;
        }
        if let Some(v) = patch.streak_bonus_7_day {
            self.streak_bonus_7_day = v;
        }
        if let Some(v) = patch.streak_bonus_30_day {
            self.streak_bonus_30_day = v;
        }
    }

    /// Defaults with a patch applied
    #[must_use]
    pub fn merged(patch: &SettingsPatch) -> Self {
        let mut settings = Self::default();
        settings.apply(patch);
        settings
    }
}

/// Partial settings override, as submitted by an administrator
///
/// Persisted per-key; absent fields mean "keep the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_solve_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_attempt_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_bonus: Option<[u32; 6]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak_bonus_3_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak_bonus_7_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak_bonus_30_day: Option<u32>,
}

impl SettingsPatch {
    /// True when the patch overrides nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.base_solve_points.is_none()
            && self.failed_attempt_points.is_none()
            && self.attempt_bonus.is_none()
            && self.streak_bonus_3_day.is_none()
            && self.streak_bonus_7_day.is_none()
            && self.streak_bonus_30_day.is_none()
    }
}

/// Points for one terminal round
///
/// `streak_before` is the streak length as it stood before this round's solve
/// advanced it. Attempts outside 1..=6 are a caller contract violation: the
/// orchestrator caps rounds at six guesses.
#[must_use]
pub fn compute_points(
    attempts: u8,
    solved: bool,
    streak_before: u32,
    settings: &ScoreSettings,
) -> u32 {
    debug_assert!((1..=6).contains(&attempts), "attempts out of range");

    if !solved {
        return settings.failed_attempt_points;
    }

    let mut points = settings.base_solve_points;
    points += settings.attempt_bonus[usize::from(attempts - 1).min(5)];

    // One streak bonus only: the highest tier reached
    if streak_before >= STREAK_TIER_3 {
        points += settings.streak_bonus_30_day;
    } else if streak_before >= STREAK_TIER_2 {
        points += settings.streak_bonus_7_day;
    } else if streak_before >= STREAK_TIER_1 {
        points += settings.streak_bonus_3_day;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_values() {
        let settings = ScoreSettings::default();
        assert_eq!(settings.base_solve_points, 10);
        assert_eq!(settings.failed_attempt_points, 5);
        assert_eq!(settings.attempt_bonus, [5, 4, 3, 2, 1, 1]);
        assert_eq!(settings.streak_bonus_3_day, 2);
        assert_eq!(settings.streak_bonus_7_day, 5);
        assert_eq!(settings.streak_bonus_30_day, 10);
    }

    #[test]
    fn failed_round_flat_points() {
        let settings = ScoreSettings::default();
        assert_eq!(compute_points(6, false, 0, &settings), 5);
        // Streak length is irrelevant for a failed round
        assert_eq!(compute_points(6, false, 30, &settings), 5);
    }

    #[test]
    fn first_attempt_no_streak() {
        let settings = ScoreSettings::default();
        // base 10 + attempt bonus 5
        assert_eq!(compute_points(1, true, 0, &settings), 15);
    }

    #[test]
    fn fourth_attempt_no_streak() {
        let settings = ScoreSettings::default();
        // base 10 + attempt bonus 2
        assert_eq!(compute_points(4, true, 0, &settings), 12);
    }

    #[test]
    fn streak_tiers_are_exclusive() {
        let settings = ScoreSettings::default();

        // base 10 + attempt bonus 1 (6th attempt)
        assert_eq!(compute_points(6, true, 0, &settings), 11);
        assert_eq!(compute_points(6, true, 2, &settings), 11);
        // 3-day tier only
        assert_eq!(compute_points(6, true, 3, &settings), 13);
        assert_eq!(compute_points(6, true, 6, &settings), 13);
        // 7-day tier only, not 3+7
        assert_eq!(compute_points(6, true, 7, &settings), 16);
        assert_eq!(compute_points(6, true, 29, &settings), 16);
        // 30-day tier only, not 3+7+30
        assert_eq!(compute_points(6, true, 30, &settings), 21);
        assert_eq!(compute_points(6, true, 365, &settings), 21);
    }

    #[test]
    fn patch_overrides_only_supplied_fields() {
        let patch = SettingsPatch {
            base_solve_points: Some(20),
            streak_bonus_7_day: Some(9),
            ..SettingsPatch::default()
        };

        let merged = ScoreSettings::merged(&patch);
        assert_eq!(merged.base_solve_points, 20);
        assert_eq!(merged.streak_bonus_7_day, 9);
        // Untouched fields keep defaults
        assert_eq!(merged.failed_attempt_points, 5);
        assert_eq!(merged.attempt_bonus, [5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn empty_patch_detection() {
        assert!(SettingsPatch::default().is_empty());
        let patch = SettingsPatch {
            attempt_bonus: Some([6, 5, 4, 3, 2, 1]),
            ..SettingsPatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_serde_skips_absent_fields() {
        let patch = SettingsPatch {
            failed_attempt_points: Some(3),
            ..SettingsPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"failed_attempt_points":3}"#);

        let back: SettingsPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, patch);
    }
}
