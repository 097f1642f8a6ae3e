//! Score settings commands

use crate::engine::{GameEngine, SettingsPatch};
use crate::error::Result;
use crate::output::print_settings;
use crate::store::GameStore;

/// Print the merged scoring configuration
pub fn run_show<S: GameStore>(engine: &GameEngine<S>) -> Result<()> {
    print_settings(&engine.score_settings()?);
    Ok(())
}

/// Apply `key=value` overrides and print the merged result
pub fn run_set<S: GameStore>(engine: &GameEngine<S>, pairs: &[String]) -> Result<()> {
    let patch = match parse_patch(pairs) {
        Ok(patch) => patch,
        Err(message) => {
            println!("{message}");
            return Ok(());
        }
    };

    if patch.is_empty() {
        println!("Nothing to change");
        return Ok(());
    }

    let merged = engine.update_score_settings(&patch)?;
    print_settings(&merged);
    Ok(())
}

/// Parse `key=value` pairs into a settings patch
///
/// `attempt_bonus` takes six comma-separated values; everything else is a
/// single non-negative integer.
fn parse_patch(pairs: &[String]) -> std::result::Result<SettingsPatch, String> {
    let mut patch = SettingsPatch::default();

    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{pair}'"))?;

        let parse_u32 = |value: &str| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid value for {key}: '{value}'"))
        };

        match key.trim() {
            "base_solve_points" => patch.base_solve_points = Some(parse_u32(value)?),
            "failed_attempt_points" => patch.failed_attempt_points = Some(parse_u32(value)?),
            "streak_bonus_3_day" => patch.streak_bonus_3_day = Some(parse_u32(value)?),
            "streak_bonus_7_day" => patch.streak_bonus_7_day = Some(parse_u32(value)?),
            "streak_bonus_30_day" => patch.streak_bonus_30_day = Some(parse_u32(value)?),
            "attempt_bonus" => {
                let values: Vec<u32> = value
                    .split(',')
                    .map(parse_u32)
                    .collect::<std::result::Result<_, _>>()?;
                let table: [u32; 6] = values
                    .try_into()
                    .map_err(|_| "attempt_bonus needs exactly 6 values".to_string())?;
                patch.attempt_bonus = Some(table);
            }
            other => return Err(format!("unknown setting '{other}'")),
        }
    }

    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    fn pairs(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_single_override() {
        let patch = parse_patch(&pairs(&["base_solve_points=20"])).unwrap();
        assert_eq!(patch.base_solve_points, Some(20));
        assert!(patch.failed_attempt_points.is_none());
    }

    #[test]
    fn parse_attempt_bonus_table() {
        let patch = parse_patch(&pairs(&["attempt_bonus=6,5,4,3,2,1"])).unwrap();
        assert_eq!(patch.attempt_bonus, Some([6, 5, 4, 3, 2, 1]));

        assert!(parse_patch(&pairs(&["attempt_bonus=1,2,3"])).is_err());
        assert!(parse_patch(&pairs(&["attempt_bonus=a,b,c,d,e,f"])).is_err());
    }

    #[test]
    fn parse_rejects_unknown_keys_and_bad_values() {
        assert!(parse_patch(&pairs(&["nope=1"])).is_err());
        assert!(parse_patch(&pairs(&["base_solve_points=ten"])).is_err());
        assert!(parse_patch(&pairs(&["base_solve_points"])).is_err());
    }

    #[test]
    fn set_persists_through_engine() {
        let engine = GameEngine::new(SqliteStore::open_in_memory().unwrap());
        run_set(&engine, &pairs(&["failed_attempt_points=2"])).unwrap();

        assert_eq!(engine.score_settings().unwrap().failed_attempt_points, 2);
    }
}
