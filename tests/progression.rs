//! Month cadence and season progression scenarios.

mod common;

use common::*;
use cheetah_run::ecs::resources::{GameConfig, TelemetryKind};
use cheetah_run::model::{AchievementTier, Season};

#[test]
fn month_deadlines_fall_inside_the_configured_range() {
    let config = GameConfig {
        spawn_interval_ms: 3_600_000,
        ..GameConfig::default()
    };
    let mut session = session_with(config, 31);
    let (_, telemetry, _) = run_collecting(&mut session, 45_000);

    let times: Vec<u64> = telemetry
        .iter()
        .filter(|e| e.kind == TelemetryKind::MonthReached)
        .map(|e| e.at_ms)
        .collect();
    assert!(times.len() >= 4);

    // Each deadline is 6–8 s after the previous fire, rounded up to the
    // next 50 ms tick.
    let mut prev = 0;
    for &t in &times {
        let gap = t - prev;
        assert!((6_000..=8_049).contains(&gap), "month gap {gap} out of range");
        prev = t;
    }
}

#[test]
fn seasons_follow_the_month_table() {
    let config = GameConfig {
        spawn_interval_ms: 3_600_000,
        month_interval_min_ms: 1_000,
        month_interval_max_ms: 1_000,
        ..GameConfig::default()
    };
    let mut session = session_with(config, 31);
    let (patches, _, results) = run_collecting(&mut session, 18_000);

    for patch in &patches {
        let Some(month) = patch.get("currentMonth").and_then(|m| m.as_u64()) else {
            continue;
        };
        let expected = serde_json::to_value(Season::from_month(month as u32)).unwrap();
        assert_eq!(patch["season"], expected, "wrong season for month {month}");
    }

    // Months on a 1 s cadence: month 18 lands on the 17th advance.
    let results = results.expect("the run should finish in the window");
    assert_eq!(results.months_completed, 18);
    assert_eq!(results.game_time, 17);
    assert_eq!(results.tier, AchievementTier::Top);
}
