use serde::{Deserialize, Serialize};

use super::kinds::DeathCause;

/// Named achievements attached to a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// All four cubs alive at month 18.
    PerfectFamily,
    /// The run ended by completion rather than death.
    Survivor,
}

impl Achievement {
    pub fn as_str(self) -> &'static str {
        match self {
            Achievement::PerfectFamily => "perfect_family",
            Achievement::Survivor => "survivor",
        }
    }
}

/// Three-tier result classification. The presentation layer maps tiers to
/// display titles; only the classification itself is a core contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementTier {
    Top,
    Mid,
    Base,
}

impl AchievementTier {
    pub fn classify(cubs_survived: u32, months_completed: u32) -> Self {
        if months_completed >= 18 && cubs_survived == 4 {
            AchievementTier::Top
        } else if months_completed >= 18 && cubs_survived >= 2 {
            AchievementTier::Mid
        } else {
            AchievementTier::Base
        }
    }
}

/// How a run reached its terminal state. Exactly one of these fires per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCause {
    /// Time expired or month 18 reached.
    Completed,
    Death(DeathCause),
}

impl TerminalCause {
    pub fn death_cause(self) -> Option<DeathCause> {
        match self {
            TerminalCause::Completed => None,
            TerminalCause::Death(cause) => Some(cause),
        }
    }
}

/// Immutable outcome of a finished run, computed once at termination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResults {
    pub cubs_survived: u32,
    pub months_completed: u32,
    pub final_score: u64,
    /// Seconds of play consumed (session length minus remaining time).
    pub game_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_cause: Option<DeathCause>,
    pub achievements: Vec<Achievement>,
    pub tier: AchievementTier,
}

impl GameResults {
    pub fn compute(
        cause: TerminalCause,
        cubs_survived: u32,
        months_completed: u32,
        final_score: u64,
        game_time: u32,
    ) -> Self {
        let mut achievements = Vec::new();
        if cubs_survived == 4 && months_completed >= 18 {
            achievements.push(Achievement::PerfectFamily);
        }
        if cause == TerminalCause::Completed {
            achievements.push(Achievement::Survivor);
        }
        Self {
            cubs_survived,
            months_completed,
            final_score,
            game_time,
            death_cause: cause.death_cause(),
            achievements,
            tier: AchievementTier::classify(cubs_survived, months_completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_classification() {
        assert_eq!(AchievementTier::classify(4, 18), AchievementTier::Top);
        assert_eq!(AchievementTier::classify(3, 18), AchievementTier::Mid);
        assert_eq!(AchievementTier::classify(2, 18), AchievementTier::Mid);
        assert_eq!(AchievementTier::classify(1, 18), AchievementTier::Base);
        assert_eq!(AchievementTier::classify(4, 17), AchievementTier::Base);
        assert_eq!(AchievementTier::classify(0, 3), AchievementTier::Base);
    }

    #[test]
    fn perfect_run_earns_both_achievements() {
        let results = GameResults::compute(TerminalCause::Completed, 4, 18, 1200, 95);
        assert!(results.achievements.contains(&Achievement::PerfectFamily));
        assert!(results.achievements.contains(&Achievement::Survivor));
        assert_eq!(results.death_cause, None);
        assert_eq!(results.tier, AchievementTier::Top);
    }

    #[test]
    fn survivor_without_perfect_family() {
        let results = GameResults::compute(TerminalCause::Completed, 2, 18, 400, 120);
        assert_eq!(results.achievements, vec![Achievement::Survivor]);
        assert_eq!(results.tier, AchievementTier::Mid);
    }

    #[test]
    fn death_carries_cause_and_no_survivor() {
        let results =
            GameResults::compute(TerminalCause::Death(DeathCause::Poacher), 4, 9, 300, 60);
        assert_eq!(results.death_cause, Some(DeathCause::Poacher));
        assert!(results.achievements.is_empty());
        assert_eq!(results.tier, AchievementTier::Base);
    }

    #[test]
    fn death_cause_omitted_from_json_on_completion() {
        let results = GameResults::compute(TerminalCause::Completed, 4, 18, 0, 120);
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.get("deathCause").is_none());
        assert_eq!(json["cubsSurvived"], 4);
    }
}
