use serde::{Deserialize, Serialize};

/// Season of the 18-month run. Derived purely from the current month —
/// never stored independently of it.
///
/// The 18-month calendar wraps one and a half years: months 13–18 repeat
/// spring and summer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Season for a month in 1..=18.
    pub fn from_month(month: u32) -> Self {
        match month {
            1..=3 | 13..=15 => Season::Spring,
            4..=6 | 16..=18 => Season::Summer,
            7..=9 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_table() {
        let expected = [
            (1, Season::Spring),
            (2, Season::Spring),
            (3, Season::Spring),
            (4, Season::Summer),
            (5, Season::Summer),
            (6, Season::Summer),
            (7, Season::Autumn),
            (8, Season::Autumn),
            (9, Season::Autumn),
            (10, Season::Winter),
            (11, Season::Winter),
            (12, Season::Winter),
            (13, Season::Spring),
            (14, Season::Spring),
            (15, Season::Spring),
            (16, Season::Summer),
            (17, Season::Summer),
            (18, Season::Summer),
        ];
        for (month, season) in expected {
            assert_eq!(Season::from_month(month), season, "month {month}");
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Season::Autumn).unwrap(),
            "\"autumn\""
        );
    }
}
