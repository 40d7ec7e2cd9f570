use serde::Deserialize;

/// A capture ray leaving the placed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// `(row delta, col delta)` of one step. "Down" is increasing row.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::DownLeft => (1, -1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
        }
    }
}

const LEGACY_DIRECTIONS: [Direction; 3] = [Direction::Right, Direction::Down, Direction::UpLeft];

/// Which rays a move may capture along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureDirections {
    /// Standard Reversi: all eight rays.
    #[default]
    All,
    /// Right, down and up-left only, as older versions of this engine did.
    Legacy,
}

impl CaptureDirections {
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Self::All => &Direction::ALL,
            Self::Legacy => &LEGACY_DIRECTIONS,
        }
    }
}

/// Rule options fixed for the lifetime of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub directions: CaptureDirections,
}

impl RuleConfig {
    pub fn legacy() -> Self {
        Self {
            directions: CaptureDirections::Legacy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scans_every_direction() {
        assert_eq!(RuleConfig::default().directions.directions().len(), 8);
    }

    #[test]
    fn legacy_scans_right_down_and_up_left() {
        let deltas: Vec<_> = RuleConfig::legacy()
            .directions
            .directions()
            .iter()
            .map(|d| d.delta())
            .collect();
        assert_eq!(deltas, vec![(0, 1), (1, 0), (-1, -1)]);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: RuleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuleConfig::default());

        let config: RuleConfig = serde_json::from_str(r#"{"directions":"legacy"}"#).unwrap();
        assert_eq!(config, RuleConfig::legacy());

        assert!(serde_json::from_str::<RuleConfig>(r#"{"directions":"diagonal"}"#).is_err());
    }
}
