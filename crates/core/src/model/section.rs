use serde::{Deserialize, Serialize};

/// The six steps of the RMSE walkthrough, revealed in this fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorialSection {
    Intro,
    Formula,
    Interactive,
    Steps,
    Chart,
    Score,
}

impl TutorialSection {
    pub const ALL: [Self; 6] = [
        Self::Intro,
        Self::Formula,
        Self::Interactive,
        Self::Steps,
        Self::Chart,
        Self::Score,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Intro => 0,
            Self::Formula => 1,
            Self::Interactive => 2,
            Self::Steps => 3,
            Self::Chart => 4,
            Self::Score => 5,
        }
    }

    /// The following section, clamped at the last one.
    #[must_use]
    pub fn next(self) -> Self {
        let next = (self.index() + 1).min(Self::ALL.len() - 1);
        Self::ALL[next]
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::Score
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Intro => "Meet your RMSE guide",
            Self::Formula => "RMSE Formula",
            Self::Interactive => "Try It Yourself",
            Self::Steps => "Breakdown",
            Self::Chart => "Visualize Error",
            Self::Score => "Your Score",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_ordered_by_index() {
        for (i, section) in TutorialSection::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn next_clamps_at_score() {
        assert_eq!(TutorialSection::Intro.next(), TutorialSection::Formula);
        assert_eq!(TutorialSection::Chart.next(), TutorialSection::Score);
        assert_eq!(TutorialSection::Score.next(), TutorialSection::Score);
        assert!(TutorialSection::Score.is_last());
    }
}
