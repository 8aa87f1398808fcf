//! Input and report types for quantification

use liuyao_domain::{Branch, StrengthScore};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Branches needed to quantify one reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantificationInput {
    /// Month-establishing branch (月建)
    pub month: Branch,

    /// Day branch (日辰)
    pub day: Branch,

    /// Branch of the useful spirit (用神)
    pub useful_spirit: Branch,

    /// Branches of the moving lines (动爻), in hexagram order
    #[serde(default)]
    pub moving_lines: Vec<Branch>,
}

/// Strength index of one scored branch
///
/// Serializes as `{地支, 月建数, 日辰数, 总指数}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthIndex {
    /// The scored branch
    pub branch: Branch,

    /// Month and day components
    pub score: StrengthScore,
}

impl StrengthIndex {
    /// Month score (月建数)
    pub fn month_score(&self) -> i32 {
        self.score.month
    }

    /// Day score (日辰数)
    pub fn day_score(&self) -> i32 {
        self.score.day
    }

    /// Combined index (总指数)
    pub fn total(&self) -> i32 {
        self.score.total()
    }
}

impl Serialize for StrengthIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StrengthIndex", 4)?;
        state.serialize_field("地支", &self.branch)?;
        state.serialize_field("月建数", &self.month_score())?;
        state.serialize_field("日辰数", &self.day_score())?;
        state.serialize_field("总指数", &self.total())?;
        state.end()
    }
}

/// Quantified reading: the useful spirit plus every moving line
///
/// Static lines are not scored. Serializes as the quantification object it
/// was read from (`月建`, `日辰`, `用神`, `动爻列表`) extended with
/// `用神指数` and `动爻指数`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantificationReport {
    /// Month-establishing branch (月建)
    pub month: Branch,

    /// Day branch (日辰)
    pub day: Branch,

    /// Useful spirit index (用神指数)
    pub useful_spirit: StrengthIndex,

    /// Moving line indices (动爻指数), in input order
    pub moving_lines: Vec<StrengthIndex>,
}

impl Serialize for QuantificationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let moving_branches: Vec<Branch> = self.moving_lines.iter().map(|line| line.branch).collect();

        let mut state = serializer.serialize_struct("QuantificationReport", 6)?;
        state.serialize_field("月建", &self.month)?;
        state.serialize_field("日辰", &self.day)?;
        state.serialize_field("用神", &self.useful_spirit.branch)?;
        state.serialize_field("动爻列表", &moving_branches)?;
        state.serialize_field("用神指数", &self.useful_spirit)?;
        state.serialize_field("动爻指数", &self.moving_lines)?;
        state.end()
    }
}

impl QuantificationReport {
    /// One-line digest handed to the interpretation step
    pub fn summary(&self) -> String {
        format!(
            "月建={}，日辰={}，用神地支={}，用神指数={}",
            self.month,
            self.day,
            self.useful_spirit.branch,
            self.useful_spirit.total()
        )
    }
}
