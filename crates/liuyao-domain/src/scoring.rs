//! Strength scoring (数字量化)
//!
//! Scores a target branch against the month-establishing branch and the
//! day branch. Each reference contributes the points of its element's
//! relation to the target's element:
//!
//! | Relation (reference → target) | Points |
//! |-------------------------------|--------|
//! | Same element                  | +2     |
//! | Reference generates target    | +1     |
//! | Target generates reference    | −1     |
//! | Reference destroys target     | −2     |
//! | Target destroys reference     | +1     |

use crate::error::{BranchPosition, InvalidBranchError};
use crate::{Branch, Relation};
use serde::{Deserialize, Serialize};

/// Month and day contributions for one target branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrengthScore {
    /// Month score (月建数)
    pub month: i32,
    /// Day score (日辰数)
    pub day: i32,
}

impl StrengthScore {
    /// Combined index (总指数)
    pub fn total(&self) -> i32 {
        self.month + self.day
    }
}

impl From<StrengthScore> for (i32, i32) {
    fn from(score: StrengthScore) -> Self {
        (score.month, score.day)
    }
}

/// Relation of a reference branch's element to the target branch's element
pub fn relation(reference: Branch, target: Branch) -> Relation {
    reference.element().relation_to(target.element())
}

/// Score `target` against the month and day branches
pub fn score(month: Branch, day: Branch, target: Branch) -> StrengthScore {
    StrengthScore {
        month: relation(month, target).points(),
        day: relation(day, target).points(),
    }
}

/// Score raw branch tokens
///
/// Every token must be one of the twelve branches; the first one that is
/// not is reported together with the input it was given for.
pub fn score_tokens(month: &str, day: &str, target: &str) -> Result<StrengthScore, InvalidBranchError> {
    let month = Branch::parse_at(month, BranchPosition::Month)?;
    let day = Branch::parse_at(day, BranchPosition::Day)?;
    let target = Branch::parse_at(target, BranchPosition::Target)?;
    Ok(score(month, day, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_element_month() {
        // 寅 and 卯 are both Wood
        let s = score(Branch::Yin, Branch::Wu, Branch::Mao);
        assert_eq!(s.month, 2);
    }

    #[test]
    fn test_target_generates_day() {
        // Target 卯 (Wood) generates day 午 (Fire)
        let s = score(Branch::Yin, Branch::Wu, Branch::Mao);
        assert_eq!(s.day, -1);
        assert_eq!(s.total(), 1);
    }

    #[test]
    fn test_day_destroys_target() {
        // Day 酉 (Metal) destroys target 寅 (Wood)
        let s = score(Branch::Zi, Branch::You, Branch::Yin);
        assert_eq!(s.month, 1);
        assert_eq!(s.day, -2);
    }

    #[test]
    fn test_target_destroys_day() {
        // Target 申 (Metal) destroys day 卯 (Wood)
        let s = score(Branch::Chen, Branch::Mao, Branch::Shen);
        assert_eq!(s.month, 1);
        assert_eq!(s.day, 1);
    }

    #[test]
    fn test_earth_branches_share_element() {
        let earth = [Branch::Chou, Branch::Chen, Branch::Wei, Branch::Xu];
        for month in earth {
            for target in earth {
                assert_eq!(score(month, month, target), StrengthScore { month: 2, day: 2 });
            }
        }
    }

    #[test]
    fn test_self_relation() {
        for b in Branch::ALL {
            assert_eq!(<(i32, i32)>::from(score(b, b, b)), (2, 2));
        }
    }

    #[test]
    fn test_score_tokens_hanzi() {
        let s = score_tokens("寅", "子", "卯").unwrap();
        assert_eq!(s, StrengthScore { month: 2, day: 1 });
    }

    #[test]
    fn test_score_tokens_invalid_each_position() {
        let err = score_tokens("X", "子", "卯").unwrap_err();
        assert_eq!(err.position, BranchPosition::Month);

        let err = score_tokens("寅", "X", "卯").unwrap_err();
        assert_eq!(err.position, BranchPosition::Day);

        let err = score_tokens("寅", "子", "X").unwrap_err();
        assert_eq!(err.position, BranchPosition::Target);
        assert_eq!(err.token, "X");
    }

    #[test]
    fn test_score_tokens_reports_first_bad_token() {
        let err = score_tokens("甲", "乙", "丙").unwrap_err();
        assert_eq!(err.position, BranchPosition::Month);
        assert_eq!(err.to_string(), "Invalid month branch: \"甲\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_branch() -> impl Strategy<Value = Branch> {
        (0..12usize).prop_map(|i| Branch::ALL[i])
    }

    proptest! {
        /// Property: Each component is one of the four possible point values
        #[test]
        fn test_score_range(month in any_branch(), day in any_branch(), target in any_branch()) {
            let s = score(month, day, target);
            for v in [s.month, s.day] {
                prop_assert!([-2, -1, 1, 2].contains(&v), "unexpected score {}", v);
            }
        }

        /// Property: +2 only for same element, -2 only when the reference destroys the target
        #[test]
        fn test_extremes(reference in any_branch(), target in any_branch()) {
            let s = score(reference, reference, target);
            let same = reference.element() == target.element();
            let destroys = reference.element().destroys() == target.element();
            prop_assert_eq!(s.month == 2, same);
            prop_assert_eq!(s.month == -2, destroys);
        }

        /// Property: Scoring is deterministic
        #[test]
        fn test_deterministic(month in any_branch(), day in any_branch(), target in any_branch()) {
            prop_assert_eq!(score(month, day, target), score(month, day, target));
        }

        /// Property: Month and day are scored independently by the same rule
        #[test]
        fn test_month_day_independent(a in any_branch(), b in any_branch(), target in any_branch()) {
            prop_assert_eq!(score(a, b, target).month, score(b, a, target).day);
        }

        /// Property: Generation and destruction scores flip when the sides swap
        #[test]
        fn test_swap_symmetry(a in any_branch(), b in any_branch()) {
            let forward = score(a, a, b).month;
            let backward = score(b, b, a).month;
            match relation(a, b) {
                Relation::Same => {
                    prop_assert_eq!((forward, backward), (2, 2));
                }
                Relation::Generates => {
                    prop_assert_eq!((forward, backward), (1, -1));
                }
                Relation::GeneratedBy => {
                    prop_assert_eq!((forward, backward), (-1, 1));
                }
                Relation::Destroys => {
                    prop_assert_eq!((forward, backward), (-2, 1));
                }
                Relation::DestroyedBy => {
                    prop_assert_eq!((forward, backward), (1, -2));
                }
            }
        }
    }
}
