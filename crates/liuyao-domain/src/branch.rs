//! Earthly Branch (地支) module

use crate::element::Element;
use crate::error::{BranchPosition, InvalidBranchError};
use serde::{Deserialize, Serialize, Serializer};

/// One of the twelve Earthly Branches
///
/// Branches name months and days in the traditional calendar, and every
/// hexagram line carries one. Each branch belongs to exactly one element;
/// several branches share an element, so branch identity and element
/// identity are different questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Branch {
    /// 子
    Zi,
    /// 丑
    Chou,
    /// 寅
    Yin,
    /// 卯
    Mao,
    /// 辰
    Chen,
    /// 巳
    Si,
    /// 午
    Wu,
    /// 未
    Wei,
    /// 申
    Shen,
    /// 酉
    You,
    /// 戌
    Xu,
    /// 亥
    Hai,
}

impl Branch {
    /// All branches in calendar order, starting from 子
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// The element this branch belongs to
    pub fn element(&self) -> Element {
        match self {
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Hai | Branch::Zi => Element::Water,
        }
    }

    /// Traditional single-character token
    pub fn hanzi(&self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }

    /// Romanized name (lowercase pinyin without tone marks)
    pub fn pinyin(&self) -> &'static str {
        match self {
            Branch::Zi => "zi",
            Branch::Chou => "chou",
            Branch::Yin => "yin",
            Branch::Mao => "mao",
            Branch::Chen => "chen",
            Branch::Si => "si",
            Branch::Wu => "wu",
            Branch::Wei => "wei",
            Branch::Shen => "shen",
            Branch::You => "you",
            Branch::Xu => "xu",
            Branch::Hai => "hai",
        }
    }

    /// Parse a branch from its hanzi or pinyin token
    ///
    /// Surrounding whitespace is ignored; anything else that is not an
    /// exact token yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.hanzi() == s || b.pinyin().eq_ignore_ascii_case(s))
    }

    /// Parse a token supplied for a given scorer input
    pub fn parse_at(token: &str, position: BranchPosition) -> Result<Self, InvalidBranchError> {
        Self::parse(token).ok_or_else(|| InvalidBranchError::new(position, token))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl std::str::FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid branch: {}", s))
    }
}

impl TryFrom<String> for Branch {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanzi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_table() {
        let expected = [
            (Branch::Zi, Element::Water),
            (Branch::Chou, Element::Earth),
            (Branch::Yin, Element::Wood),
            (Branch::Mao, Element::Wood),
            (Branch::Chen, Element::Earth),
            (Branch::Si, Element::Fire),
            (Branch::Wu, Element::Fire),
            (Branch::Wei, Element::Earth),
            (Branch::Shen, Element::Metal),
            (Branch::You, Element::Metal),
            (Branch::Xu, Element::Earth),
            (Branch::Hai, Element::Water),
        ];
        for (branch, element) in expected {
            assert_eq!(branch.element(), element, "element of {}", branch);
        }
    }

    #[test]
    fn test_every_element_has_a_branch() {
        for element in Element::ALL {
            assert!(Branch::ALL.iter().any(|b| b.element() == element));
        }
    }

    #[test]
    fn test_parse_hanzi_and_pinyin() {
        for branch in Branch::ALL {
            assert_eq!(Branch::parse(branch.hanzi()), Some(branch));
            assert_eq!(Branch::parse(branch.pinyin()), Some(branch));
        }
        assert_eq!(Branch::parse("  午 "), Some(Branch::Wu));
        assert_eq!(Branch::parse("SHEN"), Some(Branch::Shen));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert_eq!(Branch::parse(""), None);
        assert_eq!(Branch::parse("甲"), None);
        assert_eq!(Branch::parse("寅木"), None);
        assert_eq!(Branch::parse("子丑"), None);
        assert!("dragon".parse::<Branch>().is_err());
    }

    #[test]
    fn test_parse_at_reports_position() {
        let err = Branch::parse_at("甲", BranchPosition::Day).unwrap_err();
        assert_eq!(err.position, BranchPosition::Day);
        assert_eq!(err.token, "甲");
    }

    #[test]
    fn test_serde_uses_hanzi() {
        let json = serde_json::to_string(&Branch::You).unwrap();
        assert_eq!(json, "\"酉\"");

        let back: Branch = serde_json::from_str("\"酉\"").unwrap();
        assert_eq!(back, Branch::You);

        let bad: Result<Branch, _> = serde_json::from_str("\"乙\"");
        assert!(bad.is_err());
    }
}
