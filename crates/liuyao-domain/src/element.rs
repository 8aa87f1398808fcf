//! Five Elements (五行) and the relations between them

use serde::{Deserialize, Serialize};

/// One of the Five Elements
///
/// Variants are declared in generation order: each element generates the
/// next one, and Water wraps around to generate Wood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// All elements in generation order
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in the generation cycle (Wood = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The element this one generates (相生)
    pub fn generates(&self) -> Element {
        Self::ALL[(self.index() + 1) % 5]
    }

    /// The element this one destroys (相克)
    pub fn destroys(&self) -> Element {
        Self::ALL[(self.index() + 2) % 5]
    }

    /// How `self`, as the reference, acts on `target`
    pub fn relation_to(&self, target: Element) -> Relation {
        match (target.index() + 5 - self.index()) % 5 {
            0 => Relation::Same,
            1 => Relation::Generates,
            2 => Relation::Destroys,
            3 => Relation::DestroyedBy,
            _ => Relation::GeneratedBy,
        }
    }

    /// Get the element name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    /// Traditional single-character name
    pub fn hanzi(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// Parse an element from its English or hanzi name
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.hanzi() == s || e.as_str().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl std::str::FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid element: {}", s))
    }
}

/// Relation of a reference element to a target element
///
/// Read every variant from the reference's point of view: `Generates`
/// means the reference generates the target, `DestroyedBy` means the
/// target destroys the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Both sides share an element (比和)
    Same,
    /// Reference generates target (生)
    Generates,
    /// Target generates reference (泄)
    GeneratedBy,
    /// Reference destroys target (克)
    Destroys,
    /// Target destroys reference (耗)
    DestroyedBy,
}

impl Relation {
    /// Strength points this relation contributes to the target
    pub fn points(&self) -> i32 {
        match self {
            Relation::Same => 2,
            Relation::Generates => 1,
            Relation::GeneratedBy => -1,
            Relation::Destroys => -2,
            Relation::DestroyedBy => 1,
        }
    }

    /// The same relation seen from the target's side
    pub fn inverse(&self) -> Relation {
        match self {
            Relation::Same => Relation::Same,
            Relation::Generates => Relation::GeneratedBy,
            Relation::GeneratedBy => Relation::Generates,
            Relation::Destroys => Relation::DestroyedBy,
            Relation::DestroyedBy => Relation::Destroys,
        }
    }

    /// Short description for display
    pub fn describe(&self) -> &'static str {
        match self {
            Relation::Same => "same element",
            Relation::Generates => "reference generates target",
            Relation::GeneratedBy => "target generates reference",
            Relation::Destroys => "reference destroys target",
            Relation::DestroyedBy => "target destroys reference",
        }
    }
}
