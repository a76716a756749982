//! The five elements and their generating / overcoming cycle.
//!
//! Canonical order is Wood, Fire, Earth, Metal, Water. Each element
//! generates the next one in that order and overcomes the one two ahead.

/// One of the five elements (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in cycle order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in cycle order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a cycle position (wraps mod 5).
    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    /// The element this one generates (next in cycle).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one overcomes (two ahead).
    pub const fn overcomes(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that generates this one (one back).
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element that overcomes this one (two back).
    pub const fn overcome_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Relation of `other` as seen from `self`.
    pub const fn relation_to(self, other: Element) -> ElementRelation {
        ALL_RELATIONS[((other.index() + 5 - self.index()) % 5) as usize]
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How another element stands relative to a given one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// Self generates other (one step forward).
    Generates,
    /// Self overcomes other (two steps forward).
    Overcomes,
    /// Other overcomes self (two steps back).
    OvercomeBy,
    /// Other generates self (one step back).
    GeneratedBy,
}

/// Relations indexed by forward distance `(other - self) mod 5`.
const ALL_RELATIONS: [ElementRelation; 5] = [
    ElementRelation::Same,
    ElementRelation::Generates,
    ElementRelation::Overcomes,
    ElementRelation::OvercomeBy,
    ElementRelation::GeneratedBy,
];

/// Interaction coefficient of `other` on `self`, `INTERACTION[self][other]`.
///
/// Same 0.5, generated-by 0.8, generates 0.3, overcome-by -0.6, overcomes 0.1.
pub const INTERACTION: [[f64; 5]; 5] = [
    //  Wood  Fire  Earth  Metal  Water     (other)
    [0.5, 0.3, 0.1, -0.6, 0.8], // Wood
    [0.8, 0.5, 0.3, 0.1, -0.6], // Fire
    [-0.6, 0.8, 0.5, 0.3, 0.1], // Earth
    [0.1, -0.6, 0.8, 0.5, 0.3], // Metal
    [0.3, 0.1, -0.6, 0.8, 0.5], // Water
];

/// Coefficient for a relation.
pub const fn relation_coefficient(relation: ElementRelation) -> f64 {
    match relation {
        ElementRelation::Same => 0.5,
        ElementRelation::GeneratedBy => 0.8,
        ElementRelation::Generates => 0.3,
        ElementRelation::OvercomeBy => -0.6,
        ElementRelation::Overcomes => 0.1,
    }
}

/// Table lookup of the interaction coefficient of `other` on `self_element`.
pub fn interaction_coefficient(self_element: Element, other: Element) -> f64 {
    INTERACTION[self_element.index() as usize][other.index() as usize]
}
