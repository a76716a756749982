//! Career recommendation from the subject element and body strength.
//!
//! A strong subject is balanced by the elements that drain, occupy or
//! restrain it (the one it generates, the one it overcomes, the one that
//! overcomes it). A weak subject is supported by the element that
//! generates it and by its own element.

use crate::element::Element;
use crate::strength::{BodyStrength, ElementProfile};

/// Industries associated with each element, indexed by element index.
pub const ELEMENT_INDUSTRIES: [&[&str]; 5] = [
    // Wood
    &["Education", "Publishing", "Forestry and agriculture", "Healthcare", "Textiles"],
    // Fire
    &["Energy", "Electronics", "Media and entertainment", "Food service", "Internet"],
    // Earth
    &["Real estate", "Construction", "Mining", "Consulting", "Warehousing and logistics"],
    // Metal
    &["Finance", "Machinery", "Law", "Automotive", "Precision manufacturing"],
    // Water
    &["Trade and commerce", "Shipping", "Tourism", "Beverages", "Information services"],
];

/// Positions associated with each element, indexed by element index.
pub const ELEMENT_POSITIONS: [&[&str]; 5] = [
    // Wood
    &["Teacher", "Editor", "Physician", "Designer"],
    // Fire
    &["Engineer", "Presenter", "Marketing manager", "Product manager"],
    // Earth
    &["Project manager", "Architect", "Administrator", "Advisor"],
    // Metal
    &["Analyst", "Lawyer", "Auditor", "Mechanical engineer"],
    // Water
    &["Sales manager", "Logistics planner", "Researcher", "Strategist"],
];

/// Favorable elements and the careers they point to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerRecommendation {
    pub subject: Element,
    pub body_strength: BodyStrength,
    pub favorable: Vec<Element>,
    pub industries: Vec<&'static str>,
    pub positions: Vec<&'static str>,
}

impl CareerRecommendation {
    /// One-line summary, e.g. `"Strong Wood: favor Fire, Earth, Metal"`.
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.favorable.iter().map(|e| e.name()).collect();
        format!(
            "{} {}: favor {}",
            self.body_strength,
            self.subject,
            names.join(", ")
        )
    }
}

/// Elements that balance a subject of the given strength.
pub fn favorable_elements(subject: Element, strength: BodyStrength) -> Vec<Element> {
    match strength {
        BodyStrength::Strong => vec![subject.generates(), subject.overcomes(), subject.overcome_by()],
        BodyStrength::Weak => vec![subject.generated_by(), subject],
    }
}

/// Career recommendation for an element profile.
pub fn career_recommendation(profile: &ElementProfile) -> CareerRecommendation {
    let favorable = favorable_elements(profile.subject, profile.body_strength);
    let industries = favorable
        .iter()
        .flat_map(|e| ELEMENT_INDUSTRIES[e.index() as usize].iter().copied())
        .collect();
    let positions = favorable
        .iter()
        .flat_map(|e| ELEMENT_POSITIONS[e.index() as usize].iter().copied())
        .collect();
    CareerRecommendation {
        subject: profile.subject,
        body_strength: profile.body_strength,
        favorable,
        industries,
        positions,
    }
}
