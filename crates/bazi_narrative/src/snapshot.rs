//! Read-only, serializable view of a computed chart.
//!
//! This is everything the narrative layer sees. Nothing flows back from it
//! into chart computation.

use bazi_base::{
    BaziChart, CareerRecommendation, ElementProfile, FortuneCurve, Gender, LuckPillars, PeakWindow,
};
use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarsView {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
}

impl PillarsView {
    /// `"甲子 丙寅 戊辰 庚午"`.
    pub fn joined(&self) -> String {
        format!("{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementScoreView {
    pub element: String,
    pub glyph: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckPillarView {
    pub pillar: String,
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckView {
    pub direction: String,
    pub onset_years: u32,
    pub onset_months: u32,
    pub onset_detail: String,
    pub onset_is_fallback: bool,
    pub pillars: Vec<LuckPillarView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakView {
    pub start_age: u32,
    pub end_age: u32,
    pub peak_age: u32,
    pub peak_score: u32,
}

impl From<PeakWindow> for PeakView {
    fn from(w: PeakWindow) -> Self {
        Self {
            start_age: w.start_age,
            end_age: w.end_age,
            peak_age: w.peak_age,
            peak_score: w.peak_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerView {
    pub favorable: Vec<String>,
    pub industries: Vec<String>,
    pub positions: Vec<String>,
}

/// Chart, element profile, luck pillars and peak window as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    /// Birth moment, `YYYY-MM-DD HH:MM` local civil time.
    pub birth: String,
    pub gender: String,
    pub pillars: PillarsView,
    pub element_scores: Vec<ElementScoreView>,
    pub subject: String,
    pub body_strength: String,
    pub strongest: String,
    pub weakest: String,
    pub luck: LuckView,
    pub peak: Option<PeakView>,
    pub current_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<CareerView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_events: Option<String>,
}

impl ChartSnapshot {
    pub fn new(
        chart: &BaziChart,
        gender: Gender,
        profile: &ElementProfile,
        luck: &LuckPillars,
        curve: Option<&FortuneCurve>,
    ) -> Self {
        let birth_year = chart.birth().year;
        let pillars = PillarsView {
            year: chart.year().to_string(),
            month: chart.month().to_string(),
            day: chart.day().to_string(),
            hour: chart.hour().to_string(),
        };
        let element_scores = profile
            .scores
            .iter()
            .map(|(e, score)| ElementScoreView {
                element: e.name().to_string(),
                glyph: e.glyph().to_string(),
                score,
            })
            .collect();
        let luck = LuckView {
            direction: luck.direction.name().to_string(),
            onset_years: luck.onset.years,
            onset_months: luck.onset.months,
            onset_detail: luck.onset.detail(),
            onset_is_fallback: luck.onset.is_fallback,
            pillars: luck
                .pillars
                .iter()
                .map(|lp| {
                    let (start_year, end_year) = lp.calendar_years(birth_year);
                    LuckPillarView {
                        pillar: lp.pillar.to_string(),
                        start_age: lp.start_age,
                        end_age: lp.end_age,
                        start_year,
                        end_year,
                    }
                })
                .collect(),
        };
        Self {
            birth: chart.birth().to_string(),
            gender: gender.name().to_string(),
            pillars,
            element_scores,
            subject: profile.subject.name().to_string(),
            body_strength: profile.body_strength.name().to_string(),
            strongest: profile.strongest.name().to_string(),
            weakest: profile.weakest.name().to_string(),
            luck,
            peak: curve.and_then(|c| c.peak).map(PeakView::from),
            current_score: curve.and_then(FortuneCurve::current_score),
            career: None,
            birth_location: None,
            life_events: None,
        }
    }

    pub fn with_career(mut self, rec: &CareerRecommendation) -> Self {
        self.career = Some(CareerView {
            favorable: rec.favorable.iter().map(|e| e.name().to_string()).collect(),
            industries: rec.industries.iter().map(|s| s.to_string()).collect(),
            positions: rec.positions.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn with_birth_location(mut self, location: impl Into<String>) -> Self {
        self.birth_location = Some(location.into());
        self
    }

    pub fn with_life_events(mut self, events: impl Into<String>) -> Self {
        self.life_events = Some(events.into());
        self
    }

    /// Year the subject was born.
    pub fn birth_year(&self) -> Option<i32> {
        self.birth.get(..4).and_then(|y| y.parse().ok())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| NarrativeError::Parse(e.to_string()))
    }
}
