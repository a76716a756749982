//! Fortune Curve Synthesizer: a 0-100 fortune score for every age 0..=100.
//!
//! Each age combines the subject's own element score, the interaction of
//! the active luck pillar and of the year's annual pillar with the subject,
//! a two-cycle long-period oscillation and a deterministic short-period
//! jitter. The result is clamped to [0, 100] and rounded.

use std::f64::consts::PI;

use bazi_time::CivilDateTime;
use tracing::debug;

use crate::calendar::CalendarService;
use crate::chart::BaziChart;
use crate::element::{Element, interaction_coefficient};
use crate::error::CalendarError;
use crate::luck::{LuckPillar, LuckPillars};
use crate::pillar::Pillar;
use crate::strength::ElementProfile;

/// Last age on the curve (inclusive).
pub const MAX_AGE: u32 = 100;

/// Age whose score is reported as the "current" score.
pub const CURRENT_AGE: u32 = 30;

/// Coefficients of the fortune score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FortuneConfig {
    /// Multiplier on the luck-pillar branch interaction.
    pub luck_weight: f64,
    /// Multiplier on the annual-pillar branch interaction.
    pub annual_weight: f64,
    /// Amplitude of the two-cycle oscillation over 100 years.
    pub oscillation_amplitude: f64,
    /// Amplitude of `sin(0.5a) + cos(0.3a)`.
    pub jitter_amplitude: f64,
    /// Scores strictly above this form peak runs.
    pub peak_threshold: u32,
    /// Previous score assumed before age 0 for the trend.
    pub start_score: u32,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            luck_weight: 15.0,
            annual_weight: 10.0,
            oscillation_amplitude: 20.0,
            jitter_amplitude: 5.0,
            peak_threshold: 80,
            start_score: 50,
        }
    }
}

/// Direction of the score relative to the previous age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FortuneTrend {
    Up,
    Down,
}

impl FortuneTrend {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Narrative bucket of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FortuneTag {
    Peak,
    Rising,
    Steady,
    Sluggish,
    Trough,
}

impl FortuneTag {
    /// `>80` Peak, `>60` Rising, `>40` Steady, `>20` Sluggish, else Trough.
    pub const fn from_score(score: u32) -> Self {
        if score > 80 {
            Self::Peak
        } else if score > 60 {
            Self::Rising
        } else if score > 40 {
            Self::Steady
        } else if score > 20 {
            Self::Sluggish
        } else {
            Self::Trough
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Peak => "Peak",
            Self::Rising => "Rising",
            Self::Steady => "Steady",
            Self::Sluggish => "Sluggish",
            Self::Trough => "Trough",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Peak => "Everything goes your way; seize the opportunities.",
            Self::Rising => "Momentum is building; good time to advance plans.",
            Self::Steady => "Calm and stable; consolidate what you have.",
            Self::Sluggish => "Progress is slow; be patient and conserve energy.",
            Self::Trough => "A low period; rest, reflect and avoid big risks.",
        }
    }
}

/// Fortune at one age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortunePoint {
    pub age: u32,
    /// Calendar year `birth_year + age`.
    pub year: i32,
    pub score: u32,
    pub trend: FortuneTrend,
    /// Luck pillar active at this age (`None` only for an empty sequence).
    pub luck: Option<LuckPillar>,
    /// Year pillar in effect on January 1st of `year`.
    pub annual: Pillar,
    pub tag: FortuneTag,
}

/// Contiguous run of ages scoring above the peak threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeakWindow {
    pub start_age: u32,
    pub end_age: u32,
    pub peak_age: u32,
    pub peak_score: u32,
}

/// The 101-point life curve and its peak window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneCurve {
    pub points: Vec<FortunePoint>,
    pub peak: Option<PeakWindow>,
}

impl FortuneCurve {
    pub fn point_at(&self, age: u32) -> Option<&FortunePoint> {
        self.points.iter().find(|p| p.age == age)
    }

    /// Score at age 30, or the last point for a shorter curve.
    pub fn current_score(&self) -> Option<u32> {
        self.point_at(CURRENT_AGE)
            .or_else(|| self.points.last())
            .map(|p| p.score)
    }
}

/// Score for one age from its element-interaction inputs.
///
/// `base` is the subject's own element score; the coefficients come from
/// [`interaction_coefficient`].
pub fn fortune_score(
    age: u32,
    base: u32,
    luck_coefficient: f64,
    annual_coefficient: f64,
    config: &FortuneConfig,
) -> u32 {
    let a = age as f64;
    let oscillation = config.oscillation_amplitude * (a / 100.0 * PI * 4.0).sin();
    let jitter = config.jitter_amplitude * ((0.5 * a).sin() + (0.3 * a).cos());
    let raw = base as f64
        + config.luck_weight * luck_coefficient
        + config.annual_weight * annual_coefficient
        + oscillation
        + jitter;
    raw.clamp(0.0, 100.0).round() as u32
}

/// Highest-peaking contiguous run of scores above `threshold`.
///
/// Ties between runs go to the earliest. `None` if no score exceeds the
/// threshold.
pub fn peak_window(points: &[FortunePoint], threshold: u32) -> Option<PeakWindow> {
    let mut best: Option<PeakWindow> = None;
    let mut current: Option<PeakWindow> = None;
    for p in points {
        if p.score > threshold {
            let run = current.get_or_insert(PeakWindow {
                start_age: p.age,
                end_age: p.age,
                peak_age: p.age,
                peak_score: p.score,
            });
            run.end_age = p.age;
            if p.score > run.peak_score {
                run.peak_age = p.age;
                run.peak_score = p.score;
            }
        } else if let Some(run) = current.take() {
            best = better_run(best, run);
        }
    }
    if let Some(run) = current {
        best = better_run(best, run);
    }
    best
}

fn better_run(best: Option<PeakWindow>, run: PeakWindow) -> Option<PeakWindow> {
    match best {
        Some(b) if b.peak_score >= run.peak_score => Some(b),
        _ => Some(run),
    }
}

/// Year pillar in effect on January 1st of `year`.
pub fn annual_pillar<C>(year: i32, calendar: &C) -> Result<Pillar, CalendarError>
where
    C: CalendarService + ?Sized,
{
    let jan1 = CivilDateTime::start_of_year(year)?;
    Ok(calendar.sexagenary_date(&jan1)?.year)
}

/// Fortune curve for ages 0..=100.
///
/// Fails as a whole if the calendar cannot resolve any year's pillar.
pub fn fortune_curve<C>(
    chart: &BaziChart,
    profile: &ElementProfile,
    luck: &LuckPillars,
    calendar: &C,
    config: &FortuneConfig,
) -> Result<FortuneCurve, CalendarError>
where
    C: CalendarService + ?Sized,
{
    let birth_year = chart.birth().year;
    let subject = profile.subject;
    let base = profile.subject_score();

    let mut points = Vec::with_capacity(MAX_AGE as usize + 1);
    let mut previous = config.start_score;
    for age in 0..=MAX_AGE {
        let year = birth_year + age as i32;
        let active = luck.active_at(age).copied();
        let annual = annual_pillar(year, calendar)?;
        let luck_coefficient = active.map_or(0.0, |lp| coefficient(subject, lp.pillar));
        let score = fortune_score(
            age,
            base,
            luck_coefficient,
            coefficient(subject, annual),
            config,
        );
        let trend = if score >= previous {
            FortuneTrend::Up
        } else {
            FortuneTrend::Down
        };
        points.push(FortunePoint {
            age,
            year,
            score,
            trend,
            luck: active,
            annual,
            tag: FortuneTag::from_score(score),
        });
        previous = score;
    }

    let peak = peak_window(&points, config.peak_threshold);
    debug!(birth_year, ?peak, "fortune curve computed");
    Ok(FortuneCurve { points, peak })
}

fn coefficient(subject: Element, pillar: Pillar) -> f64 {
    interaction_coefficient(subject, pillar.branch().element())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(scores: &[u32]) -> Vec<FortunePoint> {
        let luck = Some(LuckPillar {
            pillar: Pillar::from_cycle_index(0),
            start_age: 0,
            end_age: 9,
        });
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| FortunePoint {
                age: i as u32,
                year: 2000 + i as i32,
                score,
                trend: FortuneTrend::Up,
                luck,
                annual: Pillar::from_cycle_index(0),
                tag: FortuneTag::from_score(score),
            })
            .collect()
    }

    // ── score ──

    #[test]
    fn age_zero_score() {
        // sin(0) = 0, cos(0) = 1 → jitter 5
        let cfg = FortuneConfig::default();
        assert_eq!(fortune_score(0, 40, 0.8, 0.8, &cfg), 40 + 12 + 8 + 5);
    }

    #[test]
    fn score_is_clamped() {
        let cfg = FortuneConfig::default();
        for age in 0..=MAX_AGE {
            assert!(fortune_score(age, 100, 0.8, 0.8, &cfg) <= 100);
        }
        assert_eq!(fortune_score(0, 100, 0.8, 0.8, &cfg), 100);
        assert_eq!(fortune_score(75, 0, -0.6, -0.6, &cfg), 0);
    }

    #[test]
    fn oscillation_completes_two_cycles() {
        let cfg = FortuneConfig {
            jitter_amplitude: 0.0,
            ..FortuneConfig::default()
        };
        assert_eq!(fortune_score(25, 50, 0.0, 0.0, &cfg), 50);
        assert_eq!(fortune_score(50, 50, 0.0, 0.0, &cfg), 50);
        // 20·sin(0.4π) ≈ 19.02
        assert_eq!(fortune_score(10, 50, 0.0, 0.0, &cfg), 69);
        assert_eq!(fortune_score(40, 50, 0.0, 0.0, &cfg), 31);
        assert_eq!(fortune_score(60, 50, 0.0, 0.0, &cfg), 69);
    }

    // ── tags ──

    #[test]
    fn tag_buckets() {
        assert_eq!(FortuneTag::from_score(81), FortuneTag::Peak);
        assert_eq!(FortuneTag::from_score(80), FortuneTag::Rising);
        assert_eq!(FortuneTag::from_score(61), FortuneTag::Rising);
        assert_eq!(FortuneTag::from_score(60), FortuneTag::Steady);
        assert_eq!(FortuneTag::from_score(41), FortuneTag::Steady);
        assert_eq!(FortuneTag::from_score(40), FortuneTag::Sluggish);
        assert_eq!(FortuneTag::from_score(21), FortuneTag::Sluggish);
        assert_eq!(FortuneTag::from_score(20), FortuneTag::Trough);
        assert_eq!(FortuneTag::from_score(0), FortuneTag::Trough);
    }

    // ── peak window ──

    #[test]
    fn no_peak_when_nothing_above_threshold() {
        assert!(peak_window(&points(&[50, 80, 80, 10]), 80).is_none());
    }

    #[test]
    fn highest_run_wins() {
        let pts = points(&[85, 86, 50, 90, 95, 91, 40, 82]);
        let w = peak_window(&pts, 80).unwrap();
        assert_eq!((w.start_age, w.end_age), (3, 5));
        assert_eq!((w.peak_age, w.peak_score), (4, 95));
    }

    #[test]
    fn tie_goes_to_first_run() {
        let pts = points(&[90, 50, 90, 90]);
        let w = peak_window(&pts, 80).unwrap();
        assert_eq!((w.start_age, w.end_age), (0, 0));
    }

    #[test]
    fn run_reaching_end_is_closed() {
        let pts = points(&[10, 20, 81, 99]);
        let w = peak_window(&pts, 80).unwrap();
        assert_eq!((w.start_age, w.end_age, w.peak_score), (2, 3, 99));
    }

    #[test]
    fn current_score_is_age_thirty() {
        let scores: Vec<u32> = (0..=100).collect();
        let curve = FortuneCurve {
            points: points(&scores),
            peak: None,
        };
        assert_eq!(curve.current_score(), Some(30));
        let short = FortuneCurve {
            points: points(&[1, 2, 3]),
            peak: None,
        };
        assert_eq!(short.current_score(), Some(3));
    }
}
