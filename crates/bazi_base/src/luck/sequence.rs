//! Luck pillar direction and sequence generation.

use tracing::debug;

use super::onset::onset_age;
use super::types::{LuckDirection, LuckPillar, LuckPillars};
use crate::calendar::CalendarService;
use crate::chart::{BaziChart, Gender};
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Number of luck pillars generated per chart.
pub const LUCK_PILLAR_COUNT: u32 = 10;

/// Years covered by each luck pillar.
pub const LUCK_PILLAR_SPAN: u32 = 10;

/// Forward iff a yang year stem meets a male subject or a yin year stem
/// meets a female subject.
pub const fn luck_direction(year_stem: Stem, gender: Gender) -> LuckDirection {
    match (year_stem.is_yang(), gender) {
        (true, Gender::Male) | (false, Gender::Female) => LuckDirection::Forward,
        _ => LuckDirection::Reverse,
    }
}

/// Ten luck pillars walked from the month pillar.
///
/// Entry `i` is the month pillar moved `i + 1` steps in `direction`, so the
/// month pillar itself never appears. Its age window is
/// `[onset + 10i, onset + 10(i+1) - 1]`.
pub fn luck_sequence(month: Pillar, direction: LuckDirection, onset_years: u32) -> Vec<LuckPillar> {
    (0..LUCK_PILLAR_COUNT)
        .map(|i| {
            let start_age = onset_years + LUCK_PILLAR_SPAN * i;
            LuckPillar {
                pillar: month.offset(direction.step() * (i as i32 + 1)),
                start_age,
                end_age: start_age + LUCK_PILLAR_SPAN - 1,
            }
        })
        .collect()
}

/// Direction, onset and sequence for a chart.
pub fn luck_pillars<C>(chart: &BaziChart, gender: Gender, calendar: &C) -> LuckPillars
where
    C: CalendarService + ?Sized,
{
    let direction = luck_direction(chart.year().stem(), gender);
    let onset = onset_age(&chart.birth(), direction, calendar);
    let pillars = luck_sequence(chart.month(), direction, onset.years);
    debug!(
        %direction,
        onset = %onset,
        fallback = onset.is_fallback,
        "luck pillars computed"
    );
    LuckPillars {
        direction,
        onset,
        pillars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn direction_table() {
        assert_eq!(luck_direction(Stem::Jia, Gender::Male), LuckDirection::Forward);
        assert_eq!(luck_direction(Stem::Jia, Gender::Female), LuckDirection::Reverse);
        assert_eq!(luck_direction(Stem::Yi, Gender::Male), LuckDirection::Reverse);
        assert_eq!(luck_direction(Stem::Yi, Gender::Female), LuckDirection::Forward);
    }

    #[test]
    fn direction_depends_only_on_polarity() {
        for s in ALL_STEMS {
            let expected = if s.is_yang() {
                LuckDirection::Forward
            } else {
                LuckDirection::Reverse
            };
            assert_eq!(luck_direction(s, Gender::Male), expected);
            assert_ne!(luck_direction(s, Gender::Female), expected);
        }
    }

    #[test]
    fn forward_sequence_skips_month() {
        let month: Pillar = "丙寅".parse().unwrap();
        let seq = luck_sequence(month, LuckDirection::Forward, 3);
        assert_eq!(seq.len(), 10);
        assert_eq!(seq[0].pillar.to_string(), "丁卯");
        assert_eq!(seq[1].pillar.to_string(), "戊辰");
        assert_eq!(seq[9].pillar.to_string(), "丙子");
        assert!(seq.iter().all(|lp| lp.pillar != month));
    }

    #[test]
    fn reverse_sequence_wraps_cycle() {
        let month: Pillar = "甲子".parse().unwrap();
        let seq = luck_sequence(month, LuckDirection::Reverse, 1);
        assert_eq!(seq[0].pillar.to_string(), "癸亥");
        assert_eq!(seq[1].pillar.to_string(), "壬戌");
    }

    #[test]
    fn windows_are_contiguous_decades() {
        let month: Pillar = "庚午".parse().unwrap();
        let seq = luck_sequence(month, LuckDirection::Forward, 7);
        assert_eq!(seq[0].start_age, 7);
        assert_eq!(seq[0].end_age, 16);
        for pair in seq.windows(2) {
            assert_eq!(pair[1].start_age, pair[0].end_age + 1);
        }
        for lp in &seq {
            assert_eq!(lp.end_age - lp.start_age + 1, LUCK_PILLAR_SPAN);
        }
    }
}
