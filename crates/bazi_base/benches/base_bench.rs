use bazi_base::{
    BaziChart, Branch, CalendarError, CalendarService, Element, FortuneConfig, Gender, LuckDirection, Pillar,
    SexagenaryDate, SolarTerm, SolarTermEvent, SolarTermTable, Stem, element_profile,
    fortune_curve, fortune_score, hour_pillar, interaction_coefficient, luck_pillars,
    luck_sequence, month_pillar,
};
use bazi_time::CivilDateTime;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Every moment maps to the same pillars; one boundary per month on the 6th.
struct FlatCalendar;

impl CalendarService for FlatCalendar {
    fn sexagenary_date(&self, _: &CivilDateTime) -> Result<SexagenaryDate, CalendarError> {
        Ok(SexagenaryDate {
            year: Pillar::for_year_number(1990),
            month: month_pillar(Stem::Geng, Branch::Si),
            day: Pillar::from_cycle_index(17),
        })
    }

    fn solar_terms(&self, year: i32) -> Result<SolarTermTable, CalendarError> {
        let mut events = Vec::with_capacity(12);
        for m in 1..=12u32 {
            events.push(SolarTermEvent {
                term: SolarTerm::from_index(((m - 1) * 2) as u8),
                moment: CivilDateTime::new(year, m, 6, 0, 0)?,
            });
        }
        Ok(SolarTermTable::new(year, events))
    }
}

fn primitives_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(Stem::Yi), black_box(13)))
    });
    group.bench_function("interaction_coefficient", |b| {
        b.iter(|| interaction_coefficient(black_box(Element::Wood), black_box(Element::Metal)))
    });
    group.bench_function("fortune_score", |b| {
        let cfg = FortuneConfig::default();
        b.iter(|| fortune_score(black_box(42), 36, 0.8, -0.6, &cfg))
    });
    group.bench_function("luck_sequence", |b| {
        let month = month_pillar(Stem::Geng, Branch::Si);
        b.iter(|| luck_sequence(black_box(month), LuckDirection::Forward, black_box(7)))
    });
    group.finish();
}

fn pipeline_bench(c: &mut Criterion) {
    let cal = FlatCalendar;
    let birth = CivilDateTime::new(1990, 5, 15, 10, 0).unwrap();
    let chart = BaziChart::compute(&birth, &cal).unwrap();
    let profile = element_profile(&chart);
    let luck = luck_pillars(&chart, Gender::Male, &cal);
    let cfg = FortuneConfig::default();

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("element_profile", |b| {
        b.iter(|| element_profile(black_box(&chart)))
    });
    group.bench_function("luck_pillars", |b| {
        b.iter(|| luck_pillars(black_box(&chart), Gender::Male, &cal))
    });
    group.bench_function("fortune_curve", |b| {
        b.iter(|| fortune_curve(black_box(&chart), &profile, &luck, &cal, &cfg))
    });
    group.finish();
}

criterion_group!(benches, primitives_bench, pipeline_bench);
criterion_main!(benches);
