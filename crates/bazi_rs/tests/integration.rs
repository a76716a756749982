//! Integration tests for the convenience API (default astronomical calendar).

use bazi_rs::*;

#[test]
fn reading_end_to_end() {
    let r = reading("1990-05-15", "10:00", Gender::Male).unwrap();
    assert_eq!(r.chart.to_string(), "庚午 辛巳 庚辰 辛巳");
    assert_eq!(r.gender, Gender::Male);
    assert_eq!(r.profile.subject, Element::Metal);
    assert_eq!(r.luck.direction, LuckDirection::Forward);
    assert_eq!(r.luck.pillars.len(), 10);

    let curve = r.curve.as_ref().unwrap();
    assert_eq!(curve.points.len(), 101);
    assert_eq!(curve.points[0].year, 1990);
    assert!(curve.points.iter().all(|p| p.score <= 100));
    assert_eq!(r.career.subject, Element::Metal);
}

#[test]
fn gender_flips_direction() {
    let m = reading("1990-05-15", "10:00", Gender::Male).unwrap();
    let f = reading("1990-05-15", "10:00", Gender::Female).unwrap();
    assert_eq!(m.chart, f.chart);
    assert_eq!(f.luck.direction, LuckDirection::Reverse);
    assert_eq!(f.luck.pillars[0].pillar.to_string(), "庚辰");
}

#[test]
fn malformed_input_is_absent() {
    assert!(reading("1990-13-01", "10:00", Gender::Male).is_none());
    assert!(reading("1990-05-15", "25:00", Gender::Male).is_none());
    assert!(reading("", "10:00", Gender::Female).is_none());
}

#[test]
fn try_reading_reports_cause() {
    assert!(matches!(
        try_reading("not-a-date", "10:00", Gender::Male),
        Err(BaziError::Time(_))
    ));
    assert!(matches!(
        try_reading("1500-01-01", "10:00", Gender::Male),
        Err(BaziError::Calendar(_))
    ));
}

#[test]
fn gender_text_is_parsed() {
    let r = reading_from_strs("1990-05-15", "10:00", "女").unwrap();
    assert_eq!(r.gender, Gender::Female);
    assert_eq!(r.luck.direction, LuckDirection::Reverse);
    let r = reading_from_strs("1990-05-15", "10:00", " Male ").unwrap();
    assert_eq!(r.luck.direction, LuckDirection::Forward);
}

#[test]
fn unknown_gender_text_is_a_parse_error() {
    assert_eq!(
        reading_from_strs("1990-05-15", "10:00", "x").unwrap_err(),
        BaziError::Parse(ParseError::Gender("x".to_string()))
    );
    // gender is checked before the date
    assert!(matches!(
        reading_from_strs("not-a-date", "10:00", "x"),
        Err(BaziError::Parse(_))
    ));
}

#[test]
fn deterministic() {
    let a = reading("2001-09-11", "08:46", Gender::Female).unwrap();
    let b = reading("2001-09-11", "08:46", Gender::Female).unwrap();
    assert_eq!(a, b);
}

#[test]
fn chart_only() {
    assert_eq!(
        chart("2024-01-01", "12:30").unwrap().to_string(),
        "癸卯 甲子 甲子 庚午"
    );
}

#[test]
fn solar_terms_table() {
    let table = solar_terms(2024).unwrap();
    assert_eq!(table.events.len(), 24);
    let lichun = table.event(SolarTerm::BeginningOfSpring).unwrap();
    assert_eq!((lichun.moment.month, lichun.moment.day), (2, 4));
    assert!(solar_terms(3000).is_err());
}

#[test]
fn reading_with_custom_calendar() {
    let cal = AstronomicalCalendar::new(CalendarConfig::with_utc_offset(0.0)).unwrap();
    let birth = CivilDateTime::new(2024, 1, 1, 12, 30).unwrap();
    let r = reading_with(&birth, Gender::Male, &cal, &FortuneConfig::default()).unwrap();
    assert_eq!(r.chart.day().to_string(), "甲子");
}
