use std::path::PathBuf;

use bazi_narrative::{ChartSnapshot, NarrativeConfig, NarrativeService};
use bazi_rs::{
    AstronomicalCalendar, CalendarConfig, CalendarService, CivilDateTime, FortuneConfig, Gender,
    Reading, reading_with,
};
use clap::{Args, Parser, Subcommand};
use tokio::runtime::Runtime;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bazi", about = "BaZi Four Pillars chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD), local clock
    #[arg(long)]
    date: String,
    /// Birth time (HH:mm, 24-hour), local clock
    #[arg(long)]
    time: String,
    /// male or female
    #[arg(long, default_value = "male")]
    gender: Gender,
    /// Local clock offset from UT in hours
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    utc_offset: f64,
}

#[derive(Args)]
struct ContextArgs {
    /// Birth place, passed to the narrative prompt
    #[arg(long)]
    location: Option<String>,
    /// Known life events, passed to the narrative prompt
    #[arg(long)]
    events: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars, element profile and career hints
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Luck pillar direction, onset age and sequence
    Luck {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Fortune curve by age
    Curve {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print every Nth age
        #[arg(long, default_value_t = 5)]
        step: u32,
    },
    /// The 24 solar terms of a year
    Terms {
        year: i32,
        /// Local clock offset from UT in hours
        #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
        utc_offset: f64,
    },
    /// Chart snapshot as JSON
    Snapshot {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        context: ContextArgs,
    },
    /// Narrative analysis from the configured LLM provider
    Narrate {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        context: ContextArgs,
        /// TOML provider config; environment variables override it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Ask for the favorable/unfavorable element annotation instead
        #[arg(long)]
        advice: bool,
    },
}

fn load_calendar(utc_offset: f64) -> AstronomicalCalendar {
    AstronomicalCalendar::new(CalendarConfig::with_utc_offset(utc_offset)).unwrap_or_else(|e| {
        eprintln!("Invalid calendar config: {e}");
        std::process::exit(1);
    })
}

fn load_reading(birth: &BirthArgs) -> Reading {
    debug!(
        date = %birth.date,
        time = %birth.time,
        utc_offset = birth.utc_offset,
        "computing reading"
    );
    let moment = CivilDateTime::parse(&birth.date, &birth.time).unwrap_or_else(|e| {
        eprintln!("Invalid birth input: {e}");
        std::process::exit(1);
    });
    let calendar = load_calendar(birth.utc_offset);
    reading_with(&moment, birth.gender, &calendar, &FortuneConfig::default()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn build_snapshot(r: &Reading, context: ContextArgs) -> ChartSnapshot {
    let mut snap = ChartSnapshot::new(&r.chart, r.gender, &r.profile, &r.luck, r.curve.as_ref())
        .with_career(&r.career);
    if let Some(location) = context.location {
        snap = snap.with_birth_location(location);
    }
    if let Some(events) = context.events {
        snap = snap.with_life_events(events);
    }
    snap
}

fn load_narrative_config(path: Option<&PathBuf>) -> NarrativeConfig {
    let config = match path {
        Some(p) => NarrativeConfig::from_file(p).and_then(NarrativeConfig::merge_env),
        None => NarrativeConfig::from_env(),
    };
    config.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn print_chart(r: &Reading) {
    let c = &r.chart;
    let p = &r.profile;
    println!("Birth:      {} ({})", c.birth(), r.gender);
    println!("Pillars:    {}  (year month day hour)", c);
    println!(
        "Day master: {} {} {}, {}",
        c.day_master(),
        p.subject.glyph(),
        p.subject,
        p.body_strength
    );
    let scores: Vec<String> = p
        .scores
        .iter()
        .map(|(e, s)| format!("{}{} {s}", e, e.glyph()))
        .collect();
    println!("Elements:   {}", scores.join("  "));
    println!("Strongest:  {}  Weakest: {}", p.strongest, p.weakest);
    println!("Career:     {}", r.career.summary());
    println!("  Industries: {}", r.career.industries.join(", "));
    println!("  Positions:  {}", r.career.positions.join(", "));
}

fn print_luck(r: &Reading) {
    let luck = &r.luck;
    let fallback = if luck.onset.is_fallback {
        " (default onset, solar terms unavailable)"
    } else {
        ""
    };
    println!(
        "Direction: {}  Onset: {}{fallback}",
        luck.direction,
        luck.onset.detail()
    );
    let birth_year = r.chart.birth().year;
    for lp in &luck.pillars {
        let (from, to) = lp.calendar_years(birth_year);
        println!(
            "  {}  age {:>3}-{:<3} {from}-{to}",
            lp.pillar, lp.start_age, lp.end_age
        );
    }
}

fn print_curve(r: &Reading, step: u32) {
    let Some(curve) = &r.curve else {
        eprintln!("Fortune curve unavailable for this chart");
        std::process::exit(1);
    };
    println!(
        "{:>4} {:>5} {:>5} {:>5} {:>5} {:>6}  tag",
        "age", "year", "score", "trend", "luck", "annual"
    );
    for pt in curve.points.iter().filter(|pt| pt.age % step.max(1) == 0) {
        let luck = pt
            .luck
            .map(|lp| lp.pillar.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:>4} {:>5} {:>5} {:>5} {:>5} {:>6}  {}",
            pt.age,
            pt.year,
            pt.score,
            pt.trend.name(),
            luck,
            pt.annual.to_string(),
            pt.tag.name()
        );
    }
    match curve.peak {
        Some(w) => println!(
            "Peak window: age {}-{}, highest {} at {}",
            w.start_age, w.end_age, w.peak_score, w.peak_age
        ),
        None => println!("Peak window: none"),
    }
    if let Some(score) = curve.current_score() {
        println!("Current score: {score}");
    }
}

fn print_terms(year: i32, utc_offset: f64) {
    let calendar = load_calendar(utc_offset);
    match calendar.solar_terms(year) {
        Ok(table) => {
            for ev in &table.events {
                let marker = if ev.term.is_month_boundary() { "*" } else { " " };
                println!("{marker} {} {:<20} {}", ev.term, ev.term.name(), ev.moment);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn log_dispatch(config: &NarrativeConfig, advice: bool) {
    info!(
        provider = config.provider.name(),
        model = config.model_name(),
        advice,
        "dispatching narrative request"
    );
}

fn narrate(snapshot: &ChartSnapshot, config: NarrativeConfig, advice: bool) {
    log_dispatch(&config, advice);
    let service = NarrativeService::new(config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let rt = Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to start async runtime: {e}");
        std::process::exit(1);
    });

    if advice {
        match rt.block_on(service.element_advice(snapshot)) {
            Ok(a) => {
                println!("Favorable:   {}", a.favorable.join(", "));
                println!("Unfavorable: {}", a.unfavorable.join(", "));
                if let Some(text) = a.advice {
                    println!("Advice:      {text}");
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    match rt.block_on(service.analyze(snapshot)) {
        Ok(resp) => {
            println!("{}", resp.analysis);
            if !resp.suggestions.is_empty() {
                println!("\nSuggestions:");
                for s in &resp.suggestions {
                    println!("  - {s}");
                }
            }
            if !resp.warnings.is_empty() {
                println!("\nCautions:");
                for w in &resp.warnings {
                    println!("  - {w}");
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { birth } => print_chart(&load_reading(&birth)),
        Commands::Luck { birth } => print_luck(&load_reading(&birth)),
        Commands::Curve { birth, step } => print_curve(&load_reading(&birth), step),
        Commands::Terms { year, utc_offset } => print_terms(year, utc_offset),
        Commands::Snapshot { birth, context } => {
            let snapshot = build_snapshot(&load_reading(&birth), context);
            match snapshot.to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Narrate {
            birth,
            context,
            config,
            advice,
        } => {
            let snapshot = build_snapshot(&load_reading(&birth), context);
            let config = load_narrative_config(config.as_ref());
            narrate(&snapshot, config, advice);
        }
    }
}
