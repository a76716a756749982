//! Prompt construction from a [`ChartSnapshot`].

use std::fmt::Write;

use crate::snapshot::ChartSnapshot;

/// System message sent with every request.
pub const SYSTEM_MESSAGE: &str = "You are an experienced Four Pillars (八字) analyst. \
Ground every statement in the chart that is given; do not invent pillars or luck periods.";

/// Luck pillars as `"壬午(1997) 癸未(2007) ..."`.
pub fn luck_line(snapshot: &ChartSnapshot) -> String {
    snapshot
        .luck
        .pillars
        .iter()
        .map(|lp| format!("{}({})", lp.pillar, lp.start_year))
        .collect::<Vec<_>>()
        .join(" ")
}

fn chart_section(snapshot: &ChartSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gender: {}", snapshot.gender);
    let _ = writeln!(out, "Birth: {}", snapshot.birth);
    if let Some(loc) = &snapshot.birth_location {
        let _ = writeln!(out, "Birth location: {loc}");
    }
    let _ = writeln!(
        out,
        "Pillars (year month day hour): {}",
        snapshot.pillars.joined()
    );
    let scores = snapshot
        .element_scores
        .iter()
        .map(|s| format!("{}{} {}", s.element, s.glyph, s.score))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "Element scores: {scores}");
    let _ = writeln!(
        out,
        "Day master element: {} ({})",
        snapshot.subject, snapshot.body_strength
    );
    let _ = writeln!(
        out,
        "Luck pillars ({}, onset {}): {}",
        snapshot.luck.direction,
        snapshot.luck.onset_detail,
        luck_line(snapshot)
    );
    out
}

/// Full analysis prompt.
///
/// With `include_element_json` the model is also asked to close with the
/// fenced element-advice block parsed by
/// [`parse_element_advice`](crate::parser::parse_element_advice).
pub fn analysis_prompt(snapshot: &ChartSnapshot, include_element_json: bool) -> String {
    let mut prompt = String::from(
        "Analyse the following Four Pillars chart as a professional practitioner, \
         using classical five-element generation and control together with the \
         clashes and combinations between pillars.\n\n",
    );
    prompt.push_str(&chart_section(snapshot));

    if let Some(events) = &snapshot.life_events {
        let _ = writeln!(
            prompt,
            "\nKnown life events, for calibration: {events}"
        );
    }

    prompt.push_str(
        "\nLuck pillars run forward for a yang year stem with a male chart or a yin \
         year stem with a female chart, and backward otherwise, starting from the \
         month pillar.\n\
         \nCover, in order:\n\
         1. Overall structure and the balance of the day master.\n\
         2. Each luck pillar in turn: wealth, health and career.\n\
         3. Notable years within the current and next luck pillar.\n\
         4. Practical guidance. Put each recommendation on its own line starting \
         with \"Suggestion:\" and each caution on its own line starting with \"Note:\".\n",
    );

    if include_element_json {
        prompt.push_str("5. Finish with the favorable and unfavorable elements as JSON in a fenced code block:\n");
        prompt.push_str(ELEMENT_JSON_BLOCK);
    }
    prompt.push_str("\nFormat the answer as Markdown.");
    prompt
}

const ELEMENT_JSON_BLOCK: &str = "```json\n\
{\n  \"favorable\": [\"Water\", \"Metal\"],\n  \"unfavorable\": [\"Fire\"],\n  \"advice\": \"...\"\n}\n\
```\n";

/// Short prompt asking only for the element-advice block.
pub fn element_advice_prompt(snapshot: &ChartSnapshot) -> String {
    let mut prompt = String::from(
        "Determine the favorable (喜用神) and unfavorable (忌神) elements for this chart.\n\n",
    );
    prompt.push_str(&chart_section(snapshot));
    prompt.push_str("\nAnswer with a single fenced JSON block and nothing else:\n");
    prompt.push_str(ELEMENT_JSON_BLOCK);
    prompt
}
