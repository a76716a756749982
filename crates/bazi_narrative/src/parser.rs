//! Parse provider text into structured narrative pieces.
//!
//! The element annotation extracted here is display-only. It never feeds
//! back into chart computation.

use bazi_base::{ALL_ELEMENTS, Element};
use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, Result};

/// Favorable / unfavorable element annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementAdvice {
    #[serde(alias = "favorableGods")]
    pub favorable: Vec<String>,
    #[serde(default, alias = "unfavorableGods")]
    pub unfavorable: Vec<String>,
    #[serde(default)]
    pub advice: Option<String>,
}

impl ElementAdvice {
    /// Entries of `favorable` that name one of the five elements.
    pub fn favorable_elements(&self) -> Vec<Element> {
        self.favorable.iter().filter_map(|s| element_named(s)).collect()
    }

    pub fn unfavorable_elements(&self) -> Vec<Element> {
        self.unfavorable.iter().filter_map(|s| element_named(s)).collect()
    }
}

/// Match an English name or a single glyph.
fn element_named(s: &str) -> Option<Element> {
    let s = s.trim();
    ALL_ELEMENTS
        .iter()
        .copied()
        .find(|e| e.glyph() == s || e.name().eq_ignore_ascii_case(s))
}

/// Structured view of an analysis response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Free text with any element-advice JSON removed.
    pub analysis: String,
    pub suggestions: Vec<String>,
    pub warnings: Vec<String>,
    pub element_advice: Option<ElementAdvice>,
}

const SUGGESTION_TAGS: &[&str] = &["Suggestion:", "建议：", "建议:"];
const WARNING_TAGS: &[&str] = &["Note:", "注意：", "注意:"];

/// Outermost `{ ... }` span in `text`.
pub fn extract_json(text: &str) -> Result<&str> {
    let start = text
        .find('{')
        .ok_or_else(|| NarrativeError::Parse("no JSON object in response".into()))?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| NarrativeError::Parse("no closing brace in response".into()))?;
    Ok(&text[start..=end])
}

/// Byte range of the element-advice JSON, including a surrounding code fence.
fn element_json_span(text: &str) -> Option<(usize, usize)> {
    let key = text.find("\"favorable")?;
    let open = text[..key].rfind('{')?;
    let close = key + text[key..].find('}')?;
    let (mut start, mut end) = (open, close + 1);
    if let Some(fence) = text[..start].rfind("```") {
        let opener = text[fence..start]
            .trim_start_matches('`')
            .trim_start_matches("json")
            .trim();
        if opener.is_empty() {
            start = fence;
            if let Some(tail) = text[end..].find("```") {
                if text[end..end + tail].trim().is_empty() {
                    end += tail + 3;
                }
            }
        }
    }
    Some((start, end))
}

/// Remove the element-advice JSON block, fenced or bare.
pub fn strip_element_json(text: &str) -> String {
    match element_json_span(text) {
        Some((start, end)) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(text[..start].trim_end());
            let rest = text[end..].trim_start();
            if !rest.is_empty() {
                out.push_str("\n\n");
                out.push_str(rest);
            }
            out
        }
        None => text.trim().to_string(),
    }
}

/// Parse the element-advice JSON embedded in `text`.
pub fn parse_element_advice(text: &str) -> Result<ElementAdvice> {
    let json = match element_json_span(text) {
        Some((start, end)) => extract_json(&text[start..end])?,
        None => extract_json(text)?,
    };
    serde_json::from_str(json)
        .map_err(|e| NarrativeError::Parse(format!("element advice: {e}")))
}

/// Lines starting with any of `tags`, with the tag removed.
fn tagged_lines(text: &str, tags: &[&str]) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim().trim_start_matches(['-', '*', ' ']);
            tags.iter()
                .find_map(|tag| line.strip_prefix(tag))
                .map(|rest| rest.trim().to_string())
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split an analysis response into text, suggestions, warnings and the
/// optional element annotation.
///
/// With `strip_json` the annotation block is removed from `analysis`.
pub fn parse_analysis_response(text: &str, strip_json: bool) -> AnalysisResponse {
    let element_advice = element_json_span(text).and_then(|_| parse_element_advice(text).ok());
    let analysis = if strip_json {
        strip_element_json(text)
    } else {
        text.trim().to_string()
    };
    AnalysisResponse {
        suggestions: tagged_lines(&analysis, SUGGESTION_TAGS),
        warnings: tagged_lines(&analysis, WARNING_TAGS),
        analysis,
        element_advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = "## Overview\n\
The day master is weak.\n\
- Suggestion: work near water\n\
建议：多穿白色\n\
Note: avoid overwork in 2027\n\
注意: watch the liver\n\
\n\
```json\n\
{\"favorable\": [\"Water\", \"金\"], \"unfavorable\": [\"Fire\"], \"advice\": \"steady roles\"}\n\
```\n\
Closing words.";

    #[test]
    fn extract_json_simple() {
        let s = r#"{"a": 1}"#;
        assert_eq!(extract_json(s).unwrap(), s);
    }

    #[test]
    fn extract_json_with_surrounding_text() {
        let json = extract_json("here:\n{\"a\": {\"b\": 2}}\nthanks").unwrap();
        assert_eq!(json, "{\"a\": {\"b\": 2}}");
    }

    #[test]
    fn extract_json_missing() {
        assert!(matches!(extract_json("none"), Err(NarrativeError::Parse(_))));
        assert!(extract_json("} before {").is_err());
    }

    #[test]
    fn element_advice_from_fenced_block() {
        let advice = parse_element_advice(RESPONSE).unwrap();
        assert_eq!(advice.favorable, vec!["Water", "金"]);
        assert_eq!(advice.unfavorable, vec!["Fire"]);
        assert_eq!(advice.advice.as_deref(), Some("steady roles"));
        assert_eq!(
            advice.favorable_elements(),
            vec![Element::Water, Element::Metal]
        );
        assert_eq!(advice.unfavorable_elements(), vec![Element::Fire]);
    }

    #[test]
    fn element_advice_legacy_keys() {
        let advice =
            parse_element_advice(r#"{"favorableGods": ["印星"], "unfavorableGods": []}"#).unwrap();
        assert_eq!(advice.favorable, vec!["印星"]);
        assert!(advice.favorable_elements().is_empty());
        assert_eq!(advice.advice, None);
    }

    #[test]
    fn strip_removes_fence_and_json() {
        let stripped = strip_element_json(RESPONSE);
        assert!(!stripped.contains("```"));
        assert!(!stripped.contains("favorable"));
        assert!(stripped.starts_with("## Overview"));
        assert!(stripped.ends_with("Closing words."));
    }

    #[test]
    fn strip_without_json_is_identity() {
        assert_eq!(strip_element_json("  plain text \n"), "plain text");
    }

    #[test]
    fn tagged_lines_both_languages() {
        let r = parse_analysis_response(RESPONSE, true);
        assert_eq!(r.suggestions, vec!["work near water", "多穿白色"]);
        assert_eq!(r.warnings, vec!["avoid overwork in 2027", "watch the liver"]);
        assert!(r.element_advice.is_some());
        assert!(!r.analysis.contains("favorable"));
    }

    #[test]
    fn keep_json_when_not_stripping() {
        let r = parse_analysis_response(RESPONSE, false);
        assert!(r.analysis.contains("\"favorable\""));
        assert!(r.element_advice.is_some());
    }

    #[test]
    fn malformed_json_is_not_fatal() {
        let r = parse_analysis_response("text {\"favorable\": oops}", true);
        assert_eq!(r.element_advice, None);
        assert_eq!(r.analysis, "text");
    }
}
