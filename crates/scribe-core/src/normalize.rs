//! Research brief extraction from backend responses of uncertain shape.
//!
//! The research agent has shipped several response conventions: a list under
//! `research_briefs`, a single object under `brief` or `data`, or the bare
//! brief. [`normalize_brief`] walks an ordered rule table and the first rule
//! that matches decides the outcome.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ScribeError, ScribeResult};
use crate::model::ResearchBrief;

/// Which rule located the brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BriefSource {
    /// First element of the `research_briefs` array.
    ResearchBriefs,
    /// The nested `brief` object.
    Brief,
    /// The nested `data` object.
    Data,
    /// The response object itself.
    Bare,
}

/// A brief located inside a backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBrief {
    pub source: BriefSource,
    /// The brief exactly as the backend sent it.
    pub raw: Map<String, Value>,
}

impl NormalizedBrief {
    /// Typed view of the brief.
    pub fn brief(&self) -> ResearchBrief {
        ResearchBrief::from_object(&self.raw)
    }

    /// The brief as a JSON string, ready to forward to the writing agent.
    pub fn to_json_string(&self) -> ScribeResult<String> {
        Ok(serde_json::to_string(&self.raw)?)
    }
}

/// Outcome of a single rule.
enum RuleMatch<'a> {
    /// The rule does not apply; try the next one.
    Skip,
    /// The rule applies and yields this object.
    Found(&'a Map<String, Value>),
    /// The rule applies but holds no usable brief. Stops the search.
    Empty,
}

type Rule = fn(&Value) -> RuleMatch<'_>;

/// Extraction rules in precedence order.
const RULES: [(BriefSource, Rule); 4] = [
    (BriefSource::ResearchBriefs, first_research_brief),
    (BriefSource::Brief, nested_brief),
    (BriefSource::Data, nested_data),
    (BriefSource::Bare, bare_object),
];

fn first_research_brief(value: &Value) -> RuleMatch<'_> {
    match value.get("research_briefs") {
        Some(Value::Array(briefs)) => match briefs.first() {
            Some(Value::Object(first)) => RuleMatch::Found(first),
            _ => RuleMatch::Empty,
        },
        _ => RuleMatch::Skip,
    }
}

fn nested_object<'a>(value: &'a Value, key: &str) -> RuleMatch<'a> {
    match value.get(key) {
        Some(Value::Object(inner)) => RuleMatch::Found(inner),
        _ => RuleMatch::Skip,
    }
}

fn nested_brief(value: &Value) -> RuleMatch<'_> {
    nested_object(value, "brief")
}

fn nested_data(value: &Value) -> RuleMatch<'_> {
    nested_object(value, "data")
}

fn bare_object(value: &Value) -> RuleMatch<'_> {
    match value {
        Value::Object(object) => RuleMatch::Found(object),
        _ => RuleMatch::Skip,
    }
}

/// Locate the single brief the writing step should use.
///
/// Fails with [`ScribeError::BriefNotFound`] for arrays, null, primitives and
/// an empty `research_briefs` list.
pub fn normalize_brief(value: &Value) -> ScribeResult<NormalizedBrief> {
    for (source, rule) in RULES {
        match rule(value) {
            RuleMatch::Skip => continue,
            RuleMatch::Found(raw) => {
                debug!(?source, fields = raw.len(), "Located research brief");
                return Ok(NormalizedBrief {
                    source,
                    raw: raw.clone(),
                });
            }
            RuleMatch::Empty => {
                debug!(?source, "Matched rule holds no brief");
                return Err(ScribeError::BriefNotFound);
            }
        }
    }
    Err(ScribeError::BriefNotFound)
}

/// Every brief in a research response, for listing.
///
/// Uses the `research_briefs` array, then a bare array of objects, then the
/// single brief [`normalize_brief`] finds. Non-object entries are skipped.
pub fn brief_list(value: &Value) -> Vec<ResearchBrief> {
    let objects = |items: &Vec<Value>| -> Vec<ResearchBrief> {
        items
            .iter()
            .filter_map(Value::as_object)
            .map(ResearchBrief::from_object)
            .collect()
    };

    match value {
        Value::Object(object) => match object.get("research_briefs") {
            Some(Value::Array(items)) => objects(items),
            _ => normalize_brief(value)
                .map(|found| vec![found.brief()])
                .unwrap_or_default(),
        },
        Value::Array(items) => objects(items),
        _ => Vec::new(),
    }
}
