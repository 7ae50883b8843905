use serde_json::Value;

use crate::error::ExtractError;
use crate::types::{Deliverable, Plan, Workstream};

/// Turn raw model output into a validated plan.
///
/// Models add fences and prose around the JSON they were told to return
/// alone, so the pipeline strips fences, grabs the first-`{`-to-last-`}`
/// region, parses it, then normalizes workstream by workstream. All-or-
/// nothing at the top level: either a non-empty plan comes back, or an
/// error describing the first stage that gave up.
pub fn extract_plan(raw: &str) -> Result<Plan, ExtractError> {
    let cleaned = strip_code_fences(raw);
    let region = find_json_object(&cleaned).ok_or(ExtractError::NoJsonObject)?;
    let data: Value = serde_json::from_str(region)?;

    let sources = data
        .get("workstreams")
        .and_then(Value::as_array)
        .ok_or(ExtractError::MissingWorkstreams)?;

    let workstreams: Vec<Workstream> = sources
        .iter()
        .enumerate()
        .filter_map(|(idx, ws)| normalize_workstream(ws, idx))
        .collect();

    if workstreams.is_empty() {
        return Err(ExtractError::EmptyPlan);
    }
    Ok(Plan { workstreams })
}

/// Remove ``` fences, swallowing a `json` language tag right after an
/// opening fence, then trim.
fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        if rest.get(..4).is_some_and(|tag| tag.eq_ignore_ascii_case("json")) {
            rest = &rest[4..];
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Greedy match from the first `{` to the last `}`. Tolerates leading and
/// trailing prose around the object.
fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Drop the workstream when its title is blank; otherwise trim fields and
/// synthesize a position letter when the id is missing or blank.
fn normalize_workstream(ws: &Value, idx: usize) -> Option<Workstream> {
    let id = string_field(ws, "id").unwrap_or_else(|| position_letter(idx));
    let title = string_field(ws, "title")?;
    let description = string_field(ws, "description").unwrap_or_default();

    let deliverables = ws
        .get("deliverables")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(d_idx, d)| normalize_deliverable(d, &id, d_idx))
                .collect()
        })
        .unwrap_or_default();

    // A workstream with zero surviving deliverables is still valid.
    Some(Workstream {
        id,
        title,
        description,
        deliverables,
    })
}

fn normalize_deliverable(d: &Value, ws_id: &str, idx: usize) -> Option<Deliverable> {
    let id = string_field(d, "id").unwrap_or_else(|| format!("{}{}", ws_id, idx + 1));
    let title = string_field(d, "title")?;
    let description = string_field(d, "description").unwrap_or_default();
    Some(Deliverable {
        id,
        title,
        description,
    })
}

/// Trimmed string field, `None` when missing, non-string, or blank.
fn string_field(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// A, B, C... by position, matching the ids the planning prompt asks for.
/// Falls back to the 1-based position once letters run out.
fn position_letter(idx: usize) -> String {
    u8::try_from(idx)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| ((b'A' + i) as char).to_string())
        .unwrap_or_else(|| (idx + 1).to_string())
}
