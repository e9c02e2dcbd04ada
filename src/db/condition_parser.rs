//! Parsing of free-text mapping cells into guarded type branches.
//!
//! A documentation cell is either a single type token (`INT4`) or a block of
//! lines such as
//!
//! ```text
//! If scale is < 0: REAL8
//! If scale is 0 and precision <= 2: INT1
//! Length <= 4000 bytes: STRING
//! ```
//!
//! Every cell yields at least one [`ParsedCondition`]. Text that cannot be
//! read as a condition block is passed through as a single unconditional
//! entry.

use once_cell::sync::Lazy;
use regex::Regex;

use super::schema::{GuardKind, ParsedCondition, PrecisionRule, ScaleRule};
use super::vocabulary::is_simple_type;

static LEADING_KEYWORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:if|when|length)\b").unwrap());

static KEYWORD_GUARD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:if|when)\b\s*(.*?)\s*:\s*(.+)$").unwrap());

static KEYWORD_PREFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:if|when)\b\s*").unwrap());

static TYPE_PAYLOAD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)(\s*\(.*\))?").unwrap());

static SCALE_NEGATIVE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s*0\b|negative").unwrap());

static SCALE_ZERO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\bis|(?:^|[^<>!])=)\s*0\b").unwrap());

/// Checked in order, the first hit wins.
static PRECISION_RULES: Lazy<Vec<(Regex, PrecisionRule)>> = Lazy::new(|| {
    [
        (r"(?:^|[^<>!])=\s*0\b", PrecisionRule::Zero),
        (r"<=\s*2\b", PrecisionRule::AtMost2),
        (r">\s*2\s+and\s+(?:precision\s*)?<=\s*4\b", PrecisionRule::Between2And4),
        (r">\s*4\s+and\s+(?:precision\s*)?<=\s*9\b", PrecisionRule::Between4And9),
        (r">\s*9\b", PrecisionRule::Above9),
    ]
    .into_iter()
    .map(|(pattern, rule)| (Regex::new(pattern).unwrap(), rule))
    .collect()
});

const DEFAULT_GUARDS: &[&str] = &["all other cases", "default", "otherwise"];

/// Parse one mapping cell into its guarded branches, in source order.
pub fn parse(raw_text: &str) -> Vec<ParsedCondition> {
    let text = raw_text.trim();

    if is_simple_type(text) {
        return vec![ParsedCondition::unconditional(text)];
    }

    let mut parsed = Vec::new();
    let mut current_condition: Option<String> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let payload = if is_condition_line(line) {
            let (guard, payload) = split_guard_line(line);
            current_condition = Some(guard).filter(|g| !g.is_empty());
            payload
        } else {
            Some(line)
        };

        if let Some(entry) =
            payload.and_then(|p| branch_from_payload(p, current_condition.as_deref()))
        {
            parsed.push(entry);
        }
    }

    if parsed.is_empty() {
        log::debug!("No condition branches in {:?}, passing it through", text);
        parsed.push(ParsedCondition::unconditional(text));
    }

    parsed
}

/// Lines that open or carry a guard rather than only naming a type.
fn is_condition_line(line: &str) -> bool {
    LEADING_KEYWORD_PATTERN.is_match(line)
        || line.contains("<=")
        || line.contains('>')
        || line.contains(':')
}

/// Split a condition line into its guard and the type payload on the same
/// line, if any.
fn split_guard_line(line: &str) -> (String, Option<&str>) {
    if let Some(caps) = KEYWORD_GUARD_PATTERN.captures(line) {
        let guard = caps.get(1).map_or("", |m| m.as_str());
        let payload = caps.get(2).map(|m| m.as_str().trim());
        return (guard.trim().to_string(), payload.filter(|p| !p.is_empty()));
    }

    if line.matches(':').count() == 1 {
        if let Some((guard, payload)) = line.split_once(':') {
            let payload = payload.trim();
            return (
                guard.trim().to_string(),
                Some(payload).filter(|p| !p.is_empty()),
            );
        }
    }

    (line.to_string(), None)
}

fn branch_from_payload(payload: &str, condition: Option<&str>) -> Option<ParsedCondition> {
    let type_name = if is_simple_type(payload) {
        payload.to_string()
    } else {
        let caps = TYPE_PAYLOAD_PATTERN.captures(payload)?;
        let base = caps.get(1)?.as_str();
        if !is_simple_type(base) {
            return None;
        }
        let detail = caps.get(2).map_or("", |m| m.as_str());
        format!("{}{}", base, detail)
    };

    Some(ParsedCondition {
        type_name,
        condition: condition.map(str::to_string),
        kind: condition.map_or(GuardKind::Unconditional, classify_guard),
    })
}

/// Classify a guard. Scale wins over precision, precision over length, and
/// length over the generic forms.
pub fn classify_guard(guard: &str) -> GuardKind {
    let lower = guard.trim().to_lowercase();
    let lower = KEYWORD_PREFIX_PATTERN.replace(&lower, "");
    let lower = lower.trim_end_matches(':').trim();

    if let Some((_, rest)) = lower.split_once("scale") {
        return GuardKind::Scale(scale_rule(rest));
    }
    if let Some((_, rest)) = lower.split_once("precision") {
        return GuardKind::Precision(precision_rule(rest));
    }
    if lower.starts_with("length") || lower.contains(" length") {
        return GuardKind::Length;
    }
    if DEFAULT_GUARDS.contains(&lower) {
        return GuardKind::Default;
    }
    GuardKind::Generic
}

fn scale_rule(rest: &str) -> ScaleRule {
    if SCALE_NEGATIVE_PATTERN.is_match(rest) {
        ScaleRule::Negative
    } else if SCALE_ZERO_PATTERN.is_match(rest) {
        ScaleRule::Zero
    } else {
        ScaleRule::Other
    }
}

fn precision_rule(rest: &str) -> PrecisionRule {
    PRECISION_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(rest))
        .map_or(PrecisionRule::Other, |(_, rule)| *rule)
}
