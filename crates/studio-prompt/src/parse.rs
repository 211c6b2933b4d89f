//! Response parsing
//!
//! Generated text is untrusted formatting. Storyboards are normalized to
//! exactly [`STORYBOARD_STEPS`] lines. Creative answers go through three
//! named stages, each usable on its own:
//! 1. [`parse_strict_alternatives`]: the `### Alternative k: name` grammar
//! 2. [`reformat_loose_alternatives`]: "Alternative N" headers with inline `Type: value` pairs
//! 3. [`variation_blocks`]: two anonymous blocks from whatever pairs exist

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use studio_cards::CardCategory;
use studio_core::STORYBOARD_STEPS;

/// Value of a category no stage could fill
pub const NOT_SPECIFIED: &str = "Not specified";

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("valid numbering pattern"));

static STRICT_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^###\s+Alternative\s+(\d+)\s*:\s*(\S.*?)\s*$").expect("valid header pattern")
});

static STRICT_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^\s*(?:[-*]\s+)?\*\*(thing|sensor|action|feedback|service)\*\*\s*:\s*(\S.*?)\s*$")
        .expect("valid field pattern")
});

static LOOSE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^[\s#*_>\-]*alternative\s*(\d+)\b(.*)$").expect("valid loose header pattern")
});

static PAIR_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(thing|sensor|action|feedback|service)s?\b\**\s*:").expect("valid label pattern")
});

/// Normalize a storyboard response to exactly eight non-empty steps
///
/// Lines are trimmed, blank ones dropped, leading `N.` numbering removed,
/// extra lines truncated and missing ones padded with placeholders.
#[must_use]
pub fn parse_storyboard(text: &str) -> Vec<String> {
    let mut steps: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| LEADING_NUMBER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .take(STORYBOARD_STEPS)
        .collect();
    let parsed = steps.len();
    while steps.len() < STORYBOARD_STEPS {
        steps.push(placeholder_step(steps.len() + 1));
    }
    if parsed < STORYBOARD_STEPS {
        tracing::debug!(parsed, "storyboard response padded");
    }
    steps
}

/// Placeholder text for a missing step (1-based)
#[must_use]
pub fn placeholder_step(n: usize) -> String {
    format!("Step {n}: Continue the journey.")
}

/// Storyboard used when generation fails for an idea without one
#[must_use]
pub fn default_storyboard_steps() -> Vec<String> {
    parse_storyboard("")
}

/// One suggested card combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    /// Heading text after `### `
    pub heading: String,
    values: [String; 5],
}

impl Alternative {
    /// Alternative with every category unspecified
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            values: std::array::from_fn(|_| NOT_SPECIFIED.to_string()),
        }
    }

    #[must_use]
    pub fn value(&self, category: CardCategory) -> &str {
        &self.values[category.index()]
    }

    pub fn set_value(&mut self, category: CardCategory, value: impl Into<String>) {
        self.values[category.index()] = value.into();
    }

    #[must_use]
    pub fn is_specified(&self, category: CardCategory) -> bool {
        self.value(category) != NOT_SPECIFIED
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "### {}", self.heading)?;
        for category in CardCategory::ALL {
            write!(f, "\n**{}**: {}", category.label(), self.value(category))?;
        }
        Ok(())
    }
}

/// Stage that produced a creative parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    Strict,
    Reformatted,
    Variations,
}

/// Normalized creative answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreativeParse {
    pub stage: ParseStage,
    pub alternatives: Vec<Alternative>,
}

impl CreativeParse {
    /// Canonical markdown of all blocks
    #[must_use]
    pub fn to_markdown(&self) -> String {
        self.alternatives
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Run the three creative stages in order
#[must_use]
pub fn parse_creative(text: &str) -> CreativeParse {
    let strict = parse_strict_alternatives(text);
    if !strict.is_empty() {
        return CreativeParse {
            stage: ParseStage::Strict,
            alternatives: strict,
        };
    }
    let loose = reformat_loose_alternatives(text);
    if !loose.is_empty() {
        tracing::debug!(blocks = loose.len(), "creative response reformatted");
        return CreativeParse {
            stage: ParseStage::Reformatted,
            alternatives: loose,
        };
    }
    tracing::debug!("creative response degraded to variation blocks");
    CreativeParse {
        stage: ParseStage::Variations,
        alternatives: variation_blocks(text).to_vec(),
    }
}

fn category_of(label: &str) -> Option<CardCategory> {
    label.parse().ok()
}

/// Header spans with the text up to the next header
fn blocks<'t>(re: &Regex, text: &'t str) -> Vec<(regex::Captures<'t>, &'t str)> {
    let headers: Vec<regex::Captures<'t>> = re.captures_iter(text).collect();
    let starts: Vec<usize> = headers
        .iter()
        .filter_map(|caps| caps.get(0))
        .map(|m| m.start())
        .collect();
    headers
        .into_iter()
        .enumerate()
        .map(|(i, caps)| {
            let start = caps.get(0).map_or(0, |m| m.end());
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            let body = &text[start..end];
            (caps, body)
        })
        .collect()
}

/// Stage 1: `### Alternative k: name` followed by `**Category**: value` lines
///
/// Blocks without any category line are ignored.
#[must_use]
pub fn parse_strict_alternatives(text: &str) -> Vec<Alternative> {
    let mut alternatives = Vec::new();
    for (caps, body) in blocks(&STRICT_HEADER, text) {
        let name = caps.get(2).map_or("", |m| m.as_str());
        let mut alternative = Alternative::new(String::new());
        let mut found = false;
        for field in STRICT_FIELD.captures_iter(body) {
            if let Some(category) = category_of(&field[1]) {
                if !alternative.is_specified(category) {
                    alternative.set_value(category, field[2].trim());
                    found = true;
                }
            }
        }
        if found {
            alternative.heading = format!("Alternative {}: {name}", alternatives.len() + 1);
            alternatives.push(alternative);
        }
    }
    alternatives
}

fn clean_value(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c == '*' || c == '_' || c == '"')
        .trim()
        .to_string()
}

/// Inline `Type: value` pairs in order of appearance
///
/// A value runs until the next label or the first line break, comma,
/// semicolon or period.
fn inline_pairs(text: &str) -> Vec<(CardCategory, String)> {
    let labels: Vec<regex::Captures<'_>> = PAIR_LABEL.captures_iter(text).collect();
    let mut pairs = Vec::new();
    for (i, caps) in labels.iter().enumerate() {
        let Some(category) = category_of(&caps[1]) else {
            continue;
        };
        let start = caps.get(0).map_or(0, |m| m.end());
        let end = labels
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        let region = &text[start..end];
        let cut = region
            .find(|c: char| matches!(c, '\n' | ',' | ';' | '.'))
            .unwrap_or(region.len());
        let value = clean_value(&region[..cut]);
        if !value.is_empty() {
            pairs.push((category, value));
        }
    }
    pairs
}

/// Stage 2: any "Alternative N" header plus inline `Type: value` pairs
///
/// Produces canonical blocks; categories without a pair stay
/// [`NOT_SPECIFIED`]. Empty when no block carries a pair.
#[must_use]
pub fn reformat_loose_alternatives(text: &str) -> Vec<Alternative> {
    let mut alternatives = Vec::new();
    let mut any_pair = false;
    for (caps, body) in blocks(&LOOSE_HEADER, text) {
        let rest = caps.get(2).map_or("", |m| m.as_str());
        // Pairs may start on the header line itself
        let (rest, header_pairs) = match PAIR_LABEL.find(rest) {
            Some(label) => (&rest[..label.start()], &rest[label.start()..]),
            None => (rest, ""),
        };
        let name = rest
            .trim()
            .trim_matches(|c: char| c == '*' || c == '_' || c == ':' || c == '-' || c == '.' || c == ')')
            .trim();
        let name = if name.is_empty() { "Unnamed" } else { name };

        let mut alternative = Alternative::new(format!("Alternative {}: {name}", alternatives.len() + 1));
        let pairs = inline_pairs(header_pairs).into_iter().chain(inline_pairs(body));
        for (category, value) in pairs {
            if !alternative.is_specified(category) {
                alternative.set_value(category, value);
                any_pair = true;
            }
        }
        alternatives.push(alternative);
    }
    if any_pair {
        alternatives
    } else {
        Vec::new()
    }
}

/// Stage 3: always two blocks
///
/// Variation 1 takes the first value found per category, Variation 2 the
/// second.
#[must_use]
pub fn variation_blocks(text: &str) -> [Alternative; 2] {
    let mut found: [Vec<String>; 5] = Default::default();
    for (category, value) in inline_pairs(text) {
        found[category.index()].push(value);
    }
    let mut variations = [Alternative::new("Variation 1"), Alternative::new("Variation 2")];
    for category in CardCategory::ALL {
        for (slot, value) in variations.iter_mut().zip(found[category.index()].iter()) {
            slot.set_value(category, value.clone());
        }
    }
    variations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn storyboard_strips_numbering_and_blanks() {
        let steps = parse_storyboard("1. Wake up\n\n2.   Put on the shirt\n   \n3.Walk");
        assert_eq!(steps[0], "Wake up");
        assert_eq!(steps[1], "Put on the shirt");
        assert_eq!(steps[2], "Walk");
        assert_eq!(steps[3], "Step 4: Continue the journey.");
        assert_eq!(steps.len(), STORYBOARD_STEPS);
    }

    #[test]
    fn storyboard_truncates() {
        let text = (1..=12).map(|i| format!("Line {i}")).collect::<Vec<_>>().join("\n");
        let steps = parse_storyboard(&text);
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[7], "Line 8");
    }

    #[test]
    fn bare_number_lines_are_dropped() {
        let steps = parse_storyboard("1.\nReal step");
        assert_eq!(steps[0], "Real step");
        assert_eq!(steps[1], "Step 2: Continue the journey.");
    }

    #[test]
    fn default_storyboard_is_all_placeholders() {
        let steps = default_storyboard_steps();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[0], "Step 1: Continue the journey.");
        assert_eq!(steps[7], "Step 8: Continue the journey.");
    }

    #[test]
    fn strict_grammar() {
        let text = "Here are some ideas.\n\n### Alternative 1: Smart Umbrella\n**Thing**: Umbrella\n**Sensor**: Humidity\n\n### Alternative 2: Sporty Bag\n- **Thing**: Luggage\n**Action**: Run\n**Feedback**: Sound\n**Service**: Maps\n";
        let parsed = parse_creative(text);
        assert_eq!(parsed.stage, ParseStage::Strict);
        assert_eq!(parsed.alternatives.len(), 2);

        let first = &parsed.alternatives[0];
        assert_eq!(first.heading, "Alternative 1: Smart Umbrella");
        assert_eq!(first.value(CardCategory::Thing), "Umbrella");
        assert_eq!(first.value(CardCategory::Action), NOT_SPECIFIED);
        assert_eq!(parsed.alternatives[1].value(CardCategory::Service), "Maps");
    }

    #[test]
    fn loose_headers_are_reformatted() {
        let text = "**Alternative 1 - Night Runner**\nUse a Thing: Shoes, Sensor: Light.\n\nAlternative 2: Quiet Desk\nThing: Table, Feedback: Vibration";
        let parsed = parse_creative(text);
        assert_eq!(parsed.stage, ParseStage::Reformatted);
        assert_eq!(
            parsed.to_markdown(),
            "### Alternative 1: Night Runner\n**Thing**: Shoes\n**Sensor**: Light\n**Action**: Not specified\n**Feedback**: Not specified\n**Service**: Not specified\n\n### Alternative 2: Quiet Desk\n**Thing**: Table\n**Sensor**: Not specified\n**Action**: Not specified\n**Feedback**: Vibration\n**Service**: Not specified"
        );
    }

    #[test]
    fn headers_without_pairs_degrade_to_variations() {
        let text = "Alternative 1\nJust prose here.";
        let parsed = parse_creative(text);
        assert_eq!(parsed.stage, ParseStage::Variations);
        assert_eq!(parsed.alternatives.len(), 2);
    }

    #[test]
    fn variation_blocks_split_matches() {
        let text = "Try Thing: Bicycle. Maybe Thing: Helmet; a Sensor: Speed could help.";
        let [first, second] = variation_blocks(text);
        assert_eq!(first.heading, "Variation 1");
        assert_eq!(first.value(CardCategory::Thing), "Bicycle");
        assert_eq!(first.value(CardCategory::Sensor), "Speed could help");
        assert_eq!(second.value(CardCategory::Thing), "Helmet");
        assert_eq!(second.value(CardCategory::Sensor), NOT_SPECIFIED);
    }

    #[test]
    fn nothing_parseable_still_yields_two_blocks() {
        let parsed = parse_creative("I have no suggestions today.");
        assert_eq!(parsed.stage, ParseStage::Variations);
        assert!(parsed.to_markdown().starts_with("### Variation 1\n**Thing**: Not specified"));
        assert!(parsed.to_markdown().contains("### Variation 2"));
    }
}
