use once_cell::sync::Lazy;
use regex::Regex;

static ASIDE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)|\[[^\]]*\]").unwrap());

static LEVEL_MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:beginners?|intermediate|advanced|level\s*\d+|part\s*\d+|\d+(?:\.\d+)*)\b")
        .unwrap()
});

// Case-sensitive so ordinary words survive
static ROMAN_NUMERAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:I|II|III|IV|V|VI|VII|VIII|IX|X)\b").unwrap());

static TRAILING_NOUN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(?:course|class|bootcamp|masterclass|tutorial)$").unwrap());

static INTRODUCTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bintro(?:duction)?\s+to\s+(.+)$").unwrap());

// Nothing but the lead-in phrase is left
static BARE_INTRODUCTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^intro(?:duction)?(?:\s+to)?$").unwrap());

static WHITESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const CONNECTIVES: &[&str] = &[
    "a", "an", "and", "at", "by", "for", "from", "in", "of", "on", "the", "to", "with", "&",
];

const EDGE_PUNCTUATION: &[char] = &['-', '–', '—', '|', ',', '.', '/', '&', ':', ';', ' '];

/// Pull the subject out of a course title.
///
/// "Introduction to Python Programming" -> "Python Programming",
/// "Statistics 101 (Self-Paced)" -> "Statistics". Returns an empty string
/// when nothing meaningful is left.
pub fn extract_main_topic(title: &str) -> String {
    let without_asides = ASIDE_PATTERN.replace_all(title, " ");
    let before_colon = without_asides.split(':').next().unwrap_or_default();
    let without_levels = LEVEL_MARKER_PATTERN.replace_all(before_colon, " ");
    let without_numerals = ROMAN_NUMERAL_PATTERN.replace_all(&without_levels, " ");
    let collapsed = WHITESPACE_PATTERN.replace_all(&without_numerals, " ");
    let cleaned = TRAILING_NOUN_PATTERN
        .replace(collapsed.trim_matches(EDGE_PUNCTUATION), "")
        .trim_matches(EDGE_PUNCTUATION)
        .to_string();

    if BARE_INTRODUCTION_PATTERN.is_match(&cleaned) {
        return String::new();
    }

    if let Some(caps) = INTRODUCTION_PATTERN.captures(&cleaned) {
        if let Some(rest) = caps.get(1) {
            let rest = rest.as_str().trim_matches(EDGE_PUNCTUATION);
            if !rest.is_empty() {
                return rest.to_string();
            }
        }
    }

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    match words.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [.., first, last] => {
            if CONNECTIVES.contains(&first.to_lowercase().as_str()) {
                last.to_string()
            } else {
                format!("{} {}", first, last)
            }
        }
    }
}
