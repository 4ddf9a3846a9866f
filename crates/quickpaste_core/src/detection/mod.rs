//! Heuristic language detection for paste content.


type Predicate = fn(&str) -> bool;

/// Ordered detection rules; the first predicate that matches decides the tag.
const RULES: &[(Predicate, &str)] = &[
    (looks_like_python, "python"),
    (looks_like_javascript, "javascript"),
    (looks_like_markup, "html"),
];

/// Best-effort language detection based on simple substring heuristics.
///
/// Rules are evaluated in fixed order and only the first match applies, so
/// detection is deterministic for any given input. This is explicitly
/// approximate: it promises stability, not linguistic correctness.
///
/// # Returns
/// Detected language tag, or `None` if unknown.
pub fn detect_language(content: &str) -> Option<&'static str> {
    RULES
        .iter()
        .find(|(predicate, _)| predicate(content))
        .map(|(_, tag)| *tag)
}

fn looks_like_python(content: &str) -> bool {
    content.starts_with("import ") || content.contains("def ")
}

fn looks_like_javascript(content: &str) -> bool {
    content.contains("function(") || content.contains("console.log(")
}

fn looks_like_markup(content: &str) -> bool {
    content.contains('<') && content.contains("</")
}
