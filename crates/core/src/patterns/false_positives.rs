//! Names that match a placeholder shape but are almost never placeholders.

/// Lowercase tokens rejected as candidate names: HTML tags, language
/// keywords and generic JSON field names.
pub const FALSE_POSITIVES: &[&str] = &[
    // HTML
    "html", "head", "body", "div", "span", "p", "a", "img", "br", "hr", "ul", "ol", "li",
    "table", "thead", "tbody", "tfoot", "tr", "td", "th", "form", "input", "button",
    "select", "option", "textarea", "script", "style", "meta", "h1", "h2", "h3", "h4",
    "h5", "h6", "nav", "header", "footer", "article", "aside", "pre", "em", "strong",
    "b", "i", "u", "small", "iframe", "svg", "canvas", "video", "audio",
    // Keywords
    "if", "else", "elif", "for", "while", "do", "switch", "case", "break", "continue",
    "return", "function", "fn", "var", "let", "const", "class", "struct", "enum", "new",
    "this", "self", "true", "false", "null", "nil", "none", "undefined", "import",
    "export", "from", "default", "try", "catch", "finally", "throw", "async", "await",
    "typeof", "instanceof", "void", "in", "of", "def", "and", "or", "not", "pass",
    "lambda", "yield", "static", "public", "private", "protected",
    // JSON field names
    "key", "value", "data", "type", "object", "array", "string", "number", "boolean",
    "integer", "items", "properties", "required",
];

/// Case-insensitive membership test against [`FALSE_POSITIVES`].
#[must_use]
pub fn is_false_positive(name: &str) -> bool {
    let lower = name.to_lowercase();
    FALSE_POSITIVES.contains(&lower.as_str())
}
