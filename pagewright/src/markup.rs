//! Inline markup to plain text.
//!
//! A fixed, ordered table of rewrite rules is applied to the whole input, one
//! rule after the other. Later rules see the output of earlier ones, so the
//! order matters for nested markup: `<h1><em>x</em></h1>` first becomes
//! `>>> <em>x</em> <<<` and then `>>> *x* <<<`.
//!
//! Captured text never crosses a line terminator (`\n`, `\r`, U+2028 or
//! U+2029).
//!
//! Unknown or malformed markup is never rejected. Whatever is left that looks
//! like a tag is dropped by the last rule.

use lazy_static::lazy_static;
use regex::Regex;

/// One rewrite step of [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: &'static str,
    /// Replacement in `regex` syntax, `${1}` is the first capture group.
    pub replacement: &'static str,
}

const fn rule(name: &'static str, pattern: &'static str, replacement: &'static str) -> Rule {
    Rule {
        name,
        pattern,
        replacement,
    }
}

/// The rules in the order they are applied.
pub const RULES: [Rule; 9] = [
    rule("link", r#"<a href="([^\n\r\x{2028}\x{2029}]*?)">([^\n\r\x{2028}\x{2029}]*?)</a>"#, "Link: ${2} (${1})"),
    rule("h1", r"<h1>([^\n\r\x{2028}\x{2029}]*?)</h1>", ">>> ${1} <<<"),
    rule("h2", r"<h2>([^\n\r\x{2028}\x{2029}]*?)</h2>", ">> ${1} <<"),
    rule("paragraph", r"<p>([^\n\r\x{2028}\x{2029}]*?)</p>", "${1}"),
    rule("strong", r"<strong>([^\n\r\x{2028}\x{2029}]*?)</strong>", "**${1}**"),
    rule("em", r"<em>([^\n\r\x{2028}\x{2029}]*?)</em>", "*${1}*"),
    rule("underline", r"<u>([^\n\r\x{2028}\x{2029}]*?)</u>", "_${1}_"),
    rule("image", r#"<img src="([^\n\r\x{2028}\x{2029}]*?)" alt="([^\n\r\x{2028}\x{2029}]*?)" />"#, "[Image: ${2} at ${1}]"),
    rule("tag", r"<[^>]*>", ""),
];

lazy_static! {
    static ref COMPILED: Vec<(Regex, &'static str)> = RULES
        .iter()
        .map(|r| (Regex::new(r.pattern).expect("markup rule pattern"), r.replacement))
        .collect();
}

/// Turn inline markup into the plain text that is rendered on the page.
pub fn normalize(markup: &str) -> String {
    let mut text = markup.to_owned();
    for (rule, (regex, replacement)) in RULES.iter().zip(COMPILED.iter()) {
        let replaced = regex.replace_all(&text, *replacement);
        if replaced != text {
            log::trace!("rule {}: {:?} -> {:?}", rule.name, text, replaced);
            text = replaced.into_owned();
        }
    }
    text
}
