//! Special-character transcoding for French text.
//!
//! Converts accented letters to HTML named entities and back, and to LaTeX
//! escape sequences. Every conversion is a single pass; characters and
//! entities without a mapping pass through unchanged.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Accented letters and their HTML named entities.
pub const HTML_ENTITIES: [(char, &str); 14] = [
    ('à', "&agrave;"),
    ('â', "&acirc;"),
    ('ä', "&auml;"),
    ('ç', "&ccedil;"),
    ('é', "&eacute;"),
    ('è', "&egrave;"),
    ('ê', "&ecirc;"),
    ('ë', "&euml;"),
    ('î', "&icirc;"),
    ('ï', "&iuml;"),
    ('ô', "&ocirc;"),
    ('ö', "&ouml;"),
    ('ù', "&ugrave;"),
    ('û', "&ucirc;"),
];

/// Accented letters (and `%`) and their LaTeX escapes.
pub const LATEX_ESCAPES: [(char, &str); 14] = [
    ('à', "\\`a"),
    ('â', "\\^a"),
    ('ä', "\\\"a"),
    ('ç', "\\c{c}"),
    ('é', "\\'e"),
    ('è', "\\`e"),
    ('ê', "\\^e"),
    ('ë', "\\\"e"),
    ('î', "\\^i"),
    ('ô', "\\^o"),
    ('ö', "\\\"o"),
    ('ù', "\\`u"),
    ('û', "\\^u"),
    ('%', "\\%"),
];

static SHARED: LazyLock<Transcoder> = LazyLock::new(Transcoder::new);

/// Lookup tables for the three conversions.
#[derive(Debug, Clone)]
pub struct Transcoder {
    html: FxHashMap<char, &'static str>,
    entities: FxHashMap<&'static str, char>,
    latex: FxHashMap<char, &'static str>,
}

impl Transcoder {
    /// Build the lookup tables.
    pub fn new() -> Self {
        Self {
            html: HTML_ENTITIES.into_iter().collect(),
            entities: HTML_ENTITIES.into_iter().map(|(c, e)| (e, c)).collect(),
            latex: LATEX_ESCAPES.into_iter().collect(),
        }
    }

    /// Replace HTML entities with the accented letters they stand for.
    pub fn html_to_text(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(pos) = rest.find('&') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];
            let decoded = rest
                .find(';')
                .map(|end| &rest[..=end])
                .and_then(|entity| self.entities.get(entity).map(|&c| (entity.len(), c)));
            match decoded {
                Some((len, letter)) => {
                    out.push(letter);
                    rest = &rest[len..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Replace accented letters with HTML entities.
    pub fn text_to_html(&self, input: &str) -> String {
        substitute(input, &self.html)
    }

    /// Replace accented letters and `%` with LaTeX escapes.
    pub fn text_to_latex(&self, input: &str) -> String {
        substitute(input, &self.latex)
    }
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new()
    }
}

fn substitute(input: &str, table: &FxHashMap<char, &'static str>) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match table.get(&c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Decode HTML entities with the shared tables.
pub fn html_to_text(input: &str) -> String {
    SHARED.html_to_text(input)
}

/// Encode accented letters as HTML entities with the shared tables.
pub fn text_to_html(input: &str) -> String {
    SHARED.text_to_html(input)
}

/// Escape accented letters and `%` for LaTeX with the shared tables.
pub fn text_to_latex(input: &str) -> String {
    SHARED.text_to_latex(input)
}
