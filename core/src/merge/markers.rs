//! # Marker Scanner
//!
//! Finds `[[...]]` tags in generated text.
//!
//! A tag whose inner text is made of ASCII letters, digits and underscores is a
//! **marker** (`[[LECTURA_1]]`, `[[INSERTAR_GLORIA]]`). Anything else between
//! double brackets is a **rubric** (`[[Todos están de pie]]`). Marker names
//! match case-insensitively. Tags never nest: a tag's inner text holds no
//! bracket, so an opening `[[` inside another tag starts the real one.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{CaptureMatches, Regex};
use tracing::debug;

pub const LECTURA_1: &str = "LECTURA_1";
pub const SALMO: &str = "SALMO";
pub const LECTURA_2: &str = "LECTURA_2";
pub const EVANGELIO: &str = "EVANGELIO";

/// Reading markers in liturgical order.
pub const READING_MARKERS: [&str; 4] = [LECTURA_1, SALMO, LECTURA_2, EVANGELIO];

/// A bracket pair with no bracket inside, so `[[a [[b]]` only matches `[[b]]`.
const TAG_PATTERN: &str = r"\[\[([^\[\]]*)\]\]";
const MARKER_NAME_PATTERN: &str = r"^[A-Za-z0-9_]+$";

static TAG: OnceLock<Regex> = OnceLock::new();
static MARKER_NAME: OnceLock<Regex> = OnceLock::new();

/// Compiles a hard-coded pattern once per process.
pub(crate) fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("hard-coded pattern is valid"))
}

pub fn tag(name: &str) -> String {
    format!("[[{name}]]")
}

/// One `[[...]]` occurrence, with byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub start: usize,
    pub end: usize,
    pub inner: &'a str,
}

impl<'a> Tag<'a> {
    pub fn is_marker(&self) -> bool {
        compiled(&MARKER_NAME, MARKER_NAME_PATTERN).is_match(self.inner)
    }

    pub fn is_rubric(&self) -> bool {
        !self.is_marker() && !self.inner.trim().is_empty()
    }

    /// True when this is the marker `name`, ignoring ASCII case.
    pub fn is(&self, name: &str) -> bool {
        self.is_marker() && self.inner.eq_ignore_ascii_case(name)
    }
}

/// Iterator over the tags of a text, left to right.
pub struct Tags<'a> {
    captures: CaptureMatches<'static, 'a>,
}

pub fn tags(text: &str) -> Tags<'_> {
    Tags {
        captures: compiled(&TAG, TAG_PATTERN).captures_iter(text),
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let whole = caps.get(0)?;
        Some(Tag {
            start: whole.start(),
            end: whole.end(),
            inner: caps.get(1).map_or("", |m| m.as_str()),
        })
    }
}

/// Rebuilds `text`, replacing every tag for which `replace` returns a value.
///
/// Runs in a single pass, so replacement text is never scanned again.
pub fn rewrite<'a, F>(text: &'a str, mut replace: F) -> Cow<'a, str>
where
    F: FnMut(&Tag<'a>) -> Option<Cow<'a, str>>,
{
    let mut out = String::new();
    let mut copied = 0;
    for tag in tags(text) {
        if let Some(replacement) = replace(&tag) {
            out.push_str(&text[copied..tag.start]);
            out.push_str(&replacement);
            copied = tag.end;
        }
    }
    if copied == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

/// Content following the first `[[marker]]`, up to the next tag or the end.
///
/// The result is trimmed and markdown `###` heading lines are dropped, since
/// the surrounding document already provides the section titles. Returns
/// `None` when the marker does not occur.
pub fn extract(text: &str, marker: &str) -> Option<String> {
    let mut iter = tags(text);
    let found = iter.by_ref().find(|t| t.is(marker))?;
    let end = iter.next().map_or(text.len(), |next| next.start);

    let content: Vec<&str> = text[found.end..end]
        .lines()
        .filter(|line| !line.trim_start().starts_with("###"))
        .collect();
    let content = content.join("\n").trim().to_string();

    debug!(marker, len = content.chars().count(), "extracted section");
    Some(content)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const READINGS: &str = "[[LECTURA_1]]
**Libro de Isaías 42,1-4.6-7.**

Así habla el Señor:
Este es mi Servidor...

[[SALMO]]
**Salmo 29(28),1a.2.3ac-4.3b.9b-10.**

¡Aclamen al Señor, hijos de Dios!...

[[LECTURA_2]]
**Libro de los Hechos de los Apóstoles 10,34-38.**

Entonces Pedro, tomando la palabra...

[[EVANGELIO]]
**Evangelio según San Mateo 3,13-17.**

Entonces Jesús fue desde Galilea...";

    #[test]
    fn patterns_compile() {
        assert!(compiled(&TAG, TAG_PATTERN).is_match("[[SALMO]]"));
        assert!(compiled(&MARKER_NAME, MARKER_NAME_PATTERN).is_match("INSERTAR_GLORIA"));
    }

    #[test]
    fn multiline_rubrics_are_single_tags() {
        let found: Vec<&str> = tags("[[Todos de pie,\nmirando al altar]] fin").map(|t| t.inner).collect();
        assert_eq!(found, vec!["Todos de pie,\nmirando al altar"]);
    }

    #[test]
    fn classifies_markers_and_rubrics() {
        let found: Vec<Tag> = tags("[[LECTURA_1]] x [[Todos de pie]] [[]]").collect();
        assert_eq!(found.len(), 3);
        assert!(found[0].is_marker());
        assert!(found[0].is("lectura_1"));
        assert!(found[1].is_rubric());
        assert!(!found[2].is_marker());
        assert!(!found[2].is_rubric());
    }

    #[test]
    fn nested_open_restarts_scan() {
        let found: Vec<&str> = tags("[[a [[SALMO]] b]]").map(|t| t.inner).collect();
        assert_eq!(found, vec!["SALMO"]);
    }

    #[test]
    fn unclosed_tag_ends_scan() {
        assert_eq!(tags("texto [[SALMO sin cierre").count(), 0);
    }

    #[test]
    fn first_reading_never_includes_the_psalm() {
        let first = extract(READINGS, LECTURA_1).unwrap();
        assert!(first.starts_with("**Libro de Isaías"));
        assert!(first.ends_with("Este es mi Servidor..."));
        assert!(!first.contains("Salmo"));
        assert!(!first.contains("[["));
    }

    #[test]
    fn each_marker_extracts_its_own_section() {
        assert!(extract(READINGS, SALMO).unwrap().contains("Aclamen al Señor"));
        assert!(extract(READINGS, LECTURA_2).unwrap().contains("Pedro"));
        let gospel = extract(READINGS, EVANGELIO).unwrap();
        assert!(gospel.ends_with("desde Galilea..."));
    }

    #[test]
    fn extraction_is_case_insensitive() {
        let text = "[[salmo]]\nEl Señor es mi pastor, nada me falta.";
        assert_eq!(
            extract(text, SALMO).as_deref(),
            Some("El Señor es mi pastor, nada me falta.")
        );
    }

    #[test]
    fn extraction_stops_at_rubrics_and_drops_headings() {
        let text = "[[EVANGELIO]]\n### Evangelio\nEn aquel tiempo...\n[[Breve silencio]]\nfin";
        assert_eq!(extract(text, EVANGELIO).as_deref(), Some("En aquel tiempo..."));
    }

    #[test]
    fn missing_marker_is_none() {
        assert_eq!(extract("sin marcadores", LECTURA_1), None);
        assert_eq!(extract("[[LECTURA_1]]", LECTURA_1).as_deref(), Some(""));
    }

    #[test]
    fn rewrite_is_single_pass() {
        let out = rewrite("a [[X]] b [[Y]] c", |t| {
            t.is("X").then(|| Cow::Borrowed("[[Y]]"))
        });
        assert_eq!(out, "a [[Y]] b [[Y]] c");
    }

    #[test]
    fn rewrite_without_matches_borrows() {
        let out = rewrite("[[Rúbrica]] texto", |_| None);
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
