use std::borrow::Cow;

use super::markers;

/// Wraps every remaining `[[...]]` annotation in a rubric span.
///
/// Rubrics are stage directions, so they are styled rather than removed.
/// Empty `[[]]` pairs carry nothing and are dropped.
pub fn render_rubrics(text: &str) -> String {
    markers::rewrite(text, |tag| {
        let inner = tag.inner.trim();
        if inner.is_empty() {
            Some(Cow::Borrowed(""))
        } else {
            Some(Cow::Owned(format!("<span class=\"rubric\">{inner}</span>")))
        }
    })
    .into_owned()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
