//! Removes generation artifacts: code fences, HTML document wrappers and LaTeX.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::markers::compiled;

const LATEX_SYMBOLS: [(&str, &str); 3] = [
    ("$\\dagger$", "†"),
    ("$\\maltese$", "✠"),
    ("$\\cross$", "✠"),
];

/// `<head>` with its content, then the bare wrapper tags with any attributes.
/// `\b` keeps `<header>` and friends out.
const WRAPPER_PATTERN: &str =
    r"(?is)<head\b.*?</head\s*>|</?(?:html|body|head)\b[^>]*>|<!doctype[^>]*>";
const LATEX_STYLE_PATTERN: &str = r"\\text(bf|it)\{([^}]*)\}";
const LATEX_ESCAPE_PATTERN: &str = r"\$\\[a-zA-Z]+\$";

static WRAPPER: OnceLock<Regex> = OnceLock::new();
static LATEX_STYLE: OnceLock<Regex> = OnceLock::new();
static LATEX_ESCAPE: OnceLock<Regex> = OnceLock::new();

pub fn sanitize(text: &str) -> String {
    let text = strip_code_fences(text);
    let text = strip_html_wrappers(&text);
    clean_latex(&text)
}

pub fn strip_code_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn strip_html_wrappers(text: &str) -> String {
    compiled(&WRAPPER, WRAPPER_PATTERN)
        .replace_all(text, "")
        .into_owned()
}

/// `$\dagger$` and friends become symbols, `\textbf{x}` becomes `**x**`,
/// `\textit{x}` becomes `*x*`, and any other `$\name$` is dropped.
pub fn clean_latex(text: &str) -> String {
    let mut text = text.to_string();
    for (latex, symbol) in LATEX_SYMBOLS {
        text = text.replace(latex, symbol);
    }

    let styled = compiled(&LATEX_STYLE, LATEX_STYLE_PATTERN).replace_all(&text, |caps: &Captures| {
        let emphasis = if &caps[1] == "bf" { "**" } else { "*" };
        format!("{emphasis}{}{emphasis}", &caps[2])
    });

    compiled(&LATEX_ESCAPE, LATEX_ESCAPE_PATTERN)
        .replace_all(&styled, "")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_without_closing_tag_is_dropped_alone() {
        assert_eq!(strip_html_wrappers("<head>\n# Santa Misa"), "\n# Santa Misa");
    }

    #[test]
    fn removes_code_fences() {
        let text = "```markdown\n# Santa Misa\n```";
        assert_eq!(strip_code_fences(text), "# Santa Misa");
    }

    #[test]
    fn removes_document_wrappers_but_keeps_content() {
        let text = "<!DOCTYPE html><HTML lang=\"es\"><head><title>x</title></head>\
                    <body><p>Oremos.</p></body></html>";
        assert_eq!(strip_html_wrappers(text), "<p>Oremos.</p>");
    }

    #[test]
    fn keeps_look_alike_tags() {
        let text = "<header>Introito</header> <span class=\"rubric\">a</span> 3 < 4";
        assert_eq!(strip_html_wrappers(text), text);
    }

    #[test]
    fn converts_latex() {
        assert_eq!(clean_latex("$\\dagger$ Lectura"), "† Lectura");
        assert_eq!(clean_latex("$\\maltese$ Bendición"), "✠ Bendición");
        assert_eq!(clean_latex("\\textbf{Pueblo:} Amén."), "**Pueblo:** Amén.");
        assert_eq!(clean_latex("\\textit{de pie}"), "*de pie*");
        assert_eq!(clean_latex("Salmo $\\quad$ 22"), "Salmo  22");
    }

    #[test]
    fn leaves_plain_dollars_alone() {
        assert_eq!(clean_latex("Ofrenda: $100"), "Ofrenda: $100");
        assert_eq!(clean_latex("$\\ sin nombre"), "$\\ sin nombre");
        assert_eq!(clean_latex("\\textbf{sin cierre"), "\\textbf{sin cierre");
    }

    #[test]
    fn sanitize_runs_every_step() {
        let text = "```\n<body>$\\dagger$ \\textbf{Pueblo:} Amén.</body>\n```";
        assert_eq!(sanitize(text), "† **Pueblo:** Amén.");
    }
}
