//! LaTeX special-character escaping for user-supplied text.
//!
//! The substitutions run as a fixed sequence and the order is load-bearing:
//! literal backslashes must become `\textbackslash{}` before the character
//! class pass, otherwise the backslashes that pass introduces (`\&`, `\%`,
//! ...) would themselves be rewritten. `~` and `^` run last because their
//! replacements contain `{}` that must survive the brace pass.

/// Escapes the LaTeX special characters `\ & % $ # _ { } ~ ^` in `text`.
pub fn escape_latex(text: &str) -> String {
    let mut out = text.replace('\\', "\\textbackslash{}");
    for c in ['&', '%', '$', '#', '_', '{', '}'] {
        out = out.replace(c, &format!("\\{c}"));
    }
    out = out.replace('~', "\\textasciitilde{}");
    out.replace('^', "\\textasciicircum{}")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Undoes the substitutions in reverse order. Test-only: used to check the
    /// escaping round-trip property.
    fn unescape_latex(text: &str) -> String {
        let mut out = text.replace("\\textasciicircum{}", "^");
        out = out.replace("\\textasciitilde{}", "~");
        for c in ['}', '{', '_', '#', '$', '%', '&'] {
            out = out.replace(&format!("\\{c}"), &c.to_string());
        }
        out.replace("\\textbackslash{}", "\\")
    }

    #[test]
    fn test_escapes_each_special_character() {
        assert_eq!(escape_latex("a&b"), "a\\&b");
        assert_eq!(escape_latex("50%"), "50\\%");
        assert_eq!(escape_latex("$5"), "\\$5");
        assert_eq!(escape_latex("#1"), "\\#1");
        assert_eq!(escape_latex("snake_case"), "snake\\_case");
        assert_eq!(escape_latex("~"), "\\textasciitilde{}");
        assert_eq!(escape_latex("x^2"), "x\\textasciicircum{}2");
    }

    #[test]
    fn test_backslash_runs_first() {
        // The braces introduced by \textbackslash{} are escaped by the later
        // brace pass; the trailing substitutions must not touch the result.
        assert_eq!(escape_latex("\\"), "\\textbackslash\\{\\}");
    }

    #[test]
    fn test_braces_in_tilde_replacement_survive() {
        // ~ is substituted after the brace pass, so its {} stays literal.
        assert_eq!(escape_latex("{~}"), "\\{\\textasciitilde{}\\}");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let s = "Led a team of 4 engineers, shipping v2.0 in Q3";
        assert_eq!(escape_latex(s), s);
    }

    #[test]
    fn test_round_trip_recovers_original() {
        for s in [
            "\\ & % $ # _ { } ~ ^",
            "C&R \\LaTeX{} 100% _done_ ~approx^",
            "\\\\double",
            "nested {braces {here}}",
        ] {
            assert_eq!(unescape_latex(&escape_latex(s)), s, "round trip failed for {s:?}");
        }
    }
}
