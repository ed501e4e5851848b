//! Whitespace helpers used when re-rendering fluff

pub const INDENT: &str = "    ";

/// Prefix every non-empty line with one indentation level.
pub fn indent_block(s: &str) -> String {
    s.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip leading whitespace, then remove the indentation shared by every
/// line after the first.
pub fn dedent_block(s: &str) -> String {
    let s = s.trim_start();
    if s.split('\n').filter(|line| !line.is_empty()).count() <= 1 {
        return s.to_string();
    }
    let Some((first, rest)) = s.split_once('\n') else {
        return s.to_string();
    };

    let min_indent = rest.split('\n').map(indent_count).min().unwrap_or(0);
    format!("{first}\n{}", outdent_block(rest, min_indent))
}

/// Remove up to `width` leading whitespace characters from every line.
///
/// Multi-line comments and values carry the absolute indentation of the
/// source. Outdenting them by the column of the node that owns them makes
/// the indentation relative, so re-indenting at any depth is stable.
pub fn outdent_block(s: &str, width: usize) -> String {
    s.split('\n')
        .map(|line| {
            let cut: usize = line
                .chars()
                .take(width)
                .take_while(|c| c.is_whitespace())
                .map(char::len_utf8)
                .sum();
            &line[cut..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn indent_count(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn is_horizontal(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Drop the spaces and tabs in the leading whitespace, and one more boundary
/// character after that. `"\n\n  x"` becomes `"\nx"`.
pub fn ltrim(s: &str) -> String {
    let content = s.trim_start();
    if content.is_empty() {
        return String::new();
    }
    let padding = &s[..s.len() - content.len()];
    let mut kept = padding.chars().filter(|&c| !is_horizontal(c));
    kept.next();
    kept.chain(content.chars()).collect()
}

/// Mirror of [`ltrim`] for trailing whitespace. `"x  \n\n"` becomes `"x\n"`.
pub fn rtrim(s: &str) -> String {
    let content = s.trim_end();
    let padding = &s[content.len()..];
    let mut kept: Vec<char> = padding.chars().filter(|&c| !is_horizontal(c)).collect();
    kept.pop();
    content.chars().chain(kept).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_block() {
        assert_eq!(indent_block("a {\n\n}"), "    a {\n\n    }");
        assert_eq!(indent_block(""), "");
    }

    #[test]
    fn test_dedent_block() {
        assert_eq!(
            dedent_block("\n  /* one\n     two\n       three */"),
            "/* one\ntwo\n  three */"
        );
        assert_eq!(dedent_block("   /* single */"), "/* single */");
        // trailing indentation-only line
        assert_eq!(dedent_block("/* c */\n            "), "/* c */\n");
        // an empty line counts as zero indentation
        assert_eq!(dedent_block("/* a\n    b */\n"), "/* a\n    b */\n");
    }

    #[test]
    fn test_ltrim() {
        assert_eq!(ltrim("\n\n    /* c */"), "\n/* c */");
        assert_eq!(ltrim("\n    x"), "x");
        assert_eq!(ltrim("   x"), "x");
        assert_eq!(ltrim("x  "), "x  ");
        assert_eq!(ltrim("  \n  "), "");
        assert_eq!(ltrim(""), "");
    }

    #[test]
    fn test_rtrim() {
        assert_eq!(rtrim(" /* c */\n    "), " /* c */");
        assert_eq!(rtrim("x\n\n  "), "x\n");
        assert_eq!(rtrim("\n\n"), "\n");
        assert_eq!(rtrim("\n"), "");
        assert_eq!(rtrim("  "), "");
        assert_eq!(rtrim(""), "");
    }

    #[test]
    fn test_tabs_are_trimmed_like_spaces() {
        assert_eq!(rtrim("x\t\n"), "x");
        assert_eq!(ltrim("\n\tx"), "x");
        assert_eq!(ltrim("\n\n\t/* c */"), "\n/* c */");
    }

    #[test]
    fn test_outdent_block() {
        assert_eq!(outdent_block("/* a\n           b */", 8), "/* a\n   b */");
        // lines with less indentation lose all of it
        assert_eq!(outdent_block("x\n  y\n\n\tz", 4), "x\ny\n\nz");
        assert_eq!(outdent_block("  x", 0), "  x");
    }
}
