//! Block formatting: interior re-indentation and terminator cleanup.

use crate::FormatConfig;

/// Statement terminator collapsed by [`clean_line`].
pub const TERMINATOR: char = ';';

/// Re-indents rendered blocks.
///
/// Given the text of one construct (opening line, body, closing line), the
/// first and last lines are left at the caller's level while every interior
/// line gets one indentation unit. Because each construct only indents its
/// own body, nesting composes without any emitter knowing its depth.
///
/// # Example
///
/// ```
/// use snipgen_core::Formatter;
///
/// let inner = Formatter::default().format("if (ok) {\nrun();;\n}");
/// let outer = Formatter::default().format(&format!("while (true) {{\n{inner}\n}}"));
///
/// assert_eq!(outer, "while (true) {\n    if (ok) {\n        run();\n    }\n}");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> FormatConfig {
        self.config
    }

    /// Format a multi-line block.
    ///
    /// The output has the same number of lines as the input. A single-line
    /// input is only cleaned.
    pub fn format(&self, code: &str) -> String {
        let unit = self.config.unit();
        let lines: Vec<&str> = code.split('\n').collect();
        let last = lines.len() - 1;

        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 || i == last {
                    clean_line(line)
                } else {
                    format!("{unit}{}", clean_line(line))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format a block with the default 4-space configuration.
pub fn format(code: &str) -> String {
    Formatter::default().format(code)
}

/// Collapse every run of two or more terminators into a single one.
///
/// ```
/// use snipgen_core::clean_line;
///
/// assert_eq!(clean_line("a;;;;b"), "a;b");
/// assert_eq!(clean_line("x = 1;"), "x = 1;");
/// ```
pub fn clean_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev_terminator = false;

    for c in line.chars() {
        if c == TERMINATOR {
            if !prev_terminator {
                out.push(c);
            }
            prev_terminator = true;
        } else {
            out.push(c);
            prev_terminator = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_collapses_runs() {
        assert_eq!(clean_line("doWork(i);;"), "doWork(i);");
        assert_eq!(clean_line("a;;;;b"), "a;b");
        assert_eq!(clean_line("a;;b;;;c;"), "a;b;c;");
    }

    #[test]
    fn test_clean_line_leaves_single_terminators() {
        assert_eq!(clean_line("x = 1;"), "x = 1;");
        assert_eq!(clean_line("for (a; b; c) {"), "for (a; b; c) {");
        assert_eq!(clean_line("no terminator"), "no terminator");
        assert_eq!(clean_line(""), "");
    }

    #[test]
    fn test_single_line_passthrough() {
        assert_eq!(format("return x;;"), "return x;");
        assert_eq!(format("  keep leading"), "  keep leading");
        assert_eq!(format(""), "");
    }

    #[test]
    fn test_two_lines_have_no_interior() {
        assert_eq!(format("{\n}"), "{\n}");
    }

    #[test]
    fn test_interior_lines_indented_once() {
        let code = format("if (x) {\na();\nb();;\n}");
        assert_eq!(code, "if (x) {\n    a();\n    b();\n}");
    }

    #[test]
    fn test_boundary_lines_cleaned_not_indented() {
        let code = format("x;;\nbody\ny;;;");
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines[0], "x;");
        assert_eq!(lines[1], "    body");
        assert_eq!(lines[2], "y;");
    }

    #[test]
    fn test_line_count_preserved() {
        let input = "a\nb\n\nc\n";
        let output = format(input);
        assert_eq!(input.split('\n').count(), output.split('\n').count());
        assert_eq!(output, "a\n    b\n    \n    c\n");
    }

    #[test]
    fn test_custom_width() {
        let formatter = Formatter::new(FormatConfig::new(2, 3));
        assert_eq!(formatter.config().width(), 6);
        assert_eq!(formatter.format("{\nx\n}"), "{\n      x\n}");
    }

    #[test]
    fn test_nested_blocks_compose() {
        let inner = format("for (;;) {\nstep();\n}");
        let outer = format(&format!("if (go) {{\n{inner}\n}}"));
        assert_eq!(
            outer,
            "if (go) {\n    for (;) {\n        step();\n    }\n}"
        );
    }
}
