//! Line-oriented text view with newline-style preservation.
//!
//! Every structural rule in this crate (marker pairs, table runs, checklist
//! rows, headings) is line-aligned, so all algorithms operate on a line
//! vector. The newline convention of the input is recorded once on parse and
//! restored once on render; in between, everything is plain LF-free lines.

/// Newline convention of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineStyle {
    Lf,
    CrLf,
}

impl NewlineStyle {
    /// Detect the convention used by `content`. Mixed input counts as CRLF
    /// if any `\r\n` appears.
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            NewlineStyle::CrLf
        } else {
            NewlineStyle::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NewlineStyle::Lf => "\n",
            NewlineStyle::CrLf => "\r\n",
        }
    }
}

/// Convert `content` to LF-only form, remembering the original style.
pub fn normalize_newlines(content: &str) -> (String, NewlineStyle) {
    let style = NewlineStyle::detect(content);
    match style {
        NewlineStyle::Lf => (content.to_string(), style),
        NewlineStyle::CrLf => (content.replace("\r\n", "\n"), style),
    }
}

/// Re-encode LF-only text in the given newline style.
pub fn restore_newlines(normalized: &str, style: NewlineStyle) -> String {
    match style {
        NewlineStyle::Lf => normalized.to_string(),
        NewlineStyle::CrLf => normalized.replace('\n', "\r\n"),
    }
}

/// A document split into lines, rendered back with its original newline
/// style and trailing-newline presence intact.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    pub lines: Vec<String>,
    style: NewlineStyle,
    trailing_newline: bool,
}

impl LineBuffer {
    pub fn parse(content: &str) -> Self {
        let (normalized, style) = normalize_newlines(content);
        let trailing_newline = normalized.ends_with('\n');
        let lines = normalized.lines().map(str::to_string).collect();
        Self {
            lines,
            style,
            trailing_newline,
        }
    }

    pub fn style(&self) -> NewlineStyle {
        self.style
    }

    /// Join the lines back into a document using the recorded style.
    pub fn render(&self) -> String {
        let mut out = self.lines.join(self.style.as_str());
        if self.trailing_newline && !self.lines.is_empty() {
            out.push_str(self.style.as_str());
        }
        out
    }

    /// LF-joined form, used for content comparisons that must ignore the
    /// newline convention.
    pub fn normalized(&self) -> String {
        self.lines.join("\n")
    }
}

/// Whether a line is empty after trimming.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
