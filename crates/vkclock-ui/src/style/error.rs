use std::fmt;

/// Error produced while reading style options from a style sheet or from a
/// single `name=value` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based source column number where the error occurred.
    pub col: usize,
}

impl StyleError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "style error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for StyleError {}
