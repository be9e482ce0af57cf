//! Session-level block.

use crate::line::Line;

/// Lines before the first `m=` line, kept in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionInfo {
    lines: Vec<Line>,
}

impl SessionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn to_lines(&self) -> Vec<Line> {
        self.lines.clone()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// First stored line of the given kind, e.g. `"origin"`.
    pub fn find(&self, kind: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.kind() == kind)
    }
}
