//! Per-turn output buffer.

/// Lines of narration collected during one turn.
///
/// Nothing is shown to the player until the turn completes and the buffer is
/// handed back, so a turn's output is never observed half-written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narration {
    lines: Vec<String>,
}

impl Narration {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. Empty text is skipped.
    pub fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        if !line.is_empty() {
            self.lines.push(line);
        }
    }

    /// Lines collected so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether nothing has been said.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the buffer.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
