//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// List each visible item's special commands in location descriptions.
    pub print_commands: bool,
    /// Maximum number of commands kept in the history. 0 = unlimited.
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            print_commands: true,
            history_limit: 0,
        }
    }
}

impl SessionConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide special commands in descriptions.
    pub fn with_print_commands(mut self, print: bool) -> Self {
        self.print_commands = print;
        self
    }

    /// Bound the command history (0 = unlimited).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert!(config.print_commands);
        assert_eq!(config.history_limit, 0);
    }

    #[test]
    fn builder_methods() {
        let config = SessionConfig::new()
            .with_print_commands(false)
            .with_history_limit(50);
        assert!(!config.print_commands);
        assert_eq!(config.history_limit, 50);
    }
}
