/// How [`settle_with`](crate::settle_with) treats a failed operation.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) catch_panics: bool,
    pub(crate) failure_log: Option<log::Level>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catch_panics: true,
            failure_log: Some(log::Level::Debug),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// When disabled, a panic inside the operation unwinds through the converter.
    pub fn with_catch_panics(self, catch_panics: bool) -> Self {
        Self {
            catch_panics,
            ..self
        }
    }

    /// `None` keeps failures out of the log entirely.
    pub fn with_failure_log(self, level: impl Into<Option<log::Level>>) -> Self {
        Self {
            failure_log: level.into(),
            ..self
        }
    }

    pub fn catch_panics(&self) -> bool {
        self.catch_panics
    }

    pub fn failure_log(&self) -> Option<log::Level> {
        self.failure_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = Config::new();
        assert!(config.catch_panics());
        assert_eq!(config.failure_log(), Some(log::Level::Debug));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_setters() {
        let config = Config::new()
            .with_catch_panics(false)
            .with_failure_log(log::Level::Warn);
        assert!(!config.catch_panics());
        assert_eq!(config.failure_log(), Some(log::Level::Warn));

        let config = config.with_failure_log(None);
        assert_eq!(config.failure_log(), None);
        assert!(!config.catch_panics());
    }
}
