/// Configuration for a font preview.
///
/// Defaults reproduce the classic previewer: 16px section gaps and a 36 character
/// random sample when the locale sample cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Vertical gap between the title, the alphabet lines and the size ladder.
    pub section_spacing: i32,
    /// Number of codepoints drawn when synthesizing a random sample.
    pub random_sample_len: usize,
    /// Language tag used to pick the sample string. `None` reads the environment locale.
    pub language: Option<String>,
    /// Seed for random sample synthesis. `None` seeds from the OS.
    pub random_seed: Option<u64>,
    /// Worker threads for background font reads. `None` uses `max(1, cores - 1)`.
    pub worker_threads: Option<usize>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            section_spacing: 16,
            random_sample_len: 36,
            language: None,
            random_seed: None,
            worker_threads: None,
        }
    }
}

impl PreviewConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section_spacing(mut self, spacing: i32) -> Self {
        self.section_spacing = spacing;
        self
    }

    pub fn random_sample_len(mut self, len: usize) -> Self {
        self.random_sample_len = len;
        self
    }

    /// Force the sample-string language (e.g. `"de"`, `"pt-BR"`).
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PreviewConfig::default();
        assert_eq!(config.section_spacing, 16);
        assert_eq!(config.random_sample_len, 36);
        assert!(config.language.is_none());
        assert!(config.random_seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = PreviewConfig::new()
            .section_spacing(8)
            .random_sample_len(12)
            .language("de")
            .random_seed(7)
            .worker_threads(2);

        assert_eq!(config.section_spacing, 8);
        assert_eq!(config.random_sample_len, 12);
        assert_eq!(config.language.as_deref(), Some("de"));
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.worker_threads, Some(2));
    }
}
