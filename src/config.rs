//! Resolver configuration.
//!
//! Transport settings (base URLs, timeouts, retries) belong to the providers.
//! What is left here is how the resolver identifies and reports itself.

/// Base trait for configuration types.
///
/// # Example
///
/// ```rust
/// use anime_quotes::Config;
///
/// #[derive(Debug, Clone)]
/// struct QuietConfig;
///
/// impl Config for QuietConfig {
///     fn name(&self) -> &str {
///         "quiet"
///     }
/// }
///
/// assert!(!QuietConfig.is_verbose());
/// assert!(QuietConfig.validate().is_ok());
/// ```
pub trait Config: Send + Sync {
    /// Returns the configuration name/identifier.
    fn name(&self) -> &str {
        "default"
    }

    /// Returns whether verbose output is enabled.
    fn is_verbose(&self) -> bool {
        false
    }

    /// Validates the configuration.
    ///
    /// Returns Ok(()) if valid, or an error message describing the issue.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Configuration for an [`AnimeResolver`](crate::AnimeResolver).
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Name recorded on every resolver span
    pub name: String,
    /// Log dropped records at `debug` instead of `trace`
    pub verbose: bool,
}

impl ResolverConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable verbose output.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl Config for ResolverConfig {
    fn name(&self) -> &str {
        if self.name.is_empty() {
            "default"
        } else {
            &self.name
        }
    }

    fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn validate(&self) -> Result<(), String> {
        if !self.name.is_empty() && self.name.trim().is_empty() {
            return Err("name must not be blank".to_string());
        }
        Ok(())
    }
}
