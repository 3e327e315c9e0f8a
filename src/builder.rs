//! Generic Option/Config Builders
//!
//! Two small shapes for assembling a configuration value out of independent
//! enhancer functions: a one-shot fold over an enhancer list, and a fluent
//! wrapper for call-site chaining. Both are pure; enhancers consume and
//! return the value.

/// Folds `enhancers` over the value `initial` produces.
pub fn build_with<T, I, F>(initial: impl FnOnce() -> T, enhancers: I) -> T
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> T,
{
    enhancers
        .into_iter()
        .fold(initial(), |value, enhance| enhance(value))
}

/// Fluent form of [`build_with`] for chaining enhancers at the call site.
#[derive(Debug, Clone, Default)]
pub struct FluentBuilder<T> {
    value: T,
}

impl<T> FluentBuilder<T> {
    /// Starts from a default/initial configuration value.
    pub fn new(initial: T) -> Self {
        Self { value: initial }
    }

    /// Applies one enhancer and returns the builder for further chaining.
    pub fn with<F>(self, enhance: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        Self {
            value: enhance(self.value),
        }
    }

    /// Finishes the chain and yields the built value.
    pub fn build(self) -> T {
        self.value
    }
}
