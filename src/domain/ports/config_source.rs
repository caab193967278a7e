/// Port for key/value configuration lookup following hexagonal architecture
///
/// The loader only ever reads through this trait, so the process environment
/// and a layered provider are interchangeable and tests can inject fakes
/// without mutating process-wide state.
///
/// # Examples
///
/// ```no_run
/// use cfgload::domain::ports::ConfigSource;
///
/// fn project(source: &dyn ConfigSource) -> Option<String> {
///     source.get_string("PROJECT_NAME").filter(|v| !v.is_empty())
/// }
/// ```
pub trait ConfigSource: Send + Sync {
    /// Short backend label used in log events
    fn name(&self) -> &'static str;

    /// Raw string value for `key`
    ///
    /// # Returns
    ///
    /// * `Some(value)` - The key holds a scalar value (possibly empty)
    /// * `None` - The key is absent or has no string representation
    fn get_string(&self, key: &str) -> Option<String>;

    /// Whether `key` is set at all, even to an empty or non-string value
    fn has(&self, key: &str) -> bool {
        self.get_string(key).is_some()
    }

    /// Best-effort rendering of a set value that has no exact string form,
    /// e.g. non-UTF-8 bytes or a structured value
    fn get_lossy(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn has(&self, key: &str) -> bool {
        (**self).has(key)
    }

    fn get_lossy(&self, key: &str) -> Option<String> {
        (**self).get_lossy(key)
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn has(&self, key: &str) -> bool {
        (**self).has(key)
    }

    fn get_lossy(&self, key: &str) -> Option<String> {
        (**self).get_lossy(key)
    }
}
