/// Repository for user preference values.
/// Abstracts the durable key-value store behind the selection settings.
pub trait PreferencesRepository: Send + Sync {
    /// Read a stored value, `None` when the key was never written
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value durably
    ///
    /// # Errors
    /// Returns a message describing the store failure
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}
