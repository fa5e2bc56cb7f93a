/// Renders any `Debug` value as a `String`.
///
/// Collaborator errors (HTTP, JSON, IO) are flattened into the `underlying`
/// field of our own error variants with this:
/// ```ignore
/// .map_err(|e| SendError::new(SendPhase::Sign, e))
/// ```
pub trait ToDebugString {
    fn to_debug_string(&self) -> String;
}
impl<T: core::fmt::Debug> ToDebugString for T {
    fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}
