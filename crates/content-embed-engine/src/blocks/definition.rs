use crate::models::{BlockInput, DisplayNode, Properties};

/// Rules for one structured block kind.
///
/// Implementations are pure: `validate` and `fallback_children` must not have
/// side effects and must give the same answer for the same input. They are
/// shared read-only across the process once registered.
pub trait BlockDefinition: Send + Sync {
    /// Identifier of the kind this definition governs, e.g. `teacher-profile`
    fn kind(&self) -> &str;

    /// Keywords that select this kind when found anywhere in the input
    fn aliases(&self) -> &[String];

    /// Whether `input` contains at least one alias (case-insensitive)
    fn matches(&self, input: &BlockInput) -> bool {
        self.aliases().iter().any(|alias| input.contains(alias))
    }

    /// Check the input and build the node's property bag.
    ///
    /// Returns a human-readable reason on rejection.
    fn validate(&self, input: &BlockInput) -> Result<Properties, String>;

    /// Display nodes shown by renderers that don't handle this kind
    fn fallback_children(&self, input: &BlockInput) -> Vec<DisplayNode>;
}
