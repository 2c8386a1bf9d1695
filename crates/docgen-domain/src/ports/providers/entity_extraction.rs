use crate::entities::CodeEntity;

/// Source Code Entity Extraction Interface
///
/// Walks the top level of a parsed document and yields the units worth
/// documenting, in source order. Extraction is best-effort: a document that
/// does not parse yields an empty list instead of an error.
///
/// # Example
///
/// ```ignore
/// let entities = extractor.extract("def add(a, b):\n    return a + b");
/// assert_eq!(entities[0].name, "add");
/// ```
pub trait EntityExtractor: Send + Sync {
    /// Extract documentable entities from `source`
    fn extract(&self, source: &str) -> Vec<CodeEntity>;

    /// Language handled by this extractor (e.g. "python")
    fn language(&self) -> &str;

    /// Get the name/identifier of this extractor implementation
    fn provider_name(&self) -> &str;
}
