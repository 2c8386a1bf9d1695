//! Python entity extractor.

use docgen_domain::constants::DEFAULT_SOURCE_LANGUAGE;
use docgen_domain::entities::CodeEntity;
use docgen_domain::error::{Error, Result};
use docgen_domain::ports::providers::EntityExtractor;
use tracing::debug;
use tree_sitter::{Node, Tree};

use crate::constants::{
    TS_NODE_BLOCK, TS_NODE_CLASS_DEFINITION, TS_NODE_CLAUSE_SUFFIX, TS_NODE_COMMENT,
    TS_NODE_DECORATED_DEFINITION, TS_NODE_EXEC_STATEMENT, TS_NODE_FUNCTION_DEFINITION,
    TS_NODE_PRINT_STATEMENT,
};

/// Python extractor yielding top-level functions, classes and their direct methods.
///
/// Source spans start at the `def`/`class` keyword, so decorators are not part
/// of an entity's text, and end with the last statement of the body, so
/// comments trailing the body are not either. Documents containing any syntax
/// error, or Python 2 only statements, yield nothing.
pub struct PythonEntityExtractor {
    language: tree_sitter::Language,
}

impl Default for PythonEntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonEntityExtractor {
    /// Create a new Python extractor
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| Error::extraction(format!("Failed to set tree-sitter language: {e:?}")))?;

        parser
            .parse(source, None)
            .ok_or_else(|| Error::extraction("Tree-sitter parsing failed"))
    }

    /// The function or class behind a (possibly decorated) definition
    fn definition(node: Node<'_>) -> Option<Node<'_>> {
        match node.kind() {
            TS_NODE_FUNCTION_DEFINITION | TS_NODE_CLASS_DEFINITION => Some(node),
            TS_NODE_DECORATED_DEFINITION => node.child_by_field_name("definition"),
            _ => None,
        }
    }

    fn name<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
        node.child_by_field_name("name")
            .and_then(|n| n.utf8_text(source.as_bytes()).ok())
    }

    fn span<'s>(node: Node<'_>, source: &'s str) -> &'s str {
        source
            .get(node.start_byte()..Self::content_end(node))
            .unwrap_or_default()
            .trim_end()
    }

    /// End byte of `node` without the comments closing its innermost body
    ///
    /// Only blocks and clauses are descended into; any other node ends where
    /// tree-sitter says it does.
    fn content_end(node: Node<'_>) -> usize {
        let mut cursor = node.walk();
        let last = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != TS_NODE_COMMENT)
            .last();
        match last {
            Some(child) if node.kind() == TS_NODE_BLOCK || Self::is_body(child) => {
                Self::content_end(child)
            }
            _ => node.end_byte(),
        }
    }

    fn is_body(node: Node<'_>) -> bool {
        node.kind() == TS_NODE_BLOCK || node.kind().ends_with(TS_NODE_CLAUSE_SUFFIX)
    }

    /// Whether the tree holds a statement only Python 2 accepts
    ///
    /// The grammar parses `print x` and `exec code` without error nodes.
    fn has_legacy_statement(root: Node<'_>) -> bool {
        let mut cursor = root.walk();
        loop {
            let kind = cursor.node().kind();
            if kind == TS_NODE_PRINT_STATEMENT || kind == TS_NODE_EXEC_STATEMENT {
                return true;
            }
            if cursor.goto_first_child() {
                continue;
            }
            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    return false;
                }
            }
        }
    }

    fn collect_class(class: Node<'_>, source: &str, entities: &mut Vec<CodeEntity>) {
        let Some(class_name) = Self::name(class, source) else {
            return;
        };
        entities.push(CodeEntity::class(class_name, Self::span(class, source)));

        let Some(body) = class.child_by_field_name("body") else {
            return;
        };
        let mut cursor = body.walk();
        for statement in body.named_children(&mut cursor) {
            let Some(method) = Self::definition(statement) else {
                continue;
            };
            if method.kind() != TS_NODE_FUNCTION_DEFINITION {
                continue;
            }
            if let Some(method_name) = Self::name(method, source) {
                entities.push(CodeEntity::method(
                    class_name,
                    method_name,
                    Self::span(method, source),
                ));
            }
        }
    }
}

impl EntityExtractor for PythonEntityExtractor {
    fn extract(&self, source: &str) -> Vec<CodeEntity> {
        let tree = match self.parse(source) {
            Ok(tree) => tree,
            Err(e) => {
                debug!(error = %e, "Python parse failed, nothing to document");
                return Vec::new();
            }
        };
        let root = tree.root_node();
        if root.has_error() {
            debug!("Python source has syntax errors, nothing to document");
            return Vec::new();
        }
        if Self::has_legacy_statement(root) {
            debug!("Python 2 statements found, nothing to document");
            return Vec::new();
        }

        let mut entities = Vec::new();
        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            let Some(definition) = Self::definition(statement) else {
                continue;
            };
            match definition.kind() {
                TS_NODE_FUNCTION_DEFINITION => {
                    if let Some(name) = Self::name(definition, source) {
                        entities.push(CodeEntity::function(name, Self::span(definition, source)));
                    }
                }
                TS_NODE_CLASS_DEFINITION => Self::collect_class(definition, source, &mut entities),
                _ => {}
            }
        }
        entities
    }

    fn language(&self) -> &str {
        DEFAULT_SOURCE_LANGUAGE
    }

    fn provider_name(&self) -> &str {
        "tree-sitter-python"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use docgen_application::ports::registry::{
    EXTRACTION_PROVIDERS, ExtractionProviderConfig, ExtractionProviderEntry,
};

fn python_factory(
    _config: &ExtractionProviderConfig,
) -> std::result::Result<Arc<dyn EntityExtractor>, String> {
    Ok(Arc::new(PythonEntityExtractor::new()))
}

#[linkme::distributed_slice(EXTRACTION_PROVIDERS)]
static PYTHON_EXTRACTOR: ExtractionProviderEntry = ExtractionProviderEntry {
    name: "python",
    description: "Python functions, classes and methods (tree-sitter)",
    factory: python_factory,
};
