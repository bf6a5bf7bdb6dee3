//! Registry of node templates, keyed by node-type id.
//!
//! Populated once at startup by the external catalog loader; read-only
//! during validation. Registration is the only mutator and must not be
//! interleaved with an in-flight batch validation.

use std::collections::HashMap;

use crate::model::NodeTemplate;

#[derive(Debug, Clone, Default)]
pub struct NodeTemplateCatalog {
    templates: HashMap<String, NodeTemplate>,
}

impl NodeTemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template. Idempotent on id: a re-registration replaces
    /// the previous definition. Internal consistency beyond "has at least
    /// one port list" is checked at connect time, not here.
    pub fn register(&mut self, template: NodeTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn lookup(&self, node_type: &str) -> Option<&NodeTemplate> {
        self.templates.get(node_type)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<NodeTemplate> for NodeTemplateCatalog {
    fn from_iter<I: IntoIterator<Item = NodeTemplate>>(iter: I) -> Self {
        let mut catalog = NodeTemplateCatalog::new();
        for template in iter {
            catalog.register(template);
        }
        catalog
    }
}
