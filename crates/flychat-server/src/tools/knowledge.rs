//! Company knowledge base: address, phone, services, pricing and so on.

use super::{read_json, DataError, Tool};
use serde_json::{Map, Value};
use std::path::Path;

/// Key/value company facts, in file order.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    facts: Map<String, Value>,
}

impl KnowledgeBase {
    /// Build from an in-memory JSON object.
    pub fn new(facts: Map<String, Value>) -> Self {
        Self { facts }
    }

    /// Load from a JSON object file such as `data/company.json`.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        read_json(path).map(Self::new)
    }

    /// The first fact whose key appears in the query, as `key: value`.
    pub fn lookup(&self, query: &str) -> Option<String> {
        let query = query.to_lowercase();
        self.facts
            .iter()
            .find(|(key, _)| query.contains(key.as_str()))
            .map(|(key, value)| format!("{key}: {}", display_value(value)))
    }
}

impl Tool for KnowledgeBase {
    fn name(&self) -> &'static str {
        "knowledge_base"
    }

    fn description(&self) -> &'static str {
        "Fetch company details like address, phone, services, pricing"
    }

    fn run(&self, query: &str) -> String {
        self.lookup(query)
            .unwrap_or_else(|| Value::Object(self.facts.clone()).to_string())
    }
}

/// Strings render bare; everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
