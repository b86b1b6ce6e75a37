//! Lead management: look up sales leads by name.

use super::{read_json, DataError, Tool};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// A sales lead. Only `name` is required; other fields pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// All known leads, in file order.
#[derive(Debug, Clone, Default)]
pub struct LeadBook {
    leads: Vec<Lead>,
}

impl LeadBook {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads }
    }

    /// Load from a JSON array file such as `data/leads.json`.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        read_json(path).map(Self::new)
    }

    /// First lead whose name is mentioned in the query.
    pub fn find(&self, query: &str) -> Option<&Lead> {
        let query = query.to_lowercase();
        self.leads
            .iter()
            .find(|lead| query.contains(&lead.name.to_lowercase()))
    }
}

impl Tool for LeadBook {
    fn name(&self) -> &'static str {
        "lead_management"
    }

    fn description(&self) -> &'static str {
        "Fetch lead details from lead database"
    }

    fn run(&self, query: &str) -> String {
        if query.to_lowercase().contains("all") {
            return render(&self.leads);
        }
        match self.find(query) {
            Some(lead) => render(lead),
            None => "No matching lead found".into(),
        }
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
