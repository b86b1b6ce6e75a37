//! Keyword router that picks one tool per query.
//!
//! Routing is checked in order: leads, then scheduling, then the knowledge
//! base as the fallback.

use crate::tools::{KnowledgeBase, LeadBook, Scheduler, Tool};
use tracing::info;

/// Which tool a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Leads,
    Scheduler,
    Knowledge,
}

impl Route {
    /// Pick a route from the query's keywords.
    pub fn for_query(query: &str) -> Self {
        let query = query.to_lowercase();
        if query.contains("lead") || query.contains("show") {
            Route::Leads
        } else if query.contains("meeting") || query.contains("schedule") {
            Route::Scheduler
        } else {
            Route::Knowledge
        }
    }
}

/// The set of tools a query can be dispatched to.
#[derive(Debug, Clone, Default)]
pub struct Agent {
    knowledge: KnowledgeBase,
    leads: LeadBook,
    scheduler: Scheduler,
}

impl Agent {
    pub fn new(knowledge: KnowledgeBase, leads: LeadBook) -> Self {
        Self {
            knowledge,
            leads,
            scheduler: Scheduler,
        }
    }

    fn tool(&self, route: Route) -> &dyn Tool {
        match route {
            Route::Leads => &self.leads,
            Route::Scheduler => &self.scheduler,
            Route::Knowledge => &self.knowledge,
        }
    }

    /// Answer a user query with exactly one tool.
    pub fn run(&self, query: &str) -> String {
        let tool = self.tool(Route::for_query(query));
        info!(tool = tool.name(), about = tool.description(), "routing chat query");
        tool.run(query)
    }
}
