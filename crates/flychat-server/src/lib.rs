//! flychat-server: Reference backend for the flychat widget
//!
//! Answers `POST /chat` by routing the message to one of a few simple tools
//! (company knowledge base, lead lookup, meeting scheduler).

pub mod agent;
pub mod error;
pub mod handlers;
pub mod tools;

use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub use agent::{Agent, Route};
pub use error::{AppError, AppResult};
pub use tools::{DataError, KnowledgeBase, Lead, LeadBook, Scheduler, Tool};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Tool router answering chat messages.
    pub agent: Arc<Agent>,
}

impl AppState {
    pub fn new(agent: Agent) -> Self {
        Self {
            agent: Arc::new(agent),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: String,
    /// Company facts JSON object.
    pub company_path: PathBuf,
    /// Leads JSON array.
    pub leads_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".into(),
            company_path: PathBuf::from("data/company.json"),
            leads_path: PathBuf::from("data/leads.json"),
        }
    }
}

impl ServerConfig {
    /// Load tool data and build the agent.
    pub fn load_agent(&self) -> Result<Agent, DataError> {
        let knowledge = KnowledgeBase::load(&self.company_path)?;
        let leads = LeadBook::load(&self.leads_path)?;
        Ok(Agent::new(knowledge, leads))
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/chat", post(handlers::chat))
        .layer(cors)
        .with_state(state)
}

/// Errors that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Tool data could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load data, bind and serve until the process is stopped.
pub async fn serve(config: &ServerConfig) -> Result<(), ServeError> {
    let agent = config.load_agent()?;
    let app = router(AppState::new(agent));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "chat backend listening");

    axum::serve(listener, app).await?;
    Ok(())
}
