pub mod orchestrator;

pub use orchestrator::{OrderError, OrderOrchestrator};
