//! Session orchestration for the tutor voice agent
//!
//! Ties the pieces together: resolve participant preferences, compose the
//! persona instructions, start the external voice session, and re-augment
//! the instructions with retrieved context after every completed user
//! turn.

pub mod composer;
pub mod session;
pub mod tools;
pub mod usage;

pub use composer::PromptComposer;
pub use session::{SessionConfig, SessionOrchestrator, SessionState};
pub use tools::{LookupWeatherTool, Tool, ToolError, ToolRegistry};
pub use usage::UsageCollector;
