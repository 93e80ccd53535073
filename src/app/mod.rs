//! Application layer.
//!
//! # Structure
//!
//! - `levels` / `messages` - Core data types (ExplanationLevel, Message)
//! - `explain` / `formatter` / `export` - Business operations
//! - `settings` / `platform` / `error` - Configuration and infrastructure
//! - `state.rs` - Main application coordinator
pub mod error;
pub mod explain;
pub mod export;
pub mod formatter;
pub mod levels;
pub mod messages;
pub mod platform;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use error::AppError;
pub use explain::ExplainConfig;
pub use levels::ExplanationLevel;
pub use messages::Message;
pub use platform::detect_system_dark_mode;
pub use settings::{AppSettings, ThemeMode};
pub use state::{AppState, RequestState};
