//! Shared configuration and external-service clients for Kasku.
//!
//! This crate provides the pieces the rest of the workspace consumes:
//! - Configuration management (config files + `KASKU__` environment overrides)
//! - The SMTP email service used by the scheduled report task
//! - The AI advisor client (Gemini-compatible `generateContent` endpoint)

pub mod advisor;
pub mod config;
pub mod email;

pub use advisor::{AdvisorService, AdvisorSnapshot};
pub use config::AppConfig;
pub use email::EmailService;
