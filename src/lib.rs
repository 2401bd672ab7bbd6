//! A minimal HTTP relay in front of a generative-text provider.
//!
//! The service exposes a single `POST /generate` endpoint that forwards a
//! text prompt, unmodified, to Google Gemini's `generateContent` API and
//! returns the generated text (or an error) to the caller. Each request is
//! an independent, stateless round trip.

pub mod config;
pub mod error;
pub mod provider;
pub mod providers;
pub mod relay;
pub mod server;

// Re-export core types for easy usage
pub use config::Config;
pub use error::Error;
pub use provider::TextProvider;
pub use providers::GeminiProvider;
pub use relay::PromptRelay;
