//! Provider implementations for generative-text services.

pub mod gemini;

// Re-export commonly used provider types
pub use gemini::GeminiProvider;
