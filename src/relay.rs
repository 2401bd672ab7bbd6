use crate::provider::TextProvider;
use crate::Error;
use std::sync::Arc;

/// The prompt relay: validates the prompt and delegates to the provider.
///
/// Each call is an independent request/response cycle with exactly two
/// outcomes; no state is carried between calls.
#[derive(Clone)]
pub struct PromptRelay {
    provider: Arc<dyn TextProvider>,
}

impl PromptRelay {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Forward a prompt to the provider and return the generated text.
    ///
    /// A missing, empty, or whitespace-only prompt fails with `InvalidInput`
    /// before any outbound call is made.
    pub async fn generate(&self, prompt: Option<&str>) -> Result<String, Error> {
        let prompt = match prompt {
            Some(prompt) if !prompt.trim().is_empty() => prompt,
            _ => return Err(Error::invalid_input("No prompt provided")),
        };

        self.provider.generate_content(prompt).await
    }
}
