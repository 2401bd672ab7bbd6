use crate::Error;

/// A generative-text provider that can turn a prompt into text.
///
/// The provider is a black box: the relay forwards the prompt verbatim and
/// returns whatever text the provider produced, with no transformation.
#[async_trait::async_trait]
pub trait TextProvider: Send + Sync + 'static {
    /// Generate text for a single prompt.
    async fn generate_content(&self, prompt: &str) -> Result<String, Error>;
}
