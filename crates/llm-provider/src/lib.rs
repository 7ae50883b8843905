pub mod error;
pub mod providers;
pub mod resilient;
pub mod traits;
pub mod types;

pub use error::ProviderError;
pub use traits::LlmProvider;
pub use types::{Role, Turn};

// Re-export providers
pub use providers::gemini::GeminiProvider;
pub use providers::mock::MockProvider;
pub use providers::openai::OpenAiProvider;
pub use resilient::ResilientProvider;
