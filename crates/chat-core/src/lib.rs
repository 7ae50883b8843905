pub mod engine;
pub mod memory;
pub mod store;
pub mod types;

pub use engine::{ChatEngine, PLAN_PLACEHOLDER};
pub use memory::MemoryChatStore;
pub use store::ChatStore;
pub use types::{ChatExchange, ChatMessage, ChatRef};
