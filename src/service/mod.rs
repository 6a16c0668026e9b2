pub mod chat;
pub mod letter;
pub mod llm;
pub mod session;

pub use chat::SupportChatService;
pub use letter::LetterService;
pub use llm::{GeminiClient, GenerativeModel};
pub use session::SessionStore;
