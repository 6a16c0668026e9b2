pub mod chat;
pub mod complaint;
pub mod config;

pub use chat::{ChatHistoryResponse, ChatRequest, ChatResponse, ChatTurn};
pub use complaint::{ComplaintRecord, ComplaintResponse, FilingType, ImmediateHelp};
pub use config::Config;
