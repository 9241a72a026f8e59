mod chat;
mod convert;
mod health;

pub use chat::{ChatRequest, ChatResponse, chat_handler};
pub use convert::{ErrorResponse, UPLOAD_FIELD, img_to_pdf_handler, pdf_to_word_handler};
pub use health::{ROOT_MESSAGE, health_handler, root_handler};
