use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::{ChatService, ConversionService};

pub struct AppState<L>
where
    L: LlmClient,
{
    pub chat_service: Arc<ChatService<L>>,
    pub conversion_service: Arc<ConversionService>,
    pub max_upload_size_bytes: usize,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            conversion_service: Arc::clone(&self.conversion_service),
            max_upload_size_bytes: self.max_upload_size_bytes,
        }
    }
}
