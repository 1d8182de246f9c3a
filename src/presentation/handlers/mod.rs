mod auth;
mod chat;
mod documents;
mod health;
mod upload;

pub use auth::{login_handler, signup_handler, LoginRequest, LoginResponse, SignupRequest};
pub use chat::{chat_handler, ChatRequest, ChatResponse};
pub use documents::{
    delete_document_handler, view_documents_handler, view_my_document_handler, DocumentDto,
};
pub use health::health_handler;
pub use upload::{upload_handler, UploadResponse};
