pub mod auth;
pub mod extraction;
pub mod llm;
pub mod observability;
pub mod persistence;
pub mod storage;
pub mod translation;
pub mod workspace;
