// src/application/articles/mod.rs
mod create;
mod lifecycle;
mod manager;
mod queries;
mod update;

pub use lifecycle::ArticleLifecycle;
pub use manager::ArticleManager;
