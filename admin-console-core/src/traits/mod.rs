//! Record service contract
//!
//! One service instance per record type. Hosts provide implementations
//! (remote API clients, file stores, the in-memory reference services).

mod account_service;
mod article_service;

pub use account_service::AccountService;
pub use article_service::ArticleService;
