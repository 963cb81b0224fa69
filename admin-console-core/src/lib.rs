//! Admin Console Core Library
//!
//! Provides the platform-independent logic behind the admin console:
//! - Record model (accounts and articles)
//! - Record service contract (`AccountService`, `ArticleService`)
//! - Article publication workflow
//! - Per-kind capability sets (columns, forms, statistics, row actions)
//! - The entity management screen that ties them together
//!
//! Storage and presentation are abstracted away: hosts inject service
//! implementations through [`ServiceContext`] and render the state exposed by
//! [`EntityScreen`].

pub mod error;
pub mod kind;
pub mod screen;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;
pub mod workflow;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use screen::{EntityScreen, Outcome};
pub use services::ServiceContext;
pub use traits::{AccountService, ArticleService};
