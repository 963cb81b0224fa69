//! Account service Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Account, AccountDraft, RecordId};

/// Account service Trait
///
/// Platform implementation:
/// - Reference: `InMemoryAccountService`
/// - TUI: `JsonAccountService` (JSON file)
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Get all accounts
    ///
    /// Fails with `LoadFailure` when the backing store is unreachable or
    /// returns malformed data.
    async fn get_all(&self) -> CoreResult<Vec<Account>>;

    /// Create an account
    ///
    /// Fails with `Validation` when the draft is rejected (missing fields,
    /// duplicate username).
    async fn create(&self, draft: AccountDraft) -> CoreResult<Account>;

    /// Replace the editable fields of an account
    ///
    /// # Arguments
    /// * `id` - Account ID, must exist (`NotFound` otherwise)
    /// * `draft` - new field values
    async fn update(&self, id: RecordId, draft: AccountDraft) -> CoreResult<Account>;

    /// Delete an account
    ///
    /// Not idempotent: deleting an unknown id fails with `NotFound`.
    async fn delete(&self, id: RecordId) -> CoreResult<()>;
}
