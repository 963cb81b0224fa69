//! Delete confirmation

use async_trait::async_trait;

use crate::types::{RecordId, RecordType};

/// Asked before a record is deleted
///
/// The screen awaits the answer; `false` cancels the delete without calling
/// any service.
#[async_trait]
pub trait DeleteConfirmation: Send + Sync {
    async fn confirm(&self, record_type: RecordType, id: RecordId) -> bool;
}

/// A decision already taken by the caller (e.g. a confirm dialog)
#[async_trait]
impl DeleteConfirmation for bool {
    async fn confirm(&self, _record_type: RecordType, _id: RecordId) -> bool {
        *self
    }
}
