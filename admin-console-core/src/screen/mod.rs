//! Entity management screen
//!
//! [`EntityScreen`] holds the state of the admin console for one active
//! record type: the loaded collection, the create/edit dialogs with their
//! form buffer, and the notification slots. Every operation catches its own
//! service errors and turns them into a single error notice, so hosts only
//! look at the returned [`Outcome`] and the exposed state.

mod confirm;
mod form;
mod notification;
mod stats;
mod table;

pub use confirm::DeleteConfirmation;
pub use form::{FieldInput, FormBuffer, FormField};
pub use notification::{Notice, Notifications, Operation};
pub use stats::{Metric, Statistics, Tone};
pub use table::{render_cell, Cell, Column, RowAction, ACTIONS_COLUMN, PLACEHOLDER};

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::kind::RecordKind;
use crate::services::ServiceContext;
use crate::types::{Record, RecordId, RecordType};
use crate::workflow::StatusAction;

/// Result of a screen operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran and changed state
    Completed,
    /// The operation ran and an error notice was set
    Failed,
    /// Nothing happened (declined, not applicable, or stale)
    Skipped,
}

/// Tag of one fetch: the record type it was issued for and its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    record_type: RecordType,
    seq: u64,
}

impl LoadTicket {
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }
}

/// 实体管理界面状态
pub struct EntityScreen {
    ctx: Arc<ServiceContext>,
    record_type: RecordType,
    records: Vec<Record>,
    create_open: bool,
    edit_open: bool,
    selected: Option<Record>,
    form: FormBuffer,
    notifications: Notifications,
    load_seq: u64,
}

impl EntityScreen {
    /// Screen showing articles, like the console does on first open
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self::with_record_type(ctx, RecordType::default())
    }

    pub fn with_record_type(ctx: Arc<ServiceContext>, record_type: RecordType) -> Self {
        Self {
            ctx,
            record_type,
            records: Vec::new(),
            create_open: false,
            edit_open: false,
            selected: None,
            form: FormBuffer::new(),
            notifications: Notifications::default(),
            load_seq: 0,
        }
    }

    // ===== State =====

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn kind(&self) -> &'static dyn RecordKind {
        self.record_type.kind()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_create_open(&self) -> bool {
        self.create_open
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit_open
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &FormBuffer {
        &self.form
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    // ===== Loading =====

    /// Initial load of the active type
    pub async fn mount(&mut self) -> Outcome {
        self.load().await
    }

    /// Make `record_type` active, resetting dialogs, form and collection
    pub async fn switch_type(&mut self, record_type: RecordType) -> Outcome {
        self.record_type = record_type;
        self.form.clear();
        self.create_open = false;
        self.edit_open = false;
        self.selected = None;
        self.records.clear();
        self.load().await
    }

    /// Fetch all records of the active type
    pub async fn load(&mut self) -> Outcome {
        let ticket = self.begin_load();
        let result = self.ctx.fetch(ticket.record_type).await;
        self.finish_load(ticket, result)
    }

    /// Issue a ticket for a fetch of the active type
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        LoadTicket {
            record_type: self.record_type,
            seq: self.load_seq,
        }
    }

    /// Apply the result of a fetch, unless its ticket is stale
    pub fn finish_load(&mut self, ticket: LoadTicket, result: CoreResult<Vec<Record>>) -> Outcome {
        if ticket.record_type != self.record_type || ticket.seq != self.load_seq {
            log::debug!(
                "Discarding stale {} fetch #{} (active: {} #{})",
                ticket.record_type,
                ticket.seq,
                self.record_type,
                self.load_seq
            );
            return Outcome::Skipped;
        }

        match result {
            Ok(records) => {
                self.records = records;
                Outcome::Completed
            }
            Err(e) => {
                log::error!("Failed to load {} records: {e}", self.record_type);
                self.notifications.notify_error(Notice::Failed {
                    operation: Operation::Load,
                    reason: None,
                });
                Outcome::Failed
            }
        }
    }

    // ===== Dialogs =====

    pub fn open_create(&mut self) {
        self.form.clear();
        self.selected = None;
        self.edit_open = false;
        self.create_open = true;
    }

    /// Select the record with `id` and open the edit dialog on a copy of it
    pub fn begin_edit(&mut self, id: RecordId) -> Outcome {
        let Some(record) = self.records.iter().find(|r| r.id() == id).cloned() else {
            return Outcome::Skipped;
        };
        self.form = self.kind().form_from_record(&record);
        self.selected = Some(record);
        self.create_open = false;
        self.edit_open = true;
        Outcome::Completed
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.form.set(key, value);
    }

    /// Dismiss whichever dialog is open
    pub fn close_dialog(&mut self) {
        self.create_open = false;
        self.edit_open = false;
        self.form.clear();
        self.selected = None;
    }

    // ===== Mutations =====

    /// Create a record from the form buffer
    pub async fn create(&mut self) -> Outcome {
        let draft = match self.kind().parse_form(&self.form) {
            Ok(draft) => draft,
            Err(e) => return self.fail(Operation::Create, &e),
        };

        match self.ctx.create(draft).await {
            Ok(_) => {
                self.load().await;
                self.create_open = false;
                self.form.clear();
                self.notifications
                    .notify_success(Notice::Created(self.record_type));
                Outcome::Completed
            }
            Err(e) => self.fail(Operation::Create, &e),
        }
    }

    /// Save the form buffer over the selected record
    pub async fn update(&mut self) -> Outcome {
        let Some(id) = self.selected.as_ref().map(Record::id) else {
            return Outcome::Skipped;
        };
        let draft = match self.kind().parse_form(&self.form) {
            Ok(draft) => draft,
            Err(e) => return self.fail(Operation::Update, &e),
        };

        match self.ctx.update(id, draft).await {
            Ok(_) => {
                self.load().await;
                self.edit_open = false;
                self.form.clear();
                self.selected = None;
                self.notifications
                    .notify_success(Notice::Updated(self.record_type));
                Outcome::Completed
            }
            Err(e) => self.fail(Operation::Update, &e),
        }
    }

    /// Delete after `confirmation` agrees; a refusal changes nothing
    pub async fn delete(&mut self, id: RecordId, confirmation: &dyn DeleteConfirmation) -> Outcome {
        if !confirmation.confirm(self.record_type, id).await {
            log::debug!("Delete of {} #{id} declined", self.record_type);
            return Outcome::Skipped;
        }

        match self.ctx.delete(self.record_type, id).await {
            Ok(()) => {
                self.load().await;
                self.notifications.notify_success(Notice::Deleted);
                Outcome::Completed
            }
            Err(e) => self.fail(Operation::Delete, &e),
        }
    }

    /// Publish, archive or restore an article
    pub async fn status_action(&mut self, id: RecordId, action: StatusAction) -> Outcome {
        if self.record_type != RecordType::Article {
            return Outcome::Skipped;
        }

        match self.ctx.apply_action(id, action).await {
            Ok(_) => {
                self.load().await;
                self.notifications
                    .notify_success(Notice::Transitioned(action));
                Outcome::Completed
            }
            Err(e) => self.fail(Operation::StatusAction, &e),
        }
    }

    // ===== Derived views =====

    pub fn statistics(&self) -> Statistics {
        self.kind().statistics(&self.records)
    }

    pub fn columns(&self) -> &'static [Column] {
        self.kind().columns()
    }

    pub fn render_cell(&self, record: &Record, column: &Column) -> Cell {
        render_cell(self.kind(), record, column)
    }

    pub fn row_actions(&self, record: &Record) -> Vec<RowAction> {
        self.kind().available_actions(record)
    }

    // ===== Notifications =====

    pub fn dismiss_success(&mut self) {
        self.notifications.dismiss_success();
    }

    pub fn dismiss_error(&mut self) {
        self.notifications.dismiss_error();
    }

    fn fail(&mut self, operation: Operation, error: &CoreError) -> Outcome {
        if error.is_expected() {
            log::warn!("{operation:?} on {} rejected: {error}", self.record_type);
        } else {
            log::error!("{operation:?} on {} failed: {error}", self.record_type);
        }
        self.notifications.notify_error(Notice::Failed {
            operation,
            reason: error.message(),
        });
        Outcome::Failed
    }
}
