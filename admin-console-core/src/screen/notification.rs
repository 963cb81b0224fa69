//! Success / error notification slots

use std::fmt;

use crate::types::RecordType;
use crate::workflow::StatusAction;

/// Screen operation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
    StatusAction,
}

impl Operation {
    /// Generic message used when the error carries none
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load data",
            Operation::Create => "Failed to create",
            Operation::Update => "Failed to update",
            Operation::Delete => "Failed to delete",
            Operation::StatusAction => "Action failed",
        }
    }
}

/// A message shown to the operator
///
/// Kept structured so front ends can localize it; `Display` gives the
/// English text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Created(RecordType),
    Updated(RecordType),
    Deleted,
    Transitioned(StatusAction),
    Failed {
        operation: Operation,
        /// Message carried by the error, if any
        reason: Option<String>,
    },
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failed { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Created(t) => write!(f, "{} created", t.label()),
            Notice::Updated(t) => write!(f, "{} updated", t.label()),
            Notice::Deleted => f.write_str("Deleted"),
            Notice::Transitioned(StatusAction::Publish) => f.write_str("Published"),
            Notice::Transitioned(StatusAction::Archive) => f.write_str("Archived"),
            Notice::Transitioned(StatusAction::Restore) => f.write_str("Restored"),
            Notice::Failed {
                reason: Some(reason),
                ..
            } => f.write_str(reason),
            Notice::Failed {
                operation,
                reason: None,
            } => f.write_str(operation.fallback_message()),
        }
    }
}

/// Two independent slots; writing one never touches the other
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    success: Option<Notice>,
    error: Option<Notice>,
}

impl Notifications {
    pub fn success(&self) -> Option<&Notice> {
        self.success.as_ref()
    }

    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }

    pub(crate) fn notify_success(&mut self, notice: Notice) {
        self.success = Some(notice);
    }

    pub(crate) fn notify_error(&mut self, notice: Notice) {
        self.error = Some(notice);
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_independent() {
        let mut n = Notifications::default();
        n.notify_error(Notice::Failed {
            operation: Operation::Load,
            reason: None,
        });
        n.notify_success(Notice::Deleted);
        assert!(n.error().is_some());

        n.dismiss_success();
        assert!(n.success().is_none());
        assert!(n.error().is_some());
    }

    #[test]
    fn failure_falls_back_to_operation_message() {
        let notice = Notice::Failed {
            operation: Operation::StatusAction,
            reason: None,
        };
        assert_eq!(notice.to_string(), "Action failed");

        let notice = Notice::Failed {
            operation: Operation::Create,
            reason: Some("Username already exists: kim".to_string()),
        };
        assert_eq!(notice.to_string(), "Username already exists: kim");
    }

    #[test]
    fn success_text_names_the_record_type() {
        assert_eq!(Notice::Created(RecordType::Account).to_string(), "Account created");
        assert_eq!(Notice::Updated(RecordType::Article).to_string(), "Article updated");
        assert_eq!(
            Notice::Transitioned(StatusAction::Restore).to_string(),
            "Restored"
        );
    }
}
