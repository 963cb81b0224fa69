//! Article publication workflow
//!
//! | Current state | Action  | Next state |
//! |---------------|---------|------------|
//! | draft         | publish | published  |
//! | published     | archive | archived   |
//! | archived      | restore | published  |
//!
//! No other transitions exist. Clients only offer the single legal action for
//! a status; services call [`StatusAction::apply`] and reject anything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::ArticleStatus;

/// Workflow action on an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusAction {
    Publish,
    Archive,
    Restore,
}

impl StatusAction {
    pub fn all() -> &'static [StatusAction] {
        &[StatusAction::Publish, StatusAction::Archive, StatusAction::Restore]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusAction::Publish => "publish",
            StatusAction::Archive => "archive",
            StatusAction::Restore => "restore",
        }
    }

    /// The only status this action may be applied to
    pub fn source(self) -> ArticleStatus {
        match self {
            StatusAction::Publish => ArticleStatus::Draft,
            StatusAction::Archive => ArticleStatus::Published,
            StatusAction::Restore => ArticleStatus::Archived,
        }
    }

    /// Status after the action succeeds
    pub fn target(self) -> ArticleStatus {
        match self {
            StatusAction::Publish | StatusAction::Restore => ArticleStatus::Published,
            StatusAction::Archive => ArticleStatus::Archived,
        }
    }

    /// Applies the action to `from`, or rejects it with `InvalidTransition`.
    pub fn apply(self, from: ArticleStatus) -> CoreResult<ArticleStatus> {
        if from == self.source() {
            Ok(self.target())
        } else {
            Err(CoreError::InvalidTransition { from, action: self })
        }
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusAction::all()
            .iter()
            .copied()
            .find(|a| a.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("Unknown action: {s}")))
    }
}

impl ArticleStatus {
    /// The single action offered for an article in this status
    pub fn available_action(self) -> StatusAction {
        match self {
            ArticleStatus::Draft => StatusAction::Publish,
            ArticleStatus::Published => StatusAction::Archive,
            ArticleStatus::Archived => StatusAction::Restore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_offers_exactly_its_table_row() {
        for &status in ArticleStatus::all() {
            let action = status.available_action();
            assert_eq!(action.source(), status);
            let legal: Vec<_> = StatusAction::all()
                .iter()
                .filter(|a| a.apply(status).is_ok())
                .collect();
            assert_eq!(legal, vec![&action]);
        }
    }

    #[test]
    fn draft_publish_archive_restore_cycle() {
        let published = StatusAction::Publish.apply(ArticleStatus::Draft).unwrap();
        assert_eq!(published, ArticleStatus::Published);
        let archived = StatusAction::Archive.apply(published).unwrap();
        assert_eq!(archived, ArticleStatus::Archived);
        assert_eq!(
            StatusAction::Restore.apply(archived).unwrap(),
            ArticleStatus::Published
        );
    }

    #[test]
    fn draft_cannot_be_archived_directly() {
        assert_eq!(
            StatusAction::Archive.apply(ArticleStatus::Draft),
            Err(CoreError::InvalidTransition {
                from: ArticleStatus::Draft,
                action: StatusAction::Archive,
            })
        );
        assert!(StatusAction::Publish.apply(ArticleStatus::Archived).is_err());
    }
}
