//! Evaluation type.
//!
//! The outcome of comparing a candidate secret against a stored memo.

use super::Memo;

/// Whether a secret changed, and the memo to keep from now on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    changed: bool,
    next_memo: Memo,
}

impl Evaluation {
    /// The secret is unchanged; keep the stored memo.
    pub fn unchanged(memo: Memo) -> Self {
        Self {
            changed: false,
            next_memo: memo,
        }
    }

    /// The secret changed; store `memo` instead.
    pub fn changed(memo: Memo) -> Self {
        Self {
            changed: true,
            next_memo: memo,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// The memo the caller should persist.
    pub fn next_memo(&self) -> &Memo {
        &self.next_memo
    }

    pub fn into_memo(self) -> Memo {
        self.next_memo
    }
}
