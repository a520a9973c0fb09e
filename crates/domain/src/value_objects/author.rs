//! Record authorship

use serde::{Deserialize, Serialize};

use super::names::{AccountId, AuthorName};

/// Who created a location record.
///
/// `account_id` is the authoritative identity for ownership checks;
/// `display_name` is cosmetic and may collide across distinct accounts.
/// Authorship is fixed at creation and never editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub display_name: AuthorName,
    pub account_id: AccountId,
}

impl Author {
    pub fn new(display_name: AuthorName, account_id: AccountId) -> Self {
        Self {
            display_name,
            account_id,
        }
    }

    /// Whether `requester` is the account that created the record.
    pub fn is_account(&self, requester: &AccountId) -> bool {
        self.account_id == *requester
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_account_matches_on_account_id_only() {
        let author = Author::new(
            AuthorName::new("steve").unwrap(),
            AccountId::new("100").unwrap(),
        );

        assert!(author.is_account(&AccountId::new("100").unwrap()));
        assert!(!author.is_account(&AccountId::new("200").unwrap()));
    }
}
