use crate::domain::{normalize_email, ClientRecord, PhoneNormalizer};
use crate::domain::{CLIENT_EMAIL_COL, CLIENT_PHONE_COL};
use crate::sheet::cell;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientMatch {
    /// 1-based position of the row within the rows that were searched.
    pub position: usize,
    pub row: Vec<String>,
    pub client: ClientRecord,
}

/// Resolves a client row from either an email or a phone number.
///
/// The query is not classified up front: each row is tested against both
/// keys and the first row (in source order) that matches either wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMatcher {
    phones: PhoneNormalizer,
}

impl IdentityMatcher {
    pub fn new(phones: PhoneNormalizer) -> Self {
        Self { phones }
    }

    pub fn find(&self, query: &str, rows: &[Vec<String>]) -> Option<ClientMatch> {
        let email = normalize_email(query);
        rows.iter().enumerate().find_map(|(index, row)| {
            let email_hit = email
                .as_deref()
                .is_some_and(|email| cell(row, CLIENT_EMAIL_COL).to_lowercase() == email);
            let phone_hit = self
                .phones
                .matches(Some(cell(row, CLIENT_PHONE_COL)), Some(query));
            if email_hit || phone_hit {
                Some(ClientMatch {
                    position: index + 1,
                    row: row.clone(),
                    client: ClientRecord::from_row(row),
                })
            } else {
                None
            }
        })
    }
}
