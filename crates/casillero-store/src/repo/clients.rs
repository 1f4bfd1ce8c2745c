use crate::error::Result;
use crate::workbook::Workbook;
use casillero_core::{A1Range, ClientMatch, ClientNew, ClientRecord, IdentityMatcher};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Registration {
    Created { row: usize, client: ClientRecord },
    Existing { matched: ClientMatch },
}

pub struct ClientsRepo<'a> {
    workbook: Workbook<'a>,
    range: &'a A1Range,
    matcher: &'a IdentityMatcher,
}

impl<'a> ClientsRepo<'a> {
    pub fn new(workbook: Workbook<'a>, range: &'a A1Range, matcher: &'a IdentityMatcher) -> Self {
        Self {
            workbook,
            range,
            matcher,
        }
    }

    /// Looks the client up by email or phone. Every call re-reads the sheet.
    /// The match position is the 1-based sheet row, the same numbering
    /// [`Registration::Created`] reports.
    pub fn find(&self, query: &str) -> Result<Option<ClientMatch>> {
        let rows = self.workbook.fetch(self.range)?;
        Ok(self.locate(query, &rows))
    }

    /// Registers a client unless one already matches its email or phone, in
    /// which case the existing row is returned and nothing is written.
    pub fn register(&self, client: ClientNew) -> Result<Registration> {
        let rows = self.workbook.fetch(self.range)?;
        for key in [client.email.as_str(), client.phone.as_str()] {
            if key.trim().is_empty() {
                continue;
            }
            if let Some(matched) = self.locate(key, &rows) {
                return Ok(Registration::Existing { matched });
            }
        }
        self.register_unchecked(client)
    }

    fn locate(&self, query: &str, rows: &[Vec<String>]) -> Option<ClientMatch> {
        self.matcher.find(query, rows).map(|mut matched| {
            matched.position += self.range.start_row;
            matched
        })
    }

    /// Appends the registration row without looking for an existing client.
    pub fn register_unchecked(&self, client: ClientNew) -> Result<Registration> {
        let cells = ClientRecord::registration_row(&client)?;
        let row = self.workbook.append(self.range, &cells)?;
        Ok(Registration::Created {
            row,
            client: ClientRecord::from_row(&cells),
        })
    }
}
