pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod repo;
pub mod workbook;

use crate::error::Result;
use casillero_core::{A1Range, AddressLayout, IdentityMatcher};
use rusqlite::Connection;
use std::path::Path;

pub use workbook::Workbook;

/// An open workbook session. Operations borrow it; dropping it closes the
/// underlying connection.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn workbook(&self) -> Workbook<'_> {
        Workbook::new(&self.conn)
    }

    pub fn clients<'a>(
        &'a self,
        range: &'a A1Range,
        matcher: &'a IdentityMatcher,
    ) -> repo::ClientsRepo<'a> {
        repo::ClientsRepo::new(self.workbook(), range, matcher)
    }

    pub fn trackings<'a>(&'a self, range: &'a A1Range) -> repo::TrackingsRepo<'a> {
        repo::TrackingsRepo::new(self.workbook(), range)
    }

    pub fn addresses<'a>(
        &'a self,
        range: &'a A1Range,
        layout: &'a AddressLayout,
    ) -> repo::AddressesRepo<'a> {
        repo::AddressesRepo::new(self.workbook(), range, layout)
    }

    pub fn quotes<'a>(&'a self, range: &'a A1Range) -> repo::QuotesRepo<'a> {
        repo::QuotesRepo::new(self.workbook(), range)
    }
}
