use crate::error::Result;
use crate::workbook::Workbook;
use casillero_core::{trackings_for_client, A1Range, TrackingItem};

pub struct TrackingsRepo<'a> {
    workbook: Workbook<'a>,
    range: &'a A1Range,
}

impl<'a> TrackingsRepo<'a> {
    pub fn new(workbook: Workbook<'a>, range: &'a A1Range) -> Self {
        Self { workbook, range }
    }

    pub fn list_for_client(&self, client_name: &str) -> Result<Vec<TrackingItem>> {
        let rows = self.workbook.fetch(self.range)?;
        Ok(trackings_for_client(&rows, client_name))
    }
}
