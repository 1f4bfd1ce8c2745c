use crate::error::Result;
use crate::workbook::Workbook;
use casillero_core::{A1Range, AddressBlock, AddressLayout};

pub struct AddressesRepo<'a> {
    workbook: Workbook<'a>,
    range: &'a A1Range,
    layout: &'a AddressLayout,
}

impl<'a> AddressesRepo<'a> {
    pub fn new(workbook: Workbook<'a>, range: &'a A1Range, layout: &'a AddressLayout) -> Self {
        Self {
            workbook,
            range,
            layout,
        }
    }

    pub fn render(&self, client_name: &str) -> Result<Vec<AddressBlock>> {
        let grid = self.workbook.fetch(self.range)?;
        Ok(self.layout.render(&grid, client_name))
    }

    pub fn block(&self, key: &str, client_name: &str) -> Result<Option<AddressBlock>> {
        let grid = self.workbook.fetch(self.range)?;
        Ok(self.layout.block(&grid, key, client_name))
    }
}
