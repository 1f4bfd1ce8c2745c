use crate::error::CoreError;
use crate::sheet::{extract_range, CellRange};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_NAME_PLACEHOLDER: &str = "[NOMBRE]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRegion {
    pub key: String,
    pub label: String,
    pub range: CellRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBlock {
    pub key: String,
    pub label: String,
    pub text: String,
}

/// Warehouse address blocks laid out in one shared grid. Every block carries
/// a name placeholder that is replaced with the client's name on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressLayout {
    placeholder: String,
    regions: Vec<AddressRegion>,
}

impl Default for AddressLayout {
    fn default() -> Self {
        let region = |key: &str, label: &str, rows: (usize, usize), cols: (usize, usize)| {
            AddressRegion {
                key: key.to_string(),
                label: label.to_string(),
                range: CellRange::new(rows.0, rows.1, cols.0, cols.1),
            }
        };
        Self {
            placeholder: DEFAULT_NAME_PLACEHOLDER.to_string(),
            regions: vec![
                region("miami_aereo", "Miami (aéreo)", (0, 6), (0, 2)),
                region("miami_maritimo", "Miami (marítimo)", (0, 6), (4, 6)),
                region("china", "China", (8, 14), (0, 2)),
                region("colombia", "Colombia", (8, 14), (4, 6)),
                region("panama", "Panamá", (16, 22), (0, 2)),
                region("espana", "España", (16, 22), (4, 6)),
            ],
        }
    }
}

impl AddressLayout {
    pub fn new(placeholder: &str, regions: Vec<AddressRegion>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        let mut cleaned = Vec::with_capacity(regions.len());
        for mut region in regions {
            let key = region.key.trim().to_string();
            if key.is_empty() {
                return Err(CoreError::EmptyRegionKey);
            }
            if !seen.insert(key.clone()) {
                return Err(CoreError::DuplicateRegionKey(key));
            }
            if region.label.trim().is_empty() {
                region.label = key.clone();
            }
            region.key = key;
            cleaned.push(region);
        }
        Ok(Self {
            placeholder: placeholder.to_string(),
            regions: cleaned,
        })
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn regions(&self) -> &[AddressRegion] {
        &self.regions
    }

    pub fn render(&self, grid: &[Vec<String>], client_name: &str) -> Vec<AddressBlock> {
        self.regions
            .iter()
            .map(|region| self.render_region(grid, region, client_name))
            .collect()
    }

    pub fn block(
        &self,
        grid: &[Vec<String>],
        key: &str,
        client_name: &str,
    ) -> Option<AddressBlock> {
        let key = key.trim();
        self.regions
            .iter()
            .find(|region| region.key.eq_ignore_ascii_case(key))
            .map(|region| self.render_region(grid, region, client_name))
    }

    fn render_region(
        &self,
        grid: &[Vec<String>],
        region: &AddressRegion,
        client_name: &str,
    ) -> AddressBlock {
        let mut text = extract_range(grid, region.range);
        if !self.placeholder.is_empty() {
            text = text.replace(&self.placeholder, client_name.trim());
        }
        AddressBlock {
            key: region.key.clone(),
            label: region.label.clone(),
            text,
        }
    }
}
