pub mod address;
pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;
pub mod sheet;
pub mod time;

pub use address::{AddressBlock, AddressLayout, AddressRegion};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use rules::*;
pub use sheet::{extract_range, A1Range, CellRange, Grid};
