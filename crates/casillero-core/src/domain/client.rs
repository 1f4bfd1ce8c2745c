use crate::error::CoreError;
use crate::sheet::cell;
use serde::{Deserialize, Serialize};

pub const CLIENT_NAME_COL: usize = 0;
pub const CLIENT_EMAIL_COL: usize = 1;
pub const CLIENT_PHONE_COL: usize = 3;
pub const CLIENT_ADDRESS_COL: usize = 6;
pub const CLIENT_BALANCE_COL: usize = 7;
pub const CLIENT_ROW_WIDTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub name: String,
    pub email: String,
    pub contact_phone: String,
    pub address: String,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientNew {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ClientRecord {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            name: cell(row, CLIENT_NAME_COL).to_string(),
            email: cell(row, CLIENT_EMAIL_COL).to_string(),
            contact_phone: cell(row, CLIENT_PHONE_COL).to_string(),
            address: cell(row, CLIENT_ADDRESS_COL).to_string(),
            balance: parse_balance(cell(row, CLIENT_BALANCE_COL)),
        }
    }

    /// Row appended for a new client. Columns 2, 4 and 5 are kept as empty
    /// placeholders and the balance always starts at zero.
    pub fn registration_row(client: &ClientNew) -> Result<Vec<String>, CoreError> {
        let name = client.name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyClientName);
        }
        Ok(vec![
            name.to_string(),
            client.email.trim().to_string(),
            String::new(),
            client.phone.trim().to_string(),
            String::new(),
            String::new(),
            client.address.trim().to_string(),
            "0".to_string(),
        ])
    }
}

pub fn parse_balance(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
