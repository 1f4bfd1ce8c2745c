use crate::sheet::cell;
use serde::{Deserialize, Serialize};

pub const TRACKING_CODE_COL: usize = 0;
pub const TRACKING_OWNER_COL: usize = 1;
pub const TRACKING_COMMENTS_COL: usize = 2;
pub const TRACKING_ORIGIN_COL: usize = 3;
pub const TRACKING_STATUS_COL: usize = 4;
pub const TRACKING_WEIGHT_COL: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingItem {
    pub tracking_code: String,
    pub comments: String,
    pub origin: String,
    pub status: String,
    pub weight: String,
}

impl TrackingItem {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            tracking_code: cell(row, TRACKING_CODE_COL).to_string(),
            comments: cell(row, TRACKING_COMMENTS_COL).to_string(),
            origin: cell(row, TRACKING_ORIGIN_COL).to_string(),
            status: cell(row, TRACKING_STATUS_COL).to_string(),
            weight: cell(row, TRACKING_WEIGHT_COL).to_string(),
        }
    }
}

/// Trackings whose owner column equals `client_name`, ignoring case and
/// surrounding whitespace. Row order is preserved.
pub fn trackings_for_client(rows: &[Vec<String>], client_name: &str) -> Vec<TrackingItem> {
    let wanted = client_name.trim().to_lowercase();
    if wanted.is_empty() {
        return Vec::new();
    }
    rows.iter()
        .filter(|row| cell(row, TRACKING_OWNER_COL).trim().to_lowercase() == wanted)
        .map(|row| TrackingItem::from_row(row))
        .collect()
}
