use crate::domain::{Tier, TrackingItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationDto {
    pub tier: Tier,
    pub tags: Vec<String>,
    pub rule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingListDto {
    pub client_name: String,
    pub items: Vec<TrackingItem>,
}
