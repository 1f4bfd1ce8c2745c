use crate::domain::{ClassificationInput, ClassificationResult, Tier};
use serde::{Deserialize, Serialize};

pub const MISSING_FIELD: &str = "N/A";
pub const QUOTE_ROW_WIDTH: usize = 11;

/// Raw fields of a quote request as collected from the client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub client_name: Option<String>,
    pub client_contact: Option<String>,
    pub client_email: Option<String>,
    pub origin: Option<String>,
    pub weight: Option<f64>,
    pub declared_value: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl QuoteRequest {
    pub fn classification_input(&self) -> ClassificationInput<'_> {
        ClassificationInput {
            description: self.description.as_deref().unwrap_or(""),
            category_label: self.category.as_deref().unwrap_or(""),
            origin: self.origin.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub timestamp: String,
    pub client_name: String,
    pub client_contact: String,
    pub client_email: String,
    pub origin: String,
    pub weight: f64,
    pub declared_value: f64,
    pub category: String,
    pub description: String,
    pub tier: Tier,
    pub tags: String,
}

impl QuoteRecord {
    pub fn build(
        request: &QuoteRequest,
        classification: &ClassificationResult,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            client_name: text_or_missing(&request.client_name),
            client_contact: text_or_missing(&request.client_contact),
            client_email: text_or_missing(&request.client_email),
            origin: text_or_missing(&request.origin),
            weight: number_or_zero(request.weight),
            declared_value: number_or_zero(request.declared_value),
            category: text_or_missing(&request.category),
            description: text_or_missing(&request.description),
            tier: classification.tier,
            tags: classification.joined_tags(),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.client_name.clone(),
            self.client_contact.clone(),
            self.client_email.clone(),
            self.origin.clone(),
            self.weight.to_string(),
            self.declared_value.to_string(),
            self.category.clone(),
            self.description.clone(),
            self.tier.label().to_string(),
            self.tags.clone(),
        ]
    }
}

fn text_or_missing(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => MISSING_FIELD.to_string(),
    }
}

fn number_or_zero(value: Option<f64>) -> f64 {
    value.filter(|number| number.is_finite()).unwrap_or(0.0)
}
