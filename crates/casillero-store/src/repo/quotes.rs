use crate::error::Result;
use crate::workbook::Workbook;
use casillero_core::{A1Range, ProductClassifier, QuoteRecord, QuoteRequest};

pub struct QuotesRepo<'a> {
    workbook: Workbook<'a>,
    range: &'a A1Range,
}

impl<'a> QuotesRepo<'a> {
    pub fn new(workbook: Workbook<'a>, range: &'a A1Range) -> Self {
        Self { workbook, range }
    }

    /// Classifies the request, appends the resulting quote row and returns
    /// the record that was written.
    pub fn create(
        &self,
        classifier: &ProductClassifier,
        request: &QuoteRequest,
        timestamp: &str,
    ) -> Result<QuoteRecord> {
        let classification = classifier.classify(&request.classification_input());
        let record = QuoteRecord::build(request, &classification, timestamp);
        self.workbook.append(self.range, &record.to_row())?;
        Ok(record)
    }
}
