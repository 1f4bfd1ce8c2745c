pub mod classification;
pub mod client;
pub mod email;
pub mod phone;
pub mod quote;
pub mod tracking;

pub use classification::{ClassificationInput, ClassificationResult, Tier};
pub use client::{
    parse_balance, ClientNew, ClientRecord, CLIENT_ADDRESS_COL, CLIENT_BALANCE_COL,
    CLIENT_EMAIL_COL, CLIENT_NAME_COL, CLIENT_PHONE_COL, CLIENT_ROW_WIDTH,
};
pub use email::normalize_email;
pub use phone::{normalize_phone, phone_matches, PhoneNormalizer, DEFAULT_COUNTRY_CODE};
pub use quote::{QuoteRecord, QuoteRequest, MISSING_FIELD, QUOTE_ROW_WIDTH};
pub use tracking::{trackings_for_client, TrackingItem};
