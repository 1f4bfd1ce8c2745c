pub mod classify;
pub mod identity;

pub use classify::{ClassifierRule, ProductClassifier, Vocabulary, RULE_ORDER};
pub use identity::{ClientMatch, IdentityMatcher};
