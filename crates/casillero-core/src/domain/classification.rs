use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Prohibited,
    Special,
    General,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Prohibited => "Prohibited",
            Tier::Special => "Special",
            Tier::General => "General",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub tier: Tier,
    pub tags: Vec<String>,
}

impl ClassificationResult {
    pub fn new(tier: Tier, tags: Vec<String>) -> Self {
        Self { tier, tags }
    }

    pub fn general() -> Self {
        Self::new(Tier::General, Vec::new())
    }

    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassificationInput<'a> {
    pub description: &'a str,
    pub category_label: &'a str,
    pub origin: &'a str,
}
