use crate::error::CoreError;

pub const DEFAULT_COUNTRY_CODE: &str = "506";

/// Reduces phone numbers to a comparable digit suffix.
///
/// The country calling code is stripped once from the front of the digit
/// string, so `+506 8888-8888` and `8888 8888` normalize identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNormalizer {
    country_code: String,
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl PhoneNormalizer {
    pub fn new(country_code: &str) -> Result<Self, CoreError> {
        let trimmed = country_code.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(CoreError::InvalidCountryCode(country_code.to_string()));
        }
        Ok(Self {
            country_code: trimmed.to_string(),
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn normalize(&self, value: Option<&str>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        let digits: String = value.chars().filter(|ch| ch.is_ascii_digit()).collect();
        match digits.strip_prefix(self.country_code.as_str()) {
            Some(local) => local.to_string(),
            None => digits,
        }
    }

    pub fn matches(&self, a: Option<&str>, b: Option<&str>) -> bool {
        let a = self.normalize(a);
        let b = self.normalize(b);
        if a.is_empty() || b.is_empty() {
            return false;
        }
        a == b || a.ends_with(&b) || b.ends_with(&a)
    }
}

pub fn normalize_phone(value: Option<&str>) -> String {
    PhoneNormalizer::default().normalize(value)
}

pub fn phone_matches(a: Option<&str>, b: Option<&str>) -> bool {
    PhoneNormalizer::default().matches(a, b)
}
