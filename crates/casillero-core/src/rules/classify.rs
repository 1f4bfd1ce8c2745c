use crate::domain::{ClassificationInput, ClassificationResult, Tier};
use crate::error::CoreError;

pub const DEFAULT_SCRUTINY_ORIGIN: &str = "colombia";
pub const REPLICA_MARKERS: [&str; 2] = ["replica", "réplica"];
pub const REPLICA_TAG: &str = "replica";
pub const BRAND_TAG_PREFIX: &str = "brand:";

pub const DEFAULT_PROHIBITED: &[&str] = &[
    "arma",
    "pistola",
    "rifle",
    "municion",
    "munición",
    "explosivo",
    "pirotecnia",
    "droga",
    "marihuana",
    "cocaina",
    "cocaína",
    "narcotico",
    "narcótico",
    "alcohol",
    "licor",
    "falsificado",
    "falsificación",
    "dinero",
    "efectivo",
    "billete",
    "material peligroso",
    "inflamable",
    "radiactivo",
    "veneno",
    "animal vivo",
    "animales vivos",
];

pub const DEFAULT_SPECIAL: &[&str] = &[
    "perfume",
    "colonia",
    "cosmetico",
    "cosmético",
    "maquillaje",
    "crema",
    "medicamento",
    "medicina",
    "pastilla",
    "vitamina",
    "suplemento",
    "proteina",
    "proteína",
    "comida",
    "alimento",
    "semilla",
    "chocolate",
    "café",
    "quimico",
    "químico",
    "bebida",
    "bateria",
    "batería",
    "aerosol",
];

pub const DEFAULT_BRANDS: &[&str] = &[
    "nike",
    "adidas",
    "jordan",
    "puma",
    "gucci",
    "louis vuitton",
    "chanel",
    "prada",
    "dior",
    "versace",
    "balenciaga",
    "rolex",
    "michael kors",
    "lacoste",
    "tommy hilfiger",
    "ralph lauren",
    "under armour",
    "apple",
    "samsung",
];

/// Keyword lists the classifier matches against. All entries are stored
/// trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    prohibited: Vec<String>,
    special: Vec<String>,
    brands: Vec<String>,
    scrutiny_origin: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|word| word.to_string()).collect();
        Self {
            prohibited: owned(DEFAULT_PROHIBITED),
            special: owned(DEFAULT_SPECIAL),
            brands: owned(DEFAULT_BRANDS),
            scrutiny_origin: DEFAULT_SCRUTINY_ORIGIN.to_string(),
        }
    }
}

impl Vocabulary {
    pub fn new<S: AsRef<str>>(
        prohibited: &[S],
        special: &[S],
        brands: &[S],
        scrutiny_origin: &str,
    ) -> Result<Self, CoreError> {
        let scrutiny_origin = scrutiny_origin.trim().to_lowercase();
        if scrutiny_origin.is_empty() {
            return Err(CoreError::EmptyScrutinyOrigin);
        }
        Ok(Self {
            prohibited: normalize_keywords(prohibited)?,
            special: normalize_keywords(special)?,
            brands: normalize_keywords(brands)?,
            scrutiny_origin,
        })
    }

    pub fn prohibited(&self) -> &[String] {
        &self.prohibited
    }

    pub fn special(&self) -> &[String] {
        &self.special
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn scrutiny_origin(&self) -> &str {
        &self.scrutiny_origin
    }

    fn is_scrutiny_origin(&self, origin: &str) -> bool {
        origin.trim().to_lowercase() == self.scrutiny_origin
    }
}

fn normalize_keywords<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>, CoreError> {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                Err(CoreError::EmptyKeyword)
            } else {
                Ok(word)
            }
        })
        .collect()
}

/// One step of the classification policy. Rules run in [`RULE_ORDER`] and
/// the first one that yields a result decides the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierRule {
    Prohibited,
    ReplicaOverride,
    SpecialKeyword,
    Brand,
    Default,
}

pub const RULE_ORDER: [ClassifierRule; 5] = [
    ClassifierRule::Prohibited,
    ClassifierRule::ReplicaOverride,
    ClassifierRule::SpecialKeyword,
    ClassifierRule::Brand,
    ClassifierRule::Default,
];

impl ClassifierRule {
    pub fn name(self) -> &'static str {
        match self {
            ClassifierRule::Prohibited => "prohibited",
            ClassifierRule::ReplicaOverride => "replica-override",
            ClassifierRule::SpecialKeyword => "special-keyword",
            ClassifierRule::Brand => "brand",
            ClassifierRule::Default => "default",
        }
    }

    pub fn evaluate(
        self,
        vocabulary: &Vocabulary,
        input: &ClassificationInput<'_>,
    ) -> Option<ClassificationResult> {
        match self {
            ClassifierRule::Prohibited => {
                let description = input.description.to_lowercase();
                vocabulary
                    .prohibited
                    .iter()
                    .find(|word| description.contains(word.as_str()))
                    .map(|word| ClassificationResult::new(Tier::Prohibited, vec![word.clone()]))
            }
            ClassifierRule::ReplicaOverride => {
                let category = input.category_label.to_lowercase();
                if !REPLICA_MARKERS
                    .iter()
                    .any(|marker| category.contains(marker))
                {
                    return None;
                }
                Some(ClassificationResult::new(
                    corridor_tier(vocabulary, input.origin),
                    vec![REPLICA_TAG.to_string()],
                ))
            }
            ClassifierRule::SpecialKeyword => {
                let description = input.description.to_lowercase();
                let tags: Vec<String> = vocabulary
                    .special
                    .iter()
                    .filter(|word| description.contains(word.as_str()))
                    .cloned()
                    .collect();
                if tags.is_empty() {
                    None
                } else {
                    Some(ClassificationResult::new(Tier::Special, tags))
                }
            }
            ClassifierRule::Brand => {
                let description = input.description.to_lowercase();
                vocabulary
                    .brands
                    .iter()
                    .find(|brand| description.contains(brand.as_str()))
                    .map(|brand| {
                        ClassificationResult::new(
                            corridor_tier(vocabulary, input.origin),
                            vec![format!("{BRAND_TAG_PREFIX}{brand}")],
                        )
                    })
            }
            ClassifierRule::Default => Some(ClassificationResult::general()),
        }
    }
}

fn corridor_tier(vocabulary: &Vocabulary, origin: &str) -> Tier {
    if vocabulary.is_scrutiny_origin(origin) {
        Tier::Special
    } else {
        Tier::General
    }
}

/// Assigns a merchandise-risk tier to a quote request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductClassifier {
    vocabulary: Vocabulary,
}

impl ProductClassifier {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn classify(&self, input: &ClassificationInput<'_>) -> ClassificationResult {
        self.classify_with_rule(input).1
    }

    /// Like [`classify`](Self::classify) but also reports which rule fired.
    pub fn classify_with_rule(
        &self,
        input: &ClassificationInput<'_>,
    ) -> (ClassifierRule, ClassificationResult) {
        for rule in RULE_ORDER {
            if let Some(result) = rule.evaluate(&self.vocabulary, input) {
                return (rule, result);
            }
        }
        (ClassifierRule::Default, ClassificationResult::general())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassifierRule, ProductClassifier, Vocabulary};
    use crate::domain::{ClassificationInput, ClassificationResult, Tier};
    use crate::error::CoreError;

    fn input<'a>(description: &'a str, category: &'a str, origin: &'a str) -> ClassificationInput<'a> {
        ClassificationInput {
            description,
            category_label: category,
            origin,
        }
    }

    fn classify(description: &str, category: &str, origin: &str) -> ClassificationResult {
        ProductClassifier::default().classify(&input(description, category, origin))
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn special_keyword_wins_over_brand() {
        let result = classify("perfume Chanel", "", "Costa Rica");
        assert_eq!(result.tier, Tier::Special);
        assert!(result.tags.contains(&"perfume".to_string()));
        assert!(!result.tags.iter().any(|tag| tag.starts_with("brand:")));
    }

    #[test]
    fn prohibited_reports_first_keyword() {
        let result = classify("arma de fuego", "", "colombia");
        assert_eq!(result, ClassificationResult::new(Tier::Prohibited, tags(&["arma"])));
    }

    #[test]
    fn prohibited_beats_replica_category() {
        let result = classify("réplica de pistola", "réplica", "colombia");
        assert_eq!(result.tier, Tier::Prohibited);
        assert_eq!(result.tags, tags(&["pistola"]));
    }

    #[test]
    fn replica_from_scrutiny_origin_is_special() {
        let result = classify("perfume", "réplica bolso", "colombia");
        assert_eq!(result, ClassificationResult::new(Tier::Special, tags(&["replica"])));
    }

    #[test]
    fn replica_from_other_origin_is_general() {
        let result = classify("", "réplica reloj", "panama");
        assert_eq!(result, ClassificationResult::new(Tier::General, tags(&["replica"])));
        let result = classify("", "Replica", "PANAMA");
        assert_eq!(result.tier, Tier::General);
    }

    #[test]
    fn special_keywords_collect_all_matches_regardless_of_origin() {
        let result = classify("Crema y vitamina C", "", "mexico");
        assert_eq!(
            result,
            ClassificationResult::new(Tier::Special, tags(&["crema", "vitamina"]))
        );
    }

    #[test]
    fn brand_depends_on_origin() {
        let result = classify("zapatos Nike", "", "mexico");
        assert_eq!(result, ClassificationResult::new(Tier::General, tags(&["brand:nike"])));
        let result = classify("zapatos Nike", "", " Colombia ");
        assert_eq!(result, ClassificationResult::new(Tier::Special, tags(&["brand:nike"])));
    }

    #[test]
    fn unmatched_description_is_general_with_no_tags() {
        let result = classify("camiseta azul", "", "mexico");
        assert_eq!(result, ClassificationResult::general());
        assert!(result.tags.is_empty());
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = ProductClassifier::default();
        let request = input("zapatos Nike y crema", "ropa", "colombia");
        let first = classifier.classify(&request);
        for _ in 0..3 {
            assert_eq!(classifier.classify(&request), first);
        }
    }

    #[test]
    fn classify_with_rule_reports_deciding_rule() {
        let classifier = ProductClassifier::default();
        let (rule, _) = classifier.classify_with_rule(&input("camiseta", "", ""));
        assert_eq!(rule, ClassifierRule::Default);
        let (rule, _) = classifier.classify_with_rule(&input("zapatos nike", "", ""));
        assert_eq!(rule, ClassifierRule::Brand);
    }

    #[test]
    fn rules_evaluate_independently() {
        let vocabulary = Vocabulary::default();
        let request = input("perfume Chanel", "", "colombia");
        assert!(ClassifierRule::Prohibited.evaluate(&vocabulary, &request).is_none());
        assert!(ClassifierRule::ReplicaOverride
            .evaluate(&vocabulary, &request)
            .is_none());
        let brand = ClassifierRule::Brand.evaluate(&vocabulary, &request).unwrap();
        assert_eq!(brand.tags, tags(&["brand:chanel"]));
        assert_eq!(brand.tier, Tier::Special);
    }

    #[test]
    fn injected_vocabulary_replaces_defaults() {
        let vocabulary =
            Vocabulary::new(&["Lanza"], &["Té"], &["Acme Co"], "Panamá").unwrap();
        let classifier = ProductClassifier::new(vocabulary);
        assert_eq!(classifier.classify(&input("una LANZA", "", "")).tags, tags(&["lanza"]));
        assert_eq!(classifier.classify(&input("arma", "", "")).tier, Tier::General);
        let result = classifier.classify(&input("reloj acme co", "", "panamá"));
        assert_eq!(result, ClassificationResult::new(Tier::Special, tags(&["brand:acme co"])));
        assert_eq!(classifier.classify(&input("té verde", "", "")).tier, Tier::Special);
    }

    #[test]
    fn vocabulary_rejects_blank_entries() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Vocabulary::new(&[" "], &empty, &empty, "colombia").unwrap_err(),
            CoreError::EmptyKeyword
        );
        assert_eq!(
            Vocabulary::new(&empty, &empty, &empty, "  ").unwrap_err(),
            CoreError::EmptyScrutinyOrigin
        );
    }
}
