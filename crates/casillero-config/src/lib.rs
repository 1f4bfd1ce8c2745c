use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use casillero_core::{
    A1Range, AddressLayout, AddressRegion, CoreError, PhoneNormalizer, ProductClassifier,
    Vocabulary,
};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "casillero";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_CLIENTS_RANGE: &str = "Clientes!A2:H";
pub const DEFAULT_TRACKINGS_RANGE: &str = "Trackings!A2:F";
pub const DEFAULT_QUOTES_RANGE: &str = "Cotizaciones!A2:K";
pub const DEFAULT_ADDRESSES_RANGE: &str = "Direcciones!A1:G23";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub phones: PhoneNormalizer,
    pub sheets: SheetsConfig,
    pub classifier: ProductClassifier,
    pub addresses: AddressLayout,
}

/// Named ranges of the workbook each operation reads from or appends to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    pub clients: A1Range,
    pub trackings: A1Range,
    pub quotes: A1Range,
    pub addresses: A1Range,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        let parse = |raw: &str| A1Range::parse(raw).expect("default range is valid");
        Self {
            clients: parse(DEFAULT_CLIENTS_RANGE),
            trackings: parse(DEFAULT_TRACKINGS_RANGE),
            quotes: parse(DEFAULT_QUOTES_RANGE),
            addresses: parse(DEFAULT_ADDRESSES_RANGE),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            phones: PhoneNormalizer::default(),
            sheets: SheetsConfig::default(),
            classifier: ProductClassifier::default(),
            addresses: AddressLayout::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid {field}: {message}")]
    InvalidField { field: String, message: String },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    fn field(field: impl Into<String>, err: CoreError) -> Self {
        ConfigError::InvalidField {
            field: field.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    phone_country_code: Option<String>,
    sheets: Option<SheetsFile>,
    classifier: Option<ClassifierFile>,
    addresses: Option<AddressesFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SheetsFile {
    clients: Option<String>,
    trackings: Option<String>,
    quotes: Option<String>,
    addresses: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassifierFile {
    scrutiny_origin: Option<String>,
    prohibited: Option<Vec<String>>,
    special: Option<Vec<String>>,
    brands: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AddressesFile {
    placeholder: Option<String>,
    regions: Option<Vec<AddressRegionFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AddressRegionFile {
    key: String,
    label: Option<String>,
    range: String,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(code) = parsed.phone_country_code {
        config.phones = PhoneNormalizer::new(&code)
            .map_err(|err| ConfigError::field("phone_country_code", err))?;
    }

    if let Some(sheets) = parsed.sheets {
        merge_sheets(&mut config.sheets, sheets)?;
    }

    if let Some(classifier) = parsed.classifier {
        config.classifier = ProductClassifier::new(merge_vocabulary(
            config.classifier.vocabulary(),
            classifier,
        )?);
    }

    if let Some(addresses) = parsed.addresses {
        config.addresses = merge_addresses(&config.addresses, addresses)?;
    }

    Ok(config)
}

fn merge_sheets(sheets: &mut SheetsConfig, file: SheetsFile) -> Result<()> {
    let entries = [
        ("sheets.clients", file.clients, &mut sheets.clients),
        ("sheets.trackings", file.trackings, &mut sheets.trackings),
        ("sheets.quotes", file.quotes, &mut sheets.quotes),
        ("sheets.addresses", file.addresses, &mut sheets.addresses),
    ];
    for (field, raw, target) in entries {
        let Some(raw) = raw else {
            continue;
        };
        let range = A1Range::parse(&raw).map_err(|err| ConfigError::field(field, err))?;
        if range.sheet.is_empty() {
            return Err(ConfigError::InvalidField {
                field: field.to_string(),
                message: format!("range must name a sheet: {raw}"),
            });
        }
        *target = range;
    }
    Ok(())
}

fn merge_vocabulary(current: &Vocabulary, file: ClassifierFile) -> Result<Vocabulary> {
    let prohibited = file
        .prohibited
        .unwrap_or_else(|| current.prohibited().to_vec());
    let special = file.special.unwrap_or_else(|| current.special().to_vec());
    let brands = file.brands.unwrap_or_else(|| current.brands().to_vec());
    let origin = file
        .scrutiny_origin
        .unwrap_or_else(|| current.scrutiny_origin().to_string());
    Vocabulary::new(
        prohibited.as_slice(),
        special.as_slice(),
        brands.as_slice(),
        &origin,
    )
        .map_err(|err| ConfigError::field("classifier", err))
}

fn merge_addresses(current: &AddressLayout, file: AddressesFile) -> Result<AddressLayout> {
    let placeholder = file
        .placeholder
        .unwrap_or_else(|| current.placeholder().to_string());
    let regions = match file.regions {
        Some(regions) => regions
            .into_iter()
            .map(parse_region)
            .collect::<Result<Vec<_>>>()?,
        None => current.regions().to_vec(),
    };
    AddressLayout::new(&placeholder, regions).map_err(|err| ConfigError::field("addresses", err))
}

fn parse_region(file: AddressRegionFile) -> Result<AddressRegion> {
    let field = format!("addresses.regions.{}", file.key.trim());
    let range = A1Range::parse(&file.range).map_err(|err| ConfigError::field(&field, err))?;
    let range = range.cell_range().ok_or_else(|| ConfigError::InvalidField {
        field: field.clone(),
        message: format!("region range must have an end row: {}", file.range),
    })?;
    Ok(AddressRegion {
        key: file.key,
        label: file.label.unwrap_or_default(),
        range,
    })
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, AddressRegionFile, AddressesFile, ClassifierFile, ConfigError,
        ConfigFile, SheetsFile,
    };
    use casillero_core::{CellRange, ClassificationInput, Tier};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    #[test]
    fn merge_config_defaults_when_empty() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged.phones.country_code(), "506");
        assert_eq!(merged.sheets.clients.to_string(), "Clientes!A2:H");
        assert_eq!(merged.addresses.regions().len(), 6);
        assert_eq!(merged.classifier.vocabulary().scrutiny_origin(), "colombia");
    }

    #[test]
    fn default_addresses_range_covers_every_default_region() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        let range = &merged.sheets.addresses;
        assert_eq!(range.to_string(), "Direcciones!A1:G23");
        let bounds = range.cell_range().expect("bounded range");
        for region in merged.addresses.regions() {
            assert!(region.range.end_row <= bounds.end_row - bounds.start_row);
            assert!(region.range.end_col <= bounds.end_col - bounds.start_col);
        }
        assert!(merged
            .addresses
            .regions()
            .iter()
            .any(|region| region.range.end_row == bounds.end_row - bounds.start_row));
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            phone_country_code: Some("57".to_string()),
            sheets: Some(SheetsFile {
                clients: Some("Customers!A1:H".to_string()),
                ..SheetsFile::default()
            }),
            classifier: Some(ClassifierFile {
                scrutiny_origin: Some("Panamá".to_string()),
                brands: Some(vec!["Acme".to_string()]),
                ..ClassifierFile::default()
            }),
            addresses: Some(AddressesFile {
                placeholder: Some("{cliente}".to_string()),
                regions: Some(vec![AddressRegionFile {
                    key: "usa".to_string(),
                    label: Some("USA".to_string()),
                    range: "B2:D5".to_string(),
                }]),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.phones.country_code(), "57");
        assert_eq!(merged.sheets.clients.sheet, "Customers");
        assert_eq!(merged.sheets.quotes.sheet, "Cotizaciones");
        assert_eq!(merged.addresses.placeholder(), "{cliente}");
        assert_eq!(merged.addresses.regions()[0].range, CellRange::new(1, 4, 1, 3));

        let result = merged.classifier.classify(&ClassificationInput {
            description: "reloj acme",
            category_label: "",
            origin: "panamá",
        });
        assert_eq!(result.tier, Tier::Special);
        assert_eq!(result.tags, vec!["brand:acme".to_string()]);
        assert!(!merged.classifier.vocabulary().prohibited().is_empty());
    }

    #[test]
    fn merge_config_rejects_invalid_values() {
        let err = merge_config(ConfigFile {
            phone_country_code: Some("+506".to_string()),
            ..ConfigFile::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { ref field, .. } if field == "phone_country_code"));

        let err = merge_config(ConfigFile {
            sheets: Some(SheetsFile {
                quotes: Some("A2:K".to_string()),
                ..SheetsFile::default()
            }),
            ..ConfigFile::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("sheets.quotes"));

        let err = merge_config(ConfigFile {
            addresses: Some(AddressesFile {
                placeholder: None,
                regions: Some(vec![AddressRegionFile {
                    key: "usa".to_string(),
                    label: None,
                    range: "A1:C".to_string(),
                }]),
            }),
            ..ConfigFile::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("end row"));

        let err = merge_config(ConfigFile {
            classifier: Some(ClassifierFile {
                special: Some(vec!["".to_string()]),
                ..ClassifierFile::default()
            }),
            ..ConfigFile::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("keyword cannot be empty"));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "phone_country_code = \"507\"\n\
             [sheets]\ntrackings = \"Paquetes!A2:F\"\n\
             [classifier]\nprohibited = [\"Lanza\"]\n\
             [[addresses.regions]]\nkey = \"miami\"\nrange = \"A1:C7\"\n",
        )
        .expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.phones.country_code(), "507");
        assert_eq!(config.sheets.trackings.sheet, "Paquetes");
        assert_eq!(config.classifier.vocabulary().prohibited(), ["lanza".to_string()]);
        assert_eq!(config.addresses.regions().len(), 1);
        assert_eq!(config.addresses.regions()[0].label, "miami");
    }

    #[test]
    fn load_at_path_rejects_unknown_fields() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "spreadsheet = \"abc\"\n").expect("write config");
        restrict_permissions(&path);

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn load_at_path_rejects_world_readable_file() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "").expect("write config");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::InsecurePermissions(_)));
    }
}
