/// Error types for loading a product catalog
#[derive(Debug)]
pub enum CatalogError {
    ParseError(String),
    CsvError(csv::Error),
    IoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    SerdeYamlError(serde_yaml_ng::Error),
    UnsupportedFormat(String),
    DuplicateId(String),
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::CsvError(err)
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::IoError(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerdeJsonError(err)
    }
}

impl From<serde_yaml_ng::Error> for CatalogError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        CatalogError::SerdeYamlError(err)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CatalogError::CsvError(err) => write!(f, "CSV error: {}", err),
            CatalogError::IoError(err) => write!(f, "IO error: {}", err),
            CatalogError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
            CatalogError::SerdeYamlError(err) => write!(f, "Serde YAML error: {}", err),
            CatalogError::UnsupportedFormat(format) => {
                write!(
                    f,
                    "Unsupported catalog format '{}'. Use '.json', '.yaml' or '.csv'.",
                    format
                )
            }
            CatalogError::DuplicateId(id) => write!(f, "Duplicate product id: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::CsvError(err) => Some(err),
            CatalogError::IoError(err) => Some(err),
            CatalogError::SerdeJsonError(err) => Some(err),
            CatalogError::SerdeYamlError(err) => Some(err),
            _ => None,
        }
    }
}
