use catalog::Catalog;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Error type for CLI initialization failures
#[derive(Debug)]
pub enum CliError {
    HomeDirNotFound,
    CatalogLoad(anyhow::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::HomeDirNotFound => {
                write!(
                    f,
                    "Could not determine home directory. Please set HOME environment variable or use --catalog to specify the catalog location."
                )
            }
            CliError::CatalogLoad(e) => {
                write!(
                    f,
                    "Failed to load product catalog: {e:#}\n\nPossible fixes:\n  - Ensure the catalog file exists and is readable\n  - Use a .json, .yaml or .csv file extension\n  - Use --catalog to specify a different file\n  - Remove ~/.storefront/catalog.yaml to use the built-in demo catalog"
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::HomeDirNotFound => None,
            CliError::CatalogLoad(e) => Some(e.as_ref()),
        }
    }
}

/// `~/.storefront/catalog.yaml`
pub fn default_catalog_path() -> Result<PathBuf, CliError> {
    dirs::home_dir()
        .map(|home| home.join(".storefront").join("catalog.yaml"))
        .ok_or(CliError::HomeDirNotFound)
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog, CliError> {
    Catalog::new_from_file(path).map_err(|e| {
        CliError::CatalogLoad(anyhow::Error::new(e).context(format!("reading {}", path.display())))
    })
}

/// Resolve the catalog to search: an explicit path must load; otherwise the
/// default location is used when present, and the demo catalog when not.
pub fn resolve_catalog(explicit: Option<&Path>) -> Result<Catalog, CliError> {
    if let Some(path) = explicit {
        return load_catalog_file(path);
    }

    match default_catalog_path() {
        Ok(path) if path.exists() => load_catalog_file(&path),
        Ok(path) => {
            info!(
                "No catalog at {}, using the built-in demo catalog",
                path.display()
            );
            Ok(Catalog::demo())
        }
        Err(e) => {
            warn!("{}", e);
            Ok(Catalog::demo())
        }
    }
}
