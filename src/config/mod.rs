//! Credentials file loading: a small INI file at a well-known path.

use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::client::Credentials;
use crate::domain::{ClientId, ClientSecret, ValidationError};

/// Where the utility looks for its credentials.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/telstra-text.conf";

/// Section holding both credential fields.
pub const CREDENTIALS_SECTION: &str = "Credentials";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Nothing usable at the path: no file at all, or a file without a
    /// single named section. Callers treat this as a first run.
    #[error("no config file found at {}", path.display())]
    Missing { path: PathBuf },

    /// Named sections exist, but not the one holding the credentials.
    #[error("'{CREDENTIALS_SECTION}' section missing")]
    MissingSection,

    /// A required key is absent from the credentials section.
    #[error("'{field}' missing")]
    MissingField { field: &'static str },

    /// A key is present but its value fails validation (left blank).
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The file exists but could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid INI.
    #[error("malformed config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ini::ParseError,
    },
}

/// Ready-to-fill file contents printed on first run.
pub fn credentials_template() -> String {
    format!(
        "[{CREDENTIALS_SECTION}]\n{} = \n{} = ",
        ClientId::FIELD,
        ClientSecret::FIELD
    )
}

/// Load [`Credentials`] from the INI file at `path`.
///
/// Section and key names are case-sensitive. Keys outside any section are
/// ignored; a file containing only such keys counts as a first run.
pub fn load_credentials(path: impl AsRef<Path>) -> Result<Credentials, ConfigError> {
    let path = path.as_ref();

    let config = match Ini::load_from_file(path) {
        Ok(config) => config,
        Err(ini::Error::Io(source)) if source.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::Missing {
                path: path.to_owned(),
            });
        }
        Err(ini::Error::Io(source)) => {
            return Err(ConfigError::Io {
                path: path.to_owned(),
                source,
            });
        }
        Err(ini::Error::Parse(source)) => {
            return Err(ConfigError::Parse {
                path: path.to_owned(),
                source,
            });
        }
    };

    if !config.iter().any(|(section, _)| section.is_some()) {
        return Err(ConfigError::Missing {
            path: path.to_owned(),
        });
    }

    let section = config
        .section(Some(CREDENTIALS_SECTION))
        .ok_or(ConfigError::MissingSection)?;

    let client_id = section.get(ClientId::FIELD).ok_or(ConfigError::MissingField {
        field: ClientId::FIELD,
    })?;
    let client_secret = section
        .get(ClientSecret::FIELD)
        .ok_or(ConfigError::MissingField {
            field: ClientSecret::FIELD,
        })?;

    Ok(Credentials::new(client_id, client_secret)?)
}
