//! Where the directory comes from: a JSON file or the REST API

use std::path::PathBuf;

use super::storage::load_from_path;
use super::types::Directory;
use crate::api::{Session, fetch_directory_blocking};
use crate::config::Config;
use crate::error::DeskError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorySource {
    File(PathBuf),
    Api(Session),
}

/// Pick a source; command-line flags win over the config file and a data
/// file wins over the API at the same level
pub fn resolve_source(
    data: Option<PathBuf>,
    api_url: Option<String>,
    token: Option<String>,
    config: &Config,
) -> Result<DirectorySource, DeskError> {
    let token = token.or_else(|| config.api.token.clone());

    if let Some(path) = data {
        return Ok(DirectorySource::File(path));
    }
    if let Some(url) = api_url {
        return Ok(DirectorySource::Api(Session::new(url, token)));
    }
    if let Some(path) = &config.data.path {
        return Ok(DirectorySource::File(path.clone()));
    }
    if let Some(url) = &config.api.base_url {
        return Ok(DirectorySource::Api(Session::new(url.clone(), token)));
    }

    Err(DeskError::NoDataSource)
}

pub fn load_directory(source: DirectorySource) -> Result<Directory, DeskError> {
    match source {
        DirectorySource::File(path) => load_from_path(&path),
        DirectorySource::Api(session) => {
            log::info!("Fetching directory from {}", session.base_url());
            Ok(fetch_directory_blocking(session)?)
        }
    }
}
