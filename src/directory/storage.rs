use std::fs;
use std::path::Path;

use super::types::Directory;
use crate::error::DeskError;

pub fn load_from_path(path: &Path) -> Result<Directory, DeskError> {
    let contents = fs::read_to_string(path)?;
    let directory = parse_directory(&contents)?;
    log::debug!(
        "Loaded {} branches, {} users, {} departments, {} couriers from {}",
        directory.branches.len(),
        directory.users.len(),
        directory.departments.len(),
        directory.couriers.len(),
        path.display()
    );
    Ok(directory)
}

pub fn parse_directory(contents: &str) -> Result<Directory, DeskError> {
    serde_json::from_str(contents).map_err(|e| DeskError::InvalidData(e.to_string()))
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
