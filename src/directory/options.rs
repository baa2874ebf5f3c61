//! Builds autocomplete option lists from directory records

use super::types::Directory;
use crate::autocomplete::SelectOption;

/// Destination candidates: branches first, then users
///
/// Records without a name are skipped; they could never be confirmed to a
/// meaningful value.
pub fn destination_options(directory: &Directory) -> Vec<SelectOption> {
    let branches = directory
        .branches
        .iter()
        .filter(|b| !b.branch_name.is_empty())
        .map(|b| SelectOption::new(b.branch_name.clone(), b.label()));

    let users = directory
        .users
        .iter()
        .filter(|u| !u.name.is_empty())
        .map(|u| {
            let label = if u.email.is_empty() {
                u.name.clone()
            } else {
                format!("{} - {}", u.name, u.email)
            };
            SelectOption::new(u.name.clone(), label)
        });

    branches.chain(users).collect()
}

pub fn department_options(directory: &Directory) -> Vec<SelectOption> {
    directory
        .departments
        .iter()
        .filter(|d| !d.name.is_empty())
        .map(|d| SelectOption::new(d.name.clone(), d.name.clone()))
        .collect()
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
