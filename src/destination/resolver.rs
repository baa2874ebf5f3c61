use crate::directory::{Branch, UserSummary, format_branch_label};

/// Which record a destination resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationMatch<'a> {
    Branch(&'a Branch),
    User(&'a UserSummary),
}

impl<'a> DestinationMatch<'a> {
    pub fn email(&self) -> &'a str {
        match self {
            DestinationMatch::Branch(branch) => &branch.email,
            DestinationMatch::User(user) => &user.email,
        }
    }
}

/// Find the record a destination refers to; branches win over users
pub fn resolve_destination<'a>(
    destination: &str,
    branches: &'a [Branch],
    users: &'a [UserSummary],
) -> Option<DestinationMatch<'a>> {
    if destination.is_empty() {
        return None;
    }

    let branch = branches.iter().find(|b| {
        !b.branch_name.is_empty()
            && (b.branch_name == destination
                || format_branch_label(&b.branch_name, &b.branch_code) == destination)
    });
    if let Some(branch) = branch {
        return Some(DestinationMatch::Branch(branch));
    }

    users
        .iter()
        .find(|u| {
            (!u.name.is_empty() && u.name == destination)
                || (!u.email.is_empty() && u.email == destination)
        })
        .map(DestinationMatch::User)
}

/// Overwrite `email` when the destination resolves to a record with an email
///
/// Returns true when the field was written. No match, or a match without an
/// email, leaves the field as the user left it.
pub fn apply_destination_change(
    destination: &str,
    branches: &[Branch],
    users: &[UserSummary],
    email: &mut String,
) -> bool {
    let Some(found) = resolve_destination(destination, branches, users) else {
        log::debug!("Destination {:?} matched no branch or user", destination);
        return false;
    };

    let resolved = found.email();
    if resolved.is_empty() {
        log::debug!("Destination {:?} matched a record without email", destination);
        return false;
    }

    *email = resolved.to_string();
    true
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
