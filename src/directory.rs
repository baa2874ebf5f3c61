//! Back-office directory: branches, users, departments and couriers

mod options;
mod source;
mod storage;
mod types;

pub use options::{department_options, destination_options};
pub use source::{DirectorySource, load_directory, resolve_source};
pub use storage::{load_from_path, parse_directory};
pub use types::{
    Branch, Courier, CourierStatus, Department, Directory, UserSummary, format_branch_label,
};
