//! Status and role taxonomies.
//!
//! The free-text status vocabulary is parsed into a closed
//! `StatusCategory` here and nowhere else; downstream logic matches on
//! the enum instead of re-scanning strings.

pub mod role;
pub mod stage;
pub mod status;

pub use role::Role;
pub use stage::role_for_stage;
pub use status::{display_status, StatusCategory};
