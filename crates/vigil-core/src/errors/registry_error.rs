//! Mapping registry errors.

/// Errors raised by admin edits to the person→role registry. The
/// registry is unchanged when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("'{name}' already exists; change their role instead of re-adding")]
    DuplicateMember { name: String },

    #[error("member name must not be empty")]
    EmptyName,
}
