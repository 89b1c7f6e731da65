//! Port interface for per-item parameter values

use tootbatch_domain::Result;

/// Supplies typed parameter values for a given item.
///
/// `Ok(None)` means the parameter was not supplied for that item; the
/// parameter schema then applies its default or reports a missing required
/// field. A value of the wrong type is a [`tootbatch_domain::TootError::Validation`].
pub trait ParameterResolver: Send + Sync {
    /// Resolve a string parameter
    fn get_string(&self, name: &str, index: usize) -> Result<Option<String>>;

    /// Resolve a numeric parameter
    fn get_number(&self, name: &str, index: usize) -> Result<Option<f64>>;

    /// Resolve a list-of-strings parameter
    fn get_string_list(&self, name: &str, index: usize) -> Result<Option<Vec<String>>>;
}
