//! Domain errors.

use thiserror::Error;

use super::draft::FormField;
use super::nav::Screen;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A guarded form was submitted with empty fields.  The message is what
    /// the user sees; `missing` is for logs.
    #[error("Please fill in all fields")]
    Incomplete {
        screen: Screen,
        missing: Vec<FormField>,
    },
}
