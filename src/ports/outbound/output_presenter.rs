use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where one formatted
/// report is written.
pub trait OutputPresenter {
    /// Presents the formatted report content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link
    fn present(&self, content: &str) -> Result<()>;
}
