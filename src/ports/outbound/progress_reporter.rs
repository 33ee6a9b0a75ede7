/// ProgressReporter port for user-facing status output
///
/// Status lines go to stderr in the console adapter so they never mix with
/// report content. The per-app extraction loop drives `report_progress`.
pub trait ProgressReporter {
    /// Reports a status line
    fn report(&self, message: &str);

    /// Reports loop progress
    ///
    /// # Arguments
    /// * `current` - Number of apps processed so far
    /// * `total` - Number of enumerated apps
    /// * `message` - Optional label, usually the app being processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning, such as a recorded per-app extraction failure
    fn report_error(&self, message: &str);

    /// Reports completion of a phase
    fn report_completion(&self, message: &str);
}
