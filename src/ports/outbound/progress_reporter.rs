/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing progress output (e.g., to stderr) so it
/// never mixes with the formatted report on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress as `current` out of `total`, with an optional message
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
