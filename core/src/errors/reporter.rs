use super::LexError;

/// Sink for lexical diagnostics.
///
/// Called synchronously while scanning. Implementations must return
/// normally; the scanner keeps going after every report.
pub trait ErrorReporter {
    fn report(&mut self, line: usize, message: &str);

    /// Report a typed error. The default forwards its line and message to
    /// [`ErrorReporter::report`].
    fn report_error(&mut self, error: LexError) {
        self.report(error.line(), &error.to_string());
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report(&mut self, line: usize, message: &str) {
        (**self).report(line, message);
    }

    fn report_error(&mut self, error: LexError) {
        (**self).report_error(error);
    }
}

/// Collects everything reported during a pass.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<LexError>,
    messages: Vec<(usize, String)>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Typed errors, in report order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// `(line, message)` for every report, typed or not, in report order.
    pub fn messages(&self) -> &[(usize, String)] {
        &self.messages
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}

impl ErrorReporter for Diagnostics {
    fn report(&mut self, line: usize, message: &str) {
        self.messages.push((line, message.to_owned()));
    }

    fn report_error(&mut self, error: LexError) {
        self.messages.push((error.line(), error.to_string()));
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::Span;

    struct Count(usize);

    impl ErrorReporter for Count {
        fn report(&mut self, _line: usize, _message: &str) {
            self.0 += 1;
        }
    }

    #[test]
    fn default_report_error_forwards_to_report() {
        let mut count = Count(0);
        count.report_error(LexError::unterminated_string(1, Span::new(0, 1)));
        assert_eq!(count.0, 1);
    }

    #[test]
    fn diagnostics_keep_typed_and_plain_reports() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(4, "custom");
        diagnostics.report_error(LexError::unexpected_character('@', 5, Span::new(9, 10)));

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.errors().len(), 1);
        assert_eq!(
            diagnostics.messages(),
            &[
                (4, "custom".to_string()),
                (5, "Unexpected character '@'".to_string())
            ]
        );
    }

    fn report_owned<R: ErrorReporter>(mut reporter: R) {
        reporter.report_error(LexError::unexpected_character('#', 1, Span::new(0, 1)));
    }

    #[test]
    fn mutable_reference_reports_through() {
        let mut diagnostics = Diagnostics::new();
        report_owned(&mut diagnostics);
        assert_eq!(diagnostics.errors().len(), 1);
    }
}
