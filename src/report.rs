/// Destination for the one status line each setup step emits. Passed
/// explicitly so the workflow stays runnable without a console attached.
pub trait Reporter {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints info lines to stdout and errors to stderr.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}
