/// Where displays show things. Mockable so tests can read what was shown.
pub trait OutputTrait: Send + Sync {
    /// Shows one line, the line should not include a trailing newline
    fn write_line(&self, line: &str);
}

pub type Output = std::sync::Arc<dyn OutputTrait>;

pub fn stdout_output() -> Output {
    std::sync::Arc::new(StdoutOutput)
}

struct StdoutOutput;

impl OutputTrait for StdoutOutput {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}
