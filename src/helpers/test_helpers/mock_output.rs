use super::*;

/// Collects displayed lines instead of printing them
#[derive(Clone, Default)]
pub struct MockOutput(Arc<Mutex<Vec<String>>>);

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Output {
        Arc::new(self.clone())
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl OutputTrait for MockOutput {
    fn write_line(&self, line: &str) {
        self.0.lock().unwrap().push(line.to_string());
    }
}
