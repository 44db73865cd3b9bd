use super::*;

/// In-memory files, so config can be tested without touching disk. A path mapped to None exists
/// but can't be read.
#[derive(Debug, Clone, Default)]
pub struct MockFilesystem(Arc<Mutex<HashMap<String, Option<String>>>>);

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(self, path: &str, contents: &str) -> Self {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_string(), Some(contents.to_string()));
        self
    }

    pub fn add_unreadable(self, path: &str) -> Self {
        self.0.lock().unwrap().insert(path.to_string(), None);
        self
    }

    pub fn boxed(&self) -> Filesystem {
        Box::new(self.clone())
    }
}

impl FilesystemTrait for MockFilesystem {
    fn read_if_exists(&self, path: &str) -> std::io::Result<Option<String>> {
        match self.0.lock().unwrap().get(path) {
            None => Ok(None),
            Some(Some(contents)) => Ok(Some(contents.clone())),
            Some(None) => Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            )),
        }
    }
}
