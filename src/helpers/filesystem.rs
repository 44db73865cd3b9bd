use std::io;

/// Where config files come from. Tests swap in an in-memory version.
pub trait FilesystemTrait {
    /// The whole file as a string, or None if there is nothing at the path. A file that exists but
    /// can't be read (permissions, a directory in the way, not UTF-8) is an error rather than None.
    fn read_if_exists(&self, path: &str) -> io::Result<Option<String>>;
}

pub type Filesystem = Box<dyn FilesystemTrait>;

pub fn real_filesystem() -> Filesystem {
    Box::new(DiskFilesystem)
}

struct DiskFilesystem;

impl FilesystemTrait for DiskFilesystem {
    fn read_if_exists(&self, path: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_crate(name: &str) -> String {
        let mut buf = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        buf.push(name);
        buf.to_string_lossy().into_owned()
    }

    #[test]
    fn reads_existing_file() {
        let contents = real_filesystem()
            .read_if_exists(&in_crate("Cargo.toml"))
            .expect("reading Cargo.toml failed")
            .expect("Cargo.toml is missing");
        assert!(contents.contains("name = \"weather-station\""));
    }

    #[test]
    fn missing_file_is_none() {
        let contents = real_filesystem()
            .read_if_exists(&in_crate("no-such-weather.toml"))
            .expect("a missing file should not be an error");
        assert_eq!(contents, None);
    }

    #[test]
    fn directory_is_an_error() {
        assert!(real_filesystem().read_if_exists(&in_crate("src")).is_err());
    }
}
