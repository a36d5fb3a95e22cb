use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Render the file and write it to disk.
    ///
    /// Rendering happens before anything touches the filesystem, so a
    /// rendering failure leaves any existing file untouched.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render()?;
        File::new(path, content).with_rules(self.rules()).write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content and was left alone
    Unchanged,
}

/// A file to be generated
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfChanged => {
                let current = std::fs::read_to_string(&self.path).ok();
                if current.as_deref() == Some(self.content.as_str()) {
                    Ok(WriteResult::Unchanged)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Replace the file only when its content differs, keeping the
    /// modification time stable for build tools that watch it.
    pub fn overwrite_if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite
    #[default]
    Always,
    /// Overwrite only when the content differs
    IfChanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Hello;

    impl GeneratedFile for Hello {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("hello.txt")
        }

        fn rules(&self) -> FileRules {
            FileRules::overwrite_if_changed()
        }

        fn render(&self) -> Result<String> {
            Ok("hello\n".to_string())
        }
    }

    struct Broken;

    impl GeneratedFile for Broken {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("broken.txt")
        }

        fn rules(&self) -> FileRules {
            FileRules::default()
        }

        fn render(&self) -> Result<String> {
            eyre::bail!("cannot render")
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_changed_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("same.txt");

        fs::write(&path, "same").unwrap();

        let file = File::new(&path, "same").with_rules(FileRules::overwrite_if_changed());
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_if_changed_replaces_different_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("changed.txt");

        fs::write(&path, "old").unwrap();

        let file = File::new(&path, "new").with_rules(FileRules::overwrite_if_changed());
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        assert_eq!(Hello.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(Hello.write(temp.path()).unwrap(), WriteResult::Unchanged);
        assert_eq!(
            fs::read_to_string(temp.path().join("hello.txt")).unwrap(),
            "hello\n"
        );
    }

    #[test]
    fn test_render_failure_writes_nothing() {
        let temp = TempDir::new().unwrap();

        assert!(Broken.write(temp.path()).is_err());
        assert!(!temp.path().join("broken.txt").exists());
    }
}
