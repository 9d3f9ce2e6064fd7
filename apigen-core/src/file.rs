//! Writing generated documents to disk.
//!
//! Every generated document is owned by the generator and replaced on each
//! run. Scaffolding such as `apigen.toml` is created once and then left to
//! the user.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// A document produced by a generator, located relative to an output root.
pub trait GeneratedFile {
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    fn render(&self) -> String;

    /// Render and write under `base`, honoring [`GeneratedFile::rules`].
    fn write(&self, base: &Path) -> Result<WriteResult> {
        self.rules().apply(&self.path(base), &self.render())
    }
}

/// Outcome of a single write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The target already existed and its rules forbid replacing it.
    Skipped,
}

/// What to do when the target path is already occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    IfMissing,
}

/// Write policy attached to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Generated output, rewritten on every run.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Scaffolding that belongs to the user once created.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }

    fn apply(self, path: &Path, content: &str) -> Result<WriteResult> {
        if self.overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteResult::Skipped);
        }
        write_file(path, content)?;
        Ok(WriteResult::Written)
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always_overwrite()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))
}

/// An ad-hoc file with a fixed path and content, used for scaffolding.
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Always overwrites unless given other rules.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn write(&self) -> Result<WriteResult> {
        self.rules.apply(&self.path, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("composables").join("useGreeting.ts")
        }

        fn rules(&self) -> FileRules {
            FileRules::always_overwrite()
        }

        fn render(&self) -> String {
            "export const greeting = 'hi'\n".to_string()
        }
    }

    #[test]
    fn test_generated_file_creates_missing_dirs() {
        let temp = TempDir::new().unwrap();

        assert_eq!(Greeting.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("composables/useGreeting.ts")).unwrap(),
            "export const greeting = 'hi'\n"
        );
    }

    #[test]
    fn test_generated_output_replaces_stale_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types").join("api.types.ts");
        File::new(&path, "export type Stale = never\n").write().unwrap();

        let result = File::new(&path, "export type Id = string\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export type Id = string\n");
    }

    #[test]
    fn test_scaffolding_is_created_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apigen.toml");

        let first = File::new(&path, "[input]\n").with_rules(FileRules::create_once());
        assert_eq!(first.write().unwrap(), WriteResult::Written);

        let second = File::new(&path, "[output]\n").with_rules(FileRules::create_once());
        assert_eq!(second.write().unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[input]\n");
    }
}
