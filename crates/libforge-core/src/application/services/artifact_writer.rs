//! Persists [`Artifact`]s below a solution directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{application::ports::Filesystem, domain::Artifact, error::LibforgeResult};

/// Writes artifacts relative to one root, always overwriting.
pub struct ArtifactWriter<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, root: &'a Path) -> Self {
        Self { filesystem, root }
    }

    /// Write `artifact`, creating parent directories. Returns the absolute path.
    pub fn write(&self, artifact: &Artifact) -> LibforgeResult<PathBuf> {
        let path = artifact.path.under(self.root);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, &artifact.content)?;
        debug!(path = %path.display(), bytes = artifact.content.len(), "Artifact written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::artifacts;

    #[test]
    fn creates_parent_then_overwrites() {
        let root = Path::new("/w/Widgets");
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .with(eq(root.join("Widgets.Tests")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p.ends_with("Widgets.Tests/.gitignore") && c.starts_with("/obj"))
            .times(1)
            .returning(|_, _| Ok(()));

        let writer = ArtifactWriter::new(&fs, root);
        let path = writer.write(&artifacts::ignore_rules("Widgets.Tests")).unwrap();
        assert_eq!(path, root.join("Widgets.Tests").join(".gitignore"));
    }
}
