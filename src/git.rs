//! Local repository access for commit messages.

use std::path::Path;

use anyhow::{Context, Result};
use git2::Repository;

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Opens the repository containing the current directory.
    pub fn open() -> Result<Self> {
        Self::open_at(".")
    }

    /// Opens the repository containing `path`.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).context("Not in a git repository")?;

        Ok(Self { repo })
    }

    /// Returns the full message of the HEAD commit.
    pub fn head_commit_message(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .context("Failed to resolve HEAD")?
            .peel_to_commit()
            .context("HEAD does not point at a commit")?;

        Ok(String::from_utf8_lossy(head.message_bytes()).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn repo_with_commit(message: &str) -> TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();

        let signature = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[])
            .unwrap();

        temp_dir
    }

    #[test]
    fn reads_head_message() {
        let temp_dir = repo_with_commit("Retrain model [paris-01]\n\nNew features.");
        let repo = GitRepository::open_at(temp_dir.path()).unwrap();

        assert_eq!(
            repo.head_commit_message().unwrap(),
            "Retrain model [paris-01]\n\nNew features."
        );
    }

    #[test]
    fn discovers_from_subdirectory() {
        let temp_dir = repo_with_commit("Eval [kiel]");
        let nested = temp_dir.path().join("source");
        std::fs::create_dir(&nested).unwrap();

        let repo = GitRepository::open_at(&nested).unwrap();
        assert_eq!(repo.head_commit_message().unwrap(), "Eval [kiel]");
    }

    #[test]
    fn empty_repository_has_no_head() {
        let temp_dir = tempfile::tempdir().unwrap();
        Repository::init(temp_dir.path()).unwrap();

        let repo = GitRepository::open_at(temp_dir.path()).unwrap();
        assert!(repo.head_commit_message().is_err());
    }

    #[test]
    fn outside_repository_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(GitRepository::open_at(temp_dir.path().join("missing")).is_err());
    }
}
