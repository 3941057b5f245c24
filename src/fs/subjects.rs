//! Subject discovery.
//!
//! A subject is one directory directly under a study root. Hidden entries
//! (leading `.`) such as `.git` are never subjects.

use crate::error::{CiftifyError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// List subject names directly under `root`.
///
/// Returns an empty list when `root` does not exist. When `filter` is given,
/// only names containing it as a substring are kept. Order is unspecified;
/// sort the result when order matters.
///
/// Errors only if `root` exists but cannot be read.
pub fn list_subjects<P: AsRef<Path>>(root: P, filter: Option<&str>) -> Result<Vec<String>> {
    let root = root.as_ref();

    if !root.exists() {
        debug!(root = %root.display(), "subject root does not exist");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(root).map_err(|e| {
        let context = format!("failed to list subjects in '{}'", root.display());
        CiftifyError::io(context, e)
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            CiftifyError::io(format!("failed to read entry in '{}'", root.display()), e)
        })?;

        // Follow symlinks so linked subject directories count.
        if !entry.path().is_dir() {
            continue;
        }

        // Non-UTF-8 names cannot be subject ids.
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }

    let subjects = filter_subjects(names, filter);
    debug!(root = %root.display(), count = subjects.len(), "listed subjects");
    Ok(subjects)
}

/// Drop hidden names and apply the optional substring filter.
pub fn filter_subjects<I, S>(names: I, filter: Option<&str>) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .filter(|name| !name.starts_with('.'))
        .filter(|name| filter.is_none_or(|tag| name.contains(tag)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    fn make_root(dirs: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for d in dirs {
            fs::create_dir(temp.path().join(d)).unwrap();
        }
        temp
    }

    #[test]
    fn all_subjects_returned() {
        let all = [
            "STUDY_CMH_0000_01",
            "STUDY_CMH_9999_01",
            "STUDY_CMH_1234_01",
            "STUDY_MRP_1234_01",
            "STUDY_MRP_0001_01",
        ];
        let root = make_root(&all);

        let subjects = list_subjects(root.path(), None).unwrap();

        let mut expected: Vec<String> = all.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(sorted(subjects), expected);
    }

    #[test]
    fn returns_empty_list_if_path_doesnt_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("some/path/somewhere");
        assert!(!missing.exists());

        let subjects = list_subjects(&missing, None).unwrap();
        assert!(subjects.is_empty());
    }

    #[test]
    fn empty_root_yields_no_subjects() {
        let root = make_root(&[]);
        assert!(list_subjects(root.path(), None).unwrap().is_empty());
    }

    #[test]
    fn hidden_folders_removed_from_subject_list() {
        let root = make_root(&["subject1", ".git", "subject2", ".hidden2"]);

        let subjects = list_subjects(root.path(), None).unwrap();

        assert_eq!(sorted(subjects), vec!["subject1", "subject2"]);
    }

    #[test]
    fn files_are_not_subjects() {
        let root = make_root(&["subject1"]);
        fs::write(root.path().join("notes.txt"), "x").unwrap();

        assert_eq!(list_subjects(root.path(), None).unwrap(), vec!["subject1"]);
    }

    #[test]
    fn user_filter_keeps_only_tagged_subjects() {
        let tagged = [
            "STUDY_CMH_0000_01",
            "STUDY_CMH_9999_01",
            "STUDY_CMH_1234_01",
        ];
        let mut all = vec!["STUDY_MRP_1234_01", "STUDY_MRP_0001_01"];
        all.extend(tagged);
        let root = make_root(&all);

        let subjects = list_subjects(root.path(), Some("CMH")).unwrap();

        assert_eq!(subjects.len(), tagged.len());
        for item in tagged {
            assert!(subjects.iter().any(|s| s == item), "missing {item}");
        }
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let names = ["subject1", "subject2"];
        assert!(filter_subjects(names, Some("CMH")).is_empty());
    }

    #[test]
    fn filter_never_resurrects_hidden_names() {
        let names = [".CMH_cache", "STUDY_CMH_01", "STUDY_MRP_01"];
        assert_eq!(filter_subjects(names, Some("CMH")), vec!["STUDY_CMH_01"]);
    }
}
