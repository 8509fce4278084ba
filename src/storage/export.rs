//! Output artifacts
//!
//! The creation script and the JSON export are rewritten in full on every
//! run. Both are rendered and written to temp files first, then renamed into
//! place, so a failed run never leaves a half-written artifact or a fresh
//! script next to a stale export.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::drafts::DraftError;
use crate::domain::IssueRecord;

/// Writes the creation script (executable) and the JSON export together
pub fn write_artifacts(
    script_path: &Path,
    script: &str,
    json_path: &Path,
    issues: &[IssueRecord],
) -> Result<(), DraftError> {
    let json = export_json(issues)?;

    let script = Staged::write(script_path, script)?;
    if let Err(e) = script.make_executable() {
        script.discard();
        return Err(e);
    }

    let json = match Staged::write(json_path, &json) {
        Ok(staged) => staged,
        Err(e) => {
            script.discard();
            return Err(e);
        }
    };

    if let Err(e) = json.commit() {
        script.discard();
        return Err(e);
    }
    script.commit()
}

/// Renders issues as a pretty-printed JSON array
fn export_json(issues: &[IssueRecord]) -> Result<String, DraftError> {
    let mut json = serde_json::to_string_pretty(issues).map_err(DraftError::Serialize)?;
    json.push('\n');
    Ok(json)
}

/// Reads issues back from a JSON export
pub fn read_json_export(path: &Path) -> Result<Vec<IssueRecord>, DraftError> {
    if !path.is_file() {
        return Err(DraftError::MissingArtifact(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| DraftError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| DraftError::InvalidExport {
        path: path.to_path_buf(),
        source,
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// A fully written temp file waiting to replace its target
struct Staged {
    temp: PathBuf,
    target: PathBuf,
}

impl Staged {
    fn write(target: &Path, content: &str) -> Result<Self, DraftError> {
        let write_err = |source| DraftError::Write {
            path: target.to_path_buf(),
            source,
        };

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let temp = temp_path(target);
        if let Err(source) = fs::write(&temp, content) {
            let _ = fs::remove_file(&temp);
            return Err(write_err(source));
        }

        Ok(Self {
            temp,
            target: target.to_path_buf(),
        })
    }

    #[cfg(unix)]
    fn make_executable(&self) -> Result<(), DraftError> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(&self.temp, fs::Permissions::from_mode(0o755)).map_err(|source| {
            DraftError::Write {
                path: self.target.clone(),
                source,
            }
        })
    }

    #[cfg(not(unix))]
    fn make_executable(&self) -> Result<(), DraftError> {
        Ok(())
    }

    /// Moves the temp file over the target, removing it if that fails
    fn commit(self) -> Result<(), DraftError> {
        fs::rename(&self.temp, &self.target).map_err(|source| {
            let _ = fs::remove_file(&self.temp);
            DraftError::Write {
                path: self.target.clone(),
                source,
            }
        })
    }

    fn discard(self) {
        let _ = fs::remove_file(&self.temp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> IssueRecord {
        IssueRecord {
            title: "Sample Bug".to_string(),
            body: "Something is broken.".to_string(),
            labels: vec!["bug".to_string()],
            assignees: vec![],
        }
    }

    struct Paths {
        _dir: TempDir,
        script: PathBuf,
        json: PathBuf,
    }

    fn paths() -> Paths {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("create-github-issues.sh");
        let json = dir.path().join("draft-issues.json");
        Paths {
            _dir: dir,
            script,
            json,
        }
    }

    #[test]
    fn json_export_round_trip() {
        let p = paths();

        write_artifacts(&p.script, "#!/bin/bash\n", &p.json, &[sample()]).unwrap();

        let content = fs::read_to_string(&p.json).unwrap();
        assert!(content.starts_with("[\n  {\n    \"title\": \"Sample Bug\""));
        assert_eq!(read_json_export(&p.json).unwrap(), vec![sample()]);
    }

    #[test]
    fn empty_export_is_empty_array() {
        let p = paths();

        write_artifacts(&p.script, "#!/bin/bash\n", &p.json, &[]).unwrap();

        assert_eq!(fs::read_to_string(&p.json).unwrap(), "[]\n");
    }

    #[test]
    fn export_overwrites_previous_file() {
        let p = paths();

        write_artifacts(&p.script, "old\n", &p.json, &[sample(), sample()]).unwrap();
        write_artifacts(&p.script, "new\n", &p.json, &[sample()]).unwrap();

        assert_eq!(read_json_export(&p.json).unwrap().len(), 1);
        assert_eq!(fs::read_to_string(&p.script).unwrap(), "new\n");
    }

    #[test]
    fn missing_export_is_missing_artifact() {
        let dir = TempDir::new().unwrap();
        let err = read_json_export(&dir.path().join("nope.json")).unwrap_err();

        assert!(matches!(err, DraftError::MissingArtifact(_)));
        assert!(err.to_string().contains("Run 'draft-issues generate' first"));
    }

    #[test]
    fn corrupt_export_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft-issues.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            read_json_export(&path).unwrap_err(),
            DraftError::InvalidExport { .. }
        ));
    }

    #[test]
    fn artifacts_are_written_without_temp_files() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("out").join("create-github-issues.sh");
        let json = dir.path().join("out").join("draft-issues.json");

        write_artifacts(&script, "#!/bin/bash\n", &json, &[]).unwrap();

        assert_eq!(fs::read_to_string(&script).unwrap(), "#!/bin/bash\n");
        assert!(!temp_path(&script).exists());
        assert!(!temp_path(&json).exists());
    }

    #[test]
    fn failed_export_leaves_no_script_or_temp_files() {
        let p = paths();
        // A non-empty directory where the export should go makes the rename fail
        fs::create_dir(&p.json).unwrap();
        fs::write(p.json.join("keep"), "x").unwrap();

        let err = write_artifacts(&p.script, "#!/bin/bash\n", &p.json, &[sample()]).unwrap_err();

        assert!(matches!(err, DraftError::Write { .. }));
        assert!(!p.script.exists());
        assert!(!temp_path(&p.script).exists());
        assert!(!temp_path(&p.json).exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        let staged = Staged::write(&target, "content").unwrap();
        assert!(temp_path(&target).exists());

        assert!(staged.commit().is_err());
        assert!(!temp_path(&target).exists());
    }

    #[test]
    fn failed_export_keeps_previous_artifacts() {
        let p = paths();
        write_artifacts(&p.script, "old\n", &p.json, &[sample()]).unwrap();

        let blocked_json = p.json.with_file_name("blocked");
        fs::create_dir(&blocked_json).unwrap();
        fs::write(blocked_json.join("keep"), "x").unwrap();

        assert!(write_artifacts(&p.script, "new\n", &blocked_json, &[]).is_err());
        assert_eq!(fs::read_to_string(&p.script).unwrap(), "old\n");
    }

    #[cfg(unix)]
    #[test]
    fn script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let p = paths();
        write_artifacts(&p.script, "#!/bin/bash\n", &p.json, &[]).unwrap();

        let mode = fs::metadata(&p.script).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
