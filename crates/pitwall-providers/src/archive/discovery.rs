use crate::{Result, SessionIndex};
use chrono::{DateTime, Utc};
use pitwall_types::SessionId;
use std::path::Path;
use walkdir::WalkDir;

/// Scan an archive root for session files.
///
/// Files that are not CSVs or whose names do not follow the
/// `<year>_<event_slug>_<KIND>` convention are skipped, not errors — the
/// archive directory may hold unrelated exports. A missing root yields an
/// empty listing.
pub fn scan(root: &Path) -> Result<Vec<SessionIndex>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut sessions = Vec::new();
    for entry in WalkDir::new(root)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Ok(id) = SessionId::from_file_stem(stem) else {
            continue;
        };

        let modified = entry
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from);

        sessions.push(SessionIndex {
            id,
            path: path.to_path_buf(),
            modified,
        });
    }

    sessions.sort_by(|a, b| (a.id.year, &a.id.event).cmp(&(b.id.year, &b.id.event)));
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let sessions = scan(&temp.path().join("nope")).unwrap();
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_scan_skips_foreign_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2024_bahrain_R.csv"), "driver\n").unwrap();
        fs::write(temp.path().join("notes.txt"), "hi").unwrap();
        fs::write(temp.path().join("export.csv"), "a,b\n").unwrap();

        let sessions = scan(temp.path()).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id.event, "bahrain");
        assert!(sessions[0].modified.is_some());
    }
}
