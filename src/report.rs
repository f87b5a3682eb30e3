use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Fixed,
    Skipped,
    Failed,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Fixed => write!(f, "fixed"),
            FileAction::Skipped => write!(f, "skipped"),
            FileAction::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub action: FileAction,
    pub rules_applied: Vec<String>,
    pub error: Option<String>,
}

impl FileReport {
    pub fn fixed(path: PathBuf, rules_applied: &[&str]) -> Self {
        FileReport {
            path,
            action: FileAction::Fixed,
            rules_applied: rules_applied.iter().map(|id| id.to_string()).collect(),
            error: None,
        }
    }

    pub fn skipped(path: PathBuf) -> Self {
        FileReport {
            path,
            action: FileAction::Skipped,
            rules_applied: vec![],
            error: None,
        }
    }

    pub fn failed(path: PathBuf, error: String) -> Self {
        FileReport {
            path,
            action: FileAction::Failed,
            rules_applied: vec![],
            error: Some(error),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct PassReport {
    pub pass: String,
    pub root: PathBuf,
    pub timestamp: String,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub duration_ms: u64,
}

impl PassReport {
    pub fn new(pass: &str, root: PathBuf, dry_run: bool) -> Self {
        PassReport {
            pass: pass.to_string(),
            root,
            timestamp: chrono::Utc::now().to_rfc3339(),
            dry_run,
            files: vec![],
            duration_ms: 0,
        }
    }

    pub fn fixed_count(&self) -> usize {
        self.count(FileAction::Fixed)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(FileAction::Skipped)
    }

    pub fn failed_count(&self) -> usize {
        self.count(FileAction::Failed)
    }

    /// Count fixed, skipped, and failed files in a single pass.
    ///
    /// Returns `(fixed, skipped, failed)`.
    pub fn count_by_action(&self) -> (usize, usize, usize) {
        self.files
            .iter()
            .fold((0, 0, 0), |(fx, sk, fl), f| match f.action {
                FileAction::Fixed => (fx + 1, sk, fl),
                FileAction::Skipped => (fx, sk + 1, fl),
                FileAction::Failed => (fx, sk, fl + 1),
            })
    }

    /// `true` when every discovered file was read (and, if changed, written).
    pub fn succeeded(&self) -> bool {
        self.files.iter().all(|f| f.action != FileAction::Failed)
    }

    fn count(&self, action: FileAction) -> usize {
        self.files.iter().filter(|f| f.action == action).count()
    }
}
