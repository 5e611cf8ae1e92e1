use std::path::{Component, Path, PathBuf};

/// Renders paths for messages, preferring the canonical form and falling
/// back to a lexically normalized absolute path for paths that do not exist.
pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        if let Ok(canonical) = self.canonicalize() {
            return canonical.display().to_string();
        }

        let absolute = if self.is_absolute() {
            self.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|current_dir| current_dir.join(self))
                .unwrap_or_else(|_| self.to_path_buf())
        };
        normalize_path(&absolute).display().to_string()
    }
}

/// Drops `.` and resolves `..` without touching the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            _ => components.push(component),
        }
    }

    components.iter().collect()
}
