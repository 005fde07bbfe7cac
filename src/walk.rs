//! Directory walker that discovers directives and runs their generators.
//!
//! The walk is strictly sequential: one file at a time, and each generator
//! runs to completion before the next file is considered. Directories whose
//! base name starts with `.` or `_` are skipped along with their contents.

use crate::directive::read_directive;
use crate::error::{WalkError, WalkErrorKind};
use crate::exec;
use crate::expand::expand;
use std::fs::File;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// The raw, unexpanded directive line.
pub const COMMAND_VAR: &str = "HELM_GENERATE_COMMAND";
/// Path of the file containing the directive.
pub const FILE_VAR: &str = "HELM_GENERATE_FILE";
/// The root directory passed to the walk.
pub const DIR_VAR: &str = "HELM_GENERATE_DIR";
/// The directive line after variable expansion.
pub const COMMAND_EXPANDED_VAR: &str = "HELM_GENERATE_COMMAND_EXPANDED";

/// What to do with a directory entry during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirDecision {
    /// Descend into the directory.
    Descend,
    /// Skip the directory and all of its descendants.
    SkipSubtree,
}

/// Skip rule for directories: a base name starting with `.` or `_` hides the
/// whole subtree. The walk root itself is exempt.
pub fn classify_dir(base_name: &str) -> DirDecision {
    if base_name.starts_with('.') || base_name.starts_with('_') {
        DirDecision::SkipSubtree
    } else {
        DirDecision::Descend
    }
}

/// Walk `dir` and execute generators as it finds them.
///
/// Returns the number of generators executed. Every failure is fatal: the
/// walk aborts on the first error, and the returned [`WalkError`] carries the
/// number of generators that ran successfully before it.
pub fn walk(dir: impl AsRef<Path>) -> Result<usize, WalkError> {
    let dir = dir.as_ref();
    let mut executed = 0;

    let mut entries = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|e| WalkError::new(executed, WalkErrorKind::Traversal(e)))?;

        if entry.file_type().is_dir() {
            if entry.depth() > 0
                && classify_dir(&entry.file_name().to_string_lossy()) == DirDecision::SkipSubtree
            {
                debug!("skipping directory: {}", entry.path().display());
                entries.skip_current_dir();
            }
            continue;
        }

        // Symlinks and other non-regular entries carry no directives.
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let file = File::open(path).map_err(|source| {
            WalkError::new(
                executed,
                WalkErrorKind::Open {
                    path: path.to_path_buf(),
                    source,
                },
            )
        })?;

        let template = match read_directive(file) {
            Ok(Some(template)) => template,
            Ok(None) => continue,
            Err(source) => {
                return Err(WalkError::new(
                    executed,
                    WalkErrorKind::Directive {
                        path: path.to_path_buf(),
                        source,
                    },
                ));
            }
        };

        let mut vars = vec![
            (COMMAND_VAR, template.clone()),
            (FILE_VAR, path.to_string_lossy().into_owned()),
            (DIR_VAR, dir.to_string_lossy().into_owned()),
        ];
        // Directive variables shadow the process environment during expansion.
        let expanded = expand(&template, |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone())
                .or_else(|| std::env::var(name).ok())
        });
        vars.push((COMMAND_EXPANDED_VAR, expanded.clone()));

        debug!("file: {}, command: {}", path.display(), expanded);

        let child_env: Vec<(&str, &str)> = vars
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
            .collect();
        if let Err(source) = exec::execute(&expanded, &child_env) {
            return Err(WalkError::new(
                executed,
                WalkErrorKind::Generator {
                    command: expanded,
                    path: path.to_path_buf(),
                    source,
                },
            ));
        }
        executed += 1;
    }

    Ok(executed)
}
