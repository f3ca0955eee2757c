use crate::app::error::CollectError;
use crate::app::models::Candidate;
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::path::{Component, Path, PathBuf};

/// Exclusion-then-extension test applied to every candidate relative path.
///
/// Exclusion is plain substring containment anywhere in the path. Extensions
/// are suffixes of the whole path string. `None` or an empty list disables
/// that axis.
pub fn should_include(
    relative_path: &str,
    include_extensions: Option<&[String]>,
    exclude: Option<&[String]>,
) -> bool {
    if let Some(patterns) = exclude {
        if patterns.iter().any(|p| relative_path.contains(p.as_str())) {
            return false;
        }
    }

    if let Some(extensions) = include_extensions {
        if !extensions.is_empty() && !extensions.iter().any(|e| relative_path.ends_with(e.as_str())) {
            return false;
        }
    }

    true
}

#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    include_extensions: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
}

impl PathFilter {
    pub fn new(include_extensions: Option<Vec<String>>, exclude: Option<Vec<String>>) -> Self {
        Self {
            include_extensions,
            exclude,
        }
    }

    pub fn accepts(&self, relative_path: &str) -> bool {
        should_include(
            relative_path,
            self.include_extensions.as_deref(),
            self.exclude.as_deref(),
        )
    }
}

/// What the scanner reports while resolving includes.
#[derive(Debug)]
pub enum ScanEvent {
    /// A file that passed the filter and should be read now.
    Candidate(Candidate),
    /// An include or walk entry that could not be used.
    Failed(CollectError),
}

pub struct Scanner {
    root: PathBuf,
    filter: PathFilter,
    recursive: bool,
}

impl Scanner {
    pub fn new(root: PathBuf, filter: PathFilter, recursive: bool) -> Self {
        Self {
            root,
            filter,
            recursive,
        }
    }

    /// Resolves each include in order and hands every accepted file to `visit`
    /// as soon as it is found.
    pub fn scan<F>(&self, includes: &[String], mut visit: F)
    where
        F: FnMut(ScanEvent),
    {
        for include in includes {
            self.scan_include(include, &mut visit);
        }
    }

    fn scan_include<F>(&self, include: &str, visit: &mut F)
    where
        F: FnMut(ScanEvent),
    {
        let full_path = self.root.join(include);

        if full_path.is_file() {
            // Single files are keyed by the include string exactly as given
            if self.filter.accepts(include) {
                visit(ScanEvent::Candidate(Candidate {
                    path: full_path,
                    key: include.to_string(),
                }));
            }
        } else if full_path.is_dir() {
            self.scan_directory(&full_path, visit);
        } else {
            visit(ScanEvent::Failed(CollectError::NotFound(include.to_string())));
        }
    }

    fn scan_directory<F>(&self, dir: &Path, visit: &mut F)
    where
        F: FnMut(ScanEvent),
    {
        // Every entry counts: no hidden-file or ignore-file filtering
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .follow_links(false)
            .max_depth(if self.recursive { None } else { Some(1) })
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    visit(ScanEvent::Failed(CollectError::Walk(err)));
                    continue;
                }
            };

            // is_dir() follows links: symlinked directories are skipped here and
            // never descended into, while dangling links fall through to the read
            if entry.depth() == 0 || entry.path().is_dir() {
                continue;
            }

            let key = self.relative_key(entry.path());
            if !self.filter.accepts(&key) {
                log::trace!("Filtered out: {}", key);
                continue;
            }

            visit(ScanEvent::Candidate(Candidate {
                path: entry.into_path(),
                key,
            }));
        }
    }

    fn relative_key(&self, path: &Path) -> String {
        let path = normalize(path);
        match diff_paths(&path, normalize(&self.root)) {
            Some(relative) => relative.to_string_lossy().into_owned(),
            None => path.to_string_lossy().into_owned(),
        }
    }
}

/// Lexically folds `.` and `..` out of a path without touching the filesystem.
/// Leading `..` that cannot be folded are kept.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else if !matches!(parts.last(), Some(Component::RootDir | Component::Prefix(_))) {
                    parts.push(component);
                }
            }
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}
