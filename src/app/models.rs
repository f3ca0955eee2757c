use crate::app::error::CollectError;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Everything a single collection run needs. Absent filters mean no filtering on that axis.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub root: PathBuf,
    pub includes: Vec<String>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub recursive: bool,
    pub include_extensions: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

impl CollectOptions {
    pub fn new<I, S>(root: impl Into<PathBuf>, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            includes: includes.into_iter().map(Into::into).collect(),
            output: None,
            verbose: false,
            recursive: true,
            include_extensions: None,
            exclude: None,
        }
    }

    /// Write the collected mapping to this JSON file once the walk completes.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// When false, directory includes expand to their immediate children only.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn include_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = Some(patterns.into_iter().map(Into::into).collect());
        self
    }
}

/// A file that survived resolution and filtering and is about to be read.
#[derive(Debug)]
pub struct Candidate {
    pub path: PathBuf,
    /// Key under which the content is stored in the result mapping.
    pub key: String,
}

/// Result of one collection run.
#[derive(Debug, Default)]
pub struct Collection {
    /// Relative path -> content, in traversal order.
    pub files: IndexMap<String, String>,
    /// Everything that was skipped along the way. Never affects `files`.
    pub failures: Vec<CollectError>,
}

impl Collection {
    /// False when the output document could not be rendered or written.
    pub fn saved(&self) -> bool {
        !self
            .failures
            .iter()
            .any(|e| matches!(e, CollectError::Save { .. } | CollectError::Serialize(_)))
    }

    pub fn into_files(self) -> IndexMap<String, String> {
        self.files
    }
}
