use crate::app::error::CollectError;
use crate::app::formatter::OutputGenerator;
use crate::app::models::{Candidate, CollectOptions, Collection};
use crate::app::scanner::{PathFilter, ScanEvent, Scanner};
use indexmap::IndexMap;
use log::Level;
use std::fs;
use std::path::Path;

/// Collects the content of every included file under `options.root`.
///
/// Never fails: unreadable files, bad includes and save errors end up in
/// `Collection::failures` and are logged when `options.verbose` is set.
pub fn collect(options: &CollectOptions) -> Collection {
    Collector::new(options).run()
}

/// Same as [`collect`] but returns only the path -> content mapping.
pub fn collect_included_files(
    root: impl AsRef<Path>,
    includes: &[String],
    output_json: Option<&Path>,
    verbose: bool,
    recursive: bool,
    include_extensions: Option<&[String]>,
    exclude: Option<&[String]>,
) -> IndexMap<String, String> {
    let options = CollectOptions {
        root: root.as_ref().to_path_buf(),
        includes: includes.to_vec(),
        output: output_json.map(Path::to_path_buf),
        verbose,
        recursive,
        include_extensions: include_extensions.map(<[String]>::to_vec),
        exclude: exclude.map(<[String]>::to_vec),
    };
    collect(&options).into_files()
}

pub struct Collector<'a> {
    options: &'a CollectOptions,
}

impl<'a> Collector<'a> {
    pub fn new(options: &'a CollectOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Collection {
        let mut collection = Collection::default();

        let filter = PathFilter::new(
            self.options.include_extensions.clone(),
            self.options.exclude.clone(),
        );
        let scanner = Scanner::new(self.options.root.clone(), filter, self.options.recursive);

        scanner.scan(&self.options.includes, |event| match event {
            ScanEvent::Candidate(candidate) => match self.read_one(&candidate) {
                Ok(content) => {
                    collection.files.insert(candidate.key, content);
                }
                Err(err) => collection.failures.push(err),
            },
            ScanEvent::Failed(err) => {
                self.diagnose(Level::Warn, &err.to_string());
                collection.failures.push(err);
            }
        });

        if let Some(output) = self.options.output.as_deref() {
            self.save(output, &mut collection);
        }

        collection
    }

    fn read_one(&self, candidate: &Candidate) -> Result<String, CollectError> {
        let result = fs::read(&candidate.path)
            .map_err(|source| CollectError::Read {
                path: candidate.key.clone(),
                source,
            })
            .and_then(|bytes| {
                String::from_utf8(bytes).map_err(|_| CollectError::InvalidUtf8(candidate.key.clone()))
            });

        match &result {
            Ok(_) => self.diagnose(Level::Info, &format!("Read file: {}", candidate.key)),
            Err(err) => self.diagnose(Level::Warn, &err.to_string()),
        }
        result
    }

    fn save(&self, output: &Path, collection: &mut Collection) {
        if output.as_os_str().is_empty() {
            return;
        }

        match OutputGenerator::write_json(output, &collection.files) {
            Ok(()) => self.diagnose(Level::Info, &format!("Saved JSON to {}", output.display())),
            Err(err) => {
                self.diagnose(Level::Warn, &err.to_string());
                collection.failures.push(err);
            }
        }
    }

    fn diagnose(&self, level: Level, message: &str) {
        if self.options.verbose {
            log::log!(level, "{}", message);
        }
    }
}
