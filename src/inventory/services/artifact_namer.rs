use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Replacement for every character outside the allow-list
const FILLER: char = '_';

/// Stem used when a name has no usable characters at all
const EMPTY_NAME_STEM: &str = "app";

/// Package file extension for canvas apps
const PACKAGE_EXTENSION: &str = "msapp";

/// Where one app's package is downloaded and unpacked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub package_file: PathBuf,
    pub unpack_dir: PathBuf,
}

/// ArtifactNamer - deterministic, collision-avoiding names for per-app artifacts
///
/// Names are built as `<sanitized name>_<run stamp>`. A stem already issued
/// during this run gets `_2`, `_3`, ... appended, so two apps whose names
/// sanitize to the same text never share a package file.
#[derive(Debug)]
pub struct ArtifactNamer {
    run_stamp: String,
    issued: HashSet<String>,
}

impl ArtifactNamer {
    pub fn new(run_stamp: impl Into<String>) -> Self {
        Self {
            run_stamp: run_stamp.into(),
            issued: HashSet::new(),
        }
    }

    /// Keeps ASCII alphanumerics and replaces everything else with `_`
    pub fn sanitize(name: &str) -> String {
        let sanitized: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { FILLER })
            .collect();

        if sanitized.chars().all(|c| c == FILLER) {
            EMPTY_NAME_STEM.to_string()
        } else {
            sanitized
        }
    }

    /// Issues the next unique stem for `name`
    pub fn next_stem(&mut self, name: &str) -> String {
        let base = format!("{}_{}", Self::sanitize(name), self.run_stamp);
        let mut candidate = base.clone();
        let mut index = 2;
        // Case-insensitive file systems would treat "App" and "APP" as one file
        while !self.issued.insert(candidate.to_lowercase()) {
            candidate = format!("{}_{}", base, index);
            index += 1;
        }
        candidate
    }

    /// Issues the package file and sibling unpack folder for `name` under `work_dir`
    pub fn paths_for(&mut self, work_dir: &Path, name: &str) -> ArtifactPaths {
        let stem = self.next_stem(name);
        ArtifactPaths {
            package_file: work_dir.join(format!("{}.{}", stem, PACKAGE_EXTENSION)),
            unpack_dir: work_dir.join(stem),
        }
    }
}
