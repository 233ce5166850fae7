use std::{
    ffi::OsString,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use trisat::{builder::dimacs::read_dimacs, structures::formula::Formula, types::err::ErrorKind};

pub enum ReadError {
    NoExtension(PathBuf),
    NoPath(PathBuf),
    ParseError(PathBuf, ErrorKind),
    UnknownExtension(OsString),
    FailedToOpen(PathBuf),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoExtension(path) => write!(f, "The file {path:?} does not have an extension."),
            Self::NoPath(path) => write!(f, "No file or directory at {path:?}."),
            Self::ParseError(path, err) => write!(f, "Parse error in {path:?}: '{err}'."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
            Self::FailedToOpen(path) => write!(f, "Failed to open {path:?}."),
        }
    }
}

/// Whether the file at `path` has an extension of a supported format.
fn is_formula(path: &Path) -> bool {
    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => true,

        Some(extension) => extension == "cnf",

        None => false,
    }
}

/// The files to solve, in order.
///
/// Files are kept as given, and each directory is replaced by the formula files it contains, sorted by name.
pub fn collect_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>, ReadError> {
    let mut files = Vec::default();

    for path in paths {
        if path.is_dir() {
            let entries = match std::fs::read_dir(path) {
                Ok(entries) => entries,
                Err(_) => return Err(ReadError::FailedToOpen(path.to_owned())),
            };

            let mut contents: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_file() && is_formula(path))
                .collect();
            contents.sort();

            if contents.is_empty() {
                println!("c No formulas found in {path:?}");
            }
            files.extend(contents);
        } else if path.is_file() {
            files.push(path.to_owned());
        } else {
            return Err(ReadError::NoPath(path.to_owned()));
        }
    }

    Ok(files)
}

/// Reads the DIMACS file at `path` to a formula.
pub fn load_dimacs(path: &Path) -> Result<Formula, ReadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen(path.to_owned())),
    };

    let parse_result = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        Some(extension) if extension == "cnf" => read_dimacs(BufReader::new(&file)),

        Some(unknown) => return Err(ReadError::UnknownExtension(unknown.to_owned())),

        None => return Err(ReadError::NoExtension(path.to_owned())),
    };

    parse_result.map_err(|e| ReadError::ParseError(path.to_owned(), e))
}
