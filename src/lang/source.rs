use super::{Dialect, Error};
use crate::error;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

type Result<T> = std::result::Result<T, Error>;

/// Where [`Source::load`] reads program text from: `f` is a file path,
/// `s` is the program text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    File,
    Strings,
}

impl FromStr for LoadMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<LoadMode> {
        match s {
            "f" => Ok(LoadMode::File),
            "s" => Ok(LoadMode::Strings),
            _ => Err(error!(WrongLoadMode; s)),
        }
    }
}

/// ## Validated program text
///
/// Rows of program text checked against the rules of a dialect.
/// Befunge-93 text must be a non-empty rectangle no larger than 80×25.
/// Funge-98 text may be ragged and of any size.

#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    dialect: Dialect,
    rows: Vec<String>,
    height: usize,
    width: usize,
}

impl Source {
    pub fn load(mode: LoadMode, source: &str, dialect: Dialect) -> Result<Source> {
        match mode {
            LoadMode::File => Source::from_file(source, dialect),
            LoadMode::Strings => Source::from_text(source, dialect),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, dialect: Dialect) -> Result<Source> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                return match error.kind() {
                    ErrorKind::NotFound => {
                        Err(error!(CodeFileNotFound; &path.display().to_string()))
                    }
                    _ => Err(error!(InternalError; &error.to_string())),
                }
            }
        };
        tracing::debug!(path = %path.display(), bytes = text.len(), "read code file");
        Source::from_text(&text, dialect)
    }

    /// Rows are separated by line breaks. A final line break does not
    /// start another row.
    pub fn from_text(text: &str, dialect: Dialect) -> Result<Source> {
        let rows: Vec<&str> = text.lines().collect();
        Source::from_lines(&rows, dialect)
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S], dialect: Dialect) -> Result<Source> {
        let rows: Vec<String> = lines.iter().map(|row| row.as_ref().to_string()).collect();
        if dialect.is_bounded() {
            Source::check_bounded(&rows)?;
        } else if rows.iter().all(|row| row.is_empty()) {
            return Err(error!(CodeSourceEmpty));
        }
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        tracing::debug!(%dialect, height, width, "loaded source");
        Ok(Source {
            dialect,
            rows,
            height,
            width,
        })
    }

    fn check_bounded(rows: &[String]) -> Result<()> {
        let width = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(error!(CodeSourceEmpty)),
        };
        if let Some(index) = rows.iter().position(|row| row.is_empty()) {
            return Err(error!(CodeSourceEmpty; &format!("row {} is empty", index + 1)));
        }
        if rows.len() > Dialect::MAX_HEIGHT || width > Dialect::MAX_WIDTH {
            return Err(error!(CodeFileOutOfBounds; &format!("{}×{}", width, rows.len())));
        }
        if let Some(index) = rows.iter().position(|row| row.len() != width) {
            return Err(error!(CodeNotRectangular; &format!("row {}", index + 1)));
        }
        Ok(())
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }
}
