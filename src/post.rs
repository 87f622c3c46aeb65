use fmt::Display;
use std::fmt::Formatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use markdown::Options;

/// One post to load: where it lives on disk, plus the optional display date
/// taken from a manifest line. Only used while building the collection.
#[derive(Debug)]
pub struct PostReference {
    pub path: PathBuf,
    pub date: Option<NaiveDate>,
}

#[derive(Debug)]
pub struct Post {
    pub title: String,
    pub timestamp: NaiveDateTime,
    pub contents: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "title={}, timestamp={}\ncontent:\n{}",
               self.title,
               self.timestamp,
               self.contents
        )
    }
}

impl Post {
    /// Loads a post from disk. An explicit date overrides the file's
    /// modification time, with the time of day zeroed.
    pub fn from_file(path: &Path, explicit: Option<NaiveDate>) -> io::Result<Post> {
        let timestamp = match explicit {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap(),
            None => modified_time(path)?,
        };

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => return Err(io::Error::new(e.kind(), format!("failed to read file {}: {}", path.display(), e))),
        };

        Ok(Self::from_parts(path, contents, timestamp))
    }

    /// Builds a post without touching the filesystem. The title is the file
    /// name with its final extension stripped: "notes.v2.md" -> "notes.v2".
    pub fn from_parts(path: &Path, contents: String, timestamp: NaiveDateTime) -> Post {
        let title = match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem.to_string(),
            None => path.display().to_string(),
        };

        Post {
            title,
            timestamp,
            contents,
        }
    }

    /// The markdown contents converted to HTML.
    pub fn to_html(&self) -> io::Result<String> {
        match markdown::to_html_with_options(self.contents.as_str(), &Options::gfm()) {
            Ok(x) => Ok(x),
            Err(e) => Err(io::Error::new(ErrorKind::InvalidInput, e.reason.as_str())),
        }
    }
}

// Timestamps are naive UTC throughout, so the feed renderers can stamp them
// as +00:00 without shifting the host offset in.
fn modified_time(path: &Path) -> io::Result<NaiveDateTime> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => return Err(io::Error::new(e.kind(), format!("failed to stat file {}: {}", path.display(), e))),
    };

    let modified = metadata.modified()?;
    Ok(DateTime::<Utc>::from(modified).naive_utc())
}
