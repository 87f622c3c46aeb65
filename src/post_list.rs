use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use spdlog::error;

use crate::post::{Post, PostReference};
use crate::text_utils::parse_manifest_date;

/// Reads the manifest: one post per line, `filename[, YYYY-MM-DD]`, with
/// whitespace trimmed around both parts. Line order is the display order.
pub fn read_manifest(path: &Path) -> io::Result<Vec<PostReference>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => return Err(io::Error::new(e.kind(), format!("error opening post list {}: {}", path.display(), e))),
    };

    let mut references = vec![];
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reference = match line.split_once(',') {
            Some((name, date)) => {
                let date = match parse_manifest_date(date.trim()) {
                    Ok(date) => date,
                    Err(e) => {
                        return Err(io::Error::new(ErrorKind::InvalidData, format!("{} - list={}", e, path.display())));
                    }
                };
                PostReference {
                    path: PathBuf::from(name.trim()),
                    date: Some(date),
                }
            }
            None => PostReference {
                path: PathBuf::from(line),
                date: None,
            },
        };
        references.push(reference);
    }

    Ok(references)
}

/// Loads every reference, keeping the reference order. A post that cannot be
/// read is logged and skipped so the rest of the batch still renders.
pub fn load_posts(references: &[PostReference]) -> Vec<Post> {
    let mut posts = vec![];
    for reference in references {
        match Post::from_file(&reference.path, reference.date) {
            Ok(post) => posts.push(post),
            Err(e) => error!("error building post: {}", e),
        }
    }
    posts
}

/// Stable sort, newest first. Posts sharing a timestamp keep their relative
/// input order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::test_data::{FIRST_POST, SECOND_POST};

    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn post_at(title: &str, timestamp: NaiveDateTime) -> Post {
        Post::from_parts(Path::new(&format!("{}.md", title)), String::new(), timestamp)
    }

    #[test]
    fn test_read_manifest() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let manifest = dir.path().join("posts.txt");
        fs::write(&manifest, "  first.md , 2024-01-02 \nsecond.md\n\n")?;

        let references = read_manifest(&manifest)?;
        assert_eq!(references.len(), 2);
        assert_eq!(references[0].path, PathBuf::from("first.md"));
        assert_eq!(references[0].date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(references[1].path, PathBuf::from("second.md"));
        assert_eq!(references[1].date, None);
        Ok(())
    }

    #[test]
    fn test_read_manifest_empty() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let manifest = dir.path().join("posts.txt");
        fs::write(&manifest, "\n\n")?;

        let references = read_manifest(&manifest)?;
        assert!(references.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_manifest_bad_date() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let manifest = dir.path().join("posts.txt");
        fs::write(&manifest, "first.md, 02/01/2024\n")?;

        let err = read_manifest(&manifest).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        Ok(())
    }

    #[test]
    fn test_read_manifest_missing_file() {
        let err = read_manifest(Path::new("no/such/list.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_load_posts_skips_unreadable() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let first = dir.path().join("first.md");
        let second = dir.path().join("second.md");
        fs::write(&first, FIRST_POST)?;
        fs::write(&second, SECOND_POST)?;

        let references = vec![
            PostReference { path: first, date: NaiveDate::from_ymd_opt(2024, 1, 2) },
            PostReference { path: dir.path().join("missing.md"), date: None },
            PostReference { path: second, date: NaiveDate::from_ymd_opt(2024, 1, 3) },
        ];

        let posts = load_posts(&references);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "first");
        assert_eq!(posts[1].title, "second");
        Ok(())
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            post_at("oldest", midnight(2023, 5, 1)),
            post_at("newest", midnight(2024, 3, 1)),
            post_at("middle", midnight(2023, 12, 1)),
        ];

        sort_newest_first(&mut posts);
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let ts = midnight(2024, 1, 2);
        let mut posts = vec![
            post_at("one", ts),
            post_at("two", ts),
            post_at("three", ts),
        ];

        sort_newest_first(&mut posts);
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["one", "two", "three"]);
    }
}
