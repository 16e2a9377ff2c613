//! Reading and writing the posts file.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{Post, PostsError};

/// Loads every post from a JSON array file.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, PostsError> {
    let contents = fs::read_to_string(path).map_err(|source| PostsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |source| PostsError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_json::from_str(&contents).map_err(parse_error)?;
    if !value.is_array() {
        return Err(PostsError::NotAnArray {
            path: path.to_path_buf(),
        });
    }
    let posts: Vec<Post> = serde_json::from_value(value).map_err(parse_error)?;

    debug!(path = %path.display(), count = posts.len(), "loaded posts");
    Ok(posts)
}

/// Writes `posts` over the file at `path`.
///
/// Output is pretty-printed with two-space indentation and unescaped UTF-8. The collection is
/// written to a temporary file in the same directory and then renamed over `path`, so readers
/// see either the old file or the new one.
pub fn save_posts(path: &Path, posts: &[Post]) -> Result<(), PostsError> {
    let write_error = |source| PostsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(dir).map_err(write_error)?;

    let mut writer = BufWriter::new(temp);
    serde_json::to_writer_pretty(&mut writer, posts)
        .map_err(io::Error::from)
        .map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    let temp = writer
        .into_inner()
        .map_err(|e| write_error(e.into_error()))?;

    // Temporary files are created owner-only; keep the mode of the file being replaced.
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_error)?;
    }

    temp.persist(path).map_err(|source| PostsError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = posts.len(), "saved posts");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_reads_array_of_objects() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("posts.json");
        fs::write(
            &path,
            r#"[{"title": "Uno", "slug": "uno"}, {"title": "Dos", "slug": null}]"#,
        )
        .unwrap();

        let posts = load_posts(&path).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug(), "uno");
        assert_eq!(posts[1].slug(), "");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = load_posts(&temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, PostsError::Read { .. }));
    }

    #[test]
    fn load_rejects_non_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("posts.json");
        fs::write(&path, r#"{"posts": []}"#).unwrap();

        let err = load_posts(&path).unwrap_err();
        assert!(matches!(err, PostsError::NotAnArray { .. }));
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn load_rejects_invalid_json_and_non_object_elements() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("posts.json");

        fs::write(&path, "[{").unwrap();
        assert!(matches!(
            load_posts(&path).unwrap_err(),
            PostsError::Parse { .. }
        ));

        fs::write(&path, r#"[{"title": "ok"}, "nope"]"#).unwrap();
        assert!(matches!(
            load_posts(&path).unwrap_err(),
            PostsError::Parse { .. }
        ));
    }

    #[test]
    fn save_writes_pretty_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("posts.json");

        save_posts(&path, &[Post::new("Qué es GEO", "que-es-geo", "")]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[\n  {\n    \"title\": \"Qué es GEO\",\n    \"slug\": \"que-es-geo\",\n    \"content\": \"\"\n  }\n]"
        );
    }

    #[test]
    fn save_replaces_existing_file_and_preserves_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("posts.json");
        fs::write(
            &path,
            r#"[{"id": 7, "title": "A", "content": "x", "meta": {"draft": false}}]"#,
        )
        .unwrap();

        let mut posts = load_posts(&path).unwrap();
        posts[0].set_content("y".to_string());
        save_posts(&path, &posts).unwrap();

        let reloaded = load_posts(&path).unwrap();
        assert_eq!(reloaded, posts);
        assert_eq!(reloaded[0].id(), "7");
        assert_eq!(reloaded[0].content(), "y");

        // No temporary files left behind.
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/posts.json");
        let err = save_posts(&path, &[]).unwrap_err();
        assert!(matches!(err, PostsError::Write { .. }));
    }
}
