use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The three asset types every song directory must contain exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Map,
    Audio,
    Cover,
}

impl AssetKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Map => &["memw"],
            Self::Audio => &["mp3"],
            Self::Cover => &["png", "jpeg", "jpg"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Audio => "audio",
            Self::Cover => "cover",
        }
    }
}

/// Find the single file in `dir` matching the asset kind's extension filter.
///
/// Zero matches is `MissingAsset`, more than one is `AmbiguousAsset` - a
/// song directory with two maps or two audio files is not trustworthy enough
/// to guess from.
pub fn locate_single_asset(dir: &Path, kind: AssetKind) -> Result<PathBuf> {
    let mut matches = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            continue;
        };
        if kind
            .extensions()
            .iter()
            .any(|want| ext.eq_ignore_ascii_case(want))
        {
            matches.push(path);
        }
    }

    if matches.len() > 1 {
        return Err(Error::AmbiguousAsset {
            dir: dir.display().to_string(),
            kind: kind.name(),
            count: matches.len(),
        });
    }
    matches.pop().ok_or_else(|| Error::MissingAsset {
        dir: dir.display().to_string(),
        kind: kind.name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_locate_single_asset() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("song.memw")).unwrap();
        File::create(dir.path().join("song.mp3")).unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();

        let found = locate_single_asset(dir.path(), AssetKind::Map).unwrap();
        assert_eq!(found.file_name().unwrap(), "song.memw");
    }

    #[test]
    fn test_missing_asset() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("song.memw")).unwrap();

        let err = locate_single_asset(dir.path(), AssetKind::Audio).unwrap_err();
        assert!(matches!(err, Error::MissingAsset { kind: "audio", .. }));
    }

    #[test]
    fn test_ambiguous_asset() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.mp3")).unwrap();
        File::create(dir.path().join("b.mp3")).unwrap();

        let err = locate_single_asset(dir.path(), AssetKind::Audio).unwrap_err();
        assert!(matches!(
            err,
            Error::AmbiguousAsset {
                kind: "audio",
                count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_cover_extension_case_insensitive() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("cover.PNG")).unwrap();

        assert!(locate_single_asset(dir.path(), AssetKind::Cover).is_ok());
    }
}
