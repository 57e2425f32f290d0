//! Directory walking implementation using walkdir.

use super::{filter::ImageFilter, ScanResult, ScreenshotFile, ScreenshotScanner};
use crate::error::ScanError;
use crate::events::{null_sender, Event, EventSender, ScanEvent};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Configuration for the directory scanner
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
    /// Whether to include hidden files and directories (dotfiles are
    /// ordinary captures in the archive, so this defaults to true)
    pub include_hidden: bool,
    /// Maximum directory depth (None = unlimited, Some(1) = flat)
    pub max_depth: Option<usize>,
    /// Custom extensions to include (None = png, jpg, jpeg)
    pub extensions: Option<Vec<String>>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            include_hidden: true,
            max_depth: Some(1),
            extensions: None,
        }
    }
}

/// Scanner implementation using the walkdir crate
pub struct WalkDirScanner {
    config: ScanConfig,
    filter: ImageFilter,
}

impl WalkDirScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        let mut filter = ImageFilter::new().with_hidden(config.include_hidden);

        if let Some(ref extensions) = config.extensions {
            filter = filter.with_extensions(extensions.clone());
        }

        Self { config, filter }
    }

    fn is_hidden_dir(&self, path: &Path, root: &Path) -> bool {
        !self.config.include_hidden
            && path != root
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| name.starts_with('.'))
    }
}

impl ScreenshotScanner for WalkDirScanner {
    fn scan(&self, root: &Path) -> Result<ScanResult, ScanError> {
        self.scan_with_events(root, &null_sender())
    }

    fn scan_with_events(&self, root: &Path, events: &EventSender) -> Result<ScanResult, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        events.send(Event::Scan(ScanEvent::Started {
            root: root.to_path_buf(),
        }));

        let mut files = Vec::new();
        let mut errors = Vec::new();

        let mut walker = WalkDir::new(root).follow_links(self.config.follow_symlinks);
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        let entries = walker
            .into_iter()
            .filter_entry(|entry| !(entry.file_type().is_dir() && self.is_hidden_dir(entry.path(), root)));

        for entry_result in entries {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    let permission_denied = e.io_error().map(|io| io.kind())
                        == Some(std::io::ErrorKind::PermissionDenied);

                    let error = if permission_denied {
                        ScanError::PermissionDenied { path: path.clone() }
                    } else {
                        ScanError::ReadDirectory {
                            path: path.clone(),
                            source: std::io::Error::other(e.to_string()),
                        }
                    };

                    warn!(path = %path.display(), error = %error, "skipping unreadable entry");
                    events.send(Event::Scan(ScanEvent::Error {
                        path,
                        message: error.to_string(),
                    }));
                    errors.push(error);
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_dir() || !self.filter.should_include(path) {
                continue;
            }

            events.send(Event::Scan(ScanEvent::FileFound {
                path: path.to_path_buf(),
            }));
            files.push(ScreenshotFile {
                path: path.to_path_buf(),
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));

        debug!(root = %root.display(), found = files.len(), "scan complete");
        events.send(Event::Scan(ScanEvent::Completed {
            total_files: files.len(),
        }));

        Ok(ScanResult { files, errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(&[0x89, 0x50, 0x4E, 0x47]).unwrap();
        path
    }

    #[test]
    fn scan_empty_directory_returns_empty_vec() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = WalkDirScanner::new(ScanConfig::default());

        let result = scanner.scan(temp_dir.path()).unwrap();

        assert!(result.files.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn scan_finds_png_and_jpeg_sorted() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "2024-06-03.png");
        create_file(temp_dir.path(), "2024-06-01.jpg");
        create_file(temp_dir.path(), "2024-06-02.jpeg");

        let scanner = WalkDirScanner::new(ScanConfig::default());
        let result = scanner.scan(temp_dir.path()).unwrap();

        let names: Vec<_> = result
            .files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["2024-06-01.jpg", "2024-06-02.jpeg", "2024-06-03.png"]);
    }

    #[test]
    fn scan_excludes_non_image_files() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "shot.png");
        create_file(temp_dir.path(), "shots.yml");

        let scanner = WalkDirScanner::new(ScanConfig::default());
        let result = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].path.ends_with("shot.png"));
    }

    #[test]
    fn default_scan_is_flat() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "top.png");
        let nested = temp_dir.path().join("2024");
        fs::create_dir(&nested).unwrap();
        create_file(&nested, "nested.png");

        let flat = WalkDirScanner::new(ScanConfig::default())
            .scan(temp_dir.path())
            .unwrap();
        assert_eq!(flat.files.len(), 1);

        let deep = WalkDirScanner::new(ScanConfig {
            max_depth: None,
            ..Default::default()
        })
        .scan(temp_dir.path())
        .unwrap();
        assert_eq!(deep.files.len(), 2);
    }

    #[test]
    fn hidden_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let hidden = temp_dir.path().join(".cache");
        fs::create_dir(&hidden).unwrap();
        create_file(&hidden, "cached.png");

        let scanner = WalkDirScanner::new(ScanConfig {
            max_depth: None,
            include_hidden: false,
            ..Default::default()
        });
        let result = scanner.scan(temp_dir.path()).unwrap();

        assert!(result.files.is_empty());
    }

    #[test]
    fn dotfile_captures_are_found_by_default() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), ".2024-06-01.png");
        create_file(temp_dir.path(), "2024-06-02.png");

        let result = WalkDirScanner::new(ScanConfig::default())
            .scan(temp_dir.path())
            .unwrap();

        assert_eq!(result.files.len(), 2);
        assert!(result.files[0].path.ends_with(".2024-06-01.png"));

        let skipping = WalkDirScanner::new(ScanConfig {
            include_hidden: false,
            ..Default::default()
        })
        .scan(temp_dir.path())
        .unwrap();
        assert_eq!(skipping.files.len(), 1);
        assert!(skipping.files[0].path.ends_with("2024-06-02.png"));
    }

    #[test]
    fn custom_extensions_override_defaults() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "shot.png");
        create_file(temp_dir.path(), "shot.webp");

        let scanner = WalkDirScanner::new(ScanConfig {
            extensions: Some(vec!["webp".to_string()]),
            ..Default::default()
        });
        let result = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].path.ends_with("shot.webp"));
    }

    #[test]
    fn scan_nonexistent_directory_returns_error() {
        let scanner = WalkDirScanner::new(ScanConfig::default());
        let result = scanner.scan(Path::new("/nonexistent/path/12345"));

        assert!(matches!(result, Err(ScanError::DirectoryNotFound { .. })));
    }
}
