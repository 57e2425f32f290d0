//! File filtering logic for the scanner.

use super::DEFAULT_EXTENSIONS;
use std::collections::HashSet;
use std::path::Path;

/// Filters files to determine if they are screenshots we should classify
pub struct ImageFilter {
    /// File extensions to include (lowercase, no leading dot)
    extensions: HashSet<String>,
    /// Whether to include hidden files
    include_hidden: bool,
}

impl ImageFilter {
    /// Create a new filter accepting PNG and JPEG captures, dotfiles included
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            include_hidden: true,
        }
    }

    /// Include or skip hidden files (starting with .)
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Override the list of extensions to accept.
    ///
    /// Entries are normalized, so `".PNG"` and `"png"` are equivalent.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// Check if a file should be included
    pub fn should_include(&self, path: &Path) -> bool {
        if !self.include_hidden {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    return false;
                }
            }
        }

        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_includes_png_and_jpeg() {
        let filter = ImageFilter::new();
        assert!(filter.should_include(Path::new("fridge-poem/2024-06-01.png")));
        assert!(filter.should_include(Path::new("fridge-poem/2024-06-01.JPG")));
        assert!(filter.should_include(Path::new("fridge-poem/2024-06-01.jpeg")));
    }

    #[test]
    fn filter_excludes_other_formats_by_default() {
        let filter = ImageFilter::new();
        assert!(!filter.should_include(Path::new("fridge-poem/shots.yml")));
        assert!(!filter.should_include(Path::new("fridge-poem/frame.webp")));
    }

    #[test]
    fn filter_includes_hidden_by_default() {
        let filter = ImageFilter::new();
        assert!(filter.should_include(Path::new("fridge-poem/.2024-06-01.png")));
    }

    #[test]
    fn filter_can_skip_hidden() {
        let filter = ImageFilter::new().with_hidden(false);
        assert!(!filter.should_include(Path::new("fridge-poem/.2024-06-01.png")));
        assert!(filter.should_include(Path::new("fridge-poem/2024-06-01.png")));
    }

    #[test]
    fn custom_extensions_are_normalized() {
        let filter = ImageFilter::new().with_extensions(vec![".WEBP".to_string(), "".to_string()]);
        assert!(filter.should_include(Path::new("shot.webp")));
        assert!(!filter.should_include(Path::new("shot.png")));
    }

    #[test]
    fn filter_handles_no_extension() {
        let filter = ImageFilter::new();
        assert!(!filter.should_include(Path::new("fridge-poem/README")));
    }
}
