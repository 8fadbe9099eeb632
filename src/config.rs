use std::path::Path;

use serde::{Deserialize, Serialize};

/// File name used for the source map when none is given.
pub const DEFAULT_FILENAME: &str = "source.ts";

/// Extensions the CLI treats as module sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mts", "cts", "mjs", "cjs"];

/// Parser settings for one extraction.
///
/// TypeScript syntax is always enabled; `accessor` fields are accepted by the
/// TypeScript grammar regardless of these flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorOptions {
    #[serde(default = "default_filename")]
    pub filename: String,
    /// Enable JSX. `None` infers it from the extension of `filename`.
    #[serde(default)]
    pub tsx: Option<bool>,
    #[serde(default = "default_decorators")]
    pub decorators: bool,
}

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

fn default_decorators() -> bool {
    true
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            tsx: None,
            decorators: default_decorators(),
        }
    }
}

impl ExtractorOptions {
    pub fn for_file(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Whether JSX syntax should be enabled for this source.
    pub fn jsx_enabled(&self) -> bool {
        self.tsx.unwrap_or_else(|| {
            Path::new(&self.filename)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| matches!(ext, "tsx" | "jsx"))
        })
    }
}

/// Check whether a path has one of the [`SOURCE_EXTENSIONS`].
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
