//! Extraction pipeline.
//!
//! Stages run strictly in order, each either feeding the next or ending the
//! call:
//!
//! 1. `parser`: source text to AST
//! 2. `locate`: find the `export default` statement
//! 3. `resolve`: follow an identifier one hop and classify the value
//! 4. `members`: list the public methods of the class or object

pub mod locate;
pub mod members;
pub mod parser;
pub mod resolve;
pub mod types;

use tracing::debug;

use crate::config::ExtractorOptions;
use crate::error::{ExtractError, Result};

pub use locate::{DefaultExport, find_default_export};
pub use parser::{ParsedSource, parse_source};
pub use resolve::{ExportTarget, resolve_export};
pub use types::{ContainerKind, ExtractorOutput, MethodEntry};

/// Lists the methods of a module's default export.
///
/// Holds only parser options; every call builds and drops its own AST, so one
/// extractor can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractorOptions,
}

impl Extractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extract the public methods of the default-exported class or object.
    ///
    /// Returns `Ok(None)` when the default export is some other value, such as a
    /// function or a literal.
    pub fn extract(&self, source: &str) -> Result<Option<ExtractorOutput>> {
        let parsed = parse_source(source, &self.options)?;
        debug!(file = %self.options.filename, "parsed module");

        let export =
            find_default_export(&parsed.module).ok_or(ExtractError::MissingDefaultExport)?;
        let target = resolve_export(&parsed.module, export)?;

        let output = match target {
            ExportTarget::Class(class) => Some(members::extract_class_methods(&parsed, class)),
            ExportTarget::Object(object) => {
                Some(members::extract_object_methods(&parsed, object))
            }
            ExportTarget::Other => None,
        };

        match &output {
            Some(output) => debug!(
                file = %self.options.filename,
                kind = %output.kind,
                methods = output.methods.len(),
                "extracted methods"
            ),
            None => debug!(file = %self.options.filename, "default export is not a container"),
        }

        Ok(output)
    }
}

/// Extract with default options.
pub fn extract(source: &str) -> Result<Option<ExtractorOutput>> {
    Extractor::default().extract(source)
}
