//! default-methods - list the public methods of a module's default export
//!
//! Given the source of a TypeScript/JavaScript module, finds its `export default`
//! and reports the public methods of the exported class or object literal
//! together with the line each one is declared on.
//!
//! ```
//! use default_methods::{ContainerKind, extract};
//!
//! let output = extract("export default class {\n  index() {}\n}").unwrap().unwrap();
//! assert_eq!(output.kind, ContainerKind::Class);
//! assert_eq!(output.methods[0].name, "index");
//! assert_eq!(output.methods[0].lineno, 2);
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Parser options
//! - `core`: Extraction pipeline (parse, locate, resolve, extract)
//! - `error`: Extraction error type

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use crate::config::ExtractorOptions;
pub use crate::core::{ContainerKind, Extractor, ExtractorOutput, MethodEntry, extract};
pub use crate::error::ExtractError;
