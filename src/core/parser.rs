//! Parser adapter: source text to swc module AST.

use swc_common::{FileName, GLOBALS, Globals, SourceMap, Span, sync::Lrc};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as SwcError};

use crate::config::ExtractorOptions;
use crate::error::{ExtractError, Result};

/// A parsed module together with the source map needed to turn spans into lines.
///
/// Built once per extraction call and never mutated afterwards.
pub struct ParsedSource {
    pub module: Module,
    source_map: Lrc<SourceMap>,
}

impl ParsedSource {
    /// 1-based line of the start of `span`.
    pub fn line_of(&self, span: Span) -> usize {
        self.source_map.lookup_char_pos(span.lo).line
    }
}

fn syntax_for(options: &ExtractorOptions) -> Syntax {
    Syntax::Typescript(TsSyntax {
        tsx: options.jsx_enabled(),
        decorators: options.decorators,
        ..Default::default()
    })
}

fn to_parse_error(err: SwcError) -> ExtractError {
    ExtractError::Parse(err.kind().msg().into_owned())
}

/// Parse `code` as an ES module.
///
/// Recoverable errors the parser collects on the side are treated like fatal
/// ones; the first of them is returned.
pub fn parse_source(code: &str, options: &ExtractorOptions) -> Result<ParsedSource> {
    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let source_file = source_map.new_source_file(
            FileName::Real(options.filename.clone().into()).into(),
            code.to_string(),
        );

        let mut parser = Parser::new(
            syntax_for(options),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser.parse_module().map_err(to_parse_error)?;

        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(to_parse_error(err));
        }

        Ok(ParsedSource { module, source_map })
    })
}
