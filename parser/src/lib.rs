//! Turns a tezaurs.lv entry page into a [`ParsedDocument`]: numbered senses,
//! the verbalization note and a normalized inflection table.

mod document;
mod error;
mod extract;
mod indent;
mod model;
mod table_parse;
mod warning;

use std::io::Read;

use tracing::debug;

pub use document::{DocumentTree, HtmlDocument, MarkupNode, decode_markup, read_markup};
pub use error::ParseError;
pub use extract::{
    GLOSS_CLASS, SENSE_CLASS, SENSE_NUMBER_CLASS, VERBALIZATION_CLASS, extract_entries,
};
pub use indent::indent_depth;
pub use model::{Cell, ColumnInfo, Entry, ParsedDocument, Table};
pub use table_parse::{INFLECTION_TABLE_CLASS, MORPHOLOGY_CLASS, build_table};
pub use warning::{ParseWarning, WarningCode};

/// Runs the entry extractor and the table builder over an already parsed tree.
pub fn extract_document<T: DocumentTree>(tree: &T) -> ParsedDocument {
    let mut parsed = extract_entries(tree);
    parsed.table = build_table(tree, &mut parsed.warnings);

    if !parsed.warnings.is_empty() {
        debug!(
            warnings = parsed.warnings.len(),
            "page parsed with degraded fields"
        );
    }

    parsed
}

/// Parses a UTF-8 (or BOM-marked) byte stream.
///
/// # Errors
///
/// Fails only when the stream cannot be read or holds no markup. A page with
/// no senses is a successful, empty result.
pub fn parse_document<R: Read>(reader: R) -> Result<ParsedDocument, ParseError> {
    parse_document_with_charset(reader, None)
}

/// Like [`parse_document`], decoding with `charset` when the stream has no BOM.
///
/// # Errors
///
/// See [`parse_document`].
pub fn parse_document_with_charset<R: Read>(
    reader: R,
    charset: Option<&str>,
) -> Result<ParsedDocument, ParseError> {
    let document = HtmlDocument::from_reader(reader, charset)?;
    Ok(extract_document(&document))
}

/// Parses markup that is already a string.
///
/// # Errors
///
/// Returns [`ParseError::NotMarkup`] when `markup` holds no tag.
pub fn parse_str(markup: &str) -> Result<ParsedDocument, ParseError> {
    let document = HtmlDocument::parse(markup)?;
    Ok(extract_document(&document))
}
