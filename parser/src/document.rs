//! Read-only view over a parsed page.
//!
//! Extraction only ever needs a handful of traversal capabilities, so they are
//! spelled out as [`MarkupNode`] and any tree that can provide them plugs in
//! through [`DocumentTree`]. [`HtmlDocument`] is the `scraper`-backed
//! implementation used in practice.

use std::io::Read;

use encoding_rs::{Encoding, UTF_8};
use scraper::{ElementRef, Html};

use crate::error::ParseError;

/// Element-level capabilities the extractor relies on. Searches cover
/// descendants only (never the node itself) and return nodes in document order.
pub trait MarkupNode<'a>: Copy {
    fn tag_name(self) -> &'a str;

    fn has_class(self, class: &str) -> bool;

    /// Direct element children.
    fn child_nodes(self) -> Vec<Self>;

    fn find_all_by_class(self, class: &str) -> Vec<Self>;

    fn find_first_by_class(self, class: &str) -> Option<Self> {
        self.find_all_by_class(class).into_iter().next()
    }

    fn find_all_by_tag(self, tag: &str) -> Vec<Self>;

    fn attribute(self, name: &str) -> Option<&'a str>;

    /// Concatenated text of every descendant text node.
    fn text_content(self) -> String;

    fn parent_tag_name(self) -> Option<&'a str>;
}

pub trait DocumentTree {
    type Node<'a>: MarkupNode<'a>
    where
        Self: 'a;

    fn root(&self) -> Self::Node<'_>;
}

#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses already-decoded markup.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotMarkup`] when the input holds no tag at all.
    pub fn parse(markup: &str) -> Result<Self, ParseError> {
        if !looks_like_markup(markup) {
            return Err(ParseError::NotMarkup);
        }

        Ok(Self {
            html: Html::parse_document(markup),
        })
    }

    /// Consumes `reader` fully and parses the decoded bytes.
    ///
    /// # Errors
    ///
    /// Fails when the stream cannot be read or holds no markup.
    pub fn from_reader<R: Read>(reader: R, charset: Option<&str>) -> Result<Self, ParseError> {
        let markup = read_markup(reader, charset)?;
        Self::parse(&markup)
    }
}

impl DocumentTree for HtmlDocument {
    type Node<'a>
        = ElementRef<'a>
    where
        Self: 'a;

    fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

fn descendant_elements(node: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    (*node).descendants().skip(1).filter_map(ElementRef::wrap)
}

impl<'a> MarkupNode<'a> for ElementRef<'a> {
    fn tag_name(self) -> &'a str {
        self.value().name()
    }

    fn has_class(self, class: &str) -> bool {
        self.value().classes().any(|candidate| candidate == class)
    }

    fn child_nodes(self) -> Vec<Self> {
        (*self).children().filter_map(ElementRef::wrap).collect()
    }

    fn find_all_by_class(self, class: &str) -> Vec<Self> {
        descendant_elements(self)
            .filter(|element| element.has_class(class))
            .collect()
    }

    fn find_first_by_class(self, class: &str) -> Option<Self> {
        descendant_elements(self).find(|element| element.has_class(class))
    }

    fn find_all_by_tag(self, tag: &str) -> Vec<Self> {
        descendant_elements(self)
            .filter(|element| element.value().name() == tag)
            .collect()
    }

    fn attribute(self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn text_content(self) -> String {
        ElementRef::text(&self).collect()
    }

    fn parent_tag_name(self) -> Option<&'a str> {
        (*self)
            .parent()
            .and_then(ElementRef::wrap)
            .map(|parent| parent.value().name())
    }
}

/// Reads the whole stream and decodes it. A byte-order mark wins, then the
/// declared `charset` label, then UTF-8 with replacement characters.
///
/// # Errors
///
/// Returns [`ParseError::Read`] when the stream fails.
pub fn read_markup<R: Read>(mut reader: R, charset: Option<&str>) -> Result<String, ParseError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode_markup(&bytes, charset))
}

#[must_use]
pub fn decode_markup(bytes: &[u8], charset: Option<&str>) -> String {
    let encoding = charset
        .and_then(|label| Encoding::for_label(label.trim().as_bytes()))
        .unwrap_or(UTF_8);
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

fn looks_like_markup(text: &str) -> bool {
    text.as_bytes().windows(2).any(|pair| {
        pair[0] == b'<' && (pair[1].is_ascii_alphabetic() || matches!(pair[1], b'!' | b'/'))
    })
}

#[cfg(test)]
mod tests {
    use super::{DocumentTree, HtmlDocument, MarkupNode, decode_markup, read_markup};
    use crate::error::ParseError;

    const PAGE: &str = r#"
        <html><body>
          <div id="outer" class="a b">
            <span class="b">one</span>
            <p>two <em class="b">three</em></p>
          </div>
          <table><thead><tr><th colspan="2">x</th></tr></thead></table>
        </body></html>
    "#;

    #[test]
    fn class_search_is_document_ordered_and_excludes_self() {
        let doc = HtmlDocument::parse(PAGE).expect("page should parse");
        let outer = doc
            .root()
            .find_first_by_class("a")
            .expect("outer div should match");

        let texts = outer
            .find_all_by_class("b")
            .into_iter()
            .map(MarkupNode::text_content)
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["one", "three"]);
    }

    #[test]
    fn reads_attributes_parent_tag_and_children() {
        let doc = HtmlDocument::parse(PAGE).expect("page should parse");
        let header = doc.root().find_all_by_tag("th")[0];

        assert_eq!(header.attribute("colspan"), Some("2"));
        assert_eq!(header.attribute("rowspan"), None);
        assert_eq!(header.parent_tag_name(), Some("tr"));

        let row = doc.root().find_all_by_tag("tr")[0];
        assert_eq!(row.parent_tag_name(), Some("thead"));
        assert_eq!(row.child_nodes().len(), 1);
        assert_eq!(row.child_nodes()[0].tag_name(), "th");
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let doc = HtmlDocument::parse(PAGE).expect("page should parse");
        let paragraph = doc.root().find_all_by_tag("p")[0];
        assert_eq!(paragraph.text_content(), "two three");
    }

    #[test]
    fn rejects_input_without_tags() {
        assert!(matches!(
            HtmlDocument::parse("just some words"),
            Err(ParseError::NotMarkup)
        ));
        assert!(matches!(HtmlDocument::parse(""), Err(ParseError::NotMarkup)));
        assert!(matches!(
            HtmlDocument::parse("1 < 2"),
            Err(ParseError::NotMarkup)
        ));
    }

    #[test]
    fn decodes_with_declared_charset() {
        let bytes = [b'<', b'b', b'>', 0xE2, b'<', b'/', b'b', b'>'];
        assert_eq!(decode_markup(&bytes, Some("windows-1257")), "<b>ā</b>");
    }

    #[test]
    fn bom_overrides_declared_charset() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("<i>ā</i>".as_bytes());
        assert_eq!(decode_markup(&bytes, Some("windows-1257")), "<i>ā</i>");
    }

    #[test]
    fn unknown_charset_falls_back_to_utf8() {
        let markup = read_markup("<i>ē</i>".as_bytes(), Some("no-such-charset"))
            .expect("reading from a slice cannot fail");
        assert_eq!(markup, "<i>ē</i>");
    }
}
