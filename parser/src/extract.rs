use tracing::debug;

use crate::document::{DocumentTree, MarkupNode};
use crate::model::{Entry, ParsedDocument};

pub const SENSE_CLASS: &str = "dict_Sense";
pub const SENSE_NUMBER_CLASS: &str = "dict_SenseNumber";
pub const GLOSS_CLASS: &str = "dict_Gloss";
pub const VERBALIZATION_CLASS: &str = "dict_Verbalization";

fn first_text<'a, N: MarkupNode<'a>>(scope: N, class: &str) -> String {
    scope
        .find_first_by_class(class)
        .map(MarkupNode::text_content)
        .unwrap_or_default()
}

/// Collects every sense block in document order plus the first verbalization
/// note. The table is left unset.
pub fn extract_entries<T: DocumentTree>(tree: &T) -> ParsedDocument {
    let root = tree.root();

    let entries = root
        .find_all_by_class(SENSE_CLASS)
        .into_iter()
        .map(|sense| Entry {
            number_label: first_text(sense, SENSE_NUMBER_CLASS),
            gloss: first_text(sense, GLOSS_CLASS),
        })
        .collect::<Vec<_>>();

    let verbalization = first_text(root, VERBALIZATION_CLASS);

    debug!(
        entries = entries.len(),
        has_verbalization = !verbalization.is_empty(),
        "extracted sense blocks"
    );

    ParsedDocument {
        entries,
        verbalization,
        ..ParsedDocument::default()
    }
}

#[cfg(test)]
mod tests {
    use super::extract_entries;
    use crate::document::HtmlDocument;
    use crate::model::Entry;

    fn extract(markup: &str) -> crate::model::ParsedDocument {
        let doc = HtmlDocument::parse(markup).expect("fixture should parse");
        extract_entries(&doc)
    }

    #[test]
    fn no_sense_blocks_is_an_empty_result() {
        let parsed = extract("<html><body><p>Nekas netika atrasts</p></body></html>");
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.verbalization, "");
        assert!(parsed.table.is_none());
    }

    #[test]
    fn missing_number_or_gloss_keeps_the_entry() {
        let parsed = extract(
            r#"<div class="dict_Sense"><span class="dict_Gloss">bez numura</span></div>
               <div class="dict_Sense"><span class="dict_SenseNumber">2.</span></div>
               <div class="dict_Sense"></div>"#,
        );

        assert_eq!(
            parsed.entries,
            vec![
                Entry::new("", "bez numura"),
                Entry::new("2.", ""),
                Entry::new("", ""),
            ]
        );
    }

    #[test]
    fn only_the_first_number_and_gloss_of_a_block_count() {
        let parsed = extract(
            r#"<div class="dict_Sense">
                 <span class="dict_SenseNumber">1.</span>
                 <span class="dict_Gloss">pirmā</span>
                 <span class="dict_Gloss">otrā</span>
               </div>"#,
        );

        assert_eq!(parsed.entries, vec![Entry::new("1.", "pirmā")]);
    }

    #[test]
    fn nested_senses_follow_document_order() {
        let parsed = extract(
            r#"<div class="dict_Sense">
                 <span class="dict_SenseNumber">1.</span><span class="dict_Gloss">a</span>
                 <div class="dict_Sense">
                   <span class="dict_SenseNumber">1.1.</span><span class="dict_Gloss">b</span>
                 </div>
               </div>
               <div class="dict_Sense">
                 <span class="dict_SenseNumber">2.</span><span class="dict_Gloss">c</span>
               </div>"#,
        );

        let labels = parsed
            .entries
            .iter()
            .map(|entry| entry.number_label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["1.", "1.1.", "2."]);
        assert_eq!(parsed.entries[1].gloss, "b");
    }

    #[test]
    fn first_verbalization_wins() {
        let parsed = extract(
            r#"<p class="dict_Verbalization">Lieto <b>vsk.</b></p>
               <p class="dict_Verbalization">otrā piezīme</p>"#,
        );
        assert_eq!(parsed.verbalization, "Lieto vsk.");
    }
}
