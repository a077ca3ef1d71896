use crate::commands::{normalize_tags, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Store;

/// Which text the search terms are matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    #[default]
    All,
    Description,
}

pub fn run<S: Store>(
    store: &S,
    terms: &[String],
    tags: &[String],
    field: SearchField,
) -> Result<CmdResult> {
    let text = terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let tags = normalize_tags(tags);

    let items = match field {
        SearchField::All => store.search(&text, &tags)?,
        SearchField::Description => store.search_description(&text, &tags)?,
    };

    let mut result = CmdResult::default();
    if items.is_empty() {
        result.add_message(CmdMessage::info("No items found."));
    }
    Ok(result.with_items(items))
}
