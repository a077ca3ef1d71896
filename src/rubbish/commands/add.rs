use crate::commands::{normalize_tags, CmdMessage, CmdResult};
use crate::error::{Result, RubbishError};
use crate::model::Item;
use crate::store::Store;

/// What the user asked to add, before any defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub name: String,
    pub id: Option<String>,
    pub container_id: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    /// Accept an item that is not inside anything.
    pub allow_no_container: bool,
}

impl AddRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn into_item(self) -> Result<Item> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(RubbishError::Validation("name is required".to_string()));
        }

        let container_id = self.container_id.unwrap_or_default().trim().to_string();
        if container_id.is_empty() && !self.allow_no_container {
            return Err(RubbishError::Validation(
                "container must be specified without --allow-no-container".to_string(),
            ));
        }

        Ok(Item::new(name)
            .with_id(self.id.unwrap_or_default().trim())
            .with_container(container_id)
            .with_description(self.description.unwrap_or_default().trim())
            .with_tags(normalize_tags(&self.tags)))
    }
}

pub fn run<S: Store>(store: &mut S, request: AddRequest) -> Result<CmdResult> {
    let item = request.into_item()?;
    let id = store.add(item)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("added {}", id)));
    Ok(result.with_added_id(id))
}
