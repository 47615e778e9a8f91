//! Store messages.
//!
//! The front end drives the tree store with small JSON messages such as
//! `{"type": "toggleExpand", "id": "a"}`; each maps onto one store method.

use serde::{Deserialize, Serialize};

use super::edit::NodeDraft;
use super::model::{MindmapState, MindmapTree};
use crate::error::MindmapError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    SetData { tree: Option<MindmapTree> },
    SelectNode { id: String },
    ClearSelection,
    ToggleExpand { id: String },
    ExpandAll,
    CollapseAll,
    DrillDown,
    DrillUp,
    AddChild { parent: String, draft: NodeDraft },
    UpdateNode { id: String, draft: NodeDraft },
}

impl MindmapState {
    pub fn apply(&mut self, action: Action) -> Result<(), MindmapError> {
        match action {
            Action::SetData { tree } => self.set_data(tree),
            Action::SelectNode { id } => self.select_node(&id),
            Action::ClearSelection => self.clear_selection(),
            Action::ToggleExpand { id } => self.toggle_expand(&id),
            Action::ExpandAll => self.expand_all(),
            Action::CollapseAll => self.collapse_all(),
            Action::DrillDown => self.drill_down(),
            Action::DrillUp => self.drill_up(),
            Action::AddChild { parent, draft } => {
                self.add_child(&parent, &draft)?;
            }
            Action::UpdateNode { id, draft } => self.update_node(&id, &draft)?,
        }
        Ok(())
    }
}
