use crate::action::Action;

use super::Dialog;

/// A flattened, author-declared menu hierarchy.
///
/// Each item path encodes its position with `.` separators
/// (`"Page.Export.Draw"`); a trailing `_` asks for a separator after the item.
/// Items appear in the compiled menu in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSpec {
    pub title: String,
    pub items: Vec<SpecItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecItem {
    pub path: String,
    pub action: Action,
    /// Dialog opened in place of a sub-menu.
    pub sub_window: Option<Dialog>,
}

impl MenuSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, path: impl Into<String>, action: Action) -> Self {
        self.items.push(SpecItem {
            path: path.into(),
            action,
            sub_window: None,
        });
        self
    }

    pub fn dialog(mut self, path: impl Into<String>, action: Action, dialog: Dialog) -> Self {
        self.items.push(SpecItem {
            path: path.into(),
            action,
            sub_window: Some(dialog),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
