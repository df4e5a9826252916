/// Click handling: single discard or shift-click range discard

use crate::runtime::TabsApi;
use crate::tab_data::{TabId, TabSnapshot};
use crate::tab_list::TabListAction;

/// Discard requests produced by one click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickPlan {
    /// Missing or already discarded tab
    Ignored,
    /// Plain click. The id may be missing, in which case the discard fails locally.
    Single(Option<TabId>),
    /// Shift-click: every live tab with an id between anchor and click, in list order
    Range(Vec<TabId>),
}

impl ClickPlan {
    pub fn into_requests(self) -> Vec<Option<TabId>> {
        match self {
            ClickPlan::Ignored => Vec::new(),
            ClickPlan::Single(id) => vec![id],
            ClickPlan::Range(ids) => ids.into_iter().map(Some).collect(),
        }
    }
}

/// Tracks the anchor index for shift-click ranges
#[derive(Debug, Default)]
pub struct SelectionController {
    anchor: Option<usize>,
}

impl SelectionController {
    pub fn new() -> Self {
        SelectionController { anchor: None }
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Forget the anchor; indices are meaningless once the list is replaced.
    pub fn reset(&mut self) {
        self.anchor = None;
    }

    /// Plan the discards for a click on `index`. The anchor moves to `index`
    /// even when the click is ignored.
    pub fn click(&mut self, tabs: &[TabSnapshot], index: usize, shift: bool) -> ClickPlan {
        let plan = self.plan(tabs, index, shift);
        self.anchor = Some(index);
        plan
    }

    fn plan(&self, tabs: &[TabSnapshot], index: usize, shift: bool) -> ClickPlan {
        let clicked = match tabs.get(index) {
            Some(tab) if !tab.discarded => tab,
            _ => return ClickPlan::Ignored,
        };

        match self.anchor {
            Some(anchor) if shift && anchor != index => {
                let start = anchor.min(index);
                let end = anchor.max(index);

                let ids = tabs
                    .iter()
                    .skip(start)
                    .take(end - start + 1)
                    .filter(|tab| !tab.discarded)
                    .filter_map(|tab| tab.id)
                    .collect();

                ClickPlan::Range(ids)
            }
            _ => ClickPlan::Single(clicked.id),
        }
    }
}

/// Run one discard request. Failures only reach the log; the tab stays
/// clickable so the user can retry.
pub async fn discard_one<A: TabsApi>(api: &A, id: Option<TabId>) -> Option<TabListAction> {
    match api.discard(id).await {
        Ok(id) => {
            log::debug!("Discarded tab {}", id);
            Some(TabListAction::Discarded(id))
        }
        Err(e) => {
            match id {
                Some(id) => log::error!("Failed to discard tab {}: {}", id, e),
                None => log::error!("Failed to discard tab: {}", e),
            }
            None
        }
    }
}
