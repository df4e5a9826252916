/// Tab list state and the one-shot loader that fills it

use std::rc::Rc;

use yew::Reducible;

use crate::runtime::TabsApi;
use crate::tab_data::{TabId, TabSnapshot};

/// Tabs in host enumeration order plus the last list-load error
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabListState {
    pub tabs: Vec<TabSnapshot>,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabListAction {
    Loaded(Vec<TabSnapshot>),
    LoadFailed(String),
    Discarded(TabId),
}

impl TabListState {
    pub fn apply(&mut self, action: TabListAction) {
        match action {
            TabListAction::Loaded(tabs) => {
                self.tabs = tabs;
                self.last_error = None;
            }
            TabListAction::LoadFailed(message) => {
                self.tabs.clear();
                self.last_error = Some(message);
            }
            TabListAction::Discarded(id) => {
                self.mark_discarded(id);
            }
        }
    }

    /// Flag the tab with `id` as discarded. Returns false if no tab matches.
    pub fn mark_discarded(&mut self, id: TabId) -> bool {
        self.tabs
            .iter_mut()
            .find(|tab| tab.id == Some(id))
            .map(|tab| {
                tab.discarded = true;
            })
            .is_some()
    }

    pub fn discarded_count(&self) -> usize {
        self.tabs.iter().filter(|tab| tab.discarded).count()
    }
}

impl Reducible for TabListState {
    type Action = TabListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Query the host once and turn the answer into a state update
pub async fn load_tabs<A: TabsApi>(api: &A) -> TabListAction {
    match api.query_tabs().await {
        Ok(tabs) => {
            log::debug!("Loaded {} tabs", tabs.len());
            TabListAction::Loaded(tabs)
        }
        Err(e) => {
            log::error!("{}", e);
            TabListAction::LoadFailed(format!("Error fetching tabs: {}", e))
        }
    }
}
