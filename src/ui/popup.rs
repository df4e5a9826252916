/// Popup UI for Tab Suspender extension

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::runtime::RuntimeAdapter;
use crate::selection::{SelectionController, discard_one};
use crate::tab_list::{TabListAction, TabListState, load_tabs};
use crate::ui::components::{ErrorBanner, TabRow};

#[function_component(App)]
pub fn app() -> Html {
    let tab_list = use_reducer(TabListState::default);
    let selection = use_mut_ref(SelectionController::new);
    let api = use_memo((), |_| RuntimeAdapter::detect());

    // Load tabs once on mount
    {
        let tab_list = tab_list.clone();
        let selection = selection.clone();
        let api = api.clone();

        use_effect_with((), move |_| {
            match &*api {
                Ok(api) => {
                    log::info!("Using {}", api.name());
                    let api = api.clone();
                    spawn_local(async move {
                        let action = load_tabs(&api).await;
                        selection.borrow_mut().reset();
                        tab_list.dispatch(action);
                    });
                }
                Err(e) => {
                    log::error!("{}", e);
                    tab_list.dispatch(TabListAction::LoadFailed(format!(
                        "Error fetching tabs: {}",
                        e
                    )));
                }
            }
            || ()
        });
    }

    // Each discard runs as its own task; completions patch the latest state
    let on_tab_click = {
        let tab_list = tab_list.clone();
        let selection = selection.clone();
        let api = api.clone();

        Callback::from(move |(index, shift): (usize, bool)| {
            let plan = selection.borrow_mut().click(&tab_list.tabs, index, shift);

            let Ok(api) = &*api else {
                return;
            };

            for id in plan.into_requests() {
                let api = api.clone();
                let tab_list = tab_list.clone();
                spawn_local(async move {
                    if let Some(action) = discard_one(&api, id).await {
                        tab_list.dispatch(action);
                    }
                });
            }
        })
    };

    let summary = format!(
        "{} tabs, {} suspended",
        tab_list.tabs.len(),
        tab_list.discarded_count()
    );

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Tab Suspender"}</h1>

            if let Some(error) = tab_list.last_error.clone() {
                <ErrorBanner message={error} />
            }

            if !tab_list.tabs.is_empty() {
                <p class="summary-text">{summary}</p>
                <ul class="tab-list">
                    {for tab_list.tabs.iter().enumerate().map(|(index, tab)| html! {
                        <TabRow
                            key={tab.list_key(index)}
                            tab={tab.clone()}
                            {index}
                            onclick={on_tab_click.clone()}
                        />
                    })}
                </ul>
            } else if tab_list.last_error.is_none() {
                <p class="loading-text">{"Loading tabs or no tabs found..."}</p>
            }

            <p class="footer-popup">
                {format!("Tab Suspender v{}", env!("CARGO_PKG_VERSION"))}
            </p>
        </div>
    }
}
