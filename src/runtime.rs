/// Runtime adapter over the host tabs API
///
/// Extension hosts expose tabs either as a promise-returning `browser.tabs`
/// namespace or as the callback-style `chrome.tabs` namespace that reports
/// failures through `chrome.runtime.lastError`. Both are normalised into the
/// [`TabsApi`] trait; the variant is picked once by [`RuntimeAdapter::detect`].

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::TabError;
use crate::tab_data::{TabId, TabSnapshot};

#[allow(async_fn_in_trait)]
pub trait TabsApi {
    /// Enumerate every tab in every window.
    async fn query_tabs(&self) -> Result<Vec<TabSnapshot>, TabError>;

    /// Ask the host to discard one tab.
    async fn discard_tab(&self, id: TabId) -> Result<(), TabError>;

    /// Discard a tab whose id may be missing. A missing id fails locally
    /// without reaching the host.
    async fn discard(&self, id: Option<TabId>) -> Result<TabId, TabError> {
        let id = id.ok_or(TabError::MissingId)?;
        self.discard_tab(id).await?;
        Ok(id)
    }
}

/// Host tabs API chosen at startup
#[derive(Clone)]
pub enum RuntimeAdapter {
    Promise(PromiseTabs),
    Callback(CallbackTabs),
}

impl RuntimeAdapter {
    /// Probe the global scope, preferring the promise-based namespace.
    pub fn detect() -> Result<RuntimeAdapter, TabError> {
        let global: JsValue = js_sys::global().into();

        if let Some(tabs) = property(&global, "browser").and_then(|b| property(&b, "tabs")) {
            return Ok(RuntimeAdapter::Promise(PromiseTabs { tabs }));
        }

        if let Some(chrome) = property(&global, "chrome") {
            if let Some(tabs) = property(&chrome, "tabs") {
                let runtime = property(&chrome, "runtime").unwrap_or(JsValue::UNDEFINED);
                return Ok(RuntimeAdapter::Callback(CallbackTabs { tabs, runtime }));
            }
        }

        Err(TabError::Unavailable)
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuntimeAdapter::Promise(_) => "browser.tabs (promise)",
            RuntimeAdapter::Callback(_) => "chrome.tabs (callback)",
        }
    }
}

impl TabsApi for RuntimeAdapter {
    async fn query_tabs(&self) -> Result<Vec<TabSnapshot>, TabError> {
        match self {
            RuntimeAdapter::Promise(api) => api.query_tabs().await,
            RuntimeAdapter::Callback(api) => api.query_tabs().await,
        }
    }

    async fn discard_tab(&self, id: TabId) -> Result<(), TabError> {
        match self {
            RuntimeAdapter::Promise(api) => api.discard_tab(id).await,
            RuntimeAdapter::Callback(api) => api.discard_tab(id).await,
        }
    }
}

/// `browser.tabs`: every call returns a promise
#[derive(Clone)]
pub struct PromiseTabs {
    tabs: JsValue,
}

impl PromiseTabs {
    async fn call(&self, name: &str, arg: &JsValue) -> Result<JsValue, TabError> {
        let function = method(&self.tabs, name)?;
        let returned = function.call1(&self.tabs, arg).map_err(host_error)?;
        let promise = returned
            .dyn_into::<Promise>()
            .map_err(|_| TabError::Host(format!("tabs.{} did not return a promise", name)))?;

        JsFuture::from(promise).await.map_err(host_error)
    }
}

impl TabsApi for PromiseTabs {
    async fn query_tabs(&self) -> Result<Vec<TabSnapshot>, TabError> {
        let tabs_js = self.call("query", &Object::new().into()).await?;
        decode_tabs(tabs_js)
    }

    async fn discard_tab(&self, id: TabId) -> Result<(), TabError> {
        self.call("discard", &JsValue::from(id)).await?;
        Ok(())
    }
}

/// `chrome.tabs`: completion callbacks plus `chrome.runtime.lastError`
#[derive(Clone)]
pub struct CallbackTabs {
    tabs: JsValue,
    runtime: JsValue,
}

impl CallbackTabs {
    /// Wrap a callback-style call in a promise that rejects when the host
    /// sets `lastError` for this completion.
    async fn call(&self, name: &str, arg: &JsValue) -> Result<JsValue, TabError> {
        let function = method(&self.tabs, name)?;

        let promise = Promise::new(&mut |resolve, reject| {
            let runtime = self.runtime.clone();
            let reject_on_error = reject.clone();
            let callback = Closure::once_into_js(move |result: JsValue| {
                match last_error(&runtime) {
                    Some(message) => {
                        let _ = reject_on_error.call1(&JsValue::NULL, &JsValue::from_str(&message));
                    }
                    None => {
                        let _ = resolve.call1(&JsValue::NULL, &result);
                    }
                }
            });

            if let Err(thrown) = function.call2(&self.tabs, arg, &callback) {
                let _ = reject.call1(&JsValue::NULL, &thrown);
            }
        });

        JsFuture::from(promise).await.map_err(host_error)
    }
}

impl TabsApi for CallbackTabs {
    async fn query_tabs(&self) -> Result<Vec<TabSnapshot>, TabError> {
        let tabs_js = self.call("query", &Object::new().into()).await?;
        decode_tabs(tabs_js)
    }

    async fn discard_tab(&self, id: TabId) -> Result<(), TabError> {
        self.call("discard", &JsValue::from(id)).await?;
        Ok(())
    }
}

/// Best-effort message from a thrown value or rejection reason
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
    {
        return message;
    }

    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn host_error(value: JsValue) -> TabError {
    TabError::Host(js_error_message(&value))
}

fn decode_tabs(tabs_js: JsValue) -> Result<Vec<TabSnapshot>, TabError> {
    serde_wasm_bindgen::from_value(tabs_js).map_err(|e| TabError::Decode(e.to_string()))
}

fn last_error(runtime: &JsValue) -> Option<String> {
    property(runtime, "lastError").map(|err| js_error_message(&err))
}

/// Defined, non-null property of a JS object
fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    if !target.is_object() {
        return None;
    }

    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn method(target: &JsValue, name: &str) -> Result<Function, TabError> {
    property(target, name)
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| TabError::Host(format!("tabs.{} is not available", name)))
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;

    use super::TabsApi;
    use crate::error::TabError;
    use crate::tab_data::{TabId, TabSnapshot};

    /// In-memory host that records every discard that reaches it
    pub(crate) struct FakeTabs {
        pub tabs: Result<Vec<TabSnapshot>, TabError>,
        pub failing: Vec<TabId>,
        pub discard_calls: RefCell<Vec<TabId>>,
    }

    impl FakeTabs {
        pub fn with_tabs(tabs: Vec<TabSnapshot>) -> FakeTabs {
            FakeTabs {
                tabs: Ok(tabs),
                failing: Vec::new(),
                discard_calls: RefCell::new(Vec::new()),
            }
        }

        pub fn failing_query(message: &str) -> FakeTabs {
            FakeTabs {
                tabs: Err(TabError::Host(message.to_string())),
                failing: Vec::new(),
                discard_calls: RefCell::new(Vec::new()),
            }
        }

        pub fn fail_discard(mut self, id: TabId) -> FakeTabs {
            self.failing.push(id);
            self
        }
    }

    impl TabsApi for FakeTabs {
        async fn query_tabs(&self) -> Result<Vec<TabSnapshot>, TabError> {
            self.tabs.clone()
        }

        async fn discard_tab(&self, id: TabId) -> Result<(), TabError> {
            self.discard_calls.borrow_mut().push(id);
            if self.failing.contains(&id) {
                Err(TabError::Host(format!("Cannot discard tab with id: {}", id)))
            } else {
                Ok(())
            }
        }
    }
}
