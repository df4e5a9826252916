/// Reusable UI components

use patternfly_yew::prelude::*;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::tab_data::TabSnapshot;

#[derive(Properties, PartialEq)]
pub struct TabRowProps {
    pub tab: TabSnapshot,
    pub index: usize,
    /// Emits `(index, shift_held)`
    pub onclick: Callback<(usize, bool)>,
}

/// One tab in the list. Discarded rows are dimmed but still clickable so they
/// can anchor a shift-click range.
#[function_component(TabRow)]
pub fn tab_row(props: &TabRowProps) -> Html {
    let icon_failed = use_state(|| false);

    let onclick = {
        let onclick = props.onclick.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            onclick.emit((index, e.shift_key()));
        })
    };

    // A broken favicon is hidden, never replaced
    let on_icon_error = {
        let icon_failed = icon_failed.clone();
        Callback::from(move |e: Event| {
            if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
                log::debug!("Favicon failed to load: {}", img.src());
            }
            icon_failed.set(true);
        })
    };

    let icon = if *icon_failed {
        None
    } else {
        props.tab.fav_icon_url.clone()
    };

    let class = classes!(
        "tab-row",
        props.tab.discarded.then_some("tab-row-discarded")
    );

    html! {
        <li {class} {onclick}>
            if let Some(src) = icon {
                <img class="tab-favicon" {src} alt="favicon" onerror={on_icon_error} />
            }
            <span class="tab-title">{props.tab.display_title()}</span>
            <span class="tab-url">{format!(" ({})", props.tab.display_url())}</span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="message-top-margin">
            <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                {props.message.clone()}
            </Alert>
        </div>
    }
}
