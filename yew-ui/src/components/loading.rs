/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Shared loading and empty-state views used by every stat widget.

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingIndicatorProps {
    #[prop_or("Loading...".into())]
    pub text: AttrValue,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    html! {
        <div class="loading-indicator">
            <span class="loading-spinner"></span>
            { props.text.clone() }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            { props.message.clone() }
        </div>
    }
}
