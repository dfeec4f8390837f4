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

//! Main dashboard page: the nav bar plus the three stat widgets.

use yew::prelude::*;

use crate::components::accuracy_stats::AccuracyWidget;
use crate::components::feedback_stats::FeedbackStatsWidget;
use crate::components::nav::NavBar;
use crate::components::opponent_stats::OpponentModelWidget;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="dashboard">
            <NavBar />
            <div class="widgets-grid">
                <FeedbackStatsWidget />
                <OpponentModelWidget />
                <AccuracyWidget />
            </div>
        </div>
    }
}
