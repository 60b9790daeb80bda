use leptos::prelude::*;

use crate::layout::page_context::PageContext;
use crate::layout::Shell;
use crate::shared::json_script::{load_flash_messages, load_page_config};

#[component]
pub fn App() -> impl IntoView {
    let ctx = PageContext::new(load_page_config(), load_flash_messages());
    provide_context(ctx);

    // Sections exist once the view is mounted; then pick the initial active
    // link and follow every scroll from there.
    Effect::new(move |_| {
        ctx.sync_scroll();
    });
    let _scroll = window_event_listener(leptos::ev::scroll, move |_| ctx.sync_scroll());

    ctx.start_banner_timers();

    view! {
        <Shell />
    }
}
