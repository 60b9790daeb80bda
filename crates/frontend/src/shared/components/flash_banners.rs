use leptos::prelude::*;

use crate::layout::page_context::PageContext;
use crate::page::BannerPhase;

/// Flash banners queued by the backend. Each one loses its `show` class when
/// its fade starts and leaves the DOM once the fade is over.
#[component]
pub fn FlashBanners() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");

    view! {
        <div class="flash-messages">
            <For
                each=move || ctx.banners()
                key=|banner| banner.id
                children=move |banner| {
                    let id = banner.id;
                    let category = banner.message.category.css_class();
                    let shown = move || {
                        ctx.banners()
                            .iter()
                            .any(|b| b.id == id && b.phase == BannerPhase::Shown)
                    };
                    view! {
                        <div
                            class=format!("alert {} alert-dismissible", category)
                            class:show=shown
                            role="alert"
                        >
                            {banner.message.message.clone()}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| ctx.dismiss_banner(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
