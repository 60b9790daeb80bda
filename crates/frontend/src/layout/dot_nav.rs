use leptos::prelude::*;

use crate::layout::page_context::PageContext;
use crate::page::PageId;

/// Fixed column of dots, one per section.
#[component]
pub fn DotNav() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");
    let sections = ctx.config.with_value(|c| c.pages.clone());

    view! {
        <div class="dot-nav">
            {sections
                .into_iter()
                .map(|section| {
                    let page = PageId::new(section.id.clone());
                    let target = section.id.clone();
                    view! {
                        <span
                            class="dot"
                            class:active=move || ctx.is_page_active(&page)
                            data-page=section.id
                            title=section.title
                            on:click=move |_| ctx.dot_click(&target)
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
