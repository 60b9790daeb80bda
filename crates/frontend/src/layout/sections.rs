use leptos::prelude::*;

use crate::layout::page_context::PageContext;

/// The scrollable `section.page` blocks the navigation points at.
#[component]
pub fn Sections() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");
    let sections = ctx.config.with_value(|c| c.pages.clone());

    view! {
        <main>
            {sections
                .into_iter()
                .map(|section| {
                    view! {
                        <section class="page" id=section.id>
                            <div class="page-content">
                                <h1>{section.title}</h1>
                            </div>
                        </section>
                    }
                })
                .collect_view()}
        </main>
    }
}
