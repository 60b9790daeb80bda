use leptos::ev;
use leptos::prelude::*;

use crate::layout::page_context::PageContext;
use crate::page::ModalTrigger;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");
    let site_title = ctx.config.with_value(|c| c.site_title.clone());

    view! {
        <footer class="footer">
            <span>{site_title}</span>
            <a
                id="loginFooter"
                href="#"
                on:click=move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    ctx.trigger(ModalTrigger::LoginFooter);
                }
            >
                "Login"
            </a>
        </footer>
    }
}
