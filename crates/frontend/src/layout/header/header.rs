use leptos::ev;
use leptos::prelude::*;

use crate::layout::page_context::PageContext;
use crate::page::{ModalTrigger, PageId};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");
    let site_title = ctx.config.with_value(|c| c.site_title.clone());
    let sections = ctx.config.with_value(|c| c.pages.clone());

    view! {
        <header class="navbar">
            <a class="logo" href="#">{site_title}</a>
            <nav>
                <ul class="nav-links">
                    {sections
                        .into_iter()
                        .map(|section| {
                            let page = PageId::new(section.id);
                            let href = page.href();
                            let on_click = {
                                let href = href.clone();
                                move |ev: ev::MouseEvent| {
                                    ev.prevent_default();
                                    ctx.nav_click(&href);
                                }
                            };
                            view! {
                                <li>
                                    <a
                                        class="nav-link"
                                        class:active=move || ctx.is_page_active(&page)
                                        href=href
                                        on:click=on_click
                                    >
                                        {section.title}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <button
                id="loginBtn"
                class="btn btn-login"
                on:click=move |_| ctx.trigger(ModalTrigger::LoginButton)
            >
                "Login"
            </button>
        </header>
    }
}
