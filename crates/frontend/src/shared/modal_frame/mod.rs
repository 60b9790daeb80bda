use leptos::ev;
use leptos::prelude::*;

/// Dimmed modal container with a dialog surface.
///
/// The container stays mounted while hidden so half-filled forms survive
/// closing and reopening. Clicks whose target is the container itself (the
/// backdrop) request a close; clicks inside the dialog do not.
#[component]
pub fn ModalFrame(
    /// Container id, e.g. "loginModal"
    id: &'static str,
    /// Dialog heading
    title: &'static str,
    #[prop(into)]
    visible: Signal<bool>,
    /// Called on backdrop click.
    on_backdrop: Callback<()>,
    /// Called by the `.close` control.
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let is_direct_backdrop_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_backdrop_click = move |ev: ev::MouseEvent| {
        if is_direct_backdrop_event(&ev) {
            on_backdrop.run(());
        }
    };

    view! {
        <div
            id=id
            class="modal"
            style:display=move || if visible.get() { "flex" } else { "none" }
            on:click=handle_backdrop_click
        >
            <div class="modal-content">
                <span class="close" on:click=move |_| on_close.run(())>
                    "\u{00d7}"
                </span>
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}
