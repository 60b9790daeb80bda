use contracts::system::auth::{FormKind, LoginForm, UserType};
use leptos::ev;
use leptos::prelude::*;

use super::admin_field::AdminNameField;
use crate::layout::page_context::PageContext;
use crate::page::ModalTrigger;
use crate::shared::components::ui::{Input, RoleRadio};
use crate::shared::modal_frame::ModalFrame;

#[component]
pub fn LoginModal() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");
    let action = ctx.config.with_value(|c| c.login_action.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let admin_name = RwSignal::new(String::new());

    // Cancelling is the only intervention; a valid form posts normally.
    let on_submit = move |ev: ev::SubmitEvent| {
        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            user_type: ctx.user_type(FormKind::Login),
            admin_name: admin_name.get_untracked(),
        };
        if !ctx.guard_login(&form) {
            ev.prevent_default();
        }
    };

    view! {
        <ModalFrame
            id="loginModal"
            title="Login"
            visible=Signal::derive(move || ctx.modal_visible(FormKind::Login))
            on_backdrop=Callback::new(move |_| ctx.trigger(ModalTrigger::Backdrop))
            on_close=Callback::new(move |_| ctx.trigger(ModalTrigger::CloseButton))
        >
            <form action=action method="post" on:submit=on_submit>
                <RoleRadio
                    id_prefix="login"
                    selected=Signal::derive(move || ctx.user_type(FormKind::Login))
                    on_change=Callback::new(move |user_type: UserType| {
                        ctx.select_user_type(FormKind::Login, user_type)
                    })
                />
                <Input
                    label="Username"
                    id="loginUsername"
                    name="username"
                    value=username
                    placeholder="Enter your username"
                    required=true
                />
                <Input
                    label="Password"
                    id="loginPassword"
                    name="password"
                    value=password
                    input_type="password"
                    required=true
                />
                <AdminNameField form=FormKind::Login value=admin_name />
                <button type="submit" class="btn btn-primary">"Login"</button>
            </form>
            <p class="modal-switch">
                "Don't have an account? "
                <a
                    id="showRegister"
                    href="#"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        ctx.trigger(ModalTrigger::ShowRegister);
                    }
                >
                    "Register here"
                </a>
            </p>
        </ModalFrame>
    }
}
