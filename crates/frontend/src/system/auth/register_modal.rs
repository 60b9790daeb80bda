use contracts::system::auth::{FormKind, RegisterForm, UserType};
use leptos::ev;
use leptos::prelude::*;

use super::admin_field::AdminNameField;
use crate::layout::page_context::PageContext;
use crate::page::ModalTrigger;
use crate::shared::components::ui::{Input, RoleRadio};
use crate::shared::modal_frame::ModalFrame;

#[component]
pub fn RegisterModal() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");
    let action = ctx.config.with_value(|c| c.register_action.clone());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let admin_name = RwSignal::new(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        let form = RegisterForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            user_type: ctx.user_type(FormKind::Register),
            admin_name: admin_name.get_untracked(),
        };
        if !ctx.guard_register(&form) {
            ev.prevent_default();
        }
    };

    let switch_link = move |id: &'static str, trigger: ModalTrigger, text: &'static str| {
        view! {
            <a
                id=id
                href="#"
                on:click=move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    ctx.trigger(trigger);
                }
            >
                {text}
            </a>
        }
    };

    view! {
        <ModalFrame
            id="registerModal"
            title="Register"
            visible=Signal::derive(move || ctx.modal_visible(FormKind::Register))
            on_backdrop=Callback::new(move |_| ctx.trigger(ModalTrigger::Backdrop))
            on_close=Callback::new(move |_| ctx.trigger(ModalTrigger::CloseButton))
        >
            <form action=action method="post" on:submit=on_submit>
                <RoleRadio
                    id_prefix="reg"
                    selected=Signal::derive(move || ctx.user_type(FormKind::Register))
                    on_change=Callback::new(move |user_type: UserType| {
                        ctx.select_user_type(FormKind::Register, user_type)
                    })
                />
                <Input
                    label="Username"
                    id="regUsername"
                    name="username"
                    value=username
                    placeholder="Choose a username"
                    required=true
                />
                <Input
                    label="Email"
                    id="regEmail"
                    name="email"
                    value=email
                    input_type="email"
                    placeholder="you@example.com"
                    required=true
                />
                <Input
                    label="Password"
                    id="regPassword"
                    name="password"
                    value=password
                    input_type="password"
                    required=true
                />
                <AdminNameField form=FormKind::Register value=admin_name />
                <button type="submit" class="btn btn-primary">"Register"</button>
            </form>
            <p class="modal-switch">
                "Already have an account? "
                {switch_link("showLogin", ModalTrigger::ShowLogin, "Login here")}
            </p>
            <p class="modal-switch">
                {switch_link("backToLogin", ModalTrigger::BackToLogin, "Back to login")}
            </p>
        </ModalFrame>
    }
}
