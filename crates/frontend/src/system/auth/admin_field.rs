use contracts::system::auth::FormKind;
use leptos::prelude::*;

use crate::layout::page_context::PageContext;
use crate::shared::components::ui::Input;

/// Admin-name input, shown and required only while "admin" is selected.
#[component]
pub fn AdminNameField(form: FormKind, value: RwSignal<String>) -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");
    let (wrapper_id, input_id) = match form {
        FormKind::Login => ("adminNameField", "adminName"),
        FormKind::Register => ("regAdminNameField", "regAdminName"),
    };

    view! {
        <div id=wrapper_id style:display=move || ctx.admin_field(form).display()>
            <Input
                label="Admin Name"
                id=input_id
                name="adminName"
                value=value
                required=Signal::derive(move || ctx.admin_field(form).required)
            />
        </div>
    }
}
