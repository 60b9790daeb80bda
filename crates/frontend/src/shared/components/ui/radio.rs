use contracts::system::auth::UserType;
use leptos::prelude::*;

/// `userType` radio pair. Grouping is per form, so both dialogs can use the
/// same `name` without interfering.
#[component]
pub fn RoleRadio(
    /// Prefix for the radio ids, e.g. "login" -> "loginUser" / "loginAdmin"
    id_prefix: &'static str,
    /// Current selection
    #[prop(into)]
    selected: Signal<UserType>,
    on_change: Callback<UserType>,
) -> impl IntoView {
    let option = move |user_type: UserType, label: &'static str| {
        let radio_id = match user_type {
            UserType::Standard => format!("{}User", id_prefix),
            UserType::Admin => format!("{}Admin", id_prefix),
        };
        let label_for = radio_id.clone();
        view! {
            <label class="radio-option" for=label_for>
                <input
                    id=radio_id
                    type="radio"
                    name="userType"
                    value=user_type.as_str()
                    prop:checked=move || selected.get() == user_type
                    on:change=move |ev| on_change.run(UserType::from_value(&event_target_value(&ev)))
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="form-group user-type">
            {option(UserType::Standard, "User")}
            {option(UserType::Admin, "Admin")}
        </div>
    }
}
