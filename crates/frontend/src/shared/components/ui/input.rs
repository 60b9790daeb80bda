use leptos::prelude::*;

/// Labelled form input bound to a signal.
///
/// `name` is the field name the backend reads from the posted form.
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Element id, also used by the label's `for`
    id: &'static str,
    /// Posted field name
    name: &'static str,
    /// Two-way bound value
    value: RwSignal<String>,
    /// "text" (default), "password", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute, may be reactive
    #[prop(optional, into)]
    required: MaybeProp<bool>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let input_type = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                name=name
                type=input_type
                class="form-control"
                placeholder=move || placeholder.get().unwrap_or_default()
                required=move || required.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
