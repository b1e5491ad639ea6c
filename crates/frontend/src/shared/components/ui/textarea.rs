use leptos::prelude::*;

/// Textarea bound to a signal, with optional keydown handling and a node ref for sizing
#[component]
pub fn Textarea(
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
    /// Keydown event handler
    #[prop(optional, into)]
    on_keydown: Option<Callback<web_sys::KeyboardEvent>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Reference to the underlying element
    #[prop(optional)]
    textarea_ref: NodeRef<leptos::html::Textarea>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <textarea
            node_ref=textarea_ref
            class=move || format!("form__textarea {}", additional_class())
            placeholder=textarea_placeholder
            disabled=move || disabled.get().unwrap_or(false)
            rows=rows.unwrap_or(3)
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
            on:keydown=move |ev| {
                if let Some(handler) = on_keydown {
                    handler.run(ev);
                }
            }
        ></textarea>
    }
}
