use leptos::prelude::*;

/// Button component with variants (primary, outline) and sizes (md, lg, icon)
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "outline"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "lg" or "icon"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Accessible label, for icon-only buttons
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional, into)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "outline" => "button--outline",
        _ => "button--primary",
    };

    let size_class = move || match size.get().as_deref() {
        Some("lg") => "button--large",
        Some("icon") => "button--icon",
        _ => "",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {} {}", variant_class(), size_class(), additional_class())
            aria-label=move || aria_label.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
