pub mod header;

use leptos::prelude::*;

/// Application shell: header on top, routed page below.
///
/// ```text
/// +------------------------------------------+
/// |  TA Chatbot                     (Header) |
/// +------------------------------------------+
/// |                                          |
/// |               page content               |
/// |                                          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
