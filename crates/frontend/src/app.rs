use crate::routes::routes::AppRoutes;
use crate::shared::config::provide_client_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Backend URL, course id and upload encoding for every screen
    provide_client_config();

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
