use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use crate::usecases::u101_ask_question::AskQuestionPage;
use crate::usecases::u102_upload_slides::UploadSlidesPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/students") view=AskQuestionPage />
                    <Route path=path!("/professors") view=UploadSlidesPage />
                </Routes>
            </Shell>
        </Router>
    }
}
