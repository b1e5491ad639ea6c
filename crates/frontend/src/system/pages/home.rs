use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_ask_question::AskQuestion;
use contracts::usecases::u102_upload_slides::UploadSlides;
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page: pick the student chat or the professor upload screen
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <nav class="home__links">
                <A
                    href="/students"
                    attr:class="button button--outline button--large home__link"
                    attr:title=AskQuestion::description()
                >
                    {AskQuestion::display_name()}
                </A>
                <A
                    href="/professors"
                    attr:class="button button--outline button--large home__link"
                    attr:title=UploadSlides::description()
                >
                    {UploadSlides::display_name()}
                </A>
            </nav>
        </div>
    }
}
