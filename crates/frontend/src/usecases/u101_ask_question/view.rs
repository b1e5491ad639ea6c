use super::api;
use super::state::ChatState;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::config::use_client_config;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_ask_question::AskQuestion;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Spinner, SpinnerSize};

const MAX_TEXTAREA_HEIGHT: i32 = 300;

/// Height for the input: its content height, capped
pub fn textarea_height(scroll_height: i32) -> i32 {
    scroll_height.clamp(0, MAX_TEXTAREA_HEIGHT)
}

#[derive(Clone, Copy)]
pub struct AskQuestionVm {
    pub state: RwSignal<ChatState>,
    pub draft: RwSignal<String>,
}

impl AskQuestionVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ChatState::default()),
            draft: RwSignal::new(String::new()),
        }
    }
}

#[component]
pub fn AskQuestionPage() -> impl IntoView {
    let vm = AskQuestionVm::new();
    let ask_url = use_client_config().url(AskQuestion::endpoint());
    let chat_area_ref = NodeRef::<leptos::html::Div>::new();
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Grow the textarea with its content
    Effect::new(move |_| {
        vm.draft.track();
        if let Some(textarea) = textarea_ref.get() {
            let style = web_sys::HtmlElement::style(&textarea);
            let _ = style.set_property("height", "auto");
            let height = textarea_height(textarea.scroll_height());
            let _ = style.set_property("height", &format!("{height}px"));
        }
    });

    // Keep the newest message in view
    Effect::new(move |_| {
        vm.state.track();
        if let Some(area) = chat_area_ref.get() {
            request_animation_frame(move || {
                area.set_scroll_top(area.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        let draft = vm.draft.get_untracked();
        let mut request = None;
        vm.state.update(|s| request = s.begin_send(&draft));
        let Some(request) = request else {
            return;
        };

        vm.draft.set(String::new());
        log::info!("{}: sending question", AskQuestion::full_name());

        let url = ask_url.clone();
        spawn_local(async move {
            let result = api::ask(&url, &request).await;
            if result.is_ok() {
                log::debug!("{}: answer received", AskQuestion::full_name());
            }
            vm.state.update(|s| s.complete(result));
        });
    });

    let send_disabled = Signal::derive(move || {
        let draft = vm.draft.get();
        !vm.state.with(|s| s.can_send(&draft))
    });

    view! {
        <div class="page page--chat">
            <div class="chat">
                <div node_ref=chat_area_ref class="chat__area">
                    <Show when=move || vm.state.with(|s| s.messages.is_empty())>
                        <div class="chat__empty"></div>
                    </Show>
                    <For
                        each=move || vm.state.with(|s| s.messages.clone())
                        key=|msg| msg.id.clone()
                        let:msg
                    >
                        <div class=if msg.is_user() { "chat__row chat__row--user" } else { "chat__row chat__row--bot" }>
                            <div class=if msg.is_user() { "chat__bubble chat__bubble--user" } else { "chat__bubble chat__bubble--bot" }>
                                <p class="chat__text">{msg.text.clone()}</p>
                            </div>
                        </div>
                    </For>
                    <Show when=move || vm.state.with(|s| s.is_loading)>
                        <div class="chat__row chat__row--bot">
                            <div class="chat__bubble chat__bubble--bot chat__bubble--thinking">
                                <Spinner size=SpinnerSize::Tiny />
                                <span>"Thinking..."</span>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="chat__input">
                    <div class="chat__input-field">
                        <Textarea
                            textarea_ref=textarea_ref
                            value=vm.draft
                            rows=1
                            placeholder="Ask anything about class"
                            class="chat__textarea"
                            on_input=move |value: String| vm.draft.set(value)
                            on_keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>
                    <Button
                        variant="outline"
                        size="icon"
                        class="chat__send"
                        aria_label="Send message"
                        disabled=send_disabled
                        on_click=move |_: leptos::ev::MouseEvent| handle_send.run(())
                    >
                        {icon("arrow-right")}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textarea_height_is_capped() {
        assert_eq!(textarea_height(44), 44);
        assert_eq!(textarea_height(300), 300);
        assert_eq!(textarea_height(1200), 300);
        assert_eq!(textarea_height(-1), 0);
    }
}
