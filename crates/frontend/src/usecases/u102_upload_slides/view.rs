use super::api;
use super::state::UploadState;
use crate::shared::components::ui::Button;
use crate::shared::config::use_client_config;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_upload_slides::UploadSlides;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Spinner, SpinnerSize};
use wasm_bindgen::JsCast;
use web_sys::File;

/// `web_sys::File` is not `Send`, so the state lives in local storage
#[derive(Clone, Copy)]
pub struct UploadSlidesVm {
    pub state: RwSignal<UploadState<File>, LocalStorage>,
}

impl UploadSlidesVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new_local(UploadState::default()),
        }
    }
}

#[component]
pub fn UploadSlidesPage() -> impl IntoView {
    let vm = UploadSlidesVm::new();
    let config = use_client_config();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(list) = input.files() {
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    vm.state.update(|s| s.add_file(file));
                }
            }
        }
        // Reset so the same file can be picked again
        input.set_value("");
    };

    let open_file_picker = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let handle_send = move |_: leptos::ev::MouseEvent| {
        let mut batch = None;
        vm.state.update(|s| batch = s.begin_send());
        let Some(files) = batch else {
            return;
        };

        let config = config.clone();
        spawn_local(async move {
            let result = api::upload_slides(&config, &files).await;
            if result.is_ok() {
                log::info!("{}: upload accepted", UploadSlides::full_name());
            }
            vm.state.update(|s| s.complete(result));
        });
    };

    let is_loading = Signal::derive(move || vm.state.with(|s| s.is_loading));

    view! {
        <div class="page page--centered">
            <div class="upload">
                <Show when=move || vm.state.with(|s| !s.files.is_empty())>
                    <div class="upload__files">
                        {move || {
                            vm.state
                                .with(|s| s.file_names())
                                .into_iter()
                                .map(|name| view! {
                                    <div class="upload__file">
                                        {icon("document")}
                                        <span>{name}</span>
                                    </div>
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <Button size="lg" class="upload__button" on_click=open_file_picker>
                    {icon("upload")}
                    " Upload File"
                </Button>

                <Button size="lg" class="upload__button" disabled=is_loading on_click=handle_send>
                    {move || {
                        if is_loading.get() {
                            view! {
                                <Spinner size=SpinnerSize::Tiny />
                                " Sending..."
                            }
                                .into_any()
                        } else {
                            view! { "Send" }.into_any()
                        }
                    }}
                </Button>

                {move || {
                    vm.state
                        .with(|s| s.status)
                        .map(|status| {
                            let class = if status.is_error() {
                                "upload__status upload__status--error"
                            } else {
                                "upload__status upload__status--success"
                            };
                            view! { <div class=class>{status.message()}</div> }
                        })
                }}

                <input
                    node_ref=file_input_ref
                    type="file"
                    accept="*/*"
                    multiple=true
                    class="hidden"
                    on:change=on_file_change
                />
            </div>
        </div>
    }
}
