mod api;
mod components;
mod view;

use api::GlooPosterClient;
use components::handlers;
use components::header::render_header;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::upload_section::{render_submit_button, render_upload_section};
use components::utils::render_error_message;
use shared::{Preview, UploadController};
use view::{LinkView, ViewUpdate};
use web_sys::{DragEvent, SubmitEvent};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // File operations
    FileChosen(Option<web_sys::File>),
    HandleDrop(DragEvent),
    SetDragging(bool),

    // Poster generation
    Submit(SubmitEvent),

    // Rendering requested by the controller
    View(ViewUpdate),
}

// Main component
pub struct Model {
    controller: UploadController<LinkView, GlooPosterClient>,
    file_name: Option<String>,
    preview: Option<Preview>,
    error: Option<String>,
    submitting: bool,
    result_image: Option<String>,
    is_dragging: bool,
    result_ref: NodeRef,
    scroll_to_result: bool,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let view = LinkView::new(ctx.link().clone());

        Self {
            controller: UploadController::new(view, GlooPosterClient::default()),
            file_name: None,
            preview: None,
            error: None,
            submitting: false,
            result_image: None,
            is_dragging: false,
            result_ref: NodeRef::default(),
            scroll_to_result: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::HandleDrop(event) => handlers::handle_drop(self, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            Msg::Submit(event) => handlers::handle_submit(self, event),

            Msg::View(update) => handlers::apply_view_update(self, update),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    <form id="uploadForm" onsubmit={ctx.link().callback(Msg::Submit)}>
                        { render_upload_section(self, ctx) }
                        { render_preview_area(self) }
                        { render_error_message(self) }
                        { render_submit_button(self) }
                    </form>
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Poster Generator | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.scroll_to_result) {
            handlers::scroll_into_view(&self.result_ref);
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
