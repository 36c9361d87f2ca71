use crate::{Model, Msg};
use shared::{Preview, UploadView};
use yew::html::Scope;

/// A single rendering instruction from the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    Preview(Preview),
    HidePreview,
    Error(String),
    HideError,
    Submitting(bool),
    Result(String),
    HideResult,
}

/// Forwards controller output to the component as messages.
pub struct LinkView {
    link: Scope<Model>,
}

impl LinkView {
    pub fn new(link: Scope<Model>) -> Self {
        Self { link }
    }

    fn send(&self, update: ViewUpdate) {
        self.link.send_message(Msg::View(update));
    }
}

impl UploadView for LinkView {
    fn render_preview(&self, preview: Preview) {
        self.send(ViewUpdate::Preview(preview));
    }

    fn hide_preview(&self) {
        self.send(ViewUpdate::HidePreview);
    }

    fn show_error(&self, message: &str) {
        self.send(ViewUpdate::Error(message.to_string()));
    }

    fn hide_error(&self) {
        self.send(ViewUpdate::HideError);
    }

    fn set_submitting(&self, submitting: bool) {
        self.send(ViewUpdate::Submitting(submitting));
    }

    fn render_result(&self, image: &str) {
        self.send(ViewUpdate::Result(image.to_string()));
    }

    fn hide_result(&self) {
        self.send(ViewUpdate::HideResult);
    }
}
