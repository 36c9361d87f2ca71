use super::super::Model;
use super::utils::first_file;
use crate::api::BrowserImage;
use crate::view::ViewUpdate;
use shared::ImageFile;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, SubmitEvent};
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, file: Option<web_sys::File>) -> bool {
    let Some(file) = file else {
        model.file_name = None;
        model.controller.clear_selection();
        return true;
    };

    let image = BrowserImage::from(file);
    model.file_name = Some(image.name());

    let controller = model.controller.clone();
    spawn_local(async move {
        if let Err(err) = controller.select_file(image).await {
            log::debug!("selection rejected: {}", err);
        }
    });

    true
}

pub fn handle_drop(model: &mut Model, event: DragEvent) -> bool {
    event.prevent_default();
    event.stop_propagation();
    model.is_dragging = false;

    let file = first_file(event.data_transfer().and_then(|data_transfer| data_transfer.files()));
    if file.is_some() {
        handle_file_chosen(model, file);
    }

    true
}

pub fn handle_submit(model: &mut Model, event: SubmitEvent) -> bool {
    event.prevent_default();

    if model.submitting {
        log::debug!("submit ignored while generating");
        return false;
    }

    let controller = model.controller.clone();
    spawn_local(async move {
        match controller.submit().await {
            Ok(_) => log::info!("poster ready"),
            Err(err) => log::debug!("submit ended without a poster: {:?}", err),
        }
    });

    false
}

pub fn apply_view_update(model: &mut Model, update: ViewUpdate) -> bool {
    match update {
        ViewUpdate::Preview(preview) => model.preview = Some(preview),
        ViewUpdate::HidePreview => {
            model.preview = None;
            model.file_name = None;
        }
        ViewUpdate::Error(message) => model.error = Some(message),
        ViewUpdate::HideError => model.error = None,
        ViewUpdate::Submitting(submitting) => model.submitting = submitting,
        ViewUpdate::Result(image) => {
            model.result_image = Some(image);
            model.scroll_to_result = true;
        }
        ViewUpdate::HideResult => model.result_image = None,
    }

    true
}

pub fn scroll_into_view(target: &NodeRef) {
    if let Some(element) = target.cast::<Element>() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
