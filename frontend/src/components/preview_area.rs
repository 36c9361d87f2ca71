use super::super::Model;
use yew::prelude::*;

pub fn render_preview_area(model: &Model) -> Html {
    match &model.preview {
        Some(preview) => html! {
            <div id="previewContainer" class="preview-container">
                <img id="previewImage"
                    src={preview.data_url.clone()}
                    alt={preview.file_name.clone()} />
            </div>
        },
        None => html! {},
    }
}
