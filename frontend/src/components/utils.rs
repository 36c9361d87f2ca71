use super::super::Model;
use web_sys::FileList;
use yew::prelude::*;

// Only the first file of a multi-file pick or drop is used.
pub fn first_file(file_list: Option<FileList>) -> Option<web_sys::File> {
    file_list.and_then(|files| files.get(0))
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div id="errorMessage" class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
