use super::super::Model;
use super::super::Msg;
use super::utils::first_file;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            { render_file_input_area(model, ctx) }
            { render_file_name(model) }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = first_file(input.files());

        // Lets the same file be picked again after a rejection.
        input.set_value("");

        Msg::FileChosen(file)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <>
            <input
                type="file"
                id="imageInput"
                name="image"
                accept="image/png,image/jpeg,image/jpg,image/gif"
                style="display: none;"
                onchange={handle_change}
            />

            <label
                for="imageInput"
                class={classes!("file-label", model.is_dragging.then_some("drag-over"))}
                ondragenter={handle_drag_over.clone()}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
            >
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{"Click to choose an image or drag & drop it here"}</p>
                <p class="file-types">{"Supported formats: PNG, JPG, JPEG, GIF (max 10MB)"}</p>
            </label>
        </>
    }
}

fn render_file_name(model: &Model) -> Html {
    if let Some(name) = &model.file_name {
        html! { <p id="fileName" class="file-name show">{ format!("Selected: {}", name) }</p> }
    } else {
        html! {}
    }
}

pub fn render_submit_button(model: &Model) -> Html {
    html! {
        <>
            <button type="submit" id="submitBtn" class="generate-btn" disabled={model.submitting}>
                {
                    if model.submitting {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i><span class="btn-text">{" Generating..."}</span></> }
                    } else {
                        html! { <><i class="fa-solid fa-wand-magic-sparkles"></i><span class="btn-text">{" Generate Poster"}</span></> }
                    }
                }
            </button>
            {
                if model.submitting {
                    html! {
                        <div id="loadingIndicator" class="loading-indicator">
                            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                            <p>{"Creating your poster..."}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
