use super::super::Model;
use yew::prelude::*;

/// File name offered to the browser for the download link.
const DOWNLOAD_NAME: &str = "poster.png";

pub fn render_results(model: &Model) -> Html {
    if let Some(image) = &model.result_image {
        html! {
            <section id="posterPreviewSection" class="poster-preview-section show" ref={model.result_ref.clone()}>
                <h2><i class="fa-solid fa-star"></i>{" Your Poster"}</h2>
                <img id="posterPreviewImage" src={image.clone()} alt="Generated poster" />
                <a id="downloadBtn" class="download-btn" href={image.clone()} download={DOWNLOAD_NAME}>
                    <i class="fa-solid fa-download"></i>{" Download Poster"}
                </a>
            </section>
        }
    } else {
        html! {}
    }
}
