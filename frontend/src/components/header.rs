use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-image"></i> {" Poster Generator"}</h1>
            <p class="subtitle">{"Upload a photo and turn it into a poster"}</p>
        </header>
    }
}
