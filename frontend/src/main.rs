use crate::app::App;

mod app;
mod components;
mod layout_grid;

fn main() {
    yew::Renderer::<App>::new().render();
}
