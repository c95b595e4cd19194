use overview::Overview;

mod api;
mod error;
mod filters;
mod list;
mod modal;
mod overview;
mod pagination;
mod state;
mod theme;
mod types;

fn main() {
    yew::Renderer::<Overview>::new().render();
}
