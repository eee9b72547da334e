//! Lucky draw page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and helpers.
//!
//! The component owns one `RaffleSession` and connects it to the three
//! widgets on the page: the CSV uploader, the wheel and the confetti overlay.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RaffleProps;
pub use state::RaffleComponent;

impl Component for RaffleComponent {
    type Message = Msg;
    type Properties = RaffleProps;

    fn create(ctx: &Context<Self>) -> Self {
        RaffleComponent::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
