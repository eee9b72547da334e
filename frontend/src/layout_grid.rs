use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct LayoutGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Responsive grid around the page widgets. Collapses to one column on narrow
/// screens through the `layout-grid` class.
pub struct LayoutGrid;

impl Component for LayoutGrid {
    type Message = ();
    type Properties = LayoutGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LayoutGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!("--grid-columns: {};", props.columns);

        html! {
            <div class="layout-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
