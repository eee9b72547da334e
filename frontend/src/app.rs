use common::RaffleConfig;
use gloo_console::warn;
use yew::{html, Component, Context, Html};

use crate::components::raffle::RaffleComponent;

/// Id of the optional `<script type="application/json">` block in `index.html`.
const CONFIG_ELEMENT_ID: &str = "raffle-config";

pub struct App {
    config: RaffleConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: load_config(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <RaffleComponent config={self.config.clone()} />
        }
    }
}

/// Reads the page's configuration block, falling back to defaults when it is
/// missing, empty or invalid.
fn load_config() -> RaffleConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty());

    let Some(text) = text else {
        return RaffleConfig::default();
    };

    match RaffleConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            warn!(format!("{}, using defaults", err));
            RaffleConfig::default()
        }
    }
}
