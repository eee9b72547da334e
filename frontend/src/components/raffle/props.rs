use common::RaffleConfig;
use yew::prelude::*;

/// Properties for the `RaffleComponent`.
///
/// The configuration is read once from the host page by `App` and handed down
/// here. It is only consulted when the component is created; a later change
/// does not reset a running session.
#[derive(Properties, PartialEq, Clone)]
pub struct RaffleProps {
    #[prop_or_default]
    pub config: RaffleConfig,
}
