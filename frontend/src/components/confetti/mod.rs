//! Full-window confetti overlay shown with the winner card.
//!
//! Pieces are plain positioned spans animated by the `confetti-fall` keyframes
//! in `styles.css`. While `active` the animation loops. When it turns off, each
//! piece is given just enough iterations to finish the fall it is in, then
//! stays hidden.

use common::palette::random_color;
use js_sys::Date;
use rand::Rng;
use yew::prelude::*;

const PIECES: usize = 150;

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Keep recycling pieces.
    pub active: bool,
}

struct Piece {
    left_pct: f64,
    size_px: f64,
    delay_s: f64,
    duration_s: f64,
    spin_deg: f64,
    color: String,
}

pub struct Confetti {
    pieces: Vec<Piece>,
    /// Animations start on mount; milliseconds since the epoch.
    mounted_at: f64,
    /// Seconds of animation that had elapsed when recycling stopped.
    stopped_after_s: Option<f64>,
}

impl Component for Confetti {
    type Message = ();
    type Properties = ConfettiProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut rng = rand::thread_rng();
        let pieces = (0..PIECES)
            .map(|_| Piece {
                left_pct: rng.gen_range(0.0..100.0),
                size_px: rng.gen_range(6.0..12.0),
                delay_s: rng.gen_range(0.0..3.0),
                duration_s: rng.gen_range(2.5..5.0),
                spin_deg: rng.gen_range(180.0..720.0),
                color: random_color(&mut rng),
            })
            .collect();
        let mounted_at = Date::now();
        Self {
            pieces,
            mounted_at,
            stopped_after_s: (!ctx.props().active).then_some(0.0),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let active = ctx.props().active;
        if active == old_props.active {
            return false;
        }
        self.stopped_after_s = if active {
            None
        } else {
            Some((Date::now() - self.mounted_at) / 1000.0)
        };
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="confetti" aria-hidden="true">
                { for self.pieces.iter().map(|piece| {
                    let iterations = match self.stopped_after_s {
                        None => "infinite".to_string(),
                        Some(elapsed_s) => {
                            iterations_to_finish(elapsed_s, piece.delay_s, piece.duration_s).to_string()
                        }
                    };
                    let style = format!(
                        "left: {:.2}%; width: {:.1}px; height: {:.1}px; background: {}; \
                         animation-delay: {:.2}s; animation-duration: {:.2}s; \
                         animation-iteration-count: {}; --confetti-spin: {:.0}deg;",
                        piece.left_pct,
                        piece.size_px,
                        piece.size_px * 0.4,
                        piece.color,
                        piece.delay_s,
                        piece.duration_s,
                        iterations,
                        piece.spin_deg,
                    );
                    html! { <span class="confetti-piece" style={style} /> }
                }) }
            </div>
        }
    }
}

/// Number of falls a piece needs so that the one in progress at `elapsed_s`
/// completes instead of being cut off.
fn iterations_to_finish(elapsed_s: f64, delay_s: f64, duration_s: f64) -> u32 {
    if elapsed_s <= delay_s || duration_s <= 0.0 {
        return 1;
    }
    ((elapsed_s - delay_s) / duration_s).floor() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::iterations_to_finish;

    #[test]
    fn piece_mid_fall_finishes_its_current_fall() {
        // Third fall (2 complete) is in progress 1s in.
        assert_eq!(iterations_to_finish(1.0 + 2.0 * 4.0 + 1.0, 1.0, 4.0), 3);
        assert_eq!(iterations_to_finish(5.0, 1.0, 4.0), 2);
    }

    #[test]
    fn piece_not_started_falls_once() {
        assert_eq!(iterations_to_finish(0.5, 1.0, 4.0), 1);
        assert_eq!(iterations_to_finish(0.0, 0.0, 4.0), 1);
    }
}
