//! Spinning prize wheel.
//!
//! The wheel picks the winner itself: a click plans a spin with
//! `common::wheel::plan_spin`, animates the disc to the planned rotation with a
//! CSS transition, and once the animation time has passed reports the label of
//! the segment under the pointer through `on_finished`.
//!
//! The parent remounts the wheel (through `key`) whenever the pool changes, so
//! `segments` are stable for the lifetime of one instance.

use common::wheel::{plan_spin, segment_at, segment_shape};
use common::WheelConfig;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    /// Segment labels, clockwise from 12 o'clock.
    pub segments: Vec<String>,
    /// One fill colour per segment. Missing entries fall back to the primary colour.
    pub colors: Vec<String>,
    #[prop_or_default]
    pub config: WheelConfig,
    pub on_finished: Callback<String>,
}

pub enum Msg {
    Spin,
    Settled,
}

pub struct Wheel {
    rotation: f64,
    spinning: bool,
}

impl Component for Wheel {
    type Message = Msg;
    type Properties = WheelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            rotation: 0.0,
            spinning: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Spin => {
                if self.spinning {
                    return false;
                }
                let mut rng = rand::thread_rng();
                let Some(plan) = plan_spin(
                    props.segments.len(),
                    self.rotation,
                    props.config.turns,
                    &mut rng,
                ) else {
                    return false;
                };

                self.rotation = plan.rotation;
                self.spinning = true;

                let link = ctx.link().clone();
                let duration = props.config.spin_duration_ms;
                spawn_local(async move {
                    TimeoutFuture::new(duration).await;
                    link.send_message(Msg::Settled);
                });
                true
            }
            Msg::Settled => {
                self.spinning = false;
                let index = segment_at(self.rotation, props.segments.len());
                if let Some(label) = index.and_then(|index| props.segments.get(index)) {
                    props.on_finished.emit(label.clone());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let config = &props.config;
        let size = config.size.max(1);
        let radius = f64::from(size) / 2.0;
        let count = props.segments.len();
        let font_size = label_font_size(radius, count);

        let disc_style = format!(
            "width: {size}px; height: {size}px; transform: rotate({:.3}deg); transition: transform {}ms cubic-bezier(0.15, 0.6, 0.2, 1);",
            self.rotation, config.spin_duration_ms,
        );
        let hub_style = format!(
            "background: {}; color: {}; font-family: {};",
            config.primary_color, config.contrast_color, config.font_family,
        );
        let pointer_style = format!("border-top-color: {};", config.primary_color);

        let segments = props.segments.iter().enumerate().map(|(index, label)| {
            let shape = segment_shape(index, count, radius);
            let fill = props
                .colors
                .get(index)
                .cloned()
                .unwrap_or_else(|| config.primary_color.clone());
            let transform = format!(
                "rotate({:.3} {:.3} {:.3})",
                shape.label_rotation, shape.label_x, shape.label_y
            );
            html! {
                <g key={index.to_string()}>
                    <path d={shape.path} fill={fill} stroke={config.contrast_color.clone()} stroke-width="1" />
                    <text
                        x={format!("{:.3}", shape.label_x)}
                        y={format!("{:.3}", shape.label_y)}
                        transform={transform}
                        fill={config.contrast_color.clone()}
                        font-family={config.font_family.clone()}
                        font-size={format!("{:.1}", font_size)}
                        text-anchor="middle"
                        dominant-baseline="middle"
                    >
                        { label.clone() }
                    </text>
                </g>
            }
        });

        html! {
            <div class="wheel" style={format!("width: {size}px; height: {size}px;")}>
                <div class="wheel-pointer" style={pointer_style} />
                <div class="wheel-disc" style={disc_style}>
                    <svg
                        width={size.to_string()}
                        height={size.to_string()}
                        viewBox={format!("0 0 {size} {size}")}
                    >
                        { for segments }
                    </svg>
                </div>
                <button
                    class="wheel-hub"
                    style={hub_style}
                    disabled={self.spinning}
                    onclick={ctx.link().callback(|_| Msg::Spin)}
                >
                    { config.button_text.clone() }
                </button>
            </div>
        }
    }
}

/// Shrinks labels as segments get thinner.
fn label_font_size(radius: f64, count: usize) -> f64 {
    if count == 0 {
        return 16.0;
    }
    let arc_at_label = std::f64::consts::TAU * radius * 0.62 / count as f64;
    (arc_at_label * 0.6).clamp(6.0, 16.0)
}
