//! View rendering for the raffle page.
//!
//! Top to bottom: title, winner card (with confetti), then a grid holding the
//! wheel, the upload card and, for variants that keep a log, the results table
//! with its export button. User-facing text is Thai.

use common::{Participant, SpinResult, Variant};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RaffleComponent;
use crate::components::confetti::Confetti;
use crate::components::uploader::CsvUploader;
use crate::components::wheel::Wheel;
use crate::layout_grid::LayoutGrid;

pub fn view(component: &RaffleComponent, ctx: &Context<RaffleComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="raffle-root">
            <h1 class="raffle-title">{"สุ่มกาช่าผู้โชคดี"}</h1>

            { build_winner_card(component) }

            <LayoutGrid columns={2}>
                { build_wheel(component, link) }
                <CsvUploader
                    on_file={link.callback(Msg::FileSelected)}
                    error={component.session.error().map(|e| AttrValue::from(e.to_string()))}
                    participant_count={component.session.participants().len()}
                />
                { build_results(component, link) }
            </LayoutGrid>
        </div>
    }
}

fn build_winner_card(component: &RaffleComponent) -> Html {
    let Some(winner) = component.session.selected() else {
        return html! {};
    };
    let variant = component.session.config().variant;

    html! {
        <div class="winner-card">
            <Confetti active={component.confetti_active} />
            <h2>{ format!("🎉 ผู้โชคดี: {} 🎉", winner.employee_id) }</h2>
            <p>{ format!("ชื่อพนักงาน : {}", winner.first_name) }</p>
            { department_line(variant, winner) }
            <p>{ format!("รหัส : {}", winner.employee_id) }</p>
        </div>
    }
}

fn department_line(variant: Variant, winner: &Participant) -> Html {
    match (variant, winner.department.as_deref()) {
        (Variant::Department, Some(department)) => html! {
            <p>{ format!("แผนก : {}", department) }</p>
        },
        _ => html! {},
    }
}

fn build_wheel(component: &RaffleComponent, link: &Scope<RaffleComponent>) -> Html {
    let session = &component.session;
    if session.available().is_empty() {
        return html! {};
    }

    html! {
        <div class="wheel-block">
            <Wheel
                key={session.wheel_key().to_string()}
                segments={session.segments()}
                colors={session.segment_colors().to_vec()}
                config={session.config().wheel.clone()}
                on_finished={link.callback(Msg::WheelFinished)}
            />
            <p class="remaining">
                { format!("เหลือผู้เข้าร่วม: {} คน", session.available().len()) }
            </p>
        </div>
    }
}

fn build_results(component: &RaffleComponent, link: &Scope<RaffleComponent>) -> Html {
    let results = component.session.results();
    if results.is_empty() {
        return html! {};
    }

    html! {
        <div class="results">
            <h2>{"ผลการสุ่ม"}</h2>
            <table class="results-table">
                <thead>
                    <tr>
                        <th>{"ครั้งที่"}</th>
                        <th>{"ชื่อพนักงาน"}</th>
                        <th>{"รหัส"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for results.iter().map(result_row) }
                </tbody>
            </table>

            <div class="export">
                <h2>{"ส่งออกผลการสุ่ม"}</h2>
                <button class="export-btn" onclick={link.callback(|_| Msg::Export)}>
                    <i class="material-icons">{"download"}</i>
                    {"Export to CSV"}
                </button>
            </div>
        </div>
    }
}

fn result_row(result: &SpinResult) -> Html {
    html! {
        <tr key={result.sequence.to_string()}>
            <td>{ result.sequence }</td>
            <td>{ result.participant.timestamp.clone() }</td>
            <td>{ result.participant.employee_id.clone() }</td>
        </tr>
    }
}
