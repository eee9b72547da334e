//! Update function for the raffle component.
//!
//! Elm-style: takes the current `RaffleComponent`, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Uploads: file -> text (async) -> `RaffleSession::load_csv`.
//! - Wheel callback: declares the winner and starts the confetti timer.
//! - Export: results log -> CSV -> browser download.

use gloo_console::{error, log, warn};
use gloo_file::futures::read_as_text;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::helpers::{show_toast, trigger_download};
use super::messages::Msg;
use super::state::RaffleComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` from async tasks.
/// - Returns `true` to re-render the view, `false` when only side effects occur.
pub fn update(component: &mut RaffleComponent, ctx: &Context<RaffleComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FileSelected(file) => {
            let name = file.name();
            let link = ctx.link().clone();
            spawn_local(async move {
                let file = gloo_file::File::from(file);
                match read_as_text(&file).await {
                    Ok(text) => link.send_message(Msg::FileLoaded { name, text }),
                    Err(err) => link.send_message(Msg::FileReadFailed(err.to_string())),
                }
            });
            false
        }
        Msg::FileLoaded { name, text } => {
            let mut rng = rand::thread_rng();
            match component.session.load_csv(&text, &mut rng) {
                Ok(summary) => {
                    log!(format!("{}: {} participants loaded", name, summary.loaded));
                    if !summary.skipped.is_empty() {
                        warn!(format!("{}: skipped lines {:?}", name, summary.skipped));
                        show_toast(&format!(
                            "ข้ามแถวที่ข้อมูลไม่ครบ {} แถว",
                            summary.skipped.len()
                        ));
                    }
                }
                Err(err) => error!(format!("{}: upload rejected: {}", name, err)),
            }
            true
        }
        Msg::FileReadFailed(reason) => {
            error!(format!("file read failed: {}", reason));
            component
                .session
                .record_read_error(format!("Could not read file: {}", reason));
            true
        }
        Msg::WheelFinished(employee_id) => {
            let mut rng = rand::thread_rng();
            let Some(winner) = component.session.declare_winner(&employee_id, &mut rng) else {
                warn!(format!("wheel reported unknown segment {}", employee_id));
                return false;
            };
            log!(format!("winner: {} ({})", winner.employee_id, winner.first_name));

            component.confetti_active = true;
            component.confetti_generation = component.confetti_generation.wrapping_add(1);
            let generation = component.confetti_generation;
            let confetti_ms = component.session.config().confetti_ms;
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(confetti_ms).await;
                link.send_message(Msg::StopConfetti(generation));
            });
            true
        }
        Msg::StopConfetti(generation) => {
            if generation != component.confetti_generation {
                return false;
            }
            component.confetti_active = false;
            true
        }
        Msg::Export => {
            let file_name = component.session.config().export_file_name.clone();
            match component.session.export_csv() {
                Ok(Some(csv)) => match trigger_download(&file_name, &csv) {
                    Ok(()) => log!(format!(
                        "exported {} results to {}",
                        component.session.results().len(),
                        file_name
                    )),
                    Err(err) => {
                        error!("download failed", err);
                        show_toast("ดาวน์โหลดไฟล์ไม่สำเร็จ");
                    }
                },
                Ok(None) => {}
                Err(err) => {
                    error!(format!("export failed: {}", err));
                    show_toast("ส่งออกผลการสุ่มไม่สำเร็จ");
                }
            }
            false
        }
    }
}
