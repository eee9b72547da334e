#[derive(Clone)]
pub enum Msg {
    FileSelected(web_sys::File),
    FileLoaded { name: String, text: String },
    FileReadFailed(String),
    WheelFinished(String),
    /// Carries the confetti generation it was scheduled for.
    StopConfetti(u32),
    Export,
}
