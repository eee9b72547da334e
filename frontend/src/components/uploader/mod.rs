use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CsvUploaderProps {
    pub on_file: Callback<web_sys::File>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Size of the last accepted roster; the count is hidden while zero.
    #[prop_or_default]
    pub participant_count: usize,
}

/// Upload card: a drop-zone styled label over a hidden `.csv` file input.
pub struct CsvUploader;

impl Component for CsvUploader {
    type Message = ();
    type Properties = CsvUploaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CsvUploader
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_file = props.on_file.clone();
        let onchange = Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file.emit(file);
            }
            // Allows picking the same file again after editing it.
            input.set_value("");
        });

        html! {
            <div class="upload-card">
                <label for="csv-upload" class="upload-title">{"อัพโหลดไฟล์ CSV"}</label>
                <label for="csv-upload" class="drop-zone">
                    <i class="material-icons">{"upload"}</i>
                    <p>{"คลิกเพื่ออัพโหลดหรือลากและวาง"}</p>
                    <p class="hint">{"ไฟล์ CSV (ข้อมูลพนักงาน)"}</p>
                    <input id="csv-upload" type="file" accept=".csv" class="hidden" {onchange} />
                </label>

                {
                    if let Some(error) = &props.error {
                        html! { <p class="upload-error">{ error.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                {
                    if props.participant_count > 0 {
                        html! {
                            <>
                                <h2>{"จำนวนผู้เข้าร่วม"}</h2>
                                <p class="participant-count">{ format!("{} คน", props.participant_count) }</p>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
