use yew::prelude::*;
use web_sys::{File, HtmlInputElement};

/// Extensions offered by the file picker. The backend does its own checks.
pub const ACCEPTED_EXTENSIONS: &str = ".xls,.xlsx,.csv";

#[derive(Properties, PartialEq)]
pub struct ExcelUploaderProps {
    pub on_file_select: Callback<File>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ExcelUploader)]
pub fn excel_uploader(props: &ExcelUploaderProps) -> Html {
    let onchange = {
        let on_file_select = props.on_file_select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file_select.emit(file);
            }
            // Allow picking the same file again
            input.set_value("");
        })
    };

    html! {
        <div class="excel-uploader">
            <label class={classes!("btn", "btn-primary", props.disabled.then_some("disabled"))}>
                {"Select Excel File"}
                <input
                    type="file"
                    accept={ACCEPTED_EXTENSIONS}
                    class="hidden-input"
                    disabled={props.disabled}
                    {onchange}
                />
            </label>
        </div>
    }
}
