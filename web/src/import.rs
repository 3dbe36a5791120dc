use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Accepted by the file picker. Workbooks are read from their first sheet,
/// everything else as plain text.
const ACCEPTED_FILES: &str = ".txt,.csv,.xlsx,.xls,text/plain";

#[derive(Properties, PartialEq)]
pub(crate) struct ImportProps {
    pub text: AttrValue,
    pub can_restart: bool,
    pub on_input: Callback<String>,
    pub on_import: Callback<()>,
    pub on_file: Callback<web_sys::File>,
    pub on_restart: Callback<()>,
}

/// Word entry box with the import, file and restart controls.
#[function_component]
pub(crate) fn ImportPanel(props: &ImportProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(area.value());
        })
    };

    let onchange = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                log::debug!("file chosen: {}", file.name());
                on_file.emit(file);
            }
            // allow picking the same file again
            input.set_value("");
        })
    };

    let on_import = props.on_import.reform(|_: MouseEvent| ());
    let on_restart = props.on_restart.reform(|_: MouseEvent| ());

    html! {
        <section class="import">
            <textarea
                id="word-input"
                placeholder="One word per line, or separated by commas"
                value={props.text.clone()}
                {oninput}
            />
            <div class="controls">
                <button class="import-btn" onclick={on_import}>{"Import words"}</button>
                <label class="file-btn">
                    {"Open file"}
                    <input type="file" accept={ACCEPTED_FILES} {onchange}/>
                </label>
                <button
                    class={classes!("restart-btn", (!props.can_restart).then_some("btn-disabled"))}
                    disabled={!props.can_restart}
                    onclick={on_restart}
                >
                    {"Restart"}
                </button>
            </div>
        </section>
    }
}
