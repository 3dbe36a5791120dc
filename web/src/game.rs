use crate::import::ImportPanel;
use crate::sheet;
use bitflags::bitflags;
use clap::Args;
use gloo::file::callbacks::FileReader;
use gloo::timers::callback::Timeout;
use std::time::Duration;
use web_time::Instant;
use witchpoison_core as game;
use yew::prelude::*;

const NOTIFICATION_DURATION: Duration = Duration::from_millis(2_000);
const FINAL_NOTIFICATION_DURATION: Duration = Duration::from_millis(3_000);

/// Slack added to timer delays so the tick never lands just short of a deadline.
const TIMER_SLACK: Duration = Duration::from_millis(1);

const fn notification_duration(notification: game::Notification) -> Duration {
    if notification.is_final() {
        FINAL_NOTIFICATION_DURATION
    } else {
        NOTIFICATION_DURATION
    }
}

fn timeout_millis(delay: Duration) -> u32 {
    delay.as_millis().try_into().unwrap_or(u32::MAX)
}

/// Cell size class, picked from how many words are on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum GridLayout {
    Huge,
    Large,
    Medium,
    Compact,
}

impl GridLayout {
    const fn for_word_count(count: usize) -> Self {
        match count {
            ..=4 => Self::Huge,
            5..=12 => Self::Large,
            13..=32 => Self::Medium,
            _ => Self::Compact,
        }
    }

    const fn class(self) -> &'static str {
        use GridLayout::*;
        match self {
            Huge => "layout-huge",
            Large => "layout-large",
            Medium => "layout-medium",
            Compact => "layout-compact",
        }
    }
}

const fn tone_class(tone: game::StatusTone) -> &'static str {
    use game::StatusTone::*;
    match tone {
        Prompt => "tone-prompt",
        Play => "tone-play",
        Final => "tone-final",
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq)]
    struct MouseButtons: u16 {
        const LEFT = 1;
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CellPointerState {
    index: game::CellIndex,
    buttons: MouseButtons,
}

impl CellPointerState {
    /// Cell being held down with the left button, drawn pressed until the
    /// click lands. Other buttons were already truncated away.
    fn held_index(self) -> Option<game::CellIndex> {
        (self.buttons == MouseButtons::LEFT).then_some(self.index)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CellMsg {
    Update(CellPointerState),
    Leave,
    Click(game::CellIndex),
}

pub(crate) enum Msg {
    CellEvent(CellMsg),
    EditWords(String),
    ImportText,
    ImportFile(web_sys::File),
    FileLoaded(Result<String, String>),
    SheetLoaded(Result<Vec<u8>, String>),
    Restart,
    Tick,
    DismissNotification(u32),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::CellIndex,
    word: AttrValue,
    cell_state: game::CellState,
    #[prop_or_default]
    highlighted: bool,
    #[prop_or_default]
    pressed: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CellMsg>,
}

#[function_component(WordCell)]
fn cell_component(props: &CellProps) -> Html {
    use game::CellState::*;

    let CellProps {
        index,
        word,
        cell_state,
        highlighted,
        pressed,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "word-cell",
        match cell_state {
            Unmarked => classes!(),
            RevealedPoison => classes!("poisoned"),
            Safe => classes!("safe"),
        }
    );
    if highlighted {
        class.push("selected-poison");
    }
    if pressed {
        class.push("pressed");
    }
    if locked {
        class.push("locked");
    }

    let onmousedown = {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            let buttons = MouseButtons::from_bits_truncate(e.buttons());
            callback.emit(CellMsg::Update(CellPointerState { index, buttons }));
            log::trace!("{} mouse down ({:?})", index, buttons);
        })
    };

    let onmouseup = {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            let buttons = MouseButtons::from_bits_truncate(e.buttons());
            callback.emit(CellMsg::Update(CellPointerState { index, buttons }));
            log::trace!("{} mouse up ({:?})", index, buttons);
        })
    };

    let onmouseenter = {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            let buttons = MouseButtons::from_bits_truncate(e.buttons());
            callback.emit(CellMsg::Update(CellPointerState { index, buttons }));
            log::trace!("{} mouse enter ({:?})", index, buttons);
        })
    };

    let onmouseleave = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            callback.emit(CellMsg::Leave);
            log::trace!("{} mouse leave", index);
        })
    };

    let onclick = Callback::from(move |_: MouseEvent| callback.emit(CellMsg::Click(index)));

    html! {
        <div {class} {onmousedown} {onmouseup} {onmouseenter} {onmouseleave} {onclick}>
            {word.to_string()}
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Preload a comma separated word list
    #[arg(short, long)]
    pub words: Option<String>,
}

pub(crate) struct GameView {
    game: game::PoisonGame,
    input_text: String,
    clock: Instant,
    notification: Option<(game::Notification, u32)>,
    notification_seq: u32,
    current_cell_state: Option<CellPointerState>,
    _file_reader: Option<FileReader>,
}

impl GameView {
    /// Reading of the monotonic clock the round's deadlines are measured on.
    fn now(&self) -> Duration {
        self.clock.elapsed()
    }

    fn import_words(&mut self, text: &str) -> bool {
        self.apply_import(game::WordList::parse(text).map_err(|err| err.to_string()))
    }

    fn apply_import(&mut self, words: Result<game::WordList, String>) -> bool {
        match words {
            Ok(words) => {
                log::info!("imported {} words", words.len());
                self.input_text = words.to_lines();
                self.game.load_words(words);
                true
            }
            Err(err) => {
                log::warn!("import rejected: {}", err);
                gloo::dialogs::alert(&err);
                false
            }
        }
    }

    fn read_file(&mut self, ctx: &Context<Self>, file: web_sys::File) {
        let is_spreadsheet = sheet::is_spreadsheet(&file.name(), &file.type_());
        let file = gloo::file::File::from(file);
        let link = ctx.link().clone();
        let reader = if is_spreadsheet {
            gloo::file::callbacks::read_as_bytes(&file, move |result| {
                link.send_message(Msg::SheetLoaded(result.map_err(|err| err.to_string())));
            })
        } else {
            gloo::file::callbacks::read_as_text(&file, move |result| {
                link.send_message(Msg::FileLoaded(result.map_err(|err| err.to_string())));
            })
        };
        self._file_reader = Some(reader);
    }

    fn read_failed(&mut self, err: &str) -> bool {
        self._file_reader = None;
        log::error!("failed to read word file: {}", err);
        gloo::dialogs::alert(&format!("Could not read the file: {err}"));
        false
    }

    fn select_cell(&mut self, ctx: &Context<Self>, index: game::CellIndex) -> bool {
        let now = self.now();
        match self.game.select(index, now) {
            Ok(outcome) => {
                log::debug!("select {}: {:?}", index, outcome);
                if let Some(notification) = outcome.notification() {
                    self.show_notification(ctx, notification);
                }
                if matches!(outcome, game::SelectOutcome::PoisonHidden(_)) {
                    self.schedule_tick(ctx);
                }
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("select {} failed: {}", index, err);
                false
            }
        }
    }

    /// One-shot timer for the pending transition. A tick that finds nothing
    /// due is a no-op, so timers are never cancelled.
    fn schedule_tick(&self, ctx: &Context<Self>) {
        if let Some(pending) = self.game.pending() {
            let delay = pending.remaining(self.now()) + TIMER_SLACK;
            let link = ctx.link().clone();
            Timeout::new(timeout_millis(delay), move || link.send_message(Msg::Tick)).forget();
        }
    }

    fn show_notification(&mut self, ctx: &Context<Self>, notification: game::Notification) {
        log::info!("{}", notification);
        self.notification_seq = self.notification_seq.wrapping_add(1);
        let seq = self.notification_seq;
        self.notification = Some((notification, seq));

        let link = ctx.link().clone();
        Timeout::new(
            timeout_millis(notification_duration(notification)),
            move || link.send_message(Msg::DismissNotification(seq)),
        )
        .forget();
    }

    fn is_pressed(&self, index: game::CellIndex) -> bool {
        self.current_cell_state
            .and_then(CellPointerState::held_index)
            == Some(index)
            && self.game.can_select(index)
    }

    fn view_notification(&self) -> Html {
        let Some((notification, _)) = self.notification else {
            return html! {};
        };

        html! {
            <div class={classes!("notification", notification.is_final().then_some("final"))}>
                <span class="skull">{"☠"}</span>
                <strong>{notification.title()}</strong>
                <span>{notification.detail()}</span>
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut view = Self {
            game: game::PoisonGame::new(),
            input_text: String::new(),
            clock: Instant::now(),
            notification: None,
            notification_seq: 0,
            current_cell_state: None,
            _file_reader: None,
        };

        if let Some(words) = &ctx.props().words {
            match game::WordList::parse(words) {
                Ok(words) => {
                    view.input_text = words.to_lines();
                    view.game.load_words(words);
                }
                Err(err) => log::warn!("ignoring preloaded words: {}", err),
            }
        }

        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use CellMsg::*;
        use Msg::*;

        match msg {
            CellEvent(Leave) => {
                log::trace!("cell leave");
                self.current_cell_state.take().is_some()
            }
            CellEvent(Update(cell_state)) => {
                if cell_state.buttons.is_empty() {
                    self.current_cell_state.take().is_some()
                } else {
                    self.current_cell_state.replace(cell_state) != Some(cell_state)
                }
            }
            CellEvent(Click(index)) => {
                self.current_cell_state = None;
                self.select_cell(ctx, index)
            }
            EditWords(text) => {
                self.input_text = text;
                false
            }
            ImportText => {
                if self.input_text.trim().is_empty() {
                    gloo::dialogs::alert("Please enter some words or choose a file!");
                    return false;
                }
                let text = self.input_text.clone();
                self.import_words(&text)
            }
            ImportFile(file) => {
                self.read_file(ctx, file);
                false
            }
            FileLoaded(Ok(text)) => {
                self._file_reader = None;
                self.import_words(&text)
            }
            FileLoaded(Err(err)) => self.read_failed(&err),
            SheetLoaded(Ok(bytes)) => {
                self._file_reader = None;
                self.apply_import(sheet::words_from_workbook(bytes).map_err(|err| err.to_string()))
            }
            SheetLoaded(Err(err)) => self.read_failed(&err),
            Restart => self.game.restart(),
            Tick => {
                let now = self.now();
                let updated = self.game.tick(now);
                if !updated {
                    self.schedule_tick(ctx);
                }
                updated
            }
            DismissNotification(seq) => match self.notification {
                Some((_, shown)) if shown == seq => {
                    self.notification = None;
                    true
                }
                _ => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let status = self.game.status();
        let layout = GridLayout::for_word_count(self.game.cell_count());
        let cell_callback = ctx.link().callback(Msg::CellEvent);

        html! {
            <div class="witchpoison" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <header>
                    <h1>{"The Witch's Poison"}</h1>
                </header>
                <ImportPanel
                    text={AttrValue::from(self.input_text.clone())}
                    can_restart={self.game.has_words()}
                    on_input={ctx.link().callback(Msg::EditWords)}
                    on_import={ctx.link().callback(|_| Msg::ImportText)}
                    on_file={ctx.link().callback(Msg::ImportFile)}
                    on_restart={ctx.link().callback(|_| Msg::Restart)}
                />
                <p class={classes!("game-status", tone_class(status.tone()))}>{status.to_string()}</p>
                <div class={classes!("word-grid", layout.class())}>
                    {
                        for self.game.cells().map(|cell| {
                            let pressed = self.is_pressed(cell.index);
                            let locked = !self.game.can_select(cell.index);
                            html! {
                                <WordCell
                                    key={cell.index}
                                    index={cell.index}
                                    word={AttrValue::from(cell.word.to_string())}
                                    cell_state={cell.state}
                                    highlighted={cell.highlighted}
                                    {pressed}
                                    {locked}
                                    callback={cell_callback.clone()}
                                />
                            }
                        })
                    }
                </div>
                { self.view_notification() }
            </div>
        }
    }
}
