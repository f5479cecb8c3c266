//! Terminal UI for browsing and editing the task list.

mod input;
mod ui;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::subscriber::NoSubscriber;

use taskpad_app::{Session, SlotStore};
use taskpad_core::id::TaskId;
use taskpad_store::JsonSlot;

use input::TextInput;

const TICK_RATE_MS: u64 = 200;
const MESSAGE_TTL_SECS: u64 = 4;

/// Launch the interactive TUI.
pub fn run(session: Session<JsonSlot>) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Silence tracing while the terminal is ours; log lines would tear
    // the screen.
    let result =
        tracing::subscriber::with_default(NoSubscriber::default(), || run_event_loop(&mut terminal, session));

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: Session<JsonSlot>,
) -> Result<()> {
    let mut ui = Ui::new(session);

    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    loop {
        terminal.draw(|f| ui.draw(f))?;
        if ui.should_quit {
            break;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();
        if event::poll(timeout)? {
            if let CrosstermEvent::Key(key) = event::read()? {
                ui.handle_key(key);
            }
            // Resize and other events are picked up by the next draw.
        }

        if last_tick.elapsed() >= tick_rate {
            ui.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Input mode of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
    /// Browsing the list.
    Normal,
    /// Typing the text of a new task.
    Draft,
    /// Typing the search query; the view narrows on every keystroke.
    Search,
    /// Editing the text of one task in place.
    Edit(TaskId),
}

/// UI state shared between the event loop and rendering.
pub(super) struct Ui<S: SlotStore> {
    pub(super) session: Session<S>,
    pub(super) mode: Mode,
    /// Selection index within the current page.
    pub(super) selected: usize,
    pub(super) input: TextInput,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
}

impl<S: SlotStore> Ui<S> {
    pub(super) fn new(session: Session<S>) -> Self {
        Self {
            session,
            mode: Mode::Normal,
            selected: 0,
            input: TextInput::new(),
            message: None,
            should_quit: false,
        }
    }

    fn page_len(&self) -> usize {
        self.session.page_view().items.len()
    }

    /// Id of the task under the selection cursor, if any.
    pub(super) fn selected_id(&self) -> Option<TaskId> {
        self.session
            .page_view()
            .items
            .get(self.selected)
            .map(|task| task.id)
    }

    fn clamp_selection(&mut self) {
        let len = self.page_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(key.code),
            Mode::Draft => self.handle_draft_key(key.code),
            Mode::Search => self.handle_search_key(key.code),
            Mode::Edit(id) => self.handle_edit_key(key.code, id),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.page_len();
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('a') => {
                self.input = TextInput::with_value(self.session.draft());
                self.mode = Mode::Draft;
            }
            KeyCode::Char('/') => {
                self.input = TextInput::with_value(self.session.search());
                self.mode = Mode::Search;
            }
            KeyCode::Char('f') => {
                self.session.cycle_filter();
                self.selected = 0;
            }
            KeyCode::Char('c') => {
                self.session.set_search("");
                self.selected = 0;
            }
            KeyCode::Char('n') | KeyCode::Right => {
                self.session.next_page();
                self.selected = 0;
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.session.prev_page();
                self.selected = 0;
            }
            KeyCode::Char(' ') | KeyCode::Char('t') => {
                if let Some(id) = self.selected_id() {
                    self.session.toggle(id);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    let text = self
                        .session
                        .get(id)
                        .map(|task| task.text.clone())
                        .unwrap_or_default();
                    self.session.delete(id);
                    self.clamp_selection();
                    self.info(format!("deleted: {text}"));
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id()
                    && self.session.begin_edit(id)
                {
                    let seeded = self.session.edit_text(id).unwrap_or_default().to_owned();
                    self.input = TextInput::with_value(seeded);
                    self.mode = Mode::Edit(id);
                }
            }
            _ => {}
        }
    }

    fn handle_draft_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => {
                // Blank drafts are silently rejected and stay put.
                if let Some(id) = self.session.submit_draft() {
                    let text = self
                        .session
                        .get(id)
                        .map(|task| task.text.clone())
                        .unwrap_or_default();
                    self.input.clear();
                    self.mode = Mode::Normal;
                    self.info(format!("added: {text}"));
                }
            }
            other => {
                if self.apply_text_key(other) {
                    let draft = self.input.value().to_owned();
                    self.session.set_draft(draft);
                }
            }
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Esc => {
                self.session.set_search("");
                self.selected = 0;
                self.mode = Mode::Normal;
            }
            other => {
                if self.apply_text_key(other) {
                    let query = self.input.value().to_owned();
                    self.session.set_search(query);
                    self.selected = 0;
                }
            }
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode, id: TaskId) {
        match code {
            KeyCode::Esc => {
                self.session.cancel_edit(id);
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                // A blank buffer keeps the session open, silently.
                if self.session.save_edit(id) {
                    self.mode = Mode::Normal;
                    self.info("saved");
                }
            }
            other => {
                if self.apply_text_key(other) {
                    let buffer = self.input.value().to_owned();
                    self.session.update_edit_text(id, buffer);
                }
            }
        }
    }

    /// Apply a movement or editing key to the shared text input.
    /// Returns `true` when the input value may have changed.
    fn apply_text_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(ch) => {
                self.input.insert(ch);
                true
            }
            KeyCode::Backspace => {
                self.input.backspace();
                true
            }
            KeyCode::Left => {
                self.input.move_left();
                false
            }
            KeyCode::Right => {
                self.input.move_right();
                false
            }
            KeyCode::Home => {
                self.input.move_home();
                false
            }
            KeyCode::End => {
                self.input.move_end();
                false
            }
            _ => false,
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

/// Transient status line content.
pub(super) struct Message {
    pub(super) text: String,
    created_at: Instant,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
