use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use taskpad_app::SlotStore;
use taskpad_core::Task;

use super::{Mode, Ui};

const INPUT_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 4;
const LIST_MIN_HEIGHT: u16 = 5;

impl<S: SlotStore> Ui<S> {
    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(LIST_MIN_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.draw_input(f, chunks[0]);
        self.draw_list(f, chunks[1]);
        self.draw_footer(f, chunks[2]);
    }

    fn draw_input(&self, f: &mut Frame<'_>, area: Rect) {
        let (title, value, active) = match self.mode {
            Mode::Normal => ("New task (press a)", self.session.draft(), false),
            Mode::Draft => ("New task", self.input.value(), true),
            Mode::Search => ("Search", self.input.value(), true),
            Mode::Edit(_) => ("Edit task", self.input.value(), true),
        };

        let style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let widget = Paragraph::new(value)
            .style(style)
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(widget, area);

        if active {
            let offset = u16::try_from(self.input.cursor_offset()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(1).saturating_add(offset);
            let y = area.y.saturating_add(1);
            f.set_cursor_position(Position::new(x, y));
        }
    }

    fn draw_list(&self, f: &mut Frame<'_>, area: Rect) {
        let view = self.session.page_view();

        let items = if view.items.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "no matching tasks",
                Style::default().fg(Color::DarkGray),
            )))]
        } else {
            view.items.iter().map(|task| self.list_item(task)).collect()
        };

        let mut title = format!("Tasks [{}]", self.session.filter());
        if !self.session.search().trim().is_empty() {
            title.push_str(&format!(" /{}", self.session.search().trim()));
        }

        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !view.items.is_empty() {
            state.select(Some(self.selected.min(view.items.len() - 1)));
        }
        f.render_stateful_widget(list, area, &mut state);
    }

    fn list_item(&self, task: &Task) -> ListItem<'static> {
        let checkbox = if task.completed { "[x] " } else { "[ ] " };

        if let Mode::Edit(editing) = self.mode
            && editing == task.id
        {
            let buffer = self
                .session
                .edit_text(task.id)
                .unwrap_or(task.text.as_str())
                .to_owned();
            return ListItem::new(Line::from(vec![
                Span::raw(checkbox),
                Span::styled(buffer, Style::default().fg(Color::Yellow)),
                Span::styled(" (editing)", Style::default().fg(Color::DarkGray)),
            ]));
        }

        let text_style = if task.completed {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        ListItem::new(Line::from(vec![
            Span::raw(checkbox),
            Span::styled(task.text.clone(), text_style),
        ]))
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let view = self.session.page_view();
        let status = format!(
            "page {}/{} | {} matching | {} total",
            view.page,
            view.total_pages,
            view.visible_len,
            self.session.tasks().len()
        );

        let message_line = self.message.as_ref().map_or_else(Line::default, |msg| {
            Line::from(Span::styled(msg.text.clone(), Style::default().fg(Color::Green)))
        });

        let hints = match self.mode {
            Mode::Normal => "a add | e edit | d delete | space toggle | / search | f filter | n/p page | q quit",
            Mode::Draft => "enter add | esc back",
            Mode::Search => "enter keep | esc clear",
            Mode::Edit(_) => "enter save | esc cancel",
        };

        let lines = vec![
            Line::from(status),
            message_line,
            Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        ];
        let widget = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
        f.render_widget(widget, area);
    }
}
