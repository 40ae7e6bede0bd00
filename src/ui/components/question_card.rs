use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::snapshot::SessionSnapshot;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Open,
    Correct,
    WrongPick,
    Inactive,
}

/// How option `value` should look given the snapshot.
pub fn option_state(snapshot: &SessionSnapshot, value: &str) -> OptionState {
    let Some(selected) = snapshot.selected_answer.as_deref() else {
        return OptionState::Open;
    };
    let is_answer = snapshot
        .question
        .as_ref()
        .is_some_and(|q| q.word == value);
    if is_answer {
        OptionState::Correct
    } else if selected == value {
        OptionState::WrongPick
    } else {
        OptionState::Inactive
    }
}

pub struct QuestionCard<'a> {
    snapshot: &'a SessionSnapshot,
    theme: &'a Theme,
}

impl<'a> QuestionCard<'a> {
    pub fn new(snapshot: &'a SessionSnapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }
}

impl Widget for QuestionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let Some(question) = self.snapshot.question.as_ref() else {
            return;
        };

        let title = format!(
            " Question {} of {} ",
            self.snapshot.position(),
            self.snapshot.question_count
        );
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let options = &self.snapshot.display_options;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(options.len() as u16),
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            question.question.as_str(),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(layout[0], buf);

        let lines: Vec<Line> = options
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let (marker, style) = match option_state(self.snapshot, value) {
                    OptionState::Open => (
                        " ",
                        Style::default().fg(colors.option_fg()).bg(colors.option_bg()),
                    ),
                    OptionState::Correct => (
                        "\u{2713}",
                        Style::default()
                            .fg(colors.option_correct())
                            .add_modifier(Modifier::BOLD),
                    ),
                    OptionState::WrongPick => (
                        "\u{2717}",
                        Style::default()
                            .fg(colors.option_incorrect())
                            .add_modifier(Modifier::BOLD),
                    ),
                    OptionState::Inactive => (" ", Style::default().fg(colors.text_muted())),
                };
                Line::from(Span::styled(format!(" {marker} [{}] {value} ", i + 1), style))
            })
            .collect();
        Paragraph::new(lines).render(layout[1], buf);
    }
}
