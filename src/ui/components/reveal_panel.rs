use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::snapshot::SessionSnapshot;
use crate::ui::highlight::split_highlight;
use crate::ui::theme::Theme;

/// Verdict, meaning and example shown once the current question is answered.
pub struct RevealPanel<'a> {
    snapshot: &'a SessionSnapshot,
    theme: &'a Theme,
}

impl<'a> RevealPanel<'a> {
    pub fn new(snapshot: &'a SessionSnapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }
}

impl Widget for RevealPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (Some(question), Some(correct)) =
            (self.snapshot.question.as_ref(), self.snapshot.is_correct)
        else {
            return;
        };

        let timed_out = self
            .snapshot
            .answers
            .last()
            .is_some_and(|a| a.question_index == self.snapshot.current_index && a.timed_out);
        let (verdict, verdict_color) = match (correct, timed_out) {
            (_, true) => ("Time's up", colors.warning()),
            (true, false) => ("Correct!", colors.success()),
            (false, false) => ("Not quite", colors.error()),
        };

        let block = Block::bordered()
            .title(format!(" {verdict} "))
            .border_style(Style::default().fg(verdict_color))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    question.word.as_str(),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" \u{2014} ", Style::default().fg(colors.text_muted())),
                Span::styled(question.meaning.as_str(), Style::default().fg(colors.fg())),
            ]),
            Line::from(""),
        ];

        if !question.example.is_empty() {
            let spans: Vec<Span> = split_highlight(&question.example, &question.word)
                .into_iter()
                .map(|segment| {
                    let style = if segment.highlighted {
                        Style::default()
                            .fg(colors.highlight())
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    } else {
                        Style::default()
                            .fg(colors.fg())
                            .add_modifier(Modifier::ITALIC)
                    };
                    Span::styled(segment.text, style)
                })
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
