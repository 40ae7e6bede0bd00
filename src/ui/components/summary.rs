use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::result::QuizSummary;
use crate::ui::theme::Theme;

pub struct SummaryDashboard<'a> {
    pub summary: &'a QuizSummary,
    pub theme: &'a Theme,
}

impl<'a> SummaryDashboard<'a> {
    pub fn new(summary: &'a QuizSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for SummaryDashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Quiz Complete ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            "Results",
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        title.render(layout[0], buf);

        let score_color = if self.summary.accuracy >= 80.0 {
            colors.success()
        } else if self.summary.accuracy >= 50.0 {
            colors.warning()
        } else {
            colors.error()
        };
        let score_text = format!("{}/{}", self.summary.score, self.summary.total);
        let pct_text = format!("  ({:.0}%)", self.summary.accuracy);
        let score_line = Line::from(vec![
            Span::styled("  Score:    ", Style::default().fg(colors.fg())),
            Span::styled(
                &*score_text,
                Style::default().fg(score_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(&*pct_text, Style::default().fg(colors.text_muted())),
        ]);
        Paragraph::new(score_line).render(layout[1], buf);

        let detail = format!(
            "{} answered, {} timed out, {} skipped",
            self.summary.answered, self.summary.timed_out, self.summary.skipped
        );
        let detail_line = Line::from(vec![
            Span::styled("  Answers:  ", Style::default().fg(colors.fg())),
            Span::styled(&*detail, Style::default().fg(colors.text_muted())),
        ]);
        Paragraph::new(detail_line).render(layout[2], buf);

        let mut missed_lines = Vec::new();
        if self.summary.missed.is_empty() {
            if self.summary.total > 0 {
                missed_lines.push(Line::from(Span::styled(
                    "  No missed words.",
                    Style::default().fg(colors.success()),
                )));
            }
        } else {
            missed_lines.push(Line::from(Span::styled(
                "  Review:",
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )));
            for missed in &self.summary.missed {
                let picked = match &missed.answered {
                    Some(value) => format!(" (you chose {value})"),
                    None => " (skipped)".to_string(),
                };
                missed_lines.push(Line::from(vec![
                    Span::styled(
                        format!("    {}", missed.word),
                        Style::default().fg(colors.accent()),
                    ),
                    Span::styled(picked, Style::default().fg(colors.error())),
                    Span::styled(
                        format!("  {}", missed.meaning),
                        Style::default().fg(colors.text_muted()),
                    ),
                ]));
            }
        }
        Paragraph::new(missed_lines)
            .wrap(Wrap { trim: false })
            .render(layout[3], buf);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("  [r] Restart  ", Style::default().fg(colors.accent())),
            Span::styled("[q] Quit", Style::default().fg(colors.accent())),
        ]));
        help.render(layout[4], buf);
    }
}
