use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Tall,    // ≥24 rows: card, countdown bar and reveal panel stacked
    Compact, // <24 rows: reveal panel replaces the card while revealing
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.height >= 24 {
            LayoutTier::Tall
        } else {
            LayoutTier::Compact
        }
    }

    pub fn stack_reveal(&self) -> bool {
        *self == LayoutTier::Tall
    }
}

pub struct QuizLayout {
    pub header: Rect,
    pub card: Rect,
    pub countdown: Rect,
    pub reveal: Option<Rect>,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl QuizLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);
        let body = centered_columns(area, 90);

        if tier.stack_reveal() {
            let vertical = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(8),
                    Constraint::Length(3),
                    Constraint::Length(7),
                    Constraint::Length(1),
                ])
                .split(body);
            Self {
                header: vertical[0],
                card: vertical[1],
                countdown: vertical[2],
                reveal: Some(vertical[3]),
                footer: vertical[4],
                tier,
            }
        } else {
            let vertical = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(4),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ])
                .split(body);
            Self {
                header: vertical[0],
                card: vertical[1],
                countdown: vertical[2],
                reveal: None,
                footer: vertical[3],
                tier,
            }
        }
    }
}

/// Horizontally centre a column of at most `max_width` cells.
fn centered_columns(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let left = area.x + (area.width - width) / 2;
    Rect::new(left, area.y, width, area.height)
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 50;
    const MIN_POPUP_HEIGHT: u16 = 14;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
