//! Custom TUI widgets

use super::theme::ThemeColors;
use crate::keyboard::KeyStateSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// One-line summary under the keyboard: tested count and last code
pub struct TesterStats<'a> {
    key_state: &'a KeyStateSnapshot,
    colors: ThemeColors,
}

impl<'a> TesterStats<'a> {
    pub fn new(key_state: &'a KeyStateSnapshot, colors: ThemeColors) -> Self {
        Self { key_state, colors }
    }
}

impl<'a> Widget for TesterStats<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = Style::default().fg(self.colors.dim).add_modifier(Modifier::BOLD);
        let value = Style::default().fg(self.colors.accent);
        let last = self
            .key_state
            .last_key
            .as_ref()
            .map(|k| k.as_str())
            .unwrap_or("...");

        let line = Line::from(vec![
            Span::styled(" PRESSED ", label),
            Span::styled(self.key_state.tested.len().to_string(), value),
            Span::styled("  │  HELD ", label),
            Span::styled(self.key_state.active.len().to_string(), value),
            Span::styled("  │  MAX ", label),
            Span::styled(self.key_state.max_rollover.to_string(), value),
            Span::styled("  │  CODE ", label),
            Span::styled(
                last.to_string(),
                Style::default().fg(self.colors.fg).add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Widget for the help screen
pub struct HelpPanel;

impl Widget for HelpPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Help - KeiX")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        let help_text = [
            "",
            " NAVIGATION",
            " -----------",
            " Tab / Shift+Tab  : Switch between views",
            " F1               : Show this help",
            " Ctrl+Q / Ctrl+C  : Quit application",
            "",
            " SWITCH TESTER",
            " -----------",
            " any key          : Highlight held and tested keys",
            " Ctrl+R           : Reset tested keys",
            " Ctrl+X           : Release all held keys",
            "",
            " SPEED TYPE",
            " -----------",
            " type             : Reproduce the passage exactly",
            " Backspace        : Delete last character",
            " Enter            : New passage once complete",
            " Ctrl+R           : New passage at any time",
        ];

        for (i, line) in help_text.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let style = if line.contains("---") {
                Style::default().fg(Color::DarkGray)
            } else if line.len() > 1 && line[1..].chars().all(|c| c.is_uppercase() || c == ' ') {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            buf.set_string(inner.x, inner.y + i as u16, line, style);
        }
    }
}

/// Status bar widget
pub struct StatusBar<'a> {
    view: &'a str,
    elapsed: &'a str,
    events: u64,
    message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(view: &'a str, elapsed: &'a str, events: u64) -> Self {
        Self {
            view,
            elapsed,
            events,
            message: None,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        buf.set_style(area, bg_style);

        let left = format!(" {} ", self.view);
        buf.set_string(area.x, area.y, &left, bg_style.add_modifier(Modifier::BOLD));

        if let Some(msg) = self.message {
            let msg_style = bg_style.fg(Color::Yellow);
            let msg_len = msg.chars().count() as u16;
            let msg_x = area.x + (area.width / 2).saturating_sub(msg_len / 2);
            buf.set_string(msg_x, area.y, msg, msg_style);
        }

        let right = format!(" {} | Events: {} ", self.elapsed, self.events);
        let right_x = area.x + area.width.saturating_sub(right.len() as u16);
        buf.set_string(right_x, area.y, &right, bg_style);
    }
}

/// Tab bar widget
pub struct TabBar<'a> {
    tabs: &'a [&'a str],
    selected: usize,
    colors: ThemeColors,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a [&'a str], selected: usize, colors: ThemeColors) -> Self {
        Self {
            tabs,
            selected,
            colors,
        }
    }
}

impl<'a> Widget for TabBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let title = Style::default()
            .fg(self.colors.accent)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);
        let (mut x, _) = buf.set_stringn(area.x, area.y, " KeiX ", area.width as usize, title);

        for (i, tab) in self.tabs.iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::White)
                    .bg(self.colors.key_on)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            };

            let label = format!(" {} ", tab);
            let width = label.chars().count() as u16;
            if x + width > area.right() {
                break;
            }
            buf.set_string(x, area.y, &label, style);
            x += width + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{KeyCode, KeyEventTracker};

    fn row_text(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn tester_stats_placeholder_without_last_key() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        let state = KeyStateSnapshot::default();
        TesterStats::new(&state, ThemeColors::dark()).render(area, &mut buf);
        assert!(row_text(&buf).contains("CODE ..."));
    }

    #[test]
    fn tester_stats_shows_counts() {
        let mut tracker = KeyEventTracker::new();
        tracker.on_key_down(&KeyCode::from("KeyA"), false);
        tracker.on_key_down(&KeyCode::from("KeyB"), false);
        tracker.on_key_up(&KeyCode::from("KeyA"));

        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        let state = tracker.snapshot();
        TesterStats::new(&state, ThemeColors::dark()).render(area, &mut buf);
        let text = row_text(&buf);
        assert!(text.contains("PRESSED 2"));
        assert!(text.contains("HELD 1"));
        assert!(text.contains("CODE KeyB"));
    }

    #[test]
    fn tab_bar_highlights_selected() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        let colors = ThemeColors::dark();
        TabBar::new(&["One", "Two"], 1, colors).render(area, &mut buf);
        let text = row_text(&buf);
        let two_x = text.find("Two").unwrap() as u16;
        assert_eq!(buf[(two_x, 0)].bg, colors.key_on);
    }

    #[test]
    fn status_bar_shows_message() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new("Speed Type", "00:05", 3)
            .message(Some("Complete! 40 WPM"))
            .render(area, &mut buf);
        let text = row_text(&buf);
        assert!(text.contains("Speed Type"));
        assert!(text.contains("Complete! 40 WPM"));
        assert!(text.contains("Events: 3"));
    }

    #[test]
    fn help_lists_ctrl_bindings() {
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        HelpPanel.render(area, &mut buf);
        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        for binding in ["Tab / Shift+Tab", "F1", "Ctrl+Q / Ctrl+C", "Ctrl+R", "Ctrl+X"] {
            assert!(text.contains(binding), "missing {}", binding);
        }
        assert!(!text.contains(" Esc "));
    }
}
