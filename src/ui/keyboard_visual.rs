//! Visual keyboard layout rendering

use super::theme::ThemeColors;
use crate::keyboard::keymap::{
    key_label, SECTION_ARROWS, SECTION_MAIN, SECTION_NAV, SECTION_NUMPAD,
};
use crate::keyboard::KeyStateSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

/// Rows the visual occupies
pub const KEYBOARD_HEIGHT: u16 = 6;

const GAP: u16 = 1;

/// Columns a key occupies, wide enough for its label
fn key_width(code: &str) -> u16 {
    let base = match code {
        "Backspace" | "ShiftRight" => 10,
        "Enter" | "ShiftLeft" => 9,
        "CapsLock" => 7,
        "Tab" => 6,
        "Space" => 24,
        "ControlLeft" | "ControlRight" => 5,
        _ => 4,
    };
    base.max(key_label(code).chars().count() as u16 + 2)
}

fn rows_width(rows: &[&[&str]]) -> u16 {
    rows.iter()
        .map(|row| row.iter().map(|c| key_width(c) + GAP).sum::<u16>())
        .max()
        .unwrap_or(0)
}

/// Visual representation of a keyboard
pub struct KeyboardVisual<'a> {
    key_state: &'a KeyStateSnapshot,
    colors: ThemeColors,
}

impl<'a> KeyboardVisual<'a> {
    pub fn new(key_state: &'a KeyStateSnapshot, colors: ThemeColors) -> Self {
        Self { key_state, colors }
    }

    fn key_style(&self, code: &str) -> Style {
        if self.key_state.is_active(code) {
            Style::default()
                .fg(self.colors.key_text_on)
                .bg(self.colors.key_on)
                .add_modifier(Modifier::BOLD)
        } else if self.key_state.is_tested(code) {
            Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.key_tested)
        } else {
            Style::default()
                .fg(self.colors.key_text)
                .bg(self.colors.key_off)
        }
    }

    fn render_key(&self, buf: &mut Buffer, area: Rect, x: u16, y: u16, code: &str) -> u16 {
        let w = key_width(code);
        if y < area.bottom() && x + w <= area.right() {
            let label = format!("{:^w$}", key_label(code), w = w as usize);
            buf.set_string(x, y, label, self.key_style(code));
        }
        w + GAP
    }

    fn render_rows(&self, buf: &mut Buffer, area: Rect, x0: u16, y0: u16, rows: &[&[&str]]) {
        for (dy, row) in rows.iter().enumerate() {
            let mut x = x0;
            for code in row.iter() {
                x += self.render_key(buf, area, x, y0 + dy as u16, code);
            }
        }
    }
}

impl<'a> Widget for KeyboardVisual<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let main_w = rows_width(SECTION_MAIN);
        if area.width < main_w || area.height < KEYBOARD_HEIGHT {
            buf.set_string(
                area.x,
                area.y,
                "⌨ Window too small",
                Style::default().fg(self.colors.key_text),
            );
            return;
        }

        self.render_rows(buf, area, area.x, area.y, SECTION_MAIN);

        // Navigation cluster on top, arrows at the bottom
        let nav_x = area.x + main_w + GAP;
        let nav_w = rows_width(SECTION_NAV);
        if nav_x + nav_w <= area.right() {
            self.render_rows(buf, area, nav_x, area.y, SECTION_NAV);
            let arrows_x = nav_x + key_width("ArrowLeft") + GAP;
            let arrows_y = area.y + KEYBOARD_HEIGHT - SECTION_ARROWS.len() as u16;
            self.render_rows(buf, area, arrows_x, arrows_y, &SECTION_ARROWS[..1]);
            self.render_rows(buf, area, nav_x, arrows_y + 1, &SECTION_ARROWS[1..]);

            let pad_x = nav_x + nav_w + GAP;
            if pad_x + rows_width(SECTION_NUMPAD) <= area.right() {
                self.render_rows(buf, area, pad_x, area.y + 1, SECTION_NUMPAD);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KeyEventTracker;
    use crate::keyboard::KeyCode;

    fn render(state: &KeyStateSnapshot, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, KEYBOARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        KeyboardVisual::new(state, ThemeColors::dark()).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn narrow_area_shows_notice() {
        let buf = render(&KeyStateSnapshot::default(), 30);
        assert!(row_text(&buf, 0).contains("too small"));
    }

    #[test]
    fn main_block_labels_render() {
        let buf = render(&KeyStateSnapshot::default(), 200);
        assert!(row_text(&buf, 0).contains("ESC"));
        assert!(row_text(&buf, 2).contains(" Q "));
        assert!(row_text(&buf, 5).contains("Ctrl"));
    }

    #[test]
    fn numpad_rendered_when_wide() {
        let buf = render(&KeyStateSnapshot::default(), 200);
        assert!(row_text(&buf, 1).contains("Num"));
        let narrow = render(&KeyStateSnapshot::default(), rows_width(SECTION_MAIN));
        assert!(!row_text(&narrow, 1).contains("Num"));
    }

    #[test]
    fn held_key_uses_active_color() {
        let mut tracker = KeyEventTracker::new();
        tracker.on_key_down(&KeyCode::from("Escape"), false);
        let buf = render(&tracker.snapshot(), 200);
        assert_eq!(buf[(0, 0)].bg, ThemeColors::dark().key_on);
    }

    #[test]
    fn tested_key_uses_tested_color() {
        let mut tracker = KeyEventTracker::new();
        tracker.on_key_down(&KeyCode::from("Escape"), false);
        tracker.on_key_up(&KeyCode::from("Escape"));
        let buf = render(&tracker.snapshot(), 200);
        assert_eq!(buf[(0, 0)].bg, ThemeColors::dark().key_tested);
        assert_eq!(buf[(0, 1)].bg, ThemeColors::dark().key_off);
    }
}
