//! Typing exercise panel

use super::theme::ThemeColors;
use crate::typing::TypingSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Renders the prompt with per-character highlighting plus the speed figure
pub struct TypingPanel<'a> {
    session: &'a TypingSession,
    colors: ThemeColors,
}

impl<'a> TypingPanel<'a> {
    pub fn new(session: &'a TypingSession, colors: ThemeColors) -> Self {
        Self { session, colors }
    }

    fn header(&self) -> Line<'static> {
        let speed = Span::styled(
            format!(" Speed: {} WPM ", self.session.live_wpm()),
            Style::default()
                .fg(self.colors.accent)
                .add_modifier(Modifier::BOLD),
        );
        let state = if self.session.is_finished() {
            Span::styled(
                " Complete · Enter to try again ",
                Style::default().fg(self.colors.green),
            )
        } else {
            Span::styled(" type... ", Style::default().fg(self.colors.dim))
        };
        Line::from(vec![speed, state])
    }

    fn prompt(&self) -> Line<'static> {
        let spans: Vec<Span> = self
            .session
            .classifications()
            .into_iter()
            .map(|(c, class)| {
                let (fg, bg) = self.colors.char_colors(class);
                let mut style = Style::default().fg(fg);
                if let Some(bg) = bg {
                    style = style.bg(bg);
                }
                Span::styled(c.to_string(), style)
            })
            .collect();
        Line::from(spans)
    }
}

impl<'a> Widget for TypingPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.header())
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.colors.dim));

        Paragraph::new(vec![Line::default(), self.prompt()])
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::Corpus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session_for(target: &str) -> TypingSession {
        let corpus = Corpus::new([target]).unwrap();
        TypingSession::new(corpus, &mut StdRng::seed_from_u64(0))
    }

    fn render(session: &TypingSession) -> Buffer {
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        TypingPanel::new(session, ThemeColors::dark()).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn prompt_and_cursor_rendered() {
        let mut session = session_for("hello");
        session.on_input("hx");
        let buf = render(&session);
        let colors = ThemeColors::dark();

        assert!(row_text(&buf, 2).contains("hello"));
        assert_eq!(buf[(1, 2)].fg, colors.typed);
        assert_eq!(buf[(2, 2)].fg, colors.red);
        assert_eq!(buf[(3, 2)].bg, colors.cursor);
        assert_eq!(buf[(4, 2)].fg, colors.untyped);
    }

    #[test]
    fn header_shows_completion() {
        let mut session = session_for("ok");
        session.on_input("ok");
        let buf = render(&session);
        assert!(row_text(&buf, 0).contains("Complete"));
    }
}
