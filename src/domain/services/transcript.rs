#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Margin;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::ScrollbarState;
use ratatui::Frame;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::TextDirection;

/// Chat-style transcript with manual scrolling. Lines are rebuilt from the
/// message list on every draw; scroll position carries across frames and
/// sticks to the newest turn until the user scrolls away.
pub struct Transcript {
    list_length: u16,
    viewport_length: u16,
    stick_to_end: bool,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Default for Transcript {
    fn default() -> Transcript {
        return Transcript {
            list_length: 0,
            viewport_length: 0,
            stick_to_end: true,
            position: 0,
            scrollbar_state: ScrollbarState::default(),
        };
    }
}

fn author_style(message: &Message) -> Style {
    if message.message_type() == MessageType::Error {
        return Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    }

    match message.author {
        Author::User => return Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Author::Polyglot => return Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Author::Agent => return Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

impl Transcript {
    fn bottom(&self) -> u16 {
        return self.list_length.saturating_sub(self.viewport_length);
    }

    pub fn up(&mut self) {
        self.stick_to_end = false;
        self.position = self.position.saturating_sub(1);
    }

    pub fn up_page(&mut self) {
        for _ in 0..10 {
            self.up();
        }
    }

    pub fn down(&mut self) {
        self.position = self.position.saturating_add(1).clamp(0, self.bottom());
        if self.position == self.bottom() {
            self.stick_to_end = true;
        }
    }

    pub fn down_page(&mut self) {
        for _ in 0..10 {
            self.down();
        }
    }

    pub fn last(&mut self) {
        self.stick_to_end = true;
        self.position = self.bottom();
    }

    /// Builds the flat line list for a transcript viewport. Agent turns sit
    /// on the reading side, the user's answers on the opposite one. Hebrew
    /// flips both.
    fn build_lines(
        messages: &[Message],
        max_width: usize,
        direction: TextDirection,
    ) -> Vec<Line<'static>> {
        let mut agent_alignment = Alignment::Left;
        let mut user_alignment = Alignment::Right;
        if direction == TextDirection::Rtl {
            agent_alignment = Alignment::Right;
            user_alignment = Alignment::Left;
        }

        let mut lines: Vec<Line> = vec![];
        for message in messages {
            let mut alignment = agent_alignment;
            if message.author == Author::User {
                alignment = user_alignment;
            }

            lines.push(
                Line::from(Span::styled(
                    format!("{}:", message.author.to_string()),
                    author_style(message),
                ))
                .alignment(alignment),
            );
            for text_line in message.as_string_lines(max_width) {
                lines.push(Line::from(text_line).alignment(alignment));
            }
            lines.push(Line::from(" ".to_string()));
        }

        return lines;
    }

    pub fn render<B: Backend>(
        &mut self,
        frame: &mut Frame<B>,
        rect: Rect,
        messages: &[Message],
        direction: TextDirection,
    ) {
        let max_width = rect.width.saturating_sub(4).max(8) as usize;
        let lines = Transcript::build_lines(messages, max_width, direction);

        self.list_length = lines.len() as u16;
        self.viewport_length = rect.height;
        if self.stick_to_end {
            self.position = self.bottom();
        }
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(self.list_length)
            .viewport_content_length(self.viewport_length)
            .position(self.position);

        frame.render_widget(
            Paragraph::new(lines).scroll((self.position, 0)),
            rect,
        );
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            rect.inner(&Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut self.scrollbar_state,
        );
    }
}
