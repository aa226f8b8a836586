use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::theme;

pub struct HelpBar;

pub struct HelpBarProps {
    /// While searching, the keys go to the input instead
    pub searching: bool,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let key = Style::default().fg(theme::TETRA).bold();
        let label = Style::default().fg(theme::DI);

        let help = if props.searching {
            Line::from(vec![
                Span::styled(" ↑↓", key),
                Span::styled(" select  ", label),
                Span::styled("enter", key),
                Span::styled(" pick  ", label),
                Span::styled("esc", key),
                Span::styled(" close ", label),
            ])
        } else {
            Line::from(vec![
                Span::styled(" /", key),
                Span::styled(" search  ", label),
                Span::styled("u", key),
                Span::styled(" units  ", label),
                Span::styled("q", key),
                Span::styled(" quit ", label),
            ])
        };
        frame.render_widget(Paragraph::new(help.centered()), area);
    }
}
