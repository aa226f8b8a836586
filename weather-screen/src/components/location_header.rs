use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use weather_api::Location;

use super::{Component, LOCATION_ICON};
use crate::action::Action;
use crate::state::format_coordinate;
use crate::theme;

pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub location: &'a Location,
}

impl LocationHeader {
    pub const HEIGHT: u16 = 2;
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let title = Line::from(vec![
            Span::raw(LOCATION_ICON),
            Span::styled(
                props.location.display_name(),
                Style::default().fg(theme::WHITE).bold(),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let coords = Line::from(Span::styled(
            format!(
                "{}, {}  {}",
                format_coordinate(props.location.lat),
                format_coordinate(props.location.lon),
                props.location.country
            ),
            Style::default().fg(theme::DI_LIGHT),
        ))
        .centered();
        frame.render_widget(Paragraph::new(coords), chunks[1]);
    }
}
