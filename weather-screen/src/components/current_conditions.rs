use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use weather_api::{icon_bucket, UnitSystem, WeatherSnapshot};

use super::Component;
use crate::action::Action;
use crate::sprites::{self, SpriteSize};
use crate::theme;

/// Shown in place of any value the screen does not have
pub const PLACEHOLDER: &str = "--";

pub struct CurrentConditions;

pub struct CurrentConditionsProps<'a> {
    pub weather: Option<&'a WeatherSnapshot>,
    pub units: UnitSystem,
    pub terminal_size: (u16, u16),
}

impl CurrentConditions {
    /// Temperature, label, gap, stats
    const TEXT_ROWS: u16 = 4;
}

fn stat(icon: &'static str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::raw(icon),
        Span::styled(value, Style::default().fg(theme::TRI)),
    ]
}

impl Component<Action> for CurrentConditions {
    type Props<'a> = CurrentConditionsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let current = props.weather.map(|w| &w.current);
        let condition = current.and_then(|c| c.condition());

        let art_height = SpriteSize::from_terminal_size(props.terminal_size.0, props.terminal_size.1)
            .rows();

        let chunks = Layout::vertical([
            Constraint::Length(art_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .split(area);

        // No art until a snapshot arrives; a snapshot without conditions gets the default bucket
        if props.weather.is_some() {
            let bucket = condition
                .map(|c| icon_bucket(&c.icon))
                .unwrap_or_default();
            let art = sprites::weather_sprite(bucket, props.terminal_size);
            frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[0]);
        }

        let temp = current
            .map(|c| props.units.format_temperature(c.temp))
            .unwrap_or_else(|| format!("{}{}", PLACEHOLDER, props.units.temperature_symbol()));
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(temp, Style::default().fg(theme::WHITE).bold())).centered(),
            ),
            chunks[1],
        );

        let label = condition.map(|c| c.main.as_str()).unwrap_or(PLACEHOLDER);
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(label, Style::default().fg(theme::DI_LIGHT))).centered(),
            ),
            chunks[2],
        );

        let (humidity, wind, clouds) = match current {
            Some(c) => (
                format!("{}%", c.humidity),
                format!("{:.1} {}", c.wind_speed, props.units.wind_speed_unit()),
                format!("{}%", c.clouds),
            ),
            None => (
                PLACEHOLDER.to_string(),
                PLACEHOLDER.to_string(),
                PLACEHOLDER.to_string(),
            ),
        };
        let mut spans = stat("💧 ", humidity);
        spans.push(Span::raw("   "));
        spans.extend(stat("💨 ", wind));
        spans.push(Span::raw("   "));
        spans.extend(stat("☁ ", clouds));
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), chunks[4]);
    }
}

impl CurrentConditions {
    /// Rows needed at the given terminal size
    pub fn height(terminal_size: (u16, u16)) -> u16 {
        SpriteSize::from_terminal_size(terminal_size.0, terminal_size.1).rows() + Self::TEXT_ROWS
    }
}
