use chrono::{Days, NaiveDate};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use weather_api::{icon_bucket, DailyForecast, UnitSystem};

use super::Component;
use crate::action::Action;
use crate::sprites;
use crate::theme;

pub struct DailyForecastStrip;

pub struct DailyForecastStripProps<'a> {
    pub daily: &'a [DailyForecast],
    pub units: UnitSystem,
    /// The first card is labelled with this day, the next with the day after, ...
    pub today: NaiveDate,
}

impl DailyForecastStrip {
    pub const HEIGHT: u16 = 5;
    pub const CARD_WIDTH: u16 = 11;
}

/// Weekday label for the card at `index`
pub fn weekday_label(today: NaiveDate, index: usize) -> String {
    today
        .checked_add_days(Days::new(index as u64))
        .map(|date| date.format("%A").to_string())
        .unwrap_or_default()
}

impl Component<Action> for DailyForecastStrip {
    type Props<'a> = DailyForecastStripProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.daily.is_empty() || area.width < Self::CARD_WIDTH {
            return;
        }

        let fits = (area.width / Self::CARD_WIDTH) as usize;
        let shown = props.daily.len().min(fits);
        let cards = Layout::horizontal(vec![Constraint::Length(Self::CARD_WIDTH); shown])
            .flex(Flex::Center)
            .split(area);

        let card_bg = theme::glass(0.1).over(theme::MONO);

        for (index, (day, card)) in props.daily.iter().zip(cards.iter()).enumerate() {
            let inner = Rect {
                x: card.x + 1,
                width: card.width.saturating_sub(2),
                ..*card
            };

            let bucket = day
                .condition()
                .map(|c| icon_bucket(&c.icon))
                .unwrap_or_default();

            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    sprites::glyph(bucket),
                    Style::default().fg(sprites::color(bucket)),
                ))
                .centered(),
                Line::from(Span::styled(
                    weekday_label(props.today, index),
                    Style::default().fg(theme::DI_LIGHT),
                ))
                .centered(),
                Line::from(Span::styled(
                    props.units.format_temperature(day.temp.day),
                    Style::default().fg(theme::WHITE).bold(),
                ))
                .centered(),
            ];

            frame.render_widget(
                Paragraph::new(lines).style(Style::default().bg(card_bg)),
                inner,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::RenderHarness;
    use weather_api::{Condition, DailyTemperature};

    fn day(dt: i64, temp: f64, icon: &str) -> DailyForecast {
        DailyForecast {
            dt,
            temp: DailyTemperature {
                day: temp,
                min: temp - 5.0,
                max: temp + 5.0,
            },
            weather: vec![Condition {
                id: 800,
                main: "Clear".into(),
                description: String::new(),
                icon: icon.into(),
            }],
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date")
    }

    #[test]
    fn test_weekday_labels_count_from_today() {
        assert_eq!(weekday_label(monday(), 0), "Monday");
        assert_eq!(weekday_label(monday(), 1), "Tuesday");
        assert_eq!(weekday_label(monday(), 7), "Monday");
    }

    #[test]
    fn test_render_cards() {
        let daily = vec![
            day(1_709_550_000, 12.4, "01d"),
            day(1_709_636_400, -3.5, "13d"),
        ];
        let mut render = RenderHarness::new(40, 5);
        let output = render.render_to_string_plain(|frame| {
            DailyForecastStrip.render(
                frame,
                frame.area(),
                DailyForecastStripProps {
                    daily: &daily,
                    units: UnitSystem::Metric,
                    today: monday(),
                },
            );
        });

        assert!(output.contains("Monday"));
        assert!(output.contains("Tuesday"));
        assert!(output.contains("12℃"));
        assert!(output.contains("-4℃"));
    }

    #[test]
    fn test_render_only_what_fits() {
        let daily: Vec<_> = (0..8).map(|i| day(i, 10.0, "03d")).collect();
        let mut render = RenderHarness::new(33, 5);
        let output = render.render_to_string_plain(|frame| {
            DailyForecastStrip.render(
                frame,
                frame.area(),
                DailyForecastStripProps {
                    daily: &daily,
                    units: UnitSystem::Metric,
                    today: monday(),
                },
            );
        });

        assert!(output.contains("Wednesday"));
        assert!(!output.contains("Thursday"));
    }

    #[test]
    fn test_render_empty_is_blank() {
        let mut render = RenderHarness::new(30, 5);
        let output = render.render_to_string_plain(|frame| {
            DailyForecastStrip.render(
                frame,
                frame.area(),
                DailyForecastStripProps {
                    daily: &[],
                    units: UnitSystem::Imperial,
                    today: monday(),
                },
            );
        });
        assert!(output.trim().is_empty());
    }
}
