//! Condition art for the icon buckets, sized to the terminal
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! Day and night variants of the same bucket share art where it makes sense
//! and differ in color.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use weather_api::IconBucket;

use crate::theme;

mod sprite_data {
    macro_rules! sprite {
        ($name:ident) => {
            pub mod $name {
                pub const SMALL: &str =
                    include_str!(concat!("../sprites/", stringify!($name), "/small.txt"));
                pub const LARGE: &str =
                    include_str!(concat!("../sprites/", stringify!($name), "/large.txt"));
            }
        };
    }

    sprite!(sun);
    sprite!(moon);
    sprite!(sun_cloud);
    sprite!(moon_cloud);
    sprite!(cloud);
    sprite!(shower);
    sprite!(rain);
    sprite!(storm);
    sprite!(snow);
    sprite!(fog);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSize {
    /// Up to 5 lines, for short terminals
    Small,
    /// Up to 9 lines
    Large,
}

impl SpriteSize {
    pub fn from_terminal_size(_width: u16, height: u16) -> Self {
        // Chrome: search bar (3) + title (2) + stats (4) + daily strip (5) + help (1)
        let content_height = height.saturating_sub(15);

        match content_height {
            0..=11 => SpriteSize::Small,
            _ => SpriteSize::Large,
        }
    }

    /// Rows reserved for a sprite of this size
    pub fn rows(self) -> u16 {
        match self {
            SpriteSize::Small => 5,
            SpriteSize::Large => 9,
        }
    }
}

fn art(bucket: IconBucket, size: SpriteSize) -> &'static str {
    use sprite_data::*;

    let (small, large) = match bucket {
        IconBucket::ClearDay => (sun::SMALL, sun::LARGE),
        IconBucket::ClearNight => (moon::SMALL, moon::LARGE),
        IconBucket::FewCloudsDay => (sun_cloud::SMALL, sun_cloud::LARGE),
        IconBucket::FewCloudsNight => (moon_cloud::SMALL, moon_cloud::LARGE),
        IconBucket::Clouds => (cloud::SMALL, cloud::LARGE),
        IconBucket::ShowerRain => (shower::SMALL, shower::LARGE),
        IconBucket::RainDay | IconBucket::RainNight => (rain::SMALL, rain::LARGE),
        IconBucket::Thunderstorm => (storm::SMALL, storm::LARGE),
        IconBucket::SnowDay | IconBucket::SnowNight => (snow::SMALL, snow::LARGE),
        IconBucket::Mist => (fog::SMALL, fog::LARGE),
    };

    match size {
        SpriteSize::Small => small,
        SpriteSize::Large => large,
    }
}

/// Primary color of a bucket's art
pub fn color(bucket: IconBucket) -> Color {
    match bucket {
        IconBucket::ClearDay | IconBucket::FewCloudsDay => Color::Rgb(255, 214, 102),
        IconBucket::ClearNight | IconBucket::FewCloudsNight => theme::DI_LIGHT,
        IconBucket::Clouds | IconBucket::Mist => theme::DI,
        IconBucket::ShowerRain | IconBucket::RainDay => Color::Rgb(120, 170, 220),
        IconBucket::RainNight => theme::DI_DARK,
        IconBucket::Thunderstorm => theme::RED_LIGHT,
        IconBucket::SnowDay | IconBucket::SnowNight => theme::TETRA,
    }
}

/// Single-cell glyph for compact places like the daily strip
pub fn glyph(bucket: IconBucket) -> &'static str {
    match bucket {
        IconBucket::ClearDay => "☀",
        IconBucket::ClearNight => "☾",
        IconBucket::FewCloudsDay | IconBucket::FewCloudsNight => "⛅",
        IconBucket::Clouds => "☁",
        IconBucket::ShowerRain | IconBucket::RainDay | IconBucket::RainNight => "☂",
        IconBucket::Thunderstorm => "⚡",
        IconBucket::SnowDay | IconBucket::SnowNight => "❄",
        IconBucket::Mist => "≋",
    }
}

/// Art for a bucket at the size the terminal allows
pub fn weather_sprite(bucket: IconBucket, terminal_size: (u16, u16)) -> Text<'static> {
    let size = SpriteSize::from_terminal_size(terminal_size.0, terminal_size.1);
    get_sprite(bucket, size)
}

pub fn get_sprite(bucket: IconBucket, size: SpriteSize) -> Text<'static> {
    sprite_to_text(art(bucket, size), color(bucket))
}

fn sprite_to_text(sprite: &'static str, color: Color) -> Text<'static> {
    let style = Style::default().fg(color);
    let lines: Vec<Line> = sprite
        .lines()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect();
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconBucket; 12] = [
        IconBucket::ClearDay,
        IconBucket::ClearNight,
        IconBucket::FewCloudsDay,
        IconBucket::FewCloudsNight,
        IconBucket::Clouds,
        IconBucket::ShowerRain,
        IconBucket::RainDay,
        IconBucket::RainNight,
        IconBucket::Thunderstorm,
        IconBucket::SnowDay,
        IconBucket::SnowNight,
        IconBucket::Mist,
    ];

    #[test]
    fn test_sprite_size_from_terminal() {
        assert_eq!(SpriteSize::from_terminal_size(80, 24), SpriteSize::Small);
        assert_eq!(SpriteSize::from_terminal_size(80, 26), SpriteSize::Small);
        assert_eq!(SpriteSize::from_terminal_size(80, 27), SpriteSize::Large);
        assert_eq!(SpriteSize::from_terminal_size(80, 60), SpriteSize::Large);
    }

    #[test]
    fn test_all_sprites_load() {
        for bucket in ALL {
            for size in [SpriteSize::Small, SpriteSize::Large] {
                let text = get_sprite(bucket, size);
                assert!(
                    !text.lines.is_empty(),
                    "Sprite {:?}/{:?} should not be empty",
                    bucket,
                    size
                );
            }
        }
    }

    #[test]
    fn test_sprites_fit_reserved_rows() {
        for bucket in ALL {
            for size in [SpriteSize::Small, SpriteSize::Large] {
                assert!(get_sprite(bucket, size).lines.len() <= size.rows() as usize);
            }
        }
    }

    #[test]
    fn test_night_variants_differ_in_color() {
        assert_ne!(color(IconBucket::RainDay), color(IconBucket::RainNight));
        assert_ne!(color(IconBucket::ClearDay), color(IconBucket::ClearNight));
    }
}
