//! Condition code to icon bucket mapping
//!
//! OpenWeather reports a short icon code per condition (`"04d"`, `"10n"`, ...).
//! The screen only ships art for a handful of buckets: clear, partly cloudy,
//! rain and snow keep their day/night variant, cloud, shower and thunderstorm
//! codes collapse to one bucket each, and everything else (mist, fog, unknown
//! codes) falls back to the mist bucket.

use std::fmt;

/// Art bucket a condition code resolves to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconBucket {
    ClearDay,
    ClearNight,
    FewCloudsDay,
    FewCloudsNight,
    Clouds,
    ShowerRain,
    RainDay,
    RainNight,
    Thunderstorm,
    SnowDay,
    SnowNight,
    #[default]
    Mist,
}

const BUCKETS: [(&str, IconBucket); 18] = [
    ("01d", IconBucket::ClearDay),
    ("01n", IconBucket::ClearNight),
    ("02d", IconBucket::FewCloudsDay),
    ("02n", IconBucket::FewCloudsNight),
    ("03d", IconBucket::Clouds),
    ("03n", IconBucket::Clouds),
    ("04d", IconBucket::Clouds),
    ("04n", IconBucket::Clouds),
    ("09d", IconBucket::ShowerRain),
    ("09n", IconBucket::ShowerRain),
    ("10d", IconBucket::RainDay),
    ("10n", IconBucket::RainNight),
    ("11d", IconBucket::Thunderstorm),
    ("11n", IconBucket::Thunderstorm),
    ("13d", IconBucket::SnowDay),
    ("13n", IconBucket::SnowNight),
    ("50d", IconBucket::Mist),
    ("50n", IconBucket::Mist),
];

/// Resolve a condition code. Never fails: unknown codes map to [`IconBucket::Mist`].
pub fn icon_bucket(code: &str) -> IconBucket {
    BUCKETS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, bucket)| *bucket)
        .unwrap_or_default()
}

impl IconBucket {
    /// Asset key: the code itself for day/night specific art, the shared prefix otherwise.
    pub fn as_str(self) -> &'static str {
        match self {
            IconBucket::ClearDay => "01d",
            IconBucket::ClearNight => "01n",
            IconBucket::FewCloudsDay => "02d",
            IconBucket::FewCloudsNight => "02n",
            IconBucket::Clouds => "03",
            IconBucket::ShowerRain => "09",
            IconBucket::RainDay => "10d",
            IconBucket::RainNight => "10n",
            IconBucket::Thunderstorm => "11",
            IconBucket::SnowDay => "13d",
            IconBucket::SnowNight => "13n",
            IconBucket::Mist => "50",
        }
    }

    pub fn is_night(self) -> bool {
        matches!(
            self,
            IconBucket::ClearNight
                | IconBucket::FewCloudsNight
                | IconBucket::RainNight
                | IconBucket::SnowNight
        )
    }
}

impl fmt::Display for IconBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
