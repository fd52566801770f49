/// Display category for a set of conditions, independent of any rendering toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    Rain,
    Snow,
    Cloud,
    WarmSun,
    CoolSun,
}

/// Strictly above this temperature a clear sky gets the warm sun.
pub const WARM_THRESHOLD_C: f64 = 25.0;

impl WeatherIcon {
    /// Pick a category: first match of rain, snow, cloud in the description, otherwise by
    /// temperature. Always returns exactly one category.
    pub fn select(description: &str, temperature_c: f64) -> Self {
        let description = description.to_lowercase();

        if description.contains("rain") {
            WeatherIcon::Rain
        } else if description.contains("snow") {
            WeatherIcon::Snow
        } else if description.contains("cloud") {
            WeatherIcon::Cloud
        } else if temperature_c > WARM_THRESHOLD_C {
            WeatherIcon::WarmSun
        } else {
            WeatherIcon::CoolSun
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherIcon::Rain => "🌧",
            WeatherIcon::Snow => "🌨",
            WeatherIcon::Cloud => "☁",
            WeatherIcon::WarmSun => "☀",
            WeatherIcon::CoolSun => "🌤",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_wins_regardless_of_temperature() {
        assert_eq!(WeatherIcon::select("light rain", 35.0), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::select("light rain", -5.0), WeatherIcon::Rain);
    }

    #[test]
    fn keyword_order_is_rain_snow_cloud() {
        assert_eq!(WeatherIcon::select("rain and snow", 0.0), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::select("snow clouds", 0.0), WeatherIcon::Snow);
        assert_eq!(
            WeatherIcon::select("overcast clouds", 30.0),
            WeatherIcon::Cloud
        );
    }

    #[test]
    fn clear_sky_depends_on_temperature() {
        assert_eq!(WeatherIcon::select("clear sky", 30.0), WeatherIcon::WarmSun);
        assert_eq!(WeatherIcon::select("clear sky", 10.0), WeatherIcon::CoolSun);
        assert_eq!(WeatherIcon::select("clear sky", 25.0), WeatherIcon::CoolSun);
    }

    #[test]
    fn matching_is_case_insensitive_and_total() {
        assert_eq!(WeatherIcon::select("Heavy RAIN", 10.0), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::select("", 10.0), WeatherIcon::CoolSun);
        assert_eq!(WeatherIcon::select("", f64::NAN), WeatherIcon::CoolSun);
    }
}
