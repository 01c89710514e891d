use std::env;

use chrono_tz::Tz;

const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub display_timezone: Tz,
}

/// Settings handed to every fulfillment call instead of mutating process state.
#[derive(Clone, Copy, Debug)]
pub struct InvocationConfig {
    pub display_timezone: Tz,
}

impl Default for InvocationConfig {
    fn default() -> Self {
        Self {
            display_timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "lexhook.db".to_string()),
            display_timezone: env::var("DISPLAY_TIMEZONE")
                .map(|v| parse_timezone(&v))
                .unwrap_or(DEFAULT_TIMEZONE),
        }
    }

    pub fn invocation(&self) -> InvocationConfig {
        InvocationConfig {
            display_timezone: self.display_timezone,
        }
    }
}

fn parse_timezone(name: &str) -> Tz {
    match name.trim().parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!(value = %name, "unrecognized DISPLAY_TIMEZONE, using {DEFAULT_TIMEZONE}");
            DEFAULT_TIMEZONE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_timezone() {
        assert_eq!(parse_timezone("Europe/Berlin"), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn test_parse_unknown_timezone_falls_back() {
        assert_eq!(parse_timezone("Mars/Olympus_Mons"), DEFAULT_TIMEZONE);
    }

    #[test]
    fn test_invocation_carries_timezone() {
        let config = AppConfig {
            port: 3000,
            database_url: ":memory:".to_string(),
            display_timezone: chrono_tz::Asia::Tokyo,
        };
        assert_eq!(config.invocation().display_timezone, chrono_tz::Asia::Tokyo);
    }
}
