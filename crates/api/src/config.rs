//! Application configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `APP_PROFILE` — active deployment profile(s), comma-joined (default: unset)
/// - `APP_ENV_DISPLAY` — display-name override for the index page (default: unset)
/// - `APP_NAME` — application name (default: `"halloworld-service"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub profile: Option<String>,
    pub display_override: Option<String>,
    pub app_name: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            profile: std::env::var("APP_PROFILE").ok(),
            display_override: std::env::var("APP_ENV_DISPLAY").ok(),
            app_name: std::env::var("APP_NAME")
                .unwrap_or_else(|_| "halloworld-service".to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolves the display environment for the index page.
    ///
    /// Priority: explicit override, else the uppercased active profile,
    /// else `"DEV"`.
    pub fn display_env(&self) -> String {
        match &self.display_override {
            Some(display) => display.clone(),
            None => self.profile.as_deref().unwrap_or("dev").to_uppercase(),
        }
    }

    /// The startup banner value: the raw profile string, or `"default"`
    /// when no profile is active.
    pub fn profile_banner(&self) -> &str {
        self.profile.as_deref().unwrap_or("default")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            profile: None,
            display_override: None,
            app_name: "halloworld-service".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.profile, None);
        assert_eq!(config.display_override, None);
        assert_eq!(config.app_name, "halloworld-service");
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_display_env_defaults_to_dev() {
        let config = Config::default();
        assert_eq!(config.display_env(), "DEV");
    }

    #[test]
    fn test_display_env_uppercases_profile() {
        let config = Config {
            profile: Some("prod".to_string()),
            ..Config::default()
        };
        assert_eq!(config.display_env(), "PROD");
    }

    #[test]
    fn test_display_override_beats_profile() {
        let config = Config {
            profile: Some("prod".to_string()),
            display_override: Some("Staging-EU".to_string()),
            ..Config::default()
        };
        assert_eq!(config.display_env(), "Staging-EU");
    }

    #[test]
    fn test_profile_banner() {
        let config = Config::default();
        assert_eq!(config.profile_banner(), "default");

        let config = Config {
            profile: Some("prod,eu".to_string()),
            ..Config::default()
        };
        assert_eq!(config.profile_banner(), "prod,eu");
    }
}
