//! Application configuration.

use std::path::Path;

use chrono::TimeDelta;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Uncased,
};

use humantime::format_duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use anyhow::Error;

/// Secret used to sign tokens when none is configured.
///
/// Only fit for local development.
pub const DEVELOPMENT_SECRET: &str = "a_very_secret_key_for_dev";

/// Full application configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// General server configuration.
    pub server: ServerConfig,
    /// Token configuration.
    pub auth: AuthConfig,
    /// HTTP server configuration.
    pub http: HttpConfig,
}

/// General server configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    /// The database url to connect to.
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: Some("sqlite://surebet.db?mode=rwc".into()),
        }
    }
}

/// Bearer token configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign tokens.
    ///
    /// Generate one with `surebet generate-secret`. If this is missing, a
    /// well-known development secret is used instead.
    pub jwt_secret: Option<String>,
    /// How long issued tokens stay valid.
    #[serde(
        deserialize_with = "deserialize_duration",
        serialize_with = "serialize_duration"
    )]
    pub token_ttl: TimeDelta,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            jwt_secret: None,
            token_ttl: TimeDelta::hours(72),
        }
    }
}

/// HTTP server configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    /// The port to listen on.
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig { port: 8080 }
    }
}

/// Reads the configuration.
pub fn read_config(config_file: impl AsRef<Path>) -> Result<Config, Error> {
    figment(config_file).extract().map_err(From::from)
}

fn figment(config_file: impl AsRef<Path>) -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_file))
        .merge(Env::prefixed("SUREBET_").split("__"))
        .merge(Env::raw().filter_map(|k| match k.as_str() {
            "DATABASE_URL" => Some(Uncased::from("server.database_url")),
            "JWT_SECRET" => Some(Uncased::from("auth.jwt_secret")),
            "PORT" => Some(Uncased::from("http.port")),
            _ => None,
        }))
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<TimeDelta, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let duration = humantime::parse_duration(&text).map_err(D::Error::custom)?;

    TimeDelta::from_std(duration).map_err(D::Error::custom)
}

fn serialize_duration<S>(delta: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let duration = delta
        .to_std()
        .map_err(<S::Error as serde::ser::Error>::custom)?;

    format_duration(duration).to_string().serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    #[test]
    pub fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config: Config = figment("config.toml").extract()?;

            assert_eq!(config.auth.token_ttl, TimeDelta::hours(72));
            assert!(config.server.database_url.is_some());

            Ok(())
        });
    }

    #[test]
    pub fn test_file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [auth]
                token_ttl = "1h 30m"

                [http]
                port = 4000
                "#,
            )?;
            jail.set_env("PORT", "3000");
            jail.set_env("JWT_SECRET", "hunter2");
            jail.set_env("DATABASE_URL", "sqlite::memory:");

            let config: Config = figment("config.toml").extract()?;

            assert_eq!(config.http.port, 3000);
            assert_eq!(config.auth.token_ttl, TimeDelta::minutes(90));
            assert_eq!(config.auth.jwt_secret.as_deref(), Some("hunter2"));
            assert_eq!(
                config.server.database_url.as_deref(),
                Some("sqlite::memory:")
            );

            Ok(())
        });
    }
}
