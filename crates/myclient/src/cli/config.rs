//! Connection configuration

use super::args::Args;
use std::fmt;
use std::time::Duration;

/// Validated connection parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: Option<String>,
    pub connect_timeout: Duration,
}

impl ConnectOptions {
    pub fn from_args(args: &Args) -> Self {
        Self {
            user: non_empty(args.user.as_deref()),
            password: args.password.clone(),
            host: args.host.clone(),
            port: args.port,
            database: non_empty(args.database.as_deref()),
            connect_timeout: Duration::from_secs(args.timeout),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Redacted `user:***@host:port/db` form, for logs
impl fmt::Display for ConnectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let user = self.user.as_deref().unwrap_or("");
        let password = if self.password.as_deref().is_some_and(|p| !p.is_empty()) {
            ":***"
        } else {
            ""
        };
        write!(
            f,
            "{}{}@{}:{}/{}",
            user,
            password,
            self.host,
            self.port,
            self.database.as_deref().unwrap_or("")
        )
    }
}
