//! Connection settings for the Supabase REST API.

/// Where the database API lives and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseConfig {
    /// Project URL (e.g., "https://abc.supabase.co")
    pub url: String,
    /// Anonymous or service key, sent as `apikey` and bearer token
    pub api_key: String,
    /// Remote procedure that executes raw SQL
    pub sql_function: String,
}

impl DatabaseConfig {
    /// Name of the SQL-executing remote procedure unless configured otherwise.
    pub const DEFAULT_SQL_FUNCTION: &'static str = "execute_sql";

    /// Create a new configuration.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            sql_function: Self::DEFAULT_SQL_FUNCTION.to_string(),
        }
    }

    /// Set the SQL-executing remote procedure.
    pub fn with_sql_function(mut self, name: impl Into<String>) -> Self {
        self.sql_function = name.into();
        self
    }

    /// Base of every REST endpoint.
    pub fn rest_base(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_base_tolerates_trailing_slash() {
        let a = DatabaseConfig::new("https://x.supabase.co/", "k");
        let b = DatabaseConfig::new("https://x.supabase.co", "k");
        assert_eq!(a.rest_base(), "https://x.supabase.co/rest/v1");
        assert_eq!(a.rest_base(), b.rest_base());
    }

    #[test]
    fn sql_function_defaults_and_overrides() {
        let config = DatabaseConfig::new("u", "k");
        assert_eq!(config.sql_function, "execute_sql");
        assert_eq!(config.with_sql_function("run_sql").sql_function, "run_sql");
    }
}
