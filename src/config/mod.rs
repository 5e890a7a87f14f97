use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub service_role_key: String,
}

impl Config {
    /// Missing variables resolve to empty strings rather than failing
    /// startup; store calls then fail with an authentication error.
    pub fn from_env() -> Self {
        Self {
            supabase_url: env::var("SUPABASE_URL").unwrap_or_default(),
            service_role_key: env::var("SUPABASE_SERVICE_ROLE_KEY").unwrap_or_default(),
        }
    }
}
