/// Bot configuration loaded from environment variables.
///
/// The Telegram token itself is read by teloxide from `TELOXIDE_TOKEN`.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Base URL of the admin API, without trailing slash
    /// (default: `http://localhost:3000/api`).
    pub api_base_url: String,
    /// Telegram user ids allowed to run admin commands, parsed from
    /// comma-separated `ADMIN_IDS`.
    pub admin_ids: Vec<u64>,
}

impl BotConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                     |
    /// |----------------|-----------------------------|
    /// | `API_BASE_URL` | `http://localhost:3000/api` |
    /// | `ADMIN_IDS`    | (empty; no admins)          |
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api".into());
        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        let admin_ids = std::env::var("ADMIN_IDS")
            .map(|raw| parse_admin_ids(&raw))
            .unwrap_or_default();

        Self {
            api_base_url,
            admin_ids,
        }
    }

    /// Whether a Telegram user id is on the admin allow-list.
    pub fn is_admin(&self, user_id: u64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}

fn parse_admin_ids(raw: &str) -> Vec<u64> {
    raw.split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            match part.parse() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!(value = part, "Ignoring unparseable admin id");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!(parse_admin_ids("1, 22,333"), vec![1, 22, 333]);
    }

    #[test]
    fn skips_garbage_entries() {
        assert_eq!(parse_admin_ids("1,abc, ,2"), vec![1, 2]);
    }

    #[test]
    fn empty_list_means_no_admins() {
        let config = BotConfig {
            api_base_url: String::new(),
            admin_ids: Vec::new(),
        };
        assert!(!config.is_admin(42));
    }
}
