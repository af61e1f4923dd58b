const BACKEND_URL_VARS: [&str; 2] = ["MODALITY_BACKEND_URL", "BACKEND_URL"];
const WORKLIST_PATH: &str = "/api/worklist";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub backend_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Picks the first non-blank backend URL among the known variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url = BACKEND_URL_VARS
            .iter()
            .find_map(|name| match lookup(name) {
                Some(value) if value.trim().is_empty() => {
                    log::debug!("{name} was set but empty");
                    None
                }
                Some(value) => Some(value.trim().trim_end_matches('/').to_string()),
                None => None,
            })
            .unwrap_or_default();

        if backend_url.is_empty() {
            log::warn!("No backend URL configured, worklist requests use a relative path");
        }

        Self { backend_url }
    }

    pub fn worklist_url(&self) -> String {
        format!("{}{WORKLIST_PATH}", self.backend_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_to_relative_path() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.backend_url, "");
        assert_eq!(config.worklist_url(), "/api/worklist");
    }

    #[test]
    fn prefers_modality_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("MODALITY_BACKEND_URL", "http://ris.local:8000"),
            ("BACKEND_URL", "http://other:9000"),
        ]));
        assert_eq!(config.worklist_url(), "http://ris.local:8000/api/worklist");
    }

    #[test]
    fn blank_value_falls_through() {
        let config = Config::from_lookup(lookup_from(&[
            ("MODALITY_BACKEND_URL", "   "),
            ("BACKEND_URL", "http://other:9000/"),
        ]));
        assert_eq!(config.worklist_url(), "http://other:9000/api/worklist");
    }
}
