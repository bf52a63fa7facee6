use anyhow::{bail, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub vapid_subject: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let vapid_subject = std::env::var("VAPID_SUBJECT")
            .unwrap_or_else(|_| "mailto:admin@mvt-events.com".to_string());

        // RFC 8292 subjects are mailto: or https: URIs
        if !vapid_subject.starts_with("mailto:") && !vapid_subject.starts_with("https://") {
            bail!("VAPID_SUBJECT must be a mailto: or https: URI, got {vapid_subject:?}");
        }

        Ok(Config { vapid_subject })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_subject_is_a_mailto_uri() {
        std::env::remove_var("VAPID_SUBJECT");
        let config = Config::from_env().unwrap();
        assert_eq!(config.vapid_subject, "mailto:admin@mvt-events.com");
    }
}
