//! Credential resolution from process environment and env files.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;

/// Confluence API credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

impl Credentials {
    /// Resolve credentials, process environment first, env-file second.
    ///
    /// Both the canonical and the short variable names are accepted.
    /// Returns `None` when any of the three values is missing.
    pub fn resolve(file_env: &HashMap<String, String>) -> Option<Self> {
        let base_url = lookup(file_env, &["CONFLUENCE_BASE_URL", "CONFLUENCE_URL"])?;
        let email = lookup(file_env, &["CONFLUENCE_USER_EMAIL", "CONFLUENCE_EMAIL"])?;
        let api_token = lookup(file_env, &["CONFLUENCE_API_TOKEN", "CONFLUENCE_TOKEN"])?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            email,
            api_token,
        })
    }
}

/// Parse a `KEY=VALUE` env file into a map.
///
/// A missing file is an empty map, not an error. Blank lines, `#` comments
/// and lines without `=` are skipped; surrounding single or double quotes
/// around values are stripped.
pub fn load_env_file(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    let mut env = HashMap::new();
    if !path.exists() {
        return Ok(env);
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read env file {}", path.display()))?;
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        env.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }
    Ok(env)
}

fn lookup(file_env: &HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Ok(value) = env::var(key) {
            if !value.is_empty() {
                return Some(value);
            }
        }
        if let Some(value) = file_env.get(*key) {
            if !value.is_empty() {
                return Some(value.clone());
            }
        }
    }
    None
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_env_file_skips_comments_and_strips_quotes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("confluence.env");
        fs::write(
            &path,
            "# credentials\n\nCONFLUENCE_URL=\"https://example.atlassian.net\"\nCONFLUENCE_TOKEN='secret'\nmalformed line\n",
        )
        .unwrap();

        let env = load_env_file(&path).unwrap();
        assert_eq!(env.len(), 2);
        assert_eq!(env["CONFLUENCE_URL"], "https://example.atlassian.net");
        assert_eq!(env["CONFLUENCE_TOKEN"], "secret");
    }

    #[test]
    fn test_load_env_file_missing_is_empty() {
        let temp = tempdir().unwrap();
        let env = load_env_file(&temp.path().join("nope.env")).unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn test_resolve_accepts_fallback_names_and_trims_base_url() {
        let mut file_env = HashMap::new();
        file_env.insert(
            "CONFLUENCE_URL".to_string(),
            "https://example.atlassian.net/".to_string(),
        );
        file_env.insert("CONFLUENCE_EMAIL".to_string(), "dev@example.com".to_string());
        file_env.insert("CONFLUENCE_TOKEN".to_string(), "tok".to_string());

        let creds = Credentials::resolve(&file_env).unwrap();
        assert_eq!(creds.base_url, "https://example.atlassian.net");
        assert_eq!(creds.email, "dev@example.com");
        assert_eq!(creds.api_token, "tok");
    }

    #[test]
    fn test_resolve_missing_value_is_none() {
        let mut file_env = HashMap::new();
        file_env.insert(
            "CONFLUENCE_URL".to_string(),
            "https://example.atlassian.net".to_string(),
        );
        assert!(Credentials::resolve(&file_env).is_none());
    }

    #[test]
    fn test_process_env_wins_over_file() {
        // Variable name unique to this test to avoid cross-test interference.
        let mut file_env = HashMap::new();
        file_env.insert("PLATFORGE_WIKI_TEST_VAR".to_string(), "file".to_string());
        env::set_var("PLATFORGE_WIKI_TEST_VAR", "process");

        let value = lookup(&file_env, &["PLATFORGE_WIKI_TEST_VAR"]);
        env::remove_var("PLATFORGE_WIKI_TEST_VAR");
        assert_eq!(value.as_deref(), Some("process"));
    }
}
