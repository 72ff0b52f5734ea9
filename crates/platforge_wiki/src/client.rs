//! Confluence REST client.

use std::path::Path;

use anyhow::Context;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::Credentials;

/// A Confluence page with the fields the upsert needs.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(rename = "type", default = "default_page_type")]
    pub page_type: String,
    pub version: PageVersion,
    pub body: PageBody,
}

fn default_page_type() -> String {
    "page".to_string()
}

#[derive(Debug, Deserialize)]
pub struct PageVersion {
    pub number: u64,
}

#[derive(Debug, Deserialize)]
pub struct PageBody {
    pub storage: PageStorage,
}

#[derive(Debug, Deserialize)]
pub struct PageStorage {
    pub value: String,
}

#[derive(Debug, Deserialize)]
struct AttachmentList {
    #[serde(default)]
    results: Vec<Attachment>,
}

#[derive(Debug, Deserialize)]
struct Attachment {
    id: String,
}

/// Authenticated client against one Confluence site.
pub struct ConfluenceClient {
    http: Client,
    credentials: Credentials,
}

impl ConfluenceClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            credentials,
        }
    }

    fn content_url(&self, page_id: &str) -> String {
        format!(
            "{}/wiki/rest/api/content/{}",
            self.credentials.base_url, page_id
        )
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.credentials.email, Some(&self.credentials.api_token))
    }

    /// Upload a PNG as a page attachment.
    ///
    /// An attachment with the same filename gets its data updated in place;
    /// otherwise a new attachment is created.
    pub async fn upload_attachment(&self, page_id: &str, path: &Path) -> anyhow::Result<()> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Invalid attachment path {}", path.display()))?
            .to_string();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let list_url = format!("{}/child/attachment", self.content_url(page_id));
        let existing: AttachmentList = self
            .authed(self.http.get(&list_url))
            .query(&[("filename", file_name.as_str())])
            .send()
            .await?
            .error_for_status()
            .context("Attachment lookup failed")?
            .json()
            .await?;

        let upload_url = match existing.results.first() {
            Some(attachment) => {
                debug!("Updating existing attachment {} ({})", file_name, attachment.id);
                format!("{list_url}/{}/data", attachment.id)
            }
            None => {
                debug!("Creating attachment {}", file_name);
                list_url
            }
        };

        let part = Part::bytes(bytes)
            .file_name(file_name.clone())
            .mime_str("image/png")?;
        self.authed(self.http.post(&upload_url))
            .header("X-Atlassian-Token", "no-check")
            .multipart(Form::new().part("file", part))
            .send()
            .await?
            .error_for_status()
            .with_context(|| format!("Upload of {file_name} failed"))?;
        Ok(())
    }

    /// Fetch a page with its storage body and version.
    pub async fn fetch_page(&self, page_id: &str) -> anyhow::Result<Page> {
        let page = self
            .authed(self.http.get(self.content_url(page_id)))
            .query(&[("expand", "body.storage,version,title,type")])
            .send()
            .await?
            .error_for_status()
            .with_context(|| format!("Failed to fetch page {page_id}"))?
            .json()
            .await?;
        Ok(page)
    }

    /// Write a new storage body to the page, bumping its version.
    pub async fn update_page(
        &self,
        page_id: &str,
        page: &Page,
        storage: &str,
    ) -> anyhow::Result<()> {
        let payload = json!({
            "id": page_id,
            "type": page.page_type,
            "title": page.title,
            "version": {"number": page.version.number + 1},
            "body": {"storage": {"value": storage, "representation": "storage"}},
        });
        self.authed(self.http.put(self.content_url(page_id)))
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .with_context(|| format!("Failed to update page {page_id}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserializes_with_defaulted_type() {
        let page: Page = serde_json::from_value(json!({
            "title": "Architecture",
            "version": {"number": 7},
            "body": {"storage": {"value": "<p>x</p>"}},
        }))
        .unwrap();
        assert_eq!(page.title, "Architecture");
        assert_eq!(page.page_type, "page");
        assert_eq!(page.version.number, 7);
        assert_eq!(page.body.storage.value, "<p>x</p>");
    }

    #[test]
    fn test_attachment_list_defaults_empty() {
        let list: AttachmentList = serde_json::from_value(json!({})).unwrap();
        assert!(list.results.is_empty());
    }
}
