//! GitHub label API client and the importer that pushes resolved labels
//!
//! Labels are created one request at a time. A failed request is logged
//! and the importer moves on to the next label; nothing is retried.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use std::time::Duration;
use tracing::{error, info};
use url::Url;

use crate::constants;
use crate::resolver::ResolvedLabel;
use crate::{Context, LabelSyncError, Result};

/// Remote label endpoint
#[async_trait]
pub trait LabelApi {
    /// Create `label` in the remote repository
    async fn create_label(&self, label: &ResolvedLabel) -> Result<()>;

    /// Repository the labels are pushed to, for diagnostics
    fn repository(&self) -> &str;
}

/// Token authenticated client for `POST /repos/{owner}/{repo}/labels`
///
/// The repository and token are not validated up front. A token that cannot
/// be sent as a header fails each `create_label` call instead, so the
/// importer reports it once per label like any other remote error.
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    endpoint: Url,
    repository: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_url: &str, repository: &str, token: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(&format!(
            "{}/repos/{}/labels",
            api_url.trim_end_matches('/'),
            repository
        ))?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(constants::GITHUB_ACCEPT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            repository: repository.to_string(),
            token: token.to_string(),
        })
    }

    pub fn from_context(ctx: &Context, repository: &str, token: &str) -> Result<Self> {
        Self::new(
            &ctx.api_url,
            repository,
            token,
            Duration::from_secs(ctx.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn authorization(&self) -> Result<HeaderValue> {
        let mut auth = HeaderValue::from_str(&format!("token {}", self.token))?;
        auth.set_sensitive(true);
        Ok(auth)
    }
}

#[async_trait]
impl LabelApi for GitHubClient {
    async fn create_label(&self, label: &ResolvedLabel) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, self.authorization()?)
            .json(label)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LabelSyncError::GitHub(format!(
                "{} returned {}",
                self.endpoint, status
            )));
        }

        Ok(())
    }

    fn repository(&self) -> &str {
        &self.repository
    }
}

/// Counts reported after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub submitted: usize,
    pub failed: usize,
}

/// Pushes resolved labels through a `LabelApi`, one at a time
pub struct Importer<'a, A: LabelApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: LabelApi + ?Sized> Importer<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Create a single label, logging instead of returning any failure
    pub async fn upsert(&self, label: &ResolvedLabel) {
        self.try_upsert(label).await;
    }

    /// Create every label in order; a failed label never stops the rest
    ///
    /// Shares `try_upsert` with `upsert`, so each label is logged the same
    /// way, and counts the outcomes for the final statistics.
    pub async fn run_all<'l, I>(&self, labels: I) -> SyncSummary
    where
        I: IntoIterator<Item = &'l ResolvedLabel>,
    {
        let mut summary = SyncSummary::default();
        for label in labels {
            if self.try_upsert(label).await {
                summary.submitted += 1;
            } else {
                summary.failed += 1;
            }
        }
        summary
    }

    async fn try_upsert(&self, label: &ResolvedLabel) -> bool {
        match self.api.create_label(label).await {
            Ok(()) => {
                info!(
                    "✓ Created label '{}' ({}) in {}",
                    label.name,
                    label.color.as_deref().unwrap_or("no color"),
                    self.api.repository()
                );
                true
            }
            Err(err) => {
                error!(
                    "✗ Failed to create label '{}' in {}: {}",
                    label.name,
                    self.api.repository(),
                    err
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every call and fails for the listed label names
    struct RecordingApi {
        fail_for: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn failing(fail_for: Vec<&'static str>) -> Self {
            Self {
                fail_for,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LabelApi for RecordingApi {
        async fn create_label(&self, label: &ResolvedLabel) -> Result<()> {
            self.calls.lock().unwrap().push(label.name.clone());
            if self.fail_for.iter().any(|name| *name == label.name) {
                return Err(LabelSyncError::Generic("connection reset".to_string()));
            }
            Ok(())
        }

        fn repository(&self) -> &str {
            "octo/repo"
        }
    }

    fn label(name: &str, color: Option<&str>) -> ResolvedLabel {
        ResolvedLabel {
            name: name.to_string(),
            color: color.map(str::to_string),
        }
    }

    #[test]
    fn test_endpoint_for_repository() {
        let client = GitHubClient::new(
            "https://api.github.com/",
            "octo/repo",
            "secret",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.github.com/repos/octo/repo/labels"
        );
        assert_eq!(client.repository(), "octo/repo");
    }

    #[test]
    fn test_repository_is_not_validated() {
        let client = GitHubClient::new(
            "https://api.github.com",
            "octo/repo/extra",
            "secret",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.github.com/repos/octo/repo/extra/labels"
        );
    }

    #[tokio::test]
    async fn test_malformed_token_fails_each_label() {
        let client = GitHubClient::new(
            "http://127.0.0.1:9",
            "octo/repo",
            "bad\ntoken",
            Duration::from_secs(1),
        )
        .unwrap();

        let err = client.create_label(&label("a", None)).await.unwrap_err();
        assert!(matches!(err, LabelSyncError::Config(_)), "{}", err);

        let labels = vec![label("a", None), label("b", Some("ff0000")), label("c", None)];
        let summary = Importer::new(&client).run_all(&labels).await;
        assert_eq!(summary, SyncSummary { submitted: 0, failed: 3 });
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_later_labels() {
        let api = RecordingApi::failing(vec!["b"]);
        let labels = vec![label("a", Some("ff0000")), label("b", None), label("c", Some("00ff00"))];

        let summary = Importer::new(&api).run_all(&labels).await;

        assert_eq!(api.calls(), vec!["a", "b", "c"]);
        assert_eq!(summary, SyncSummary { submitted: 2, failed: 1 });
    }

    #[tokio::test]
    async fn test_upsert_swallows_errors() {
        let api = RecordingApi::failing(vec!["a"]);
        let importer = Importer::new(&api);

        importer.upsert(&label("a", None)).await;
        importer.upsert(&label("b", None)).await;

        assert_eq!(api.calls(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_run_all_empty() {
        let api = RecordingApi::failing(vec![]);
        let summary = Importer::new(&api).run_all(&Vec::new()).await;
        assert_eq!(summary, SyncSummary::default());
        assert!(api.calls().is_empty());
    }
}
