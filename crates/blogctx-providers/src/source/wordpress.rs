//! WordPress REST listing
//!
//! `GET <base>/wp-json/wp/v2/posts?per_page=<N>`, decoded into
//! [`SourcePost`] items.

use std::time::Duration;

use async_trait::async_trait;
use blogctx_domain::SourcePost;
use blogctx_domain::error::Result;
use blogctx_domain::ports::BlogSource;
use reqwest::Client;
use tracing::debug;

use crate::constants::WORDPRESS_POSTS_PATH;
use crate::utils::{ApiKind, HttpResponseUtils};

/// WordPress posts endpoint client
pub struct WordPressSource {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl WordPressSource {
    /// Create a source for the blog at `base_url`
    pub fn new(base_url: &str, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout,
            http_client,
        }
    }

    /// Full listing URL without the query string
    pub fn posts_url(&self) -> String {
        format!("{}{WORDPRESS_POSTS_PATH}", self.base_url)
    }
}

#[async_trait]
impl BlogSource for WordPressSource {
    async fn fetch_posts(&self, limit: usize) -> Result<Vec<SourcePost>> {
        let url = self.posts_url();
        debug!(url = %url, per_page = limit, "Fetching blog listing");

        let response = self
            .http_client
            .get(&url)
            .query(&[("per_page", limit)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiKind::Source.request_error("WordPress", &e, self.timeout))?;

        HttpResponseUtils::check_and_parse(response, "WordPress", ApiKind::Source).await
    }

    fn source_name(&self) -> &str {
        "wordpress"
    }
}
