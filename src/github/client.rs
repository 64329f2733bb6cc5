use crate::{config::Repository, ListingError, RemoteEntry};

static ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Clone)]
pub struct ContentsClient {
    client: reqwest::Client,
    repository: Repository,
}

impl ContentsClient {
    pub fn new(repository: Repository) -> Self {
        Self {
            client: reqwest::Client::new(),
            repository,
        }
    }

    pub fn contents_url(&self) -> String {
        let Repository {
            api_base,
            owner,
            repo,
            path,
            ..
        } = &self.repository;

        format!(
            "{}/repos/{}/{}/contents/{}",
            api_base.trim_end_matches('/'),
            owner,
            repo,
            path
        )
    }

    pub fn request(&self, token: &str) -> reqwest::RequestBuilder {
        self.client
            .get(&self.contents_url())
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", ACCEPT)
            .header("User-Agent", &self.repository.user_agent)
    }

    /// Fetches the directory listing. Anything that isn't a json array is an error
    pub async fn list(&self, token: &str) -> Result<Vec<RemoteEntry>, ListingError> {
        let resp = self.request(token).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|err| {
                log::debug!("cannot read the error body from github: {}", err);
                String::new()
            });
            log::error!("github returned {}: {}", status, body);
            return Err(ListingError::UpstreamStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let body = resp.text().await?;
        let entries = match serde_json::from_str::<serde_json::Value>(&body)? {
            serde_json::Value::Array(entries) => entries,
            _ => return Err(ListingError::UpstreamShape),
        };

        log::info!("github listed {} entries", entries.len());

        // non-objects can't be files, so they just fall out here
        Ok(entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<RemoteEntry>(entry) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::debug!("skipping listing entry: {}", err);
                    None
                }
            })
            .collect())
    }
}
