use crate::{github::ContentsClient, media, Config, ListingError, MediaItem};

/// Lists the media files of one repository directory.
///
/// The credential is resolved once, when this is built. Without one every
/// call to [`Listing::handle`] fails before touching the network.
#[derive(Clone)]
pub struct Listing {
    client: ContentsClient,
    token: Option<String>,
    token_env: String,
}

impl Listing {
    pub fn new(config: &Config, token: Option<String>) -> Self {
        Self {
            client: ContentsClient::new(config.repository.clone()),
            token,
            token_env: config.repository.token_env.clone(),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub async fn handle(&self) -> Result<Vec<MediaItem>, ListingError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| ListingError::ConfigMissing {
                env: self.token_env.clone(),
            })?;

        log::debug!("fetching listing from {}", self.client.contents_url());
        let entries = self.client.list(token).await?;

        let items = media::collect(entries, &media::today());
        log::info!("found {} media files", items.len());
        Ok(items)
    }
}
