use crate::config::ApiConfig;
use crate::errors::ApiError;
use crate::models::{Envelope, NewPlayer, Player, PlayerData, PlayerDetail, PlayersData};
use reqwest::{Client, Response};
use tracing::debug;

/// Thin client over the remote Puppy Bowl API. No retries, no caching: every
/// call goes to the wire, and the caller gets a typed result back.
#[derive(Debug, Clone)]
pub struct PuppyBowlClient {
    http: Client,
    config: ApiConfig,
}

impl PuppyBowlClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn fetch_all_players(&self) -> Result<Vec<Player>, ApiError> {
        let url = self.config.players_url();
        debug!("fetching roster from {url}");
        let response = checked(self.http.get(url).send().await?)?;
        let envelope: Envelope<PlayersData> = response.json().await?;
        Ok(envelope.data.players)
    }

    pub async fn fetch_single_player(&self, id: i64) -> Result<PlayerDetail, ApiError> {
        let url = self.config.player_url(id);
        debug!("fetching player from {url}");
        let response = checked(self.http.get(url).send().await?)?;
        let envelope: Envelope<PlayerData> = response.json().await?;
        Ok(envelope.data.player)
    }

    /// Issues the create and reports only success or failure; the remote API
    /// does not hand back anything we render, so the created record is not
    /// returned.
    pub async fn add_new_player(&self, fields: &NewPlayer) -> Result<(), ApiError> {
        let url = self.config.players_url();
        debug!("creating player at {url}");
        checked(self.http.post(url).json(fields).send().await?)?;
        Ok(())
    }

    pub async fn remove_player(&self, id: i64) -> Result<(), ApiError> {
        let url = self.config.player_url(id);
        debug!("removing player at {url}");
        checked(self.http.delete(url).send().await?)?;
        Ok(())
    }
}

fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::UnexpectedStatus(status))
    }
}
