use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{GameId, TileFace},
    protocol::{
        decode_tiles, EndResponse, GuessRequest, GuessResponse, StartResponse, TilesResponse,
    },
};
use tracing::{debug, info};
use url::Url;

use crate::error::BackendError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartOutcome {
    pub game_id: GameId,
    pub tiles: Vec<TileFace>,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesOutcome {
    pub tiles: Vec<TileFace>,
    /// Absent when the backend left the score out; the prior score stands.
    pub points: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Accepted { tiles: Vec<TileFace>, points: i64 },
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOutcome {
    pub tiles: Vec<TileFace>,
    pub points: i64,
}

/// The authoritative game server. Stateless per call apart from the game id.
#[async_trait]
pub trait GameBackend: Send + Sync {
    async fn start(&self) -> Result<StartOutcome, BackendError>;
    async fn fetch_tiles(&self, game_id: &GameId) -> Result<TilesOutcome, BackendError>;
    /// `word` is sent as given; callers lowercase it.
    async fn submit_guess(&self, game_id: &GameId, word: &str)
        -> Result<GuessOutcome, BackendError>;
    async fn end_game(&self, game_id: &GameId) -> Result<EndOutcome, BackendError>;
}

pub struct HttpBackend {
    http: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(server_url: &str) -> Result<Self, BackendError> {
        let mut base_url = Url::parse(server_url)?;
        // Url::join drops the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, name: &str) -> Result<Url, BackendError> {
        Ok(self.base_url.join(name)?)
    }
}

#[async_trait]
impl GameBackend for HttpBackend {
    async fn start(&self) -> Result<StartOutcome, BackendError> {
        let response: StartResponse = self
            .http
            .get(self.endpoint("start")?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!(game_id = %response.game_id, "backend: game started");
        Ok(StartOutcome {
            tiles: decode_tiles(&response.tiles)?,
            game_id: response.game_id,
            points: response.points,
        })
    }

    async fn fetch_tiles(&self, game_id: &GameId) -> Result<TilesOutcome, BackendError> {
        let response: TilesResponse = self
            .http
            .get(self.endpoint("tiles")?)
            .query(&[("name", game_id.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(%game_id, tiles = response.tiles.len(), "backend: fetched tiles");
        Ok(TilesOutcome {
            tiles: decode_tiles(&response.tiles)?,
            points: response.points,
        })
    }

    async fn submit_guess(
        &self,
        game_id: &GameId,
        word: &str,
    ) -> Result<GuessOutcome, BackendError> {
        let response: GuessResponse = self
            .http
            .post(self.endpoint("guess")?)
            .json(&GuessRequest {
                game: game_id.clone(),
                guess: word.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(%game_id, word, valid = response.valid, "backend: guess judged");
        if !response.valid {
            return Ok(GuessOutcome::Rejected);
        }
        Ok(GuessOutcome::Accepted {
            tiles: decode_tiles(&response.tiles)?,
            points: response.points,
        })
    }

    async fn end_game(&self, game_id: &GameId) -> Result<EndOutcome, BackendError> {
        let response: EndResponse = self
            .http
            .get(self.endpoint("end")?)
            .query(&[("name", game_id.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!(%game_id, points = response.points, "backend: game ended");
        Ok(EndOutcome {
            tiles: decode_tiles(&response.tiles)?,
            points: response.points,
        })
    }
}

#[cfg(test)]
#[path = "tests/backend_tests.rs"]
mod tests;
