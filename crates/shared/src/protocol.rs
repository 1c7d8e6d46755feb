use serde::{Deserialize, Serialize};

use crate::{
    domain::{GameId, TileFace},
    error::ProtocolError,
};

/// A tile as it travels over the wire. Letters are unicode code points rather
/// than rendered glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTile {
    #[serde(rename = "Letter")]
    pub letter: u32,
    #[serde(rename = "Points")]
    pub points: i64,
}

impl TryFrom<WireTile> for TileFace {
    type Error = ProtocolError;

    fn try_from(value: WireTile) -> Result<Self, Self::Error> {
        let letter = char::from_u32(value.letter).ok_or(ProtocolError::InvalidLetter(value.letter))?;
        Ok(TileFace::new(letter, value.points))
    }
}

pub fn decode_tiles(tiles: &[WireTile]) -> Result<Vec<TileFace>, ProtocolError> {
    tiles.iter().copied().map(TileFace::try_from).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub game_id: GameId,
    pub tiles: Vec<WireTile>,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilesResponse {
    pub tiles: Vec<WireTile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    pub game: GameId,
    pub guess: String,
}

/// Reply to a guess. A rejection may carry nothing but `valid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessResponse {
    pub valid: bool,
    #[serde(default)]
    pub tiles: Vec<WireTile>,
    #[serde(default)]
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndResponse {
    pub tiles: Vec<WireTile>,
    pub points: i64,
}
