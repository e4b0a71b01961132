use serde::{Deserialize, Serialize};

/// Roster state as the remote API reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Bench,
    Field,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Status::Bench => "bench",
            Status::Field => "field",
            Status::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub status: Status,
    pub image_url: String,
    #[serde(default)]
    pub team_id: Option<i64>,
}

/// Read-only; only ever seen embedded in a single-player response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub player: Player,
    #[serde(default)]
    pub team: Option<Team>,
}

/// Raw form fields for a create. Strings pass through exactly as typed; the
/// remote API owns validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}

// The remote API wraps every payload in `{ data: { ... } }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub player: PlayerDetail,
}
