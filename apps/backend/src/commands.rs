//! Enumerated command surface.
//!
//! Every public operation is one `Command` variant; `dispatch` routes it
//! to the owning service. Used by `POST /api/commands` and in tests.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{DeletionCandidate, Game, GameReport, Player};
use crate::errors::domain::DomainError;
use crate::services::{DeletedGame, GameData, RecordedPlay};
use crate::state::app_state::AppState;

/// A jersey number as sent by a client: JSON number or text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Int(i64),
    Text(String),
}

impl Default for NumberInput {
    fn default() -> Self {
        NumberInput::Text(String::new())
    }
}

impl NumberInput {
    pub fn as_text(&self) -> String {
        match self {
            NumberInput::Int(n) => n.to_string(),
            NumberInput::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    ListPlayers,
    #[serde(rename_all = "camelCase")]
    AddPlayer {
        #[serde(default)]
        number: NumberInput,
        #[serde(default)]
        name: String,
    },
    #[serde(rename_all = "camelCase")]
    CreateGame {
        #[serde(default)]
        name: String,
    },
    ListGames,
    /// Without `confirm` only the matching candidate is returned.
    #[serde(rename_all = "camelCase")]
    DeleteGame {
        #[serde(default)]
        id_or_name: String,
        #[serde(default)]
        confirm: bool,
    },
    #[serde(rename_all = "camelCase")]
    RecordPlay {
        #[serde(default)]
        player: String,
        #[serde(default)]
        play_type: String,
        #[serde(default)]
        game_id: String,
    },
    #[serde(rename_all = "camelCase")]
    DeletePlay {
        #[serde(default)]
        play_id: String,
        #[serde(default)]
        game_id: String,
    },
    #[serde(rename_all = "camelCase")]
    ComputeStats {
        #[serde(default)]
        game_id: String,
    },
    #[serde(rename_all = "camelCase")]
    GetInitialGameData {
        #[serde(default)]
        game_id: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListPlayers => "listPlayers",
            Command::AddPlayer { .. } => "addPlayer",
            Command::CreateGame { .. } => "createGame",
            Command::ListGames => "listGames",
            Command::DeleteGame { .. } => "deleteGame",
            Command::RecordPlay { .. } => "recordPlay",
            Command::DeletePlay { .. } => "deletePlay",
            Command::ComputeStats { .. } => "computeStats",
            Command::GetInitialGameData { .. } => "getInitialGameData",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum CommandOutput {
    Players(Vec<Player>),
    PlayerAdded(Player),
    GameCreated(Game),
    Games(Vec<Game>),
    DeletionCandidate(DeletionCandidate),
    GameDeleted(DeletedGame),
    PlayRecorded(RecordedPlay),
    PlayDeleted { deleted: bool },
    Stats(GameReport),
    GameData(GameData),
}

pub async fn dispatch(state: &AppState, command: Command) -> Result<CommandOutput, DomainError> {
    debug!(op = command.name(), "Dispatching command");

    match command {
        Command::ListPlayers => state.roster().list_players().await.map(CommandOutput::Players),
        Command::AddPlayer { number, name } => state
            .roster()
            .add_player(&number.as_text(), &name)
            .await
            .map(CommandOutput::PlayerAdded),
        Command::CreateGame { name } => state
            .games()
            .create_game(&name)
            .await
            .map(CommandOutput::GameCreated),
        Command::ListGames => state.games().list_games().await.map(CommandOutput::Games),
        Command::DeleteGame {
            id_or_name,
            confirm,
        } => {
            let games = state.games();
            let candidate = games.find_game(&id_or_name).await?;
            if confirm {
                games
                    .confirm_delete(&candidate)
                    .await
                    .map(CommandOutput::GameDeleted)
            } else {
                Ok(CommandOutput::DeletionCandidate(candidate))
            }
        }
        Command::RecordPlay {
            player,
            play_type,
            game_id,
        } => state
            .plays()
            .record_play(&player, &play_type, &game_id)
            .await
            .map(CommandOutput::PlayRecorded),
        Command::DeletePlay { play_id, game_id } => state
            .plays()
            .delete_play(&play_id, &game_id)
            .await
            .map(|deleted| CommandOutput::PlayDeleted { deleted }),
        Command::ComputeStats { game_id } => state
            .stats()
            .compute_stats(&game_id)
            .await
            .map(CommandOutput::Stats),
        Command::GetInitialGameData { game_id } => state
            .plays()
            .initial_game_data(&game_id)
            .await
            .map(CommandOutput::GameData),
    }
}
