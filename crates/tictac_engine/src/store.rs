//! In-memory registry of live games.

use crate::game::{Game, GameSnapshot, MoveOutcome};
use crate::types::{GameId, Player};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, info, instrument};

/// Lookup of an id that is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Game not found")]
pub struct GameNotFound {
    id: String,
}

impl GameNotFound {
    /// The id that was looked up.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Shared reference to one registered game.
///
/// Every operation holds the game's lock for its duration, so moves on the
/// same game are serialized and snapshots never observe a half-applied move.
#[derive(Debug, Clone)]
pub struct GameHandle {
    id: GameId,
    game: Arc<Mutex<Game>>,
}

impl GameHandle {
    fn new(game: Game) -> Self {
        Self {
            id: game.id().clone(),
            game: Arc::new(Mutex::new(game)),
        }
    }

    // A game is only written after validation passes, so a poisoned lock
    // still guards a consistent state.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Game identifier.
    pub fn id(&self) -> &GameId {
        &self.id
    }

    /// Attempts a move; see [`Game::make_move`].
    pub fn make_move(&self, row: i64, col: i64) -> MoveOutcome {
        self.lock().make_move(row, col)
    }

    /// Returns `true` if `player` holds a complete line.
    pub fn check_win(&self, player: Player) -> bool {
        self.lock().check_win(player)
    }

    /// Copies the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }
}

/// Owns all live games.
///
/// Cloning is cheap and yields a handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<RwLock<HashMap<GameId, GameHandle>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self::default()
    }

    /// Creates and registers a new game.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> GameHandle {
        let handle = GameHandle::new(Game::new(GameId::generate()));
        let count = {
            let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
            games.insert(handle.id().clone(), handle.clone());
            games.len()
        };
        info!(game_id = %handle.id(), count, "Created game");
        handle
    }

    /// Looks up a game by exact id.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: &str) -> Result<GameHandle, GameNotFound> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        games.get(id).cloned().ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            GameNotFound { id: id.to_string() }
        })
    }

    /// Snapshots every registered game, in no particular order.
    #[instrument(skip(self))]
    pub fn list_games(&self) -> Vec<GameSnapshot> {
        // Release the registry before taking per-game locks.
        let handles: Vec<GameHandle> = {
            let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
            games.values().cloned().collect()
        };
        debug!(count = handles.len(), "Listed games");
        handles.iter().map(GameHandle::snapshot).collect()
    }

    /// Number of registered games.
    pub fn len(&self) -> usize {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no games are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registers_game() {
        let store = GameStore::new();
        assert!(store.is_empty());
        let handle = store.create_game();
        assert_eq!(store.len(), 1);
        let found = store.get_game(handle.id().as_str()).unwrap();
        assert_eq!(found.id(), handle.id());
    }

    #[test]
    fn test_handles_share_state() {
        let store = GameStore::new();
        let handle = store.create_game();
        handle.make_move(0, 0);
        let again = store.get_game(handle.id().as_str()).unwrap();
        assert_eq!(again.snapshot().moves(), 1);
    }

    #[test]
    fn test_missing_game() {
        let store = GameStore::new();
        store.create_game();
        let err = store.get_game("nope").unwrap_err();
        assert_eq!(err.id(), "nope");
        assert_eq!(err.to_string(), "Game not found");
    }

    #[test]
    fn test_clone_shares_registry() {
        let store = GameStore::new();
        let other = store.clone();
        other.create_game();
        assert_eq!(store.len(), 1);
    }
}
