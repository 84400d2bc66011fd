use crate::{
    config::GameConfig,
    error::{Error, Result},
    game::{Game, GameId},
    moves::MoveRequest,
};

/// Keeps games in memory, replacing each with its successor as moves arrive.
#[derive(Debug, Default)]
pub struct MemGameStore {
    games: Vec<Game>,
}

impl MemGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a new game and stores it.
    pub fn create(&mut self, config: &GameConfig) -> Result<&Game> {
        let game = Game::new(config)?;
        log::debug!(
            "created game {} ({}x{}, {} mines)",
            game.id(),
            game.rows(),
            game.columns(),
            game.mine_total()
        );
        self.insert(game)
    }

    /// Stores an already built game, e.g. one replayed from a record.
    ///
    /// A game whose id is already stored goes through [`Self::update_by_id`],
    /// so it must extend the stored move log.
    pub fn insert(&mut self, game: Game) -> Result<&Game> {
        if self.position(game.id()).is_some() {
            return self.update_by_id(game.id(), game);
        }
        self.games.push(game);
        Ok(&self.games[self.games.len() - 1])
    }

    pub fn list(&self) -> &[Game] {
        &self.games
    }

    pub fn find_by_id(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|game| game.id() == id)
    }

    /// Applies `request` to the game stored under `id` and keeps the result.
    ///
    /// With `expected_moves`, the move is only accepted if the stored log still
    /// has that many entries, so a caller acting on an outdated copy is told so
    /// instead of silently racing another writer.
    pub fn add_move_by_id(
        &mut self,
        id: GameId,
        request: MoveRequest,
        expected_moves: Option<usize>,
    ) -> Result<&Game> {
        let current = self.find_by_id(id).ok_or(Error::NoRecord(id))?;

        if let Some(expected) = expected_moves {
            let actual = current.moves().len();
            if expected != actual {
                log::warn!("rejected move on game {id}: expected {expected} moves, found {actual}");
                return Err(Error::StaleMoveLog { expected, actual });
            }
        }

        let next = current
            .apply(request)
            .inspect_err(|err| log::warn!("rejected move on game {id}: {err}"))?;
        self.update_by_id(id, next)
    }

    /// Replaces the game stored under `id` with a newer version of it.
    ///
    /// The new move log has to start with every move already stored; an older
    /// or diverging copy is refused with [`Error::StaleMoveLog`].
    pub fn update_by_id(&mut self, id: GameId, game: Game) -> Result<&Game> {
        let index = self.position(id).ok_or(Error::NoRecord(id))?;
        if game.id() != id {
            return Err(Error::GameIdMismatch {
                expected: id,
                actual: game.id(),
            });
        }

        let stored = self.games[index].moves();
        if !game.moves().starts_with(stored) {
            let (expected, actual) = (stored.len(), game.moves().len());
            log::warn!("rejected update of game {id}: stored {expected} moves, got {actual}");
            return Err(Error::StaleMoveLog { expected, actual });
        }
        self.games[index] = game;
        Ok(&self.games[index])
    }

    fn position(&self, id: GameId) -> Option<usize> {
        self.games.iter().position(|game| game.id() == id)
    }
}
