use crate::{
    cell::{Cell, CellId},
    config::GameConfig,
    error::{Error, Result},
    grid::{associate_cells, generate_cells, Grid},
    moves::{GameMove, MoveKind, MoveRequest},
    record::GameRecord,
    view::{derive_views, CellState, CellView},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};
use uuid::Uuid;

/// Identity of a game, shared by every game derived from it by a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    Open,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and lost games accept no further moves.
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "OPEN",
            Self::Won => "WON",
            Self::Lost => "LOST",
        })
    }
}

/// A game as a value: an immutable grid, the moves made so far and the views
/// they produce.
///
/// Moves never change a game in place, they return the next game with the
/// same [`GameId`] and one more entry in the log. The grid is shared between
/// all of those games.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    grid: Arc<Grid>,
    initial: Option<Arc<[CellState]>>,
    moves: Vec<GameMove>,
    views: Vec<CellView>,
}

impl Game {
    /// Generates a random layout with at least one mine.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let cells = generate_cells(
            config.cell_count()?,
            config.mine_probability,
            &mut config.rng(),
        )?;
        Self::from_cells(config.rows, config.columns, cells)
    }

    /// Starts a game on a given row-major layout.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self> {
        let grid = associate_cells(cells, rows, columns)?;
        Self::assemble(GameId::new(), Arc::new(grid), None, Vec::new())
    }

    /// Starts a game whose cells are already in the given states.
    pub fn from_views<I>(rows: usize, columns: usize, views: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Cell, CellState)>,
    {
        let (cells, states): (Vec<_>, Vec<_>) = views.into_iter().unzip();
        let grid = associate_cells(cells, rows, columns)?;
        Self::assemble(GameId::new(), Arc::new(grid), Some(states.into()), Vec::new())
    }

    /// Rebuilds a stored game by replaying its move log over its layout.
    pub fn from_record(record: GameRecord) -> Result<Self> {
        let GameRecord {
            id,
            rows,
            columns,
            cells,
            moves,
            views,
        } = record;
        let grid = associate_cells(cells.into_iter().map(Cell::from).collect(), rows, columns)?;
        Self::assemble(id, Arc::new(grid), views.map(Into::into), moves)
    }

    fn assemble(
        id: GameId,
        grid: Arc<Grid>,
        initial: Option<Arc<[CellState]>>,
        moves: Vec<GameMove>,
    ) -> Result<Self> {
        let views = derive_views(&grid, initial.as_deref(), &moves)?;
        Ok(Self {
            id,
            grid,
            initial,
            moves,
            views,
        })
    }

    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            id: self.id,
            rows: self.rows(),
            columns: self.columns(),
            cells: self.grid.cells().iter().map(Into::into).collect(),
            moves: self.moves.clone(),
            views: self.initial.as_deref().map(<[CellState]>::to_vec),
        }
    }

    pub fn open(&self, cell_id: CellId) -> Result<Self> {
        self.apply_move(GameMove::new(MoveKind::Open, cell_id))
    }

    pub fn flag(&self, cell_id: CellId) -> Result<Self> {
        self.apply_move(GameMove::new(MoveKind::Flag, cell_id))
    }

    pub fn unflag(&self, cell_id: CellId) -> Result<Self> {
        self.apply_move(GameMove::new(MoveKind::Unflag, cell_id))
    }

    pub fn open_coordinates(&self, column: usize, row: usize) -> Result<Self> {
        self.apply(MoveRequest::new(MoveKind::Open, column, row))
    }

    pub fn flag_coordinates(&self, column: usize, row: usize) -> Result<Self> {
        self.apply(MoveRequest::new(MoveKind::Flag, column, row))
    }

    pub fn unflag_coordinates(&self, column: usize, row: usize) -> Result<Self> {
        self.apply(MoveRequest::new(MoveKind::Unflag, column, row))
    }

    pub fn apply(&self, request: MoveRequest) -> Result<Self> {
        let cell = self.find_cell(request.column, request.row)?;
        self.apply_move(GameMove::new(request.kind, cell.id()))
    }

    /// Returns the game that follows `game_move`.
    ///
    /// Fails without touching the log when the cell is unknown or the game is
    /// already won or lost.
    pub fn apply_move(&self, game_move: GameMove) -> Result<Self> {
        if self.grid.index_of(game_move.cell_id).is_none() {
            return Err(Error::UnknownCell(game_move.cell_id));
        }

        let status = self.game_status();
        if status.is_complete() {
            return Err(Error::GameComplete {
                id: self.id,
                status,
            });
        }

        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(game_move);

        let next = Self::assemble(self.id, Arc::clone(&self.grid), self.initial.clone(), moves)?;
        log::debug!(
            "game {} applied {} to cell {}",
            self.id,
            game_move.kind,
            game_move.cell_id
        );

        let next_status = next.game_status();
        if next_status.is_complete() {
            log::info!(
                "game {} is {} after {} moves",
                next.id,
                next_status,
                next.moves.len()
            );
        }

        Ok(next)
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn moves(&self) -> &[GameMove] {
        &self.moves
    }

    pub fn views(&self) -> &[CellView] {
        &self.views
    }

    pub fn mine_total(&self) -> usize {
        self.grid.mine_total()
    }

    pub fn find_cell(&self, column: usize, row: usize) -> Result<&Cell> {
        let index = self.grid.index_from_coord(column, row)?;
        Ok(&self.grid.cells()[index])
    }

    pub fn view(&self, column: usize, row: usize) -> Result<&CellView> {
        let index = self.grid.index_from_coord(column, row)?;
        Ok(&self.views[index])
    }

    /// Status character of every cell, row-major.
    pub fn board(&self) -> Vec<char> {
        self.views.iter().map(CellView::status).collect()
    }

    pub fn board_rows(&self) -> Vec<Vec<char>> {
        self.views
            .chunks(self.columns())
            .map(|row| row.iter().map(CellView::status).collect())
            .collect()
    }

    /// Lost once a mine is open, won once every other cell is open.
    pub fn game_status(&self) -> GameStatus {
        if self.views.iter().any(|view| view.is_open() && view.is_mine()) {
            GameStatus::Lost
        } else if self.views.iter().all(|view| view.is_open() != view.is_mine()) {
            GameStatus::Won
        } else {
            GameStatus::Open
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = format!("{}+", "+---".repeat(self.columns()));

        writeln!(f, "{rule}")?;
        for row in self.board_rows() {
            for status in row {
                write!(f, "| {status} ")?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{rule}")
    }
}
