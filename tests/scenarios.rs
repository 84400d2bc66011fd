use minereplay::{
    neighbors_chain, Axis, Cell, CellId, CellRecord, Error, Game, GameConfig, GameId, GameMove,
    GameRecord, GameStatus, Location, MoveKind,
};

fn cells(mines: &[bool]) -> Vec<Cell> {
    mines.iter().copied().map(Cell::new).collect()
}

fn single_mine_four_by_four() -> Game {
    let mut mines = [false; 16];
    mines[1] = true;
    Game::from_cells(4, 4, cells(&mines)).unwrap()
}

fn random_game(seed: u64) -> Game {
    let config = GameConfig::builder()
        .rows(8)
        .columns(10)
        .mine_probability(0.15)
        .seed(seed)
        .build();
    Game::new(&config).unwrap()
}

#[test]
fn single_mine_board_is_won_once_every_safe_cell_is_open() {
    let game = single_mine_four_by_four();

    // (0, 0) touches the mine, so it opens alone
    let game = game.open_coordinates(0, 0).unwrap();
    assert_eq!(game.board().iter().filter(|&&status| status != ' ').count(), 1);
    assert_eq!(game.board()[0], '1');
    assert_eq!(game.game_status(), GameStatus::Open);

    // the far corner floods everything reachable through empty cells
    let game = game.open_coordinates(3, 3).unwrap();
    #[rustfmt::skip]
    let expected = vec![
        '1', ' ', '1', '0',
        '1', '1', '1', '0',
        '0', '0', '0', '0',
        '0', '0', '0', '0',
    ];
    assert_eq!(game.board(), expected);
    assert_eq!(game.game_status(), GameStatus::Won);
}

#[test]
fn only_safe_cell_shows_three() {
    let game = Game::from_cells(2, 2, cells(&[false, true, true, true])).unwrap();
    let next = game.open(game.cells()[0].id()).unwrap();

    assert_eq!(next.board(), vec!['3', ' ', ' ', ' ']);
    assert_eq!(next.game_status(), GameStatus::Open);
}

#[test]
fn column_overflow_fails_before_any_move() {
    let game = single_mine_four_by_four();
    assert_eq!(
        game.open_coordinates(4, 0).unwrap_err(),
        Error::OutOfBounds {
            axis: Axis::Columns,
            value: 4
        }
    );
    assert!(game.moves().is_empty());
}

#[test]
fn flag_then_unflag_restores_the_board() {
    let game = single_mine_four_by_four();
    let restored = game
        .flag_coordinates(0, 0)
        .unwrap()
        .unflag_coordinates(0, 0)
        .unwrap();

    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.moves().len(), 2);
}

#[test]
fn adjacency_is_symmetric_on_generated_games() {
    for seed in 0..5 {
        let game = random_game(seed);
        let grid = game.grid();
        for (index, cell) in game.cells().iter().enumerate() {
            for location in Location::ALL {
                if let Some(other) = cell.neighbor(location) {
                    assert_eq!(game.cells()[other].neighbor(location.opposite()), Some(index));
                }
            }
            let mines = grid
                .neighbors(index)
                .filter(|&neighbor| game.cells()[neighbor].is_mine())
                .count();
            assert_eq!(usize::from(grid.mine_count(index)), mines);
        }
    }
}

#[test]
fn reopening_an_open_cell_changes_nothing() {
    let game = single_mine_four_by_four();
    let once = game.open_coordinates(3, 0).unwrap();
    let twice = once.open_coordinates(3, 0).unwrap();

    assert_eq!(once.board(), twice.board());
    assert_eq!(once.game_status(), twice.game_status());
}

#[test]
fn flood_fill_reveals_exactly_the_empty_region() {
    for seed in 0..10 {
        let game = random_game(seed);
        let grid = game.grid();
        let Some(origin) = (0..grid.len()).find(|&index| grid.is_blank(index)) else {
            continue;
        };

        let opened = game.open(game.cells()[origin].id()).unwrap();
        let mut expected = neighbors_chain(grid, origin);
        expected.push(origin);
        expected.sort_unstable();

        let revealed = opened
            .views()
            .iter()
            .filter(|view| view.is_open())
            .map(|view| view.index())
            .collect::<Vec<_>>();
        assert_eq!(revealed, expected);

        for &index in &revealed {
            assert!(!game.cells()[index].is_mine());
            // numbered cells sit on the rim: some neighbor of theirs that is
            // blank must also be revealed
            if !grid.is_blank(index) {
                assert!(grid
                    .neighbors(index)
                    .any(|neighbor| grid.is_blank(neighbor) && revealed.contains(&neighbor)));
            }
        }
        assert_ne!(opened.game_status(), GameStatus::Lost);
    }
}

#[test]
fn replaying_a_record_is_deterministic() {
    let mut current = random_game(21);
    for (column, row) in [(0, 0), (9, 7), (4, 3), (2, 6)] {
        current = match current.flag_coordinates(column, row) {
            Ok(next) => next,
            Err(_) => break,
        };
        current = match current.open_coordinates(row, column % 8) {
            Ok(next) => next,
            Err(_) => break,
        };
    }

    let json = current.to_record().to_json().unwrap();
    let first = Game::from_record(GameRecord::from_json(&json).unwrap()).unwrap();
    let second = Game::from_record(GameRecord::from_json(&json).unwrap()).unwrap();

    assert_eq!(first.id(), current.id());
    assert_eq!(first.board(), current.board());
    assert_eq!(first.board(), second.board());
    assert_eq!(first.game_status(), second.game_status());
    assert_eq!(first.moves(), current.moves());
}

#[test]
fn records_with_unknown_cells_do_not_replay() {
    let game = single_mine_four_by_four();
    let mut record = game.to_record();
    let stranger = CellId::new();
    record.moves.push(GameMove::new(MoveKind::Open, stranger));

    assert_eq!(
        Game::from_record(record).unwrap_err(),
        Error::UnknownCell(stranger)
    );
}

#[test]
fn records_with_impossible_dimensions_do_not_replay() {
    let record = GameRecord {
        id: GameId::new(),
        rows: 1 << (usize::BITS - 1),
        columns: 2,
        cells: Vec::new(),
        moves: Vec::new(),
        views: None,
    };

    assert_eq!(
        Game::from_record(record).unwrap_err(),
        Error::GridTooLarge {
            rows: 1 << (usize::BITS - 1),
            columns: 2
        }
    );
}

#[test]
fn records_with_repeated_cell_ids_do_not_replay() {
    let mut record = Game::from_cells(2, 2, cells(&[false, true, false, true]))
        .unwrap()
        .to_record();
    let shared = record.cells[0].id;
    record.cells[2] = CellRecord {
        id: shared,
        is_mine: false,
    };

    assert_eq!(
        Game::from_record(record).unwrap_err(),
        Error::DuplicateCell(shared)
    );
}

#[test]
fn terminal_status_never_changes() {
    let lost = single_mine_four_by_four().open_coordinates(1, 0).unwrap();
    assert_eq!(lost.game_status(), GameStatus::Lost);

    let won = single_mine_four_by_four()
        .open_coordinates(3, 3)
        .unwrap()
        .open_coordinates(0, 0)
        .unwrap();
    assert_eq!(won.game_status(), GameStatus::Won);

    for game in [lost, won] {
        let status = game.game_status();
        for (column, row) in [(0, 0), (1, 0), (3, 3)] {
            for result in [
                game.open_coordinates(column, row),
                game.flag_coordinates(column, row),
                game.unflag_coordinates(column, row),
            ] {
                assert_eq!(
                    result.unwrap_err(),
                    Error::GameComplete {
                        id: game.id(),
                        status
                    }
                );
            }
        }
        assert_eq!(game.game_status(), status);
    }
}

#[test]
fn record_json_shape() {
    let game = Game::from_cells(1, 2, cells(&[false, true])).unwrap();
    let game = game.flag_coordinates(1, 0).unwrap();
    let json: serde_json::Value = serde_json::from_str(&game.to_record().to_json().unwrap()).unwrap();

    assert_eq!(json["rows"], 1);
    assert_eq!(json["columns"], 2);
    assert_eq!(json["cells"][1]["is_mine"], true);
    assert_eq!(json["moves"][0]["type"], "FLAG");
    assert!(json.get("views").is_none());
    assert_eq!(serde_json::to_value(GameStatus::Won).unwrap(), "WON");
}
