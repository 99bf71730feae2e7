use grid_snake::config::{BOARD_SIZE, GridSize};
use grid_snake::fruit::Fruit;
use grid_snake::game::{DeathReason, GamePhase, GameState};
use grid_snake::input::Direction;
use grid_snake::snake::{Position, Snake};

#[test]
fn stepwise_fruit_collection_turn_and_wall_collision() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 6,
            height: 4,
        },
        42,
    );
    state.snake = Snake::from_segments(
        vec![
            Position { row: 1, col: 1 },
            Position { row: 1, col: 0 },
            Position { row: 0, col: 0 },
        ],
        Direction::Right,
    );
    state.fruit = Fruit::at(Position { row: 1, col: 2 });
    state.begin();

    state.tick();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position { row: 1, col: 2 });

    // Park the fruit out of the way so the rest of the script is
    // independent of the seeded relocation.
    state.fruit = Fruit::at(Position { row: 3, col: 0 });

    // The turn request lands mid-tick: the very next tick still moves
    // right, the one after moves up.
    state.request_direction(Direction::Up);
    state.tick();
    assert_eq!(state.snake.head(), Position { row: 1, col: 3 });
    assert_eq!(state.snake.len(), 4);

    state.tick();
    assert_eq!(state.snake.head(), Position { row: 0, col: 3 });

    state.tick();
    assert_eq!(state.phase, GamePhase::Ended);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.snake.head(), Position { row: 0, col: 3 });
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.score, 1);
}

#[test]
fn straight_run_on_the_standard_board_ends_at_the_right_wall() {
    let mut state = GameState::new_with_seed(BOARD_SIZE, 5);
    state.begin();

    // Never turning: the snake crosses the first fruit at (8,16) and
    // runs into the right wall.
    for _ in 0..200 {
        state.tick();
        assert!(state.snake.len() >= 3);
        assert_eq!(state.snake.len(), 3 + state.score as usize);
        if state.phase == GamePhase::Ended {
            break;
        }
    }

    assert_eq!(state.phase, GamePhase::Ended);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.snake.head(), Position { row: 8, col: 19 });
    assert!(state.score >= 1);
}
