use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::fruit::Fruit;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Coarse game lifecycle phase.
///
/// `Starting` waits for the first begin input, `Playing` is the live
/// simulation, `Ended` is terminal: no transition leaves it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    Starting,
    Playing,
    Ended,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Fruit,
    pub score: u32,
    pub phase: GamePhase,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates the initial state on `bounds` with an OS-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        // Seed body spans the columns just left of board center, head
        // rightmost, already pointed in the travel direction.
        let head = Position {
            row: i32::from(bounds.height) / 2,
            col: i32::from(bounds.width) / 2 - 3,
        };

        Self {
            snake: Snake::new(head, Direction::Right),
            fruit: Fruit::initial(bounds),
            score: 0,
            phase: GamePhase::Starting,
            death_reason: None,
            bounds,
            rng,
        }
    }

    /// Acknowledges the begin input: `Starting` becomes `Playing`.
    ///
    /// A no-op from every other phase; nothing transitions back into
    /// `Starting` or out of `Ended`.
    pub fn begin(&mut self) {
        if self.phase == GamePhase::Starting {
            self.phase = GamePhase::Playing;
        }
    }

    /// Forwards a directional key press to the snake's pending buffer.
    ///
    /// Only the pending direction can change here; reversal requests
    /// are dropped and the phase and board are never touched.
    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.buffer_direction(direction);
    }

    /// Advances one timer tick: a simulation step, then adoption of the
    /// pending direction.
    ///
    /// Adoption strictly follows the step, so the motion just taken used
    /// the direction committed on the previous tick. Outside `Playing`
    /// this is a no-op.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }

        let ended = self.step();
        if !ended {
            self.snake.adopt_pending();
        }
    }

    /// Advances the simulation by exactly one step.
    ///
    /// Returns true when the step ended the game. On a collision the
    /// phase flips to `Ended` and everything else keeps its pre-step
    /// value, so the final render shows the last valid board.
    pub fn step(&mut self) -> bool {
        let new_head = self.snake.next_head();

        if !new_head.is_within_bounds(self.bounds) {
            self.end_game(DeathReason::WallCollision);
            return true;
        }

        if self.snake.collides_with_body(new_head) {
            self.end_game(DeathReason::SelfCollision);
            return true;
        }

        let ate_fruit = new_head == self.fruit.position;
        self.snake.advance(new_head, ate_fruit);

        if ate_fruit {
            self.score += 1;
            self.fruit = Fruit::relocate(&mut self.rng, self.bounds);
        }

        false
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    fn end_game(&mut self, reason: DeathReason) {
        self.phase = GamePhase::Ended;
        self.death_reason = Some(reason);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::config::GridSize;
    use crate::fruit::Fruit;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GamePhase, GameState};

    const TEST_BOUNDS: GridSize = GridSize {
        width: 20,
        height: 16,
    };

    fn playing_state(segments: Vec<Position>, direction: Direction) -> GameState {
        let mut state = GameState::new_with_seed(TEST_BOUNDS, 1);
        state.snake = Snake::from_segments(segments, direction);
        state.begin();
        state
    }

    /// A hairpin body: head at (5,5) with the return row directly below.
    fn loop_segments() -> Vec<Position> {
        vec![
            Position { row: 5, col: 5 },
            Position { row: 5, col: 6 },
            Position { row: 5, col: 7 },
            Position { row: 5, col: 8 },
            Position { row: 6, col: 8 },
            Position { row: 6, col: 7 },
            Position { row: 6, col: 6 },
            Position { row: 6, col: 5 },
        ]
    }

    #[test]
    fn new_game_waits_in_starting_phase() {
        let state = GameState::new_with_seed(TEST_BOUNDS, 7);

        assert_eq!(state.phase, GamePhase::Starting);
        assert_eq!(state.score, 0);
        assert_eq!(state.death_reason, None);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position { row: 8, col: 7 });
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.pending_direction(), Direction::Right);

        // Fruit starts at the fixed center offset, off the snake.
        assert_eq!(state.fruit.position, Position { row: 8, col: 16 });
        assert!(!state.snake.occupies(state.fruit.position));

        // All seed segments are distinct.
        let distinct: HashSet<Position> = state.snake.segments().copied().collect();
        assert_eq!(distinct.len(), state.snake.len());
    }

    #[test]
    fn begin_only_transitions_out_of_starting() {
        let mut state = GameState::new_with_seed(TEST_BOUNDS, 7);

        state.begin();
        assert_eq!(state.phase, GamePhase::Playing);

        // Idempotent from Playing.
        state.begin();
        assert_eq!(state.phase, GamePhase::Playing);

        state.phase = GamePhase::Ended;
        state.begin();
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn ticks_are_ignored_until_the_game_begins() {
        let mut state = GameState::new_with_seed(TEST_BOUNDS, 7);
        let head_before = state.snake.head();

        state.tick();
        state.tick();

        assert_eq!(state.phase, GamePhase::Starting);
        assert_eq!(state.snake.head(), head_before);
    }

    #[test]
    fn eating_fruit_grows_snake_and_scores_in_one_step() {
        let mut state = playing_state(
            vec![
                Position { row: 1, col: 1 },
                Position { row: 1, col: 0 },
                Position { row: 0, col: 0 },
            ],
            Direction::Right,
        );
        state.fruit = Fruit::at(Position { row: 1, col: 2 });

        state.tick();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.snake.head(), Position { row: 1, col: 2 });
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 1);
        // The fruit moved somewhere on the board (possibly under the
        // snake; relocation performs no occupancy exclusion).
        assert!(state.fruit.position.is_within_bounds(state.bounds()));

        // A step without fruit leaves both length and score alone.
        state.fruit = Fruit::at(Position { row: 15, col: 19 });
        state.tick();
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn moving_up_out_of_the_board_ends_the_game() {
        let mut state = playing_state(
            vec![
                Position { row: 0, col: 5 },
                Position { row: 1, col: 5 },
                Position { row: 2, col: 5 },
            ],
            Direction::Up,
        );

        state.tick();

        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
        // The colliding head is never committed.
        assert_eq!(state.snake.head(), Position { row: 0, col: 5 });
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn biting_the_body_beyond_the_exclusion_window_ends_the_game() {
        // Moving down from (5,5) enters (6,5), the 8th body cell.
        let mut state = playing_state(loop_segments(), Direction::Down);

        state.tick();

        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
        assert_eq!(state.snake.head(), Position { row: 5, col: 5 });
        assert_eq!(state.snake.len(), 8);
    }

    #[test]
    fn direction_change_takes_effect_on_the_following_tick() {
        let mut state = playing_state(
            vec![
                Position { row: 5, col: 5 },
                Position { row: 5, col: 4 },
                Position { row: 5, col: 3 },
            ],
            Direction::Right,
        );

        state.request_direction(Direction::Up);

        // The tick the request arrived in still moves right.
        state.tick();
        assert_eq!(state.snake.head(), Position { row: 5, col: 6 });

        // The next tick moves up.
        state.tick();
        assert_eq!(state.snake.head(), Position { row: 4, col: 6 });
    }

    #[test]
    fn reversal_request_leaves_motion_unchanged() {
        let mut state = playing_state(
            vec![
                Position { row: 5, col: 5 },
                Position { row: 5, col: 4 },
                Position { row: 5, col: 3 },
            ],
            Direction::Right,
        );

        state.request_direction(Direction::Left);
        assert_eq!(state.snake.pending_direction(), Direction::Right);

        state.tick();
        assert_eq!(state.snake.head(), Position { row: 5, col: 6 });
        state.tick();
        assert_eq!(state.snake.head(), Position { row: 5, col: 7 });
    }

    #[test]
    fn collision_step_discards_fruit_and_score_changes() {
        // The target cell holds both a body segment and the fruit; the
        // collision wins and the fruit/score stay untouched.
        let mut state = playing_state(loop_segments(), Direction::Down);
        state.fruit = Fruit::at(Position { row: 6, col: 5 });

        state.tick();

        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.score, 0);
        assert_eq!(state.fruit.position, Position { row: 6, col: 5 });
        assert_eq!(state.snake.len(), 8);
    }

    #[test]
    fn ended_phase_is_terminal() {
        let mut state = playing_state(
            vec![
                Position { row: 0, col: 5 },
                Position { row: 1, col: 5 },
                Position { row: 2, col: 5 },
            ],
            Direction::Up,
        );

        state.tick();
        assert_eq!(state.phase, GamePhase::Ended);

        let snapshot_head = state.snake.head();
        state.tick();
        state.begin();
        state.tick();

        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.snake.head(), snapshot_head);
    }

    #[test]
    fn snake_never_shrinks_below_seed_length() {
        let mut state = GameState::new_with_seed(TEST_BOUNDS, 42);
        state.begin();

        // Run straight into the right wall, eating whatever fruit the
        // seed puts in the way.
        for _ in 0..100 {
            state.tick();
            assert!(state.snake.len() >= 3);
            if state.phase == GamePhase::Ended {
                break;
            }
        }

        assert_eq!(state.phase, GamePhase::Ended);
    }
}
