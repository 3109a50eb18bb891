use rand::Rng;

use crate::Cell;
use crate::board::Board;
use crate::config::Palette;
use crate::error::Result;
use crate::render::{Draw, Renderer};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

const DIRECTIONS: [Direction; 4] = [Up, Down, Left, Right];

impl Direction {
    /// Unit step in grid cells, y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Direction {
        DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())]
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_tail: Option<Cell> },
    /// The head ran into the body; the snake restarted at `at`.
    Reset { at: Cell },
}

pub struct Snake {
    positions: Vec<Cell>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    last: Option<Cell>,
}

impl Snake {
    pub fn new(pos: Cell, direction: Direction) -> Self {
        Snake { positions: vec![pos], length: 1, direction, next_direction: None, last: None }
    }

    #[cfg(test)]
    pub fn from_body(body: &[Cell], length: usize, direction: Direction) -> Self {
        Snake { positions: body.to_vec(), length, direction, next_direction: None, last: None }
    }

    /// Occupied cells, head first.
    pub fn body(&self) -> &[Cell] {
        &self.positions
    }

    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell vacated by the tail on the last move, if any.
    pub fn last(&self) -> Option<Cell> {
        self.last
    }

    /// Buffers a turn for the next move. Turning back onto the current
    /// direction is ignored.
    pub fn request_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }

        self.next_direction = Some(new_direction);
        true
    }

    pub fn update_direction(&mut self) {
        if let Some(dir) = self.next_direction.take() {
            self.direction = dir;
        }
    }

    pub fn move_step(&mut self, board: &Board, rng: &mut impl Rng) -> MoveResult {
        self.update_direction();

        let old_head = self.head();
        let new_head = board.step(old_head, self.direction);

        if self.collides(new_head) {
            self.reset(old_head, rng);
            return Reset { at: old_head };
        }

        self.positions.insert(0, new_head);
        self.last = if self.positions.len() > self.length {
            self.positions.pop()
        } else {
            None
        };

        Moved { new_head, old_tail: self.last }
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn reset(&mut self, at: Cell, rng: &mut impl Rng) {
        self.positions.clear();
        self.positions.push(at);
        self.length = 1;
        self.direction = Direction::random(rng);
        self.next_direction = None;
        self.last = None;
    }

    /// Paints every segment. Used after the board has been cleared.
    pub fn draw_full<R: Renderer>(&self, renderer: &mut R, palette: &Palette) -> Result<()> {
        for pos in self.positions.iter().rev() {
            renderer.draw_cell(*pos, palette.snake, true)?;
        }

        Ok(())
    }

    // The head and the segment right behind it can't be hit by the next move
    fn collides(&self, cell: Cell) -> bool {
        self.length > 2 && self.positions.iter().skip(2).any(|pos| *pos == cell)
    }
}

impl Draw for Snake {
    /// Incremental draw: erase the vacated tail, paint the new head.
    fn draw<R: Renderer>(&self, renderer: &mut R, palette: &Palette) -> Result<()> {
        if let Some(old_tail) = self.last() {
            renderer.draw_cell(old_tail, palette.background, false)?;
        }

        renderer.draw_cell(self.head(), palette.snake, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::Recorder;
    use rand::{rngs::StdRng, SeedableRng};

    fn board() -> Board {
        Board::new(640, 480, 20)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn opposites_pair_up() {
        for dir in DIRECTIONS.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
            let (dx, dy) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
        }
    }

    #[test]
    fn reverse_request_is_ignored() {
        let mut snake = Snake::new((100, 100), Right);

        assert!(!snake.request_direction(Left));
        assert_eq!(snake.next_direction, None);

        snake.move_step(&board(), &mut rng());
        assert_eq!(snake.direction(), Right);
    }

    #[test]
    fn pending_direction_applies_on_next_move() {
        let mut snake = Snake::new((100, 100), Right);

        assert!(snake.request_direction(Up));
        assert!(snake.request_direction(Down));
        assert_eq!(snake.direction(), Right);

        let res = snake.move_step(&board(), &mut rng());
        assert_eq!(snake.direction(), Down);
        assert_eq!(snake.next_direction, None);
        assert_eq!(res, Moved { new_head: (100, 120), old_tail: Some((100, 100)) });
    }

    #[test]
    fn move_drops_tail_past_target_length() {
        let mut snake = Snake::from_body(&[(100, 100), (80, 100), (60, 100)], 3, Right);

        let res = snake.move_step(&board(), &mut rng());

        assert_eq!(res, Moved { new_head: (120, 100), old_tail: Some((60, 100)) });
        assert_eq!(snake.body(), &[(120, 100), (100, 100), (80, 100)]);
        assert_eq!(snake.last(), Some((60, 100)));
    }

    #[test]
    fn growing_snake_keeps_its_tail() {
        let mut snake = Snake::new((100, 100), Right);
        snake.grow();
        snake.grow();

        snake.move_step(&board(), &mut rng());
        assert_eq!(snake.last(), None);
        snake.move_step(&board(), &mut rng());
        assert_eq!(snake.last(), None);
        assert_eq!(snake.body(), &[(140, 100), (120, 100), (100, 100)]);

        snake.move_step(&board(), &mut rng());
        assert_eq!(snake.last(), Some((100, 100)));
        assert!(snake.body().len() <= snake.length());
    }

    #[test]
    fn head_wraps_across_the_right_edge() {
        let mut snake = Snake::from_body(&[(620, 200), (600, 200)], 2, Right);

        snake.move_step(&board(), &mut rng());
        assert_eq!(snake.head(), (0, 200));
    }

    #[test]
    fn body_never_exceeds_length() {
        let b = board();
        let mut r = rng();
        let mut snake = Snake::new(b.center(), Right);

        for i in 0..200 {
            if i % 7 == 0 {
                snake.grow();
            }
            if i % 5 == 0 {
                snake.request_direction(Direction::random(&mut r));
            }
            snake.move_step(&b, &mut r);
            assert!(snake.body().len() <= snake.length());
        }
    }

    #[test]
    fn collision_with_body_resets_at_head() {
        let body = [(100, 100), (100, 80), (120, 80), (120, 100), (120, 120)];
        let mut snake = Snake::from_body(&body, 5, Right);
        snake.last = Some((140, 120));

        let res = snake.move_step(&board(), &mut rng());

        assert_eq!(res, Reset { at: (100, 100) });
        assert_eq!(snake.body(), &[(100, 100)]);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.next_direction, None);
        assert_eq!(snake.last(), None);
    }

    #[test]
    fn short_snakes_skip_the_collision_check() {
        // Only reachable by wrapping on a two-column board
        let narrow = Board::new(40, 100, 20);
        let mut snake = Snake::from_body(&[(0, 20), (20, 20)], 2, Right);

        let res = snake.move_step(&narrow, &mut rng());
        assert_eq!(res, Moved { new_head: (20, 20), old_tail: Some((20, 20)) });
    }

    #[test]
    fn draw_erases_tail_then_paints_head() {
        let palette = Palette::default();
        let mut snake = Snake::from_body(&[(100, 100), (80, 100)], 2, Right);
        snake.move_step(&board(), &mut rng());

        let mut rec = Recorder::default();
        snake.draw(&mut rec, &palette).unwrap();

        assert_eq!(rec.cells(), vec![
            ((80, 100), palette.background, false),
            ((120, 100), palette.snake, true),
        ]);
    }

    #[test]
    fn full_draw_paints_every_segment() {
        let palette = Palette::default();
        let snake = Snake::from_body(&[(100, 100), (80, 100), (60, 100)], 3, Right);

        let mut rec = Recorder::default();
        snake.draw_full(&mut rec, &palette).unwrap();

        let cells: Vec<Cell> = rec.cells().into_iter().map(|(cell, _, _)| cell).collect();
        assert_eq!(cells, vec![(60, 100), (80, 100), (100, 100)]);
    }
}
