use crate::types::{BoardSize, Cell, Position};

/// A connected group of same-coloured stones and the empty cells around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub stones: Vec<usize>,
    pub liberties: Vec<usize>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }
}

/// Go board stored as a single vector with a one-cell `Out` border,
/// so neighbour lookups from any playable cell never leave the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    /// North, east, south, west index offsets.
    dir4: [isize; 4],
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        let stride = size.stride() as isize;
        let mut board = Self {
            size,
            dir4: [-stride, 1, stride, -1],
            cells: Vec::new(),
        };
        board.reset();
        board
    }

    /// Rebuilds the grid: `Out` on the border, `Empty` everywhere else.
    pub fn reset(&mut self) {
        let (width, height) = (self.size.width() as usize, self.size.height() as usize);
        self.cells.clear();
        self.cells.reserve(self.size.grid_len());
        for y in 0..height + 2 {
            for x in 0..width + 2 {
                let border = x == 0 || y == 0 || x == width + 1 || y == height + 1;
                self.cells.push(if border { Cell::Out } else { Cell::Empty });
            }
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Grid index of a playable intersection, `None` outside `1..=W` × `1..=H`.
    pub fn index(&self, x: u8, y: u8) -> Option<usize> {
        let inside =
            (1..=self.size.width()).contains(&x) && (1..=self.size.height()).contains(&y);
        inside.then(|| self.size.stride() * y as usize + x as usize)
    }

    /// Inverse of [`Board::index`]; `None` for border or out-of-range indices.
    pub fn point(&self, index: usize) -> Option<Position> {
        if index >= self.cells.len() {
            return None;
        }
        let stride = self.size.stride();
        let x = u8::try_from(index % stride).ok()?;
        let y = u8::try_from(index / stride).ok()?;
        self.index(x, y).map(|_| Position { x, y })
    }

    /// Cell at a grid index. Anything past the end reads as `Out`.
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().unwrap_or(Cell::Out)
    }

    pub fn cell_at(&self, x: u8, y: u8) -> Cell {
        self.index(x, y).map_or(Cell::Out, |index| self.get(index))
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        debug_assert!(self.get(index) != Cell::Out, "write to border cell {index}");
        self.cells[index] = cell;
    }

    pub(crate) fn fill(&mut self, indices: &[usize], cell: Cell) {
        for &index in indices {
            self.set(index, cell);
        }
    }

    /// Orthogonal neighbours of a playable cell, in north, east, south, west order.
    pub fn neighbors(&self, index: usize) -> [usize; 4] {
        self.dir4.map(|offset| index.wrapping_add_signed(offset))
    }

    /// Flood-fills the group containing `seed` and collects its liberties.
    /// Returns an empty group when `seed` holds no stone.
    pub fn count_liberties(&self, seed: usize) -> Group {
        let mut group = Group::default();
        let color = self.get(seed);
        if !color.is_stone() {
            return group;
        }

        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![seed];
        visited[seed] = true;

        while let Some(index) = stack.pop() {
            group.stones.push(index);
            for next in self.neighbors(index) {
                if visited[next] {
                    continue;
                }
                match self.cells[next] {
                    Cell::Empty => {
                        visited[next] = true;
                        group.liberties.push(next);
                    }
                    cell if cell == color => {
                        visited[next] = true;
                        stack.push(next);
                    }
                    _ => {}
                }
            }
        }

        group
    }

    /// Converts the padded grid to bytes: 0=empty, 1=black, 2=white, 3=border.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells.iter().map(|&cell| cell as u8).collect()
    }

    /// Hoshi of the standard square boards (9, 13 and 19).
    pub fn is_star_point(&self, x: u8, y: u8) -> bool {
        if !self.size.is_square() {
            return false;
        }
        match self.size.width() {
            9 => x == 5 && y == 5,
            13 => (matches!(x, 4 | 10) && matches!(y, 4 | 10)) || (x == 7 && y == 7),
            19 => matches!(x, 4 | 10 | 16) && matches!(y, 4 | 10 | 16),
            _ => false,
        }
    }

    pub fn star_points(&self) -> Vec<Position> {
        let mut points = Vec::new();
        for y in 1..=self.size.height() {
            for x in 1..=self.size.width() {
                if self.is_star_point(x, y) {
                    points.push(Position { x, y });
                }
            }
        }
        points
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: u8) -> Board {
        Board::new(BoardSize::square(size).unwrap())
    }

    fn put(board: &mut Board, cell: Cell, points: &[(u8, u8)]) {
        for &(x, y) in points {
            let index = board.index(x, y).unwrap();
            board.set(index, cell);
        }
    }

    #[test]
    fn new_board_has_out_border_and_empty_interior() {
        let board = Board::new(BoardSize::new(5, 3).unwrap());
        let cells = board.to_array();

        assert_eq!(cells.len(), 7 * 5);
        for y in 0..5usize {
            for x in 0..7usize {
                let expected = if x == 0 || y == 0 || x == 6 || y == 4 { 3 } else { 0 };
                assert_eq!(cells[y * 7 + x], expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn reset_twice_yields_identical_grid() {
        let mut board = board(9);
        put(&mut board, Cell::Black, &[(3, 3), (4, 4)]);

        board.reset();
        let first = board.clone();
        board.reset();

        assert_eq!(board, first);
        assert_eq!(board, self::board(9));
    }

    #[test]
    fn index_and_point_round_trip_on_interior_only() {
        let board = board(9);

        assert_eq!(board.index(1, 1), Some(12));
        assert_eq!(board.index(9, 9), Some(11 * 9 + 9));
        assert_eq!(board.point(12), Some(Position { x: 1, y: 1 }));
        assert_eq!(board.index(0, 5), None);
        assert_eq!(board.index(10, 5), None);
        assert_eq!(board.point(0), None);
        assert_eq!(board.point(11 * 11), None);
    }

    #[test]
    fn neighbors_follow_north_east_south_west_offsets() {
        let board = board(9);
        let center = board.index(5, 5).unwrap();

        assert_eq!(
            board.neighbors(center),
            [
                board.index(5, 4).unwrap(),
                board.index(6, 5).unwrap(),
                board.index(5, 6).unwrap(),
                board.index(4, 5).unwrap(),
            ]
        );
    }

    #[test]
    fn lone_stone_liberties_depend_on_edges() {
        let mut board = board(9);
        put(&mut board, Cell::Black, &[(5, 5), (1, 1), (1, 5)]);

        assert_eq!(board.count_liberties(board.index(5, 5).unwrap()).liberty_count(), 4);
        assert_eq!(board.count_liberties(board.index(1, 1).unwrap()).liberty_count(), 2);
        assert_eq!(board.count_liberties(board.index(1, 5).unwrap()).liberty_count(), 3);
    }

    #[test]
    fn group_collects_connected_stones_and_shared_liberties_once() {
        let mut board = board(9);
        // Two-by-two block: eight distinct liberties.
        put(&mut board, Cell::White, &[(4, 4), (5, 4), (4, 5), (5, 5)]);
        put(&mut board, Cell::Black, &[(3, 4)]);

        let group = board.count_liberties(board.index(4, 4).unwrap());
        let mut stones = group.stones.clone();
        stones.sort_unstable();
        let mut expected: Vec<usize> = [(4, 4), (5, 4), (4, 5), (5, 5)]
            .iter()
            .map(|&(x, y)| board.index(x, y).unwrap())
            .collect();
        expected.sort_unstable();

        assert_eq!(stones, expected);
        assert_eq!(group.liberty_count(), 7);
    }

    #[test]
    fn surrounded_stone_has_no_liberties_and_grid_is_untouched() {
        let mut board = board(9);
        put(&mut board, Cell::Black, &[(5, 4), (4, 5), (6, 5), (5, 6)]);
        put(&mut board, Cell::White, &[(5, 5)]);
        let before = board.clone();

        let group = board.count_liberties(board.index(5, 5).unwrap());

        assert_eq!(group.len(), 1);
        assert_eq!(group.liberty_count(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn ring_shaped_group_terminates() {
        let mut board = board(5);
        put(
            &mut board,
            Cell::Black,
            &[(2, 2), (3, 2), (4, 2), (2, 3), (4, 3), (2, 4), (3, 4), (4, 4)],
        );

        let group = board.count_liberties(board.index(2, 2).unwrap());

        assert_eq!(group.len(), 8);
        // Inner eye plus the 12 edge-adjacent points.
        assert_eq!(group.liberty_count(), 13);
    }

    #[test]
    fn empty_seed_yields_empty_group() {
        let board = board(9);

        assert!(board.count_liberties(board.index(3, 3).unwrap()).is_empty());
        assert!(board.count_liberties(0).is_empty());
    }

    #[test]
    fn star_points_for_standard_sizes() {
        assert_eq!(board(9).star_points(), vec![Position { x: 5, y: 5 }]);
        assert_eq!(board(13).star_points().len(), 5);
        assert!(board(13).is_star_point(7, 7));
        assert_eq!(board(19).star_points().len(), 9);
        assert!(board(19).is_star_point(16, 4));
        assert!(board(7).star_points().is_empty());
        assert!(Board::new(BoardSize::new(19, 13).unwrap()).star_points().is_empty());
    }
}
