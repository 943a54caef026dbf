use core::str::FromStr;

use enum_map::{Enum, EnumMap};

/// Cardinal directions, declared in activation scan order: left, right, up, down.
/// Group merges keep whichever group is seen first in this order, so the variant
/// order is load-bearing.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Enum)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset of this direction as `(dx, dy)`, y growing downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Per-direction neighbor slots, indexable by [`Direction`].
pub type Neighbors<T> = EnumMap<Direction, Option<T>>;

pub type Position = (usize, usize);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Force both dimensions to odd values, as the carving algorithm requires.
    /// Even inputs grow by one; anything below 3 becomes 3 so the entry and
    /// exit stubs always exist.
    pub fn to_odd(self) -> Size {
        Size {
            width: self.width.max(3) | 1,
            height: self.height.max(3) | 1,
        }
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_width, raw_height) = s.split_once('x').ok_or(format!("invalid format: {}", s))?;

        let width = raw_width
            .parse::<usize>()
            .map_err(|_| format!("invalid width: {}", raw_width))?;
        let height = raw_height
            .parse::<usize>()
            .map_err(|_| format!("invalid height: {}", raw_height))?;

        Ok(Size { width, height })
    }
}

/// Row-major rectangular cell storage.
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    pos: usize,
}

impl<T> Grid<T> {
    pub fn new<F: FnMut(usize, usize) -> T>(width: usize, height: usize, initializer: &mut F) -> Self {
        let mut data = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                data.push(initializer(x, y));
            }
        }

        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    pub fn iter(&self) -> GridIter<T> {
        GridIter { grid: self, pos: 0 }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width {
            return None;
        }

        self.data.get(x + y * self.width)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width {
            return None;
        }

        self.data.get_mut(x + y * self.width)
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), &'static str> {
        if x >= self.width || y >= self.height {
            Err("Cell out of range")?
        }

        self.data[x + y * self.width] = value;

        Ok(())
    }

    /// Coordinates of the neighbor one step in `direction`, if in bounds.
    pub fn neighbor_position(&self, x: usize, y: usize, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;

        if nx >= self.width || ny >= self.height {
            None
        } else {
            Some((nx, ny))
        }
    }

    pub fn get_neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<&T> {
        let (nx, ny) = self.neighbor_position(x, y, direction)?;

        self.get(nx, ny)
    }

    pub fn get_neighbors(&self, x: usize, y: usize) -> Neighbors<&T> {
        let mut output = Neighbors::default();

        for direction in Direction::ALL {
            output[direction] = self.get_neighbor(x, y, direction);
        }

        output
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (usize, usize, &'a T);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.grid.data.len() {
            None
        } else {
            let x = self.pos % self.grid.width;
            let y = self.pos / self.grid.width;
            let value = &self.grid.data[self.pos];

            self.pos += 1;

            Some((x, y, value))
        }
    }
}
