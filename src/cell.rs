use crate::palette::{self, ShadeSet};

pub type GroupId = u32;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CellKind {
    Wall,
    Path,
}

/// A color family plus the current shade within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayColor {
    pub shades: &'static ShadeSet,
    pub shade: usize,
}

impl DisplayColor {
    pub fn new(shades: &'static ShadeSet) -> Self {
        Self { shades, shade: 0 }
    }

    /// Current shade as `0xRRGGBB`; out-of-range indices render white.
    pub fn rgb(&self) -> u32 {
        self.shades.get(self.shade).copied().unwrap_or(0xFF_FFFF)
    }

    /// Switch color family, keeping the shade index.
    pub fn set_shades(&mut self, shades: &'static ShadeSet) {
        self.shades = shades;
    }

    pub fn set_shade(&mut self, shade: usize) {
        self.shade = shade;
    }
}

/// A single maze cell. `kind` never changes after generation; `group` is set
/// at most once per activation and only ever relabeled to a surviving group
/// during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub group: Option<GroupId>,
    pub color: DisplayColor,
}

impl Cell {
    pub fn wall() -> Self {
        Self {
            kind: CellKind::Wall,
            group: None,
            color: DisplayColor::new(&palette::DARK_GRAY),
        }
    }

    pub fn path() -> Self {
        Self {
            kind: CellKind::Path,
            group: None,
            color: DisplayColor::new(&palette::YELLOW_GREEN),
        }
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    /// Turn a wall into an uncolored passage.
    pub fn carve(&mut self) {
        *self = Cell::path();
    }
}
