#![warn(clippy::all, clippy::pedantic)]

//! Static shape catalog: three families, each with a fixed ordered list of
//! orientations. Initialized at compile time and never mutated.

/// One rotational variant of a shape family: a rectangular boolean matrix
/// where `true` marks an occupied cell. Every row has the same length, an
/// invariant the tables below must uphold; lookups do not re-validate it.
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    cells: &'static [&'static [bool]],
}

impl Orientation {
    #[must_use]
    pub const fn height(self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub const fn width(self) -> usize {
        self.cells[0].len()
    }

    /// Whether the piece occupies the local cell at (`row`, `col`).
    /// Callers bound-check against `height`/`width` first.
    #[must_use]
    pub const fn cell(self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    T,
    L,
    S,
}

pub const SHAPE_KINDS: [ShapeKind; 3] = [ShapeKind::T, ShapeKind::L, ShapeKind::S];

impl ShapeKind {
    /// Uniform pick over the catalog.
    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        SHAPE_KINDS[rng.usize(0..SHAPE_KINDS.len())]
    }

    #[must_use]
    pub fn orientations(self) -> &'static [Orientation] {
        match self {
            ShapeKind::T => &T_SHAPED,
            ShapeKind::L => &L_SHAPED,
            ShapeKind::S => &S_SHAPED,
        }
    }

    #[must_use]
    pub fn orientation_count(self) -> usize {
        self.orientations().len()
    }
}

static T_SHAPED: [Orientation; 4] = [
    Orientation {
        cells: &[&[false, true, false], &[true, true, true]],
    },
    Orientation {
        cells: &[&[true, false], &[true, true], &[true, false]],
    },
    Orientation {
        cells: &[
            &[false, false, false],
            &[true, true, true],
            &[false, true, false],
        ],
    },
    Orientation {
        cells: &[&[false, true], &[true, true], &[false, true]],
    },
];

static L_SHAPED: [Orientation; 4] = [
    Orientation {
        cells: &[&[true, false], &[true, false], &[true, true]],
    },
    Orientation {
        cells: &[
            &[false, false, false],
            &[true, true, true],
            &[true, false, false],
        ],
    },
    Orientation {
        cells: &[&[true, true], &[false, true], &[false, true]],
    },
    Orientation {
        cells: &[&[false, false, true], &[true, true, true]],
    },
];

static S_SHAPED: [Orientation; 2] = [
    Orientation {
        cells: &[&[true, false], &[true, true], &[false, true]],
    },
    Orientation {
        cells: &[&[false, true, true], &[true, true, false]],
    },
];
