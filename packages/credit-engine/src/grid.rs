//! Diamond-shaped layout of the role nodes.
//!
//! Roles are grouped by category precedence and cut into five rows of
//! 2, 3, 4, 3 and 2 nodes. The sizes are tied to the 14-role catalog, so
//! [`partition`] refuses any list whose length does not match.

use crate::catalog::{Catalog, Category, Role, RoleId};
use crate::error::LayoutError;
use serde::Serialize;
use tracing::debug;

pub const CATEGORY_PRECEDENCE: [Category; 4] = [
    Category::Strategy,
    Category::Research,
    Category::Infrastructure,
    Category::Dissemination,
];

pub const ROW_SIZES: [usize; 5] = [2, 3, 4, 3, 2];

/// Terminal cells per node.
pub const NODE_WIDTH: u16 = 14;
pub const NODE_HEIGHT: u16 = 5;
/// Lines shared between consecutive rows so the polygons interlock.
pub const ROW_OVERLAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectorLabel {
    pub category: Category,
    pub row: usize,
    pub side: Side,
}

impl ConnectorLabel {
    pub fn text(&self) -> &'static str {
        self.category.connector_label()
    }
}

pub const CONNECTORS: [ConnectorLabel; 4] = [
    ConnectorLabel {
        category: Category::Strategy,
        row: 0,
        side: Side::Top,
    },
    ConnectorLabel {
        category: Category::Research,
        row: 2,
        side: Side::Right,
    },
    ConnectorLabel {
        category: Category::Infrastructure,
        row: 3,
        side: Side::Left,
    },
    ConnectorLabel {
        category: Category::Dissemination,
        row: 4,
        side: Side::Bottom,
    },
];

/// Plain rectangle in terminal cells, kept free of any UI crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

/// Stable partition by category. Categories absent from `precedence` go last,
/// still in declaration order.
pub fn sort_by_precedence<'a>(roles: &'a [Role], precedence: &[Category]) -> Vec<&'a Role> {
    let rank = |c: Category| {
        precedence
            .iter()
            .position(|p| *p == c)
            .unwrap_or(precedence.len())
    };
    let mut sorted: Vec<&Role> = roles.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|r| rank(r.category));
    sorted
}

pub fn partition<'a>(
    roles: &[&'a Role],
    sizes: &[usize],
) -> Result<Vec<Vec<&'a Role>>, LayoutError> {
    let total: usize = sizes.iter().sum();
    if total != roles.len() {
        return Err(LayoutError::RowSizeMismatch {
            sizes: sizes.to_vec(),
            total,
            roles: roles.len(),
        });
    }
    let mut rows = Vec::with_capacity(sizes.len());
    let mut start = 0;
    for size in sizes {
        rows.push(roles[start..start + size].to_vec());
        start += size;
    }
    Ok(rows)
}

#[derive(Debug, Clone)]
pub struct GridLayout<'a> {
    rows: Vec<Vec<&'a Role>>,
}

impl<'a> GridLayout<'a> {
    pub fn build(catalog: &'a Catalog) -> Result<Self, LayoutError> {
        Self::with_precedence(catalog, &CATEGORY_PRECEDENCE)
    }

    pub fn with_precedence(
        catalog: &'a Catalog,
        precedence: &[Category],
    ) -> Result<Self, LayoutError> {
        let sorted = sort_by_precedence(catalog.roles(), precedence);
        let rows = partition(&sorted, &ROW_SIZES)?;
        debug!(rows = rows.len(), roles = sorted.len(), "grid layout built");
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<&'a Role>] {
        &self.rows
    }

    pub fn row_sizes(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    pub fn at(&self, row: usize, col: usize) -> Option<&'a Role> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn position_of(&self, id: RoleId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|role| role.id == id).map(|c| (r, c))
        })
    }

    pub fn first(&self) -> Option<&'a Role> {
        self.at(0, 0)
    }

    /// Keyboard navigation. Left/Right walk in reading order and stop at the
    /// ends; Up/Down pick the horizontally closest node of the adjacent row.
    pub fn step(&self, id: RoleId, direction: Direction) -> Option<&'a Role> {
        let (row, col) = self.position_of(id)?;
        match direction {
            Direction::Left => {
                if col > 0 {
                    self.at(row, col - 1)
                } else if row > 0 {
                    self.rows[row - 1].last().copied()
                } else {
                    self.at(row, col)
                }
            }
            Direction::Right => {
                if col + 1 < self.rows[row].len() {
                    self.at(row, col + 1)
                } else if row + 1 < self.rows.len() {
                    self.at(row + 1, 0)
                } else {
                    self.at(row, col)
                }
            }
            Direction::Up if row == 0 => self.at(row, col),
            Direction::Up => self.nearest_in_row(row - 1, self.center(row, col)),
            Direction::Down if row + 1 >= self.rows.len() => self.at(row, col),
            Direction::Down => self.nearest_in_row(row + 1, self.center(row, col)),
        }
    }

    // Centre of a node in half-node units relative to the grid axis.
    fn center(&self, row: usize, col: usize) -> i32 {
        2 * col as i32 + 1 - self.rows[row].len() as i32
    }

    fn nearest_in_row(&self, row: usize, target: i32) -> Option<&'a Role> {
        (0..self.rows[row].len())
            .min_by_key(|c| (self.center(row, *c) - target).abs())
            .and_then(|c| self.at(row, c))
    }

    pub fn width(&self) -> u16 {
        let widest = self.rows.iter().map(Vec::len).max().unwrap_or(0) as u16;
        widest * NODE_WIDTH
    }

    pub fn height(&self) -> u16 {
        let rows = self.rows.len() as u16;
        if rows == 0 {
            return 0;
        }
        rows * (NODE_HEIGHT - ROW_OVERLAP) + ROW_OVERLAP
    }

    /// Bounds of every node, centred inside `area`, in row order.
    pub fn node_rects(&self, area: Bounds) -> Vec<(RoleId, Bounds)> {
        let top = area.y + area.height.saturating_sub(self.height()) / 2;
        let mut rects = Vec::with_capacity(self.rows.iter().map(Vec::len).sum());
        for (r, row) in self.rows.iter().enumerate() {
            let row_width = row.len() as u16 * NODE_WIDTH;
            let left = area.x + area.width.saturating_sub(row_width) / 2;
            let y = top + r as u16 * (NODE_HEIGHT - ROW_OVERLAP);
            for (c, role) in row.iter().enumerate() {
                let x = left + c as u16 * NODE_WIDTH;
                rects.push((role.id, Bounds::new(x, y, NODE_WIDTH, NODE_HEIGHT)));
            }
        }
        rects
    }

    /// Bounds spanned by one row, for placing connector labels.
    pub fn row_bounds(&self, area: Bounds, row: usize) -> Option<Bounds> {
        let rects = self.node_rects(area);
        let mut in_row = self.rows.get(row)?.iter().map(|role| {
            rects
                .iter()
                .find(|(id, _)| *id == role.id)
                .map(|(_, b)| *b)
                .unwrap_or_default()
        });
        let first = in_row.next()?;
        let last = in_row.last().unwrap_or(first);
        Some(Bounds::new(
            first.x,
            first.y,
            last.right() - first.x,
            NODE_HEIGHT,
        ))
    }
}
