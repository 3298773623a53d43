//! Connected open regions of a binary map

use std::collections::VecDeque;

use super::{BinaryGrid, Coord, Grid};

/// Labels every open cell with the id of its 4-connected region
#[derive(Debug, Clone)]
pub struct RegionMap {
    labels: Grid<Option<usize>>,
    sizes: Vec<usize>,
}

impl RegionMap {
    /// Flood-fill every open region of `map`, labelling in row-major discovery order
    pub fn label(map: &BinaryGrid) -> Self {
        let mut labels: Grid<Option<usize>> = Grid::new(map.width(), map.height());
        let mut sizes = Vec::new();
        let mut queue = VecDeque::new();

        for start in map.coords() {
            if map[start].is_solid() || labels[start].is_some() {
                continue;
            }
            let region = sizes.len();
            let mut size = 0;
            labels[start] = Some(region);
            queue.push_back(start);

            while let Some(c) = queue.pop_front() {
                size += 1;
                for n in c.neighbors4() {
                    if map.get(n).is_some_and(|cell| cell.is_open()) && labels[n].is_none() {
                        labels[n] = Some(region);
                        queue.push_back(n);
                    }
                }
            }
            sizes.push(size);
        }

        Self { labels, sizes }
    }

    /// Region containing `c`, if it is an open cell
    pub fn region_of(&self, c: Coord) -> Option<usize> {
        self.labels.get(c).copied().flatten()
    }

    /// Number of distinct open regions
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn size(&self, region: usize) -> usize {
        self.sizes.get(region).copied().unwrap_or(0)
    }

    /// The region with the most cells; the earliest one wins a tie
    pub fn largest(&self) -> Option<usize> {
        self.sizes
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .map(|(i, _)| i)
    }

    pub fn connected(&self, a: Coord, b: Coord) -> bool {
        match (self.region_of(a), self.region_of(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }
}
