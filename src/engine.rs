//! One-generation transition of a [`Grid`] under Conway's B3/S23 rule.

use crate::{BoundaryPolicy, Grid};

/// Offsets of the Moore neighborhood, center excluded.
const NEIGHBORHOOD: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// State (0 or 1) of the cell at `(x, y)`, which may lie outside the field.
///
/// With [`BoundaryPolicy::Wraparound`] each axis is wrapped by one field length:
/// negative coordinates count from the opposite edge, coordinates past the
/// far edge map to `0`.
pub fn neighbor_value(grid: &Grid, x: i64, y: i64, policy: BoundaryPolicy) -> u8 {
    let (width, height) = grid.size();
    value_at(grid.cells(), width, height, x, y, policy)
}

/// Number of live cells around `(x, y)`, in `0..=8`.
pub fn neighbor_sum(grid: &Grid, x: usize, y: usize, policy: BoundaryPolicy) -> u8 {
    let (width, height) = grid.size();
    sum_around(grid.cells(), width, height, x, y, policy)
}

/// B3/S23 as a total function of the current state and the neighbor sum.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (false, 3) => true,
        (false, _) => false,
        // underpopulation
        (true, 0 | 1) => false,
        (true, 2 | 3) => true,
        // overpopulation
        (true, 4..=8) => false,
        // sums above 8 cannot happen
        (true, _) => false,
    }
}

/// Advances the field by one generation.
///
/// Reads only the current generation and writes only the next one, then swaps
/// them and recounts live and dead cells.
pub fn advance_generation(grid: &mut Grid, policy: BoundaryPolicy) {
    let (width, height) = grid.size();
    {
        let (curr, next) = grid.buffers_mut();
        for y in 0..height {
            for x in 0..width {
                let neibs = sum_around(curr, width, height, x, y, policy);
                next[x + y * width] = next_state(curr[x + y * width], neibs);
            }
        }
    }
    grid.swap_buffers();
}

fn sum_around(
    cells: &[bool],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    policy: BoundaryPolicy,
) -> u8 {
    let (x, y) = (x as i64, y as i64);
    NEIGHBORHOOD
        .iter()
        .map(|&(dx, dy)| value_at(cells, width, height, x + dx, y + dy, policy))
        .sum()
}

fn value_at(
    cells: &[bool],
    width: usize,
    height: usize,
    x: i64,
    y: i64,
    policy: BoundaryPolicy,
) -> u8 {
    let (w, h) = (width as i64, height as i64);
    let (x, y) = match policy {
        BoundaryPolicy::DeadBorder => {
            if x < 0 || x >= w || y < 0 || y >= h {
                return 0;
            }
            (x, y)
        }
        BoundaryPolicy::Wraparound => (wrap_once(x, w), wrap_once(y, h)),
    };
    cells[(x + y * w) as usize] as u8
}

/// Single-step wrap; offsets further than one length fall back to modular arithmetic.
fn wrap_once(v: i64, len: i64) -> i64 {
    let v = if v < 0 {
        len + v
    } else if v >= len {
        0
    } else {
        v
    };
    v.rem_euclid(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let states = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c == '#'))
            .collect::<Vec<_>>();
        Grid::from_cells(rows[0].len(), rows.len(), &states).unwrap()
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead, {} neighbors", n);
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive, {} neighbors", n);
        }
        assert!(!next_state(true, 9));
        assert!(!next_state(false, u8::MAX));
    }

    #[test]
    fn test_dead_border_lookup() {
        let grid = grid_from(&["#..", "...", "..#"]);
        let p = BoundaryPolicy::DeadBorder;
        assert_eq!(neighbor_value(&grid, 0, 0, p), 1);
        assert_eq!(neighbor_value(&grid, 2, 2, p), 1);
        assert_eq!(neighbor_value(&grid, -1, 0, p), 0);
        assert_eq!(neighbor_value(&grid, 3, 2, p), 0);
        assert_eq!(neighbor_value(&grid, 2, -1, p), 0);
        assert_eq!(neighbor_value(&grid, 0, 3, p), 0);
        assert_eq!(neighbor_value(&grid, i64::MIN, i64::MAX, p), 0);
    }

    #[test]
    fn test_wraparound_lookup() {
        let grid = grid_from(&["#..", "...", "..#"]);
        let p = BoundaryPolicy::Wraparound;
        assert_eq!(neighbor_value(&grid, -1, -1, p), 1);
        assert_eq!(neighbor_value(&grid, 3, 3, p), 1);
        assert_eq!(neighbor_value(&grid, 3, 0, p), 1);
        assert_eq!(neighbor_value(&grid, -1, 0, p), 0);
        // far offsets stay inside the field
        assert_eq!(neighbor_value(&grid, -7, 5, p), 0);
        assert_eq!(neighbor_value(&grid, -4, -4, p), 1);
    }

    #[test]
    fn test_neighbor_sum_corner() {
        let grid = grid_from(&["##.#", "##..", "....", "#..."]);
        assert_eq!(neighbor_sum(&grid, 0, 0, BoundaryPolicy::DeadBorder), 3);
        // plus (3,0) and (0,3) across the edges
        assert_eq!(neighbor_sum(&grid, 0, 0, BoundaryPolicy::Wraparound), 5);
    }

    #[test]
    fn test_blinker_oscillates() {
        for policy in [BoundaryPolicy::Wraparound, BoundaryPolicy::DeadBorder] {
            let mut grid = grid_from(&[".....", ".....", ".###.", ".....", "....."]);
            advance_generation(&mut grid, policy);
            assert_eq!(grid.to_string(), ".....\n..#..\n..#..\n..#..\n.....\n");
            advance_generation(&mut grid, policy);
            assert_eq!(grid.to_string(), ".....\n.....\n.###.\n.....\n.....\n");
            assert_eq!((grid.alive_count(), grid.dead_count()), (3, 22));
        }
    }

    #[test]
    fn test_glider_wraps_on_torus() {
        let rows = [".#....", "..#...", "###...", "......", "......", "......"];
        let mut torus = grid_from(&rows);
        let mut boxed = grid_from(&rows);
        // a glider moves by (1, 1) every 4 generations
        for _ in 0..24 {
            advance_generation(&mut torus, BoundaryPolicy::Wraparound);
            advance_generation(&mut boxed, BoundaryPolicy::DeadBorder);
        }
        assert_eq!(torus.cells(), grid_from(&rows).cells());
        assert_eq!(torus.alive_count(), 5);
        // against a dead border it ends up as a block in the far corner
        assert_eq!(boxed.alive_count(), 4);
        assert!([(4, 4), (5, 4), (4, 5), (5, 5)]
            .iter()
            .all(|&(x, y)| boxed.get_cell(x, y)));
    }
}
