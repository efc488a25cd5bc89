//! Layout behaviour that is more specialised or complex than the builtin layouts.
use crate::{
    core::layout::{LayoutClient, LayoutParams},
    pure::geometry::Rect,
};

// NOTE: When adding new layouts to this module, they should have a corresponding quickcheck
//       test added to ensure that the layout logic does not panic when given arbitrary inputs.
#[cfg(test)]
pub mod quickcheck_tests;

/// The dimensions of the grid used by the fair layouts for `n` clients as
/// `(cells per strip, strips)`.
///
/// The number of cells is the smallest `u` such that `u * u >= n` and the number of
/// strips drops to `u - 1` whenever that still leaves room for every client.
/// ```
/// # use trellis::extensions::layout::fair_grid;
/// assert_eq!(fair_grid(1), (1, 1));
/// assert_eq!(fair_grid(2), (2, 1));
/// assert_eq!(fair_grid(5), (3, 2));
/// assert_eq!(fair_grid(7), (3, 3));
/// ```
pub fn fair_grid(n: usize) -> (u32, u32) {
    if n == 0 {
        return (0, 0);
    }

    let n = n as u32;
    let mut cells = 1;
    while cells * cells < n {
        cells += 1;
    }
    let strips = if cells * (cells - 1) >= n {
        cells - 1
    } else {
        cells
    };

    (cells, strips)
}

/// Clients are given near equal cells within a grid of strips.
///
/// With `horizontal` set, strips are rows filled left to right (unless there are only
/// one or two clients, in which case they are stacked vertically), otherwise strips are
/// columns filled top to bottom (with one or two clients placed side by side). Strips
/// after the first `n - strips * (cells - 1)` hold one fewer cell so a partially filled
/// grid never leaves a gap.
pub fn fair(n: usize, r: Rect, horizontal: bool) -> Vec<Rect> {
    if n == 0 {
        return vec![];
    }

    let (cells, strips) = fair_grid(n);
    let full_strips = n as u32 - strips * (cells - 1);
    let row_major = if horizontal { n > 2 } else { n <= 2 };

    let strip_rects = if row_major {
        r.as_rows(strips)
    } else {
        r.as_columns(strips)
    };

    strip_rects
        .into_iter()
        .enumerate()
        .flat_map(|(i, strip)| {
            let k = if (i as u32) < full_strips {
                cells
            } else {
                cells - 1
            };

            if row_major {
                strip.as_columns(k)
            } else {
                strip.as_rows(k)
            }
        })
        .collect()
}

/// Each client takes half of the space left over by the clients before it.
///
/// Space is halved along the width and then the height in turn. With `spiral` set, the
/// half taken rotates around the left, top, right and bottom edges, otherwise clients
/// always take the left or top half so that they dwindle towards the bottom right. The
/// final client takes all of the remaining space.
///
/// Once the remaining space is too small to halve around a client's border, that client
/// and all of those after it are given the whole of the remaining space and overlap one
/// another.
pub fn fibonacci(clients: &[LayoutClient], r: Rect, spiral: bool) -> Vec<Rect> {
    let n = clients.len();
    let mut remaining = r;
    let mut exhausted = false;
    let mut cells = Vec::with_capacity(n);

    for (i, c) in clients.iter().enumerate() {
        if exhausted || i == n - 1 {
            cells.push(remaining);
            continue;
        }

        let halve_width = i % 2 == 0;
        let d = if halve_width { remaining.w } else { remaining.h };
        if d / 2 <= 2 * c.border || d < 2 {
            exhausted = true;
            cells.push(remaining);
            continue;
        }

        let (first, second) = if halve_width {
            remaining.split_at_mid_width()
        } else {
            remaining.split_at_mid_height()
        };

        let (cell, rest) = if spiral && i % 4 >= 2 {
            (second, first)
        } else {
            (first, second)
        };

        cells.push(cell);
        remaining = rest;
    }

    cells
}

/// The client at index `focused` is enlarged and centered over the others.
///
/// The magnified client takes `sqrt(mwfact)` of the width and height of the work area
/// so that it covers `mwfact` of its total area. All other clients are given full width
/// rows in order. A single client fills the work area.
pub fn magnifier(n: usize, focused: usize, r: Rect, params: &LayoutParams) -> Vec<Rect> {
    match n {
        0 => return vec![],
        1 => return vec![r],
        _ => (),
    }

    let focused = if focused < n { focused } else { 0 };
    let f = params.mwfact.sqrt();
    let scaled = r.scale_w(f).scale_h(f);
    let magnified = scaled.centered_in(&r).unwrap_or(r);
    let mut rows = r.as_rows(n as u32 - 1).into_iter();

    (0..n)
        .map(|i| {
            if i == focused {
                magnified
            } else {
                rows.next().unwrap_or(r)
            }
        })
        .collect()
}

/// Clients fill a grid column by column.
///
/// The grid has the smallest number of rows `k` with `k * k >= n`, and one fewer column
/// than rows when that is still enough cells. A partially filled final column shares its
/// height between the clients placed in it.
/// ```
/// # use trellis::{extensions::layout::grid, pure::geometry::Rect};
/// let cells = grid(3, Rect::new(0, 0, 100, 100));
///
/// assert_eq!(
///     cells,
///     vec![
///         Rect::new(0, 0, 50, 50),
///         Rect::new(0, 50, 50, 50),
///         Rect::new(50, 0, 50, 100),
///     ]
/// );
/// ```
pub fn grid(n: usize, r: Rect) -> Vec<Rect> {
    if n == 0 {
        return vec![];
    }

    // cells per strip become rows per column
    let (rows, cols) = fair_grid(n);
    let n = n as u32;

    r.as_columns(cols)
        .into_iter()
        .enumerate()
        .flat_map(|(i, col)| {
            let placed = i as u32 * rows;
            col.as_rows(std::cmp::min(rows, n.saturating_sub(placed)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Xid;
    use simple_test_case::test_case;

    const R: Rect = Rect::new(0, 0, 1000, 800);

    fn clients(n: u32, border: u32) -> Vec<LayoutClient> {
        (0..n)
            .map(|i| LayoutClient {
                id: Xid(i),
                border,
                floating_geometry: Rect::default(),
            })
            .collect()
    }

    #[test_case(0, (0, 0); "empty")]
    #[test_case(3, (2, 2); "three")]
    #[test_case(4, (2, 2); "four")]
    #[test_case(5, (3, 2); "five")]
    #[test_case(6, (3, 2); "six")]
    #[test_case(10, (4, 3); "ten")]
    #[test]
    fn fair_grid_dimensions(n: usize, expected: (u32, u32)) {
        assert_eq!(fair_grid(n), expected);
    }

    #[test]
    fn fairh_five_clients_fill_three_then_two() {
        let cells = fair(5, R, true);

        assert_eq!(
            cells,
            vec![
                Rect::new(0, 0, 333, 400),
                Rect::new(333, 0, 333, 400),
                Rect::new(666, 0, 334, 400),
                Rect::new(0, 400, 500, 400),
                Rect::new(500, 400, 500, 400),
            ]
        );
    }

    #[test]
    fn fairv_five_clients_fill_columns() {
        let cells = fair(5, R, false);

        assert_eq!(
            cells,
            vec![
                Rect::new(0, 0, 500, 266),
                Rect::new(0, 266, 500, 266),
                Rect::new(0, 532, 500, 268),
                Rect::new(500, 0, 500, 400),
                Rect::new(500, 400, 500, 400),
            ]
        );
    }

    #[test_case(true, vec![Rect::new(0, 0, 1000, 400), Rect::new(0, 400, 1000, 400)]; "fairh")]
    #[test_case(false, vec![Rect::new(0, 0, 500, 800), Rect::new(500, 0, 500, 800)]; "fairv")]
    #[test]
    fn fair_two_clients_flip_orientation(horizontal: bool, expected: Vec<Rect>) {
        assert_eq!(fair(2, R, horizontal), expected);
    }

    #[test]
    fn spiral_rotates_around_the_edges() {
        let cells = fibonacci(&clients(5, 0), R, true);

        assert_eq!(
            cells,
            vec![
                Rect::new(0, 0, 500, 800),
                Rect::new(500, 0, 500, 400),
                Rect::new(750, 400, 250, 400),
                Rect::new(500, 600, 250, 200),
                Rect::new(500, 400, 250, 200),
            ]
        );
    }

    #[test]
    fn dwindle_shrinks_towards_bottom_right() {
        let cells = fibonacci(&clients(4, 0), R, false);

        assert_eq!(
            cells,
            vec![
                Rect::new(0, 0, 500, 800),
                Rect::new(500, 0, 500, 400),
                Rect::new(500, 400, 250, 400),
                Rect::new(750, 400, 250, 400),
            ]
        );
    }

    #[test]
    fn fibonacci_exhausted_space_is_shared() {
        // 10px wide with a 3px border: the first halving leaves 5px which is not > 6px
        let r = Rect::new(0, 0, 10, 100);
        let cells = fibonacci(&clients(3, 3), r, false);

        assert_eq!(cells, vec![r; 3]);
    }

    #[test_case(0, 0; "first focused")]
    #[test_case(2, 2; "last focused")]
    #[test_case(9, 0; "out of range focus")]
    #[test]
    fn magnifier_centers_focused_client(focused: usize, expected_ix: usize) {
        let r = Rect::new(0, 0, 1000, 1000);
        let params = LayoutParams {
            mwfact: 0.25,
            ..Default::default()
        };
        let cells = magnifier(3, focused, r, &params);

        assert_eq!(cells[expected_ix], Rect::new(250, 250, 500, 500));
        let others: Vec<Rect> = cells
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != expected_ix)
            .map(|(_, r)| *r)
            .collect();
        assert_eq!(
            others,
            vec![Rect::new(0, 0, 1000, 500), Rect::new(0, 500, 1000, 500)]
        );
    }

    #[test]
    fn magnifier_single_client_fills_area() {
        assert_eq!(magnifier(1, 0, R, &LayoutParams::default()), vec![R]);
    }

    #[test_case(1, 1; "one")]
    #[test_case(4, 2; "four")]
    #[test_case(5, 2; "five")]
    #[test_case(7, 3; "seven")]
    #[test]
    fn grid_column_count(n: usize, expected_cols: usize) {
        let cells = grid(n, R);
        let mut xs: Vec<u32> = cells.iter().map(|r| r.x).collect();
        xs.dedup();

        assert_eq!(cells.len(), n);
        assert_eq!(xs.len(), expected_cols);
    }
}
