//! Built-in layouts.
//!
//! Each function here computes the outer cell for every client being laid out (before
//! borders are removed) from the number of clients and the work area. They are called by
//! [Layout::compute][crate::Layout::compute] which takes care of the border adjustment.
use crate::{
    core::layout::{LayoutClient, LayoutParams},
    pure::geometry::Rect,
};
use std::cmp::{max as cmp_max, min};


// The size of the master area along a dimension of length d.
fn master_size(d: u32, mwfact: f64) -> u32 {
    ((d as f64) * mwfact).floor() as u32
}

/// Split `r` into `ncol` columns of rows holding a total of `n` cells.
///
/// The number of columns is capped at the number of cells and each column holds the same
/// number of cells, with the final column also taking any remainder.
pub fn stack_columns(r: Rect, n: u32, ncol: u32) -> Vec<Rect> {
    if n == 0 {
        return vec![];
    }

    let ncol = cmp_max(1, min(ncol, n));
    let per_col = n / ncol;

    r.as_columns(ncol)
        .into_iter()
        .enumerate()
        .flat_map(|(i, col)| {
            let rows = if i as u32 == ncol - 1 {
                n - per_col * (ncol - 1)
            } else {
                per_col
            };

            col.as_rows(rows)
        })
        .collect()
}

/// A master column with the stack split into `ncol` columns beside it.
///
/// The master column is `mwfact` of the width of the work area and sits on the left, or on
/// the right when `mirrored` is set. Masters share the height of the master column equally
/// as do the clients in each stack column. If every client is a master (or nmaster is zero)
/// then there is only a single area that takes up the whole screen.
/// ```
/// # use trellis::{builtin::layout::tile, pure::geometry::Rect, LayoutParams};
/// let r = Rect::new(0, 0, 1000, 800);
/// let cells = tile(3, r, &LayoutParams::default(), false);
///
/// assert_eq!(
///     cells,
///     vec![
///         Rect::new(0, 0, 500, 800),
///         Rect::new(500, 0, 500, 400),
///         Rect::new(500, 400, 500, 400),
///     ]
/// );
/// ```
pub fn tile(n: usize, r: Rect, params: &LayoutParams, mirrored: bool) -> Vec<Rect> {
    let n = n as u32;
    let nmaster = min(params.nmaster, n);
    let nstack = n - nmaster;

    if nstack == 0 {
        return r.as_rows(n);
    } else if nmaster == 0 {
        return stack_columns(r, nstack, params.ncol);
    }

    let mw = master_size(r.w, params.mwfact);
    let split = if mirrored { r.w.saturating_sub(mw) } else { mw };

    let (left, right) = match r.split_at_width(split) {
        Some(halves) if split > 0 => halves,
        // Too narrow to split
        _ => return r.as_rows(n),
    };
    let (main, stack) = if mirrored {
        (right, left)
    } else {
        (left, right)
    };

    main.as_rows(nmaster)
        .into_iter()
        .chain(stack_columns(stack, nstack, params.ncol))
        .collect()
}

/// A master bar along the top of the screen with the stack beneath it.
///
/// The master bar is `mwfact` of the height of the work area with masters placed side by
/// side. Stack clients share a single row beneath it or, in `portrait` mode, are split
/// into `ncol` columns of rows.
pub fn bstack(n: usize, r: Rect, params: &LayoutParams, portrait: bool) -> Vec<Rect> {
    let n = n as u32;
    let nmaster = min(params.nmaster, n);
    let nstack = n - nmaster;

    let bottom = |stack: Rect| {
        if portrait {
            stack_columns(stack, nstack, params.ncol)
        } else {
            stack.as_columns(nstack)
        }
    };

    if nstack == 0 {
        return r.as_columns(n);
    } else if nmaster == 0 {
        return bottom(r);
    }

    let mh = master_size(r.h, params.mwfact);
    let (main, stack) = match r.split_at_height(mh) {
        Some(halves) if mh > 0 => halves,
        _ => return r.as_columns(n),
    };

    main.as_columns(nmaster)
        .into_iter()
        .chain(bottom(stack))
        .collect()
}

/// Every client is given the full work area.
pub fn max(n: usize, r: Rect) -> Vec<Rect> {
    vec![r; n]
}

/// Clients are returned to their saved floating geometry.
///
/// Floating geometry was chosen by the user so the work area is ignored entirely.
pub fn floating(clients: &[LayoutClient]) -> Vec<Rect> {
    clients.iter().map(|c| c.floating_geometry).collect()
}
