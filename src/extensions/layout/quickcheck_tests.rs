//! Quickcheck based tests to ensure that Layouts behave well for arbitrary inputs
//!
//! NOTE: See trellis::builtin::layout::quickcheck_tests for the Arbitrary impls for
//!       Rect and LayoutInput.
use crate::{
    builtin::layout::quickcheck_tests::{layout_properties, tiles_area_exactly, LayoutInput},
    core::layout::Layout,
};
use quickcheck_macros::quickcheck;

layout_properties!(
    fairh => Layout::FairH,
    fairv => Layout::FairV,
    spiral => Layout::Spiral,
    dwindle => Layout::Dwindle,
    magnifier => Layout::Magnifier,
    grid => Layout::Grid,
);

#[quickcheck]
fn fairh_tiles_area_exactly(input: LayoutInput) -> bool {
    tiles_area_exactly(Layout::FairH, input)
}

#[quickcheck]
fn fairv_tiles_area_exactly(input: LayoutInput) -> bool {
    tiles_area_exactly(Layout::FairV, input)
}

#[quickcheck]
fn grid_tiles_area_exactly(input: LayoutInput) -> bool {
    tiles_area_exactly(Layout::Grid, input)
}

#[quickcheck]
fn magnifier_always_raises_a_tiled_client(input: LayoutInput) -> bool {
    let raised = Layout::Magnifier.raised(&input.clients, &input.ctx);

    match raised {
        Some(id) => input.clients.iter().any(|c| c.id == id),
        None => input.clients.is_empty(),
    }
}

// Without exhausting the available space, each client is given a distinct region.
#[quickcheck]
fn fibonacci_small_inputs_do_not_overlap(mut input: LayoutInput, spiral: bool) -> bool {
    input.clients.truncate(6);
    let input = input.without_borders();
    let layout = if spiral { Layout::Spiral } else { Layout::Dwindle };
    let rs = layout.compute(&input.clients, &input.ctx);

    rs.iter()
        .enumerate()
        .all(|(i, a)| rs[i + 1..].iter().all(|b| !a.intersects(b)))
}
