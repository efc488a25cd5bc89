//! Tests that layouts behave as expected
use simple_test_case::test_case;
use strum::IntoEnumIterator;
use trellis::{
    core::layout::{Layout, LayoutClient, LayoutContext, LayoutParams},
    pure::geometry::Rect,
    Xid,
};

const R_SCREEN: Rect = Rect::new(0, 0, 1000, 800);
const MAX_CLIENTS: u32 = 12;

fn clients(n: u32, border: u32) -> Vec<LayoutClient> {
    (0..n)
        .map(|i| LayoutClient {
            id: Xid::from(i + 1),
            border,
            floating_geometry: Rect::new(10 * i, 10 * i, 100, 100),
        })
        .collect()
}

fn ctx(params: LayoutParams) -> LayoutContext {
    LayoutContext {
        area: R_SCREEN,
        params,
        focused: None,
    }
}

#[test]
fn every_layout_handles_no_clients() {
    for layout in Layout::iter() {
        assert!(
            layout.compute(&[], &ctx(LayoutParams::default())).is_empty(),
            "{layout}"
        );
    }
}

#[test]
fn every_tiling_layout_stays_within_the_work_area() {
    for layout in Layout::iter().filter(|l| !l.is_floating()) {
        for n in 1..=MAX_CLIENTS {
            let cs = clients(n, 2);
            let rs = layout.compute(&cs, &ctx(LayoutParams::default()));

            assert_eq!(rs.len(), n as usize, "{layout} n={n}");
            for r in rs {
                assert!(r.w >= 1 && r.h >= 1, "{layout} n={n} {r:?}");
                assert!(
                    R_SCREEN.contains(&Rect::new(r.x, r.y, r.w + 4, r.h + 4)),
                    "{layout} n={n} {r:?}"
                );
            }
        }
    }
}

#[test]
fn tile_three_clients() {
    let rs = Layout::Tile.compute(&clients(3, 1), &ctx(LayoutParams::default()));

    assert_eq!(
        rs,
        vec![
            Rect::new(0, 0, 500, 800).shrink_in(1),
            Rect::new(500, 0, 500, 400).shrink_in(1),
            Rect::new(500, 400, 500, 400).shrink_in(1),
        ]
    );
}

#[test_case(1, 1; "all masters when n <= nmaster")]
#[test_case(3, 3; "nmaster equal to n")]
#[test_case(5, 3; "nmaster larger than n")]
#[test]
fn tile_masters_fill_the_area_without_a_stack(nmaster: u32, n: u32) {
    let params = LayoutParams {
        nmaster,
        ..Default::default()
    };
    let rs = Layout::Tile.compute(&clients(n, 0), &ctx(params));

    assert!(rs.iter().all(|r| r.x == 0 && r.w == 1000));
    assert_eq!(rs.iter().map(|r| r.h).sum::<u32>(), 800);
}

#[test]
fn fairh_five_clients_are_all_placed() {
    let rs = Layout::FairH.compute(&clients(5, 0), &ctx(LayoutParams::default()));
    let area: u64 = rs.iter().map(|r| r.area()).sum();

    assert_eq!(rs.len(), 5);
    assert_eq!(area, R_SCREEN.area());
    // three across the top row and two sharing the bottom row
    assert_eq!(rs.iter().filter(|r| r.y == 0).count(), 3);
    assert_eq!(rs.iter().filter(|r| r.y == 400).count(), 2);
}

#[test]
fn max_gives_every_client_the_whole_area() {
    let rs = Layout::Max.compute(&clients(4, 3), &ctx(LayoutParams::default()));

    assert_eq!(rs, vec![R_SCREEN.shrink_in(3); 4]);
}

#[test]
fn floating_ignores_the_work_area() {
    let cs = clients(2, 5);
    let rs = Layout::Floating.compute(&cs, &ctx(LayoutParams::default()));

    assert_eq!(rs, vec![Rect::new(0, 0, 100, 100), Rect::new(10, 10, 100, 100)]);
}

#[test]
fn magnifier_enlarges_the_focused_client() {
    let cs = clients(3, 0);
    let c = LayoutContext {
        area: Rect::new(0, 0, 1000, 1000),
        params: LayoutParams {
            mwfact: 0.25,
            ..Default::default()
        },
        focused: Some(Xid::from(3)),
    };

    let rs = Layout::Magnifier.compute(&cs, &c);

    assert_eq!(rs[2], Rect::new(250, 250, 500, 500));
    assert_eq!(Layout::Magnifier.raised(&cs, &c), Some(Xid::from(3)));
}

#[test]
fn layout_names_round_trip() {
    for layout in Layout::iter() {
        let parsed: Layout = layout.to_string().parse().unwrap();
        assert_eq!(parsed, layout);
    }
}
