//! Focus history ordering and tag filtered lookups
use trellis::{
    pure::{geometry::Rect, Client, FocusHistory},
    tagset, ClientSet, Config, TagSet, Xid,
};

#[test]
fn focus_history_is_most_recent_first() {
    let mut h = FocusHistory::new();
    for c in ['A', 'B', 'C'] {
        h.add(c);
    }
    assert_eq!(h.iter().copied().collect::<Vec<_>>(), vec!['C', 'B', 'A']);

    h.add('A');

    assert_eq!(h.iter().copied().collect::<Vec<_>>(), vec!['A', 'C', 'B']);
    assert_eq!(h.nth_matching(0, |_| true), Some(&'A'));
}

fn client_set() -> ClientSet {
    let config = Config {
        tags: vec!["a".into(), "b".into(), "c".into()],
        ..Default::default()
    };

    ClientSet::try_new(&config, [Rect::new(0, 0, 1000, 800)]).unwrap()
}

#[test]
fn latest_for_tags_after_refocus() {
    let mut cs = client_set();
    for id in 1..=3 {
        cs.manage(Client::new(id, 0, tagset![0], Rect::default()))
            .unwrap();
    }

    cs.focus_add_client(Xid::from(1));

    assert_eq!(cs.focus_get_latest_for_tags(TagSet::all(), 0), Some(Xid::from(1)));
    assert_eq!(cs.focus_get_latest_for_tags(TagSet::all(), 1), Some(Xid::from(3)));
    assert_eq!(cs.focus_get_latest_for_tags(TagSet::all(), 3), None);
}

#[test]
fn latest_for_tags_skips_other_tags_and_skipped_clients() {
    let mut cs = client_set();
    cs.manage(Client::new(1, 0, tagset![0], Rect::default())).unwrap();
    cs.manage(Client::new(2, 0, tagset![1], Rect::default())).unwrap();
    cs.manage(Client::new(3, 0, tagset![0], Rect::default())).unwrap();
    cs.set_skip(Xid::from(3), true).unwrap();

    assert_eq!(cs.focus_get_latest_for_tags(tagset![0], 0), Some(Xid::from(1)));
    assert_eq!(cs.focus_get_latest_for_tags(tagset![1], 0), Some(Xid::from(2)));
    assert_eq!(cs.focus_get_latest_for_tags(tagset![2], 0), None);
}

#[test]
fn deleting_from_focus_history_is_idempotent() {
    let mut cs = client_set();
    cs.manage(Client::new(1, 0, tagset![0], Rect::default())).unwrap();

    cs.focus_delete_client(Xid::from(1));
    cs.focus_delete_client(Xid::from(1));

    assert!(cs.focus_history().is_empty());
    assert!(cs.contains(Xid::from(1)));
}

#[test]
fn unmanaged_clients_leave_focus_history() {
    let mut cs = client_set();
    for id in 1..=2 {
        cs.manage(Client::new(id, 0, tagset![0], Rect::default()))
            .unwrap();
    }

    cs.unmanage(Xid::from(2)).unwrap();

    assert_eq!(
        cs.focus_history().iter().copied().collect::<Vec<_>>(),
        vec![Xid::from(1)]
    );
}

#[test]
fn stepping_back_through_history_stays_on_selected_tags() {
    let mut cs = client_set();
    cs.manage(Client::new(1, 0, tagset![0], Rect::default())).unwrap();
    cs.manage(Client::new(2, 0, tagset![1], Rect::default())).unwrap();
    cs.manage(Client::new(3, 0, tagset![0], Rect::default())).unwrap();

    assert_eq!(cs.focus_history_step(0, 0), Some(Xid::from(3)));
    assert_eq!(cs.focus_history_step(0, 1), Some(Xid::from(1)));
    assert_eq!(cs.focus_history_step(0, 2), None);
}
