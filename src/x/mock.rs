//! A mock implementation of XConn that is easier to implement for
//! use in tests.
//! This module and its contents are only available when testing.
use crate::{
    pure::geometry::Rect,
    x::{ClientAttr, ClientConfig, XConn},
    Result, Xid,
};
use std::cell::RefCell;

/// All methods on this trait that return a Result unimplemented by
/// default unless an implementation is provided.
/// The `mock_root` method always returns id 0 and `mock_flush` by default is a no-op.
///
/// Any implementation of `MockXConn` will automatically implement `XConn` by forwarding on
/// calls to `$method` to `mock_$method`.
#[allow(unused_variables)]
pub trait MockXConn {
    fn mock_root(&self) -> Xid {
        Xid(0)
    }

    fn mock_screen_details(&self) -> Result<Vec<Rect>> {
        unimplemented!("mock_screen_details")
    }

    fn mock_map(&self, id: Xid) -> Result<()> {
        unimplemented!("mock_map")
    }

    fn mock_unmap(&self, id: Xid) -> Result<()> {
        unimplemented!("mock_unmap")
    }

    fn mock_set_client_attributes(&self, id: Xid, attrs: &[ClientAttr]) -> Result<()> {
        unimplemented!("mock_set_client_attributes")
    }

    fn mock_set_client_config(&self, id: Xid, data: &[ClientConfig]) -> Result<()> {
        unimplemented!("mock_set_client_config")
    }

    fn mock_flush(&self) {}
}

impl<T> XConn for T
where
    T: MockXConn,
{
    fn root(&self) -> Xid {
        self.mock_root()
    }

    fn screen_details(&self) -> Result<Vec<Rect>> {
        self.mock_screen_details()
    }

    fn map(&self, id: Xid) -> Result<()> {
        self.mock_map(id)
    }

    fn unmap(&self, id: Xid) -> Result<()> {
        self.mock_unmap(id)
    }

    fn set_client_attributes(&self, id: Xid, attrs: &[ClientAttr]) -> Result<()> {
        self.mock_set_client_attributes(id, attrs)
    }

    fn set_client_config(&self, id: Xid, data: &[ClientConfig]) -> Result<()> {
        self.mock_set_client_config(id, data)
    }

    fn flush(&self) {
        self.mock_flush()
    }
}

/// A request sent to a [RecordingConn].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Req {
    Map(Xid),
    Unmap(Xid),
    Attrs(Xid, Vec<ClientAttr>),
    Config(Xid, Vec<ClientConfig>),
    Flush,
}

/// A [MockXConn] that records every request made of it in order.
#[derive(Debug, Default)]
pub struct RecordingConn {
    pub reqs: RefCell<Vec<Req>>,
}

impl RecordingConn {
    pub fn take(&self) -> Vec<Req> {
        self.reqs.take()
    }

    /// Only the map and unmap requests (and the flushes between them).
    pub fn mapping_requests(&self) -> Vec<Req> {
        self.take()
            .into_iter()
            .filter(|r| matches!(r, Req::Map(_) | Req::Unmap(_) | Req::Flush))
            .collect()
    }
}

impl MockXConn for RecordingConn {
    fn mock_screen_details(&self) -> Result<Vec<Rect>> {
        Ok(vec![Rect::new(0, 0, 1000, 800)])
    }

    fn mock_map(&self, id: Xid) -> Result<()> {
        self.reqs.borrow_mut().push(Req::Map(id));
        Ok(())
    }

    fn mock_unmap(&self, id: Xid) -> Result<()> {
        self.reqs.borrow_mut().push(Req::Unmap(id));
        Ok(())
    }

    fn mock_set_client_attributes(&self, id: Xid, attrs: &[ClientAttr]) -> Result<()> {
        self.reqs.borrow_mut().push(Req::Attrs(id, attrs.to_vec()));
        Ok(())
    }

    fn mock_set_client_config(&self, id: Xid, data: &[ClientConfig]) -> Result<()> {
        self.reqs.borrow_mut().push(Req::Config(id, data.to_vec()));
        Ok(())
    }

    fn mock_flush(&self) {
        self.reqs.borrow_mut().push(Req::Flush);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::config::Change,
        pure::{
            client_set::tests::{add, test_set},
            Client, ClientFlags,
        },
        tagset,
        x::XConnExt,
        Error,
    };
    use Req::*;

    #[test]
    fn unbans_are_flushed_before_any_bans() {
        let conn = RecordingConn::default();
        let mut cs = test_set(1);
        add(&mut cs, 1, 0, tagset![0]);
        add(&mut cs, 2, 0, tagset![1]);
        conn.banning_refresh(&mut cs).unwrap();
        conn.take();

        cs.view_only(1).unwrap();
        conn.banning_refresh(&mut cs).unwrap();

        assert_eq!(
            conn.mapping_requests(),
            vec![Map(Xid(2)), Flush, Unmap(Xid(1)), Flush, Flush]
        );
        assert!(!cs.needs_reban(0));
    }

    #[test]
    fn frames_are_mapped_before_their_clients() {
        let conn = RecordingConn::default();
        let mut cs = test_set(1);
        let c = Client::new(1, 0, tagset![0], Rect::default()).with_frame(10);
        cs.manage(c).unwrap();

        conn.banning_refresh(&mut cs).unwrap();

        assert_eq!(
            conn.mapping_requests(),
            vec![Map(Xid(10)), Map(Xid(1)), Flush, Flush, Flush]
        );
    }

    #[test]
    fn enter_leave_masks_are_restored_after_rebanning() {
        let conn = RecordingConn::default();
        let mut cs = test_set(1);
        add(&mut cs, 1, 0, tagset![0]);

        conn.banning_refresh(&mut cs).unwrap();
        let reqs = conn.take();

        assert_eq!(
            reqs.first(),
            Some(&Attrs(Xid(1), vec![ClientAttr::IgnoreEnterLeaveMask]))
        );
        assert!(reqs.contains(&Attrs(Xid(1), vec![ClientAttr::ClientEventMask])));
    }

    #[test]
    fn repeated_refresh_sends_no_duplicate_requests() {
        let conn = RecordingConn::default();
        let mut cs = test_set(1);
        add(&mut cs, 1, 0, tagset![0]);
        conn.banning_refresh(&mut cs).unwrap();
        conn.take();

        cs.request_reban(0).unwrap();
        conn.banning_refresh(&mut cs).unwrap();

        assert!(conn.take().is_empty());
    }

    #[test]
    fn ban_and_unban_are_idempotent() {
        let conn = RecordingConn::default();
        let mut cs = test_set(1);
        add(&mut cs, 1, 0, tagset![0]);

        conn.ban(&mut cs, Xid(1)).unwrap();
        conn.unban(&mut cs, Xid(1)).unwrap();
        conn.unban(&mut cs, Xid(1)).unwrap();
        conn.ban(&mut cs, Xid(1)).unwrap();
        conn.ban(&mut cs, Xid(1)).unwrap();

        assert_eq!(conn.take(), vec![Map(Xid(1)), Unmap(Xid(1))]);
    }

    #[test]
    fn screens_not_requesting_reban_are_skipped() {
        let conn = RecordingConn::default();
        let mut cs = test_set(2);
        add(&mut cs, 1, 0, tagset![0]);
        add(&mut cs, 2, 1, tagset![3]);
        conn.banning_refresh(&mut cs).unwrap();
        conn.take();

        cs.view_only(4).unwrap();
        conn.banning_refresh(&mut cs).unwrap();

        assert_eq!(conn.mapping_requests(), vec![Flush, Unmap(Xid(2)), Flush, Flush]);
    }

    #[test]
    fn fullscreen_clients_are_positioned_without_a_border() {
        let conn = RecordingConn::default();
        let mut cs = test_set(1);
        let c = Client::new(1, 0, tagset![0], Rect::default())
            .with_border(2)
            .with_flags(ClientFlags::FULLSCREEN);
        cs.manage(c).unwrap();

        conn.arrange(&mut cs, 0).unwrap();

        assert_eq!(
            conn.take(),
            vec![
                Config(
                    Xid(1),
                    vec![
                        ClientConfig::BorderPx(0),
                        ClientConfig::Position(Rect::new(0, 0, 1000, 800))
                    ]
                ),
                Config(Xid(1), vec![ClientConfig::StackTop]),
                Flush,
            ]
        );
    }

    #[test]
    fn arrange_is_a_noop_for_clean_screens() {
        let conn = RecordingConn::default();
        let mut cs = test_set(1);
        add(&mut cs, 1, 0, tagset![0]);
        conn.arrange(&mut cs, 0).unwrap();
        conn.take();

        conn.arrange(&mut cs, 0).unwrap();

        assert!(conn.take().is_empty());
    }

    #[test]
    fn clean_screens_ignore_dirty_tags_that_are_not_viewed() {
        let conn = RecordingConn::default();
        let mut cs = test_set(1);
        add(&mut cs, 1, 0, tagset![0]);
        add(&mut cs, 2, 0, tagset![0]);
        conn.arrange(&mut cs, 0).unwrap();
        conn.take();

        cs.set_mwfact(1, Change::Relative(0.1)).unwrap();
        conn.arrange(&mut cs, 0).unwrap();

        assert!(conn.take().is_empty());
    }

    #[derive(Debug, Default)]
    struct FailingMapConn {
        inner: RecordingConn,
    }

    impl MockXConn for FailingMapConn {
        fn mock_map(&self, _: Xid) -> Result<()> {
            Err(Error::Raw("map failed".to_owned()))
        }

        fn mock_unmap(&self, id: Xid) -> Result<()> {
            self.inner.mock_unmap(id)
        }

        fn mock_set_client_attributes(&self, id: Xid, attrs: &[ClientAttr]) -> Result<()> {
            self.inner.mock_set_client_attributes(id, attrs)
        }

        fn mock_flush(&self) {
            self.inner.mock_flush()
        }
    }

    #[test]
    fn event_masks_are_restored_when_mapping_fails() {
        let conn = FailingMapConn::default();
        let mut cs = test_set(1);
        add(&mut cs, 1, 0, tagset![0]);

        let res = conn.banning_refresh(&mut cs);

        assert!(matches!(res, Err(Error::Raw(_))));
        assert_eq!(
            conn.inner.take(),
            vec![
                Attrs(Xid(1), vec![ClientAttr::IgnoreEnterLeaveMask]),
                Attrs(Xid(1), vec![ClientAttr::ClientEventMask]),
                Flush,
            ]
        );
        assert!(cs.needs_reban(0));
        assert!(cs.client(Xid(1)).unwrap().is_banned());
    }
}
