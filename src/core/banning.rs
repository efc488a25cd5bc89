//! Deciding which clients need to be mapped or unmapped to match their visibility.
//!
//! Clients that should not currently be shown are "banned": unmapped from the screen
//! while keeping all of their state. A [RebanPlan] lists the clients whose banned state
//! disagrees with their visibility for a single screen. Applying a plan is handled by
//! [XConnExt::banning_refresh][crate::x::XConnExt::banning_refresh] which unbans every
//! client in the plan before banning any of them.
use crate::{
    pure::{ClientFlags, ClientSet},
    Result, Xid,
};

/// The clients on a screen whose mapped state needs to change.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RebanPlan {
    /// The index of the screen this plan is for
    pub screen: usize,
    /// Banned clients that are now visible and need to be mapped
    pub unban: Vec<Xid>,
    /// Unbanned clients that are no longer visible and need to be unmapped
    pub ban: Vec<Xid>,
}

impl RebanPlan {
    /// Whether or not this plan requires any changes.
    pub fn is_empty(&self) -> bool {
        self.unban.is_empty() && self.ban.is_empty()
    }
}

impl ClientSet {
    /// Whether a visibility reconciliation pass is pending for the given screen.
    pub fn needs_reban(&self, screen: usize) -> bool {
        self.screens
            .get(screen)
            .map(|s| s.need_reban)
            .unwrap_or(false)
    }

    /// Request a visibility reconciliation pass for the given screen.
    ///
    /// This is done automatically by every mutation that can change which clients are
    /// visible but is available for collaborators that hide windows by other means.
    pub fn request_reban(&mut self, screen: usize) -> Result<()> {
        self.screen(screen)?;
        self.mark_reban(screen);

        Ok(())
    }

    /// Compute which clients on the given screen need to be banned or unbanned.
    ///
    /// Only clients owned by the screen are considered, in stacking order, and clients
    /// whose banned state already matches their visibility are left out.
    pub fn reban_plan(&self, screen: usize) -> Result<RebanPlan> {
        let s = self.screen(screen)?;
        let mut plan = RebanPlan {
            screen,
            ..Default::default()
        };

        for c in self.clients().filter(|c| c.screen == screen) {
            match (Self::visible_on(c, s), c.is_banned()) {
                (true, true) => plan.unban.push(c.id),
                (false, false) => plan.ban.push(c.id),
                _ => (),
            }
        }

        Ok(plan)
    }

    /// Record whether or not a client is banned, returning `true` if this changed
    /// its state.
    pub(crate) fn set_banned(&mut self, id: Xid, banned: bool) -> bool {
        match self.clients.get_mut(&id) {
            Some(c) if c.is_banned() != banned => {
                c.flags.set(ClientFlags::BANNED, banned);
                true
            }
            _ => false,
        }
    }

    /// Mark the given screen as reconciled.
    pub(crate) fn clear_reban(&mut self, screen: usize) {
        if let Some(s) = self.screens.get_mut(screen) {
            s.need_reban = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pure::{client_set::tests::test_set, geometry::Rect, Client},
        tagset,
    };

    #[test]
    fn newly_managed_visible_clients_need_unbanning() {
        let mut cs = test_set(1);
        cs.manage(Client::new(1, 0, tagset![0], Rect::default())).unwrap();
        cs.manage(Client::new(2, 0, tagset![1], Rect::default())).unwrap();

        let plan = cs.reban_plan(0).unwrap();

        assert_eq!(plan.unban, vec![Xid(1)]);
        assert!(plan.ban.is_empty());
    }

    #[test]
    fn plan_only_contains_state_changes() {
        let mut cs = test_set(1);
        for (id, tag) in [(1, 0), (2, 0), (3, 1)] {
            cs.manage(Client::new(id, 0, tagset![tag], Rect::default()))
                .unwrap();
        }
        cs.set_banned(Xid(1), false);
        cs.set_banned(Xid(2), false);

        cs.view_only(1).unwrap();
        let plan = cs.reban_plan(0).unwrap();

        assert_eq!(plan.unban, vec![Xid(3)]);
        assert_eq!(plan.ban, vec![Xid(2), Xid(1)]);
    }

    #[test]
    fn plan_is_restricted_to_the_screen() {
        let mut cs = test_set(2);
        cs.manage(Client::new(1, 0, tagset![0], Rect::default())).unwrap();
        cs.manage(Client::new(2, 1, tagset![3], Rect::default())).unwrap();

        let plan = cs.reban_plan(1).unwrap();

        assert_eq!(plan.unban, vec![Xid(2)]);
    }

    #[test]
    fn set_banned_reports_changes() {
        let mut cs = test_set(1);
        cs.manage(Client::new(1, 0, tagset![0], Rect::default())).unwrap();

        assert!(!cs.set_banned(Xid(1), true));
        assert!(cs.set_banned(Xid(1), false));
        assert!(!cs.set_banned(Xid(1), false));
        assert!(!cs.set_banned(Xid(42), false));
    }

    #[test]
    fn consistent_state_gives_an_empty_plan() {
        let mut cs = test_set(1);
        cs.manage(Client::new(1, 0, tagset![0], Rect::default())).unwrap();
        cs.set_banned(Xid(1), false);

        assert!(cs.reban_plan(0).unwrap().is_empty());
    }
}
