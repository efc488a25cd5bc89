//! Running layouts for screens whose tags have been marked as needing to be arranged.
use crate::{
    core::layout::{LayoutClient, LayoutContext},
    pure::{geometry::Rect, ClientFlags, ClientSet},
    Error, Result, TagSet, Xid,
};
use tracing::debug;

/// The geometry assigned to each visible client on a screen by a single layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    /// The index of the screen that was arranged
    pub screen: usize,
    /// The new geometry of each positioned client (excluding borders)
    pub positions: Vec<(Xid, Rect)>,
    /// Clients that should be stacked above the rest, lowest first
    pub raise: Vec<Xid>,
}

impl ClientSet {
    /// The tags whose clients are positioned by a layout pass of the given screen: the
    /// selected tags, or the first tag of the screen if nothing is selected.
    fn laid_out_tags(&self, screen: usize) -> TagSet {
        match self.screens.get(screen) {
            Some(s) if s.selected.is_empty() => {
                s.tags.first().map(TagSet::single).unwrap_or_default()
            }
            Some(s) => s.selected,
            None => TagSet::empty(),
        }
    }

    /// Whether or not a tag being viewed on the given screen is waiting on a layout pass.
    ///
    /// Tags that are not being viewed stay dirty until they are next selected.
    pub fn needs_arrange(&self, screen: usize) -> bool {
        self.laid_out_tags(screen)
            .iter()
            .any(|t| self.tags.get(t).map(|t| t.need_arrange).unwrap_or(false))
    }

    /// Recompute the geometry of every visible client on a screen.
    ///
    /// This only does any work if one of the tags being viewed on the screen has been
    /// marked as needing to be arranged, otherwise `None` is returned and nothing is
    /// modified. Tiled clients are positioned by the layout of the primary selected tag
    /// while floating, maximized and fullscreen clients are positioned directly. The new
    /// geometries are stored on each client and the tags being viewed are marked clean.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn arrange(&mut self, screen: usize) -> Result<Option<Arrangement>> {
        if !self.needs_arrange(screen) {
            return Ok(None);
        }

        let s = self.screen(screen)?;
        let tag = s
            .primary_tag()
            .or_else(|| s.tags.first())
            .ok_or(Error::UnknownScreen(screen))?;
        let (layout, params) = (self.tags[tag].layout, self.tags[tag].params);
        let ctx = LayoutContext {
            area: s.work_area(),
            params,
            focused: s.focused,
        };
        let full = s.r;

        let mut positions = Vec::new();
        let mut raise = Vec::new();
        let mut fullscreen = Vec::new();
        let mut laid_out = Vec::new();

        for id in self.visible_clients(screen) {
            let c = &self.clients[&id];
            if c.is(ClientFlags::FULLSCREEN) {
                positions.push((id, full));
                fullscreen.push(id);
            } else if c.is(ClientFlags::MAXIMIZED) {
                positions.push((id, ctx.area.shrink_in(c.border)));
                raise.push(id);
            } else if c.is_floating() && !layout.is_floating() {
                positions.push((id, c.floating_geometry));
                raise.push(id);
            } else {
                laid_out.push(LayoutClient {
                    id,
                    border: c.border,
                    floating_geometry: c.floating_geometry,
                });
            }
        }

        let rs = layout.compute(&laid_out, &ctx);
        positions.extend(laid_out.iter().map(|c| c.id).zip(rs));
        if let Some(id) = layout.raised(&laid_out, &ctx) {
            raise.push(id);
        }
        raise.extend(fullscreen);

        for (id, r) in positions.iter() {
            if let Some(c) = self.clients.get_mut(id) {
                c.geometry = *r;
                if layout.is_floating() {
                    c.flags.remove(ClientFlags::FRESH_LAYOUT);
                }
            }
        }

        for t in self.laid_out_tags(screen).iter() {
            self.tags[t].need_arrange = false;
        }

        debug!(
            %layout,
            n_tiled = laid_out.len(),
            n_positioned = positions.len(),
            "arranged screen"
        );

        Ok(Some(Arrangement {
            screen,
            positions,
            raise,
        }))
    }

    /// Arrange every screen that has dirty tags.
    pub fn arrange_all(&mut self) -> Result<Vec<Arrangement>> {
        let mut arrangements = Vec::new();
        for screen in 0..self.screens.len() {
            if let Some(a) = self.arrange(screen)? {
                arrangements.push(a);
            }
        }

        Ok(arrangements)
    }
}
