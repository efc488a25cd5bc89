//! The owned registry of clients, tags and screens.
use crate::{
    core::{
        config::{Change, Config},
        layout::{Layout, Message},
    },
    pure::{
        geometry::{Insets, Rect},
        Client, ClientFlags, Direction, FocusHistory, Screen, Tag, TagSet,
    },
    Error, Result, Xid,
};
use std::collections::HashMap;
use tracing::warn;

/// The side-effect free internal state representation of the window manager.
///
/// A ClientSet owns every managed [Client] along with the [Tag]s and [Screen]s they are
/// shown on. Clients are referred to by their [Xid] and tags and screens by their index.
/// Every mutation records which tags need their layout re-run and which screens need
/// their visibility reconciled so that the X server is only touched when something
/// actually changed.
#[derive(Debug, Clone)]
pub struct ClientSet {
    pub(crate) clients: HashMap<Xid, Client>,
    pub(crate) order: Vec<Xid>,
    pub(crate) tags: Vec<Tag>,
    pub(crate) screens: Vec<Screen>,
    pub(crate) focus: FocusHistory<Xid>,
    pub(crate) layouts: Vec<Layout>,
    pub(crate) mwfact_bounds: (f64, f64),
    pub(crate) border_width: u32,
}

impl ClientSet {
    /// Create a new [ClientSet] with a copy of the configured tags for each screen.
    ///
    /// The first tag of each screen starts out selected.
    ///
    /// # Errors
    /// This method will error if the config is invalid, if there are no screens or if
    /// there are too many tags in total to track.
    pub fn try_new<I>(config: &Config, screen_details: I) -> Result<Self>
    where
        I: IntoIterator<Item = Rect>,
    {
        config.validate()?;

        let details: Vec<Rect> = screen_details.into_iter().collect();
        if details.is_empty() {
            return Err(Error::NoScreens);
        }

        let n = details.len() * config.tags.len();
        if n > TagSet::MAX_TAGS {
            return Err(Error::TooManyTags {
                n,
                max: TagSet::MAX_TAGS,
            });
        }

        let params = config.default_params();
        let layout = config.layouts[0];
        let mut tags = Vec::with_capacity(n);
        let mut screens = Vec::with_capacity(details.len());

        for (index, r) in details.into_iter().enumerate() {
            let mut s = Screen::new(index, r, config.padding);
            for name in config.tags.iter() {
                s.tags.insert(tags.len());
                tags.push(Tag::new(name.clone(), index, layout, params));
            }
            s.selected = TagSet::single(index * config.tags.len());
            screens.push(s);
        }

        Ok(Self {
            clients: HashMap::new(),
            order: Vec::new(),
            tags,
            screens,
            focus: FocusHistory::new(),
            layouts: config.layouts.clone(),
            mwfact_bounds: (config.mwfact_min, config.mwfact_max),
            border_width: config.border_width,
        })
    }

    /// Build a new [Client] on the given screen using the configured border width.
    ///
    /// The client is given no tags so that it picks up the selected tags of its screen
    /// when it is managed.
    pub fn new_client(&self, id: impl Into<Xid>, screen: usize, geometry: Rect) -> Client {
        Client::new(id, screen, TagSet::empty(), geometry).with_border(self.border_width)
    }

    /// All screens in index order.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// The screen with the given index.
    pub fn screen(&self, screen: usize) -> Result<&Screen> {
        self.screens.get(screen).ok_or(Error::UnknownScreen(screen))
    }

    /// All tags in index order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The tag with the given index.
    pub fn tag(&self, tag: usize) -> Result<&Tag> {
        self.tags.get(tag).ok_or(Error::UnknownTag(tag))
    }

    /// Look up the index of the tag with the given name on a screen.
    pub fn tag_index(&self, screen: usize, name: &str) -> Option<usize> {
        self.tags
            .iter()
            .position(|t| t.screen == screen && t.name == name)
    }

    /// The layouts that can be cycled through on each tag.
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// The client with the given id, if it is being managed.
    pub fn client(&self, id: Xid) -> Option<&Client> {
        self.clients.get(&id)
    }

    /// Whether or not the given client is being managed.
    pub fn contains(&self, id: Xid) -> bool {
        self.clients.contains_key(&id)
    }

    /// Iterate over all managed clients in stacking order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.order.iter().flat_map(move |id| self.clients.get(id))
    }

    /// The client ids of all managed clients in stacking order.
    pub fn order(&self) -> &[Xid] {
        &self.order
    }

    /// The focus history for all screens.
    pub fn focus_history(&self) -> &FocusHistory<Xid> {
        &self.focus
    }

    /// The client currently holding focus on the given screen.
    pub fn focused_client(&self, screen: usize) -> Option<Xid> {
        self.screens.get(screen).and_then(|s| s.focused)
    }

    pub(crate) fn client_mut(&mut self, id: Xid) -> Result<&mut Client> {
        self.clients.get_mut(&id).ok_or(Error::UnknownClient(id))
    }

    fn screen_mut(&mut self, screen: usize) -> Result<&mut Screen> {
        self.screens
            .get_mut(screen)
            .ok_or(Error::UnknownScreen(screen))
    }

    fn tag_mut(&mut self, tag: usize) -> Result<&mut Tag> {
        self.tags.get_mut(tag).ok_or(Error::UnknownTag(tag))
    }

    // Visibility

    pub(crate) fn visible_on(c: &Client, s: &Screen) -> bool {
        c.screen == s.index
            && !c.is_suppressed()
            && (c.is(ClientFlags::STICKY) || c.tags.intersects(&s.selected))
    }

    pub(crate) fn tiled_on(c: &Client, s: &Screen) -> bool {
        Self::visible_on(c, s) && !c.is_floating() && !c.is_screen_sized()
    }

    /// Whether or not the given client should currently be shown on the given screen.
    ///
    /// A client is visible if it belongs to the screen, is neither minimized nor hidden,
    /// and is either sticky or a member of one of the screen's selected tags. Untagged
    /// clients that are not sticky are never visible. Unknown clients and screens are
    /// never visible.
    pub fn is_visible(&self, id: Xid, screen: usize) -> bool {
        match (self.clients.get(&id), self.screens.get(screen)) {
            (Some(c), Some(s)) => Self::visible_on(c, s),
            _ => false,
        }
    }

    /// Whether or not the given client should currently be positioned by the layout of
    /// the given screen: it is visible and is not floating, maximized or fullscreen.
    pub fn is_tiled(&self, id: Xid, screen: usize) -> bool {
        match (self.clients.get(&id), self.screens.get(screen)) {
            (Some(c), Some(s)) => Self::tiled_on(c, s),
            _ => false,
        }
    }

    /// The ids of all clients visible on the given screen in stacking order.
    pub fn visible_clients(&self, screen: usize) -> Vec<Xid> {
        self.filtered_ids(screen, Self::visible_on)
    }

    /// The ids of all clients tiled on the given screen in stacking order.
    pub fn tiled_clients(&self, screen: usize) -> Vec<Xid> {
        self.filtered_ids(screen, Self::tiled_on)
    }

    fn filtered_ids(&self, screen: usize, f: fn(&Client, &Screen) -> bool) -> Vec<Xid> {
        let s = match self.screens.get(screen) {
            Some(s) => s,
            None => return vec![],
        };

        self.clients().filter(|c| f(c, s)).map(|c| c.id).collect()
    }

    // Dirty flags

    fn mark_tags(&mut self, tags: TagSet) {
        for ix in tags.iter() {
            if let Some(t) = self.tags.get_mut(ix) {
                t.need_arrange = true;
            }
        }
    }

    // The tags whose layout can observe a change to this client.
    fn affected_tags(&self, id: Xid) -> TagSet {
        match self.clients.get(&id) {
            Some(c) if c.is(ClientFlags::STICKY) => match self.screens.get(c.screen) {
                Some(s) => c.tags | s.selected,
                None => c.tags,
            },
            Some(c) => c.tags,
            None => TagSet::empty(),
        }
    }

    fn mark_client(&mut self, id: Xid) {
        let tags = self.affected_tags(id);
        self.mark_tags(tags);
    }

    /// Request a visibility reconciliation for the given screen.
    ///
    /// A focused client that is no longer visible loses focus straight away rather than
    /// waiting for the reconciliation to unmap it.
    pub(crate) fn mark_reban(&mut self, screen: usize) {
        let focused_hidden = match self.screens.get(screen) {
            Some(s) => s
                .focused
                .map(|id| !self.is_visible(id, screen))
                .unwrap_or(false),
            None => return,
        };

        if let Some(s) = self.screens.get_mut(screen) {
            s.need_reban = true;
            if focused_hidden {
                s.focused = None;
            }
        }
    }

    // Client lifecycle

    /// Start managing a new client.
    ///
    /// A client with no tags that is not sticky is placed on the currently selected tags
    /// of its screen. Managing a client that is already known is a no-op.
    ///
    /// # Errors
    /// Errors if the client's screen is unknown or if it is tagged with tags that do not
    /// belong to its screen.
    pub fn manage(&mut self, mut client: Client) -> Result<()> {
        if self.clients.contains_key(&client.id) {
            warn!(id = %client.id, "attempt to manage a client that is already managed");
            return Ok(());
        }

        let s = self.screen(client.screen)?;
        if client.tags.is_empty() && !client.is(ClientFlags::STICKY) {
            client.tags = s.selected;
        }

        if let Some(ix) = (client.tags & !s.tags).first() {
            return Err(Error::UnknownTag(ix));
        }

        let (id, screen) = (client.id, client.screen);
        self.clients.insert(id, client);
        self.order.insert(0, id);
        self.focus.add(id);
        self.mark_client(id);
        self.mark_reban(screen);

        Ok(())
    }

    /// Stop managing a client, returning its final state.
    pub fn unmanage(&mut self, id: Xid) -> Result<Client> {
        let tags = self.affected_tags(id);
        let client = self.clients.remove(&id).ok_or(Error::UnknownClient(id))?;

        self.order.retain(|&c| c != id);
        self.focus.remove(&id);
        if let Some(s) = self.screens.get_mut(client.screen) {
            if s.focused == Some(id) {
                s.focused = None;
            }
        }

        self.mark_tags(tags);
        self.mark_reban(client.screen);

        Ok(client)
    }

    // Tags

    /// Add or remove the given client from a tag on its screen.
    ///
    /// This never touches the focus history.
    pub fn toggle_membership(&mut self, id: Xid, tag: usize) -> Result<()> {
        let owner = self.tag(tag)?.screen;
        let c = self.client_mut(id)?;
        if c.screen != owner {
            return Err(Error::UnknownTag(tag));
        }

        c.tags.toggle(tag);
        let screen = c.screen;

        self.mark_tags(TagSet::single(tag));
        self.mark_reban(screen);

        Ok(())
    }

    /// Replace the selected tags of a screen.
    ///
    /// Every tag that was selected or deselected is marked as needing to be arranged. The
    /// screen is only marked as needing a visibility reconciliation when one of its clients
    /// is a member of a changed tag.
    pub fn set_selected(&mut self, screen: usize, tags: TagSet) -> Result<()> {
        let s = self.screen(screen)?;
        if let Some(ix) = (tags & !s.tags).first() {
            return Err(Error::UnknownTag(ix));
        }

        let changed = s.selected.symmetric_difference(&tags);
        if changed.is_empty() {
            return Ok(());
        }

        let affects_clients = self
            .clients
            .values()
            .any(|c| c.screen == screen && c.tags.intersects(&changed));

        self.screen_mut(screen)?.selected = tags;
        self.mark_tags(changed);
        if affects_clients {
            self.mark_reban(screen);
        }

        Ok(())
    }

    /// Select only the given tag on its screen.
    pub fn view_only(&mut self, tag: usize) -> Result<()> {
        let screen = self.tag(tag)?.screen;

        self.set_selected(screen, TagSet::single(tag))
    }

    /// Add or remove a tag from the selected tags of its screen.
    pub fn toggle_selected(&mut self, tag: usize) -> Result<()> {
        let screen = self.tag(tag)?.screen;
        let mut selected = self.screen(screen)?.selected;
        selected.toggle(tag);

        self.set_selected(screen, selected)
    }

    // Layout parameters

    /// Adjust the master width factor of a tag, clamped to the configured bounds.
    ///
    /// Relative changes are inverted for layouts that place the master area on the right
    /// hand side. Returns whether or not the value changed.
    pub fn set_mwfact(&mut self, tag: usize, change: Change) -> Result<bool> {
        let (lo, hi) = self.mwfact_bounds;
        let t = self.tag_mut(tag)?;
        let change = if t.layout.inverts_mwfact() {
            change.inverted()
        } else {
            change
        };

        let mwfact = change.apply(t.params.mwfact).clamp(lo, hi);
        if mwfact == t.params.mwfact {
            return Ok(false);
        }
        t.params.mwfact = mwfact;
        self.mark_tags(TagSet::single(tag));

        Ok(true)
    }

    /// Adjust the number of master clients of a tag, never dropping below zero.
    ///
    /// Returns whether or not the value changed.
    pub fn set_nmaster(&mut self, tag: usize, change: Change) -> Result<bool> {
        let t = self.tag_mut(tag)?;
        let nmaster = change.apply(t.params.nmaster as f64).round().max(0.0) as u32;
        if nmaster == t.params.nmaster {
            return Ok(false);
        }
        t.params.nmaster = nmaster;
        self.mark_tags(TagSet::single(tag));

        Ok(true)
    }

    /// Adjust the number of stack columns of a tag, never dropping below one.
    ///
    /// Returns whether or not the value changed.
    pub fn set_ncol(&mut self, tag: usize, change: Change) -> Result<bool> {
        let t = self.tag_mut(tag)?;
        let ncol = change.apply(t.params.ncol as f64).round().max(1.0) as u32;
        if ncol == t.params.ncol {
            return Ok(false);
        }
        t.params.ncol = ncol;
        self.mark_tags(TagSet::single(tag));

        Ok(true)
    }

    /// Apply a layout [Message] to the given tag.
    ///
    /// Returns whether or not the tag was modified.
    pub fn handle_message(&mut self, tag: usize, msg: Message) -> Result<bool> {
        if let Some(change) = msg.mwfact_change() {
            return self.set_mwfact(tag, change);
        }

        match msg {
            Message::IncMain(n) => self.set_nmaster(tag, Change::Relative(n as f64)),
            Message::IncCol(n) => self.set_ncol(tag, Change::Relative(n as f64)),
            Message::CycleLayout(d) => {
                let before = self.tag(tag)?.layout;
                Ok(self.cycle_layout(tag, d)? != before)
            }
            Message::ExpandMain(_) | Message::ShrinkMain(_) => Ok(false),
        }
    }

    /// Set the layout used by a tag.
    ///
    /// Every client on the tag's screen is flagged as seeing a fresh layout.
    pub fn set_layout(&mut self, tag: usize, layout: Layout) -> Result<()> {
        let t = self.tag_mut(tag)?;
        if t.layout == layout {
            return Ok(());
        }
        t.layout = layout;
        let screen = t.screen;

        for c in self.clients.values_mut().filter(|c| c.screen == screen) {
            c.flags.insert(ClientFlags::FRESH_LAYOUT);
        }
        self.mark_tags(TagSet::single(tag));

        Ok(())
    }

    /// Move to the next or previous configured layout for a tag, returning the new layout.
    pub fn cycle_layout(&mut self, tag: usize, direction: Direction) -> Result<Layout> {
        let current = self.tag(tag)?.layout;
        let ix = match self.layouts.iter().position(|&l| l == current) {
            Some(ix) => direction.step(ix, self.layouts.len()),
            None => 0,
        };
        let layout = self.layouts.get(ix).copied().unwrap_or(current);
        self.set_layout(tag, layout)?;

        Ok(layout)
    }

    // Client state

    fn set_flag(&mut self, id: Xid, flag: ClientFlags, value: bool) -> Result<bool> {
        let c = self.client_mut(id)?;
        if c.flags.contains(flag) == value {
            return Ok(false);
        }
        c.flags.set(flag, value);

        Ok(true)
    }

    fn mark_if_visible(&mut self, id: Xid) {
        let visible = self
            .clients
            .get(&id)
            .map(|c| self.is_visible(id, c.screen))
            .unwrap_or(false);

        if visible {
            self.mark_client(id);
        }
    }

    /// Set whether or not a client is floating.
    pub fn set_floating(&mut self, id: Xid, floating: bool) -> Result<()> {
        if self.set_flag(id, ClientFlags::FLOATING, floating)? {
            self.mark_if_visible(id);
        }

        Ok(())
    }

    /// Toggle whether or not a client is floating.
    pub fn toggle_floating(&mut self, id: Xid) -> Result<()> {
        let floating = self.client(id).ok_or(Error::UnknownClient(id))?.is_floating();

        self.set_floating(id, !floating)
    }

    /// Toggle whether or not a client is maximized to the work area of its screen.
    ///
    /// The current geometry of a floating client is saved before it is maximized so that it
    /// can be restored afterwards.
    pub fn toggle_maximized(&mut self, id: Xid) -> Result<()> {
        let c = self.client_mut(id)?;
        let maximize = !c.is(ClientFlags::MAXIMIZED);
        if maximize && c.is_floating() && !c.is_screen_sized() {
            c.floating_geometry = c.geometry;
        }
        c.flags.set(ClientFlags::MAXIMIZED, maximize);
        self.mark_if_visible(id);

        Ok(())
    }

    /// Set whether or not a client covers the full geometry of its screen.
    pub fn set_fullscreen(&mut self, id: Xid, fullscreen: bool) -> Result<()> {
        let c = self.client_mut(id)?;
        if fullscreen && c.is_floating() && !c.is_screen_sized() {
            c.floating_geometry = c.geometry;
        }

        if self.set_flag(id, ClientFlags::FULLSCREEN, fullscreen)? {
            self.mark_if_visible(id);
        }

        Ok(())
    }

    // Changes that alter whether or not a client is visible.
    fn set_visibility_flag(&mut self, id: Xid, flag: ClientFlags, value: bool) -> Result<()> {
        if !self.set_flag(id, flag, value)? {
            return Ok(());
        }

        let screen = self.client(id).map(|c| c.screen).unwrap_or_default();
        self.mark_client(id);
        self.mark_reban(screen);

        Ok(())
    }

    /// Set whether or not a client is minimized.
    pub fn set_minimized(&mut self, id: Xid, minimized: bool) -> Result<()> {
        self.set_visibility_flag(id, ClientFlags::MINIMIZED, minimized)
    }

    /// Set whether or not a client is hidden.
    pub fn set_hidden(&mut self, id: Xid, hidden: bool) -> Result<()> {
        self.set_visibility_flag(id, ClientFlags::HIDDEN, hidden)
    }

    /// Set whether or not a client is shown on every tag of its screen.
    pub fn set_sticky(&mut self, id: Xid, sticky: bool) -> Result<()> {
        let screen = self.client(id).ok_or(Error::UnknownClient(id))?.screen;
        // the selected tags need arranging when a client stops being sticky as well
        let selected = self.screen(screen)?.selected;

        if self.set_flag(id, ClientFlags::STICKY, sticky)? {
            self.mark_client(id);
            self.mark_tags(selected);
            self.mark_reban(screen);
        }

        Ok(())
    }

    /// Set whether or not a client is skipped by focus history navigation.
    pub fn set_skip(&mut self, id: Xid, skip: bool) -> Result<()> {
        self.set_flag(id, ClientFlags::SKIP, skip).map(|_| ())
    }

    /// Set the geometry a client returns to when floating.
    pub fn set_floating_geometry(&mut self, id: Xid, r: Rect) -> Result<()> {
        let c = self.client_mut(id)?;
        if c.floating_geometry == r {
            return Ok(());
        }
        c.floating_geometry = r;
        if c.is_floating() {
            self.mark_if_visible(id);
        }

        Ok(())
    }

    /// Move a client to the head of the stacking order, making it the first master.
    pub fn zoom(&mut self, id: Xid) -> Result<()> {
        let ix = self
            .order
            .iter()
            .position(|&c| c == id)
            .ok_or(Error::UnknownClient(id))?;

        if ix != 0 {
            self.order.remove(ix);
            self.order.insert(0, id);
            self.mark_if_visible(id);
        }

        Ok(())
    }

    /// Move a client to another screen, placing it on that screen's selected tags.
    pub fn move_to_screen(&mut self, id: Xid, screen: usize) -> Result<()> {
        let selected = self.screen(screen)?.selected;
        let old_tags = self.affected_tags(id);
        let c = self.client_mut(id)?;
        let old = c.screen;
        if old == screen {
            return Ok(());
        }

        c.screen = screen;
        c.tags = selected;
        if let Some(s) = self.screens.get_mut(old) {
            if s.focused == Some(id) {
                s.focused = None;
            }
        }

        self.mark_tags(old_tags);
        self.mark_client(id);
        self.mark_reban(old);
        self.mark_reban(screen);

        Ok(())
    }

    // Screens

    fn set_screen_insets<F>(&mut self, screen: usize, f: F) -> Result<()>
    where
        F: FnOnce(&mut Screen) -> bool,
    {
        let s = self.screen_mut(screen)?;
        if f(s) {
            let selected = s.selected;
            self.mark_tags(selected);
        }

        Ok(())
    }

    /// Set the space reserved by status bars and docks along the edges of a screen.
    pub fn set_struts(&mut self, screen: usize, struts: Insets) -> Result<()> {
        self.set_screen_insets(screen, |s| {
            let changed = s.struts != struts;
            s.struts = struts;
            changed
        })
    }

    /// Set the padding left empty around the edges of a screen.
    pub fn set_padding(&mut self, screen: usize, padding: Insets) -> Result<()> {
        self.set_screen_insets(screen, |s| {
            let changed = s.padding != padding;
            s.padding = padding;
            changed
        })
    }

    /// Update the geometry of a screen, for example after an output is resized.
    pub fn set_screen_geometry(&mut self, screen: usize, r: Rect) -> Result<()> {
        self.set_screen_insets(screen, |s| {
            let changed = s.r != r;
            s.r = r;
            changed
        })
    }

    // Focus

    /// Give focus to a client on its screen and record it in the focus history.
    pub fn focus_client(&mut self, id: Xid) -> Result<()> {
        let screen = self.client(id).ok_or(Error::UnknownClient(id))?.screen;
        self.screen_mut(screen)?.focused = Some(id);
        self.focus.add(id);

        Ok(())
    }

    /// Record a client as the most recently focused.
    ///
    /// If the client is already present in the focus history it is moved to the head.
    pub fn focus_add_client(&mut self, id: Xid) {
        self.focus.add(id);
    }

    /// Remove a client from the focus history. Removing an absent client is a no-op.
    pub fn focus_delete_client(&mut self, id: Xid) {
        self.focus.remove(&id);
    }

    /// The `index`-th most recently focused client that is a member of one of the given
    /// tags, skipping clients flagged as [SKIP][ClientFlags::SKIP].
    ///
    /// An index of zero is the most recently focused matching client.
    pub fn focus_get_latest_for_tags(&self, tags: TagSet, index: usize) -> Option<Xid> {
        self.focus
            .nth_matching(index, |id| {
                self.clients
                    .get(id)
                    .map(|c| !c.is(ClientFlags::SKIP) && c.tags.intersects(&tags))
                    .unwrap_or(false)
            })
            .copied()
    }

    /// The client `n` steps back in the focus history of a screen, considering only
    /// clients on that screen's selected tags.
    pub fn focus_history_step(&self, screen: usize, n: usize) -> Option<Xid> {
        let s = self.screens.get(screen)?;

        self.focus
            .nth_matching(n, |id| {
                self.clients
                    .get(id)
                    .map(|c| {
                        c.screen == screen && !c.is(ClientFlags::SKIP) && Self::visible_on(c, s)
                    })
                    .unwrap_or(false)
            })
            .copied()
    }
}
