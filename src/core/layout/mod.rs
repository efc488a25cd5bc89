//! Layouts for positioning tiled client windows within the work area of a screen.
//!
//! A [Layout] is a pure function of its inputs: the ordered list of clients being tiled,
//! the work area they should occupy and the [LayoutParams] of the tag being viewed. It
//! returns exactly one geometry per input client in the same order. Layouts never see tag
//! membership or client flags: filtering down to the clients that should be tiled is the
//! job of the scheduler.
use crate::{
    builtin::layout::{bstack, floating, max, tile},
    extensions::layout::{fair, fibonacci, grid, magnifier},
    pure::geometry::Rect,
    Xid,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub mod messages;

#[doc(inline)]
pub use messages::Message;

/// The tunable parameters of a tag that are consumed by layouts.
///
/// Values are assumed to have been validated before reaching a layout: `mwfact` in the
/// open interval (0, 1) and `ncol` at least 1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// The fraction of the work area given to the master area
    pub mwfact: f64,
    /// The number of clients placed in the master area
    pub nmaster: u32,
    /// The number of columns used for the stack area
    pub ncol: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            mwfact: 0.5,
            nmaster: 1,
            ncol: 1,
        }
    }
}

/// The per-client information a [Layout] is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutClient {
    /// The X window ID of the client
    pub id: Xid,
    /// The border width of the client in pixels
    pub border: u32,
    /// The geometry the client had when it was last floating
    pub floating_geometry: Rect,
}

/// Everything other than the client list that a [Layout] uses to compute positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    /// The region of the screen available for tiling
    pub area: Rect,
    /// The parameters of the tag being laid out
    pub params: LayoutParams,
    /// The currently focused client on the screen, if any
    pub focused: Option<Xid>,
}

/// The available placement algorithms.
///
/// String representations are the lowercase variant names (e.g. `"tileleft"`) and can be
/// parsed back using [FromStr][std::str::FromStr].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    /// Master column on the left, stack columns on the right
    #[default]
    Tile,
    /// Master column on the right, stack columns on the left
    TileLeft,
    /// Master row along the top, stack clients side by side beneath it
    BStack,
    /// Master row along the top, stack columns beneath it
    BStackPortrait,
    /// Equal sized cells filled row by row
    FairH,
    /// Equal sized cells filled column by column
    FairV,
    /// Each client takes half of the remaining space, rotating inwards
    Spiral,
    /// Each client takes half of the remaining space, shrinking towards the bottom right
    Dwindle,
    /// The focused client is enlarged and centered over the others
    Magnifier,
    /// Every client fills the work area
    Max,
    /// Clients keep their own floating geometry
    Floating,
    /// A column-major grid of near equal cells
    Grid,
}

impl Layout {
    /// A short symbol for this layout, appropriate for rendering in a status bar.
    pub fn symbol(&self) -> &'static str {
        match self {
            Layout::Tile => "[]=",
            Layout::TileLeft => "=[]",
            Layout::BStack => "TTT",
            Layout::BStackPortrait => "|||",
            Layout::FairH => "[=]",
            Layout::FairV => "[|]",
            Layout::Spiral => "(@)",
            Layout::Dwindle => "[\\]",
            Layout::Magnifier => "[M]",
            Layout::Max => "[ ]",
            Layout::Floating => "><>",
            Layout::Grid => "###",
        }
    }

    /// Whether or not clients are positioned by the user rather than by this layout.
    pub fn is_floating(&self) -> bool {
        matches!(self, Layout::Floating)
    }

    /// Whether or not a relative change to `mwfact` should have its sign flipped so that
    /// growing the master area is visually consistent with the other layouts.
    pub fn inverts_mwfact(&self) -> bool {
        matches!(self, Layout::TileLeft)
    }

    /// Compute a geometry for each of the given clients.
    ///
    /// The returned geometries are in the same order as `clients` and have already had
    /// each client's border removed, with a minimum width and height of 1px. An empty
    /// client list always results in an empty list of geometries.
    pub fn compute(&self, clients: &[LayoutClient], ctx: &LayoutContext) -> Vec<Rect> {
        let n = clients.len();
        if n == 0 {
            return vec![];
        }

        let LayoutContext { area, params, .. } = *ctx;

        let cells = match self {
            Layout::Tile => tile(n, area, &params, false),
            Layout::TileLeft => tile(n, area, &params, true),
            Layout::BStack => bstack(n, area, &params, false),
            Layout::BStackPortrait => bstack(n, area, &params, true),
            Layout::FairH => fair(n, area, true),
            Layout::FairV => fair(n, area, false),
            Layout::Spiral => fibonacci(clients, area, true),
            Layout::Dwindle => fibonacci(clients, area, false),
            Layout::Magnifier => magnifier(n, self.magnified_index(clients, ctx), area, &params),
            Layout::Max => max(n, area),
            Layout::Grid => grid(n, area),

            // Floating clients were sized by the user so they keep their border
            Layout::Floating => return floating(clients),
        };

        debug_assert_eq!(cells.len(), n, "{self} produced the wrong number of cells");

        cells
            .into_iter()
            .zip(clients)
            .map(|(r, c)| r.shrink_in(c.border))
            .collect()
    }

    /// The client that should be stacked above all others after this layout is applied.
    pub fn raised(&self, clients: &[LayoutClient], ctx: &LayoutContext) -> Option<Xid> {
        match self {
            Layout::Magnifier if !clients.is_empty() => {
                Some(clients[self.magnified_index(clients, ctx)].id)
            }
            _ => None,
        }
    }

    // The focused client if it is being tiled, otherwise the first tiled client.
    fn magnified_index(&self, clients: &[LayoutClient], ctx: &LayoutContext) -> usize {
        ctx.focused
            .and_then(|f| clients.iter().position(|c| c.id == f))
            .unwrap_or(0)
    }
}
