//! Geometry primitives
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::{max, min};

/// An x,y coordinate pair
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// An absolute x coordinate relative to the root window
    pub x: u32,
    /// An absolute y coordinate relative to the root window
    pub y: u32,
}

impl Point {
    /// Create a new Point.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from(raw: (u32, u32)) -> Self {
        let (x, y) = raw;

        Self { x, y }
    }
}

// A Rect converts to its top left corner
impl From<Rect> for Point {
    fn from(r: Rect) -> Self {
        let Rect { x, y, .. } = r;

        Self { x, y }
    }
}

/// Space reserved along each edge of a [Rect].
///
/// Used for both user configured screen padding and for the struts reserved by
/// status bars and docks.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Insets {
    /// Pixels reserved along the top edge
    pub top: u32,
    /// Pixels reserved along the bottom edge
    pub bottom: u32,
    /// Pixels reserved along the left edge
    pub left: u32,
    /// Pixels reserved along the right edge
    pub right: u32,
}

impl Insets {
    /// Create a new set of [Insets].
    pub const fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Combine two sets of insets by taking the larger reservation for each edge.
    pub fn max(&self, other: &Insets) -> Self {
        Self {
            top: max(self.top, other.top),
            bottom: max(self.bottom, other.bottom),
            left: max(self.left, other.left),
            right: max(self.right, other.right),
        }
    }

    /// Sum two sets of insets edge by edge.
    pub fn add(&self, other: &Insets) -> Self {
        Self {
            top: self.top + other.top,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
            right: self.right + other.right,
        }
    }
}

/// An X window / screen position: top left corner + extent
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Rect {
    /// The x-coordinate of the top left corner of this rect
    pub x: u32,
    /// The y-coordinate of the top left corner of this rect
    pub y: u32,
    /// The width of this rect
    pub w: u32,
    /// The height of this rect
    pub h: u32,
}

impl Rect {
    /// Create a new Rect.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }

    /// The x-coordinate one past the right hand edge of this rect.
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// The y-coordinate one past the bottom edge of this rect.
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// The total area covered by this rect in square pixels.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// The midpoint of this rectangle.
    ///
    /// Odd side lengths will lead to a truncated point towards the top left corner
    /// in order to maintain integer coordinates.
    /// ```
    /// # use trellis::pure::geometry::{Rect, Point};
    /// let r = Rect::new(0, 0, 100, 200);
    ///
    /// assert_eq!(r.midpoint(), Point { x: 50, y: 100 });
    /// ```
    pub fn midpoint(&self) -> Point {
        Point {
            x: self.x + self.w / 2,
            y: self.y + self.h / 2,
        }
    }

    /// Shrink width and height by the given pixel border, maintaining the current x and y
    /// coordinates. The resulting `Rect` will always have a minimum width and height of 1.
    /// ```
    /// # use trellis::pure::geometry::Rect;
    /// let r = Rect::new(0, 0, 100, 200);
    ///
    /// assert_eq!(r.shrink_in(10), Rect::new(0, 0, 80, 180));
    /// assert_eq!(r.shrink_in(50), Rect::new(0, 0, 1, 100));
    /// assert_eq!(r.shrink_in(100), Rect::new(0, 0, 1, 1));
    /// ```
    pub fn shrink_in(&self, border: u32) -> Self {
        let w = if self.w <= 2 * border {
            1
        } else {
            self.w - 2 * border
        };
        let h = if self.h <= 2 * border {
            1
        } else {
            self.h - 2 * border
        };

        Self { w, h, ..*self }
    }

    /// Remove the given [Insets] from the edges of this rect.
    ///
    /// Insets that would consume the entire rect leave a 1x1 rect at the clamped position.
    /// ```
    /// # use trellis::pure::geometry::{Insets, Rect};
    /// let r = Rect::new(0, 0, 1000, 800);
    ///
    /// assert_eq!(r.inset(&Insets::new(20, 0, 5, 5)), Rect::new(5, 20, 990, 780));
    /// ```
    pub fn inset(&self, insets: &Insets) -> Self {
        let dw = insets.left + insets.right;
        let dh = insets.top + insets.bottom;

        Self {
            x: self.x + min(insets.left, self.w.saturating_sub(1)),
            y: self.y + min(insets.top, self.h.saturating_sub(1)),
            w: max(1, self.w.saturating_sub(dw)),
            h: max(1, self.h.saturating_sub(dh)),
        }
    }

    /// Create a new [Rect] with width equal to `factor` x `self.w`
    /// ```
    /// # use trellis::pure::geometry::Rect;
    /// let r = Rect::new(0, 0, 30, 40);
    ///
    /// assert_eq!(r.scale_w(1.5), Rect::new(0, 0, 45, 40));
    /// assert_eq!(r.scale_w(0.5), Rect::new(0, 0, 15, 40));
    /// ```
    pub fn scale_w(&self, factor: f64) -> Self {
        Self {
            w: (self.w as f64 * factor).floor() as u32,
            ..*self
        }
    }

    /// Create a new [Rect] with height equal to `factor` x `self.h`
    /// ```
    /// # use trellis::pure::geometry::Rect;
    /// let r = Rect::new(0, 0, 30, 40);
    ///
    /// assert_eq!(r.scale_h(1.5), Rect::new(0, 0, 30, 60));
    /// assert_eq!(r.scale_h(0.5), Rect::new(0, 0, 30, 20));
    /// ```
    pub fn scale_h(&self, factor: f64) -> Self {
        Self {
            h: (self.h as f64 * factor).floor() as u32,
            ..*self
        }
    }

    /// Check whether this Rect contains `other` as a sub-Rect
    pub fn contains(&self, other: &Rect) -> bool {
        match other {
            Rect { x, .. } if *x < self.x => false,
            Rect { x, w, .. } if (*x + *w) > (self.x + self.w) => false,
            Rect { y, .. } if *y < self.y => false,
            Rect { y, h, .. } if (*y + *h) > (self.y + self.h) => false,
            _ => true,
        }
    }

    /// Check whether this Rect contains `p`
    pub fn contains_point<P>(&self, p: P) -> bool
    where
        P: Into<Point>,
    {
        let p = p.into();

        (self.x..(self.x + self.w + 1)).contains(&p.x)
            && (self.y..(self.y + self.h + 1)).contains(&p.y)
    }

    /// The overlapping region of this Rect and `other` if there is one.
    ///
    /// Rects that only share an edge do not intersect.
    /// ```
    /// # use trellis::pure::geometry::Rect;
    /// let r1 = Rect::new(0, 0, 100, 100);
    /// let r2 = Rect::new(50, 50, 100, 100);
    ///
    /// assert_eq!(r1.intersection(&r2), Some(Rect::new(50, 50, 50, 50)));
    /// assert_eq!(r1.intersection(&Rect::new(100, 0, 10, 10)), None);
    /// ```
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = max(self.x, other.x);
        let y = max(self.y, other.y);
        let right = min(self.right(), other.right());
        let bottom = min(self.bottom(), other.bottom());

        if right <= x || bottom <= y {
            return None;
        }

        Some(Rect::new(x, y, right - x, bottom - y))
    }

    /// Check whether this Rect and `other` overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Center this Rect inside of `enclosing`.
    ///
    /// Returns `None` if this Rect can not fit inside enclosing
    pub fn centered_in(&self, enclosing: &Rect) -> Option<Self> {
        if self.w > enclosing.w || self.h > enclosing.h {
            return None;
        }

        Some(Self {
            x: enclosing.x + ((enclosing.w - self.w) / 2),
            y: enclosing.y + ((enclosing.h - self.h) / 2),
            ..*self
        })
    }

    /// Split this `Rect` into evenly sized rows.
    ///
    /// The last row absorbs any remainder from the integer division so that the
    /// rows cover this `Rect` exactly. Asking for zero rows returns no rows.
    pub fn as_rows(&self, n_rows: u32) -> Vec<Rect> {
        match n_rows {
            0 => vec![],
            1 => vec![*self],
            n => {
                let h = self.h / n;
                (0..n)
                    .map(|k| {
                        let rh = if k == n - 1 { self.h - k * h } else { h };
                        Rect::new(self.x, self.y + k * h, self.w, rh)
                    })
                    .collect()
            }
        }
    }

    /// Split this `Rect` into evenly sized columns.
    ///
    /// The last column absorbs any remainder from the integer division so that the
    /// columns cover this `Rect` exactly. Asking for zero columns returns no columns.
    pub fn as_columns(&self, n_columns: u32) -> Vec<Rect> {
        match n_columns {
            0 => vec![],
            1 => vec![*self],
            n => {
                let w = self.w / n;
                (0..n)
                    .map(|k| {
                        let cw = if k == n - 1 { self.w - k * w } else { w };
                        Rect::new(self.x + k * w, self.y, cw, self.h)
                    })
                    .collect()
            }
        }
    }

    /// Divides this rect into two columns where the first has the given width.
    ///
    /// Returns `None` if new_width is out of bounds
    pub fn split_at_width(&self, new_width: u32) -> Option<(Self, Self)> {
        if new_width >= self.w {
            None
        } else {
            Some((
                Self {
                    w: new_width,
                    ..*self
                },
                Self {
                    x: self.x + new_width,
                    w: self.w - new_width,
                    ..*self
                },
            ))
        }
    }

    /// Divides this rect into two rows where the first has the given height.
    ///
    /// Returns `None` if new_height is out of bounds
    pub fn split_at_height(&self, new_height: u32) -> Option<(Self, Self)> {
        if new_height >= self.h {
            None
        } else {
            Some((
                Self {
                    h: new_height,
                    ..*self
                },
                Self {
                    y: self.y + new_height,
                    h: self.h - new_height,
                    ..*self
                },
            ))
        }
    }

    /// Divides this rect into two columns along its midpoint.
    pub fn split_at_mid_width(&self) -> (Self, Self) {
        let new_width = self.w / 2;
        (
            Self {
                w: new_width,
                ..*self
            },
            Self {
                x: self.x + new_width,
                w: self.w - new_width,
                ..*self
            },
        )
    }

    /// Divides this rect into two rows along its midpoint.
    pub fn split_at_mid_height(&self) -> (Self, Self) {
        let new_height = self.h / 2;
        (
            Self {
                h: new_height,
                ..*self
            },
            Self {
                y: self.y + new_height,
                h: self.h - new_height,
                ..*self
            },
        )
    }
}
