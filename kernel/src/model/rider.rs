//! Riders and rides.

/// One of the two rival classes of agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiderKind {
    /// The class that must never be outnumbered on an occupied bank.
    Missionary,
    /// The class that must never outnumber missionaries.
    Cannibal,
}

impl RiderKind {
    /// Stable name used in rendered output and canonical JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missionary => "Missionary",
            Self::Cannibal => "Cannibal",
        }
    }
}

impl std::fmt::Display for RiderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The riders carried by a single boat crossing, in boarding order.
///
/// Rides borrow from static storage, so they are `Copy` and can live in
/// const tables. The root of a search tree carries [`Ride::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ride {
    riders: &'static [RiderKind],
}

impl Ride {
    /// No riders. Only used for the root of a search tree.
    pub const EMPTY: Self = Self::new(&[]);

    /// Wrap a static rider list.
    #[must_use]
    pub const fn new(riders: &'static [RiderKind]) -> Self {
        Self { riders }
    }

    /// Riders in boarding order.
    #[must_use]
    pub const fn riders(&self) -> &'static [RiderKind] {
        self.riders
    }

    /// Number of riders of the given kind.
    #[must_use]
    pub fn count(&self, kind: RiderKind) -> u32 {
        let n = self.riders.iter().filter(|&&r| r == kind).count();
        // Rides hold at most two riders.
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.riders.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }
}

impl std::fmt::Display for Ride {
    /// Renders as `[Missionary, Cannibal]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, rider) in self.riders.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(rider.as_str())?;
        }
        f.write_str("]")
    }
}
