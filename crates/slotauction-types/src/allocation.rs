//! Slot assignment types.
//!
//! An [`Allocation`] maps each of the two slots to the winning bidder, or to
//! nobody. The same id holds both slots only when it won with a `Both` bid;
//! two distinct ids hold one slot each only from `Top` and `Sidebar` bids.

use serde::{Deserialize, Serialize};

use crate::BidderId;

/// One of the two advertising slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Top,
    Sidebar,
}

impl Slot {
    /// Both slots, top first.
    pub const ALL: [Slot; 2] = [Slot::Top, Slot::Sidebar];
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Sidebar => write!(f, "sidebar"),
        }
    }
}

/// The shape of a feasible allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationShape {
    /// One `Both` bid holds both slots.
    Joint,
    /// The best `Top` and/or best `Sidebar` bid, one slot each.
    Split,
    /// Nothing assigned.
    Empty,
}

impl std::fmt::Display for AllocationShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Joint => write!(f, "JOINT"),
            Self::Split => write!(f, "SPLIT"),
            Self::Empty => write!(f, "EMPTY"),
        }
    }
}

/// Slot -> winner mapping. `None` means the slot goes unassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub top: Option<BidderId>,
    pub sidebar: Option<BidderId>,
}

impl Allocation {
    /// No slot assigned.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Both slots to a single `Both` bidder.
    #[must_use]
    pub fn joint(winner: BidderId) -> Self {
        Self {
            top: Some(winner.clone()),
            sidebar: Some(winner),
        }
    }

    /// Each slot to its own category winner, if any.
    #[must_use]
    pub fn split(top: Option<BidderId>, sidebar: Option<BidderId>) -> Self {
        Self { top, sidebar }
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&BidderId> {
        match slot {
            Slot::Top => self.top.as_ref(),
            Slot::Sidebar => self.sidebar.as_ref(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.sidebar.is_none()
    }

    /// Each winner once, in slot order (top first).
    #[must_use]
    pub fn winners(&self) -> Vec<&BidderId> {
        let mut winners: Vec<&BidderId> = Vec::with_capacity(crate::constants::MAX_WINNERS);
        for slot in Slot::ALL {
            if let Some(id) = self.get(slot) {
                if !winners.contains(&id) {
                    winners.push(id);
                }
            }
        }
        winners
    }

    /// Slots held by `bidder`.
    #[must_use]
    pub fn slots_of(&self, bidder: &BidderId) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot) == Some(bidder))
            .collect()
    }

    /// Returns `true` if `bidder` holds at least one slot.
    #[must_use]
    pub fn is_winner(&self, bidder: &BidderId) -> bool {
        self.top.as_ref() == Some(bidder) || self.sidebar.as_ref() == Some(bidder)
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |slot: Option<&BidderId>| slot.map_or_else(|| "-".to_string(), ToString::to_string);
        write!(
            f,
            "top={} sidebar={}",
            show(self.top.as_ref()),
            show(self.sidebar.as_ref())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joint_winner_listed_once() {
        let alloc = Allocation::joint(BidderId::from("A1"));
        assert_eq!(alloc.winners(), vec![&BidderId::from("A1")]);
        assert_eq!(
            alloc.slots_of(&BidderId::from("A1")),
            vec![Slot::Top, Slot::Sidebar]
        );
    }

    #[test]
    fn split_winners_in_slot_order() {
        let alloc = Allocation::split(Some("B1".into()), Some("C1".into()));
        let winners: Vec<&str> = alloc.winners().into_iter().map(BidderId::as_str).collect();
        assert_eq!(winners, vec!["B1", "C1"]);
        assert!(alloc.is_winner(&"C1".into()));
        assert!(!alloc.is_winner(&"A1".into()));
    }

    #[test]
    fn half_empty_split() {
        let alloc = Allocation::split(None, Some("C1".into()));
        assert!(!alloc.is_empty());
        assert_eq!(alloc.get(Slot::Top), None);
        assert_eq!(alloc.winners().len(), 1);
    }

    #[test]
    fn empty_allocation() {
        let alloc = Allocation::empty();
        assert!(alloc.is_empty());
        assert!(alloc.winners().is_empty());
        assert_eq!(format!("{alloc}"), "top=- sidebar=-");
    }

    #[test]
    fn wire_shape_uses_slot_names_and_null() {
        let alloc = Allocation::split(Some("B1".into()), None);
        let json = serde_json::to_string(&alloc).unwrap();
        assert_eq!(json, r#"{"top":"B1","sidebar":null}"#);
        assert_eq!(serde_json::to_string(&Slot::Sidebar).unwrap(), "\"sidebar\"");
    }
}
