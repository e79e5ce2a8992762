//! Inclusion repair: bring a split pair onto one team.

use teamdraw_core::{Person, Rule};

use super::exclusion::{can_trade, is_free};
use super::swap::{RosterSwap, RosterTransfer};
use super::ActiveRules;
use crate::workspace::{AllocationWorkspace, Seat};

/// Returns `true` if the pair ends up on the same team.
///
/// The second name moves to the first name's team unless it is a captain.
/// Two captains can never share a team. A counterpart from the destination
/// swaps in return; the mover is transferred alone only when no member there
/// can trade places.
pub(super) fn resolve(
    ws: &mut AllocationWorkspace,
    rule: &Rule,
    active: &ActiveRules<'_>,
) -> bool {
    let [a, b] = &rule.names;
    let (Some(loc_a), Some(loc_b)) = (ws.locate(a), ws.locate(b)) else {
        return true;
    };
    if loc_a.team() == loc_b.team() {
        return true;
    }

    let (seat, destination) = match (loc_a.seat(), loc_b.seat()) {
        (_, Some(seat)) => (seat, loc_a.team()),
        (Some(seat), None) => (seat, loc_b.team()),
        (None, None) => return false,
    };
    let Some(category) = ws.person(seat).map(|p| p.category) else {
        return false;
    };

    let counterpart = {
        let roster = &ws.team(destination).roster;
        let find = |accept: &dyn Fn(&Person) -> bool| roster.iter().position(accept);
        let same = |p: &Person| p.category == category;
        let free = |p: &Person| is_free(ws, active, p);
        let tradable = |p: &Person| {
            !rule.involves(&p.name) && can_trade(ws, active, seat, p, destination)
        };
        find(&|p| same(p) && free(p))
            .or_else(|| find(&|p| same(p) && tradable(p)))
            .or_else(|| find(&free))
            .or_else(|| find(&tradable))
    };

    if let Some(position) = counterpart {
        let swap = RosterSwap::new(seat, Seat::new(destination, position));
        if swap.is_doable(ws) {
            swap.do_move(ws);
            return true;
        }
    }

    let transfer = RosterTransfer::new(seat, destination);
    if !transfer.is_doable(ws) {
        return false;
    }
    transfer.do_move(ws);
    true
}
