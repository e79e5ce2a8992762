//! Exclusion repair: split a pair found on the same team.

use teamdraw_core::{Category, Person, Rule};

use super::swap::RosterSwap;
use super::ActiveRules;
use crate::workspace::{AllocationWorkspace, Seat};

/// Returns `true` if the pair ends up on different teams.
pub(super) fn resolve(
    ws: &mut AllocationWorkspace,
    rule: &Rule,
    active: &ActiveRules<'_>,
) -> bool {
    let [a, b] = &rule.names;
    let (Some(loc_a), Some(loc_b)) = (ws.locate(a), ws.locate(b)) else {
        return true;
    };
    if loc_a.team() != loc_b.team() {
        return true;
    }

    // A captain never moves; between two members, keep the one an inclusion
    // rule ties to this team.
    let (mover, seat) = match (loc_a.seat(), loc_b.seat()) {
        (None, Some(seat)) => (b, seat),
        (Some(seat), None) => (a, seat),
        (Some(seat_a), Some(seat_b)) => {
            if active.bound_by_inclusion(b) && !active.bound_by_inclusion(a) {
                (a, seat_a)
            } else {
                (b, seat_b)
            }
        }
        (None, None) => return false,
    };

    let Some(category) = ws.person(seat).map(|p| p.category) else {
        return false;
    };
    let partners = active.exclusion_partners(mover);

    // Free members first, then rule participants that can trade places
    // without breaking one of their own rules.
    let free = |p: &Person, _: usize| is_free(ws, active, p);
    let tradable = |p: &Person, team: usize| can_trade(ws, active, seat, p, team);
    let same = |p: &Person| p.category == category;
    let target = find_counterpart(ws, seat, &partners, |p, t| same(p) && free(p, t))
        .or_else(|| find_counterpart(ws, seat, &partners, |p, t| same(p) && tradable(p, t)))
        .or_else(|| find_counterpart(ws, seat, &partners, free))
        .or_else(|| find_counterpart(ws, seat, &partners, tradable));
    let Some(target) = target else {
        return false;
    };

    let swap = RosterSwap::new(seat, target);
    if !swap.is_doable(ws) {
        return false;
    }
    swap.do_move(ws);
    true
}

/// First accepted member of another team, in team-index order, whose team
/// holds none of the mover's exclusion partners.
fn find_counterpart(
    ws: &AllocationWorkspace,
    seat: Seat,
    partners: &[&str],
    accept: impl Fn(&Person, usize) -> bool,
) -> Option<Seat> {
    ws.teams()
        .iter()
        .filter(|team| team.index != seat.team)
        .filter(|team| !partners.iter().any(|name| team.contains(name)))
        .find_map(|team| {
            team.roster
                .iter()
                .position(|p| accept(p, team.index))
                .map(|position| Seat::new(team.index, position))
        })
}

/// Not bound by any active rule and not locked.
pub(super) fn is_free(
    ws: &AllocationWorkspace,
    active: &ActiveRules<'_>,
    person: &Person,
) -> bool {
    person.category != Category::Captain
        && !active.is_participant(&person.name)
        && !ws.is_locked(&person.name)
}

/// Whether `counterpart`, sitting on `counterpart_team`, can take the seat of
/// `mover` without landing next to an exclusion partner or leaving an
/// inclusion partner behind.
pub(super) fn can_trade(
    ws: &AllocationWorkspace,
    active: &ActiveRules<'_>,
    mover: Seat,
    counterpart: &Person,
    counterpart_team: usize,
) -> bool {
    if counterpart.is_captain() {
        return false;
    }
    let landing = ws.team(mover.team);
    let mover_name = ws.person(mover).map(|p| p.name.as_str());
    let meets_partner = active
        .exclusion_partners(&counterpart.name)
        .into_iter()
        .any(|partner| Some(partner) != mover_name && landing.contains(partner));
    let leaves_partner = active
        .inclusion_partners(&counterpart.name)
        .into_iter()
        .any(|partner| ws.team(counterpart_team).contains(partner));
    !meets_partner && !leaves_partner
}
