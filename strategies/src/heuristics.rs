//! Helpers shared by the bots that look past uniform randomness.

use itertools::Itertools;
use types::{Card, District, PlayerState, PublicInfo, PublicPlayerState, Role};
use uuid::Uuid;

pub fn cheapest(cards: &[Card]) -> Option<Card> {
    cards.iter().min_by_key(|c| (c.cost(), c.id())).copied()
}

/// Cheapest buildable card, preferring the type the current role earns from.
pub fn preferred_build(me: &PlayerState, info: &PublicInfo) -> Option<Card> {
    let buildable: Vec<Card> = me.buildable_cards(info.win_threshold).copied().collect();
    let income_type = me.role.and_then(|r| r.income_type());
    let matching: Vec<Card> = buildable
        .iter()
        .filter(|c| Some(c.district_type()) == income_type)
        .copied()
        .collect();
    cheapest(&matching).or_else(|| cheapest(&buildable))
}

pub fn cheapest_buildable(me: &PlayerState, info: &PublicInfo) -> Option<Card> {
    let buildable: Vec<Card> = me.buildable_cards(info.win_threshold).copied().collect();
    cheapest(&buildable)
}

/// Income the player would collect this turn holding `role`.
pub fn income_with(me: &PlayerState, role: Role) -> u32 {
    let districts: Vec<District> = me.citadel.iter().map(Card::district).collect();
    role.income_for(&districts)
}

pub fn average_opponent_citadel(info: &PublicInfo) -> f64 {
    if info.opponents.is_empty() {
        return 0.0;
    }
    let total: usize = info.opponents.iter().map(|p| p.citadel.len()).sum();
    total as f64 / info.opponents.len() as f64
}

pub fn is_behind(me: &PlayerState, info: &PublicInfo) -> bool {
    average_opponent_citadel(info) > me.citadel.len() as f64
}

pub fn someone_about_to_win(info: &PublicInfo) -> bool {
    info.opponents
        .iter()
        .any(|p| p.is_about_to_win(info.win_threshold))
}

/// Roles `opponent` may be holding, narrowed down by what `me` saw during the draft.
///
/// An opponent that drafted before `me` took one of the roles missing from the
/// pool `me` was offered. One that drafted after took one of the roles `me`
/// left behind. Roles revealed by somebody else are crossed off either way.
pub fn possible_roles(me: &PlayerState, info: &PublicInfo, opponent: Uuid) -> Vec<Role> {
    if let Some(role) = info.revealed_role_of(opponent) {
        return vec![role];
    }
    let drafted_earlier = me.drafted_before.contains(&opponent);
    info.roles_in_round
        .iter()
        .copied()
        .filter(|r| me.offered_roles.contains(r) != drafted_earlier)
        .filter(|r| Some(*r) != me.role)
        .filter(|r| !info.revealed.iter().any(|(owner, role)| role == r && *owner != opponent))
        .collect()
}

/// Best standing destruction: the cheapest affordable district of the
/// opponent with the biggest citadel.
pub fn destroy_in_leader(
    me: &PlayerState,
    targets: &[PublicPlayerState],
) -> Option<(Uuid, District)> {
    let leader = targets.iter().max_by_key(|p| p.citadel.len())?;
    leader
        .destroyable(me.gold)
        .min_by_key(|d| leader.destruction_cost(*d))
        .map(|d| (leader.id, d))
}

/// Opponents sorted by how close they are to finishing, closest first.
pub fn by_threat<'a>(info: &'a PublicInfo) -> Vec<&'a PublicPlayerState> {
    info.opponents
        .iter()
        .sorted_by_key(|p| std::cmp::Reverse((p.citadel.len(), p.gold)))
        .collect()
}
