use itertools::Itertools;
use types::{
    Card, District, DistrictEffect, PlayerState, PublicInfo, PublicPlayerState, Resource, Role,
    Strategy,
};
use uuid::Uuid;

use crate::{heuristics, GreedyStrategy, RandomStrategy};

/// Watches the opponents and spends its turn slowing down whoever is ahead.
///
/// Roles are scored from the bot's own position (hand, gold, income) and the
/// table's (richest purse, citadels close to the threshold). When it gets to
/// kill or rob, it works out which roles the leading opponent could hold from
/// what it saw during the draft and aims there.
#[derive(Debug)]
pub struct ThreatStrategy {
    random: RandomStrategy,
    builder: GreedyStrategy,
}

impl ThreatStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            random: RandomStrategy::new(seed),
            builder: GreedyStrategy::new(seed.wrapping_add(1)),
        }
    }

    pub fn role_score(me: &PlayerState, info: &PublicInfo, role: Role) -> i32 {
        let income = heuristics::income_with(me, role) as i32;
        let richest = info.richest().map_or(0, |p| p.gold) as i32;
        let danger = heuristics::someone_about_to_win(info);
        let close_to_finish = me.citadel.len() + 2 >= info.win_threshold;
        let biggest_hand = info.opponents.iter().map(|p| p.hand_size).max().unwrap_or(0);

        let situational = match role {
            Role::Assassin => 1 + if danger { 4 } else { 0 },
            Role::Thief => richest / 2,
            Role::Magician => {
                if me.hand.len() < 2 && biggest_hand > me.hand.len() + 1 {
                    4
                } else {
                    0
                }
            }
            Role::King => {
                if info.crowned == Some(me.id) {
                    0
                } else {
                    1
                }
            }
            Role::Bishop => {
                if close_to_finish {
                    3
                } else {
                    0
                }
            }
            Role::Merchant => 1,
            Role::Architect => {
                if me.hand.len() >= 2 && me.gold >= 4 {
                    3
                } else {
                    0
                }
            }
            Role::Warlord => {
                if danger {
                    3
                } else {
                    0
                }
            }
        };
        income + situational
    }

    /// Roles the most threatening opponent could be holding, among `candidates`.
    fn roles_of_leader(
        &self,
        me: &PlayerState,
        info: &PublicInfo,
        candidates: &[Role],
    ) -> Vec<Role> {
        heuristics::by_threat(info)
            .into_iter()
            .map(|p| {
                heuristics::possible_roles(me, info, p.id)
                    .into_iter()
                    .filter(|r| candidates.contains(r))
                    .collect::<Vec<_>>()
            })
            .find(|roles| !roles.is_empty())
            .unwrap_or_default()
    }
}

impl Strategy for ThreatStrategy {
    fn choose_role(&mut self, me: &PlayerState, info: &PublicInfo, pool: &[Role]) -> Role {
        let best = pool
            .iter()
            .copied()
            .max_by_key(|role| (Self::role_score(me, info, *role), std::cmp::Reverse(*role)));
        best.unwrap_or_else(|| self.random.pick(pool))
    }

    fn choose_card_to_build(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Card> {
        heuristics::preferred_build(me, info)
    }

    fn choose_resource(&mut self, me: &PlayerState, info: &PublicInfo) -> Resource {
        self.builder.choose_resource(me, info)
    }

    fn choose_card_to_keep(&mut self, me: &PlayerState, info: &PublicInfo, drawn: &[Card]) -> Card {
        self.builder.choose_card_to_keep(me, info, drawn)
    }

    fn choose_assassination_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        let suspects = self.roles_of_leader(me, info, candidates);
        if suspects.is_empty() {
            return self.random.pick(candidates);
        }
        log::debug!("{} suspects the leader holds [{}]", me.name, suspects.iter().join(", "));
        // Among the leader's possible roles, the one that builds fastest.
        suspects
            .iter()
            .copied()
            .max_by_key(|r| (r.builds_allowed(), *r))
            .unwrap_or_else(|| self.random.pick(candidates))
    }

    /// Robs the leader when someone is about to win, the richest purse otherwise.
    fn choose_theft_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        let mut suspects = if heuristics::someone_about_to_win(info) {
            self.roles_of_leader(me, info, candidates)
        } else {
            Vec::new()
        };
        if suspects.is_empty() {
            suspects = info
                .richest()
                .map(|p| heuristics::possible_roles(me, info, p.id))
                .unwrap_or_default()
                .into_iter()
                .filter(|r| candidates.contains(r))
                .collect();
        }
        if suspects.is_empty() {
            return self.random.pick(candidates);
        }
        log::debug!("{} suspects [{}] for theft", me.name, suspects.iter().join(", "));
        self.random.pick(&suspects)
    }

    fn choose_hand_swap_target(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Uuid> {
        self.builder.choose_hand_swap_target(me, info)
    }

    fn choose_cards_to_redraw(&mut self, me: &PlayerState, info: &PublicInfo) -> Vec<Card> {
        self.builder.choose_cards_to_redraw(me, info)
    }

    /// Hits the opponent closest to the threshold, in its cheapest district.
    fn choose_destruction_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        targets: &[PublicPlayerState],
    ) -> Option<(Uuid, District)> {
        let about_to_win: Vec<PublicPlayerState> = targets
            .iter()
            .filter(|p| p.is_about_to_win(info.win_threshold))
            .cloned()
            .collect();
        if about_to_win.is_empty() {
            heuristics::destroy_in_leader(me, targets)
        } else {
            heuristics::destroy_in_leader(me, &about_to_win)
        }
    }

    fn wants_district_effect(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        effect: DistrictEffect,
    ) -> bool {
        self.builder.wants_district_effect(me, info, effect)
    }
}
