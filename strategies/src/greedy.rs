use rand::seq::SliceRandom;
use types::{
    Card, District, DistrictEffect, PlayerState, PublicInfo, PublicPlayerState, Resource, Role,
    Strategy,
};
use uuid::Uuid;

use crate::{heuristics, RandomStrategy};

/// Longest streak of rounds with the same role before the bot switches.
pub const MAX_SAME_ROLE_IN_A_ROW: u32 = 2;

/// Builds cheap and often, and drafts the role its citadel pays best.
#[derive(Debug)]
pub struct GreedyStrategy {
    random: RandomStrategy,
    last_role: Option<Role>,
    streak: u32,
}

impl GreedyStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            random: RandomStrategy::new(seed),
            last_role: None,
            streak: 0,
        }
    }

    fn pick_role(&mut self, me: &PlayerState, pool: &[Role]) -> Role {
        let avoid = self.last_role.filter(|_| self.streak >= MAX_SAME_ROLE_IN_A_ROW);
        let allowed: Vec<Role> = pool.iter().copied().filter(|r| Some(*r) != avoid).collect();
        let allowed = if allowed.is_empty() { pool.to_vec() } else { allowed };

        if me.hand.len() <= 1 && allowed.contains(&Role::Magician) {
            return Role::Magician;
        }
        for district_type in me.types_by_frequency() {
            if let Some(role) = allowed
                .iter()
                .find(|r| r.income_type() == Some(district_type))
            {
                return *role;
            }
        }
        self.random.pick(&allowed)
    }
}

impl Strategy for GreedyStrategy {
    fn choose_role(&mut self, me: &PlayerState, _info: &PublicInfo, pool: &[Role]) -> Role {
        let role = self.pick_role(me, pool);
        if self.last_role == Some(role) {
            self.streak += 1;
        } else {
            self.last_role = Some(role);
            self.streak = 1;
        }
        log::debug!("{} drafts {role} ({} in a row)", me.name, self.streak);
        role
    }

    fn choose_card_to_build(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Card> {
        heuristics::preferred_build(me, info)
    }

    /// Gold when the cheapest new district is out of reach, cards otherwise.
    fn choose_resource(&mut self, me: &PlayerState, _info: &PublicInfo) -> Resource {
        let unbuilt: Vec<Card> = me.unbuilt_cards().copied().collect();
        match heuristics::cheapest(&unbuilt) {
            Some(card) if card.cost() > me.gold => Resource::Gold,
            _ => Resource::Cards,
        }
    }

    fn choose_card_to_keep(
        &mut self,
        me: &PlayerState,
        _info: &PublicInfo,
        drawn: &[Card],
    ) -> Card {
        let fresh: Vec<Card> = drawn
            .iter()
            .filter(|c| !me.has_built(c.district()))
            .copied()
            .collect();
        heuristics::cheapest(&fresh)
            .or_else(|| heuristics::cheapest(drawn))
            .expect("Should always draw at least one card to keep")
    }

    fn choose_assassination_target(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        let mut worth_killing = [Role::Architect, Role::Merchant, Role::King];
        worth_killing.shuffle(&mut self.random.rng);
        worth_killing
            .into_iter()
            .find(|r| candidates.contains(r))
            .unwrap_or_else(|| self.random.pick(candidates))
    }

    fn choose_theft_target(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        [Role::Merchant, Role::King, Role::Architect]
            .into_iter()
            .find(|r| candidates.contains(r))
            .unwrap_or_else(|| self.random.pick(candidates))
    }

    /// Swaps with the biggest hand at the table if it beats our own.
    fn choose_hand_swap_target(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Uuid> {
        info.opponents
            .iter()
            .max_by_key(|p| p.hand_size)
            .filter(|p| p.hand_size > me.hand.len())
            .map(|p| p.id)
    }

    fn choose_cards_to_redraw(&mut self, me: &PlayerState, _info: &PublicInfo) -> Vec<Card> {
        me.hand.iter().filter(|c| c.cost() > 2).copied().collect()
    }

    fn choose_destruction_target(
        &mut self,
        me: &PlayerState,
        _info: &PublicInfo,
        targets: &[PublicPlayerState],
    ) -> Option<(Uuid, District)> {
        heuristics::destroy_in_leader(me, targets)
    }

    fn wants_district_effect(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        effect: DistrictEffect,
    ) -> bool {
        match effect {
            DistrictEffect::Smithy => {
                me.gold > 3 && (me.hand.len() < 2 || heuristics::is_behind(me, info))
            }
            // Only worth it when a card in hand is already standing in the citadel.
            DistrictEffect::Laboratory => me.hand.len() > me.unbuilt_cards().count(),
            DistrictEffect::Graveyard => me.gold > 1,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn me_with(hand: &[District], citadel: &[District], gold: u32) -> PlayerState {
        let mut me = PlayerState::new("Greedy".to_string());
        me.gold = gold;
        for (id, d) in hand.iter().enumerate() {
            me.hand.push(Card::new(id as u32, *d));
        }
        for (id, d) in citadel.iter().enumerate() {
            me.citadel.push(Card::new(100 + id as u32, *d));
        }
        me
    }

    #[test]
    fn test_never_picks_same_role_three_rounds_running() {
        let mut bot = GreedyStrategy::new(7);
        let me = me_with(&[District::Manor, District::Castle], &[District::Palace], 0);
        let pool = [Role::Thief, Role::King, Role::Bishop];
        let info = crate::tests::empty_info();
        let picks: Vec<Role> = (0..3)
            .map(|_| bot.choose_role(&me, &info, &pool))
            .collect();
        assert_eq!(&picks[..2], &[Role::King, Role::King]);
        assert_ne!(picks[2], Role::King);
    }

    #[test]
    fn test_tiny_hand_goes_magician() {
        let mut bot = GreedyStrategy::new(1);
        let me = me_with(&[District::Temple], &[District::Manor], 0);
        assert_eq!(
            bot.pick_role(&me, &[Role::King, Role::Magician]),
            Role::Magician
        );
    }

    #[test]
    fn test_prefers_most_frequent_type() {
        let mut bot = GreedyStrategy::new(1);
        let me = me_with(
            &[District::Temple, District::Tavern],
            &[District::Market, District::Docks, District::Manor],
            0,
        );
        assert_eq!(
            bot.pick_role(&me, &[Role::King, Role::Merchant, Role::Warlord]),
            Role::Merchant
        );
    }

    #[test]
    fn test_takes_gold_when_cheapest_card_is_unaffordable() {
        let mut bot = GreedyStrategy::new(1);
        let info = crate::tests::empty_info();
        let poor = me_with(&[District::Castle, District::Palace], &[], 2);
        assert_eq!(bot.choose_resource(&poor, &info), Resource::Gold);
        let rich = me_with(&[District::Castle], &[], 6);
        assert_eq!(bot.choose_resource(&rich, &info), Resource::Cards);
    }

    #[test]
    fn test_builds_income_type_first() {
        let mut bot = GreedyStrategy::new(1);
        let info = crate::tests::empty_info();
        let mut me = me_with(&[District::Tavern, District::Castle, District::Manor], &[], 10);
        me.role = Some(Role::King);
        let card = bot.choose_card_to_build(&me, &info).unwrap();
        assert_eq!(card.district(), District::Manor);
    }
}
