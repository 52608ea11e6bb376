pub mod composite;
pub mod greedy;
pub mod heuristics;
pub mod policies;
pub mod threat;

use rand::{seq::SliceRandom, Rng, SeedableRng};
use types::{
    Card, District, DistrictEffect, GameRng, PlayerState, PublicInfo, PublicPlayerState,
    Resource, Role, Strategy,
};
use uuid::Uuid;

pub use crate::composite::CompositeStrategy;
pub use crate::greedy::GreedyStrategy;
pub use crate::threat::ThreatStrategy;

/// Picks uniformly among the legal choices.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::seed_from_u64(seed),
        }
    }

    pub(crate) fn pick<T: Copy>(&mut self, choices: &[T]) -> T {
        *choices
            .choose(&mut self.rng)
            .expect("Should always have at least one choice to pick from")
    }
}

impl Strategy for RandomStrategy {
    fn choose_role(&mut self, _me: &PlayerState, _info: &PublicInfo, pool: &[Role]) -> Role {
        self.pick(pool)
    }

    fn choose_card_to_build(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Card> {
        let buildable: Vec<Card> = me.buildable_cards(info.win_threshold).copied().collect();
        buildable.choose(&mut self.rng).copied()
    }

    fn choose_resource(&mut self, _me: &PlayerState, _info: &PublicInfo) -> Resource {
        self.pick(&[Resource::Gold, Resource::Cards])
    }

    fn choose_card_to_keep(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        drawn: &[Card],
    ) -> Card {
        self.pick(drawn)
    }

    fn choose_assassination_target(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        self.pick(candidates)
    }

    fn choose_theft_target(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        self.pick(candidates)
    }

    fn choose_hand_swap_target(&mut self, _me: &PlayerState, info: &PublicInfo) -> Option<Uuid> {
        if self.rng.gen_bool(0.5) {
            info.opponents.choose(&mut self.rng).map(|p| p.id)
        } else {
            None
        }
    }

    fn choose_destruction_target(
        &mut self,
        me: &PlayerState,
        _info: &PublicInfo,
        targets: &[PublicPlayerState],
    ) -> Option<(Uuid, District)> {
        let options: Vec<(Uuid, District)> = targets
            .iter()
            .flat_map(|p| p.destroyable(me.gold).map(move |d| (p.id, d)))
            .collect();
        if options.is_empty() || self.rng.gen_bool(0.5) {
            return None;
        }
        Some(self.pick(&options))
    }

    fn wants_district_effect(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        _effect: DistrictEffect,
    ) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn choose_cards_to_redraw(&mut self, me: &PlayerState, _info: &PublicInfo) -> Vec<Card> {
        me.hand
            .iter()
            .filter(|_| self.rng.gen_bool(0.5))
            .copied()
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn empty_info() -> PublicInfo {
        PublicInfo {
            round: 1,
            win_threshold: 8,
            crowned: None,
            roles_in_round: Vec::new(),
            unused_roles: Vec::new(),
            revealed: Vec::new(),
            killed_role: None,
            opponents: Vec::new(),
            deck_size: 40,
            bank_coins: 20,
        }
    }

    pub fn opponent(name: &str, gold: u32, citadel: &[District]) -> PublicPlayerState {
        PublicPlayerState {
            id: Uuid::new_v4(),
            name: name.to_string(),
            gold,
            hand_size: 2,
            citadel: citadel.to_vec(),
            role: None,
            draft_position: 0,
        }
    }

    #[test]
    fn test_random_choices_stay_legal() {
        let mut bot = RandomStrategy::new(3);
        let me = PlayerState::new("Random".to_string());
        let info = empty_info();
        for _ in 0..50 {
            let role = bot.choose_role(&me, &info, &[Role::Thief, Role::King]);
            assert!(matches!(role, Role::Thief | Role::King));
            assert_eq!(bot.choose_card_to_build(&me, &info), None);
        }
    }

    #[test]
    fn test_random_destruction_stays_affordable() {
        let mut bot = RandomStrategy::new(11);
        let mut me = PlayerState::new("Random".to_string());
        me.gold = 1;
        let info = empty_info();
        let targets = [opponent("Bob", 0, &[District::Palace, District::Temple, District::Keep])];
        for _ in 0..50 {
            if let Some((id, district)) = bot.choose_destruction_target(&me, &info, &targets) {
                assert_eq!(id, targets[0].id);
                assert_eq!(district, District::Temple);
            }
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let me = PlayerState::new("Random".to_string());
        let info = empty_info();
        let pool = Role::ALL;
        let mut a = RandomStrategy::new(5);
        let mut b = RandomStrategy::new(5);
        for _ in 0..20 {
            assert_eq!(
                a.choose_role(&me, &info, &pool),
                b.choose_role(&me, &info, &pool)
            );
        }
    }
}
