use std::fmt::Debug;

use types::{
    Card, District, DistrictEffect, PlayerState, PublicInfo, PublicPlayerState, Resource, Role,
    Strategy,
};
use uuid::Uuid;

use crate::RandomStrategy;

/// Draft choice. `None` leaves the pick to chance.
pub trait RolePolicy: Debug + Send {
    fn choose_role(&mut self, me: &PlayerState, info: &PublicInfo, pool: &[Role]) -> Option<Role>;
}

pub trait ResourcePolicy: Debug + Send {
    fn choose_resource(&mut self, me: &PlayerState, info: &PublicInfo) -> Resource;
}

/// `None` stops building for the turn.
pub trait BuildPolicy: Debug + Send {
    fn choose_card_to_build(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Card>;
}

/// `None` leaves the kill to chance.
pub trait AssassinationPolicy: Debug + Send {
    fn choose_target(&mut self, me: &PlayerState, info: &PublicInfo, candidates: &[Role])
        -> Option<Role>;
}

/// `None` leaves the theft to chance.
pub trait TheftPolicy: Debug + Send {
    fn choose_target(&mut self, me: &PlayerState, info: &PublicInfo, candidates: &[Role])
        -> Option<Role>;
}

/// `None` spares every citadel this turn.
pub trait DestructionPolicy: Debug + Send {
    fn choose_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        targets: &[PublicPlayerState],
    ) -> Option<(Uuid, District)>;
}

/// A bot assembled from independent policies. Every decision without a
/// policy, or whose policy has no opinion, is made at random.
#[derive(Debug, Default)]
pub struct CompositeStrategy {
    role: Option<Box<dyn RolePolicy>>,
    resource: Option<Box<dyn ResourcePolicy>>,
    build: Option<Box<dyn BuildPolicy>>,
    assassination: Option<Box<dyn AssassinationPolicy>>,
    theft: Option<Box<dyn TheftPolicy>>,
    destruction: Option<Box<dyn DestructionPolicy>>,
    fallback: RandomStrategy,
}

impl CompositeStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            fallback: RandomStrategy::new(seed),
            ..Self::default()
        }
    }

    pub fn with_role_policy(mut self, policy: impl RolePolicy + 'static) -> Self {
        self.role = Some(Box::new(policy));
        self
    }

    pub fn with_resource_policy(mut self, policy: impl ResourcePolicy + 'static) -> Self {
        self.resource = Some(Box::new(policy));
        self
    }

    pub fn with_build_policy(mut self, policy: impl BuildPolicy + 'static) -> Self {
        self.build = Some(Box::new(policy));
        self
    }

    pub fn with_assassination_policy(mut self, policy: impl AssassinationPolicy + 'static) -> Self {
        self.assassination = Some(Box::new(policy));
        self
    }

    pub fn with_theft_policy(mut self, policy: impl TheftPolicy + 'static) -> Self {
        self.theft = Some(Box::new(policy));
        self
    }

    pub fn with_destruction_policy(mut self, policy: impl DestructionPolicy + 'static) -> Self {
        self.destruction = Some(Box::new(policy));
        self
    }
}

impl Strategy for CompositeStrategy {
    fn choose_role(&mut self, me: &PlayerState, info: &PublicInfo, pool: &[Role]) -> Role {
        self.role
            .as_mut()
            .and_then(|p| p.choose_role(me, info, pool))
            .filter(|r| pool.contains(r))
            .unwrap_or_else(|| self.fallback.choose_role(me, info, pool))
    }

    fn choose_card_to_build(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Card> {
        match self.build.as_mut() {
            Some(policy) => policy.choose_card_to_build(me, info),
            None => self.fallback.choose_card_to_build(me, info),
        }
    }

    fn choose_resource(&mut self, me: &PlayerState, info: &PublicInfo) -> Resource {
        match self.resource.as_mut() {
            Some(policy) => policy.choose_resource(me, info),
            None => self.fallback.choose_resource(me, info),
        }
    }

    fn choose_card_to_keep(&mut self, me: &PlayerState, info: &PublicInfo, drawn: &[Card]) -> Card {
        self.fallback.choose_card_to_keep(me, info, drawn)
    }

    fn choose_assassination_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        self.assassination
            .as_mut()
            .and_then(|p| p.choose_target(me, info, candidates))
            .filter(|r| candidates.contains(r))
            .unwrap_or_else(|| self.fallback.choose_assassination_target(me, info, candidates))
    }

    fn choose_theft_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        self.theft
            .as_mut()
            .and_then(|p| p.choose_target(me, info, candidates))
            .filter(|r| candidates.contains(r))
            .unwrap_or_else(|| self.fallback.choose_theft_target(me, info, candidates))
    }

    fn choose_hand_swap_target(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Uuid> {
        self.fallback.choose_hand_swap_target(me, info)
    }

    fn choose_destruction_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        targets: &[PublicPlayerState],
    ) -> Option<(Uuid, District)> {
        match self.destruction.as_mut() {
            Some(policy) => policy.choose_target(me, info, targets),
            None => self.fallback.choose_destruction_target(me, info, targets),
        }
    }

    fn wants_district_effect(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        effect: DistrictEffect,
    ) -> bool {
        self.fallback.wants_district_effect(me, info, effect)
    }

    fn choose_cards_to_redraw(&mut self, me: &PlayerState, info: &PublicInfo) -> Vec<Card> {
        self.fallback.choose_cards_to_redraw(me, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        policies::{AlwaysDrawCards, AlwaysTakeGold, CheapestBuild},
        tests::empty_info,
    };

    #[test]
    fn test_resource_policy_overrides_fallback() {
        let me = PlayerState::new("Composite".to_string());
        let info = empty_info();
        let mut drawer = CompositeStrategy::new(1).with_resource_policy(AlwaysDrawCards);
        let mut saver = CompositeStrategy::new(1).with_resource_policy(AlwaysTakeGold);
        for _ in 0..20 {
            assert_eq!(drawer.choose_resource(&me, &info), Resource::Cards);
            assert_eq!(saver.choose_resource(&me, &info), Resource::Gold);
        }
    }

    #[test]
    fn test_build_policy_is_used() {
        let mut me = PlayerState::new("Composite".to_string());
        me.gold = 10;
        me.hand = vec![
            Card::new(0, District::Palace),
            Card::new(1, District::Tavern),
            Card::new(2, District::Castle),
        ];
        let info = empty_info();
        let mut bot = CompositeStrategy::new(1).with_build_policy(CheapestBuild);
        let card = bot.choose_card_to_build(&me, &info).unwrap();
        assert_eq!(card.district(), District::Tavern);
    }

    #[derive(Debug)]
    struct Stubborn(Role);

    impl RolePolicy for Stubborn {
        fn choose_role(&mut self, _: &PlayerState, _: &PublicInfo, _: &[Role]) -> Option<Role> {
            Some(self.0)
        }
    }

    #[test]
    fn test_out_of_pool_answer_falls_back() {
        let me = PlayerState::new("Composite".to_string());
        let info = empty_info();
        let mut bot = CompositeStrategy::new(4).with_role_policy(Stubborn(Role::Warlord));
        let pool = [Role::King, Role::Bishop];
        for _ in 0..20 {
            assert!(pool.contains(&bot.choose_role(&me, &info, &pool)));
        }
        assert_eq!(
            bot.choose_role(&me, &info, &[Role::Warlord, Role::King]),
            Role::Warlord
        );
    }
}
