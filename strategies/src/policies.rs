use types::{Card, District, PlayerState, PublicInfo, PublicPlayerState, Resource, Role};
use uuid::Uuid;

use crate::{
    composite::{
        AssassinationPolicy, BuildPolicy, DestructionPolicy, ResourcePolicy, RolePolicy,
        TheftPolicy,
    },
    heuristics,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysDrawCards;

impl ResourcePolicy for AlwaysDrawCards {
    fn choose_resource(&mut self, _me: &PlayerState, _info: &PublicInfo) -> Resource {
        Resource::Cards
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysTakeGold;

impl ResourcePolicy for AlwaysTakeGold {
    fn choose_resource(&mut self, _me: &PlayerState, _info: &PublicInfo) -> Resource {
        Resource::Gold
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CheapestBuild;

impl BuildPolicy for CheapestBuild {
    fn choose_card_to_build(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Card> {
        heuristics::cheapest_buildable(me, info)
    }
}

/// Drafts against the leader once somebody is about to finish: Assassin
/// first, then Warlord, then the Bishop to shelter our own citadel.
#[derive(Debug, Default, Clone, Copy)]
pub struct TargetLeaderRole;

impl RolePolicy for TargetLeaderRole {
    fn choose_role(&mut self, _me: &PlayerState, info: &PublicInfo, pool: &[Role]) -> Option<Role> {
        if !heuristics::someone_about_to_win(info) {
            return None;
        }
        [Role::Assassin, Role::Warlord, Role::Bishop]
            .into_iter()
            .find(|r| pool.contains(r))
    }
}

/// Kills the role the player with the biggest citadel most likely holds,
/// preferring the Architect.
#[derive(Debug, Default, Clone, Copy)]
pub struct FocusRusher;

impl AssassinationPolicy for FocusRusher {
    fn choose_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        candidates: &[Role],
    ) -> Option<Role> {
        let rusher = info.leader()?;
        heuristics::possible_roles(me, info, rusher.id)
            .into_iter()
            .filter(|r| candidates.contains(r))
            .max_by_key(|r| (r.builds_allowed(), r.extra_cards()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StealFromRichest;

impl TheftPolicy for StealFromRichest {
    fn choose_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        candidates: &[Role],
    ) -> Option<Role> {
        let richest = info.richest()?;
        heuristics::possible_roles(me, info, richest.id)
            .into_iter()
            .find(|r| candidates.contains(r))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DestroyLeader;

impl DestructionPolicy for DestroyLeader {
    fn choose_target(
        &mut self,
        me: &PlayerState,
        _info: &PublicInfo,
        targets: &[PublicPlayerState],
    ) -> Option<(Uuid, District)> {
        heuristics::destroy_in_leader(me, targets)
    }
}
