use std::fmt::Debug;

use uuid::Uuid;

use crate::{
    card::Card,
    district::{District, DistrictEffect, DistrictType},
    game_state::PublicInfo,
    role::Role,
    PlayerState, PublicPlayerState,
};

/// The turn's resource choice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    Gold,
    Cards,
}

/// Every decision the game may ask of a player.
///
/// Each method receives the player's own state and a snapshot of what is
/// publicly known. The game validates every answer; a strategy that answers
/// outside the offered choices is a bug and panics the game.
pub trait Strategy: Debug + Send {
    /// Pick one of `pool` for the round.
    fn choose_role(&mut self, me: &PlayerState, info: &PublicInfo, pool: &[Role]) -> Role;

    /// Card from hand to build next, or `None` to stop building this turn.
    fn choose_card_to_build(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Card>;

    fn choose_resource(&mut self, me: &PlayerState, info: &PublicInfo) -> Resource;

    /// Keep one of the drawn cards; the others go to the bottom of the deck.
    fn choose_card_to_keep(&mut self, me: &PlayerState, info: &PublicInfo, drawn: &[Card]) -> Card;

    fn choose_assassination_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        candidates: &[Role],
    ) -> Role;

    fn choose_theft_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        candidates: &[Role],
    ) -> Role;

    /// Opponent to swap hands with. `None` falls back to exchanging cards with the deck.
    fn choose_hand_swap_target(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Uuid>;

    /// `targets` only lists opponents whose citadel may be attacked.
    fn choose_destruction_target(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        targets: &[PublicPlayerState],
    ) -> Option<(Uuid, District)>;

    fn wants_district_effect(
        &mut self,
        me: &PlayerState,
        info: &PublicInfo,
        effect: DistrictEffect,
    ) -> bool;

    /// Magician without a swap target: cards to trade in for fresh draws.
    fn choose_cards_to_redraw(&mut self, _me: &PlayerState, _info: &PublicInfo) -> Vec<Card> {
        Vec::new()
    }

    fn choose_laboratory_discard(&mut self, me: &PlayerState, _info: &PublicInfo) -> Option<Card> {
        me.hand.iter().min_by_key(|c| c.cost()).copied()
    }

    /// Type the Haunted Quarter stands for at scoring.
    fn choose_haunted_quarter_type(
        &mut self,
        me: &PlayerState,
        _info: &PublicInfo,
    ) -> Option<DistrictType> {
        let present = me.distinct_types();
        DistrictType::ALL
            .into_iter()
            .find(|t| !present.contains(t))
    }
}

#[derive(Debug)]
pub struct Player {
    pub state: PlayerState,
    pub strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(state: PlayerState, strategy: Box<dyn Strategy>) -> Self {
        Self { state, strategy }
    }

    pub fn id(&self) -> Uuid {
        self.state.id
    }

    pub fn reveal(&mut self) {
        assert!(
            !self.state.revealed,
            "{} was revealed twice in one round",
            self.state.name
        );
        self.state.revealed = true;
    }

    pub fn hide(&mut self) {
        self.state.revealed = false;
    }
}
