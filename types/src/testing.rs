use uuid::Uuid;

use crate::{
    card::Card,
    character::Character,
    config::GameConfig,
    district::{District, DistrictEffect, DistrictType},
    game_state::{GameState, PublicInfo},
    player::{Resource, Strategy},
    player_state::{PlayerState, PublicPlayerState},
    role::Role,
};

/// Answers every decision from a fixed script.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    pub kill: Option<Role>,
    pub rob: Option<Role>,
    /// Destroys this district in the first target that has it.
    pub destroy: Option<District>,
    pub draw: bool,
    pub haunted_as: Option<DistrictType>,
    pub build_first_affordable: bool,
    pub use_effects: bool,
    /// Magician swaps with the biggest hand at the table.
    pub swap_with_biggest_hand: bool,
    /// Magician trades the whole hand in to the deck.
    pub redraw_all: bool,
}

impl Strategy for Scripted {
    fn choose_role(&mut self, _me: &PlayerState, _info: &PublicInfo, pool: &[Role]) -> Role {
        pool[0]
    }

    fn choose_card_to_build(&mut self, me: &PlayerState, info: &PublicInfo) -> Option<Card> {
        if self.build_first_affordable {
            me.buildable_cards(info.win_threshold).next().copied()
        } else {
            None
        }
    }

    fn choose_resource(&mut self, _me: &PlayerState, _info: &PublicInfo) -> Resource {
        if self.draw {
            Resource::Cards
        } else {
            Resource::Gold
        }
    }

    fn choose_card_to_keep(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        drawn: &[Card],
    ) -> Card {
        drawn[0]
    }

    fn choose_assassination_target(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        self.kill
            .filter(|r| candidates.contains(r))
            .unwrap_or(candidates[0])
    }

    fn choose_theft_target(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        candidates: &[Role],
    ) -> Role {
        self.rob
            .filter(|r| candidates.contains(r))
            .unwrap_or(candidates[0])
    }

    fn choose_hand_swap_target(&mut self, _me: &PlayerState, info: &PublicInfo) -> Option<Uuid> {
        if !self.swap_with_biggest_hand {
            return None;
        }
        info.opponents.iter().max_by_key(|p| p.hand_size).map(|p| p.id)
    }

    fn choose_cards_to_redraw(&mut self, me: &PlayerState, _info: &PublicInfo) -> Vec<Card> {
        if self.redraw_all {
            me.hand.clone()
        } else {
            Vec::new()
        }
    }

    fn choose_destruction_target(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        targets: &[PublicPlayerState],
    ) -> Option<(Uuid, District)> {
        let district = self.destroy?;
        targets
            .iter()
            .find(|t| t.has_built(district))
            .map(|t| (t.id, district))
    }

    fn wants_district_effect(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
        _effect: DistrictEffect,
    ) -> bool {
        self.use_effects
    }

    fn choose_haunted_quarter_type(
        &mut self,
        _me: &PlayerState,
        _info: &PublicInfo,
    ) -> Option<DistrictType> {
        self.haunted_as
    }
}

/// A game where `scripts[i]` sits at seat `i`.
pub fn game_with(config: GameConfig, scripts: Vec<Scripted>) -> GameState {
    let inputs = scripts
        .into_iter()
        .enumerate()
        .map(|(i, script)| {
            (
                Uuid::new_v4(),
                format!("P{i}"),
                Box::new(script) as Box<dyn Strategy>,
            )
        })
        .collect();
    let mut game = GameState::new(config, inputs).expect("Test game should be valid");
    game.table.sort_by(|a, b| a.state.name.cmp(&b.state.name));
    game
}

/// Deals the round's roles by hand: `roles[i]` goes to seat `i`, and
/// `spare` roles sit in the round undrafted.
pub fn deal_roles(game: &mut GameState, roles: &[Role], spare: &[Role]) {
    game.round += 1;
    let mut characters: Vec<Character> = roles
        .iter()
        .chain(spare)
        .map(|r| Character::new(*r))
        .collect();
    characters.sort_by_key(Character::role);
    for (seat, role) in roles.iter().enumerate() {
        let id = game.table[seat].id();
        characters
            .iter_mut()
            .find(|c| c.role() == *role)
            .expect("Dealt role should be in the round")
            .assign(id);
        game.table[seat].state.role = Some(*role);
    }
    game.characters = characters;
}

/// Puts a card from the top of the deck into a citadel, standing in for `district`.
pub fn plant(game: &mut GameState, seat: usize, district: District) {
    let card = game.deck.draw().expect("Full catalog always draws");
    game.table[seat]
        .state
        .citadel
        .push(Card::new(card.id(), district));
}
