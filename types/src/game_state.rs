use std::collections::VecDeque;

use itertools::Itertools;
use rand::prelude::*;
use uuid::Uuid;

use crate::{
    action::{Action, Event},
    bank::Bank,
    character::Character,
    config::GameConfig,
    deck::Deck,
    district::{District, DistrictEffect},
    error::SetupError,
    player::{Player, Strategy},
    player_state::{PlayerState, PublicPlayerState},
    role::Role,
    scoring::{
        BonusBreakdown, GameEnding, Standing, ALL_TYPES_BONUS, COMPLETED_BONUS,
        FIRST_TO_COMPLETE_BONUS, PRESTIGE_BONUS,
    },
    GameRng,
};

#[derive(Debug)]
pub struct GameState {
    /// Seating order. Never reordered after setup.
    pub table: Vec<Player>,
    pub deck: Deck,
    pub bank: Bank,
    pub config: GameConfig,
    pub round: u32,
    /// Nobody holds the crown until a King is first revealed.
    pub crowned: Option<Uuid>,
    pub win_threshold: usize,
    pub history: Vec<Event>,
    pub(crate) characters: Vec<Character>,
    pub(crate) unused_roles: Vec<Role>,
    pub(crate) revealed: Vec<(Uuid, Role)>,
    pub(crate) killed_role: Option<Role>,
    returned_characters: Vec<Character>,
    first_to_complete: Option<Uuid>,
    rng: GameRng,
}

/// What a player may know when it is asked to decide.
#[derive(Debug, Clone)]
pub struct PublicInfo {
    pub round: u32,
    pub win_threshold: usize,
    pub crowned: Option<Uuid>,
    pub roles_in_round: Vec<Role>,
    pub unused_roles: Vec<Role>,
    pub revealed: Vec<(Uuid, Role)>,
    pub killed_role: Option<Role>,
    /// Everybody but the asking player, in seating order.
    pub opponents: Vec<PublicPlayerState>,
    pub deck_size: usize,
    pub bank_coins: u32,
}

impl PublicInfo {
    pub fn opponent(&self, id: Uuid) -> Option<&PublicPlayerState> {
        self.opponents.iter().find(|p| p.id == id)
    }

    pub fn is_revealed(&self, role: Role) -> bool {
        self.revealed.iter().any(|(_, r)| *r == role)
    }

    pub fn revealed_role_of(&self, id: Uuid) -> Option<Role> {
        self.revealed
            .iter()
            .find(|(owner, _)| *owner == id)
            .map(|(_, role)| *role)
    }

    /// The opponent with the biggest citadel, ties going to the costlier one.
    pub fn leader(&self) -> Option<&PublicPlayerState> {
        self.opponents.iter().max_by_key(|p| {
            (
                p.citadel.len(),
                p.citadel.iter().map(District::cost).sum::<u32>(),
            )
        })
    }

    pub fn richest(&self) -> Option<&PublicPlayerState> {
        self.opponents.iter().max_by_key(|p| p.gold)
    }
}

/// Draws the round's roles: the royal role plus one non-royal role per
/// player. Returns `(pool, unused)`, both in rank order.
pub fn build_role_pool<R: Rng + ?Sized>(
    config: &GameConfig,
    num_players: usize,
    rng: &mut R,
) -> Result<(Vec<Role>, Vec<Role>), SetupError> {
    let mut available = config.available_non_royal(num_players);
    if available.len() < num_players {
        return Err(SetupError::NotEnoughRoles {
            players: num_players,
            available: available.len(),
        });
    }
    available.shuffle(rng);
    let mut pool: Vec<Role> = available.into_iter().take(num_players).collect();
    pool.push(Role::ROYAL);
    pool.sort();
    let unused = Role::ALL
        .into_iter()
        .filter(|role| !pool.contains(role))
        .collect();
    Ok((pool, unused))
}

impl GameState {
    pub fn new(
        config: GameConfig,
        player_inputs: Vec<(Uuid, String, Box<dyn Strategy>)>,
    ) -> Result<Self, SetupError> {
        let num_players = player_inputs.len();
        config.validate(num_players)?;

        let mut rng = GameRng::seed_from_u64(config.seed);
        let mut deck = Deck::new(GameRng::seed_from_u64(rng.gen()));
        let mut bank = Bank::new(config.total_coins);
        let win_threshold = config.win_threshold_for(num_players);
        log::info!("Num players: {num_players}, win threshold: {win_threshold}");

        let mut players: Vec<_> = player_inputs
            .into_iter()
            .map(|(id, name, strategy)| {
                let mut state = PlayerState::new_with_id(id, name);
                state.gold = bank.take(config.starting_gold);
                Player::new(state, strategy)
            })
            .collect();
        for _ in 0..config.starting_hand {
            for player in players.iter_mut() {
                if let Some(card) = deck.draw() {
                    player.state.hand.push(card);
                }
            }
        }
        players.shuffle(&mut rng);

        Ok(Self {
            table: players,
            deck,
            bank,
            config,
            round: 0,
            crowned: None,
            win_threshold,
            history: Vec::new(),
            characters: Vec::new(),
            unused_roles: Vec::new(),
            revealed: Vec::new(),
            killed_role: None,
            returned_characters: Vec::new(),
            first_to_complete: None,
            rng,
        })
    }

    pub fn public_info(&self, viewer: Uuid) -> PublicInfo {
        PublicInfo {
            round: self.round,
            win_threshold: self.win_threshold,
            crowned: self.crowned,
            roles_in_round: self.roles_in_round(),
            unused_roles: self.unused_roles.clone(),
            revealed: self.revealed.clone(),
            killed_role: self.killed_role,
            opponents: self
                .table
                .iter()
                .filter(|p| p.id() != viewer)
                .map(|p| (&p.state).into())
                .collect(),
            deck_size: self.deck.len(),
            bank_coins: self.bank.available(),
        }
    }

    /// Runs one decision of the player at `idx` against a fresh snapshot.
    pub(crate) fn ask<T>(
        &mut self,
        idx: usize,
        decide: impl FnOnce(&mut dyn Strategy, &PlayerState, &PublicInfo) -> T,
    ) -> T {
        let info = self.public_info(self.table[idx].id());
        let player = &mut self.table[idx];
        decide(player.strategy.as_mut(), &player.state, &info)
    }

    pub(crate) fn record(&mut self, player_id: Option<Uuid>, action: Action) {
        match player_id.and_then(|id| self.get_player(id)) {
            Some(player) => log::debug!("{} did: {action}", player.state.name),
            None => log::debug!("{action}"),
        }
        self.history.push(Event {
            round: self.round,
            player_id,
            action,
        });
    }

    pub fn get_player(&self, id: Uuid) -> Option<&Player> {
        self.table.iter().find(|p| p.id() == id)
    }

    pub fn get_player_mut(&mut self, id: Uuid) -> Option<&mut Player> {
        self.table.iter_mut().find(|p| p.id() == id)
    }

    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.table.iter().position(|p| p.id() == id)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, role: Role) -> Option<&Character> {
        self.characters.iter().find(|c| c.role() == role)
    }

    pub(crate) fn character_mut(&mut self, role: Role) -> &mut Character {
        self.characters
            .iter_mut()
            .find(|c| c.role() == role)
            .unwrap_or_else(|| panic!("{role} is not in play this round"))
    }

    pub fn roles_in_round(&self) -> Vec<Role> {
        self.characters.iter().map(Character::role).collect()
    }

    pub fn unused_roles(&self) -> &[Role] {
        &self.unused_roles
    }

    /// Characters handed back at the end of the last round.
    pub fn returned_characters(&self) -> &[Character] {
        &self.returned_characters
    }

    pub fn first_to_complete(&self) -> Option<Uuid> {
        self.first_to_complete
    }

    pub fn total_gold(&self) -> u32 {
        self.table.iter().map(|p| p.state.gold).sum::<u32>() + self.bank.available()
    }

    /// Cards currently in the deck, the hands and the citadels.
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self
                .table
                .iter()
                .map(|p| p.state.hand.len() + p.state.citadel.len())
                .sum::<usize>()
    }

    pub fn play_round(&mut self) {
        self.start_round();
        self.run_draft();
        self.play_turns();
        self.end_round();
    }

    pub fn start_round(&mut self) {
        self.round += 1;
        self.returned_characters.clear();
        self.revealed.clear();
        self.killed_role = None;
        let (pool, unused) = build_role_pool(&self.config, self.table.len(), &mut self.rng)
            .expect("Role supply is validated when the game is created");
        log::info!("Round {} with roles {}", self.round, pool.iter().join(", "));
        self.characters = pool.into_iter().map(Character::new).collect();
        self.unused_roles = unused.clone();
        for role in unused {
            self.record(None, Action::RoleSetAside(role));
        }
    }

    /// Seat indices starting from the crowned player, keeping the cyclic order.
    /// Without a crown the draft starts at seat 0.
    pub fn draft_order(&self) -> Vec<usize> {
        let mut order: VecDeque<usize> = (0..self.table.len()).collect();
        let start = self.crowned.and_then(|id| self.index_of(id)).unwrap_or(0);
        order.rotate_left(start);
        order.into()
    }

    pub fn run_draft(&mut self) {
        let mut pool = self.roles_in_round();
        let mut drafted = Vec::new();
        for (position, idx) in self.draft_order().into_iter().enumerate() {
            let state = &mut self.table[idx].state;
            state.draft_position = position;
            state.drafted_before = drafted.clone();
            state.offered_roles = pool.clone();

            let choice = self.ask(idx, |strategy, me, info| strategy.choose_role(me, info, &pool));
            let Some(pos) = pool.iter().position(|role| *role == choice) else {
                panic!(
                    "{} chose {choice}, which is not in the pool [{}]",
                    self.table[idx].state.name,
                    pool.iter().join(", ")
                );
            };
            pool.remove(pos);

            let id = self.table[idx].id();
            self.character_mut(choice).assign(id);
            self.table[idx].state.role = Some(choice);
            drafted.push(id);
            self.record(Some(id), Action::ChoseRole(choice));
        }
    }

    /// Seat indices of the drafted players, by ascending role rank.
    pub fn turn_order(&self) -> Vec<usize> {
        (0..self.table.len())
            .filter(|&idx| self.table[idx].state.role.is_some())
            .sorted_by_key(|&idx| self.table[idx].state.role)
            .collect()
    }

    pub fn play_turns(&mut self) {
        for idx in self.turn_order() {
            let role = self.table[idx]
                .state
                .role
                .expect("Players in the turn order hold a role");
            let is_dead = self.character(role).is_some_and(Character::is_dead);
            if is_dead {
                let id = self.table[idx].id();
                self.record(Some(id), Action::SkippedDead(role));
                if role.is_royal() && self.config.crown_passes_to_dead_king {
                    self.crown(idx);
                }
                continue;
            }
            self.play_turn(idx);
            self.check_completion(idx);
        }
    }

    pub(crate) fn crown(&mut self, idx: usize) {
        let id = self.table[idx].id();
        self.crowned = Some(id);
        self.record(Some(id), Action::Crowned);
    }

    fn check_completion(&mut self, idx: usize) {
        let state = &self.table[idx].state;
        if self.first_to_complete.is_none() && state.citadel.len() >= self.win_threshold {
            let id = state.id;
            log::info!("{} is the first to complete a citadel", state.name);
            self.table[idx].state.first_to_complete = true;
            self.first_to_complete = Some(id);
            self.record(Some(id), Action::CompletedCitadel);
        }
    }

    pub fn end_round(&mut self) {
        for mut character in std::mem::take(&mut self.characters) {
            if character.owner().is_some() {
                let owner = character.retrieve();
                if let Some(player) = self.get_player_mut(owner) {
                    player.state.role = None;
                    player.hide();
                }
            }
            self.returned_characters.push(character);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.first_to_complete.is_some()
    }

    /// Nobody can ever build again: the bank is dry and no purse covers any
    /// district its owner is still missing.
    pub fn is_stuck(&self) -> bool {
        self.bank.is_empty()
            && self.table.iter().all(|p| {
                p.state.citadel.len() >= self.win_threshold
                    || !District::ALL
                        .iter()
                        .any(|d| d.cost() <= p.state.gold && !p.state.has_built(*d))
            })
    }

    pub fn ending(&self) -> Option<GameEnding> {
        if self.is_finished() {
            Some(GameEnding::Completed)
        } else if self.is_stuck() {
            Some(GameEnding::Stuck)
        } else if self.round >= self.config.max_rounds {
            Some(GameEnding::RoundCap)
        } else {
            None
        }
    }

    fn bonuses_for(&mut self, idx: usize) -> BonusBreakdown {
        let mut bonuses = BonusBreakdown::default();
        let state = &self.table[idx].state;
        if state.first_to_complete {
            bonuses.first_to_complete = FIRST_TO_COMPLETE_BONUS;
        }
        if state.citadel.len() >= self.win_threshold {
            bonuses.completed = COMPLETED_BONUS;
        }
        bonuses.prestige = state
            .citadel
            .iter()
            .filter(|c| c.district().effect() == Some(DistrictEffect::BonusPoints))
            .count() as u32
            * PRESTIGE_BONUS;

        let mut types = state.distinct_types();
        let haunted = state.has_effect(DistrictEffect::HauntedQuarter)
            && !state.last_build_was_special;
        if types.len() == 4 && haunted {
            let stand_in = self.ask(idx, |strategy, me, info| {
                strategy.choose_haunted_quarter_type(me, info)
            });
            if let Some(district_type) = stand_in.filter(|t| !types.contains(t)) {
                types.push(district_type);
            }
        }
        if types.len() == 5 {
            bonuses.all_types = ALL_TYPES_BONUS;
        }
        bonuses
    }

    /// Applies the end of game bonuses and ranks the table.
    pub fn final_standings(&mut self) -> Vec<Standing> {
        let mut standings = Vec::with_capacity(self.table.len());
        for idx in 0..self.table.len() {
            let bonuses = self.bonuses_for(idx);
            self.table[idx].state.bonus = bonuses.total();
            standings.push(Standing::from_state(&self.table[idx].state, bonuses));
        }
        standings.sort_by(Standing::rank_cmp);
        standings
    }
}
