use uuid::Uuid;

use crate::{
    action::Action,
    card::Card,
    district::{District, DistrictEffect},
    error::InvalidAction,
    game_state::GameState,
    player::Resource,
    player_state::{BuildRejection, PublicPlayerState},
    role::Role,
};

const GOLD_PER_TURN: u32 = 2;
const CARDS_PER_TURN: usize = 2;
const OBSERVATORY_CARDS: usize = 3;
const SMITHY_PRICE: u32 = 3;
const SMITHY_CARDS: usize = 3;
const GRAVEYARD_PRICE: u32 = 1;

impl GameState {
    /// Plays the whole turn of the player at `idx`, who must hold a living role.
    pub fn play_turn(&mut self, idx: usize) {
        let role = self.table[idx]
            .state
            .role
            .expect("Player should hold a role when playing a turn");
        let id = self.table[idx].id();

        self.character_mut(role).reveal();
        self.table[idx].reveal();
        self.revealed.push((id, role));
        self.record(Some(id), Action::Revealed(role));

        if role.is_royal() {
            self.crown(idx);
        }
        self.hand_over_stolen_gold(idx, role);
        self.collect_income(idx, role);
        self.use_district_effects(idx);
        self.use_role_effect(idx, role);
        self.acquire_resource(idx);
        self.build_districts(idx, role.builds_allowed())
            .expect("A role's own build allowance is a legal build count");
        if role == Role::Warlord {
            self.use_warlord_effect(idx);
        }

        log::debug!("End of turn: {}", self.table[idx].state);
        self.table[idx].hide();
    }

    fn hand_over_stolen_gold(&mut self, idx: usize, role: Role) {
        let Some(thief) = self.character(role).and_then(|c| c.stolen_by()) else {
            return;
        };
        let gold = std::mem::take(&mut self.table[idx].state.gold);
        let thief_player = self
            .get_player_mut(thief)
            .expect("Thief should be seated at the table");
        thief_player.state.gold += gold;
        let victim = self.table[idx].id();
        self.record(Some(victim), Action::Robbed { thief, gold });
    }

    fn collect_income(&mut self, idx: usize, role: Role) {
        let owed = {
            let districts: Vec<District> = self.table[idx]
                .state
                .citadel
                .iter()
                .map(Card::district)
                .collect();
            role.income_for(&districts)
        };
        if owed == 0 {
            return;
        }
        let paid = self.bank.take(owed);
        self.table[idx].state.gold += paid;
        let id = self.table[idx].id();
        self.record(Some(id), Action::Income(paid));
    }

    fn use_district_effects(&mut self, idx: usize) {
        let id = self.table[idx].id();
        let state = &self.table[idx].state;

        if state.has_effect(DistrictEffect::Laboratory)
            && !state.hand.is_empty()
            && self.ask(idx, |strategy, me, info| {
                strategy.wants_district_effect(me, info, DistrictEffect::Laboratory)
            })
        {
            let discard = self.ask(idx, |strategy, me, info| {
                strategy.choose_laboratory_discard(me, info)
            });
            if let Some(card) = discard {
                assert!(
                    self.table[idx].state.remove_from_hand(&card),
                    "Laboratory discard {card} was not in hand"
                );
                self.deck.discard(card);
                let paid = self.bank.take(1);
                self.table[idx].state.gold += paid;
                self.record(
                    Some(id),
                    Action::UsedLaboratory {
                        discarded: card.district(),
                    },
                );
            }
        }

        let state = &self.table[idx].state;
        if state.has_effect(DistrictEffect::Smithy)
            && state.gold >= SMITHY_PRICE
            && self.ask(idx, |strategy, me, info| {
                strategy.wants_district_effect(me, info, DistrictEffect::Smithy)
            })
        {
            self.table[idx].state.gold -= SMITHY_PRICE;
            self.bank.deposit(SMITHY_PRICE);
            let drawn = self.deck.draw_many(SMITHY_CARDS);
            let count = drawn.len();
            self.table[idx].state.hand.extend(drawn);
            self.record(Some(id), Action::UsedSmithy { drawn: count });
        }
    }

    fn use_role_effect(&mut self, idx: usize, role: Role) {
        match role {
            Role::Assassin => self.assassinate(idx),
            Role::Thief => self.steal(idx),
            Role::Magician => self.use_magic(idx),
            Role::Architect => {
                let drawn = self.deck.draw_many(role.extra_cards());
                let count = drawn.len();
                self.table[idx].state.hand.extend(drawn);
                let id = self.table[idx].id();
                self.record(Some(id), Action::DrewExtra(count));
            }
            Role::King | Role::Bishop | Role::Merchant | Role::Warlord => {}
        }
    }

    fn assassinate(&mut self, idx: usize) {
        let candidates: Vec<Role> = self
            .roles_in_round()
            .into_iter()
            .filter(|r| *r != Role::Assassin)
            .collect();
        let target = self.ask(idx, |strategy, me, info| {
            strategy.choose_assassination_target(me, info, &candidates)
        });
        assert!(
            candidates.contains(&target),
            "Assassin chose {target}, which cannot be killed this round"
        );
        self.character_mut(target).kill();
        self.killed_role = Some(target);
        let id = self.table[idx].id();
        self.record(Some(id), Action::Killed(target));
    }

    fn steal(&mut self, idx: usize) {
        let candidates: Vec<Role> = self
            .characters
            .iter()
            .filter(|c| c.role().can_be_robbed() && !c.is_dead())
            .map(|c| c.role())
            .collect();
        if candidates.is_empty() {
            return;
        }
        let target = self.ask(idx, |strategy, me, info| {
            strategy.choose_theft_target(me, info, &candidates)
        });
        assert!(
            candidates.contains(&target),
            "Thief chose {target}, which cannot be robbed this round"
        );
        let id = self.table[idx].id();
        self.character_mut(target).rob(id);
        self.record(Some(id), Action::MarkedForTheft(target));
    }

    fn use_magic(&mut self, idx: usize) {
        let id = self.table[idx].id();
        let swap_with = self.ask(idx, |strategy, me, info| {
            strategy.choose_hand_swap_target(me, info)
        });
        match swap_with {
            Some(other) => {
                let other_idx = self
                    .index_of(other)
                    .filter(|&other_idx| other_idx != idx)
                    .unwrap_or_else(|| panic!("Magician cannot swap hands with {other}"));
                let mine = std::mem::take(&mut self.table[idx].state.hand);
                let theirs = std::mem::replace(&mut self.table[other_idx].state.hand, mine);
                self.table[idx].state.hand = theirs;
                self.record(Some(id), Action::SwappedHands { with: other });
            }
            None => {
                let discards = self.ask(idx, |strategy, me, info| {
                    strategy.choose_cards_to_redraw(me, info)
                });
                for card in &discards {
                    assert!(
                        self.table[idx].state.remove_from_hand(card),
                        "Magician tried to trade {card} which was not in hand"
                    );
                    self.deck.discard(*card);
                }
                let drawn = self.deck.draw_many(discards.len());
                self.table[idx].state.hand.extend(drawn);
                self.record(Some(id), Action::Redrew(discards.len()));
            }
        }
    }

    fn acquire_resource(&mut self, idx: usize) {
        let id = self.table[idx].id();
        let resource = self.ask(idx, |strategy, me, info| strategy.choose_resource(me, info));
        match resource {
            Resource::Gold => {
                let taken = self.bank.take(GOLD_PER_TURN);
                self.table[idx].state.gold += taken;
                self.record(Some(id), Action::TookGold(taken));
            }
            Resource::Cards => {
                let state = &self.table[idx].state;
                let count = if state.has_effect(DistrictEffect::Observatory) {
                    OBSERVATORY_CARDS
                } else {
                    CARDS_PER_TURN
                };
                let keeps_all = state.has_effect(DistrictEffect::Library);
                let drawn = self.deck.draw_many(count);
                if drawn.is_empty() {
                    return;
                }
                let kept = if keeps_all {
                    drawn.clone()
                } else {
                    let keep = self.ask(idx, |strategy, me, info| {
                        strategy.choose_card_to_keep(me, info, &drawn)
                    });
                    assert!(drawn.contains(&keep), "Kept {keep} which was not drawn");
                    for card in drawn.iter().filter(|c| **c != keep) {
                        self.deck.discard(*card);
                    }
                    vec![keep]
                };
                self.record(
                    Some(id),
                    Action::DrewCards {
                        drawn: drawn.len(),
                        kept: kept.len(),
                    },
                );
                self.table[idx].state.hand.extend(kept);
            }
        }
    }

    /// Asks for up to `count` builds, stopping at the first `None` or rejected
    /// card. Returns how many districts went up.
    pub fn build_districts(&mut self, idx: usize, count: usize) -> Result<usize, InvalidAction> {
        let role = self.table[idx]
            .state
            .role
            .expect("Player should hold a role when building");
        let allowed = role.builds_allowed();
        if count == 0 || count > allowed {
            return Err(InvalidAction::BuildCount {
                role,
                requested: count,
                allowed,
            });
        }

        let id = self.table[idx].id();
        let mut built = 0;
        for _ in 0..count {
            let Some(card) = self.ask(idx, |strategy, me, info| {
                strategy.choose_card_to_build(me, info)
            }) else {
                break;
            };
            match self.build(idx, card) {
                Ok(()) => built += 1,
                Err(rejection) => {
                    self.record(Some(id), Action::BuildRejected(rejection));
                    break;
                }
            }
        }
        Ok(built)
    }

    /// Validates and builds one card from the hand of the player at `idx`.
    pub fn build(&mut self, idx: usize, card: Card) -> Result<(), BuildRejection> {
        let capacity = self.win_threshold;
        let state = &mut self.table[idx].state;
        state.validate_build(&card, capacity)?;
        state.remove_from_hand(&card);
        state.gold -= card.cost();
        state.last_build_was_special =
            card.district().effect() == Some(DistrictEffect::HauntedQuarter);
        state.citadel.push(card);
        let id = state.id;
        self.bank.deposit(card.cost());
        self.record(Some(id), Action::Built(card.district()));
        Ok(())
    }

    /// Opponents whose citadel the Warlord may attack.
    pub fn destruction_targets(&self, warlord: Uuid) -> Vec<PublicPlayerState> {
        let protected = self
            .characters
            .iter()
            .filter(|c| c.role().protects_citadel() && !c.is_dead())
            .filter_map(|c| c.owner())
            .collect::<Vec<_>>();
        self.table
            .iter()
            .filter(|p| p.id() != warlord)
            .filter(|p| !protected.contains(&p.id()))
            .filter(|p| p.state.citadel.len() < self.win_threshold)
            .map(|p| (&p.state).into())
            .collect()
    }

    fn use_warlord_effect(&mut self, idx: usize) {
        let warlord = self.table[idx].id();
        let targets = self.destruction_targets(warlord);
        if targets.is_empty() {
            return;
        }
        let choice = self.ask(idx, |strategy, me, info| {
            strategy.choose_destruction_target(me, info, &targets)
        });
        let Some((victim_id, district)) = choice else {
            return;
        };
        let victim = targets
            .iter()
            .find(|p| p.id == victim_id)
            .unwrap_or_else(|| panic!("Warlord targeted {victim_id}, which is not attackable"));

        let price = victim.destruction_cost(district);
        if !victim.destroyable(self.table[idx].state.gold).any(|d| d == district) {
            log::warn!("Warlord's destruction of {district} was rejected");
            return;
        }

        self.table[idx].state.gold -= price;
        self.bank.deposit(price);
        let card = self
            .get_player_mut(victim_id)
            .and_then(|p| p.state.remove_from_citadel(district))
            .expect("Validated district should be in the victim's citadel");
        self.record(
            Some(warlord),
            Action::Destroyed {
                victim: victim_id,
                district,
                paid: price,
            },
        );
        self.bury(card, warlord);
    }

    /// A destroyed card goes to a willing Graveyard owner, or else under the deck.
    fn bury(&mut self, card: Card, destroyer: Uuid) {
        let keeper = self.table.iter().position(|p| {
            p.id() != destroyer
                && p.state.has_effect(DistrictEffect::Graveyard)
                && p.state.gold >= GRAVEYARD_PRICE
        });
        if let Some(keeper) = keeper {
            let wants = self.ask(keeper, |strategy, me, info| {
                strategy.wants_district_effect(me, info, DistrictEffect::Graveyard)
            });
            if wants {
                self.table[keeper].state.gold -= GRAVEYARD_PRICE;
                self.bank.deposit(GRAVEYARD_PRICE);
                self.table[keeper].state.hand.push(card);
                let id = self.table[keeper].id();
                self.record(Some(id), Action::RecoveredFromGraveyard(card.district()));
                return;
            }
        }
        self.deck.discard(card);
    }
}
