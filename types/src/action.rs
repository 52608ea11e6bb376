use std::fmt::Display;

use uuid::Uuid;

use crate::{district::District, player_state::BuildRejection, role::Role};

/// Everything that can happen during a game, as recorded in its history.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    RoleSetAside(Role),
    ChoseRole(Role),
    Revealed(Role),
    SkippedDead(Role),
    Crowned,
    Robbed { thief: Uuid, gold: u32 },
    Income(u32),
    UsedLaboratory { discarded: District },
    UsedSmithy { drawn: usize },
    Killed(Role),
    MarkedForTheft(Role),
    SwappedHands { with: Uuid },
    Redrew(usize),
    DrewExtra(usize),
    TookGold(u32),
    DrewCards { drawn: usize, kept: usize },
    Built(District),
    BuildRejected(BuildRejection),
    Destroyed { victim: Uuid, district: District, paid: u32 },
    RecoveredFromGraveyard(District),
    CompletedCitadel,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::RoleSetAside(role) => write!(f, "{role} is out of the round"),
            Action::ChoseRole(_) => write!(f, "Chose a role"),
            Action::Revealed(role) => write!(f, "Revealed {role}"),
            Action::SkippedDead(role) => write!(f, "Lost the turn, {role} is dead"),
            Action::Crowned => write!(f, "Took the crown"),
            Action::Robbed { gold, .. } => write!(f, "Was robbed of {gold} gold"),
            Action::Income(gold) => write!(f, "Collected {gold} gold of income"),
            Action::UsedLaboratory { discarded } => write!(f, "Discarded {discarded} for 1 gold"),
            Action::UsedSmithy { drawn } => write!(f, "Paid 3 gold to draw {drawn} cards"),
            Action::Killed(role) => write!(f, "Killed {role}"),
            Action::MarkedForTheft(role) => write!(f, "Marked {role} for theft"),
            Action::SwappedHands { with } => write!(f, "Swapped hands with {with}"),
            Action::Redrew(n) => write!(f, "Traded {n} cards with the deck"),
            Action::DrewExtra(n) => write!(f, "Drew {n} extra cards"),
            Action::TookGold(gold) => write!(f, "Took {gold} gold"),
            Action::DrewCards { drawn, kept } => write!(f, "Drew {drawn} cards, kept {kept}"),
            Action::Built(district) => write!(f, "Built {district}"),
            Action::BuildRejected(reason) => write!(f, "Could not build: {reason}"),
            Action::Destroyed {
                district, paid, ..
            } => write!(f, "Destroyed {district} for {paid} gold"),
            Action::RecoveredFromGraveyard(district) => {
                write!(f, "Recovered {district} from the graveyard")
            }
            Action::CompletedCitadel => write!(f, "Completed the citadel"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub round: u32,
    /// `None` for table-wide events such as roles set aside.
    pub player_id: Option<Uuid>,
    pub action: Action,
}
