use uuid::Uuid;

use crate::role::Role;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharacterState {
    Unassigned,
    Assigned(Uuid),
    Retrieved,
}

/// One role's incarnation for a single round.
#[derive(Clone, Debug)]
pub struct Character {
    role: Role,
    state: CharacterState,
    dead: bool,
    revealed: bool,
    stolen_by: Option<Uuid>,
}

impl Character {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            state: CharacterState::Unassigned,
            dead: false,
            revealed: false,
            stolen_by: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> CharacterState {
        self.state
    }

    pub fn owner(&self) -> Option<Uuid> {
        match self.state {
            CharacterState::Assigned(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn stolen_by(&self) -> Option<Uuid> {
        self.stolen_by
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn assign(&mut self, player: Uuid) {
        assert_eq!(
            self.state,
            CharacterState::Unassigned,
            "{} was assigned twice",
            self.role
        );
        self.state = CharacterState::Assigned(player);
    }

    /// Works on roles nobody drafted too; the kill is simply wasted.
    pub fn kill(&mut self) {
        assert_ne!(
            self.state,
            CharacterState::Retrieved,
            "Tried to kill retrieved {}",
            self.role
        );
        self.dead = true;
    }

    pub fn rob(&mut self, thief: Uuid) {
        assert_ne!(
            self.state,
            CharacterState::Retrieved,
            "Tried to rob retrieved {}",
            self.role
        );
        assert!(!self.dead, "Tried to rob the dead {}", self.role);
        self.stolen_by = Some(thief);
    }

    pub fn reveal(&mut self) {
        assert!(
            matches!(self.state, CharacterState::Assigned(_)),
            "Revealed {} which nobody holds",
            self.role
        );
        assert!(!self.dead, "Tried to reveal the dead {}", self.role);
        assert!(!self.revealed, "{} was revealed twice", self.role);
        self.revealed = true;
    }

    pub fn retrieve(&mut self) -> Uuid {
        let CharacterState::Assigned(owner) = self.state else {
            panic!("Retrieved {} which was never assigned", self.role);
        };
        self.state = CharacterState::Retrieved;
        owner
    }
}
