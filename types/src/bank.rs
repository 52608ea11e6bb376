/// Coins in a standard box.
pub const TOTAL_COINS: u32 = 30;

/// Shared coin pool owned by one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    available: u32,
    capacity: u32,
}

impl Default for Bank {
    fn default() -> Self {
        Bank::new(TOTAL_COINS)
    }
}

impl Bank {
    pub fn new(capacity: u32) -> Self {
        Self {
            available: capacity,
            capacity,
        }
    }

    /// Takes up to `requested` coins and returns how many were actually taken.
    pub fn take(&mut self, requested: u32) -> u32 {
        let taken = requested.min(self.available);
        self.available -= taken;
        if taken < requested {
            log::debug!("Bank short: asked for {requested}, gave {taken}");
        }
        taken
    }

    /// Puts coins back, never past the capacity. Returns how many were accepted.
    pub fn deposit(&mut self, coins: u32) -> u32 {
        let accepted = coins.min(self.capacity - self.available);
        if accepted < coins {
            log::warn!("Bank full: refused {} of {coins} coins", coins - accepted);
        }
        self.available += accepted;
        accepted
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.available == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_partial_take_empties_bank() {
        let mut bank = Bank::new(2);
        assert_eq!(bank.take(5), 2);
        assert_eq!(bank.available(), 0);
        assert_eq!(bank.take(1), 0);
    }

    #[test]
    fn test_deposit_restores_coins() {
        let mut bank = Bank::default();
        let taken = bank.take(7);
        bank.deposit(taken);
        assert_eq!(bank.available(), TOTAL_COINS);
    }

    #[test]
    fn test_deposit_stops_at_capacity() {
        let mut bank = Bank::new(3);
        assert_eq!(bank.deposit(1), 0);
        assert_eq!(bank.available(), 3);

        bank.take(2);
        assert_eq!(bank.deposit(5), 2);
        assert_eq!(bank.available(), bank.capacity());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Take(usize, u32),
        Deposit(usize, u32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..4usize, 0..10u32).prop_map(|(p, n)| Op::Take(p, n)),
            (0..4usize, 0..10u32).prop_map(|(p, n)| Op::Deposit(p, n)),
        ]
    }

    proptest! {
        #[test]
        fn coins_are_conserved(ops in proptest::collection::vec(op(), 0..200)) {
            let mut bank = Bank::default();
            let mut purses = [0u32; 4];
            for op in ops {
                match op {
                    Op::Take(p, n) => purses[p] += bank.take(n),
                    Op::Deposit(p, n) => {
                        let paid = n.min(purses[p]);
                        purses[p] -= paid;
                        bank.deposit(paid);
                    }
                }
                prop_assert_eq!(purses.iter().sum::<u32>() + bank.available(), TOTAL_COINS);
            }
        }
    }
}
