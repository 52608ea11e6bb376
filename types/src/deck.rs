use std::collections::VecDeque;

use rand::Rng;

use crate::{card::Card, district::District, GameRng};

/// Draw pile. Cards are drawn from the front and discarded to the back, so a
/// discarded card comes up only after everything currently in the pile.
#[derive(Debug)]
pub struct Deck {
    cards: VecDeque<Card>,
    catalog: Vec<District>,
    minted: u32,
    rebuilds: u32,
    rng: GameRng,
}

impl Deck {
    /// Full catalog deck, shuffled.
    pub fn new(rng: GameRng) -> Self {
        let catalog = District::ALL
            .iter()
            .flat_map(|d| std::iter::repeat(*d).take(d.reprints()))
            .collect();
        Self::with_catalog(catalog, rng)
    }

    /// Deck over an arbitrary catalog, one entry per instance.
    pub fn with_catalog(catalog: Vec<District>, rng: GameRng) -> Self {
        let mut deck = Deck {
            cards: VecDeque::with_capacity(catalog.len()),
            catalog,
            minted: 0,
            rebuilds: 0,
            rng,
        };
        deck.fill();
        deck
    }

    fn fill(&mut self) {
        for i in 0..self.catalog.len() {
            let card = Card::new(self.minted, self.catalog[i]);
            self.minted += 1;
            self.cards.push_back(card);
        }
        self.shuffle();
    }

    /// Returns `None` only when the catalog itself is empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            if self.catalog.is_empty() {
                return None;
            }
            log::debug!("Deck exhausted, rebuilding from the catalog");
            self.rebuilds += 1;
            self.fill();
        }
        self.cards.pop_front()
    }

    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        (0..count).filter_map(|_| self.draw()).collect()
    }

    pub fn discard(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Fisher-Yates over the whole pile.
    pub fn shuffle(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Every card instance this deck ever created, wherever it is now.
    pub fn minted(&self) -> usize {
        self.minted as usize
    }

    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
