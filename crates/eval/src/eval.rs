// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use showdown_cards::{Card, Rank, Suit};

/// Error returned when a hand is created with a wrong number of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a poker hand requires exactly 5 cards, got {0}")]
pub struct InvalidHandSize(pub usize);

/// A five cards poker hand.
///
/// A hand is created once from five cards and is read only, its category is
/// computed on demand by [Hand::category]. Card uniqueness is not checked,
/// dealing distinct cards is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from exactly five cards.
    pub fn new(cards: &[Card]) -> Result<Self, InvalidHandSize> {
        let cards = cards.try_into().map_err(|_| InvalidHandSize(cards.len()))?;
        Ok(Self { cards })
    }

    /// The cards in this hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Classifies this hand into its category.
    ///
    /// The predicates are evaluated in a fixed precedence order, the first
    /// satisfied rule gives the category. The straight test runs on the
    /// distinct ranks, so hands with duplicated ranks that no earlier rule
    /// catches can classify as [HandCategory::Straight] when their distinct
    /// ranks sit on adjacent positions.
    pub fn category(&self) -> HandCategory {
        let mut rank_counts = [0u8; Rank::COUNT];
        let mut suit_counts = [0u8; Suit::COUNT];
        for card in &self.cards {
            rank_counts[card.rank().position()] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        let straight = is_straight(&rank_counts);
        let flush = suit_counts.contains(&(Self::SIZE as u8));
        let has_ace = rank_counts[Rank::Ace.position()] > 0;

        if straight && flush && has_ace {
            HandCategory::RoyalFlush
        } else if straight && flush {
            HandCategory::StraightFlush
        } else if rank_counts.contains(&4) {
            HandCategory::FourOfAKind
        } else if rank_counts.contains(&3) && rank_counts.contains(&2) {
            HandCategory::FullHouse
        } else if flush {
            HandCategory::Flush
        } else if straight {
            HandCategory::Straight
        } else if rank_counts.contains(&3) {
            HandCategory::ThreeOfAKind
        } else if rank_counts.iter().filter(|&&count| count == 2).count() == 2 {
            HandCategory::TwoPair
        } else if rank_counts.contains(&2) {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        }
    }

    /// Compares two hands by category strength.
    ///
    /// Hands in the same category compare as equal, there is no kicker or
    /// suit tie breaking.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.category().cmp(&other.category())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, ": {}", self.category())
    }
}

/// Checks that the distinct ranks cover adjacent positions in the deuce to
/// ace order.
///
/// The ace only plays high, so A-2-3-4-5 does not form a straight. With
/// duplicated ranks the distinct list is shorter than five and adjacency is
/// checked over that shorter list.
fn is_straight(rank_counts: &[u8; Rank::COUNT]) -> bool {
    let positions = rank_counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(pos, _)| pos)
        .collect::<Vec<_>>();
    positions.windows(2).all(|w| w[1] - w[0] == 1)
}

/// Hand categories ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}
