// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI game.
//!
//! Deals a five cards hand to each player, prints every hand with its
//! category, and declares the winner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::prelude::*;

use showdown_eval::{Deck, Hand};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players to deal to.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Shuffle seed for a reproducible deal, random when not given.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Using shuffle seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut deck = Deck::new_and_shuffled(&mut rng);
    let hands = (0..cli.players)
        .map(|_| {
            let cards = (0..Hand::SIZE).map(|_| deck.deal()).collect::<Vec<_>>();
            Hand::new(&cards)
        })
        .collect::<Result<Vec<_>, _>>()?;

    println!("Welcome to Showdown Poker!");
    for (player, hand) in hands.iter().enumerate() {
        println!("Player {}: {hand}", player + 1);
    }

    let winner = hands
        .iter()
        .max_by(|a, b| a.compare(b))
        .expect("deals to at least two players");
    println!("The winning hand is: {winner}");

    Ok(())
}
