// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full headless swipe session.
//!
//! Loads a batch through a [`SourceCascade`], swipes through it with a mix of
//! drags and button presses, prints the tally, then starts over once.
//!
//! Run:
//! - `cargo run -p understory_deck_demos --example deck_session`
//! - `cargo run -p understory_deck_demos --example deck_session -- --offline`
//! - `cargo run -p understory_deck_demos --example deck_session -- --config cascade.json`
//!
//! Set `RUST_LOG=debug` to see every visual update.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, bail};
use understory_deck::{Deck, PointerId, PointerSample, Release, SwipeConfig, SwipeTally};
use understory_deck_demos::{DemoTransport, TerminalView, init_tracing};
use understory_deck_source::{CascadeConfig, SourceCascade};

const BATCH: NonZeroUsize = NonZeroUsize::new(6).unwrap();
const FINGER: PointerId = PointerId(1);

type DemoDeck = Deck<TerminalView, SwipeTally>;

struct Args {
    offline: bool,
    config: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        offline: false,
        config: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--offline" => args.offline = true,
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(path.into());
            }
            other => bail!("unknown argument `{other}`"),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<CascadeConfig> {
    let Some(path) = path else {
        return Ok(CascadeConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Drags the top card by `offset` in small steps and lets go.
fn drag(deck: &mut DemoDeck, offset: f64, mut now: u64) -> (Release, u64) {
    let start = 200.0;
    if !deck.pointer_down(PointerSample::at_x(FINGER, start, now)) {
        return (Release::Ignored, now);
    }
    for step in 1..=4 {
        now += 16;
        deck.pointer_move(PointerSample::at_x(
            FINGER,
            start + offset * f64::from(step) / 4.0,
            now,
        ));
    }
    now += 16;
    let release = deck.pointer_up(PointerSample::at_x(FINGER, start + offset, now));
    (release, now)
}

/// Swipes until the deck reports it is finished, returning the final clock.
fn play_round(deck: &mut DemoDeck, mut now: u64) -> u64 {
    let offsets = [160.0, -40.0, -180.0, 90.0, 220.0];
    let mut turn = 0_usize;
    while !deck.listener().is_finished() {
        let Some(top) = deck.top().map(|card| card.data().id().to_owned()) else {
            // Exits still in flight.
            let Some(deadline) = deck.next_deadline() else {
                break;
            };
            now = now.max(deadline);
            deck.advance(now);
            continue;
        };
        if turn % 3 == 2 {
            let liked = turn % 2 == 0;
            println!("  {top}: button {}", if liked { "like" } else { "nope" });
            deck.swipe(liked, now);
        } else {
            let offset = offsets[turn % offsets.len()];
            let (release, later) = drag(deck, offset, now);
            now = later;
            println!("  {top}: dragged {offset:+} px -> {release:?}");
        }
        turn += 1;
        // Let spring-backs and exits settle before the next input.
        while let Some(deadline) = deck.next_deadline() {
            now = now.max(deadline);
            deck.advance(now);
        }
    }
    now
}

fn summarize(deck: &DemoDeck) {
    let tally = deck.listener();
    println!(
        "swiped {} cards: {} liked, {} passed",
        tally.swiped(),
        tally.accepted().len(),
        tally.rejected()
    );
    if tally.accepted().is_empty() {
        println!("no accepted items this round");
    } else {
        for item in tally.accepted() {
            println!("  liked {} ({})", item.id(), item.url());
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = parse_args()?;
    let config = load_config(args.config.as_ref())?;
    let transport = DemoTransport::new(args.offline, config.timeout());
    let cascade = SourceCascade::with_transport(transport, config);

    let mut deck = Deck::new(
        TerminalView::default(),
        SwipeTally::new(),
        SwipeConfig::default(),
    );
    deck.set_viewport_width(390.0);

    let mut now = 0;
    for round in 1..=2 {
        let batch = cascade.fetch(BATCH);
        println!("round {round}: {} cards from {:?}", batch.items.len(), batch.origin);
        deck.add_cards(batch.items);
        now = play_round(&mut deck, now);
        summarize(&deck);
        deck.listener_mut().reset();
    }
    println!("rendered {} cards in total", deck.view().rendered());
    Ok(())
}
