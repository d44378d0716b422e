//! Round state machine integration tests.
//!
//! These drive `Round` tick by tick, without a runtime, and check the
//! scoring, countdown and one-shot signal rules end to end.

use std::time::Duration;

use guess_the_word::{BuzzKind, GameRng, Round, RoundConfig, RoundPhase, Vocabulary, WordQueue};
use proptest::prelude::*;

const PANIC_THRESHOLD: Duration = Duration::from_secs(10);

fn config(seed: u64) -> RoundConfig {
    RoundConfig::default()
        .with_round_duration(Duration::from_secs(20))
        .with_tick(Duration::from_secs(1))
        .with_panic_threshold(PANIC_THRESHOLD)
        .with_seed(seed)
}

fn three_words() -> Vocabulary {
    Vocabulary::new(["lion", "tiger", "bear"]).unwrap()
}

/// Two accepts and a skip at t=0, then the clock runs out untouched.
#[test]
fn test_twenty_second_round() {
    let mut round = Round::new(config(1), three_words()).unwrap();

    round.accept();
    round.accept();
    round.skip();
    assert_eq!(round.score(), 1);

    for _ in 0..20 {
        round.tick();
    }

    assert!(round.finished_pending());
    assert_eq!(round.remaining(), Duration::ZERO);
    assert_eq!(round.pending_buzz(), BuzzKind::GameOver);
    assert_eq!(round.phase(), RoundPhase::Finished);
    assert_eq!(round.score(), 1);
}

/// A one-word vocabulary keeps handing out the same word.
#[test]
fn test_single_word_vocabulary() {
    let mut round = Round::new(config(2), Vocabulary::new(["echo"]).unwrap()).unwrap();

    for _ in 0..50 {
        round.skip();
        assert_eq!(round.word(), "echo");
    }
    assert_eq!(round.score(), -50);
}

/// Acknowledging the finish twice leaves the flag cleared.
#[test]
fn test_acknowledge_finished_twice() {
    let mut round = Round::new(config(3), three_words()).unwrap();
    for _ in 0..20 {
        round.tick();
    }

    round.acknowledge_finished();
    round.acknowledge_finished();

    assert!(!round.finished_pending());
    assert!(round.is_finished());
}

/// Every tick in the panic window buzzes; ticks before it do not.
#[test]
fn test_panic_window() {
    let mut round = Round::new(config(4), three_words()).unwrap();

    for _ in 0..20 {
        round.acknowledge_buzz();
        round.tick();

        let remaining = round.remaining();
        let expected = if remaining.is_zero() {
            BuzzKind::GameOver
        } else if remaining <= PANIC_THRESHOLD {
            BuzzKind::CountdownPanic
        } else {
            BuzzKind::None
        };
        assert_eq!(round.pending_buzz(), expected, "at {:?}", remaining);
    }
}

/// Ticks past the end change nothing.
#[test]
fn test_no_mutation_after_finish() {
    let mut round = Round::new(config(5), three_words()).unwrap();
    for _ in 0..20 {
        round.tick();
    }
    round.acknowledge_buzz();
    round.acknowledge_finished();
    let frozen = round.snapshot();

    for _ in 0..10 {
        round.tick();
        round.accept();
        round.skip();
    }

    assert_eq!(round.snapshot(), frozen);
}

proptest! {
    /// Score is accepts minus skips for any command sequence while running.
    #[test]
    fn prop_score_is_accepts_minus_skips(actions in proptest::collection::vec(any::<bool>(), 0..200)) {
        let mut round = Round::new(config(6), three_words()).unwrap();
        let mut expected = 0i64;

        for accept in actions {
            if accept {
                round.accept();
                expected += 1;
                prop_assert_eq!(round.pending_buzz(), BuzzKind::Correct);
            } else {
                round.skip();
                expected -= 1;
            }
            prop_assert_eq!(round.score(), expected);
        }
    }

    /// The clock never increases, never goes negative and ends at exactly zero.
    #[test]
    fn prop_remaining_is_monotonic(
        duration_ms in 1u64..30_000,
        tick_ms in 1u64..5_000,
        extra_ticks in 0usize..5,
    ) {
        let cfg = RoundConfig::default()
            .with_round_duration(Duration::from_millis(duration_ms))
            .with_tick(Duration::from_millis(tick_ms))
            .with_seed(7);
        let mut round = Round::new(cfg, Vocabulary::default()).unwrap();

        let ticks_needed = duration_ms.div_ceil(tick_ms) as usize;
        let mut last = round.remaining();
        for i in 0..ticks_needed + extra_ticks {
            round.tick();
            prop_assert!(round.remaining() <= last);
            last = round.remaining();
            prop_assert_eq!(round.is_finished(), i + 1 >= ticks_needed);
        }
        prop_assert_eq!(round.remaining(), Duration::ZERO);
        prop_assert!(round.finished_pending());
    }

    /// Any number of draws stays within the vocabulary and never stalls.
    #[test]
    fn prop_queue_never_runs_dry(size in 1usize..10, draws in 0usize..100, seed in any::<u64>()) {
        let words: Vec<String> = (0..size).map(|i| format!("w{i}")).collect();
        let vocab = Vocabulary::new(&words).unwrap();
        let mut queue = WordQueue::new(vocab.clone(), GameRng::new(seed));

        for _ in 0..draws {
            let word = queue.take_next();
            prop_assert!(vocab.contains(&word));
        }
        prop_assert_eq!(queue.refills(), 1 + (draws.saturating_sub(1) / size) as u64);
    }

    /// Each full pass over the pool yields every word exactly once.
    #[test]
    fn prop_each_pass_is_a_permutation(size in 1usize..15, seed in any::<u64>()) {
        let words: Vec<String> = (0..size).map(|i| format!("w{i}")).collect();
        let mut queue = WordQueue::new(Vocabulary::new(&words).unwrap(), GameRng::new(seed));

        for _ in 0..3 {
            let mut pass: Vec<String> = (0..size).map(|_| queue.take_next()).collect();
            pass.sort();
            let mut expected = words.clone();
            expected.sort();
            prop_assert_eq!(pass, expected);
        }
    }
}
