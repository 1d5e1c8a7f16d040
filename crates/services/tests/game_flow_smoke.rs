use metric_core::metrics::GuessRating;
use metric_core::time::fixed_clock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{AppServices, GameConfig, GamePhase, RoundOutcome, TickOutcome};

#[test]
fn mixed_manual_and_timeout_rounds_produce_one_record_each() {
    let services = AppServices::new(fixed_clock(), GameConfig::default());
    let mut rng = StdRng::seed_from_u64(99);
    let mut session = services.new_game();
    session.start(&mut rng);

    // Rounds 1-2: manual guesses.
    session.submit_guess("60", &mut rng).unwrap();
    session.submit_guess("not a number", &mut rng).unwrap();

    // Round 3: the player types nothing and the timer runs out.
    let mut auto_submitted = false;
    for _ in 0..10 {
        if let TickOutcome::AutoSubmitted(outcome) = session.tick(false, &mut rng) {
            assert_eq!(outcome, RoundOutcome::NextRound);
            auto_submitted = true;
            break;
        }
    }
    assert!(auto_submitted, "countdown should auto-submit at zero");

    // Rounds 4-5: manual again.
    session.submit_guess("55", &mut rng).unwrap();
    let outcome = session.submit_guess("48", &mut rng).unwrap();
    assert_eq!(outcome, RoundOutcome::Finished);

    assert_eq!(session.phase(), GamePhase::Results);
    let results = session.results().expect("finished game has results");
    assert_eq!(results.rows.len(), 5);
    // Coerced and auto-submitted rounds both recorded a zero guess.
    assert_eq!(results.rows[1].guess, 0);
    assert_eq!(results.rows[2].guess, 0);
    assert!(results.rmse >= 0.0);
    assert_eq!(results.rating, GuessRating::from_rmse(results.rmse));

    // Ticks after the game finished are inert.
    assert_eq!(session.tick(false, &mut rng), TickOutcome::Ignored);
    assert_eq!(session.records().len(), 5);
}

#[test]
fn snapshot_reflects_each_phase() {
    let services = AppServices::new(fixed_clock(), GameConfig::default());
    let mut rng = StdRng::seed_from_u64(3);
    let mut session = services.new_game();

    assert_eq!(session.snapshot().phase, GamePhase::Welcome);

    session.start(&mut rng);
    let playing = session.snapshot();
    assert_eq!(playing.phase, GamePhase::Playing);
    assert_eq!(playing.dots.len(), session.current_truth() as usize);
    assert!(playing.results.is_none());

    for _ in 0..5 {
        session.submit_guess("40", &mut rng).unwrap();
    }
    let finished = session.snapshot();
    assert_eq!(finished.phase, GamePhase::Results);
    assert!(finished.results.is_some());
}
