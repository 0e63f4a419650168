//! Integration tests for best-of-N match sets.

use element_bracket::{
    play_match_set, resolve_match_set, Competitor, ElementGraph, ElementId, ErrorKind, MatchSet,
    RandomPicks, ScriptedPicks, TournamentError, DEFAULT_WIN_THRESHOLD,
};

struct Rps {
    graph: ElementGraph,
    rock: ElementId,
    paper: ElementId,
    scissors: ElementId,
}

fn rps() -> Rps {
    let graph = ElementGraph::canonical();
    let rock = graph.find("Rock").unwrap().id;
    let paper = graph.find("Paper").unwrap().id;
    let scissors = graph.find("Scissors").unwrap().id;
    Rps {
        graph,
        rock,
        paper,
        scissors,
    }
}

#[test]
fn set_stops_once_threshold_is_reached() {
    let e = rps();
    let mut a = Competitor::new("A");
    let mut b = Competitor::new("B");
    let mut picks = ScriptedPicks::from_games([
        (e.rock, e.paper),
        (e.paper, e.scissors),
        (e.scissors, e.rock),
    ]);

    let set = play_match_set(&mut a, &mut b, &e.graph, &mut picks, 2, None).unwrap();

    assert_eq!(set.winner, Some(b.id));
    assert_eq!((set.score_a, set.score_b), (0, 2));
    assert_eq!(set.decided_games(), 2);
    // Third game never drawn.
    assert_eq!(picks.remaining(), 2);
}

#[test]
fn ties_are_replayed_and_not_scored() {
    let e = rps();
    let mut a = Competitor::new("A");
    let mut b = Competitor::new("B");
    let mut picks = ScriptedPicks::from_games([
        (e.rock, e.rock),
        (e.paper, e.rock),
        (e.scissors, e.scissors),
        (e.scissors, e.rock),
        (e.rock, e.scissors),
    ]);

    let set = play_match_set(&mut a, &mut b, &e.graph, &mut picks, 2, None).unwrap();

    assert_eq!(set.winner().unwrap(), a.id);
    assert_eq!(set.loser().unwrap(), b.id);
    assert_eq!((set.score_a, set.score_b), (2, 1));
    assert_eq!(set.ties, 2);
    assert_eq!(set.games_played(), 5);
    assert_eq!(picks.remaining(), 0);
}

#[test]
fn random_sets_end_with_winner_at_threshold() {
    let e = rps();
    let mut picks = RandomPicks::seeded(7);
    for threshold in [1, DEFAULT_WIN_THRESHOLD, 3, 5] {
        for _ in 0..200 {
            let mut a = Competitor::new("A");
            let mut b = Competitor::new("B");
            let set = play_match_set(&mut a, &mut b, &e.graph, &mut picks, threshold, None).unwrap();
            assert_ne!(set.score_a, set.score_b);
            let (winner_score, loser_score) = if set.winner == Some(a.id) {
                (set.score_a, set.score_b)
            } else {
                assert_eq!(set.winner, Some(b.id));
                (set.score_b, set.score_a)
            };
            assert_eq!(winner_score, threshold);
            assert!(loser_score < threshold);
            assert_eq!(set.decided_games(), set.score_a + set.score_b);
            assert!(a.pick().is_err() && b.pick().is_err());
        }
    }
}

#[test]
fn tie_limit_stops_endless_ties() {
    let e = rps();
    let mut a = Competitor::new("A");
    let mut b = Competitor::new("B");
    let mut picks = ScriptedPicks::from_games([(e.rock, e.rock); 3]);

    let err = play_match_set(&mut a, &mut b, &e.graph, &mut picks, 2, Some(2)).unwrap_err();
    assert_eq!(err, TournamentError::TieLimitReached { limit: 2 });
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn exhausted_script_is_reported() {
    let e = rps();
    let mut a = Competitor::new("A");
    let mut b = Competitor::new("B");
    let mut picks = ScriptedPicks::from_games([(e.rock, e.paper)]);

    let err = play_match_set(&mut a, &mut b, &e.graph, &mut picks, 2, None).unwrap_err();
    assert_eq!(err, TournamentError::PickSourceExhausted);
}

#[test]
fn foreign_pick_is_rejected() {
    let e = rps();
    let mut a = Competitor::new("A");
    let mut b = Competitor::new("B");
    let mut picks = ScriptedPicks::new([e.rock, ElementId(42)]);

    let err = play_match_set(&mut a, &mut b, &e.graph, &mut picks, 2, None).unwrap_err();
    assert_eq!(err, TournamentError::UnknownElement(ElementId(42)));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn set_is_resolved_only_once() {
    let e = rps();
    let mut a = Competitor::new("A");
    let mut b = Competitor::new("B");
    let mut picks = ScriptedPicks::from_games([(e.paper, e.rock); 4]);

    let mut set = MatchSet::new(a.id, b.id, 2).unwrap();
    resolve_match_set(&mut set, &mut a, &mut b, &e.graph, &mut picks, None).unwrap();
    let err = resolve_match_set(&mut set, &mut a, &mut b, &e.graph, &mut picks, None).unwrap_err();
    assert_eq!(err, TournamentError::SetAlreadyResolved);
    assert_eq!(picks.remaining(), 4);
}

#[test]
fn wrong_competitors_and_threshold_are_rejected() {
    let e = rps();
    let mut a = Competitor::new("A");
    let mut b = Competitor::new("B");
    let mut c = Competitor::new("C");
    let mut picks = ScriptedPicks::default();

    let mut set = MatchSet::new(a.id, b.id, 2).unwrap();
    let err = resolve_match_set(&mut set, &mut a, &mut c, &e.graph, &mut picks, None).unwrap_err();
    assert_eq!(err, TournamentError::CompetitorNotInSet(c.id));
    assert!(set.result().is_err());
    assert_eq!(
        MatchSet::new(a.id, b.id, 0),
        Err(TournamentError::InvalidWinThreshold(0))
    );
}

#[test]
fn failed_set_clears_picks_and_score() {
    let e = rps();
    let mut a = Competitor::new("A");
    let mut b = Competitor::new("B");
    let mut picks = ScriptedPicks::from_games([(e.paper, e.rock), (e.rock, e.rock)]);

    let mut set = MatchSet::new(a.id, b.id, 2).unwrap();
    let err = resolve_match_set(&mut set, &mut a, &mut b, &e.graph, &mut picks, None).unwrap_err();
    assert_eq!(err, TournamentError::PickSourceExhausted);
    assert!(a.pick().is_err() && b.pick().is_err());
    assert_eq!((set.score_a, set.score_b, set.ties), (0, 0, 0));
    assert!(!set.is_resolved());

    // Replays from 0-0 rather than resuming at 1-0.
    picks.push_game(e.paper, e.rock);
    picks.push_game(e.rock, e.paper);
    picks.push_game(e.rock, e.paper);
    resolve_match_set(&mut set, &mut a, &mut b, &e.graph, &mut picks, None).unwrap();
    assert_eq!(set.winner, Some(b.id));
    assert_eq!((set.score_a, set.score_b), (1, 2));
}

#[test]
fn foreign_pick_clears_picks() {
    let e = rps();
    let mut a = Competitor::new("A");
    let mut b = Competitor::new("B");
    let mut picks = ScriptedPicks::new([e.rock, e.paper, e.rock, ElementId(42)]);

    let mut set = MatchSet::new(a.id, b.id, 2).unwrap();
    let err = resolve_match_set(&mut set, &mut a, &mut b, &e.graph, &mut picks, None).unwrap_err();
    assert_eq!(err, TournamentError::UnknownElement(ElementId(42)));
    assert!(a.pick().is_err() && b.pick().is_err());
    assert_eq!(set.decided_games(), 0);
}
