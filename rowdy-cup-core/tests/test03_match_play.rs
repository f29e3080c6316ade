use rowdy_cup_core::model::{HoleResult, MatchWinner};
use rowdy_cup_core::scoring::{MatchState, count_results, match_play_status, match_state};

#[test]
fn all_square_while_ongoing() {
    let status = match_play_status(3, 3, 7);
    assert_eq!(status.side_a, "AS");
    assert_eq!(status.side_b, "AS");
    assert!(!status.over);
    assert_eq!(status.winner, None);
}

#[test]
fn leader_shows_up_and_trailer_shows_dn() {
    let status = match_play_status(5, 2, 9);
    assert_eq!(status.side_a, "3 UP");
    assert_eq!(status.side_b, "3 DN");
    assert!(!status.over);
}

#[test]
fn closeout_requires_margin_strictly_greater_than_remaining() {
    // 4 up with 12 to play: nowhere near
    assert!(!match_play_status(5, 1, 6).over);
    assert_eq!(match_play_status(5, 1, 6).side_a, "4 UP");

    // 6 up with 10 to play: still ongoing
    assert!(!match_play_status(6, 0, 8).over);
    assert_eq!(match_play_status(6, 0, 8).side_a, "6 UP");

    // 5 up with 13 to play
    assert!(!match_play_status(5, 0, 5).over);

    // dormie: 5 up, 5 remaining, not yet decided
    let dormie = match_play_status(5, 0, 13);
    assert!(!dormie.over);
    assert_eq!(dormie.side_a, "5 UP");

    // one more hole and it is over
    let closed = match_play_status(5, 0, 14);
    assert!(closed.over);
    assert_eq!(closed.side_a, "5 & 4");
    assert_eq!(closed.side_b, "5 & 4");
    assert_eq!(closed.winner, Some(MatchWinner::SideA));
}

#[test]
fn all_square_after_eighteen_is_a_tie() {
    let status = match_play_status(9, 9, 18);
    assert_eq!(status.side_a, "AS");
    assert_eq!(status.side_b, "AS");
    assert!(status.over);
    assert_eq!(status.winner, Some(MatchWinner::Tie));
}

#[test]
fn win_at_the_eighteenth_always_reads_one_up() {
    let status = match_play_status(8, 7, 18);
    assert_eq!(status.side_a, "1 UP");
    assert_eq!(status.side_b, "1 DN");
    assert!(status.over);
    assert_eq!(status.winner, Some(MatchWinner::SideA));

    // the board shows 1 UP even for a wider final margin
    let wide = match_play_status(10, 7, 18);
    assert_eq!(wide.side_a, "1 UP");
    assert_eq!(wide.side_b, "1 DN");
    assert!(wide.over);
    assert_eq!(wide.winner, Some(MatchWinner::SideA));
}

#[test]
fn statuses_are_mirror_images() {
    let cases = [(5, 2, 9), (0, 0, 0), (3, 3, 7), (9, 9, 18), (7, 2, 14), (8, 7, 18)];
    for (a, b, played) in cases {
        let forward = match_play_status(a, b, played);
        let mirrored = match_play_status(b, a, played);
        assert_eq!(forward.side_a, mirrored.side_b, "case {a}/{b}/{played}");
        assert_eq!(forward.side_b, mirrored.side_a, "case {a}/{b}/{played}");
        assert_eq!(forward.over, mirrored.over, "case {a}/{b}/{played}");
        match forward.winner {
            Some(MatchWinner::SideA) => assert_eq!(mirrored.winner, Some(MatchWinner::SideB)),
            Some(MatchWinner::SideB) => assert_eq!(mirrored.winner, Some(MatchWinner::SideA)),
            other => assert_eq!(mirrored.winner, other),
        }
    }
}

#[test]
fn count_results_skips_undetermined_holes() {
    let results = [
        HoleResult::SideA,
        HoleResult::Halved,
        HoleResult::SideB,
        HoleResult::Undetermined,
        HoleResult::SideA,
        HoleResult::Undetermined,
    ];
    assert_eq!(count_results(&results), (2, 1, 4));
}

#[test]
fn state_machine_classification() {
    assert_eq!(match_state(0, 0, 0), MatchState::Ongoing);
    assert_eq!(match_state(5, 0, 13), MatchState::Ongoing);
    assert_eq!(match_state(5, 0, 14), MatchState::ClosedOut);
    assert_eq!(match_state(9, 9, 18), MatchState::FinishedAt18);
    assert_eq!(match_state(10, 7, 18), MatchState::FinishedAt18);
}
