use wordle_solver::core::{Feedback, Judgment, Word};
use wordle_solver::game::{Game, Outcome, SimulatedGame, TerminalGame};
use wordle_solver::solver::{CandidatePool, Knowledge, Session, SessionState, Solver, SolverConfig, filter};
use wordle_solver::transcript::{GameResult, RunLog};
use wordle_solver::wordlists::{LEXICON, loader::words_from_slice};
use wordle_solver::SolveError;

fn five_words() -> Vec<Word> {
    words_from_slice(&["crane", "slate", "trace", "brine", "grape"])
}

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn test_crane_feedback_for_trace_leaves_only_trace() {
    let lexicon = five_words();
    let mut knowledge = Knowledge::new();

    let feedback = Feedback::calculate(&word("crane"), &word("trace"));
    knowledge.learn(&word("crane"), &feedback).unwrap();

    // R, A and E pinned; C somewhere other than the front; N gone
    assert_eq!(knowledge.known_at(1), Some(b'r'));
    assert_eq!(knowledge.known_at(2), Some(b'a'));
    assert_eq!(knowledge.known_at(4), Some(b'e'));
    assert!(knowledge.is_eliminated(b'n'));

    let pool = filter(&lexicon, &knowledge);
    assert_eq!(pool, vec![&lexicon[2]]);
}

#[test]
fn test_repeated_letter_guess_keeps_answer() {
    // ERASE against RAISE: the first E is a surplus copy
    let guess = word("erase");
    let answer = word("raise");
    let feedback = Feedback::calculate(&guess, &answer);
    assert_eq!(
        feedback.judgments(),
        &[
            Judgment::Absent,
            Judgment::Present,
            Judgment::Present,
            Judgment::Correct,
            Judgment::Correct
        ]
    );

    let mut knowledge = Knowledge::new();
    knowledge.learn(&guess, &feedback).unwrap();
    assert!(!knowledge.is_eliminated(b'e'));

    let lexicon = words_from_slice(LEXICON);
    let pool = filter(&lexicon, &knowledge);
    assert!(pool.contains(&&answer));
    assert!(!pool.contains(&&guess));
}

#[test]
fn test_first_guess_all_green_is_one_entry_transcript() {
    let lexicon = five_words();
    let solver = Solver::new(&lexicon, SolverConfig::default());
    let first = solver.session().propose().unwrap().clone();

    let transcript = solver.run(&mut SimulatedGame::new(first.clone())).unwrap();
    assert_eq!(transcript.result, GameResult::Solved { attempts: 1 });
    assert_eq!(transcript.records.len(), 1);
    assert_eq!(transcript.records[0].word, first.text());
    assert!(transcript.records[0].feedback.is_solved());
}

/// Always answers with the same non-solving feedback
struct Stubborn {
    submitted: Vec<String>,
}

impl Game for Stubborn {
    fn submit(&mut self, word: &Word) -> Result<Outcome, SolveError> {
        self.submitted.push(word.text().to_string());
        Ok(Outcome::Accepted(Feedback::parse("GGGGB").unwrap()))
    }
}

#[test]
fn test_six_misses_exhaust_the_game() {
    let lexicon = words_from_slice(&[
        "patch", "patcy", "patcz", "patcx", "patcw", "patcv", "patcu", "patct",
    ]);
    let solver = Solver::new(&lexicon, SolverConfig::default());
    let mut game = Stubborn { submitted: Vec::new() };

    let transcript = solver.run(&mut game).unwrap();

    assert_eq!(transcript.result, GameResult::Exhausted);
    assert_eq!(transcript.records.len(), 6);
    assert_eq!(game.submitted.len(), 6);
    assert!(!transcript.is_solved());
}

#[test]
fn test_rejection_does_not_consume_attempt_or_knowledge() {
    let lexicon = five_words();
    let mut session = Session::new(&lexicon, SolverConfig::default());

    for _ in 0..3 {
        session.propose().unwrap();
        let before = session.knowledge().clone();
        assert_eq!(session.observe(Outcome::Rejected).unwrap(), SessionState::Guessing);
        assert_eq!(session.attempt(), 1);
        assert_eq!(session.knowledge(), &before);
    }
    assert_eq!(session.pool().len(), 2);
    assert_eq!(session.pool().rejected_count(), 3);
}

#[test]
fn test_solves_whole_embedded_lexicon_without_errors() {
    let lexicon = words_from_slice(LEXICON);
    let solver = Solver::new(&lexicon, SolverConfig::default());

    let mut solved = 0;
    for answer in lexicon.iter().step_by(7) {
        let transcript = solver.run(&mut SimulatedGame::new(answer.clone())).unwrap();
        assert!(transcript.attempts() <= 6);
        if transcript.is_solved() {
            assert_eq!(transcript.answer(), Some(answer.text()));
            solved += 1;
        }
    }
    assert!(solved > 0);
}

#[test]
fn test_pool_sizes_never_grow() {
    let lexicon = words_from_slice(LEXICON);
    let answer = word("spoke");
    let mut pool = CandidatePool::new(&lexicon);
    let mut knowledge = Knowledge::new();
    let mut sizes = vec![pool.len()];

    for guess in ["crane", "moist", "pouch", "spoke"] {
        let guess = word(guess);
        knowledge
            .learn(&guess, &Feedback::calculate(&guess, &answer))
            .unwrap();
        pool.refine(&knowledge);
        sizes.push(pool.len());
        assert!(pool.contains(&answer));
    }

    assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(*sizes.last().unwrap(), 1);
}

#[test]
fn test_terminal_relay_with_rejection_and_log() {
    let lexicon = five_words();
    let solver = Solver::new(&lexicon, SolverConfig::default());

    // CRANE refused, then TRACE is correct straight away
    let mut output = Vec::new();
    let mut game = TerminalGame::new("x\nggggg\n".as_bytes(), &mut output);
    let transcript = solver.run(&mut game).unwrap();
    drop(game);

    assert_eq!(transcript.attempts(), 1);
    assert_eq!(transcript.answer(), Some("trace"));

    let dir = tempfile::TempDir::new().unwrap();
    let log = RunLog::new(dir.path().join("wordle_solver.log"));
    log.append(&transcript).unwrap();

    let entries = log.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].guess_record[0].word, "trace");
    assert_eq!(entries[0].guess_record[0].pool_size, 4);
}

#[test]
fn test_malformed_feedback_is_reported() {
    assert!(matches!(
        Feedback::parse("GGGG"),
        Err(SolveError::MalformedFeedback(_))
    ));
    assert!(matches!(
        "tbd".parse::<Judgment>(),
        Err(SolveError::MalformedFeedback(_))
    ));
}
