//! Whole-game scenarios: the full state machine network driven tick by tick
//! through a scripted touch screen.

mod common;

use common::{CanvasOp, MockCanvas, MockScreen, MockTimer};
use simon_core::{Game, GamePhase, GameTiming, Message, Region, STARTING_SEQUENCE_LENGTH};

/// Short waits so scenarios stay fast; every duration is still distinct and
/// long enough for the touch scripting below.
const TIMING: GameTiming = GameTiming {
    settle: 1,
    flash: 2,
    pause: 2,
    congrats: 3,
    new_level_timeout: 12,
    score: 6,
    touch_timeout: 30,
};

const CAPACITY: usize = 16;

fn wrong_region(region: Region) -> Region {
    Region::ALL[(region.index() + 1) % Region::COUNT]
}

struct Harness {
    game: Game<MockTimer, CAPACITY>,
    screen: MockScreen,
    canvas: MockCanvas,
}

impl Harness {
    fn new() -> Self {
        Self {
            game: Game::new(TIMING, MockTimer::new(0xC0FFEE)),
            screen: MockScreen::new(),
            canvas: MockCanvas::new(),
        }
    }

    fn tick(&mut self) {
        self.game.tick(&mut self.screen, &mut self.canvas);
    }

    /// Ticks until the supervisor reaches `phase`, or panics after
    /// `max_ticks`.
    fn wait_for(&mut self, phase: GamePhase, max_ticks: u32) {
        for _ in 0..max_ticks {
            if self.game.phase() == phase {
                return;
            }
            self.tick();
        }
        assert_eq!(
            self.game.phase(),
            phase,
            "phase not reached within {max_ticks} ticks"
        );
    }

    /// Boots the game and touches through the intro screen.
    fn start_game(&mut self) {
        self.wait_for(GamePhase::TouchToStart, 5);
        self.screen.press(Region::TopLeft);
        self.wait_for(GamePhase::WaitForRelease, 5);
        self.screen.release();
    }

    /// One scripted press-release on `region`, with enough ticks around it
    /// for the detector to arm, settle, sample and drain.
    fn play_symbol(&mut self, region: Region) {
        self.screen.press(region);
        for _ in 0..5 {
            self.tick();
        }
        self.screen.release();
        for _ in 0..4 {
            self.tick();
        }
    }

    /// Plays one round: waits for verification, then repeats the active
    /// prefix, optionally mistouching the symbol at `mistouch_at`.
    fn run_round(&mut self, mistouch_at: Option<usize>) {
        self.wait_for(GamePhase::VerifyingSequence, 80);
        let active = self.game.store().active_len();
        for i in 0..active {
            let expected = self.game.store().value(i);
            let touch = match mistouch_at {
                Some(wrong) if wrong == i => wrong_region(expected),
                _ => expected,
            };
            self.play_symbol(touch);
            if mistouch_at == Some(i) {
                return;
            }
        }
    }

    /// Plays every round of the current level correctly, through to the
    /// congratulations screen.
    fn run_level(&mut self) {
        let length = self.game.store().len();
        for _ in 0..length {
            self.run_round(None);
        }
        self.wait_for(GamePhase::Congratulating, 10);
    }

    /// Touches through the new-level prompt.
    fn next_level(&mut self) {
        self.wait_for(GamePhase::TouchForNewLevel, 10);
        self.screen.press(Region::BottomLeft);
        self.wait_for(GamePhase::WaitForRelease, 5);
        self.screen.release();
    }
}

#[test]
fn boots_to_the_intro_screen_and_waits() {
    let mut harness = Harness::new();
    harness.wait_for(GamePhase::TouchToStart, 5);
    assert_eq!(harness.canvas.visible_message(), Some(Message::Intro));

    // Without a touch, nothing moves.
    for _ in 0..20 {
        harness.tick();
    }
    assert_eq!(harness.game.phase(), GamePhase::TouchToStart);
    assert_eq!(harness.game.score(), 0);
}

#[test]
fn first_level_uses_the_starting_sequence_length() {
    let mut harness = Harness::new();
    harness.start_game();
    assert_eq!(harness.game.store().len(), STARTING_SEQUENCE_LENGTH);
    assert_eq!(harness.game.store().active_len(), 1);
}

#[test]
fn playback_flashes_the_active_prefix_between_erased_and_drawn_buttons() {
    let mut harness = Harness::new();
    harness.start_game();
    harness.wait_for(GamePhase::PauseBeforeFlash, 5);
    harness.canvas.ops.clear();

    harness.wait_for(GamePhase::VerifyingSequence, 40);

    let first = harness.game.store().value(0);
    let mut expected: Vec<CanvasOp> = Region::ALL.map(CanvasOp::EraseButton).to_vec();
    expected.push(CanvasOp::Light(first));
    expected.push(CanvasOp::Dim(first));
    expected.extend(Region::ALL.map(CanvasOp::DrawButton));
    assert_eq!(harness.canvas.ops, expected);
}

#[test]
fn completing_a_level_grows_the_sequence_by_one() {
    let mut harness = Harness::new();
    harness.start_game();
    let first_len = harness.game.store().len();

    harness.run_level();
    assert_eq!(harness.game.score(), first_len as u16);
    assert_eq!(harness.canvas.visible_message(), Some(Message::Congratulations));

    harness.next_level();
    assert_eq!(harness.game.store().len(), first_len + 1);
    assert_eq!(harness.game.store().active_len(), 1);
}

#[test]
fn losing_on_the_seventh_level_scores_six() {
    let mut harness = Harness::new();
    harness.start_game();

    for level_len in STARTING_SEQUENCE_LENGTH..=6 {
        assert_eq!(harness.game.store().len(), level_len);
        harness.run_level();
        // Score tracks the longest fully repeated sequence, monotonically.
        assert_eq!(harness.game.score(), level_len as u16);
        harness.next_level();
    }

    // Seventh level: one wrong touch on the very first symbol.
    assert_eq!(harness.game.store().len(), 7);
    harness.run_round(Some(0));

    harness.wait_for(GamePhase::DisplayingScore, 10);
    assert_eq!(harness.game.score(), 6);
    assert_eq!(harness.canvas.visible_message(), Some(Message::Score(6)));

    // The score screen times out back to the intro.
    harness.wait_for(GamePhase::TouchToStart, TIMING.score + 5);
    assert_eq!(harness.canvas.visible_message(), Some(Message::Intro));
}

#[test]
fn verification_timeout_ends_the_game() {
    let mut harness = Harness::new();
    harness.start_game();
    harness.wait_for(GamePhase::VerifyingSequence, 40);

    // Never touch; the per-symbol window runs out.
    for _ in 0..TIMING.touch_timeout + 5 {
        harness.tick();
    }

    assert_eq!(harness.game.phase(), GamePhase::DisplayingScore);
    assert_eq!(harness.game.score(), 0);
    assert_eq!(harness.canvas.visible_message(), Some(Message::Score(0)));
}

#[test]
fn new_level_prompt_times_out_to_the_score_screen() {
    let mut harness = Harness::new();
    harness.start_game();
    harness.run_level();

    harness.wait_for(GamePhase::TouchForNewLevel, 10);
    assert_eq!(harness.canvas.visible_message(), Some(Message::NewLevelPrompt));

    for _ in 0..TIMING.new_level_timeout + 5 {
        harness.tick();
    }

    assert_eq!(harness.game.phase(), GamePhase::DisplayingScore);
    assert_eq!(
        harness.canvas.visible_message(),
        Some(Message::Score(STARTING_SEQUENCE_LENGTH as u16))
    );
}

#[test]
fn starting_a_new_game_resets_score_and_length() {
    let mut harness = Harness::new();
    harness.start_game();
    harness.run_level();
    assert_eq!(harness.game.score(), STARTING_SEQUENCE_LENGTH as u16);

    // Let the prompt and score screens run out, back to the intro.
    harness.wait_for(GamePhase::TouchForNewLevel, 10);
    harness.wait_for(GamePhase::DisplayingScore, TIMING.new_level_timeout + 5);
    harness.wait_for(GamePhase::TouchToStart, TIMING.score + 5);

    harness.start_game();
    assert_eq!(harness.game.score(), 0);
    assert_eq!(harness.game.store().len(), STARTING_SEQUENCE_LENGTH);
}

#[test]
fn mistouch_mid_level_keeps_the_previous_score() {
    let mut harness = Harness::new();
    harness.start_game();
    harness.run_level();
    harness.next_level();

    // Fail on the second symbol of the second round.
    harness.run_round(None);
    harness.run_round(Some(1));

    harness.wait_for(GamePhase::DisplayingScore, 10);
    assert_eq!(harness.game.score(), STARTING_SEQUENCE_LENGTH as u16);
}
