//! End-to-end runs of the main loop and the button path together.
use crate::sim::*;
use crate::*;

struct Board {
    shared: Shared<SimScheduler>,
    main: MainLoop,
    clock: ManualClock,
    matrix: RecordingMatrix,
    outputs: Outputs,
    display: RecordingDisplay,
}

impl Board {
    fn new() -> Self {
        let mut board = Self {
            shared: Shared::new(FeedbackController::new(SimScheduler::new(), &Config::DEFAULT)),
            main: MainLoop::new(&Config::DEFAULT),
            clock: ManualClock::default(),
            matrix: RecordingMatrix::default(),
            outputs: Outputs::default(),
            display: RecordingDisplay::default(),
        };
        board.shared.lock(|c| c.start(&mut board.matrix));
        board.main.start(&mut board.display);
        board
    }

    /// Sets the clock and delivers any timeouts that became due.
    fn at(&mut self, t: u64) {
        self.clock.set(t);
        let due = self
            .shared
            .lock(|c| c.scheduler_mut().advance_to(Instant::from_millis(t)));
        for handle in due {
            self.shared.on_timer(handle, &mut self.matrix);
        }
    }

    fn press(&mut self, button: Button, t: u64) -> Outcome {
        self.at(t);
        self.shared
            .press(button, &self.clock, &mut self.matrix, &mut self.outputs)
    }

    fn tick(&mut self, x: i32, y: i32) -> TickReport {
        let mut stick = FixedJoystick::new(x, y);
        self.main
            .tick(&mut stick, &self.shared, &mut self.outputs, &mut self.display)
    }
}

#[test]
fn centred_stick_is_silent() {
    let mut board = Board::new();
    let report = board.tick(2048, 2048);
    assert_eq!(report.intensity, Intensity { x: 0, y: 0 });
    assert_eq!(report.level, 0);
    assert_eq!(board.outputs.level(Actuator::Led(Slot::One)), 0);
    assert_eq!(board.outputs.level(Actuator::Buzzer), 0);
    // Marker top-left sits within a few pixels of the 128x64 centre.
    assert!((report.cursor.x as i32 + 4 - 64).abs() <= 8);
    assert!((report.cursor.y as i32 + 4 - 32).abs() <= 8);
}

#[test]
fn full_right_drives_selected_slot() {
    let mut board = Board::new();
    let report = board.tick(4095, 2048);
    assert!(report.state.mode_enabled);
    assert_eq!(report.intensity, Intensity { x: 4095 - 2348, y: 0 });
    assert_eq!(report.level, 1747);
    assert_eq!(board.outputs.level(Actuator::Led(Slot::One)), 1747);
    assert_eq!(board.outputs.level(Actuator::Buzzer), 1747);
    assert_eq!(board.outputs.level(Actuator::Led(Slot::Two)), 0);
}

#[test]
fn a_press_shows_glyph_until_timeout() {
    let mut board = Board::new();
    assert_eq!(
        board.press(Button::A, 0),
        Outcome::ModeToggled { enabled: false }
    );
    assert_eq!(board.matrix.current(), Some(Glyph::ArrowLeft));

    for t in [50, 100, 150, 199] {
        assert_eq!(board.press(Button::A, t), Outcome::Suppressed);
    }
    assert!(!board.shared.state().mode_enabled);

    board.at(999);
    assert_eq!(board.matrix.current(), Some(Glyph::ArrowLeft));
    board.at(1000);
    assert_eq!(board.matrix.current(), None);
    assert_eq!(
        board.shared.state(),
        FeedbackState {
            mode_enabled: false,
            selected: Slot::One,
            pending: None,
        }
    );

    let report = board.tick(4095, 4095);
    assert_eq!(report.level, 0);
}

#[test]
fn second_button_inside_window_is_suppressed() {
    let mut board = Board::new();
    assert_eq!(
        board.press(Button::B, 0),
        Outcome::SlotAdvanced {
            from: Slot::One,
            to: Slot::Two
        }
    );
    assert_eq!(board.press(Button::A, 50), Outcome::Suppressed);
    assert_eq!(board.press(Button::B, 50), Outcome::Suppressed);
    assert_eq!(board.shared.state().selected, Slot::Two);
    assert!(board.shared.state().mode_enabled);

    let report = board.tick(0, 2048);
    assert_eq!(board.outputs.level(Actuator::Led(Slot::Two)), report.level);
    assert_eq!(board.outputs.level(Actuator::Led(Slot::One)), 0);
}

#[test]
fn slot_change_between_ticks_leaves_old_slot_dark() {
    let mut board = Board::new();
    board.tick(4095, 2048);
    assert_eq!(board.outputs.level(Actuator::Led(Slot::One)), 1747);

    board.press(Button::B, 300);
    assert_eq!(board.outputs.level(Actuator::Led(Slot::One)), 0);

    board.tick(4095, 2048);
    assert_eq!(board.outputs.level(Actuator::Led(Slot::One)), 0);
    assert_eq!(board.outputs.level(Actuator::Led(Slot::Two)), 1747);
}
