//! # Alarm Task
//!
//! [`Scheduler`] for the feedback timeout. The controller posts commands on
//! a [`Signal`]; a single task waits for either the next command or the
//! pending deadline and reports expiry back to the controller.
//!
//! A signal holds only the latest command. That is enough: the controller
//! always cancels before it arms, so the last command posted describes the
//! whole pending state.
use crate::*;

use embassy_futures::select::{select, Either};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};

#[derive(Debug, Clone, Copy)]
enum AlarmCommand {
    Arm { handle: TimerHandle, deadline: Instant },
    Cancel(TimerHandle),
}

static ALARM: Signal<CriticalSectionRawMutex, AlarmCommand> = Signal::new();

pub struct AlarmScheduler;

impl Scheduler for AlarmScheduler {
    fn schedule_once(&mut self, delay: Duration, handle: TimerHandle) {
        let deadline = Instant::now() + delay;
        ALARM.signal(AlarmCommand::Arm { handle, deadline });
    }

    fn cancel(&mut self, handle: TimerHandle) {
        ALARM.signal(AlarmCommand::Cancel(handle));
    }
}

pub async fn run() -> ! {
    let mut pending: Option<(TimerHandle, Instant)> = None;
    loop {
        let command = match pending {
            None => ALARM.wait().await,
            Some((handle, deadline)) => match select(ALARM.wait(), Timer::at(deadline)).await {
                Either::First(command) => command,
                Either::Second(()) => {
                    pending = None;
                    if !CONTROLLER.on_timer(handle, &mut MatrixGlyph) {
                        rprintln!("alarm {} already superseded", handle.id());
                    }
                    continue;
                }
            },
        };
        pending = match command {
            AlarmCommand::Arm { handle, deadline } => Some((handle, deadline)),
            AlarmCommand::Cancel(handle) => pending.filter(|(p, _)| *p != handle),
        };
    }
}
