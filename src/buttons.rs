//! Button edge watchers. Each button gets its own future waiting on a GPIOTE
//! falling edge; all of them feed the one shared controller.
use crate::*;

type Pin = Input<'static, AnyPin>;

/// Monotonic clock backed by the Embassy time driver.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

async fn watch(mut pin: Pin, button: Button) -> ! {
    loop {
        pin.wait_for_falling_edge().await;
        let outcome = CONTROLLER.press(button, &SystemClock, &mut MatrixGlyph, &mut SharedLevels);
        if outcome != Outcome::Suppressed {
            rprintln!("{:?}: {:?}", button, outcome);
        }
    }
}

pub async fn run(a: Pin, b: Pin, aux: Pin) -> ! {
    join::join3(watch(a, Button::A), watch(b, Button::B), watch(aux, Button::Aux)).await;
    panic!("button watchers returned");
}
