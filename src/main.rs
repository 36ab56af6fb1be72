#![no_std]
#![no_main]

mod alarm;
mod buttons;
mod joystick;
mod matrix;
mod rgb;
mod screen;
mod ui;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use embassy_executor::Spawner;
use embassy_futures::join;
use embassy_time::{Duration, Instant, Timer};
use mb2_embassy_joystick::*;
use microbit_bsp::{
    display::Frame,
    embassy_nrf::{
        bind_interrupts,
        gpio::{AnyPin, Input, Level, Output, OutputDrive, Pull},
        peripherals, pwm, saadc, twim,
    },
    LedMatrix, Microbit,
};

use alarm::AlarmScheduler;
use joystick::Joystick;
use matrix::{Matrix, MatrixGlyph};
use rgb::{Rgb, SharedLevels};
use screen::Screen;
use ui::Ui;

/// Feedback state shared by the button, alarm and main loop tasks.
static CONTROLLER: Shared<AlarmScheduler> =
    Shared::new(FeedbackController::new(AlarmScheduler, &Config::DEFAULT));

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_init_print!();
    let board = Microbit::default();

    bind_interrupts!(struct Irqs {
        SAADC => saadc::InterruptHandler;
        SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    });

    let config = Config::DEFAULT;

    let led_pin = |p| Output::new(p, Level::Low, OutputDrive::Standard);
    let red = led_pin(AnyPin::from(board.p9));
    let green = led_pin(AnyPin::from(board.p8));
    let blue = led_pin(AnyPin::from(board.p16));
    let buzzer = pwm::SimplePwm::new_1ch(board.pwm0, board.speaker);
    let rgb = Rgb::new([red, green, blue], buzzer, 100);

    let mut saadc_config = saadc::Config::default();
    saadc_config.resolution = saadc::Resolution::_12BIT;
    let saadc = saadc::Saadc::new(
        board.saadc,
        Irqs,
        saadc_config,
        [
            saadc::ChannelConfig::single_ended(board.p2),
            saadc::ChannelConfig::single_ended(board.p1),
        ],
    );
    let joystick = Joystick::new(saadc).await;

    let mut twim_config = twim::Config::default();
    twim_config.frequency = twim::Frequency::K400;
    let bus = twim::Twim::new(board.twispi0, Irqs, board.p20, board.p19, twim_config);
    let screen = Screen::new(bus);

    let aux = Input::new(AnyPin::from(board.p12), Pull::Up);

    CONTROLLER.lock(|controller| controller.start(&mut MatrixGlyph));
    let matrix = Matrix::new(board.display);
    let mut ui = Ui::new(joystick, screen, config);

    rprintln!("joystick feedback ready");
    join::join5(
        rgb.run(),
        ui.run(),
        matrix.run(),
        alarm::run(),
        buttons::run(board.btn_a, board.btn_b, aux),
    )
    .await;

    panic!("fell off end of main loop");
}
