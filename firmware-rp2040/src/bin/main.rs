#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::Timer;
use ir_remote_rp2040::{LogicalCode, NecIrDecoder, RemoteControl};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("ir-remote starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // Active-low IR receiver module on GPIO 15, idle high.
    let ir_pin = Input::new(p.PIN_15, Pull::Up);
    let mut remote = RemoteControl::with_debug(NecIrDecoder::new(ir_pin), true);

    info!("ir-remote ready, point a remote at the receiver");

    loop {
        match remote.code(false) {
            LogicalCode::Up => info!("Forward"),
            LogicalCode::Down => info!("Backwards"),
            LogicalCode::Left => info!("Left"),
            LogicalCode::Right => info!("Right"),
            LogicalCode::Unknown => {}
            code => info!("code {}", code.raw()),
        }
        Timer::after_millis(100).await;
    }
}
