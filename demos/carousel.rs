use argh::FromArgs;
use leafscan::{CarouselError, DEFAULT_ROTATE_INTERVAL, FactCarousel, run_rotation};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

mod terminal;

const FACTS: [&str; 4] = [
    "Bamboo can grow up to 91 cm in a single day.",
    "Some 80% of all food on Earth comes from plants.",
    "The oldest known living tree is over 4,800 years old.",
    "Sunflowers track the sun while they are young.",
];

#[derive(FromArgs)]
/// Rotates through a few plant facts in the terminal
struct CarouselArgs {
    /// seconds between two facts
    #[argh(option, short = 'i')]
    interval: Option<u64>,

    /// number of rotations before exiting
    #[argh(option, short = 'n', default = "8")]
    rotations: u32,

    /// fact to start from
    #[argh(option, short = 's')]
    start: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: CarouselArgs = argh::from_env();

    let period = args
        .interval
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_ROTATE_INTERVAL);
    if period.is_zero() {
        return Err(CarouselError::ZeroInterval.into());
    }

    let mut carousel = FactCarousel::new(FACTS.to_vec())?;
    if let Some(start) = &args.start {
        carousel.select_indicator(start)?;
    }

    let carousel = Arc::new(Mutex::new(carousel));
    let rotation = tokio::spawn(run_rotation(
        carousel.clone(),
        period,
        terminal::TerminalDisplay::new(false),
    ));

    tokio::time::sleep(period * args.rotations).await;

    drop(carousel);
    rotation.await??;

    Ok(())
}
