use tally::animations::Animator;
use tally::counters::{Counter, NumberFormat};

#[tally::runtime]
async fn main() {
    let animator = Animator::default();

    // Rolls a prediction score to 87.35 in 1.5s (QuadOut).
    Counter::new(87.35)
        .set_format(NumberFormat::Fixed { decimals: 2 })
        .play(&animator, |text| println!("score: {}", text))
        .unwrap();
}
