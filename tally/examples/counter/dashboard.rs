use tally::animations::{Animator, Easing};
use tally::counters::{Counter, NumberFormat};

#[tally::runtime]
async fn main() {
    let animator = Animator::default().set_fps(30).unwrap();

    let counters = [
        ("followers", Counter::new(1_234_567.0).set_format(NumberFormat::Grouped)),
        ("streams", Counter::new(45_200_000.0).set_format(NumberFormat::Compact)),
        (
            "popularity",
            Counter::new(78.0)
                .set_easing(Easing::Linear)
                .set_duration(2000)
                .unwrap(),
        ),
    ];

    // Stagger the counters by 100ms each: all run concurrently.
    for (index, (name, counter)) in counters.into_iter().enumerate() {
        counter
            .set_delay(index as u64 * 100)
            .play(&animator, move |text| println!("{:>10}: {}", name, text))
            .unwrap();
    }
}
