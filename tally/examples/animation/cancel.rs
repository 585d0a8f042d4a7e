use tally::animations::{AnimationRequest, Animator, Easing};
use tally::pause;

#[tally::runtime]
async fn main() {
    let animator = Animator::default();

    let request = AnimationRequest::new(0.0, 100.0, 2000)
        .unwrap()
        .set_easing(Easing::SineInOut)
        .on_frame(|value| println!("{:.1}", value))
        .on_complete(|| println!("never printed"));
    let handle = animator.run(request).unwrap();

    // Cancel half way: no more frames.
    pause!(1000);
    handle.cancel();
    println!("animation {}", handle.get_status());
}
