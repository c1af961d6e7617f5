//! Example: 0/1 knapsack replayed through the player with a test clock.
//!
//! Run with:
//! `cargo run --example knapsack`

use std::time::Duration;

use stepviz::playback::ScheduledStep;
use stepviz::{problems::knapsack::KnapsackProblem, PlayerBuilder, TraceEngine};

fn main() {
    let problem =
        KnapsackProblem::new(vec![1, 3, 4, 5], vec![1, 4, 5, 7], 7).expect("equal lengths");
    let solution = TraceEngine::new(problem).run();

    let mut player = PlayerBuilder::new().with_speed_ms(250).build();
    player.start(solution.trace).expect("player is idle");

    // Advance a simulated clock one second at a time instead of sleeping.
    let mut elapsed = Duration::ZERO;
    while !player.is_idle() {
        let fired = player.tick(elapsed, &mut |s: ScheduledStep<'_>| {
            println!("{:>5} ms  {}", s.offset.as_millis(), s.step);
        });
        println!("-- t = {} ms, {fired} steps", elapsed.as_millis());
        elapsed += Duration::from_secs(1);
    }

    println!("Best value: {}", solution.answer);
}
