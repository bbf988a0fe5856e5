//! Run the particle field without a window and print per-frame stats.
//! Usage: folio-headless [frames] [particles]

use folio_core::{FieldConfig, Viewport};
use folio_physics::{DrawList, ParticleField};
use folio_sim::{FieldAnimation, FrameOutcome, ManualScheduler};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 42;

fn arg_or(index: usize, default: usize) -> usize {
    std::env::args()
        .nth(index)
        .and_then(|a| a.parse().ok())
        .unwrap_or(default)
}

fn main() {
    let frames = arg_or(1, 600);
    let count = arg_or(2, folio_core::DEFAULT_PARTICLE_COUNT);
    let viewport = Viewport::new(1440, 900);

    eprintln!("Simulating {} particles for {} frames...", count, frames);

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let config = FieldConfig::default();
    let mut anim = FieldAnimation::new(ParticleField::new(config, viewport));
    anim.reinitialize(count, &mut rng);

    let mut surface = DrawList::default();
    let mut scheduler = ManualScheduler::new();
    if !anim.start(Some(&mut surface), &mut scheduler) {
        eprintln!("Animation did not start");
        return;
    }

    let mut total_links = 0u64;
    let mut peak_links = 0usize;
    let mut bounces = 0u64;

    println!("frame,connections,bounces,pairs");
    while scheduler.take() && anim.frames() < frames as u64 {
        let FrameOutcome::Rendered(stats) = anim.on_frame(Some(&mut surface), &mut scheduler)
        else {
            break;
        };
        println!(
            "{},{},{},{}",
            anim.frames(),
            stats.connections,
            stats.bounces,
            stats.pairs_checked
        );
        total_links += stats.connections as u64;
        peak_links = peak_links.max(stats.connections);
        bounces += stats.bounces as u64;

        if anim.frames() % 100 == 0 {
            eprintln!("  frame {}/{}", anim.frames(), frames);
        }
    }
    anim.stop();

    let rendered = anim.frames().max(1);
    eprintln!(
        "Done: {} frames, {:.1} links/frame avg, {} peak, {} bounces, {} frame requests",
        anim.frames(),
        total_links as f64 / rendered as f64,
        peak_links,
        bounces,
        scheduler.total_requests
    );
}
