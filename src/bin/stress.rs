use std::time::Instant;

use mazegraph::{config::MazeConfig, generators::Generator, logging, maze::Maze, rng::RandomSource};

/// Generate `iterations` mazes with `generator`, checking each one.
/// Returns the number of mazes that were not spanning trees.
fn stress(maze: &mut Maze, generator: Generator, iterations: usize) -> usize {
    let mut failures = 0;
    for i in 0..iterations {
        maze.generate(generator);
        if !maze.is_perfect() {
            tracing::error!("[stress] {} produced a broken maze on run {}", generator, i);
            failures += 1;
        }
    }
    failures
}

fn main() -> std::io::Result<()> {
    let _guard = logging::init("mazegraph-stress.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let iterations = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(5_000);
    let parallel = match args.next().as_deref() {
        None | Some("parallel") => true,
        Some("sequential") => false,
        Some(other) => {
            eprintln!("Mode must be 'parallel' or 'sequential', got '{}'.", other);
            return Ok(());
        }
    };

    let config = MazeConfig::default();
    let mut seeds = RandomSource::new(None);
    let timer = Instant::now();
    tracing::info!(
        "[stress] {} runs per generator, {}",
        iterations,
        if parallel { "parallel" } else { "sequential" }
    );

    let results: Vec<(Generator, usize)> = if parallel {
        // One independent maze per thread, nothing shared
        let seeded = Generator::ALL.map(|generator| (generator, seeds.next_seed()));
        std::thread::scope(|scope| {
            let handles = seeded
                .into_iter()
                .map(|(generator, seed)| {
                    scope.spawn(move || {
                        let mut maze = Maze::new(config, Some(seed));
                        (generator, stress(&mut maze, generator, iterations))
                    })
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .filter_map(|handle| handle.join().ok())
                .collect()
        })
    } else {
        let mut maze = Maze::new(config, Some(seeds.next_seed()));
        Generator::ALL
            .into_iter()
            .map(|generator| (generator, stress(&mut maze, generator, iterations)))
            .collect()
    };

    for (generator, failures) in &results {
        println!("{:<32} {} / {} broken", generator.to_string(), failures, iterations);
    }
    if results.len() != Generator::ALL.len() {
        println!("{} worker(s) panicked", Generator::ALL.len() - results.len());
    }
    println!("Finished in {:.2?}", timer.elapsed());
    tracing::info!("[stress] finished in {:.2?}", timer.elapsed());
    Ok(())
}
