use mazegraph::{config::MazeConfig, generators::Generator, logging, maze::Maze};

fn main() -> std::io::Result<()> {
    let _guard = logging::init("mazegraph.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name

    // Let user select the algorithm
    let generator = match args.next().as_deref() {
        None | Some("1") => Generator::RecurBacktrack,
        Some("2") => Generator::HuntAndKill,
        Some("3") => Generator::Wilson,
        Some("4") => Generator::Kruskal,
        Some("5") => Generator::Prim,
        Some(other) => {
            eprintln!("Invalid generator '{}'. Choose one of:", other);
            for (i, generator) in Generator::ALL.iter().enumerate() {
                eprintln!("{}. {}", i + 1, generator);
            }
            return Ok(());
        }
    };

    let config = MazeConfig::default();
    let cell_size = match args.next() {
        None => config.cell_size,
        Some(s) => match s.parse::<u32>() {
            Ok(size) => size,
            Err(_) => {
                eprintln!("Cell size must be a positive number, got '{}'.", s);
                return Ok(());
            }
        },
    };
    let seed = match args.next() {
        None => None,
        Some(s) => match s.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                eprintln!("Seed must be a number, got '{}'.", s);
                return Ok(());
            }
        },
    };

    let mut maze = Maze::new(config, seed);
    if !maze.set_cell_size(cell_size) {
        eprintln!(
            "Cell size {} must divide {}x{} and lie within [{}, {}].",
            cell_size,
            config.outer_width,
            config.outer_height,
            config.min_cell_size,
            config.max_cell_size
        );
        return Ok(());
    }

    maze.generate(generator);
    let found = maze.find_longest_path();

    println!("{}", maze);
    println!("{} ({}x{} cells)", generator, maze.width(), maze.height());
    match (found, maze.start(), maze.end()) {
        (true, Some(start), Some(end)) => println!(
            "Longest path: {} -> {}, {} steps",
            start,
            end,
            maze.traversal().distance(end)
        ),
        _ => println!("No path found."),
    }
    Ok(())
}
