use clap::Parser;

use overworld_generator::{ascii, generate_random_seed, stats, BiomeRatios, MapGenerator};

#[derive(Parser, Debug)]
#[command(name = "overworld_generator")]
#[command(about = "Generate deterministic overworld biome maps")]
struct Args {
    /// Side length of the square map in cells
    #[arg(short = 'n', long, default_value = "50")]
    size: usize,

    /// Random seed (uses a fresh random seed if not specified)
    #[arg(short, long)]
    seed: Option<i64>,

    /// Target ocean coverage in percent
    #[arg(long, default_value = "30")]
    ocean: f64,

    /// Target desert coverage in percent
    #[arg(long, default_value = "20")]
    desert: f64,

    /// Target village coverage in percent
    #[arg(long, default_value = "5")]
    village: f64,

    /// Print an ASCII preview of the generated map
    #[arg(long)]
    preview: bool,

    /// Print the biome breakdown as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let seed = args
        .seed
        .unwrap_or_else(|| generate_random_seed().parse().unwrap_or(1));

    println!("Generating overworld with seed: {seed}");
    println!("Map size: {}x{}", args.size, args.size);

    let ratios = BiomeRatios::new(args.ocean, args.desert, args.village);
    let generator = match MapGenerator::new(seed, args.size, ratios) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let grid = generator.generate();
    let breakdown = stats::biome_percentages(&grid);

    if args.preview {
        print!("{}", ascii::render_grid(&grid));
    }

    if args.json {
        match serde_json::to_string_pretty(&breakdown) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("error: {err}"),
        }
    } else {
        println!("Biome coverage:");
        for (biome, pct) in &breakdown {
            println!("  {:<8} {:>5}%", biome.display_name(), pct);
        }
    }
}
