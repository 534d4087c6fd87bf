use clap::Parser;
use itertools::Itertools;
use traffic_paths::{
    graphs::graph_functions::{delhi_network, route_distance},
    utility::get_progressspinner,
};

/// Lists every simple route between two locations of the built-in road map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting location
    #[arg(short, long)]
    start: String,
    /// Destination location
    #[arg(short, long)]
    end: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let graph = delhi_network();

    let spinner = get_progressspinner("Enumerating routes");
    let paths = match graph.all_simple_paths(&args.start, &args.end) {
        Ok(paths) => paths,
        Err(err) => {
            spinner.finish_and_clear();
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    spinner.finish_and_clear();

    if paths.is_empty() {
        println!("No alternative routes found.");
        return;
    }

    println!("{} alternative routes:", paths.len());
    for path in &paths {
        let distance = route_distance(&graph, path).expect("enumerated paths follow roads");
        println!("{} ({} units)", path.iter().join(" -> "), distance);
    }
}
