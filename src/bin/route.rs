use clap::Parser;
use itertools::Itertools;
use traffic_paths::{
    graphs::graph_functions::delhi_network,
    traffic::{estimate_travel_time, TrafficCondition},
};

/// Finds the fastest route between two locations of the built-in road map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting location
    #[arg(short, long)]
    start: String,
    /// Destination location
    #[arg(short, long)]
    end: String,
    /// Vehicle speed in distance units per hour
    #[arg(long, default_value_t = 40.0)]
    speed: f64,
    /// Traffic condition applied to the estimated travel time
    #[arg(long, value_enum, default_value = "normal")]
    condition: TrafficCondition,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let graph = delhi_network();
    match graph.shortest_path(&args.start, &args.end) {
        Ok(Some(route)) => {
            println!("Route: {}", route.nodes.iter().join(" -> "));
            println!("Total distance: {} units", route.distance);
            match estimate_travel_time(route.distance, args.speed, args.condition) {
                Ok(estimate) => println!("Estimated time: {:.2} hours", estimate.hours),
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
            }
        }
        Ok(None) => println!("No route found."),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
