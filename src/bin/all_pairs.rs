use std::{fs::File, io::BufWriter, path::PathBuf};

use clap::Parser;
use traffic_paths::{graphs::graph_functions::delhi_network, utility::get_progressspinner};

/// Prints the complete shortest distance table of the built-in road map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write the table to this file as JSON instead of printing it
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let graph = delhi_network();

    let spinner = get_progressspinner("Computing distance table");
    let matrix = graph.all_pairs_shortest_paths();
    spinner.finish_and_clear();

    if let Some(out) = args.out {
        let writer = BufWriter::new(File::create(out).unwrap());
        serde_json::to_writer_pretty(writer, &matrix).unwrap();
        return;
    }

    for from in matrix.nodes() {
        for to in matrix.nodes() {
            let distance = matrix.get(from, to).unwrap();
            if distance.is_finite() {
                println!("{} -> {}: {}", from, to, distance);
            } else {
                println!("{} -> {}: unreachable", from, to);
            }
        }
    }
}
