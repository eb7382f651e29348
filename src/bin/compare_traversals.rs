use clap::{Arg, ArgAction, ArgMatches, Command};
use std::time::Instant;

use graphbench::graph::render::{
    render_adjacency_list, render_matrix, render_report, render_traversal,
};
use graphbench::graph::{compare, traverse, Generator, Variant};

fn main() {
    let matches = Command::new("compare_traversals")
        .about("Generate a random graph and time BFS/DFS over both representations")
        .arg(
            Arg::new("vertices")
                .long("vertices")
                .short('n')
                .value_name("N")
                .default_value("5")
                .help("Number of vertices"),
        )
        .arg(
            Arg::new("edge-prob")
                .long("edge-prob")
                .value_name("P")
                .default_value("0.5")
                .help("Edge probability in (0, 1]"),
        )
        .arg(
            Arg::new("loop-prob")
                .long("loop-prob")
                .value_name("P")
                .default_value("0.3")
                .help("Self-loop probability in (0, 1]"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .default_value("0")
                .help("PRNG seed; 0 derives a fresh one"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .value_name("VERTEX")
                .help("Run one traversal from this vertex instead of the full comparison"),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .value_name("bfs|dfs")
                .default_value("bfs")
                .help("Traversal method, used with --source"),
        )
        .arg(
            Arg::new("representation")
                .long("representation")
                .value_name("matrix|list")
                .default_value("matrix")
                .help("Neighbor source, used with --source"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Show a progress bar while generating"),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .action(ArgAction::SetTrue)
                .help("Print the generated graph before traversing"),
        )
        .get_matches();

    let vertices: usize = parse_or_exit(&matches, "vertices");
    let edge_prob: f64 = parse_or_exit(&matches, "edge-prob");
    let loop_prob: f64 = parse_or_exit(&matches, "loop-prob");
    let seed: u32 = parse_or_exit(&matches, "seed");

    let mut generator = Generator::new();
    let start = Instant::now();
    let generated = if matches.get_flag("progress") {
        generator.generate_with_progress(vertices, edge_prob, loop_prob, seed)
    } else {
        generator.generate(vertices, edge_prob, loop_prob, seed)
    };
    let graph = match generated {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();
    println!(
        "generated {} vertices, {} edges ({} self-loops) in {}.{:03} seconds",
        graph.order(),
        graph.edge_count(),
        graph.loop_count(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    if matches.get_flag("print") {
        print!("{}", render_matrix(&graph.matrix_rows(), "Adjacency Matrix"));
        print!("{}", render_adjacency_list(graph.lists(), "Adjacency List"));
    }

    match matches.get_one::<String>("source") {
        Some(raw) => {
            let source: usize = raw.parse().unwrap_or_else(|_| {
                eprintln!("invalid value for --source: {}", raw);
                std::process::exit(1);
            });
            let method = matches.get_one::<String>("method").unwrap();
            let representation = matches.get_one::<String>("representation").unwrap();
            let variant = match (representation.as_str(), method.as_str()) {
                ("matrix", "bfs") => Variant::BfsMatrix,
                ("matrix", "dfs") => Variant::DfsMatrix,
                ("list", "bfs") => Variant::BfsList,
                ("list", "dfs") => Variant::DfsList,
                _ => {
                    eprintln!("--representation takes matrix|list, --method takes bfs|dfs");
                    std::process::exit(1);
                }
            };
            match traverse(&graph, source, variant) {
                Ok(result) => print!("{}", render_traversal(&result)),
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
            }
        }
        None => {
            for report in compare(&graph) {
                print!("{}", render_report(&report));
                println!();
            }
        }
    }
}

fn parse_or_exit<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> T {
    let raw = matches.get_one::<String>(name).unwrap();
    raw.parse().unwrap_or_else(|_| {
        eprintln!("invalid value for --{}: {}", name, raw);
        std::process::exit(1);
    })
}
