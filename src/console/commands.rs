//! graph command set for the interactive console

use crate::console::Console;
use crate::graph::{compare, render, traverse, DualGraph, Generator, Variant};

/// Shell-side state behind the graph commands: the current graph and the
/// generator session whose counter disambiguates zero-seed creations.
pub struct GraphSession {
    graph: Option<DualGraph>,
    generator: Generator,
}

impl GraphSession {
    pub fn new() -> GraphSession {
        GraphSession {
            graph: None,
            generator: Generator::new(),
        }
    }

    pub fn graph(&self) -> Option<&DualGraph> {
        self.graph.as_ref()
    }
}

impl Default for GraphSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers the graph commands on a console.
pub fn register(console: &mut Console<GraphSession>) {
    console.register_command(
        "create",
        "Create a new graph system",
        &["vertices", "edge_probability", "loop_probability"],
        "create <n> <edgeProb> <loopProb>",
        cmd_create,
    );
    console.register_command("print", "Print current graph system", &[], "print", cmd_print);
    console.register_command(
        "cleanup",
        "Cleanup graph system and free memory",
        &[],
        "cleanup",
        cmd_cleanup,
    );
    console.register_command(
        "traversal",
        "Traverse graph",
        &["start vertex", "--representation (m || l)", "--method (bfs || dfs)"],
        "traversal <vertex> [--m|--l] [--bfs|--dfs]",
        cmd_traversal,
    );
    console.register_command(
        "compare",
        "Compare methods of traversal",
        &["start_vertex"],
        "compare [start_vertex]",
        cmd_compare,
    );
    console.register_command("smile", "SMILE!!!!!", &[], "smile", cmd_smile);
}

fn cmd_create(session: &mut GraphSession, args: &[String]) {
    let order = match args.first() {
        None => 5,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid number of vertices.");
                return;
            }
        },
    };
    let Some(edge_prob) = parse_probability(args.get(1), 0.5) else {
        println!("Probabilities must be between 0 and 1");
        return;
    };
    let Some(loop_prob) = parse_probability(args.get(2), 0.3) else {
        println!("Probabilities must be between 0 and 1");
        return;
    };

    if order == 0 {
        println!("Invalid number of vertices.");
        return;
    }
    if !(edge_prob > 0.0 && edge_prob <= 1.0) || !(loop_prob > 0.0 && loop_prob <= 1.0) {
        println!("Probabilities must be between 0 and 1");
        return;
    }

    match session.generator.generate(order, edge_prob, loop_prob, 0) {
        Ok(graph) => {
            println!(
                "Created graph with {} vertices ({} edges, {} self-loops)",
                order,
                graph.edge_count(),
                graph.loop_count()
            );
            println!(
                "  Edge probability: {}, Loop probability: {}",
                edge_prob, loop_prob
            );
            session.graph = Some(graph);
        }
        Err(err) => {
            println!("Error creating graph: {}", err);
            println!("Usage: create <vertices> <edge_probability> <loop_probability>");
        }
    }
}

fn cmd_print(session: &mut GraphSession, _args: &[String]) {
    let Some(graph) = session.graph() else {
        println!("No graph created. Use 'create' command first.");
        return;
    };

    println!("=== GRAPH ===");
    print!("{}", render::render_matrix(&graph.matrix_rows(), "Adjacency Matrix"));
    print!("{}", render::render_adjacency_list(graph.lists(), "Adjacency List"));
}

fn cmd_cleanup(session: &mut GraphSession, _args: &[String]) {
    session.graph = None;
    println!("Graph system cleaned up");
}

fn cmd_traversal(session: &mut GraphSession, args: &[String]) {
    let Some(graph) = session.graph() else {
        println!("No graph created. Use 'create' command first.");
        return;
    };

    let vertex = match args.first() {
        None => 0,
        Some(raw) => match raw.parse::<usize>() {
            Ok(v) => v,
            Err(_) => {
                println!("Invalid start vertex.");
                return;
            }
        },
    };
    let representation = args.get(1).map(String::as_str).unwrap_or("--m");
    let method = args.get(2).map(String::as_str).unwrap_or("--bfs");

    if vertex >= graph.order() {
        println!("Invalid start vertex.");
        return;
    }
    if representation != "--m" && representation != "--l" {
        println!("Invalid representation.");
        return;
    }
    if method != "--bfs" && method != "--dfs" {
        println!("Invalid method.");
        return;
    }

    let variant = match (representation, method) {
        ("--m", "--bfs") => Variant::BfsMatrix,
        ("--m", _) => Variant::DfsMatrix,
        (_, "--bfs") => Variant::BfsList,
        _ => Variant::DfsList,
    };

    match traverse(graph, vertex, variant) {
        Ok(result) => print!("{}", render::render_traversal(&result)),
        Err(err) => println!("Error running traversal: {}", err),
    }
}

fn cmd_compare(session: &mut GraphSession, args: &[String]) {
    let Some(graph) = session.graph() else {
        println!("No graph created. Use 'create' command first.");
        return;
    };

    if args.is_empty() {
        for report in compare(graph) {
            print!("{}", render::render_report(&report));
            println!();
        }
        return;
    }

    let vertex = match args[0].parse::<usize>() {
        Ok(v) if v < graph.order() => v,
        _ => {
            println!("Invalid start vertex.");
            return;
        }
    };

    // single-source mode: timings only, one block per variant
    let single_source_order = [
        Variant::BfsMatrix,
        Variant::DfsMatrix,
        Variant::BfsList,
        Variant::DfsList,
    ];
    for variant in single_source_order {
        match traverse(graph, vertex, variant) {
            Ok(result) => {
                println!("=== {} ===", variant.label());
                println!(
                    "Time: {} us, or {} s",
                    result.elapsed_micros(),
                    result.elapsed.as_secs_f64()
                );
                println!();
            }
            Err(err) => println!("Error running traversal: {}", err),
        }
    }
}

fn cmd_smile(_session: &mut GraphSession, _args: &[String]) {
    println!(
        r#"
     /\     /\
    {{  `---'  }}
    {{  O   O  }}
    ~~>  V  <~~
     \  \|/  /
      `-----'__
      /     \  `^\_
     {{       }}\ |\_\_   W
     |  \_/  |/ /  \_\_( )
      \__/  /(_E     \__/
        (  /
         MM"#
    );
}

fn parse_probability(arg: Option<&String>, default: f64) -> Option<f64> {
    match arg {
        None => Some(default),
        Some(raw) => raw.parse::<f64>().ok(),
    }
}
