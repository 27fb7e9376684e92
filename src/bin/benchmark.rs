use log::info;
use sssp_explorer::graph::Graph;
use sssp_explorer::{shortest_paths, GeneratorConfig, GraphGenerator, SelfLoopPolicy};
use std::time::{Duration, Instant};

struct Measurement {
    nodes: usize,
    edges: usize,
    reachable: usize,
    generation: Duration,
    dijkstra: Duration,
}

fn run(generator: &GraphGenerator, size: usize) -> Result<Measurement, sssp_explorer::Error> {
    let start = Instant::now();
    let graph = generator.generate(size)?;
    let generation = start.elapsed();

    let start = Instant::now();
    let result = shortest_paths(&graph, 0)?;
    let dijkstra = start.elapsed();

    let reachable = graph.node_ids().filter(|&n| result.distances.is_reachable(n)).count();
    info!(
        "{} nodes: {} stale queue entries skipped",
        size, result.stats.stale_entries_skipped
    );

    Ok(Measurement {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        reachable,
        generation,
        dijkstra,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = [100, 1_000, 10_000, 100_000, 500_000];

    let generators = [
        ("skip", GraphGenerator::new()),
        (
            "redraw",
            GraphGenerator::with_config(GeneratorConfig {
                self_loop_policy: SelfLoopPolicy::Redraw,
                ..Default::default()
            }),
        ),
    ];

    println!("=====================================================");
    println!("Benchmark: random graph generation + Dijkstra from node 0");
    println!("=====================================================");
    println!(
        "{:<8} | {:<10} | {:<10} | {:<10} | {:<15} | {:<15}",
        "Policy", "Nodes", "Edges", "Reachable", "Generate (ms)", "Dijkstra (ms)"
    );
    println!("-----------------------------------------------------");

    for (label, generator) in &generators {
        for &size in &graph_sizes {
            let m = run(generator, size)?;
            println!(
                "{:<8} | {:<10} | {:<10} | {:<10} | {:<15.3} | {:<15.3}",
                label,
                m.nodes,
                m.edges,
                m.reachable,
                m.generation.as_secs_f64() * 1000.0,
                m.dijkstra.as_secs_f64() * 1000.0
            );
        }
    }

    Ok(())
}
