use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use graphrep::graph::*;
use graphrep::random::RandomConnectedGraph;
use log::{debug, info};
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "graphrep", version, about = "Edge-list and adjacency-list graph conversions.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a random connected digraph, its undirected closure, and their adjacency lists.
    Demo {
        /// The number of vertices.
        #[arg(short = 'n', long, default_value_t = 4)]
        vertices: usize,
        /// The number of edges beyond the spanning path.
        #[arg(short = 'e', long, default_value_t = 0)]
        extra: usize,
        /// Seed for the pseudorandom number generator.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Check edge-list/adjacency-list round-trips on random graphs.
    Roundtrip {
        /// The number of random graphs to check.
        #[arg(short, long, default_value_t = 100)]
        trials: usize,
        /// Vertex counts are drawn from [2, max-vertices).
        #[arg(short = 'm', long, default_value_t = 20)]
        max_vertices: usize,
        /// Seed for the pseudorandom number generator.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Demo {
            vertices,
            extra,
            seed,
        } => demo(vertices, extra, &mut seeded(seed)),
        Command::Roundtrip {
            trials,
            max_vertices,
            seed,
        } => roundtrip(trials, max_vertices, &mut seeded(seed)),
    }
}

fn seeded(seed: Option<u64>) -> SmallRng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("seed: {}", seed);
    SmallRng::seed_from_u64(seed)
}

fn demo(vertices: usize, extra: usize, rng: &mut SmallRng) -> Result<()> {
    let g = RandomConnectedGraph::new(vertices, extra)
        .context("Could not set up the random graph")?
        .generate(rng);
    println!("{:?}", g);
    println!("{:?}", g.to_adjacency_list());

    let u = g.to_undirected()?;
    let lists = u.to_adjacency_list();
    println!("{:?}", u);
    println!("{:?}", lists);
    debug!("undirected adjacency lists:\n{:?}", lists.debug());
    Ok(())
}

fn roundtrip(trials: usize, max_vertices: usize, rng: &mut SmallRng) -> Result<()> {
    ensure!(
        max_vertices > 2,
        "max-vertices must be greater than 2, got {}",
        max_vertices
    );
    for trial in 0..trials {
        let nvertices = rng.gen_range(2..max_vertices);
        let nedges = rng.gen_range(0..=RandomConnectedGraph::max_extra_edges(nvertices));
        debug!(
            "trial {}: {} vertices, {} extra edges",
            trial, nvertices, nedges
        );
        let g = RandomConnectedGraph::new(nvertices, nedges)?.generate(rng);
        check_roundtrip(&g)
            .with_context(|| format!("Directed round-trip failed at trial {}", trial))?;
        let u = g.to_undirected()?;
        check_roundtrip(&u)
            .with_context(|| format!("Undirected round-trip failed at trial {}", trial))?;
    }
    info!("{} round-trips passed", trials);
    Ok(())
}

fn check_roundtrip(g: &EdgeListGraph) -> Result<()> {
    let back = g.to_adjacency_list().to_edge_list();
    ensure!(*g == back, "{:?} came back as {:?}", g, back);
    Ok(())
}
