use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::env;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{info, warn};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use pairing_heap::{MinPriorityQueue, Result, SimplePairingHeap};

type Weight = OrderedFloat<f64>;
type Adjacency = Vec<Vec<(usize, Weight)>>;

const WORKLOAD_SIZE: i64 = 1_000;
const WORKLOAD_ROUNDS: usize = 200;

// Positional argument `position`, or `default` when absent or unparsable
fn arg_or<T: FromStr + Copy + std::fmt::Display>(position: usize, default: T) -> T {
    match env::args().nth(position) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid argument {:?}, using {}", raw, default);
            default
        }),
    }
}

// Random directed graph with about edge_factor * n edges and no self-loops
fn generate_random_graph(num_vertices: usize, edge_factor: f64, rng: &mut StdRng) -> Adjacency {
    let mut graph = vec![Vec::new(); num_vertices];
    let num_edges = (edge_factor * num_vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        if u != v {
            graph[u].push((v, OrderedFloat(rng.gen_range(1.0..100.0))));
        }
    }

    graph
}

fn dijkstra_pairing(graph: &Adjacency, source: usize) -> Result<Vec<Option<Weight>>> {
    let mut distances: Vec<Option<Weight>> = vec![None; graph.len()];
    let mut settled = vec![false; graph.len()];
    let mut queue = MinPriorityQueue::with_capacity(graph.len());

    distances[source] = Some(OrderedFloat(0.0));
    queue.push(source, OrderedFloat(0.0))?;

    while let Ok((u, dist_u)) = queue.pop_with_priority() {
        settled[u] = true;
        for &(v, weight) in &graph[u] {
            if settled[v] {
                continue;
            }
            let new_dist = dist_u + weight;
            match distances[v] {
                None => {
                    distances[v] = Some(new_dist);
                    queue.push(v, new_dist)?;
                }
                Some(current_dist) if new_dist < current_dist => {
                    distances[v] = Some(new_dist);
                    queue.decrease_key(&v, new_dist)?;
                }
                Some(_) => {}
            }
        }
    }

    Ok(distances)
}

fn dijkstra_binary(graph: &Adjacency, source: usize) -> Vec<Option<Weight>> {
    let mut distances: Vec<Option<Weight>> = vec![None; graph.len()];
    let mut queue = BinaryHeap::new();

    distances[source] = Some(OrderedFloat(0.0));
    queue.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((dist_u, u))) = queue.pop() {
        // Stale entry
        if distances[u].map_or(false, |current_dist| current_dist < dist_u) {
            continue;
        }
        for &(v, weight) in &graph[u] {
            let new_dist = dist_u + weight;
            if distances[v].map_or(true, |current_dist| new_dist < current_dist) {
                distances[v] = Some(new_dist);
                queue.push(Reverse((new_dist, v)));
            }
        }
    }

    distances
}

// Odd elements are pushed, then each one is promoted below its starting priority
fn with_change_priority(odd: &[i64], even: &[i64]) -> Result<i64> {
    let mut queue = MinPriorityQueue::with_capacity(odd.len());
    for &el in odd {
        queue.push_value(el)?;
    }
    for (&el, &even_el) in odd.iter().zip(even) {
        let priority = if even_el < el { even_el } else { -(WORKLOAD_SIZE - el) };
        queue.decrease_key(&el, priority)?;
    }
    let mut checksum = 0;
    while let Ok(priority) = queue.pop_priority() {
        checksum += priority;
    }
    Ok(checksum)
}

// Same priorities as above, but pushed as new entries instead of promotions
fn without_change_priority(odd: &[i64], even: &[i64]) -> i64 {
    let mut heap: SimplePairingHeap<i64, i64> = SimplePairingHeap::new();
    for &el in odd {
        heap.push_value(el);
    }
    for (&el, &even_el) in odd.iter().zip(even) {
        heap.push_value(el);
        heap.push_value(if even_el < el { even_el } else { -(WORKLOAD_SIZE - el) });
    }
    let mut checksum = 0;
    while let Ok(priority) = heap.pop_priority() {
        checksum += priority;
    }
    checksum
}

fn without_change_priority_binary(odd: &[i64], even: &[i64]) -> i64 {
    let mut heap = BinaryHeap::with_capacity(odd.len() * 3);
    for &el in odd {
        heap.push(Reverse(el));
    }
    for (&el, &even_el) in odd.iter().zip(even) {
        heap.push(Reverse(el));
        heap.push(Reverse(if even_el < el { even_el } else { -(WORKLOAD_SIZE - el) }));
    }
    let mut checksum = 0;
    while let Some(Reverse(priority)) = heap.pop() {
        checksum += priority;
    }
    checksum
}

fn time<R>(name: &str, mut run: impl FnMut() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = run();
    let duration = start.elapsed();
    info!("{} finished in {:?}", name, duration);
    (duration, result)
}

fn main() -> Result<()> {
    env_logger::init();

    let num_vertices: usize = arg_or(1, 100_000);
    let edge_factor: f64 = arg_or(2, 4.0);
    let seed: u64 = arg_or(3, 42);
    let mut rng = StdRng::seed_from_u64(seed);

    println!("=====================================================");
    println!("Benchmark: pairing heap vs BinaryHeap");
    println!(
        "{} vertices, {} edges per vertex, seed {}",
        num_vertices, edge_factor, seed
    );
    println!("=====================================================");

    if num_vertices > 0 {
        info!("Generating random graph with {} vertices", num_vertices);
        let graph = generate_random_graph(num_vertices, edge_factor, &mut rng);

        let (pairing_time, pairing) = time("Dijkstra (decrease_key)", || dijkstra_pairing(&graph, 0));
        let pairing = pairing?;
        let (binary_time, binary) = time("Dijkstra (lazy BinaryHeap)", || dijkstra_binary(&graph, 0));

        if pairing != binary {
            warn!("Dijkstra distances differ between the two queues");
        }
        let reachable = pairing.iter().filter(|d| d.is_some()).count();
        println!("\nDijkstra, {} reachable vertices", reachable);
        println!("{:<28} | {:>12}", "Queue", "Time (ms)");
        println!("{:<28} | {:>12.2}", "MinPriorityQueue", pairing_time.as_secs_f64() * 1e3);
        println!("{:<28} | {:>12.2}", "BinaryHeap (lazy)", binary_time.as_secs_f64() * 1e3);
    }

    let mut odd: Vec<i64> = (1..WORKLOAD_SIZE).step_by(2).collect();
    let mut even: Vec<i64> = (0..WORKLOAD_SIZE).step_by(2).collect();
    odd.shuffle(&mut rng);
    even.shuffle(&mut rng);

    let (with_time, with_checksum) = time("with change_priority", || -> Result<i64> {
        let mut checksum = 0;
        for _ in 0..WORKLOAD_ROUNDS {
            checksum += with_change_priority(&odd, &even)?;
        }
        Ok(checksum)
    });
    let with_checksum = with_checksum?;
    let (without_time, without_checksum) = time("without change_priority", || {
        (0..WORKLOAD_ROUNDS).fold(0, |acc, _| acc + without_change_priority(&odd, &even))
    });
    let (binary_time, binary_checksum) = time("without change_priority (BinaryHeap)", || {
        (0..WORKLOAD_ROUNDS).fold(0, |acc, _| acc + without_change_priority_binary(&odd, &even))
    });
    info!(
        "Checksums: {} / {} / {}",
        with_checksum, without_checksum, binary_checksum
    );

    println!("\nPop versus change_priority, {} rounds", WORKLOAD_ROUNDS);
    println!("{:<28} | {:>12}", "Workload", "Time (ms)");
    println!("{:<28} | {:>12.2}", "MinPriorityQueue", with_time.as_secs_f64() * 1e3);
    println!("{:<28} | {:>12.2}", "SimplePairingHeap", without_time.as_secs_f64() * 1e3);
    println!("{:<28} | {:>12.2}", "BinaryHeap", binary_time.as_secs_f64() * 1e3);

    Ok(())
}
