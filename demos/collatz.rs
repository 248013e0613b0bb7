use std::{env, io};

use vertex_walk::{
    algo::{leaves, max, print_values, IncreasingPath},
    storage::{implicit::ImplicitId, Implicit},
};

// https://stackoverflow.com/questions/58870416/can-you-explain-implicit-graphsin-graph-theory-with-a-simple-example/58887179#58887179
fn collatz(&n: &u64) -> Option<u64> {
    match n {
        0 | 1 => None,
        n if n % 2 == 0 => Some(n / 2),
        n => n.checked_mul(3).and_then(|m| m.checked_add(1)),
    }
}

fn main() -> io::Result<()> {
    let n = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(27);

    let graph = Implicit::new(collatz);
    let start = ImplicitId::from(n);

    println!("Collatz sequence of {n}:");
    print_values(&graph, Some(&start))?;

    let peak = max(&graph, Some(&start));
    println!("Highest number: {peak}");

    let ends = leaves(&graph, Some(&start))
        .into_iter()
        .filter_map(ImplicitId::into_inner)
        .collect::<Vec<_>>();
    println!("Ends in: {ends:?}");

    let climb = IncreasingPath::on(&graph)
        .from(&start)
        .to(&ImplicitId::from(peak))
        .run()
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    match climb.into_path() {
        Some(path) => {
            let path = path
                .into_iter()
                .filter_map(ImplicitId::into_inner)
                .collect::<Vec<_>>();
            println!("Climbs straight to the peak: {path:?}");
        }
        None => println!("Does not climb straight to the peak"),
    }

    Ok(())
}
