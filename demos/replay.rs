//! Replays a fixed put/get sequence against each eviction policy, printing
//! `DISCARD:` notices and the cache contents along the way.
//!
//! ```text
//! cargo run --example replay            # all policies
//! cargo run --example replay -- mru     # one policy
//! RUST_LOG=boundcache=debug cargo run --example replay
//! ```

use std::io;

use boundcache::basic::BasicCache;
use boundcache::builder::{CacheBuilder, PolicyKind};
use boundcache::cache::DEFAULT_CAPACITY;
use boundcache::listener::DiscardPrinter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

enum Step {
    Put(&'static str, &'static str),
    Get(&'static str),
    Print,
}

const SEQUENCE: &[Step] = &[
    Step::Put("A", "Hello"),
    Step::Put("B", "World"),
    Step::Put("C", "Holberton"),
    Step::Put("D", "School"),
    Step::Print,
    Step::Get("B"),
    Step::Put("E", "Battery"),
    Step::Print,
    Step::Put("C", "Street"),
    Step::Get("A"),
    Step::Get("B"),
    Step::Get("C"),
    Step::Print,
    Step::Put("F", "Mission"),
    Step::Print,
    Step::Put("G", "San Francisco"),
    Step::Print,
    Step::Put("H", "H"),
    Step::Print,
];

fn replay(kind: PolicyKind) -> io::Result<()> {
    println!("--- {kind} (capacity {DEFAULT_CAPACITY}) ---");
    let mut cache = CacheBuilder::new(DEFAULT_CAPACITY)
        .policy(kind)
        .build_with_listener(DiscardPrinter::stdout());

    for step in SEQUENCE {
        match *step {
            Step::Put(key, value) => {
                cache.put(key, value);
            },
            Step::Get(key) => {
                let value = cache.get(&key);
                println!("get({key}) -> {}", value.copied().unwrap_or("None"));
            },
            Step::Print => cache.print_cache()?,
        }
    }
    Ok(())
}

fn replay_unbounded() -> io::Result<()> {
    println!("--- basic (unbounded) ---");
    let mut cache = BasicCache::new();
    cache.put_opt(None, Some("ignored"));
    for step in SEQUENCE {
        match *step {
            Step::Put(key, value) => {
                cache.put(key, value);
            },
            Step::Get(_) => {},
            Step::Print => {},
        }
    }
    cache.print_cache()
}

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boundcache=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let selected: Vec<PolicyKind> = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(kind) => vec![kind],
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            },
        },
        None => PolicyKind::ALL.to_vec(),
    };

    for kind in selected {
        replay(kind)?;
    }
    replay_unbounded()
}
