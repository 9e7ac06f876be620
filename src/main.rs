use scroll_state::{logger, snapshot, ScrollGeometry};

use std::env;
use std::process;

fn main() {
    if let Err(err) = logger::init() {
        eprintln!("{}", err);
    }

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: scroll-state <snapshot.toml>");
            process::exit(2);
        }
    };

    let snapshot = match snapshot::load_snapshot_file(&path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(1);
        }
    };

    for record in logger::drain() {
        if record.level <= log::Level::Warn {
            eprintln!("{} {}", record.level, record.message);
        }
    }

    println!("is_bouncing_top    {}", snapshot.is_bouncing_top());
    println!("is_bouncing_bottom {}", snapshot.is_bouncing_bottom());
    println!("is_bouncing        {}", snapshot.is_bouncing());
    println!("is_scrolling_up    {}", snapshot.is_scrolling_up());
    println!("is_scrolling_down  {}", snapshot.is_scrolling_down());
    println!("is_scrolling       {}", snapshot.is_scrolling());
    println!("state              {}", snapshot.state());
}
