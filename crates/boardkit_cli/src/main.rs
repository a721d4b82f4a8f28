//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `boardkit_core` linkage.
//! - Run one end-to-end move against an in-memory store and print the
//!   resulting snapshot for quick local sanity checks.

use boardkit_core::{BoardService, MemoryStore};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("boardkit_core ping={}", boardkit_core::ping());
    println!("boardkit_core version={}", boardkit_core::core_version());

    let mut service = BoardService::new(MemoryStore::new());
    service.load()?;

    let todo = service.create_board();
    service.rename_board(todo, "Todo")?;
    let doing = service.create_board();
    service.rename_board(doing, "Doing")?;

    let first = service.add_item(todo, "wire up the demo")?;
    service.add_item(todo, "write the docs")?;

    // Drop the first item onto the second board.
    service.drag_end(first, Some(doing));

    println!("{}", serde_json::to_string_pretty(service.boards())?);
    Ok(())
}
