//! Builds a small tree of integers and prints its traversals and some insert/remove churn.

use anyhow::Result;
use avltree::{AvlTree, Traversal};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Exercise an AVL tree on a small integer dataset
#[derive(Parser, Debug)]
#[command(name = "avl-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Keys to insert, each mapped to itself
    #[arg(value_name = "KEY", default_values_t = [6, 2, 8, 1, 4, 3])]
    keys: Vec<i64>,

    /// Trace every rotation
    #[arg(short, long)]
    verbose: bool,
}

fn print_traversal(tree: &AvlTree<i64, i64>, name: &str, order: Traversal) {
    println!("\n{}", name);
    tree.traverse(order, |key, value| println!("{} => {}", key, value));
}

fn print_search(tree: &AvlTree<i64, i64>, key: i64) {
    match tree.get(&key) {
        Some(value) => println!("search({}) = {}", key, value),
        None => println!("search({}) = not found", key),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::TRACE } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut tree = AvlTree::new();
    for &key in &cli.keys {
        tracing::debug!(key, "inserting");
        tree.insert(key, key);
    }

    print_traversal(&tree, "In-Order", Traversal::InOrder);
    print_traversal(&tree, "Pre-Order", Traversal::PreOrder);
    print_traversal(&tree, "Post-Order", Traversal::PostOrder);
    print_traversal(&tree, "Breadth-First", Traversal::LevelOrder);

    println!("\nHeight: {}", tree.height());
    println!("Balanced: {}", tree.is_balanced());
    match (tree.min(), tree.max()) {
        (Some(min), Some(max)) => println!("Min: {} => {}, Max: {} => {}", min.0, min.1, max.0, max.1),
        _ => println!("Min/Max: empty tree"),
    }

    println!();
    tree.insert(0, 0);
    print_search(&tree, 0);
    tree.remove(&0);
    print_search(&tree, 0);
    tree.insert(0, 0);
    print_search(&tree, 0);

    if let Some(&first) = cli.keys.first() {
        tree.remove(&first);
        print_search(&tree, first);
        print_traversal(&tree, "In-Order", Traversal::InOrder);
    }

    tracing::info!(len = tree.len(), height = tree.height(), "done");
    Ok(())
}
