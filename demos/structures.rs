//! Enumerate the endofunction structures on a few nodes and check the counts

use endostruct::prelude::*;
use endostruct::structures::imagepath_distribution;
use num_bigint::BigUint;

fn main() {
    env_logger::init();

    println!("=== Rooted trees ===\n");
    for n in 1..=8 {
        let trees = TreeEnumerator::new(n).unwrap();
        println!("{:>2} nodes: {:>4} trees", n, trees.cardinality());
    }

    let star = TreeEnumerator::new(4).unwrap().iter().last().unwrap();
    println!("\nThe star on 4 nodes:\n{}", star);
    println!("as nested subtrees: {}", RootedTree::from(&star));

    println!("\n=== Endofunction structures on 3 nodes ===\n");
    let mut total = BigUint::default();
    for structure in EndofunctionStructures::new(3).iter() {
        let multiplicity = structure.multiplicity();
        println!(
            "{:<32} multiplicity {:>2}  e.g. {}",
            structure.to_string(),
            multiplicity,
            structure.to_func()
        );
        total += multiplicity;
    }
    println!("total: {} = 3^3", total);

    println!("\n=== Structure counts ===\n");
    for n in 1..=7 {
        let config = EnumerationConfig::new().with_progress_interval(100);
        let count = EndofunctionStructures::with_config(n, &config).iter().count();
        println!("{:>2} nodes: {:>4} structures", n, count);
    }

    println!("\n=== Image sizes of iterates on 4 nodes ===\n");
    match imagepath_distribution(4) {
        Ok(distribution) => println!("{}", distribution),
        Err(e) => eprintln!("error: {}", e),
    }
}
