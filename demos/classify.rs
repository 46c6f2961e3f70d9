//! Nearest-neighbor classification with a k-d tree.
//!
//! Labels a handful of query colors by the closest named reference color in RGB space.

use kd_index::kdtree::{KDTree, KDTreeIndex};
use kd_index::Result;

fn main() -> Result<()> {
    let reference = [
        ([0., 0., 0.], "black"),
        ([255., 255., 255.], "white"),
        ([255., 0., 0.], "red"),
        ([0., 128., 0.], "green"),
        ([0., 0., 255.], "blue"),
        ([255., 255., 0.], "yellow"),
        ([255., 165., 0.], "orange"),
        ([128., 0., 128.], "purple"),
        ([128., 128., 128.], "gray"),
    ];

    let mut tree = KDTree::with_capacity(3, reference.len());
    for (rgb, name) in reference {
        tree.insert(&rgb, name)?;
    }
    println!(
        "Indexed {} colors (tree height {})\n",
        tree.len(),
        tree.height()
    );

    let queries = [
        [250., 20., 30.],
        [30., 30., 200.],
        [200., 200., 190.],
        [240., 150., 40.],
        [100., 10., 90.],
    ];
    for query in queries {
        let (entry, distance) = tree.nearest(&query)?;
        println!(
            "  {:?} -> {} (distance {:.1})",
            query,
            entry.value(),
            distance
        );
    }

    // Exact lookups only match stored keys.
    println!("\n  lookup [255, 0, 0]: {:?}", tree.lookup(&[255., 0., 0.])?.value());
    if let Err(err) = tree.lookup(&[254., 0., 0.]) {
        println!("  lookup [254, 0, 0]: {err}");
    }

    Ok(())
}
