//! Reference connectivity used to check the labeler.

#![allow(dead_code)] // Not all test files use all functions

use std::collections::VecDeque;

use percolation::{Clusters, Lattice, LatticeKind, Occupancy};

/// Component id per element (`None` when empty), found by breadth-first search
/// over the full undirected adjacency.
pub fn bfs_components(lattice: &Lattice, occupancy: &Occupancy) -> Vec<Option<usize>>
{
    let mut component = vec![None; lattice.n_total()];
    let mut next_id   = 0;
    let mut queue     = VecDeque::new();

    for start in 0..lattice.n_total()
    {
        if !occupancy.at(start) || component[start].is_some()
        {
            continue;
        }
        component[start] = Some(next_id);
        queue.push_back(start);
        while let Some(n) = queue.pop_front()
        {
            for m in lattice.neighbors(n)
            {
                if occupancy.at(m) && component[m].is_none()
                {
                    component[m] = Some(next_id);
                    queue.push_back(m);
                }
            }
        }
        next_id += 1;
    }
    component
}

/// Whether the labels induce exactly the BFS partition of occupied elements.
pub fn matches_reference(lattice: &Lattice, occupancy: &Occupancy, clusters: &Clusters) -> Result<(), String>
{
    let reference = bfs_components(lattice, occupancy);
    for a in 0..lattice.n_total()
    {
        if reference[a].is_some() != clusters.canonical_label(a).is_some()
        {
            return Err(format!("element {a}: occupied/labeled mismatch"));
        }
        for b in a + 1..lattice.n_total()
        {
            let (Some(ra), Some(rb)) = (reference[a], reference[b]) else { continue };
            if (ra == rb) != clusters.same_cluster(a, b)
            {
                return Err(format!("elements {a} and {b}: reference says {}, labels say {}", ra == rb, clusters.same_cluster(a, b)));
            }
        }
    }
    Ok(())
}

/// Canonical partition of occupied elements as sorted member lists, so two
/// labelings can be compared regardless of label values.
pub fn partition(clusters: &Clusters) -> Vec<Vec<usize>>
{
    let mut groups = std::collections::BTreeMap::<usize, Vec<usize>>::new();
    for n in 0..clusters.cluster_numbers().len()
    {
        if let Some(label) = clusters.canonical_label(n)
        {
            groups.entry(label).or_default().push(n);
        }
    }
    let mut result = groups.into_values().collect::<Vec<_>>();
    result.sort();
    result
}

pub fn small_lattices() -> Vec<Lattice>
{
    let mut lattices = Vec::new();
    for size in 1..7
    {
        lattices.push(Lattice::new(size, 1, LatticeKind::Site).unwrap());
        lattices.push(Lattice::new(size, 1, LatticeKind::Bond).unwrap());
        lattices.push(Lattice::new(size, 2, LatticeKind::Site).unwrap());
        lattices.push(Lattice::new(size, 2, LatticeKind::Bond).unwrap());
    }
    lattices.push(Lattice::new(3, 3, LatticeKind::Site).unwrap());
    lattices
}
