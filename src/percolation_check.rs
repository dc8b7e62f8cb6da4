use std::collections::HashSet;

use crate::hoshen_kopelman::Clusters;
use crate::lattice::Lattice;
use crate::occupancy::Occupancy;

fn canonical_labels<I>(occupancy: &Occupancy, clusters: &Clusters, boundary: I) -> HashSet<usize>
where
    I: IntoIterator<Item = usize>,
{
    boundary
        .into_iter()
        .filter(|&n| occupancy.at(n))
        .filter_map(|n| clusters.canonical_label(n))
        .collect()
}

/// Canonical labels occurring on both boundaries, sorted.
pub fn spanning_labels<A, B>(occupancy: &Occupancy, clusters: &Clusters, first: A, second: B) -> Vec<usize>
where
    A: IntoIterator<Item = usize>,
    B: IntoIterator<Item = usize>,
{
    let first      = canonical_labels(occupancy, clusters, first);
    let second     = canonical_labels(occupancy, clusters, second);
    let mut shared = first.intersection(&second).copied().collect::<Vec<_>>();
    shared.sort_unstable();
    shared
}

/// Whether one cluster touches both caller-defined boundaries.
pub fn spans_between<A, B>(occupancy: &Occupancy, clusters: &Clusters, first: A, second: B) -> bool
where
    A: IntoIterator<Item = usize>,
    B: IntoIterator<Item = usize>,
{
    let first = canonical_labels(occupancy, clusters, first);
    if first.is_empty()
    {
        return false;
    }
    second
        .into_iter()
        .filter(|&n| occupancy.at(n))
        .filter_map(|n| clusters.canonical_label(n))
        .any(|label| first.contains(&label))
}

/// Whether a cluster connects the top and bottom boundary of the lattice.
pub fn spans(lattice: &Lattice, occupancy: &Occupancy, clusters: &Clusters) -> bool
{
    spans_between(occupancy, clusters, lattice.top_boundary(), lattice.bottom_boundary())
}
