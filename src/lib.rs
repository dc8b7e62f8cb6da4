use num_traits::Float;

pub mod error;
pub mod lattice;
pub mod occupancy;
pub mod cluster_labels;
pub mod equivalence_class;
pub mod hoshen_kopelman;
pub mod percolation_check;
pub mod dense_labels;
pub mod ensemble;
pub mod percolation_results;
pub mod parameter_reader;

pub use error::{LatticeError, PercolationError, Result};
pub use lattice::{BackwardNeighbors, Lattice, LatticeKind};
pub use occupancy::Occupancy;
pub use cluster_labels::ClusterLabels;
pub use equivalence_class::EquivalenceClass;
pub use hoshen_kopelman::{label_clusters, Clusters, HoshenKopelman};
pub use percolation_check::{spanning_labels, spans, spans_between};
pub use dense_labels::DenseLabels;
pub use ensemble::EnsembleSweep;
pub use percolation_results::PercolationResults;
pub use parameter_reader::ParameterReader;


/// `count` evenly spaced values from `start` to `stop`, both included.
pub fn linspace<T>(start: T, stop: T, count: usize) -> Vec<T> where T: Float
{
    match count
    {
        0 => Vec::new(),
        1 => vec![start],
        _ =>
        {
            let Some(intervals) = T::from(count - 1) else { return Vec::new() };
            let step = (stop - start) / intervals;
            (0..count)
                .map(|val| if val == count - 1 { stop } else { start + step * T::from(val).unwrap_or_else(T::nan) })
                .collect::<Vec<_>>()
        }
    }
}
