use num_traits::Float;
use std::io::Write;
use std::iter::zip;
use std::path::Path;

use crate::error::{PercolationError, Result};
use crate::lattice::Lattice;

/// Ensemble averages at one occupation probability.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PercolationResults<T> where T: Float
{
    pub spanning_probability: T,
    pub largest_cluster_fraction: T,
    pub cluster_density: T,        // clusters per lattice element
    pub mean_finite_cluster_size: T,
}

impl<T> PercolationResults<T> where T: Float + std::fmt::Display
{
    pub fn write_to_file<P: AsRef<Path>>(file_name: P, lattice: &Lattice, probabilities: &[T], results: &[PercolationResults<T>], elapsed_time: std::time::Duration) -> Result<()>
    {
        if probabilities.len() != results.len()
        {
            return Err(PercolationError::LengthMismatch { probabilities: probabilities.len(), results: results.len() });
        }

        let mut file = std::fs::File::create(file_name)?;
        writeln!(&mut file, "# lattice: {:?}, size: {}, dimension: {}, elapsed_time: {}", lattice.kind(), lattice.size(), lattice.dimension(), elapsed_time.as_secs())?;
        writeln!(&mut file, "p, spanning_probability, largest_cluster_fraction, cluster_density, mean_finite_cluster_size")?;

        for (&p, res) in zip(probabilities, results)
        {
            writeln!(&mut file, "{p}, {}, {}, {}, {}", res.spanning_probability, res.largest_cluster_fraction, res.cluster_density, res.mean_finite_cluster_size)?;
        }

        Ok(())
    }
}
