use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::dense_labels::DenseLabels;
use crate::error::{LatticeError, PercolationError, Result};
use crate::hoshen_kopelman::HoshenKopelman;
use crate::lattice::Lattice;
use crate::occupancy::Occupancy;
use crate::percolation_check::spans;
use crate::percolation_results::PercolationResults;

/// Repeats generation, labeling and the spanning check over independent
/// realizations for a grid of occupation probabilities.
#[derive(Debug, Clone, Copy)]
pub struct EnsembleSweep
{
    lattice: Lattice,
    ensemble_size: usize,
    seed: u64,
}

impl EnsembleSweep
{
    pub fn new(lattice: Lattice, ensemble_size: usize, seed: u64) -> Result<Self>
    {
        if ensemble_size == 0
        {
            return Err(PercolationError::EmptyEnsemble);
        }
        Ok(Self { lattice, ensemble_size, seed })
    }
    pub fn lattice(&self) -> &Lattice
    {
        &self.lattice
    }
    pub fn ensemble_size(&self) -> usize
    {
        self.ensemble_size
    }
    // One stream per grid point, independent of how rayon schedules them.
    fn rng_for(&self, index: usize) -> SmallRng
    {
        SmallRng::seed_from_u64(self.seed.wrapping_add(index as u64))
    }
    /// Ensemble averages at a single `p`, drawing every realization from `rng`.
    pub fn sample(&self, p: f64, rng: &mut SmallRng) -> std::result::Result<PercolationResults<f64>, LatticeError>
    {
        let mut hoshen_kopelman = HoshenKopelman::new(self.lattice);
        let n_total             = self.lattice.n_total() as f64;

        let mut spanning_acc     = 0_usize;
        let mut largest_acc      = 0_f64;
        let mut num_clusters_acc = 0_f64;
        let mut finite_size_acc  = 0_f64;

        for _ in 0..self.ensemble_size
        {
            let occupancy = Occupancy::new_random(rng, &self.lattice, p);
            let clusters  = hoshen_kopelman.label(&occupancy)?;

            if spans(&self.lattice, &occupancy, clusters)
            {
                spanning_acc += 1;
            }
            let dense         = DenseLabels::from_clusters(clusters);
            largest_acc      += dense.largest_cluster() as f64 / n_total;
            num_clusters_acc += dense.num_clusters() as f64 / n_total;
            finite_size_acc  += dense.mean_finite_cluster_size();
        }

        let ensemble_size = self.ensemble_size as f64;
        Ok(PercolationResults
        {
            spanning_probability: spanning_acc as f64 / ensemble_size,
            largest_cluster_fraction: largest_acc / ensemble_size,
            cluster_density: num_clusters_acc / ensemble_size,
            mean_finite_cluster_size: finite_size_acc / ensemble_size,
        })
    }
    /// Runs the whole grid, one rayon task per probability. Results come back in
    /// the order of `probabilities` and only depend on the seed.
    pub fn run(&self, probabilities: &[f64]) -> Result<Vec<PercolationResults<f64>>>
    {
        if probabilities.is_empty()
        {
            return Err(PercolationError::NoProbabilities);
        }

        let results = probabilities
            .par_iter()
            .enumerate()
            .map(|(index, &p)|
            {
                let mut rng = self.rng_for(index);
                self.sample(p, &mut rng)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(results)
    }
}
