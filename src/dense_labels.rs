//! Dense renumbering of canonical cluster labels, for coloring clusters and
//! for cluster-size statistics.

use crate::hoshen_kopelman::Clusters;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseLabels
{
    labels: Vec<Option<usize>>,
    sizes: Vec<usize>,
}

impl DenseLabels
{
    /// Maps canonical labels onto `0..num_clusters` in order of first
    /// appearance in the scan.
    pub fn from_clusters(clusters: &Clusters) -> Self
    {
        let mut rename = vec![usize::MAX; clusters.indices().len()];
        let mut sizes  = Vec::new();
        let labels     = (0..clusters.cluster_numbers().len())
            .map(|n|
            {
                let canonical = clusters.canonical_label(n)?;
                if rename[canonical] == usize::MAX
                {
                    rename[canonical] = sizes.len();
                    sizes.push(0);
                }
                let dense = rename[canonical];
                sizes[dense] += 1;
                Some(dense)
            })
            .collect();

        Self { labels, sizes }
    }
    pub fn at(&self, n: usize) -> Option<usize>
    {
        self.labels[n]
    }
    pub fn as_slice(&self) -> &[Option<usize>]
    {
        &self.labels
    }
    pub fn num_clusters(&self) -> usize
    {
        self.sizes.len()
    }
    /// Number of elements per dense cluster label.
    pub fn cluster_sizes(&self) -> &[usize]
    {
        &self.sizes
    }
    pub fn largest_cluster(&self) -> usize
    {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
    /// Second moment over first moment of the size distribution with the
    /// largest cluster left out, the usual finite-size susceptibility estimator.
    pub fn mean_finite_cluster_size(&self) -> f64
    {
        let largest_position = self.sizes.iter().enumerate().max_by_key(|&(_, &s)| s).map(|(i, _)| i);
        let (first, second)  = self.sizes
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != largest_position)
            .fold((0_f64, 0_f64), |(first, second), (_, &s)|
            {
                let s = s as f64;
                (first + s, second + s*s)
            });
        if first == 0.0 { 0.0 } else { second / first }
    }
}
