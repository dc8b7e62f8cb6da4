use crate::cluster_labels::ClusterLabels;
use crate::equivalence_class::EquivalenceClass;
use crate::error::LatticeError;
use crate::lattice::Lattice;
use crate::occupancy::Occupancy;

/// Result of one labeling run: provisional labels per element plus the
/// finalized redirection table.
#[derive(Debug, Clone)]
pub struct Clusters
{
    lattice: Lattice,
    labels: ClusterLabels,
    eq_classes: EquivalenceClass,
}

impl Clusters
{
    pub fn lattice(&self) -> &Lattice
    {
        &self.lattice
    }
    pub fn labels(&self) -> &ClusterLabels
    {
        &self.labels
    }
    /// Provisional label per element (`cluster_numbers`), 0 for empty elements.
    pub fn cluster_numbers(&self) -> &[usize]
    {
        self.labels.as_slice()
    }
    /// Flattened redirection table (`indices`), one entry per label handed out.
    pub fn indices(&self) -> &[usize]
    {
        self.eq_classes.as_slice()
    }
    /// Canonical cluster label of element `n`, `None` if it is empty.
    #[inline]
    pub fn canonical_label(&self, n: usize) -> Option<usize>
    {
        match self.labels.at(n)
        {
            0     => None,
            label => Some(self.eq_classes.canonical(label)),
        }
    }
    pub fn same_cluster(&self, a: usize, b: usize) -> bool
    {
        match (self.canonical_label(a), self.canonical_label(b))
        {
            (Some(la), Some(lb)) => la == lb,
            _                    => false,
        }
    }
    pub fn num_clusters(&self) -> usize
    {
        self.eq_classes.num_roots()
    }
    /// `(cluster_numbers, indices)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>)
    {
        (self.labels.into_vec(), self.eq_classes.into_vec())
    }
}

/// Single forward scan cluster labeler. Buffers are kept between runs so one
/// instance can label many realizations of the same lattice.
pub struct HoshenKopelman
{
    clusters: Clusters,
    neighbor_labels: Vec<usize>,
    affected: Vec<usize>,
}

impl HoshenKopelman
{
    pub fn new(lattice: Lattice) -> Self
    {
        let labels     = ClusterLabels::new(lattice.n_total(), lattice.size());
        let eq_classes = EquivalenceClass::new(lattice.n_total());
        let clusters   = Clusters { lattice, labels, eq_classes };

        Self { clusters, neighbor_labels: Vec::new(), affected: Vec::new() }
    }
    pub fn lattice(&self) -> &Lattice
    {
        &self.clusters.lattice
    }
    pub fn reset(&mut self)
    {
        self.clusters.eq_classes.reset();
        self.clusters.labels.reset();
    }
    #[inline(always)]
    fn make_new_cluster(&mut self, n: usize)
    {
        let new_class = self.clusters.eq_classes.create_class();
        self.clusters.labels.set(n, new_class);
    }
    // Every label seen on the way to a root, roots included, is pointed at the
    // smallest root. Elements already carrying those labels are left stale.
    #[inline(always)]
    fn merge_clusters(&mut self, n: usize)
    {
        self.affected.clear();
        let mut good_label = usize::MAX;
        for &label in &self.neighbor_labels
        {
            let root   = self.clusters.eq_classes.root_collecting(label, &mut self.affected);
            good_label = good_label.min(root);
        }
        for &label in &self.affected
        {
            self.clusters.eq_classes.redirect(label, good_label);
        }
        self.clusters.labels.set(n, good_label);
    }
    /// Labels every occupied element; afterwards
    /// `indices[cluster_numbers[n]]` is the canonical label of `n`.
    pub fn label(&mut self, occupancy: &Occupancy) -> Result<&Clusters, LatticeError>
    {
        let lattice = self.clusters.lattice;
        if occupancy.len() != lattice.n_total()
        {
            return Err(LatticeError::OccupancyLength { expected: lattice.n_total(), found: occupancy.len() });
        }
        self.reset();

        for n in 0..lattice.n_total()
        {
            if !occupancy.at(n)
            {
                continue;
            }
            self.neighbor_labels.clear();
            for neighbor in lattice.backward_neighbors(n)
            {
                debug_assert!(neighbor < n, "neighbor {neighbor} of {n} is not behind it in scan order");
                let label = self.clusters.labels.at(neighbor);
                if label > 0 && !self.neighbor_labels.contains(&label)
                {
                    self.neighbor_labels.push(label);
                }
            }
            if self.neighbor_labels.is_empty()
            {
                self.make_new_cluster(n);
            }
            else
            {
                self.merge_clusters(n);
            }
        }
        self.clusters.eq_classes.finalize();

        Ok(&self.clusters)
    }
    pub fn clusters(&self) -> &Clusters
    {
        &self.clusters
    }
    pub fn into_clusters(self) -> Clusters
    {
        self.clusters
    }
}

/// One-shot labeling of a single realization.
pub fn label_clusters(lattice: &Lattice, occupancy: &Occupancy) -> Result<Clusters, LatticeError>
{
    let mut hoshen_kopelman = HoshenKopelman::new(*lattice);
    hoshen_kopelman.label(occupancy)?;
    Ok(hoshen_kopelman.into_clusters())
}
