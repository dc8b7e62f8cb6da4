/// Union-find redirection table over provisional labels.
///
/// `data[k] == k` marks a canonical label, `data[k] == j < k` means `k` was
/// merged into `j`. Label 0 is reserved for empty elements and always maps to
/// itself. Merges only ever point towards smaller labels, so after
/// [`EquivalenceClass::finalize`] every entry is its own root in one lookup.
#[derive(Debug, Clone)]
pub struct EquivalenceClass
{
    data: Vec<usize>,
    next_label: usize,
}

impl EquivalenceClass
{
    pub fn new(n_total: usize) -> Self
    {
        let data = vec![0; n_total + 1];
        Self { data, next_label: 1 }
    }
    #[inline]
    pub fn reset(&mut self)
    {
        self.data[..self.next_label].fill(0);
        self.next_label = 1;
    }
    pub fn create_class(&mut self) -> usize
    {
        let new_cluster_index = self.next_label;
        self.data[new_cluster_index] = new_cluster_index;
        self.next_label += 1;
        new_cluster_index
    }
    pub fn find(&self, mut cluster_result: usize) -> usize
    {
        while self.data[cluster_result] != cluster_result
        {
            cluster_result = self.data[cluster_result];
        }
        cluster_result
    }
    /// Follows the chain from `label` to its root, pushing every label on the
    /// way (root included) onto `visited`.
    #[inline]
    pub fn root_collecting(&self, mut label: usize, visited: &mut Vec<usize>) -> usize
    {
        loop
        {
            visited.push(label);
            let parent = self.data[label];
            if parent == label
            {
                return label;
            }
            debug_assert!(parent < label, "label {label} points upwards to {parent}");
            label = parent;
        }
    }
    #[inline(always)]
    pub fn redirect(&mut self, label: usize, target: usize)
    {
        debug_assert!(target <= label);
        self.data[label] = target;
    }
    /// Single in-order pass: when `k` is reached every smaller entry already
    /// holds its root, so `data[data[k]]` is the root of `k`.
    pub fn finalize(&mut self)
    {
        for k in 0..self.next_label
        {
            self.data[k] = self.data[self.data[k]];
        }
    }
    /// Root of `label`; a single lookup once finalized.
    #[inline(always)]
    pub fn canonical(&self, label: usize) -> usize
    {
        self.data[label]
    }
    /// Labels handed out so far, plus one (the reserved 0).
    pub fn next_label(&self) -> usize
    {
        self.next_label
    }
    pub fn num_roots(&self) -> usize
    {
        (1..self.next_label).filter(|&k| self.data[k] == k).count()
    }
    /// The used part of the table, `indices[0..next_label]`.
    pub fn as_slice(&self) -> &[usize]
    {
        &self.data[..self.next_label]
    }
    pub fn into_vec(mut self) -> Vec<usize>
    {
        self.data.truncate(self.next_label);
        self.data
    }
}
