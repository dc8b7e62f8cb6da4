/// Provisional label per lattice element, 0 meaning empty or not yet labeled.
#[derive(Clone, PartialEq, Eq)]
pub struct ClusterLabels
{
    data: Vec<usize>,
    cols: usize,
}

impl ClusterLabels
{
    pub fn new(n_total: usize, cols: usize) -> Self
    {
        let data = vec![0; n_total];
        Self { data, cols }
    }
    #[inline(always)]
    pub fn at(&self, n: usize) -> usize
    {
        self.data[n]
    }
    #[inline(always)]
    pub fn set(&mut self, n: usize, label: usize)
    {
        self.data[n] = label;
    }
    /// Row-major lookup for 2-D lattices.
    #[inline]
    pub fn at_pos(&self, pos: (usize, usize)) -> usize
    {
        self.data[pos.0*self.cols + pos.1]
    }
    #[inline]
    pub fn reset(&mut self)
    {
        self.data.fill(0);
    }
    pub fn len(&self) -> usize
    {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }
    pub fn as_slice(&self) -> &[usize]
    {
        &self.data
    }
    pub fn into_vec(self) -> Vec<usize>
    {
        self.data
    }
}

use std::fmt;
impl fmt::Debug for ClusterLabels
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let width      = self.data.iter().max().map_or(1, |max| max.to_string().len());
        let mut result = vec![String::from("\n[")];
        for (n, row) in self.data.chunks(self.cols.max(1)).enumerate()
        {
            if n > 0
            {
                result.push(String::from("\n"));
            }
            for label in row
            {
                result.push(format!(" {label:>width$} "));
            }
        }
        result.push(String::from("]"));
        write!(f, "{}", result.concat())
    }
}
