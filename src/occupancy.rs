use rand::Rng;

use crate::error::LatticeError;
use crate::lattice::Lattice;

/// One realization of occupied/empty lattice elements. Read-only once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Occupancy
{
    data: Vec<bool>,
    cols: usize,
}

impl Occupancy
{
    pub fn new_empty(lattice: &Lattice) -> Self
    {
        let data = vec![false; lattice.n_total()];
        Self { data, cols: lattice.size() }
    }
    /// Each element is occupied independently with probability `p`.
    ///
    /// `p` is not range checked: `p <= 0` (or NaN) leaves every element empty
    /// and `p >= 1` occupies every element.
    pub fn new_random<R: Rng>(rng: &mut R, lattice: &Lattice, p: f64) -> Self
    {
        let data = (0..lattice.n_total()).map(|_| rng.random::<f64>() < p).collect();
        Self { data, cols: lattice.size() }
    }
    pub fn from_vec(lattice: &Lattice, data: Vec<bool>) -> Result<Self, LatticeError>
    {
        if data.len() != lattice.n_total()
        {
            return Err(LatticeError::OccupancyLength { expected: lattice.n_total(), found: data.len() });
        }
        Ok(Self { data, cols: lattice.size() })
    }
    #[inline(always)]
    pub fn at(&self, n: usize) -> bool
    {
        self.data[n]
    }
    pub fn len(&self) -> usize
    {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }
    pub fn as_slice(&self) -> &[bool]
    {
        &self.data
    }
    pub fn count_occupied(&self) -> usize
    {
        self.data.iter().filter(|&&occupied| occupied).count()
    }
}

use std::fmt;
impl fmt::Debug for Occupancy
{
    // rows of `size` elements, '#' occupied and '.' empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let mut result = vec![String::from("\n[")];
        for (n, row) in self.data.chunks(self.cols.max(1)).enumerate()
        {
            if n > 0
            {
                result.push(String::from("\n"));
            }
            for &occupied in row
            {
                result.push(String::from(if occupied { " # " } else { " . " }));
            }
        }
        result.push(String::from("]"));
        write!(f, "{}", result.concat())
    }
}
