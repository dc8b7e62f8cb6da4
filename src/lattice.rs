use std::ops::Range;
use std::str::FromStr;

use crate::error::LatticeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatticeKind
{
    Site,
    Bond,
}

impl FromStr for LatticeKind
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.trim().to_lowercase().as_str()
        {
            "site" => Ok(LatticeKind::Site),
            "bond" => Ok(LatticeKind::Bond),
            other  => Err(format!("unknown lattice kind \"{other}\", expected site or bond")),
        }
    }
}

/// Open-boundary hypercubic lattice of `size^dimension` sites, addressed either
/// by site or by bond.
///
/// Sites are stored row-major with the last coordinate fastest, so axis `k`
/// has stride `size^k`. In bond mode every site owns the bonds reaching towards
/// its lower neighbours: in 2-D, index row `r = n / size` holds the vertical
/// bonds `(y-1, c)-(y, c)` of site row `y = r / 2` when `r` is even and the
/// horizontal bonds `(y, c-1)-(y, c)` when `r` is odd. Bonds in the first site
/// row (vertical) or first column (horizontal) are stubs with only one site
/// inside the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice
{
    size: usize,
    dimension: usize,
    kind: LatticeKind,
    num_sites: usize,
    n_total: usize,
}

impl Lattice
{
    pub fn new(size: usize, dimension: usize, kind: LatticeKind) -> Result<Self, LatticeError>
    {
        if size == 0
        {
            return Err(LatticeError::ZeroSize);
        }
        if dimension == 0
        {
            return Err(LatticeError::ZeroDimension);
        }
        if kind == LatticeKind::Bond && dimension > 2
        {
            return Err(LatticeError::UnsupportedBondDimension { dimension });
        }

        let too_large = LatticeError::TooLarge { size, dimension };
        let num_sites = u32::try_from(dimension)
            .ok()
            .and_then(|d| size.checked_pow(d))
            .ok_or(too_large.clone())?;
        let n_total = match kind
        {
            LatticeKind::Site => num_sites,
            LatticeKind::Bond => num_sites.checked_mul(dimension).ok_or(too_large.clone())?,
        };
        // labels run up to n_total inclusive
        n_total.checked_add(1).ok_or(too_large)?;

        Ok(Self { size, dimension, kind, num_sites, n_total })
    }

    /// Builds the lattice and checks that an externally supplied element count
    /// agrees with it.
    pub fn with_total(n_total: usize, size: usize, dimension: usize, kind: LatticeKind) -> Result<Self, LatticeError>
    {
        let lattice = Self::new(size, dimension, kind)?;
        if lattice.n_total != n_total
        {
            return Err(LatticeError::InconsistentTotal { expected: lattice.n_total, found: n_total });
        }
        Ok(lattice)
    }

    pub fn square_sites(size: usize) -> Result<Self, LatticeError>
    {
        Self::new(size, 2, LatticeKind::Site)
    }

    pub fn size(&self) -> usize
    {
        self.size
    }
    pub fn dimension(&self) -> usize
    {
        self.dimension
    }
    pub fn kind(&self) -> LatticeKind
    {
        self.kind
    }
    pub fn num_sites(&self) -> usize
    {
        self.num_sites
    }
    pub fn n_total(&self) -> usize
    {
        self.n_total
    }

    #[inline(always)]
    fn stride(&self, axis: usize) -> usize
    {
        self.size.pow(axis as u32)
    }

    /// Coordinates of a site, slowest axis first (`(row, col)` in 2-D).
    pub fn coordinates(&self, site: usize) -> Vec<usize>
    {
        (0..self.dimension)
            .rev()
            .map(|axis| (site / self.stride(axis)) % self.size)
            .collect()
    }

    /// Neighbours of `n` that come earlier in scan order. Every yielded index
    /// is strictly smaller than `n`.
    #[inline]
    pub fn backward_neighbors(&self, n: usize) -> BackwardNeighbors
    {
        debug_assert!(n < self.n_total, "element {n} outside lattice of {} elements", self.n_total);
        let inner = match (self.kind, self.dimension)
        {
            (LatticeKind::Site, _) => Inner::Axes { n, size: self.size, dimension: self.dimension, axis: 0, stride: 1 },
            (LatticeKind::Bond, 1) =>
            {
                let (buffer, len) = if n > 0 { ([n - 1, 0, 0], 1) } else { ([0; 3], 0) };
                Inner::Listed { buffer, len, pos: 0 }
            }
            (LatticeKind::Bond, _) => bond_backward_2d(n, self.size),
        };
        BackwardNeighbors { inner }
    }

    /// Full undirected adjacency of `n`, sorted. Slower than
    /// [`Lattice::backward_neighbors`]; bonds are related through their shared
    /// endpoints rather than through index arithmetic.
    pub fn neighbors(&self, n: usize) -> Vec<usize>
    {
        let mut result = Vec::with_capacity(2 * self.dimension + 2);
        match self.kind
        {
            LatticeKind::Site =>
            {
                for axis in 0..self.dimension
                {
                    let stride = self.stride(axis);
                    let coord  = (n / stride) % self.size;
                    if coord > 0
                    {
                        result.push(n - stride);
                    }
                    if coord + 1 < self.size
                    {
                        result.push(n + stride);
                    }
                }
            }
            LatticeKind::Bond =>
            {
                let (lower, owner) = self.bond_endpoints(n);
                for site in lower.into_iter().chain(std::iter::once(owner))
                {
                    result.extend(self.incident_bonds(site).into_iter().filter(|&b| b != n));
                }
            }
        }
        result.sort_unstable();
        result.dedup();
        result
    }

    /// Sites joined by bond `n`: the lower endpoint (absent for boundary stubs)
    /// and the site owning the bond. Only meaningful for bond lattices.
    pub fn bond_endpoints(&self, n: usize) -> (Option<usize>, usize)
    {
        debug_assert_eq!(self.kind, LatticeKind::Bond);
        let size = self.size;
        if self.dimension == 1
        {
            return (n.checked_sub(1), n);
        }

        let (row, col) = (n / size, n % size);
        let y          = row / 2;
        let owner      = y * size + col;
        let lower      = if row % 2 == 0
        {
            (y > 0).then(|| owner - size)
        }
        else
        {
            (col > 0).then(|| owner - 1)
        };
        (lower, owner)
    }

    fn incident_bonds(&self, site: usize) -> Vec<usize>
    {
        let size = self.size;
        if self.dimension == 1
        {
            let mut bonds = vec![site];
            if site + 1 < size
            {
                bonds.push(site + 1);
            }
            return bonds;
        }

        let (y, col)   = (site / size, site % size);
        let vertical   = 2 * y * size + col;
        let horizontal = (2 * y + 1) * size + col;
        let mut bonds  = vec![vertical, horizontal];
        if y + 1 < size
        {
            bonds.push(vertical + 2 * size);
        }
        if col + 1 < size
        {
            bonds.push(horizontal + 1);
        }
        bonds
    }

    /// Elements touching the first layer along the slowest axis (the top row
    /// of a 2-D lattice).
    pub fn top_boundary(&self) -> Range<usize>
    {
        match (self.kind, self.dimension)
        {
            (LatticeKind::Site, d) => 0..self.stride(d - 1),
            (LatticeKind::Bond, 1) => 0..self.n_total.min(2),
            (LatticeKind::Bond, _) => 0..self.n_total.min(3 * self.size),
        }
    }

    /// Elements touching the last layer along the slowest axis.
    pub fn bottom_boundary(&self) -> Range<usize>
    {
        match (self.kind, self.dimension)
        {
            (LatticeKind::Site, d) => self.n_total - self.stride(d - 1)..self.n_total,
            (LatticeKind::Bond, 1) => self.n_total - 1..self.n_total,
            (LatticeKind::Bond, _) => (2 * self.size - 2) * self.size..self.n_total,
        }
    }
}

// U(y, c) sits at row 2y, H(y, c) at row 2y + 1.
#[inline(always)]
fn bond_backward_2d(n: usize, size: usize) -> Inner
{
    let (row, col)  = (n / size, n % size);
    let mut buffer  = [0_usize; 3];
    let mut len     = 0;
    if row % 2 == 0
    {
        // vertical: shares its lower site with U(y-1, c), H(y-1, c), H(y-1, c+1)
        if row > 0
        {
            buffer[0] = n - 2 * size;
            buffer[1] = n - size;
            len = 2;
            if col + 1 < size
            {
                buffer[2] = n - size + 1;
                len = 3;
            }
        }
    }
    else
    {
        // horizontal: U(y, c) at its own site, U(y, c-1) and H(y, c-1) at the left one
        buffer[0] = n - size;
        len = 1;
        if col > 0
        {
            buffer[1] = n - size - 1;
            buffer[2] = n - 1;
            len = 3;
        }
    }
    Inner::Listed { buffer, len, pos: 0 }
}

#[derive(Debug, Clone)]
enum Inner
{
    Axes { n: usize, size: usize, dimension: usize, axis: usize, stride: usize },
    Listed { buffer: [usize; 3], len: usize, pos: usize },
}

/// Lazy, allocation free iterator returned by [`Lattice::backward_neighbors`].
#[derive(Debug, Clone)]
pub struct BackwardNeighbors
{
    inner: Inner,
}

impl Iterator for BackwardNeighbors
{
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize>
    {
        match &mut self.inner
        {
            Inner::Axes { n, size, dimension, axis, stride } =>
            {
                while *axis < *dimension
                {
                    let current = *stride;
                    *axis      += 1;
                    *stride     = stride.saturating_mul(*size);
                    if (*n / current) % *size > 0
                    {
                        return Some(*n - current);
                    }
                }
                None
            }
            Inner::Listed { buffer, len, pos } =>
            {
                if *pos < *len
                {
                    let neighbor = buffer[*pos];
                    *pos += 1;
                    Some(neighbor)
                }
                else
                {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn backward(lattice: &Lattice, n: usize) -> Vec<usize>
    {
        let mut result: Vec<usize> = lattice.backward_neighbors(n).collect();
        result.sort_unstable();
        result
    }

    #[test]
    fn rejects_malformed_parameters()
    {
        assert_eq!(Lattice::new(0, 2, LatticeKind::Site), Err(LatticeError::ZeroSize));
        assert_eq!(Lattice::new(4, 0, LatticeKind::Site), Err(LatticeError::ZeroDimension));
        assert_eq!(Lattice::new(4, 3, LatticeKind::Bond), Err(LatticeError::UnsupportedBondDimension { dimension: 3 }));
        assert_eq!(Lattice::new(usize::MAX, 2, LatticeKind::Site), Err(LatticeError::TooLarge { size: usize::MAX, dimension: 2 }));
        assert_eq!(
            Lattice::with_total(10, 3, 2, LatticeKind::Site),
            Err(LatticeError::InconsistentTotal { expected: 9, found: 10 })
        );
    }

    #[test]
    fn element_counts()
    {
        assert_eq!(Lattice::new(5, 1, LatticeKind::Site).unwrap().n_total(), 5);
        assert_eq!(Lattice::new(5, 1, LatticeKind::Bond).unwrap().n_total(), 5);
        assert_eq!(Lattice::new(4, 2, LatticeKind::Site).unwrap().n_total(), 16);
        assert_eq!(Lattice::new(4, 2, LatticeKind::Bond).unwrap().n_total(), 32);
        assert_eq!(Lattice::new(3, 3, LatticeKind::Site).unwrap().n_total(), 27);
        assert!(Lattice::with_total(32, 4, 2, LatticeKind::Bond).is_ok());
    }

    #[test]
    fn site_neighbors_2d()
    {
        let lattice = Lattice::square_sites(3).unwrap();
        assert_eq!(backward(&lattice, 0), Vec::<usize>::new());
        assert_eq!(backward(&lattice, 2), vec![1]);
        assert_eq!(backward(&lattice, 3), vec![0]);
        assert_eq!(backward(&lattice, 4), vec![1, 3]);
        assert_eq!(lattice.neighbors(4), vec![1, 3, 5, 7]);
        assert_eq!(lattice.neighbors(8), vec![5, 7]);
        assert_eq!(lattice.coordinates(5), vec![1, 2]);
    }

    #[test]
    fn site_neighbors_3d()
    {
        let lattice = Lattice::new(3, 3, LatticeKind::Site).unwrap();
        assert_eq!(backward(&lattice, 13), vec![4, 10, 12]);
        assert_eq!(backward(&lattice, 9), vec![0]);
        assert_eq!(lattice.neighbors(13), vec![4, 10, 12, 14, 16, 22]);
    }

    #[test]
    fn bond_neighbors_2d()
    {
        // size 3: rows 0,2,4 vertical, rows 1,3,5 horizontal
        let lattice = Lattice::new(3, 2, LatticeKind::Bond).unwrap();
        assert_eq!(backward(&lattice, 0), Vec::<usize>::new());
        assert_eq!(backward(&lattice, 3), vec![0]);
        assert_eq!(backward(&lattice, 4), vec![0, 1, 3]);
        assert_eq!(backward(&lattice, 6), vec![0, 3, 4]);
        assert_eq!(backward(&lattice, 8), vec![2, 5]);
        assert_eq!(lattice.bond_endpoints(0), (None, 0));
        assert_eq!(lattice.bond_endpoints(4), (Some(0), 1));
        assert_eq!(lattice.bond_endpoints(6), (Some(0), 3));
        assert_eq!(lattice.neighbors(4), vec![0, 1, 3, 5, 6, 7]);
    }

    #[test]
    fn backward_neighbors_are_the_earlier_part_of_the_full_adjacency()
    {
        let lattices = [
            Lattice::new(1, 1, LatticeKind::Site).unwrap(),
            Lattice::new(6, 1, LatticeKind::Site).unwrap(),
            Lattice::new(6, 1, LatticeKind::Bond).unwrap(),
            Lattice::new(1, 2, LatticeKind::Bond).unwrap(),
            Lattice::new(2, 2, LatticeKind::Bond).unwrap(),
            Lattice::new(5, 2, LatticeKind::Site).unwrap(),
            Lattice::new(5, 2, LatticeKind::Bond).unwrap(),
            Lattice::new(4, 3, LatticeKind::Site).unwrap(),
        ];
        for lattice in lattices
        {
            for n in 0..lattice.n_total()
            {
                let full = lattice.neighbors(n);
                for &m in &full
                {
                    assert!(lattice.neighbors(m).contains(&n), "{lattice:?}: {n} -> {m} not symmetric");
                }
                let expected: Vec<usize> = full.into_iter().filter(|&m| m < n).collect();
                assert_eq!(backward(&lattice, n), expected, "{lattice:?} element {n}");
            }
        }
    }

    #[test]
    fn boundaries_touch_first_and_last_rows()
    {
        let sites = Lattice::square_sites(4).unwrap();
        assert_eq!(sites.top_boundary(), 0..4);
        assert_eq!(sites.bottom_boundary(), 12..16);

        let chain = Lattice::new(5, 1, LatticeKind::Site).unwrap();
        assert_eq!(chain.top_boundary(), 0..1);
        assert_eq!(chain.bottom_boundary(), 4..5);

        for size in 1..6
        {
            let bonds = Lattice::new(size, 2, LatticeKind::Bond).unwrap();
            let touches_row = |n: usize, row: usize|
            {
                let (lower, owner) = bonds.bond_endpoints(n);
                lower.into_iter().chain([owner]).any(|s| s / size == row)
            };
            for n in 0..bonds.n_total()
            {
                assert_eq!(bonds.top_boundary().contains(&n), touches_row(n, 0), "size {size} bond {n}");
                assert_eq!(bonds.bottom_boundary().contains(&n), touches_row(n, size - 1), "size {size} bond {n}");
            }
        }
    }

    #[test]
    fn parses_kind()
    {
        assert_eq!("Site".parse::<LatticeKind>(), Ok(LatticeKind::Site));
        assert_eq!(" bond ".parse::<LatticeKind>(), Ok(LatticeKind::Bond));
        assert!("triangular".parse::<LatticeKind>().is_err());
    }
}
