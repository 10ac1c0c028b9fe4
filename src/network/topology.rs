use serde::Deserialize;

use crate::error::{NetworkError, Result};

/// A validated list of layer widths, input first and output last.
///
/// Holds at least two entries and every entry is positive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<usize>")]
pub struct Topology {
    sizes: Vec<usize>,
}

impl Topology {
    pub fn new(sizes: &[usize]) -> Result<Topology> {
        if sizes.len() < 2 {
            return Err(NetworkError::Configuration(format!(
                "a network needs at least 2 layers, got {}",
                sizes.len()
            )));
        }
        if let Some(pos) = sizes.iter().position(|&s| s == 0) {
            return Err(NetworkError::Configuration(format!(
                "layer {pos} has width 0; every layer width must be positive"
            )));
        }

        Ok(Topology { sizes: sizes.to_vec() })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    /// `(input_size, size)` for every consecutive pair of layers.
    pub fn transitions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sizes.windows(2).map(|w| (w[0], w[1]))
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = NetworkError;

    fn try_from(sizes: Vec<usize>) -> Result<Topology> {
        Topology::new(&sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_topology() {
        let t = Topology::new(&[3, 5, 2, 1]).unwrap();
        assert_eq!(t.input_size(), 3);
        assert_eq!(t.output_size(), 1);
        assert_eq!(t.transitions().collect::<Vec<_>>(), vec![(3, 5), (5, 2), (2, 1)]);
    }

    #[test]
    fn test_too_few_layers() {
        assert!(matches!(Topology::new(&[]), Err(NetworkError::Configuration(_))));
        assert!(matches!(Topology::new(&[4]), Err(NetworkError::Configuration(_))));
    }

    #[test]
    fn test_zero_width_layer() {
        assert!(matches!(Topology::new(&[3, 0, 1]), Err(NetworkError::Configuration(_))));
    }

    #[test]
    fn test_deserialize_validates() {
        let t: Topology = serde_json::from_str("[2, 3, 1]").unwrap();
        assert_eq!(t.sizes(), &[2, 3, 1]);
        assert!(serde_json::from_str::<Topology>("[2]").is_err());
    }
}
