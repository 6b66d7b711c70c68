use tracing::{info, warn};

use crate::consts::DEGRADED_NAME_MARKERS;

/// File names of one original image and its degraded counterpart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePair {
    pub original: String,
    pub degraded: String,
}

/// How a set of file names was split into pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairingStrategy {
    /// Degraded images recognised by a marker in their name.
    ByName,
    /// First half of the sorted names against the second half.
    ByOrder,
    /// Too few images; each is compared with itself.
    SelfPaired,
}

impl std::fmt::Display for PairingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByName => write!(f, "by filename"),
            Self::ByOrder => write!(f, "by order"),
            Self::SelfPaired => write!(f, "self-paired"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pairing {
    pub strategy: PairingStrategy,
    pub pairs: Vec<ImagePair>,
}

/// Whether a file name marks a degraded image (`degraded`, `noise`, `blur`...).
pub fn is_degraded_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    DEGRADED_NAME_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Pair original and degraded images by name, falling back to sorted halves.
pub fn pair_images(names: &[String]) -> Pairing {
    let (mut degraded, mut originals): (Vec<String>, Vec<String>) =
        names.iter().cloned().partition(|n| is_degraded_name(n));

    if !originals.is_empty() && originals.len() == degraded.len() {
        originals.sort();
        degraded.sort();
        let pairs: Vec<ImagePair> = originals
            .into_iter()
            .zip(degraded)
            .map(|(original, degraded)| ImagePair { original, degraded })
            .collect();
        info!(pairs = pairs.len(), "Paired images by filename pattern");
        return Pairing {
            strategy: PairingStrategy::ByName,
            pairs,
        };
    }

    let mut sorted = names.to_vec();
    sorted.sort();
    let half = sorted.len() / 2;
    if half > 0 {
        let pairs: Vec<ImagePair> = (0..half)
            .map(|i| ImagePair {
                original: sorted[i].clone(),
                degraded: sorted[half + i].clone(),
            })
            .collect();
        info!(pairs = pairs.len(), "Paired images by order");
        return Pairing {
            strategy: PairingStrategy::ByOrder,
            pairs,
        };
    }

    warn!("Could not pair images; comparing each image with itself");
    Pairing {
        strategy: PairingStrategy::SelfPaired,
        pairs: names
            .iter()
            .map(|n| ImagePair {
                original: n.clone(),
                degraded: n.clone(),
            })
            .collect(),
    }
}
