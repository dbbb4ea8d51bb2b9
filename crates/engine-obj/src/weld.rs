//! Exact-equality vertex welding.
//!
//! Corner positions are collapsed into a minimal position list per object.
//! Two positions weld only when all three coordinates compare equal; there
//! is no tolerance. `0.0` and `-0.0` compare equal and weld together.

use hashbrown::HashMap;
use nalgebra::Point3;
use tracing::debug;

/// Result of welding a corner list.
#[derive(Debug, Clone, Default)]
pub struct Weld {
    /// Distinct positions in first-seen order.
    pub positions: Vec<Point3<f64>>,

    /// For each input corner, its index into `positions`.
    pub indices: Vec<u32>,
}

impl Weld {
    /// Number of corners that reused an earlier position.
    pub fn merged_count(&self) -> usize {
        self.indices.len() - self.positions.len()
    }
}

/// Hash key with equality matching `f64 ==` for finite values.
fn position_key(p: &Point3<f64>) -> [u64; 3] {
    // Adding 0.0 maps -0.0 to 0.0.
    [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits(), (p.z + 0.0).to_bits()]
}

/// Weld corner positions in order.
pub fn weld_positions<I>(corners: I) -> Weld
where
    I: IntoIterator<Item = Point3<f64>>,
{
    let corners = corners.into_iter();
    let mut weld = Weld {
        positions: Vec::new(),
        indices: Vec::with_capacity(corners.size_hint().0),
    };
    let mut lookup: HashMap<[u64; 3], u32> = HashMap::new();

    for position in corners {
        let next = weld.positions.len() as u32;
        let index = *lookup.entry(position_key(&position)).or_insert_with(|| {
            weld.positions.push(position);
            next
        });
        weld.indices.push(index);
    }

    debug!(
        "Welded {} corners into {} positions",
        weld.indices.len(),
        weld.positions.len()
    );

    weld
}
