//! Price/quantity scatter sampling

use rand::Rng;
use rand::seq::index;

use crate::algorithm::aggregation::ScatterPoint;
use crate::models::{FilteredView, SaleRecord};

/// Default maximum number of scatter points
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

impl From<&SaleRecord> for ScatterPoint {
    fn from(record: &SaleRecord) -> Self {
        Self {
            x: record.quantity_ordered,
            y: record.price_each,
            z: record.sales,
            name: format!("Order {}", record.order_number),
            product_line: record.product_line.clone(),
            product_code: record.product_code.clone(),
        }
    }
}

/// Uniform sample without replacement of up to `sample_size` records.
///
/// Views no larger than `sample_size` are emitted whole. Sampled points keep
/// the relative order they have in the view.
pub fn price_quantity_scatter<R>(
    view: &FilteredView<'_>,
    sample_size: usize,
    rng: &mut R,
) -> Vec<ScatterPoint>
where
    R: Rng + ?Sized,
{
    if view.len() <= sample_size {
        return view.iter().map(ScatterPoint::from).collect();
    }

    let mut picked = index::sample(rng, view.len(), sample_size).into_vec();
    picked.sort_unstable();
    picked
        .into_iter()
        .map(|i| ScatterPoint::from(&view[i]))
        .collect()
}
