//! Effective weights and top-evidence ranking.

use skillfuse_core::models::clamp_unit;
use skillfuse_core::EvidenceItem;

/// `weight × relevance × confidence` on clamped values. A missing weight counts as 0.
pub fn effective_weight(item: &EvidenceItem) -> f64 {
    let weight = item.weight.map(clamp_unit).unwrap_or(0.0);
    weight * clamp_unit(item.relevance) * clamp_unit(item.confidence)
}

/// The `limit` highest-ranked items, by effective weight descending.
///
/// Ties fall back to source precedence, then to input order (stable sort).
pub fn rank_evidence(items: &[(EvidenceItem, f64)], limit: usize) -> Vec<EvidenceItem> {
    let mut ranked: Vec<&(EvidenceItem, f64)> = items.iter().collect();
    ranked.sort_by(|(a, wa), (b, wb)| {
        wb.total_cmp(wa)
            .then_with(|| a.source.precedence().cmp(&b.source.precedence()))
    });
    ranked
        .into_iter()
        .take(limit)
        .map(|(item, _)| item.clone())
        .collect()
}
