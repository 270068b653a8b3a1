use crate::types::ProductIdentity;

// Battle flags get a width-dependent height ceiling; wide flags can only
// be made short. Every other product has no dependent bound.
pub fn max_allowed_height(identity: ProductIdentity, width: f64) -> Option<f64> {
    if identity != ProductIdentity::BattleFlags {
        return None;
    }
    Some(if width >= 4.0 { 7.0 } else { 18.0 })
}
