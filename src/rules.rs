use crate::types::{ProductFamily, ProductIdentity, Quote};

pub const PAIR_MATERIALS: &[&str] = &["lightpass", "mesh"];

pub struct BulkTier {
    pub min_qty: u32,
    pub max_qty: Option<u32>,
    pub multiplier: f64,
    pub message: &'static str,
}

pub enum DiscountRule {
    // Rate cut on qualifying-material pairs.
    PairRate {
        min_qty: u32,
        materials: &'static [&'static str],
        multiplier: f64,
        message: &'static str,
    },
    // Quantity-tiered rate cut; first matching tier wins.
    BulkTiers(&'static [BulkTier]),
    // Informational only: the numbers stay at the undiscounted baseline,
    // the message advertises the free units.
    FreeItems {
        group_size: u32,
        item_name: &'static str,
        pluralize: bool,
    },
}

const BATTLE_FLAG_TIERS: &[BulkTier] = &[
    BulkTier { min_qty: 2, max_qty: Some(2), multiplier: 0.90, message: "10% BULK DISCOUNT" },
    BulkTier { min_qty: 3, max_qty: None, multiplier: 0.85, message: "15% BULK DISCOUNT" },
];

const WAR_FLAG_TIERS: &[BulkTier] = &[
    BulkTier { min_qty: 2, max_qty: Some(2), multiplier: 0.95, message: "5% DISCOUNT" },
    BulkTier { min_qty: 3, max_qty: Some(3), multiplier: 0.92, message: "8% DISCOUNT" },
    BulkTier { min_qty: 4, max_qty: None, multiplier: 0.90, message: "10% DISCOUNT" },
];

// At most one rule per product. Preset pages always carry the free-item
// offer; everything else is keyed by the page identity.
pub fn rule_for(family: ProductFamily, identity: ProductIdentity) -> Option<DiscountRule> {
    if family == ProductFamily::Preset {
        return Some(DiscountRule::FreeItems {
            group_size: 3,
            item_name: if identity == ProductIdentity::AmpFlags { "AMP FLAG" } else { "CABINET MESH" },
            pluralize: identity == ProductIdentity::AmpFlags,
        });
    }
    match identity {
        ProductIdentity::Scrims => Some(DiscountRule::PairRate {
            min_qty: 2,
            materials: PAIR_MATERIALS,
            multiplier: 0.70,
            message: "30% OFF PAIR APPLIED",
        }),
        ProductIdentity::BattleFlags => Some(DiscountRule::BulkTiers(BATTLE_FLAG_TIERS)),
        ProductIdentity::WarFlags => Some(DiscountRule::BulkTiers(WAR_FLAG_TIERS)),
        _ => None,
    }
}

pub fn apply(
    family: ProductFamily,
    identity: ProductIdentity,
    quantity: u32,
    material: Option<&str>,
    base_unit_price: f64,
) -> Quote {
    let mut quote = Quote {
        unit_price: base_unit_price,
        total_price: base_unit_price * quantity as f64,
        message: String::new(),
        is_discounted: false,
    };

    let rule = match rule_for(family, identity) {
        Some(r) => r,
        None => return quote,
    };

    match rule {
        DiscountRule::PairRate { min_qty, materials, multiplier, message } => {
            let qualifies = material.map_or(false, |m| materials.contains(&m));
            if quantity >= min_qty && qualifies {
                quote.unit_price = base_unit_price * multiplier;
                quote.total_price = quote.unit_price * quantity as f64;
                quote.message = message.to_string();
                quote.is_discounted = true;
            }
        }
        DiscountRule::BulkTiers(tiers) => {
            let tier = tiers.iter().find(|t| {
                quantity >= t.min_qty && t.max_qty.map_or(true, |max| quantity <= max)
            });
            if let Some(tier) = tier {
                quote.unit_price = base_unit_price * tier.multiplier;
                quote.total_price = quote.unit_price * quantity as f64;
                quote.message = tier.message.to_string();
                quote.is_discounted = true;
            }
        }
        DiscountRule::FreeItems { group_size, item_name, pluralize } => {
            let free_items = quantity / group_size;
            if free_items > 0 {
                let suffix = if pluralize && free_items > 1 { "S" } else { "" };
                quote.message = format!("+{} FREE {}{}", free_items, item_name, suffix);
                quote.is_discounted = true;
            }
        }
    }

    quote
}
