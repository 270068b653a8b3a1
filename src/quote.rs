use crate::types::{PricingContext, ProductFamily, Quote};
use crate::{curve, presets, rules};

// One full pricing pass over a context. Zero or negative area and unknown
// preset keys both collapse to the zero quote without consulting the rule
// table.
pub fn compute_quote(ctx: &PricingContext) -> Quote {
    let base_unit_price = match ctx.family {
        ProductFamily::Dimension => {
            let sq_ft = ctx.width * ctx.height;
            if sq_ft <= 0.0 {
                return Quote::zero();
            }
            curve::base_price_per_sq_ft(sq_ft) * sq_ft
        }
        ProductFamily::Preset => match presets::lookup(&ctx.preset_key) {
            Some(price) => price,
            None => return Quote::zero(),
        },
    };

    rules::apply(
        ctx.family,
        ctx.identity,
        ctx.quantity,
        ctx.material.as_deref(),
        base_unit_price,
    )
}
