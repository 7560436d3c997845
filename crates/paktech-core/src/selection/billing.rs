//! Monthly/annual billing toggle for recurring pricing tiers.

/// Billing cycle shown by the pricing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn toggle(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Annual,
            BillingCycle::Annual => BillingCycle::Monthly,
        }
    }

    /// Translation key of the cycle label
    pub fn label_key(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "pricing.monthly",
            BillingCycle::Annual => "pricing.annual",
        }
    }

    /// Translation key of the per-period suffix ("/mo", "/yr")
    pub fn suffix_key(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "pricing.per_month",
            BillingCycle::Annual => "pricing.per_year",
        }
    }

    pub fn all() -> &'static [BillingCycle] {
        &[BillingCycle::Monthly, BillingCycle::Annual]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        assert_eq!(BillingCycle::default(), BillingCycle::Monthly);
        assert_eq!(BillingCycle::Monthly.toggle(), BillingCycle::Annual);
        assert_eq!(BillingCycle::Annual.toggle().toggle(), BillingCycle::Annual);
    }
}
