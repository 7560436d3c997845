//! Pricing tiers.

use crate::selection::{BillingCycle, Categorized};

/// Price of a tier, in whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    /// One-off project price
    Fixed(u32),
    /// Subscription with separate monthly and annual prices
    Recurring { monthly: u32, annual: u32 },
    /// Quoted per engagement
    Custom,
}

impl Price {
    /// Amount shown for the given billing cycle. `None` for custom quotes.
    ///
    /// Fixed prices ignore the cycle.
    pub fn amount(&self, cycle: BillingCycle) -> Option<u32> {
        match *self {
            Price::Fixed(amount) => Some(amount),
            Price::Recurring { monthly, annual } => Some(match cycle {
                BillingCycle::Monthly => monthly,
                BillingCycle::Annual => annual,
            }),
            Price::Custom => None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self, Price::Recurring { .. })
    }

    /// Whole-percent saving of the annual price over twelve monthly payments.
    pub fn annual_saving_percent(&self) -> Option<u32> {
        match *self {
            Price::Recurring { monthly, annual } => {
                let full = u64::from(monthly) * 12;
                if full == 0 || u64::from(annual) >= full {
                    return None;
                }
                let saved = full - u64::from(annual);
                Some(((saved * 100 + full / 2) / full) as u32)
            }
            _ => None,
        }
    }
}

/// Format a dollar amount with thousands separators ("$12,500").
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub category: &'static str,
    pub tagline: &'static str,
    pub price: Price,
    pub features: &'static [&'static str],
    /// Rendered with the "most popular" badge
    pub highlighted: bool,
    pub cta: &'static str,
}

impl Categorized for PricingTier {
    fn category(&self) -> &'static str {
        self.category
    }
}

static TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter Site",
        category: "Websites",
        tagline: "A polished presence for new businesses.",
        price: Price::Fixed(499),
        features: &[
            "Up to 5 pages",
            "Mobile responsive design",
            "Contact form",
            "Basic on-page SEO",
            "1 month support",
        ],
        highlighted: false,
        cta: "Get Started",
    },
    PricingTier {
        name: "Business Site",
        category: "Websites",
        tagline: "Everything a growing company needs online.",
        price: Price::Fixed(1_299),
        features: &[
            "Up to 15 pages",
            "CMS for your team",
            "Blog and newsletter",
            "Analytics dashboard",
            "3 months support",
        ],
        highlighted: true,
        cta: "Get Started",
    },
    PricingTier {
        name: "Enterprise Platform",
        category: "Websites",
        tagline: "Custom platforms with integrations and SLAs.",
        price: Price::Custom,
        features: &[
            "Unlimited pages",
            "Custom integrations",
            "Dedicated project manager",
            "Uptime SLA",
        ],
        highlighted: false,
        cta: "Talk to Sales",
    },
    PricingTier {
        name: "Store Launch",
        category: "E-commerce",
        tagline: "Open your online store in weeks.",
        price: Price::Fixed(1_499),
        features: &[
            "Up to 100 products",
            "Local payment gateways",
            "Order notifications",
            "Shipping rules",
        ],
        highlighted: false,
        cta: "Launch My Store",
    },
    PricingTier {
        name: "Store Growth",
        category: "E-commerce",
        tagline: "Scale a busy catalogue without the headaches.",
        price: Price::Fixed(3_499),
        features: &[
            "Unlimited products",
            "Inventory and ERP sync",
            "Abandoned cart recovery",
            "Multi-currency checkout",
        ],
        highlighted: true,
        cta: "Launch My Store",
    },
    PricingTier {
        name: "Local SEO",
        category: "Marketing",
        tagline: "Be found by customers near you.",
        price: Price::Recurring {
            monthly: 199,
            annual: 1_990,
        },
        features: &[
            "Google Business profile",
            "Local citations",
            "10 target keywords",
            "Monthly report",
        ],
        highlighted: false,
        cta: "Start Ranking",
    },
    PricingTier {
        name: "Growth Marketing",
        category: "Marketing",
        tagline: "SEO, social and paid campaigns under one roof.",
        price: Price::Recurring {
            monthly: 499,
            annual: 4_990,
        },
        features: &[
            "30 target keywords",
            "Social media management",
            "Paid campaign setup",
            "Conversion tracking",
            "Fortnightly strategy calls",
        ],
        highlighted: true,
        cta: "Start Growing",
    },
];

/// All pricing tiers, grouped by category in display order.
pub fn pricing_tiers() -> &'static [PricingTier] {
    TIERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0), "$0");
        assert_eq!(format_amount(499), "$499");
        assert_eq!(format_amount(1_299), "$1,299");
        assert_eq!(format_amount(1_234_567), "$1,234,567");
    }

    #[test]
    fn amount_follows_cycle() {
        let price = Price::Recurring {
            monthly: 199,
            annual: 1_990,
        };
        assert_eq!(price.amount(BillingCycle::Monthly), Some(199));
        assert_eq!(price.amount(BillingCycle::Annual), Some(1_990));
        assert_eq!(Price::Fixed(499).amount(BillingCycle::Annual), Some(499));
        assert_eq!(Price::Custom.amount(BillingCycle::Monthly), None);
    }

    #[test]
    fn annual_saving() {
        let price = Price::Recurring {
            monthly: 199,
            annual: 1_990,
        };
        // 2388 -> 1990 saves 398, 16.67%
        assert_eq!(price.annual_saving_percent(), Some(17));
        assert_eq!(Price::Fixed(10).annual_saving_percent(), None);
        assert_eq!(
            Price::Recurring {
                monthly: 10,
                annual: 120
            }
            .annual_saving_percent(),
            None
        );
    }

    #[test]
    fn one_highlight_per_category_at_most() {
        let mut seen: Vec<&str> = Vec::new();
        for tier in pricing_tiers().iter().filter(|t| t.highlighted) {
            assert!(!seen.contains(&tier.category), "{} highlighted twice", tier.category);
            seen.push(tier.category);
        }
    }
}
