//! Service catalog.

use crate::selection::Categorized;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub features: &'static [&'static str],
}

impl Categorized for Service {
    fn category(&self) -> &'static str {
        self.category
    }
}

static SERVICES: &[Service] = &[
    Service {
        title: "Custom Web Development",
        icon: "\u{1F310}",
        description: "Fast, accessible websites and web apps built on modern stacks and tuned for search.",
        category: "Development",
        features: &[
            "Responsive, mobile-first layouts",
            "Headless CMS integration",
            "Core Web Vitals optimisation",
            "Ongoing maintenance plans",
        ],
    },
    Service {
        title: "Mobile App Development",
        icon: "\u{1F4F1}",
        description: "Native and cross-platform apps for iOS and Android, from prototype to store release.",
        category: "Development",
        features: &[
            "Flutter and React Native",
            "Offline-first data sync",
            "Push notifications",
            "App store submission",
        ],
    },
    Service {
        title: "E-commerce Solutions",
        icon: "\u{1F6D2}",
        description: "Storefronts that convert, with local payment gateways and inventory integrations.",
        category: "Development",
        features: &[
            "Shopify and WooCommerce builds",
            "JazzCash and Easypaisa gateways",
            "Inventory and ERP sync",
            "Abandoned cart recovery",
        ],
    },
    Service {
        title: "UI/UX Design",
        icon: "\u{1F3A8}",
        description: "Research-led interfaces and design systems that make products easy to love.",
        category: "Design",
        features: &[
            "User research and personas",
            "Wireframes and prototypes",
            "Design systems",
            "Usability testing",
        ],
    },
    Service {
        title: "Brand Identity",
        icon: "\u{2728}",
        description: "Logos, typography and brand guidelines that stay consistent across every channel.",
        category: "Design",
        features: &[
            "Logo and visual identity",
            "Brand guidelines",
            "Marketing collateral",
        ],
    },
    Service {
        title: "Search Engine Optimisation",
        icon: "\u{1F50D}",
        description: "Technical, on-page and local SEO that turns search traffic into qualified leads.",
        category: "Marketing",
        features: &[
            "Technical SEO audits",
            "Keyword and content strategy",
            "Local listings management",
            "Monthly ranking reports",
        ],
    },
    Service {
        title: "Social Media Marketing",
        icon: "\u{1F4E3}",
        description: "Campaigns and content calendars that grow engaged audiences on every platform.",
        category: "Marketing",
        features: &[
            "Content calendars",
            "Paid social campaigns",
            "Community management",
            "Performance analytics",
        ],
    },
    Service {
        title: "Cloud & DevOps",
        icon: "\u{2601}\u{FE0F}",
        description: "Reliable infrastructure, CI/CD pipelines and monitoring for teams that ship often.",
        category: "Cloud",
        features: &[
            "AWS, GCP and Azure setups",
            "CI/CD pipelines",
            "Containerisation",
            "24/7 monitoring",
        ],
    },
];

/// The full service catalog.
pub fn services() -> &'static [Service] {
    SERVICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_has_features() {
        for service in services() {
            assert!(!service.features.is_empty(), "{} has no features", service.title);
        }
    }

    #[test]
    fn first_category_is_development() {
        assert_eq!(services()[0].category, "Development");
    }
}
