//! Company-level copy: hero stats, why-us reasons, demo highlights and
//! contact channels.

pub const COMPANY_NAME: &str = "PakTechnology";
pub const TAGLINE: &str = "Websites, apps and marketing that grow your business.";

/// Embedded map shown next to the contact form.
pub const MAP_EMBED_URL: &str =
    "https://www.google.com/maps/embed?pb=!1m14!1m12!1m3!1d13606.6!2d74.3587!3d31.5204!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!5e0!3m2!1sen!2s";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

static HERO_STATS: &[Stat] = &[
    Stat {
        value: "250+",
        label: "Projects delivered",
    },
    Stat {
        value: "120+",
        label: "Happy clients",
    },
    Stat {
        value: "8",
        label: "Years in business",
    },
    Stat {
        value: "4.9",
        label: "Average rating",
    },
];

static REASONS: &[Reason] = &[
    Reason {
        icon: "\u{26A1}",
        title: "Fast Delivery",
        description: "Clear milestones and weekly demos mean you always know what ships next.",
    },
    Reason {
        icon: "\u{1F4B0}",
        title: "Transparent Pricing",
        description: "Fixed quotes with no surprise invoices. You approve every change in scope.",
    },
    Reason {
        icon: "\u{1F91D}",
        title: "Dedicated Team",
        description: "One project manager and the same developers from kickoff to launch.",
    },
    Reason {
        icon: "\u{1F6E1}\u{FE0F}",
        title: "Built to Last",
        description: "Tested, documented code and hosting you own, so you are never locked in.",
    },
];

static DEMO_HIGHLIGHTS: &[DemoHighlight] = &[
    DemoHighlight {
        title: "Live walkthrough",
        description: "See a finished client project and the CMS your team would use.",
    },
    DemoHighlight {
        title: "Your goals first",
        description: "We map the demo to your industry and the outcomes you care about.",
    },
    DemoHighlight {
        title: "Honest estimate",
        description: "Leave with a ballpark timeline and budget, no obligation.",
    },
];

static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "\u{2709}\u{FE0F}",
        label: "Email",
        value: "hello@paktechnology.com",
        href: Some("mailto:hello@paktechnology.com"),
    },
    ContactChannel {
        icon: "\u{1F4DE}",
        label: "Phone",
        value: "+92 300 1234567",
        href: Some("tel:+923001234567"),
    },
    ContactChannel {
        icon: "\u{1F4CD}",
        label: "Office",
        value: "Gulberg III, Lahore, Pakistan",
        href: None,
    },
    ContactChannel {
        icon: "\u{1F552}",
        label: "Hours",
        value: "Mon-Sat, 10:00-19:00 PKT",
        href: None,
    },
];

pub fn hero_stats() -> &'static [Stat] {
    HERO_STATS
}

pub fn reasons() -> &'static [Reason] {
    REASONS
}

pub fn demo_highlights() -> &'static [DemoHighlight] {
    DEMO_HIGHLIGHTS
}

pub fn contact_channels() -> &'static [ContactChannel] {
    CONTACT_CHANNELS
}
