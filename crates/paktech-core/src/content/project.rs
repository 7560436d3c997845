//! Portfolio projects shown on the projects page.

use crate::selection::Categorized;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// URL segment under `/projects/`
    pub slug: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub duration: &'static str,
}

impl Categorized for Project {
    fn category(&self) -> &'static str {
        self.category
    }
}

static PROJECTS: &[Project] = &[
    Project {
        slug: "threadline-store",
        title: "Threadline Online Store",
        client: "Threadline Apparel",
        category: "E-commerce",
        summary: "A fashion storefront with local payments and same-day delivery tracking.",
        challenge: "Threadline sold only through Instagram messages, losing orders and spending hours on manual invoicing.",
        solution: "We built a Shopify store with JazzCash and Easypaisa checkout, courier integrations and automated order emails.",
        results: &[
            "2x monthly revenue within a quarter",
            "70% fewer manual order messages",
            "Checkout conversion of 3.4%",
        ],
        tech_stack: &["Shopify", "Liquid", "JazzCash API", "Klaviyo"],
        duration: "5 weeks",
    },
    Project {
        slug: "mediqueue-app",
        title: "MediQueue Patient App",
        client: "MediQueue",
        category: "Mobile",
        summary: "A booking and queue-tracking app for a network of outpatient clinics.",
        challenge: "Patients waited hours in clinic lobbies with no idea when they would be seen.",
        solution: "A Flutter app with live queue positions, reminders and a lightweight clinic dashboard.",
        results: &[
            "Average lobby wait down 45%",
            "4.7 star rating on both stores",
            "60,000 bookings in the first year",
        ],
        tech_stack: &["Flutter", "Firebase", "Node.js", "PostgreSQL"],
        duration: "12 weeks",
    },
    Project {
        slug: "northwind-growth",
        title: "Northwind Growth Campaign",
        client: "Northwind Travel",
        category: "Marketing",
        summary: "An SEO and content programme for a boutique travel operator.",
        challenge: "Northwind depended on paid ads for nearly all of its bookings.",
        solution: "Technical SEO fixes, destination guides and a refreshed Google Business presence.",
        results: &[
            "Organic traffic up 180%",
            "Paid ad spend down 35%",
            "Top-3 ranking for 22 target keywords",
        ],
        tech_stack: &["WordPress", "Search Console", "GA4", "Ahrefs"],
        duration: "Ongoing",
    },
    Project {
        slug: "tariq-builders-site",
        title: "Tariq Builders Website",
        client: "Tariq Builders",
        category: "Web",
        summary: "A portfolio website for a construction firm with project galleries and lead capture.",
        challenge: "An outdated site that did not work on phones and generated no enquiries.",
        solution: "A fast static site with a project gallery CMS and a quote request flow.",
        results: &[
            "Weekly inbound enquiries",
            "Page load under one second",
        ],
        tech_stack: &["Astro", "Tailwind CSS", "Netlify CMS"],
        duration: "4 weeks",
    },
    Project {
        slug: "ledgerly-dashboard",
        title: "Ledgerly Finance Dashboard",
        client: "Ledgerly",
        category: "Web",
        summary: "A reporting dashboard for small-business bookkeeping data.",
        challenge: "Accountants exported spreadsheets by hand to build monthly client reports.",
        solution: "A web dashboard with scheduled PDF reports and role-based access for clients.",
        results: &[
            "Report preparation time down 80%",
            "Adopted by 140 accounting firms",
        ],
        tech_stack: &["React", "TypeScript", "Rust", "PostgreSQL"],
        duration: "10 weeks",
    },
];

pub fn projects() -> &'static [Project] {
    PROJECTS
}

/// Look a project up by its URL slug.
pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}
