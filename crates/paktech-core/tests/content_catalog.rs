//! Tests over the shipped content catalogs
//!
//! These check the real static lists rather than synthetic fixtures, so a
//! copy edit that breaks a section's assumptions fails here.

use paktech_core::content::{
    faqs, journey_steps, pricing_tiers, project_by_slug, projects, services, testimonials, Price,
};
use paktech_core::{BillingCycle, CategoryFilter};

#[test]
fn test_services_filter_initially_shows_first_category() {
    let filter = CategoryFilter::from_items(services());
    let first = services()[0].category;
    assert_eq!(filter.active(), Some(first));

    let shown = filter.apply(services());
    assert!(!shown.is_empty());
    assert!(shown.iter().all(|s| s.category == first));
}

#[test]
fn test_services_every_category_nonempty() {
    let filter = CategoryFilter::from_items(services());
    for (category, count) in filter.counts(services()) {
        assert!(count > 0, "{} has no services", category);
    }
}

#[test]
fn test_pricing_filter_preserves_order() {
    let filter = CategoryFilter::from_items(pricing_tiers()).select("Marketing");
    let names: Vec<&str> = filter.apply(pricing_tiers()).iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Local SEO", "Growth Marketing"]);
}

#[test]
fn test_recurring_tiers_save_on_annual() {
    for tier in pricing_tiers().iter().filter(|t| t.price.is_recurring()) {
        let monthly = tier.price.amount(BillingCycle::Monthly).unwrap();
        let annual = tier.price.amount(BillingCycle::Annual).unwrap();
        assert!(annual < monthly * 12, "{} annual plan saves nothing", tier.name);
        assert!(tier.price.annual_saving_percent().is_some());
    }
}

#[test]
fn test_custom_tier_has_no_amount() {
    let custom: Vec<_> = pricing_tiers()
        .iter()
        .filter(|t| t.price == Price::Custom)
        .collect();
    assert!(!custom.is_empty());
    for tier in custom {
        assert_eq!(tier.price.amount(BillingCycle::Monthly), None);
    }
}

#[test]
fn test_every_project_resolves_by_slug() {
    for project in projects() {
        let found = project_by_slug(project.slug).unwrap();
        assert_eq!(found.title, project.title);
        assert!(!project.results.is_empty());
    }
}

#[test]
fn test_catalogs_not_empty() {
    assert!(!faqs().is_empty());
    assert!(!testimonials().is_empty());
    assert!(!journey_steps().is_empty());
}
