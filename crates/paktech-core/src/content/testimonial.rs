//! Client testimonials.

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: Option<&'static str>,
    pub company: Option<&'static str>,
    pub text: &'static str,
    pub rating: Option<u8>,
}

impl Testimonial {
    /// Rating clamped to `1..=MAX_RATING`, if the testimonial has one.
    pub fn stars(&self) -> Option<u8> {
        self.rating.map(|r| r.clamp(1, MAX_RATING))
    }

    /// "Role, Company", whichever parts are present.
    pub fn byline(&self) -> Option<String> {
        match (self.role, self.company) {
            (Some(role), Some(company)) => Some(format!("{}, {}", role, company)),
            (Some(part), None) | (None, Some(part)) => Some(part.to_string()),
            (None, None) => None,
        }
    }

    /// Initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Ayesha Khan",
        role: Some("Founder"),
        company: Some("Threadline Apparel"),
        text: "Our online store went live in five weeks and sales doubled within the first quarter. The team understood local payments better than anyone we spoke to.",
        rating: Some(5),
    },
    Testimonial {
        author: "Bilal Ahmed",
        role: Some("CTO"),
        company: Some("MediQueue"),
        text: "They rebuilt our patient booking app from scratch and cut load times in half. Communication was clear from kickoff to launch.",
        rating: Some(5),
    },
    Testimonial {
        author: "Sarah Mitchell",
        role: Some("Marketing Director"),
        company: Some("Northwind Travel"),
        text: "Organic traffic is up 180% since we started the growth marketing plan. Monthly reports are honest and easy to act on.",
        rating: Some(4),
    },
    Testimonial {
        author: "Usman Tariq",
        role: None,
        company: Some("Tariq Builders"),
        text: "Professional, quick and genuinely helpful. The new site brings in enquiries every week.",
        rating: Some(5),
    },
    Testimonial {
        author: "Fatima Noor",
        role: Some("Product Lead"),
        company: None,
        text: "The design system they delivered still guides every screen we ship.",
        rating: None,
    },
];

pub fn testimonials() -> &'static [Testimonial] {
    TESTIMONIALS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rating: Option<u8>) -> Testimonial {
        Testimonial {
            author: "ali raza",
            role: None,
            company: None,
            text: "",
            rating,
        }
    }

    #[test]
    fn stars_are_clamped() {
        assert_eq!(sample(Some(0)).stars(), Some(1));
        assert_eq!(sample(Some(9)).stars(), Some(MAX_RATING));
        assert_eq!(sample(Some(3)).stars(), Some(3));
        assert_eq!(sample(None).stars(), None);
    }

    #[test]
    fn byline_joins_present_parts() {
        assert_eq!(testimonials()[0].byline().as_deref(), Some("Founder, Threadline Apparel"));
        assert_eq!(testimonials()[3].byline().as_deref(), Some("Tariq Builders"));
        assert_eq!(sample(None).byline(), None);
    }

    #[test]
    fn initials_from_author() {
        assert_eq!(sample(None).initials(), "AR");
        assert_eq!(testimonials()[1].initials(), "BA");
    }
}
