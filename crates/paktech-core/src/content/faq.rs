//! Frequently asked questions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

static FAQS: &[Faq] = &[
    Faq {
        question: "How long does a typical website project take?",
        answer: "Most business websites launch in four to eight weeks. Larger platforms and e-commerce stores are scoped individually and usually take eight to sixteen weeks.",
    },
    Faq {
        question: "Do you work with clients outside Pakistan?",
        answer: "Yes. Around half of our clients are in the UK, the Gulf and North America. We schedule calls across time zones and invoice in USD.",
    },
    Faq {
        question: "Will I be able to update the site myself?",
        answer: "Every site ships with a content management system and a recorded walkthrough, so your team can edit pages, posts and products without a developer.",
    },
    Faq {
        question: "What happens after launch?",
        answer: "All projects include a support window for fixes. After that you can move to a maintenance plan covering updates, backups, monitoring and small changes.",
    },
    Faq {
        question: "How do payments work?",
        answer: "Fixed-price projects are billed in milestones, typically 40% upfront, 40% at design approval and 20% at launch. Marketing plans are billed monthly or annually.",
    },
    Faq {
        question: "Can you take over an existing project?",
        answer: "Yes. We start with a short audit of the codebase and hosting, then agree a plan for fixes and new features.",
    },
];

pub fn faqs() -> &'static [Faq] {
    FAQS
}
