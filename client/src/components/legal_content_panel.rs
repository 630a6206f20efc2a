//! Static legal documents (terms of service, privacy policy) and the view
//! that renders them inside the modal or on their own page.

#[cfg(all(test, not(target_arch = "wasm32")))]
#[path = "legal_content_panel_test.rs"]
mod legal_content_panel_test;

use leptos::prelude::*;

/// A fixed legal document: heading, last-updated label, and sections.
#[derive(Debug)]
pub struct LegalDocument {
    pub heading: &'static str,
    pub last_updated: &'static str,
    pub sections: &'static [LegalSection],
}

#[derive(Debug)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub static TERMS_OF_SERVICE: LegalDocument = LegalDocument {
    heading: "Terms of Service",
    last_updated: "March 1, 2025",
    sections: &[
        LegalSection {
            heading: "1. Acceptance of Terms",
            paragraphs: &[
                "By accessing or playing the arena you agree to be bound by these terms. If you do not agree, do not use the service.",
            ],
        },
        LegalSection {
            heading: "2. Eligibility",
            paragraphs: &[
                "You must be at least 18 years old, or the age of majority where you live, to take part in wagered matches.",
                "You are responsible for making sure that playing is legal in your jurisdiction.",
            ],
        },
        LegalSection {
            heading: "3. Wallets and Wagers",
            paragraphs: &[
                "Entry fees and payouts are settled on-chain through the treasury account shown in the site footer. Transactions are final once confirmed.",
                "We never hold your private keys. Keeping your wallet secure is your responsibility.",
            ],
        },
        LegalSection {
            heading: "4. Fair Play",
            paragraphs: &[
                "Cheating, automation, collusion, and exploiting bugs are prohibited. Accounts involved may be suspended and pending payouts withheld.",
            ],
        },
        LegalSection {
            heading: "5. Disclaimer",
            paragraphs: &[
                "The service is provided \"as is\" without warranties of any kind. Network outages or chain congestion may delay or cancel matches.",
            ],
        },
        LegalSection {
            heading: "6. Changes",
            paragraphs: &[
                "We may update these terms from time to time. Continued use after an update means you accept the revised terms.",
            ],
        },
    ],
};

pub static PRIVACY_POLICY: LegalDocument = LegalDocument {
    heading: "Privacy Policy",
    last_updated: "March 1, 2025",
    sections: &[
        LegalSection {
            heading: "1. What We Collect",
            paragraphs: &[
                "Your public wallet address, match history, and basic connection logs. We do not collect names, emails, or private keys.",
            ],
        },
        LegalSection {
            heading: "2. How We Use It",
            paragraphs: &[
                "To run matches, settle wagers, and detect abuse. Public blockchain data is visible to anyone by nature.",
            ],
        },
        LegalSection {
            heading: "3. Retention",
            paragraphs: &["Connection logs are deleted after 30 days. Match results are kept for leaderboards."],
        },
    ],
};

/// Renders any [`LegalDocument`].
///
/// `embedded` leaves out the `<h1>` heading for hosts that already title the
/// document, such as the modal header.
#[component]
pub fn LegalDocumentView(document: &'static LegalDocument, #[prop(optional)] embedded: bool) -> impl IntoView {
    view! {
        <article class="legal-content">
            {(!embedded).then(|| view! { <h1 class="legal-content__heading">{document.heading}</h1> })}
            <p class="legal-content__updated">"Last updated: " {document.last_updated}</p>
            {document
                .sections
                .iter()
                .map(|section| {
                    view! {
                        <section class="legal-content__section">
                            <h3>{section.heading}</h3>
                            {section.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </section>
                    }
                })
                .collect_view()}
        </article>
    }
}

/// Terms of service.
#[component]
pub fn LegalContentPanel(#[prop(optional)] embedded: bool) -> impl IntoView {
    view! { <LegalDocumentView document=&TERMS_OF_SERVICE embedded/> }
}

/// Privacy policy.
#[component]
pub fn PrivacyPolicyPanel(#[prop(optional)] embedded: bool) -> impl IntoView {
    view! { <LegalDocumentView document=&PRIVACY_POLICY embedded/> }
}

/// Which legal document a link or page refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegalPage {
    #[default]
    Terms,
    Privacy,
}

impl LegalPage {
    pub fn document(self) -> &'static LegalDocument {
        match self {
            Self::Terms => &TERMS_OF_SERVICE,
            Self::Privacy => &PRIVACY_POLICY,
        }
    }

    pub fn title(self) -> &'static str {
        self.document().heading
    }
}
