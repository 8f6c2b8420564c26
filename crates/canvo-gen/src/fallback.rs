//! Deterministic offline fallback canvas.

use canvo_core::BusinessModelCanvas;

/// Synthesize a placeholder canvas from static templates.
///
/// Interpolates the raw idea and industry strings into template sentences,
/// three bullets per field. Never calls the backend and never fails, which
/// keeps the user-facing flow (and upstream quota accounting) moving during
/// a backend outage — an availability-over-fidelity tradeoff.
#[must_use]
pub fn fallback_canvas(business_idea: &str, industry: &str) -> BusinessModelCanvas {
    let idea = match business_idea.trim() {
        "" => "Your product or service",
        trimmed => trimmed,
    };
    let sector = match industry.trim() {
        "" => "General",
        trimmed => trimmed,
    };

    let bullets = |items: [String; 3]| items.into_iter().collect();
    BusinessModelCanvas {
        key_partners: bullets([
            format!("Suppliers and vendors in {sector}"),
            "Technology providers and integration partners".to_string(),
            "Marketing affiliates and community leaders".to_string(),
        ]),
        key_activities: bullets([
            format!("Product development and iteration for {idea}"),
            "Customer acquisition and onboarding".to_string(),
            "Content/education and community engagement".to_string(),
        ]),
        value_propositions: bullets([
            format!("Easy-to-use, time-saving solution for {sector} needs"),
            "Measurable outcomes and transparent pricing".to_string(),
            "Delightful UX with responsive support".to_string(),
        ]),
        customer_relationships: bullets([
            "Self-serve onboarding with guided flows".to_string(),
            "Proactive support via tutorials and messaging".to_string(),
            "Feedback loops and roadmap transparency".to_string(),
        ]),
        customer_segments: bullets([
            format!("Early adopters in {sector}"),
            "SMBs and individual professionals".to_string(),
            "Enterprise teams seeking pilot programs".to_string(),
        ]),
        key_resources: bullets([
            "Core application platform and cloud infrastructure".to_string(),
            "Domain expertise and content assets".to_string(),
            "Customer data and analytics".to_string(),
        ]),
        channels: bullets([
            "Website, SEO, and content marketing".to_string(),
            "Social media and partnerships".to_string(),
            "App stores and integrations".to_string(),
        ]),
        cost_structure: bullets([
            "Cloud hosting and third-party services".to_string(),
            "Engineering, design, and support".to_string(),
            "Marketing and sales operations".to_string(),
        ]),
        revenue_streams: bullets([
            "Subscription tiers (free, pro, enterprise)".to_string(),
            "One-time purchases or add-ons".to_string(),
            "Partnerships and affiliate revenue".to_string(),
        ]),
    }
}
