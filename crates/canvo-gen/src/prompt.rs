//! The canvas generation prompt template.

use canvo_core::FIELD_NAMES;

/// Build the fixed instruction prompt for a business idea and industry.
///
/// The template enumerates the nine required field names and demands strict
/// JSON with no markdown wrapper, so the response parser has as little to
/// clean up as possible.
#[must_use]
pub fn build_prompt(business_idea: &str, industry: &str) -> String {
    format!(
        "You are a business strategy expert.\n\
         Given this business idea/description, generate a structured Business \
         Model Canvas as valid JSON with the following fields:\n\
         {fields}.\n\
         \n\
         Business Idea: {business_idea}\n\
         Industry: {industry}\n\
         \n\
         Use clear, professional language for each section.\n\
         Each field should be an array of 3-5 concise bullet points.\n\
         Return ONLY valid JSON data with no markdown, no code blocks, and no \
         extra text.",
        fields = FIELD_NAMES.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_both_inputs() {
        let prompt = build_prompt("A subscription box for artisanal coffee", "Food & Beverage");
        assert!(prompt.contains("Business Idea: A subscription box for artisanal coffee"));
        assert!(prompt.contains("Industry: Food & Beverage"));
    }

    #[test]
    fn prompt_enumerates_all_nine_fields() {
        let prompt = build_prompt("idea", "industry");
        for field in FIELD_NAMES {
            assert!(prompt.contains(field), "prompt should name {field}");
        }
    }

    #[test]
    fn prompt_demands_bare_json() {
        let prompt = build_prompt("idea", "industry");
        assert!(prompt.contains("ONLY valid JSON"));
        assert!(prompt.contains("no code blocks"));
    }
}
