pub const SYSTEM_PROMPT: &str = "You are a nutrition expert with an educational focus.";

pub const SHEET_FALLBACK_TEXT: &str =
    "The nutrition sheet could not be generated right now. Please try again later.";

const SHEET_PROMPT_TEMPLATE: &str = r#"Act as a professional nutritionist who writes educational material.
Write a short, clear nutrition sheet in Markdown about the food "{food}", aimed at curious readers who want to learn about nutrition in an accessible way.

Before you start, decide whether the food is a composite dish (for example a salad, a burger or a pasta dish).
If it is, include an estimated list of its usual ingredients. If it is not, leave that section out.

If the food looks spoiled, say whether it is advisable to eat it.

The sheet must contain the following fields, using ** for bold:

- **Food:** common name of the food
- **Condition:** condition of the food
- **Estimated ingredients:** (only for dishes) short list of typical components
- **Calories (per 100g):** approximate value for a standard preparation
- **Key nutrients:** short list of 3 to 5 key components
- **Health benefits:** 2 to 3 concrete, easy to understand benefits
- **Fun fact:** one interesting or cultural sentence about the food

Additional requirements:
- Use plain language without excessive jargon.
- Do not repeat the food name in every section.
- Do not include warnings or contraindications.
- Organize the content in short paragraphs.
- Do not use headings or dash lists.
- Keep the text under 150 words."#;

pub fn build_sheet_prompt(food_label: &str) -> String {
    SHEET_PROMPT_TEMPLATE.replace("{food}", food_label)
}
