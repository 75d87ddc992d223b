//! Prompt construction for track name generation

use super::request::{GenerationRequest, Style};

pub const SYSTEM_PROMPT: &str = "You are a creative assistant generating techno track names.";

const OUTPUT_INSTRUCTION: &str =
    "Output ONLY the track names in a numbered list, without any descriptions or explanations.";

const SERIOUS_DESCRIPTION: &str = "Names that evoke themes related to science, medicine, \
psychology, warfare, historical events, space, philosophy, technology, etc. These names should \
be intriguing, memorable, and potentially reference niche or profound concepts. Examples: \
Infinite Extension, Spiral Galaxy, Signal Path, Value Of Icons, Mind Field, Primal Fear, The \
Fall Of Babylon, Substance Abuse, Quantum Entanglement, Chronosleep, Synaptic Resonance, The \
Last Archive, Elysian Fields, Axiom Protocol, Dark Matter Halos, Sentient Algorithm.";

const NONSERIOUS_DESCRIPTION: &str = "Names that are humorous, absurd, playful, or \
unconventional, providing a stark contrast to the 'serious' category. Examples: Drop Your \
Pants, Hard Being Hot, Russian Porn Magazine, Satan Was A Babyboomer, Eating Concrete, My Cat \
Wrote This, Disco Pickle, Existential Traffic Jam, Keyboard Cat's Revenge, Schrödinger's \
Lunchbox, Glitchy Banana, The Algorithm Is Drunk, Laser Toaster.";

/// Canned description of a style's tone with example names
pub fn style_description(style: Style) -> &'static str {
    match style {
        Style::Serious => SERIOUS_DESCRIPTION,
        Style::NonSerious => NONSERIOUS_DESCRIPTION,
    }
}

/// Build the user prompt for a request
pub fn build_prompt(request: &GenerationRequest) -> String {
    match request {
        GenerationRequest::Example { example } => format!(
            "Generate 10 techno track names similar to: {example}. {OUTPUT_INSTRUCTION}"
        ),
        GenerationRequest::Keywords { style, keywords } => format!(
            "Generate 10 techno track names using these keywords: {keywords}\n\n\
             Style description: {}\n\n{OUTPUT_INSTRUCTION}",
            style_description(*style)
        ),
        GenerationRequest::Random { style } => format!(
            "Generate 10 techno track names in this style:\n{}\n\n{OUTPUT_INSTRUCTION}",
            style_description(*style)
        ),
    }
}
