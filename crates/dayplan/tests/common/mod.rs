#![allow(dead_code)]

use dayplan_summarize::split_sentences;

pub const AI_ARTICLE: &str = "Artificial intelligence (AI) is intelligence demonstrated by machines, as opposed to the natural intelligence displayed by animals including humans. AI applications include advanced web search engines (e.g., Google), recommendation systems (used by YouTube, Amazon and Netflix), understanding human speech (such as Siri and Alexa), self-driving cars (e.g., Tesla), automated decision-making and competing at the highest level in strategic game systems (such as chess and Go). As machines become increasingly capable, tasks considered to require \"intelligence\" are often removed from the definition of AI, a phenomenon known as the AI effect. For instance, optical character recognition is frequently excluded from things considered to be AI, having become a routine technology.";

pub const ETHICS: &str = "AI is great. It helps many fields. However, it raises ethical concerns that must be addressed carefully by researchers. Some critics say it is overhyped.";

pub fn sample_texts() -> Vec<String> {
    vec![
        AI_ARTICLE.to_string(),
        ETHICS.to_string(),
        "word ".repeat(200),
        "Short one. Short two. Short three. Short four. Short five. Short six.".to_string(),
        "Why?! Because we must. Really... The study found a key result. Done.".to_string(),
        "  Leading and trailing space matters.   Another line here!\n\nNew paragraph?  Yes.  "
            .to_string(),
        "Übung macht den Meister. Das Ergebnis ist wichtig! Warum? Darum. Ende gut, alles gut."
            .to_string(),
        "x".repeat(400),
    ]
}

/// Sentences at `indices`, joined the way the summarizer joins them
pub fn join_selected(text: &str, indices: &[usize]) -> String {
    let sentences = split_sentences(text.trim());
    indices
        .iter()
        .map(|&i| sentences[i].text)
        .collect::<Vec<_>>()
        .join(" ")
}
