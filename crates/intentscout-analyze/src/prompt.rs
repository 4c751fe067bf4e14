/// Build the per-cluster judgment prompt.
///
/// Samples are embedded as a JSON array so quotes and newlines inside
/// messages cannot break the prompt structure.
pub fn build_analysis_prompt(samples: &[String], taxonomy: &str) -> String {
    let samples_json = serde_json::to_string(samples).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Act as a senior data analyst reviewing a customer-support intent taxonomy.\n\n\
         Here is a cluster of user messages from a customer support chat:\n\
         {samples_json}\n\n\
         Our CURRENT intent map covers:\n\
         {taxonomy}\n\n\
         TASK:\n\
         1. Summarize what these users are asking for.\n\
         2. Decide whether this topic fits CLEARLY into the current intent map.\n\
         3. If it does not (it is a gap or an uncovered sub-topic), propose a NEW intent \
         named as \"Category -> Subcategory\".\n\
         4. Justify the decision in one or two sentences.\n\n\
         Respond with ONLY a JSON object with exactly these fields:\n\
         {{\n  \
           \"summary\": \"short summary of the user need\",\n  \
           \"action\": \"KEEP_EXISTING\" or \"CREATE_NEW\",\n  \
           \"proposed_intent\": \"Category -> Subcategory\" (only when action is CREATE_NEW),\n  \
           \"reason\": \"why\"\n\
         }}",
        samples_json = samples_json,
        taxonomy = taxonomy.trim()
    )
}
