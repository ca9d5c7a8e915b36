//! LLM prompt for action item extraction

/// Builds the extraction prompt sent as a single user message
pub struct PromptBuilder<'a> {
    text: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder for the given note text
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Build the complete extraction prompt
    ///
    /// The note text is embedded verbatim after the instructions.
    pub fn build(&self) -> String {
        let mut prompt = String::with_capacity(EXTRACTION_INSTRUCTIONS.len() + self.text.len() + 8);
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\nText:\n");
        prompt.push_str(self.text);
        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = "Extract all action items from the following text. \
Action items are tasks, to-dos, or things that need to be done. \
Return each action item as a concise, standalone string. \
If there are no action items, return an empty list.";
