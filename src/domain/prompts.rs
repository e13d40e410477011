// ============================================================
// Layer 3 — Prompt Templates
// ============================================================
// Fixed instruction text sent to the model in the user turn.
// The segment tokens mark where the candidate span begins and
// ends inside the cropped clip; the processor downstream
// inserts them into the video token stream.

/// Marks the start of the candidate segment inside the clip
pub const SEG_S_TOKEN: &str = "<|seg_start|>";

/// Marks the end of the candidate segment inside the clip
pub const SEG_E_TOKEN: &str = "<|seg_end|>";

/// Assistant answer for a positive checking record
pub const POSITIVE_ANSWER: &str = "Yes.";

/// Assistant answer for a negative checking record
pub const NEGATIVE_ANSWER: &str = "No.";

/// Instruction for the checker role. `{}` is replaced by the query.
pub const CHECKER_PROMPT: &str = concat!(
    "You are acting as the checker now. ",
    "You will be presented a text query describing a moment that potentialy happens in the given video. ",
    "Your task is to identify whether the video segment between <|seg_start|> and <|seg_end|> perfectly covers the moment. ",
    "If the described moment can be seen in the video, please focus on verifying whether the moment starts at <|seg_start|> and ends at <|seg_end|>. ",
    "Respond with 'Yes' if you think the moment boundaries are correct, otherwise 'No'. ",
    "If the described moment cannot be seen in the video, respond with 'No' directly. ",
    "Now I give you the query: '{}'. ",
    "Please think carefully and respond with 'Yes' or 'No' directly."
);

/// Fill the checker template with a query.
pub fn checker_prompt(query: &str) -> String {
    CHECKER_PROMPT.replacen("{}", query, 1)
}

/// The literal assistant answer for a label
pub fn answer_for(positive: bool) -> &'static str {
    if positive {
        POSITIVE_ANSWER
    } else {
        NEGATIVE_ANSWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_prompt_embeds_query() {
        let p = checker_prompt("the man opens the door");
        assert!(p.contains("Now I give you the query: 'the man opens the door'. "));
        assert!(!p.contains("{}"));
        assert!(p.starts_with("You are acting as the checker now. "));
    }

    #[test]
    fn test_template_mentions_segment_tokens() {
        assert!(CHECKER_PROMPT.contains(SEG_S_TOKEN));
        assert!(CHECKER_PROMPT.contains(SEG_E_TOKEN));
    }

    #[test]
    fn test_braces_in_query_are_kept() {
        let p = checker_prompt("a {} b");
        assert!(p.contains("'a {} b'"));
    }

    #[test]
    fn test_answers() {
        assert_eq!(answer_for(true), "Yes.");
        assert_eq!(answer_for(false), "No.");
    }
}
