use crate::llm::task::Task;

/// Build the instruction sent upstream for a task. The transcript is
/// interpolated verbatim.
pub fn build_prompt(task: Task, transcript: &str) -> String {
    match task {
        Task::Summary => format!(
            "Summarize the following transcript in 3 concise bullet points:\n\n{transcript}"
        ),
        Task::Sentiment => format!(
            "Analyze the sentiment (positive/neutral/negative) of the following transcript:\n\n{transcript}"
        ),
        Task::ActionItems => {
            format!("Extract actionable next steps from the following transcript:\n\n{transcript}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prompt_ends_with_the_transcript() {
        let transcript = "Alice: ship it\nBob: {not a placeholder}";
        for task in Task::ALL {
            let prompt = build_prompt(task, transcript);
            assert!(
                prompt.ends_with(&format!("\n\n{transcript}")),
                "{task} prompt: {prompt}"
            );
        }
    }

    #[test]
    fn prompts_are_task_specific() {
        assert!(build_prompt(Task::Summary, "x").contains("3 concise bullet points"));
        assert!(build_prompt(Task::Sentiment, "x").contains("positive/neutral/negative"));
        assert!(build_prompt(Task::ActionItems, "x").contains("actionable next steps"));
    }

    #[test]
    fn empty_transcript_is_passed_through() {
        assert_eq!(
            build_prompt(Task::ActionItems, ""),
            "Extract actionable next steps from the following transcript:\n\n"
        );
    }
}
