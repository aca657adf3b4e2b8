// Prompt builders for ATS suggestions.
// User-supplied text is spliced in with format! so braces inside a resume or JD
// are never mistaken for template slots.

/// Closing instruction shared by both prompt variants.
fn suggestion_instruction(count: usize, goal: &str) -> String {
    format!(
        "Provide exactly {count} specific, actionable improvement suggestions to {goal}. \
        Each suggestion should be one clear sentence. Number them 1-{count}."
    )
}

/// Prompt used when no job description is supplied: general polish only.
pub fn build_general_prompt(experience_level: &str, resume_excerpt: &str, count: usize) -> String {
    format!(
        "Analyze this resume for a {experience_level} position. {instruction}\n\nResume Text: {resume_excerpt}",
        instruction =
            suggestion_instruction(count, "make it more professional and ATS-friendly"),
    )
}

/// Prompt used when a job description is supplied: targets the missing keywords.
pub fn build_targeted_prompt(
    experience_level: &str,
    company_name: &str,
    job_description: &str,
    resume_excerpt: &str,
    missing_keywords: &[String],
    count: usize,
) -> String {
    let company = if company_name.trim().is_empty() {
        String::new()
    } else {
        format!(" at {}", company_name.trim())
    };

    let missing = if missing_keywords.is_empty() {
        String::new()
    } else {
        format!(
            "The resume is missing these keywords: {}\n\n",
            missing_keywords.join(", ")
        )
    };

    format!(
        "Analyze this resume for a {experience_level} position{company}.\n\n\
        Job Description: {job_description}\n\n\
        Resume Text: {resume_excerpt}\n\n\
        {missing}{instruction}",
        instruction = suggestion_instruction(count, "increase the ATS score"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_prompt_mentions_level_and_count() {
        let prompt = build_general_prompt("Senior", "Built things", 5);
        assert!(prompt.starts_with("Analyze this resume for a Senior position."));
        assert!(prompt.contains("exactly 5 specific, actionable"));
        assert!(prompt.contains("professional and ATS-friendly"));
        assert!(prompt.contains("Number them 1-5."));
        assert!(prompt.ends_with("Resume Text: Built things"));
    }

    #[test]
    fn test_targeted_prompt_with_company_and_missing() {
        let missing = vec!["python".to_string(), "kafka".to_string()];
        let prompt = build_targeted_prompt("Mid-level", "Acme", "JD body", "CV body", &missing, 5);
        assert!(prompt.starts_with("Analyze this resume for a Mid-level position at Acme."));
        assert!(prompt.contains("Job Description: JD body"));
        assert!(prompt.contains("Resume Text: CV body"));
        assert!(prompt.contains("The resume is missing these keywords: python, kafka"));
        assert!(prompt.contains("increase the ATS score"));
    }

    #[test]
    fn test_targeted_prompt_without_company_or_missing() {
        let prompt = build_targeted_prompt("Entry", "  ", "JD", "CV", &[], 5);
        assert!(prompt.starts_with("Analyze this resume for a Entry position."));
        assert!(!prompt.contains(" at "));
        assert!(!prompt.contains("missing these keywords"));
    }

    #[test]
    fn test_braces_in_user_text_survive() {
        let prompt = build_targeted_prompt("Senior", "", "{resume}", "{job}", &[], 5);
        assert!(prompt.contains("Job Description: {resume}"));
        assert!(prompt.contains("Resume Text: {job}"));
    }
}
