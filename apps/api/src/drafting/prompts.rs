// Prompt builders for resume section drafting.
// Each section has a JD-aware and a JD-less variant; summaries also mention the company.

use crate::drafting::{DraftRequest, SectionKind};

/// Used for unknown or missing section types.
pub const GENERIC_DRAFT_PROMPT: &str = "Generate professional resume content.";

pub fn build_draft_prompt(request: &DraftRequest) -> String {
    let level = request.experience_level.as_str();
    let jd = non_blank(&request.job_description);

    match request.section {
        SectionKind::Summary => match (jd, non_blank(&request.company_name)) {
            (Some(jd), Some(company)) => format!(
                "Write a professional summary for a resume for a {level} applying to {company}. \
                Job description: {jd}. Keep it concise (3-4 sentences) and highlight relevant skills and experience."
            ),
            (Some(jd), None) => format!(
                "Write a professional summary for a resume for a {level}. \
                Job description: {jd}. Keep it concise (3-4 sentences) and highlight relevant skills and experience."
            ),
            (None, _) => format!(
                "Write a professional summary for a {level} position. \
                Keep it concise (3-4 sentences), generic, and highlight common skills and professional traits."
            ),
        },
        SectionKind::Skills => match jd {
            Some(jd) => format!(
                "Based on this job description: {jd}, suggest 10-15 relevant technical and soft skills \
                for a {level}. Return only the skills as a comma-separated list."
            ),
            None => format!(
                "Suggest 10-15 common technical and soft skills for a {level} in the tech industry. \
                Return only the skills as a comma-separated list."
            ),
        },
        SectionKind::Experience => {
            let title = request.job_title.as_str();
            match jd {
                Some(jd) => format!(
                    "Write 3-4 professional bullet points for a {title} position that align with this \
                    job description: {jd}. Focus on achievements and quantifiable results. \
                    Experience level: {level}."
                ),
                None => format!(
                    "Write 3-4 professional bullet points for a {title} position. \
                    Focus on achievements and quantifiable results. Experience level: {level}."
                ),
            }
        }
        SectionKind::Project => {
            let name = request.project_name.as_str();
            let tech = request.technologies.as_str();
            match jd {
                Some(jd) => format!(
                    "Write a concise project description (2-3 sentences) for a project named \"{name}\" \
                    using technologies: {tech}. Make it relevant to this job description: {jd}. \
                    Focus on impact and technical skills."
                ),
                None => format!(
                    "Write a concise project description (2-3 sentences) for a project named \"{name}\" \
                    using technologies: {tech}. Focus on impact and technical skills."
                ),
            }
        }
        SectionKind::Other => GENERIC_DRAFT_PROMPT.to_string(),
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
