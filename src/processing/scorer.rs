//! Match scoring between resume and job skills

use crate::processing::skills::SkillSet;

/// Skills the resume shares with the job
pub fn matching_skills(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillSet {
    resume_skills.intersection(job_skills)
}

/// Percentage of job skills present in the resume, rounded to two decimals.
/// Zero when the job lists no known skills.
pub fn score(resume_skills: &SkillSet, job_skills: &SkillSet) -> f64 {
    if job_skills.is_empty() {
        return 0.0;
    }

    let matched = matching_skills(resume_skills, job_skills).len() as f64;
    round2(matched / job_skills.len() as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
