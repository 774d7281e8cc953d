// src/domain/generator.rs

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::domain::{Job, JobType, SalaryRange};

pub const DEFAULT_COUNT: usize = 55;

const COMPANIES: [&str; 20] = [
    "TechCorp",
    "InnovateLab",
    "DataFlow",
    "CloudNine",
    "PixelPerfect",
    "CodeCraft",
    "ByteWise",
    "QuantumLeap",
    "SynergyTech",
    "FutureSoft",
    "NexGen",
    "CyberPulse",
    "Streamline",
    "Elevate",
    "Velocity",
    "Catalyst",
    "Horizon",
    "Apex",
    "Zenith",
    "Momentum",
];

const TITLES: [&str; 20] = [
    "Senior Frontend Developer",
    "Full Stack Engineer",
    "React Developer",
    "Backend Engineer",
    "DevOps Engineer",
    "Data Scientist",
    "UX Designer",
    "Product Manager",
    "Machine Learning Engineer",
    "Cloud Architect",
    "Mobile Developer",
    "Security Engineer",
    "QA Engineer",
    "Tech Lead",
    "Software Architect",
    "UI Developer",
    "Node.js Developer",
    "Python Developer",
    "Java Developer",
    "Go Developer",
];

const LOCATIONS: [&str; 12] = [
    "San Francisco, CA",
    "New York, NY",
    "Seattle, WA",
    "Austin, TX",
    "Boston, MA",
    "Denver, CO",
    "Chicago, IL",
    "Los Angeles, CA",
    "Miami, FL",
    "Portland, OR",
    "Remote",
    "Atlanta, GA",
];

/// Full skill pool, also what a filter UI offers as checkboxes.
pub const ALL_SKILLS: [&str; 20] = [
    "React",
    "TypeScript",
    "Node.js",
    "Python",
    "AWS",
    "Docker",
    "Kubernetes",
    "GraphQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Go",
    "Java",
    "Rust",
    "Next.js",
    "Vue.js",
    "Angular",
    "Tailwind CSS",
    "Figma",
    "Git",
];

const DESCRIPTION: &str = "We are looking for a talented professional to join \
our team. This role offers exciting opportunities for growth and innovation \
in a dynamic environment.";

/// Generate `count` mock jobs from the shared thread rng.
pub fn generate(count: usize) -> Vec<Job> {
    generate_with(&mut thread_rng(), count)
}

/// Deterministic variant for reproducible collections.
pub fn generate_seeded(count: usize, seed: u64) -> Vec<Job> {
    generate_with(&mut StdRng::seed_from_u64(seed), count)
}

fn generate_with<R: Rng>(rng: &mut R, count: usize) -> Vec<Job> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let company = *COMPANIES.choose(rng).unwrap();

            // Salary max is min plus a positive extra, so min <= max holds
            // by construction.
            let min = rng.gen_range(60..160) * 1000;
            let extra = rng.gen_range(20..70) * 1000;

            let skill_count = rng.gen_range(2..=5);
            let skills: Vec<String> = ALL_SKILLS
                .choose_multiple(rng, skill_count)
                .map(|s| s.to_string())
                .collect();

            // Only ever in the past: 0..30 whole days before now.
            let days_ago = rng.gen_range(0..30);

            Job {
                id: format!("job-{}", i + 1),
                title: TITLES.choose(rng).unwrap().to_string(),
                company: company.to_string(),
                location: LOCATIONS.choose(rng).unwrap().to_string(),
                salary: SalaryRange::new(min, min + extra),
                skills,
                match_score: rng.gen_range(60..=98),
                job_type: *JobType::ALL.choose(rng).unwrap(),
                posted_date: now - Duration::days(days_ago),
                experience: rng.gen_range(0..=9),
                description: DESCRIPTION.to_string(),
                logo: format!(
                    "/placeholder.svg?height=48&width=48&query={company} tech company logo"
                ),
            }
        })
        .collect()
}

/// Distinct locations in first-seen order, for populating the location facet.
pub fn unique_locations(jobs: &[Job]) -> Vec<String> {
    let mut seen = Vec::new();
    for job in jobs {
        if !seen.contains(&job.location) {
            seen.push(job.location.clone());
        }
    }
    seen
}
