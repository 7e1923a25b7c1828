//! Reference postings the board starts with.

use chrono::{DateTime, Duration, Utc};

use super::id::JobId;
use super::model::Job;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The six reference postings, ids 1 through 6, with `createdAt` spread
/// over the last few days relative to `now`.
pub fn seed_jobs(now: DateTime<Utc>) -> Vec<Job> {
    vec![
        Job {
            id: JobId(1),
            title: "Senior Frontend Engineer".to_string(),
            company: "Stripe".to_string(),
            category: "Engineering".to_string(),
            employment_type: "Full-time".to_string(),
            mode: "Remote".to_string(),
            location: "Remote".to_string(),
            level: "Senior".to_string(),
            salary_min: 160,
            salary_max: 210,
            logo: "💳".to_string(),
            tags: strings(&["React", "TypeScript", "GraphQL", "AWS"]),
            featured: true,
            hot: false,
            posted_days: 1,
            description: "Join Stripe's financial infrastructure platform team building user-facing products used by millions of developers worldwide.".to_string(),
            requirements: strings(&[
                "5+ years of experience with modern JavaScript/TypeScript",
                "Deep expertise in React and its ecosystem",
                "Experience building performant, accessible web interfaces",
                "Familiarity with GraphQL and REST APIs",
            ]),
            benefits: strings(&[
                "💻 Remote-first",
                "🏥 Top-tier Health",
                "📈 Equity Package",
                "🌴 Unlimited PTO",
                "🎓 Learning Budget",
            ]),
            created_at: now - Duration::days(1),
        },
        Job {
            id: JobId(2),
            title: "Product Designer — Mobile".to_string(),
            company: "Figma".to_string(),
            category: "Design".to_string(),
            employment_type: "Full-time".to_string(),
            mode: "Hybrid".to_string(),
            location: "San Francisco, CA".to_string(),
            level: "Mid Level".to_string(),
            salary_min: 130,
            salary_max: 170,
            logo: "🎨".to_string(),
            tags: strings(&["Figma", "iOS", "Android", "UX Research", "Prototyping"]),
            featured: true,
            hot: true,
            posted_days: 0,
            description: "Shape the future of Figma's mobile experience by leading design for our iOS and Android apps.".to_string(),
            requirements: strings(&[
                "4+ years of product design experience",
                "Portfolio demonstrating strong mobile design skills",
                "Proficiency in Figma",
                "Experience running user research sessions",
            ]),
            benefits: strings(&[
                "🎨 Creative Freedom",
                "🏥 Full Benefits",
                "📈 Competitive Equity",
                "🌍 Hybrid Work",
            ]),
            created_at: now,
        },
        Job {
            id: JobId(3),
            title: "Staff Software Engineer — Backend".to_string(),
            company: "Notion".to_string(),
            category: "Engineering".to_string(),
            employment_type: "Full-time".to_string(),
            mode: "Remote".to_string(),
            location: "Remote".to_string(),
            level: "Lead / Staff".to_string(),
            salary_min: 220,
            salary_max: 280,
            logo: "📝".to_string(),
            tags: strings(&["Go", "Kubernetes", "PostgreSQL", "gRPC", "Distributed Systems"]),
            featured: false,
            hot: true,
            posted_days: 2,
            description: "Drive the technical direction of Notion's backend platform and tackle the hardest scaling challenges.".to_string(),
            requirements: strings(&[
                "8+ years of backend engineering experience",
                "Expert-level Go or similar systems language",
                "Proven experience at large-scale distributed systems",
                "Track record of technical leadership across teams",
            ]),
            benefits: strings(&[
                "🏠 Remote First",
                "🏥 Comprehensive Health",
                "💰 Top-of-market Salary",
                "📈 Generous Equity",
            ]),
            created_at: now - Duration::days(2),
        },
        Job {
            id: JobId(4),
            title: "Data Scientist — ML Platform".to_string(),
            company: "Airbnb".to_string(),
            category: "Data".to_string(),
            employment_type: "Full-time".to_string(),
            mode: "Hybrid".to_string(),
            location: "San Francisco, CA".to_string(),
            level: "Senior".to_string(),
            salary_min: 175,
            salary_max: 230,
            logo: "🏠".to_string(),
            tags: strings(&["Python", "PyTorch", "Spark", "SQL", "A/B Testing"]),
            featured: false,
            hot: false,
            posted_days: 3,
            description: "Build the intelligence layer that powers host recommendations, pricing algorithms, and guest matching.".to_string(),
            requirements: strings(&[
                "5+ years of industry data science experience",
                "Proficiency in Python and ML frameworks",
                "Strong statistics and experimental design background",
                "Experience with large-scale data pipelines",
            ]),
            benefits: strings(&[
                "✈️ Travel Credits",
                "🏥 Health & Dental",
                "📈 RSU Package",
                "🌍 Hybrid Flex",
            ]),
            created_at: now - Duration::days(3),
        },
        Job {
            id: JobId(5),
            title: "Growth Marketing Manager".to_string(),
            company: "Linear".to_string(),
            category: "Marketing".to_string(),
            employment_type: "Full-time".to_string(),
            mode: "Remote".to_string(),
            location: "Remote".to_string(),
            level: "Mid Level".to_string(),
            salary_min: 110,
            salary_max: 145,
            logo: "⚡".to_string(),
            tags: strings(&["SEO", "Content Marketing", "Analytics", "PLG", "Copywriting"]),
            featured: false,
            hot: false,
            posted_days: 4,
            description: "Own acquisition channels and help us reach more engineering teams worldwide through content and PLG.".to_string(),
            requirements: strings(&[
                "3+ years in B2B SaaS growth marketing",
                "Strong SEO and content marketing background",
                "Experience with PLG (product-led growth) motions",
                "Excellent writing and communication skills",
            ]),
            benefits: strings(&[
                "🌐 Fully Remote",
                "🏥 Health Benefits",
                "📈 Equity",
                "💻 Top Equipment",
            ]),
            created_at: now - Duration::days(4),
        },
        Job {
            id: JobId(6),
            title: "Site Reliability Engineer".to_string(),
            company: "Cloudflare".to_string(),
            category: "Engineering".to_string(),
            employment_type: "Full-time".to_string(),
            mode: "Remote".to_string(),
            location: "Remote".to_string(),
            level: "Senior".to_string(),
            salary_min: 170,
            salary_max: 220,
            logo: "☁️".to_string(),
            tags: strings(&["Kubernetes", "Terraform", "Go", "Prometheus", "Linux"]),
            featured: false,
            hot: true,
            posted_days: 0,
            description: "Keep Cloudflare's global network handling 20%+ of all internet traffic running at 99.99% uptime.".to_string(),
            requirements: strings(&[
                "5+ years of SRE or DevOps experience",
                "Expert-level Kubernetes and container orchestration",
                "Strong proficiency in Go or Python for automation",
                "Experience with large-scale observability systems",
            ]),
            benefits: strings(&[
                "🌐 Fully Remote",
                "🏥 Top Insurance",
                "📈 RSUs",
                "💻 $1k Home Office",
            ]),
            created_at: now,
        },
    ]
}
