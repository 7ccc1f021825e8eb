use crate::models::resume::{
    EducationEntry, ExperienceEntry, Links, PersonalInfo, ProjectEntry, ResumeDocument, Skills,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in example document for a quick start.
pub fn sample_document() -> ResumeDocument {
    ResumeDocument {
        personal_info: PersonalInfo {
            name: "Alex Johnson".to_string(),
            email: "alex.j@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            location: "Bengaluru, India".to_string(),
        },
        summary: "Passionate Full Stack Developer with 3+ years of experience in building \
                  scalable web applications. Expert in React, Node.js, and cloud architecture. \
                  Successfully optimized database queries resulting in a 40% reduction in latency."
            .to_string(),
        education: vec![EducationEntry {
            level: "Undergraduate".to_string(),
            institution: "IIT Bombay".to_string(),
            qualification: "B.Tech".to_string(),
            specialization: "Computer Science".to_string(),
            year: "2021".to_string(),
            grade_type: "CGPA".to_string(),
            grade_value: "8.5 / 10".to_string(),
            ..Default::default()
        }],
        experience: vec![ExperienceEntry {
            company: "TechCorp Solutions".to_string(),
            role: "Senior Developer".to_string(),
            period: "2021 - Present".to_string(),
            description: "• Led a team of 5 to develop a cloud-native ERP system.\n\
                          • Improved deployment speed by 25% using Docker and CI/CD pipelines."
                .to_string(),
        }],
        projects: vec![
            ProjectEntry {
                name: "AI Resume Builder".to_string(),
                description: "Real-time resume generator with ATS optimization scoring. \
                              Reached 100+ stars on GitHub."
                    .to_string(),
                tech_stack: strings(&["React", "Vite", "Tailwind CSS", "Lucide React"]),
                live_url: "https://resume-ai.demo".to_string(),
                github_url: "https://github.com/alex/rb".to_string(),
            },
            ProjectEntry {
                name: "E-commerce API".to_string(),
                description: "Scalable backend handling 10k requests/min. \
                              Implemented advanced caching strategies."
                    .to_string(),
                tech_stack: strings(&["Node.js", "Redis", "PostgreSQL"]),
                live_url: String::new(),
                github_url: "https://github.com/alex/api".to_string(),
            },
        ],
        skills: Skills {
            technical: strings(&["TypeScript", "React", "Node.js", "PostgreSQL", "GraphQL"]),
            soft: strings(&["Team Leadership", "Problem Solving", "Communication"]),
            tools: strings(&["Git", "Docker", "AWS", "Figma"]),
        },
        links: Links {
            github: "https://github.com/alexj".to_string(),
            linkedin: "https://linkedin.com/in/alexj".to_string(),
        },
    }
}
