use crate::domain::model::{
    CourseworkGroup, Education, Experience, PortfolioContent, Profile, Project, SkillGroup,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn profile() -> Profile {
    Profile {
        name: "Luke Anderson".to_string(),
        headline: "Building reliable systems &".to_string(),
        headline_accent: "liquid‑glass UIs".to_string(),
        intro: "Software engineer focused on Go backends, Kotlin/Compose apps, and cloud‑first architectures. I like clean design, fast feedback, and shipping.".to_string(),
        about: "Honors Computer Engineering student (minor in Physics) at UCF; interests in Quantum Computing, AI/ML, Web, and Computer Architecture. Florida native who enjoys the beach, surfing, martial arts, hiking, and running. Visited 40 states and 8 countries; proud dog‑dad to a Dachshund named Buddy.".to_string(),
        phone: "727‑947‑0370".to_string(),
        email: "lu097697@ucf.edu".to_string(),
        locations: "Orlando, FL · Austin, TX".to_string(),
        highlights: strings(&["Go", "Kotlin", "Jetpack Compose", "React", "Docker", "Google Cloud"]),
        github_url: "https://github.com/landerson7".to_string(),
        linkedin_url: "https://www.linkedin.com/".to_string(),
        legacy_site_url: "https://landerson7.github.io/portfolio_website/".to_string(),
        resume_path: "/resume.pdf".to_string(),
    }
}

fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            organization: "Lutron Electronics Company".to_string(),
            role: "Software Engineer Intern".to_string(),
            location: "Austin, TX".to_string(),
            dates: "May 2025 – Aug 2025".to_string(),
            bullets: strings(&[
                "Built cross‑platform mobile features with Kotlin + Jetpack Compose for Lutron’s smart lighting app.",
                "Collaborated in an Agile team environment (Jira) across sprints and iterations.",
                "Wrote unit tests, contributed design docs, and participated in code reviews.",
            ]),
        },
        Experience {
            organization: "Airmeez Inc.".to_string(),
            role: "Software Engineer Intern".to_string(),
            location: "Remote".to_string(),
            dates: "Jan 2024 – Jul 2024, Jan 2025 – May 2025, Aug 2025 – Current".to_string(),
            bullets: strings(&[
                "Migrated legacy services toward a Dockerized microservice architecture.",
                "Extended telecom connectivity using C++ integrations with SIP servers / SoundHound AI.",
                "Built RESTful Go APIs for resilient data transfer.",
            ]),
        },
        Experience {
            organization: "Necival LLC".to_string(),
            role: "Software Engineer".to_string(),
            location: "Remote".to_string(),
            dates: "Jul 2024 – Feb 2025".to_string(),
            bullets: strings(&[
                "Developed a concurrent cryptocurrency trading system in Go for real‑time execution.",
                "Collaborated on system design, testing, and deployment to improve reliability.",
            ]),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            name: "SIP MWI Go Service".to_string(),
            href: Some("https://landerson7.github.io/portfolio_website/project1.html".to_string()),
            tags: strings(&["Go", "SipGo", "Google Pub/Sub", "GCS", "net/http"]),
            dates: "Jan 2023 – Apr 2024".to_string(),
            summary: "API that converts SIP data to JSON and routes to Google Cloud (Storage + Pub/Sub); notifies SIP users of waiting messages.".to_string(),
        },
        Project {
            name: "Movie Theater Management Programs".to_string(),
            href: Some("https://landerson7.github.io/portfolio_website/project2.html".to_string()),
            tags: strings(&["C", "Data Structures", "BST", "Hash Table", "Recursion"]),
            dates: "Aug 2023 – Nov 2023".to_string(),
            summary: "Ticketing, concessions, projector angle, seating, loyalty program; robust testing and algorithmic implementations.".to_string(),
        },
        Project {
            name: "University Faculty/Staff Manager".to_string(),
            href: Some("https://landerson7.github.io/portfolio_website/project3.html".to_string()),
            tags: strings(&["Java", "OOP"]),
            dates: "Jun 2023 – Aug 2023".to_string(),
            summary: "CRUD system for students and staff; strong OOP design, classes, and encapsulation.".to_string(),
        },
        Project {
            name: "Fit Link".to_string(),
            href: None,
            tags: strings(&["MongoDB", "Express", "Node.js", "React Native", "Google Cloud", "Jest", "Swagger"]),
            dates: "Mar 2025 – Apr 2025".to_string(),
            summary: "Trainer–client backend in Node/Express; Google OAuth + Calendar integration; 100% unit‑test pass rate; live Swagger docs.".to_string(),
        },
        Project {
            name: "Growbitz Bot".to_string(),
            href: None,
            tags: strings(&["Go", "AWS Lightsail", "MySQL"]),
            dates: "Aug 2024 – Feb 2025".to_string(),
            summary: "Crypto bot with concurrent trade exec; +6% profit via Coinbase API; uptime improved from 40% → 99.9% with auto‑restart.".to_string(),
        },
    ]
}

fn skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            label: "Languages".to_string(),
            skills: strings(&["Go", "JavaScript", "Kotlin", "C/C++", "Python", "Java", "PHP", "SQL"]),
        },
        SkillGroup {
            label: "Frameworks".to_string(),
            skills: strings(&["Jetpack Compose", "React", "Express", "SwiftUI"]),
        },
        SkillGroup {
            label: "Tools".to_string(),
            skills: strings(&["AWS Lightsail", "Google Cloud", "Git", "Jira", "Figma", "Swagger", "Docker"]),
        },
    ]
}

fn coursework() -> Vec<CourseworkGroup> {
    vec![
        CourseworkGroup {
            label: "Math & Science".to_string(),
            courses: strings(&[
                "Calculus I–III, Differential Equations",
                "Physics I–II, Mechanics, Wave Mechanics I–II",
                "Chemistry I, Theoretical Methods of Physics",
            ]),
        },
        CourseworkGroup {
            label: "Computer Science".to_string(),
            courses: strings(&[
                "Intro to C; CS I–II (DSA)",
                "Discrete Structures, OOP",
                "Intro to Quantum Computation",
            ]),
        },
        CourseworkGroup {
            label: "Computer / Electrical Engineering".to_string(),
            courses: strings(&[
                "Linear Circuits I–II, Digital Systems",
                "Computer Organization & Architecture",
            ]),
        },
    ]
}

fn education() -> Vec<Education> {
    vec![
        Education {
            school: "University of Central Florida".to_string(),
            degree: "Computer Engineering B.S. (Comprehensive & VLSI), Minor in Physics".to_string(),
            dates: "Aug 2022 – May 2026".to_string(),
            gpa: "3.8".to_string(),
            location: "Orlando, FL".to_string(),
        },
        Education {
            school: "St. Petersburg College".to_string(),
            degree: "Associate’s of Liberal Arts".to_string(),
            dates: "Aug 2020 – May 2022".to_string(),
            gpa: "3.8".to_string(),
            location: "St. Petersburg, FL".to_string(),
        },
    ]
}

/// The content the site ships with.
pub fn shipped() -> PortfolioContent {
    PortfolioContent {
        profile: profile(),
        experiences: experiences(),
        projects: projects(),
        skills: skills(),
        coursework: coursework(),
        education: education(),
    }
}
