//! Compiled-in portfolio content served whenever the store cannot be read.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::entities::{About, Experience, Project, SocialLinks, Skill, SkillCategory};

fn skill(id: &str, name: &str, category: SkillCategory, proficiency: u8, icon: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category,
        proficiency,
        icon: Some(icon.to_string()),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn midnight_utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    date(y, m, d).and_time(NaiveTime::MIN).and_utc()
}

pub fn fallback_about() -> About {
    About {
        id: "1".to_string(),
        name: "Farman Ullah".to_string(),
        title: "MERN Stack Developer".to_string(),
        location: "Lahore, Pakistan".to_string(),
        email: "farmancs2024@gmail.com".to_string(),
        phone: Some("+92 3499279661".to_string()),
        bio: "Passionate MERN Stack Developer with expertise in MongoDB, Express.js, React.js, \
              and Node.js, along with Next.js and MySQL. Specializing in building scalable RESTful \
              APIs and secure authentication systems(JWT). Proficient in integrating third-party \
              services like Stripe for payments and Cloudinary for media management, while \
              following MVC architecture for clean and maintainable code. Certified in Google IT \
              Support and Node.js, Express.js & MongoDB Bootcamp (Udemy). Eager to contribute to \
              innovative projects and grow in a dynamic software development environment."
            .to_string(),
        avatar: "/profile.png".to_string(),
        social_links: SocialLinks {
            github: Some("https://github.com/FarmanCs".to_string()),
            linkedin: Some("https://www.linkedin.com/in/farman-ullah99/".to_string()),
            twitter: None,
            instagram: None,
            whatsapp: Some("+923499279661".to_string()),
        },
    }
}

pub fn fallback_skills() -> Vec<Skill> {
    use SkillCategory::*;

    vec![
        // MERN core
        skill("1", "MongoDB", Database, 88, "🍃"),
        skill("2", "Express.js", Backend, 90, "🚂"),
        skill("3", "React.js", Frontend, 85, "⚛️"),
        skill("4", "Node.js", Backend, 92, "🟢"),
        // Frontend
        skill("5", "Next.js", Frontend, 80, "⚡"),
        skill("6", "JavaScript", Frontend, 95, "🟨"),
        skill("7", "HTML/CSS", Frontend, 85, "🌐"),
        skill("8", "Bootstrap", Frontend, 80, "🎨"),
        // Backend
        skill("9", "RESTful APIs", Backend, 92, "🔗"),
        skill("10", "JWT Authentication", Backend, 88, "🔐"),
        skill("11", "MVC Architecture", Backend, 90, "🏗️"),
        // Database
        skill("12", "MySQL", Database, 80, "🐬"),
        // DevOps & tools
        skill("13", "GitHub", Devops, 85, "📝"),
        skill("14", "Postman", Devops, 80, "📮"),
        skill("15", "Stripe Payments", Devops, 75, "💳"),
        skill("16", "Cloudinary", Devops, 75, "☁️"),
        // Other
        skill("17", "Microsoft Office", Other, 85, "📄"),
        skill("18", "Cisco Networking", Other, 70, "🌐"),
        skill("19", "Typing Skills", Other, 80, "⌨️"),
    ]
}

pub fn fallback_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Complete MERN Stack Development with Node.js, Express.js, React.js, and MongoDB"
                .to_string(),
            description: "Designed and developed a full-stack MERN application using Node.js, \
                          Express.js, React.js, and MongoDB. Built a RESTful API enabling seamless \
                          communication between the frontend and backend. Implemented JWT-based \
                          authentication and authorization to secure user data and ensure \
                          role-based access control. Utilized MongoDB for efficient database \
                          design, including data modeling, indexing, and query optimization. \
                          Integrated Stripe for secure payment processing and Cloudinary for media \
                          upload and management. Followed MVC architecture to ensure a clean, \
                          scalable, and maintainable codebase."
                .to_string(),
            technologies: strings(&[
                "MongoDB",
                "Express.js",
                "React.js",
                "Node.js",
                "JWT Authentication",
                "Stripe Payments",
                "Cloudinary",
                "MVC Architecture",
            ]),
            image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=600&h=400&fit=crop"
                .to_string(),
            github_url: Some("https://github.com/FarmanCs/Node.js-Advance.git".to_string()),
            live_url: None,
            featured: true,
            created_at: midnight_utc(2024, 1, 15),
        },
        Project {
            id: "2".to_string(),
            title: "React Project Portfolio".to_string(),
            description: "A comprehensive React-based project showcasing modern web development \
                          practices and responsive design principles."
                .to_string(),
            technologies: strings(&["React.js", "JavaScript", "HTML/CSS"]),
            image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=600&h=400&fit=crop"
                .to_string(),
            github_url: Some("https://github.com/FarmanCs/react-project.git".to_string()),
            live_url: None,
            featured: true,
            created_at: midnight_utc(2023, 12, 1),
        },
        Project {
            id: "3".to_string(),
            title: "JavaScript Bankist Project".to_string(),
            description: "A JavaScript-based banking application demonstrating advanced \
                          JavaScript concepts and modern web development techniques."
                .to_string(),
            technologies: strings(&["JavaScript", "HTML/CSS", "DOM Manipulation"]),
            image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=600&h=400&fit=crop"
                .to_string(),
            github_url: Some(
                "https://github.com/FarmanCs/javaScript-bankist-project.git".to_string(),
            ),
            live_url: None,
            featured: false,
            created_at: midnight_utc(2023, 11, 15),
        },
    ]
}

pub fn fallback_experience() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_string(),
            company: "Curious Packet".to_string(),
            position: "Junior MERN Stack Developer".to_string(),
            location: "Lahore, Pakistan".to_string(),
            start_date: date(2025, 4, 24),
            end_date: None,
            current: true,
            description: strings(&[
                "Currently working remotely as a Junior MERN Stack Developer",
                "Gaining practical experience with MongoDB, Express.js, React.js, and Node.js to build and improve web applications",
                "Collaborating with development team to debug issues and optimize full-stack performance",
            ]),
            technologies: strings(&["MongoDB", "Express.js", "React.js", "Node.js", "Next.js"]),
        },
        Experience {
            id: "2".to_string(),
            company: "AAA Digital Company".to_string(),
            position: "Backend Development Intern".to_string(),
            location: "Lahore, Pakistan".to_string(),
            start_date: date(2024, 12, 20),
            end_date: Some(date(2025, 3, 15)),
            current: false,
            description: strings(&[
                "Enhanced skills by working on real-world MERN stack projects using advanced technologies",
                "Integrated Stripe for payment processing and Cloudinary for file uploads",
                "Developed full-stack features using React.js, Next.js, and Node.js",
                "Collaborated with the development team to debug issues and optimize full-stack performance",
                "Significantly boosted MERN stack development knowledge and practical understanding of modern web technologies",
            ]),
            technologies: strings(&[
                "MongoDB",
                "Express.js",
                "React.js",
                "Node.js",
                "Next.js",
                "Stripe",
                "Cloudinary",
            ]),
        },
    ]
}
