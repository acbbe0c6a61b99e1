//! Static portfolio content: role titles, skills, experience, projects,
//! and contact details. Components read from here so copy edits never
//! touch view code.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Thaw Htoo Zin";
pub const OWNER_EMAIL: &str = "thawhtoozin200811@gmail.com";
pub const OWNER_LOCATION: &str = "Yangon, Myanmar";
pub const OWNER_TAGLINE: &str =
    "Full-stack developer passionate about creating innovative web solutions. \
     Let's build something amazing together!";

/// Titles cycled by the hero typewriter. Must stay non-empty: the
/// typewriter engine rejects an empty list at construction.
pub const ROLE_TITLES: &[&str] = &[
    "Software Developer",
    "FullStack Developer",
    "Web Developer",
    "Mobile Developer",
];

/// Anchor navigation shared by the navbar and the footer quick links.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#"),
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

/// A skill with a proficiency bar.
pub struct Skill {
    pub name: &'static str,
    /// Percentage in `0..=100`.
    pub level: u8,
    /// CSS modifier class selecting the bar gradient.
    pub bar_class: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Laravel", level: 98, bar_class: "skill-bar--rose" },
    Skill { name: "PHP", level: 90, bar_class: "skill-bar--indigo" },
    Skill { name: "JavaScript", level: 85, bar_class: "skill-bar--yellow" },
    Skill { name: "Flutter", level: 80, bar_class: "skill-bar--cyan" },
    Skill { name: "React", level: 80, bar_class: "skill-bar--blue" },
    Skill { name: "Python", level: 72, bar_class: "skill-bar--navy" },
];

pub const OTHER_SKILLS: &[&str] = &[
    "Firebase",
    "Tailwind CSS",
    "MySQL",
    "SQLite",
    "Figma",
    "Postman",
    "Git",
    "Next.js",
    "REST APIs",
    "Framer Motion",
    "Node.js",
];

/// One entry in the experience timeline.
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Full Stack Developer",
        company: "ProTech MM (Family Business)",
        period: "2023 - Present",
        description: "Built internal systems and public websites for clients using Laravel, \
                      Flutter, and Firebase. Led full-stack development and deployed to cloud \
                      servers.",
        tech: &["Laravel", "Flutter", "Firebase", "Tailwind CSS"],
    },
    Experience {
        title: "Software Developer (Remote)",
        company: "Digital Genius (Thailand)",
        period: "2025 - Present",
        description: "Solo dev role for crypto/forex alert app. Built Flutter frontend and \
                      secure Python backend with WebSocket support. Real-time alert system in \
                      production.",
        tech: &["Flutter", "Python", "Supabase", "WebSockets"],
    },
    Experience {
        title: "Web Developer",
        company: "Freelance Clients",
        period: "2023 - 2025",
        description: "Delivered responsive and modern portfolio, company, and service \
                      websites. Specialized in animated UI/UX with Tailwind and React.",
        tech: &["React", "Tailwind CSS", "JavaScript", "Figma"],
    },
    Experience {
        title: "Intern Developer",
        company: "Shwe Phone Hein Agency",
        period: "2021 - 2022",
        description: "Helped design and deploy an agency website. Worked with legacy PHP \
                      systems and migrated parts to Laravel.",
        tech: &["PHP", "Laravel", "MySQL"],
    },
];

/// Quick stat shown on the About tab.
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const QUICK_STATS: &[Stat] = &[
    Stat { number: "2+", label: "Years Experience" },
    Stat { number: "4+", label: "Projects Completed" },
    Stat { number: "98%", label: "Client Satisfaction" },
];

/// A showcased project card.
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub live: Option<&'static str>,
    pub github: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "ProTechMM Official Website",
        description: "Corporate site for a tech training and web solutions company. Includes \
                      course listing, contact forms, dynamic service modules, and responsive \
                      UI.",
        tech: &["Laravel", "Tailwind CSS", "MySQL"],
        live: Some("https://protechmm.com"),
        github: None,
    },
    Project {
        title: "Shwe Phone Hein Agency",
        description: "Recruitment agency website that enables Burmese job seekers to apply \
                      for overseas positions. One of the best recruitment agencies in \
                      Myanmar.",
        tech: &["Laravel", "JavaScript", "Bootstrap"],
        live: Some("https://shwebhonehein.com"),
        github: Some("https://github.com/ThawHtooZin/Shwe-Bhone-Hein"),
    },
    Project {
        title: "Asoka Buddhist Studies",
        description: "A Buddhist education web application built for students to study and \
                      learn about Buddhism. Features an admin dashboard, discussion forums \
                      with online meetings, and a video-based learning system.",
        tech: &["Laravel", "Livewire", "Tailwind CSS", "MySQL"],
        live: Some("https://asokabuddhiststudies.com"),
        github: Some("https://github.com/ThawHtooZin/asoka"),
    },
    Project {
        title: "Digital Genius E-Library App",
        description: "Feature-rich mobile app for reading eBooks (EPUB), listening to \
                      audiobooks, and downloading content for offline access. Supports both \
                      free and paid digital books with a focus on performance and \
                      accessibility.",
        tech: &["Flutter", "Firebase", "Hive", "Supabase"],
        live: None,
        github: Some("https://github.com/waiyan112/digitalgeinus-apk"),
    },
];

/// External profile link.
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", url: "https://github.com/ThawHtooZin", icon: "\u{1F419}" },
    SocialLink {
        name: "Email",
        url: "mailto:thawhtoozin200811@gmail.com",
        icon: "\u{1F4E7}",
    },
    SocialLink { name: "Telegram", url: "https://t.me/ThawHtooZinTommy", icon: "\u{1F4F1}" },
];
