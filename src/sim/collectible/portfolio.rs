use super::{CollectibleKind, CollectibleSeed};

const PROJECTS: [(&str, &str, u32, u32); 5] = [
    ("AvukatLLM", "AI/ML", 100, 0xff6b6b),
    ("GoDash", "Go", 80, 0x4ecdc4),
    ("MyYDS", "React", 90, 0x45b7d1),
    ("TYT Platform", "PWA", 85, 0x96ceb4),
    ("LinkedHU", "Node.js", 75, 0xffeaa7),
];

/// (name, level, color); a skill is worth its level in points
const SKILLS: [(&str, u32, u32); 5] = [
    ("JavaScript", 90, 0xf39c12),
    ("Python", 85, 0x3498db),
    ("React", 80, 0x61dafb),
    ("Three.js", 75, 0x000000),
    ("AI/ML", 85, 0xe74c3c),
];

const EXPERIENCES: [(&str, &str, u32, u32); 3] = [
    ("Binary Brain Technology", "Software Intern", 150, 0x9b59b6),
    ("TellUS", "Software Intern", 120, 0x34495e),
    ("Hacettepe University", "Student", 100, 0x2ecc71),
];

/// The stock portfolio: projects, then skills, then experience
#[must_use]
pub fn demo_seeds() -> Vec<CollectibleSeed> {
    let projects = PROJECTS.iter().map(|&(name, tech, points, color)| {
        CollectibleSeed::new(CollectibleKind::Project, name, tech, points, color)
    });

    let skills = SKILLS.iter().map(|&(name, level, color)| {
        CollectibleSeed::new(CollectibleKind::Skill, name, format!("{level}%"), level, color)
    });

    let experiences = EXPERIENCES.iter().map(|&(company, role, points, color)| {
        CollectibleSeed::new(CollectibleKind::Experience, company, role, points, color)
    });

    projects.chain(skills).chain(experiences).collect()
}
