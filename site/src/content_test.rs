use super::*;

#[test]
fn role_titles_satisfy_typewriter_precondition() {
    assert!(!ROLE_TITLES.is_empty());
    assert!(ROLE_TITLES.iter().all(|t| !t.trim().is_empty()));
}

#[test]
fn role_titles_construct_a_typewriter() {
    let titles = ROLE_TITLES.iter().map(|s| (*s).to_owned()).collect();
    assert!(fx::typewriter::Typewriter::new(titles).is_ok());
}

#[test]
fn skill_levels_are_percentages() {
    assert!(!SKILLS.is_empty());
    assert!(SKILLS.iter().all(|s| s.level <= 100));
}

#[test]
fn nav_links_are_anchors() {
    assert!(!NAV_LINKS.is_empty());
    assert!(NAV_LINKS.iter().all(|(_, href)| href.starts_with('#')));
}

#[test]
fn every_project_names_its_stack() {
    assert!(!PROJECTS.is_empty());
    for project in PROJECTS {
        assert!(!project.title.is_empty());
        assert!(!project.tech.is_empty(), "{} has no tech list", project.title);
    }
}

#[test]
fn every_project_links_somewhere() {
    for project in PROJECTS {
        assert!(
            project.live.is_some() || project.github.is_some(),
            "{} has no live or repo link",
            project.title
        );
    }
}

#[test]
fn experiences_and_socials_present() {
    assert!(!EXPERIENCES.is_empty());
    assert!(!SOCIAL_LINKS.is_empty());
    assert!(SOCIAL_LINKS.iter().all(|s| !s.url.is_empty()));
}
