//! Canonical portfolio story that ships as the reference content.
//!
//! Only the scene graph shape matters to the engine; operators are free to
//! replace this with their own narrative. Scene ids are stable and referenced
//! by the integration tests.

use crate::story::types::{
    Choice, ChoiceCondition, EnterEffect, ItemCatalog, Scene, UnlockRule,
};
use crate::story::{Story, StoryError};

/// Scene where every session begins and where `home`/`back` commands return.
pub const START_SCENE_ID: &str = "start";

/// Hidden area revealed after crossing the first item threshold.
pub const HIDDEN_SCENE_ID: &str = "hidden_scene";

/// Final secret area revealed after crossing the second item threshold.
pub const ULTIMATE_SCENE_ID: &str = "ultimate_scene";

/// Items needed before the hidden area unlocks.
pub const HIDDEN_THRESHOLD: usize = 3;

/// Items needed before the ultimate area unlocks.
pub const ULTIMATE_THRESHOLD: usize = 6;

/// Course listing for one academic term, rendered by the term scenes'
/// on-enter announcements.
pub fn courses_for_term(term: &str) -> Vec<&'static str> {
    match term {
        "113-1" => vec![
            "Programming",
            "Data Structures",
            "Calculus",
            "Linear Algebra",
            "English",
            "General Education",
        ],
        "113-2" => vec![
            "Algorithms",
            "Database Systems",
            "Operating Systems",
            "Probability and Statistics",
            "English",
            "General Education",
        ],
        "114-1" => vec![
            "Software Engineering",
            "Network Programming",
            "Artificial Intelligence",
            "Information Security",
            "English",
            "General Education",
        ],
        _ => Vec::new(),
    }
}

fn term_announcement(term: &str) -> EnterEffect {
    let mut lines = vec![format!("{} term courses:", term)];
    lines.extend(courses_for_term(term).into_iter().map(|c| format!("  - {}", c)));
    EnterEffect::Announce { lines }
}

fn portfolio_items() -> ItemCatalog {
    ItemCatalog::new()
        .with_item(
            "electric_beat",
            "Electric Beat",
            "The pulse of electronic music moves you. You gained an Electric Beat!",
        )
        .with_item(
            "soul_melody",
            "Soul Melody",
            "The duo's lyrics strike a chord deep inside. You gained a Soul Melody!",
        )
        .with_item(
            "romantic_note",
            "Romantic Note",
            "The elegance of French musical theatre charms you. You gained a Romantic Note!",
        )
        .with_item(
            "code_fragment",
            "Code Fragment",
            "You picked up a new programming trick. You gained a Code Fragment!",
        )
        .with_item(
            "wisdom_crystal",
            "Wisdom Crystal",
            "Your knowledge stretches a little further. You gained a Wisdom Crystal!",
        )
        .with_item(
            "creative_spark",
            "Creative Spark",
            "A game mechanic clicks into place in your head. You gained a Creative Spark!",
        )
        .with_item(
            "inspiration_light",
            "Light of Inspiration",
            "You found the hidden Light of Inspiration! It will brighten every project you build.",
        )
        .with_item(
            "dream_wings",
            "Wings of Dreams",
            "You earned the final reward: the Wings of Dreams! The whole adventure is complete.",
        )
}

fn unlock_table() -> Vec<UnlockRule> {
    vec![
        UnlockRule {
            threshold: HIDDEN_THRESHOLD,
            unlocks: HIDDEN_SCENE_ID.to_string(),
            message: "You collected enough items to reveal a hidden option!".to_string(),
            notice_delay_ms: 100,
        },
        UnlockRule {
            threshold: ULTIMATE_THRESHOLD,
            unlocks: ULTIMATE_SCENE_ID.to_string(),
            message: "Incredible! Every item found. The ultimate secret is now open!".to_string(),
            notice_delay_ms: 200,
        },
    ]
}

/// Assemble the full reference story: 14 scenes, 8 items, 2 unlock rules.
pub fn portfolio_story() -> Result<Story, StoryError> {
    let mut story = Story::new(START_SCENE_ID, portfolio_items(), unlock_table());

    story.add_scene(
        Scene::new(
            START_SCENE_ID,
            "Welcome to an Adventurer's Portfolio",
            "This portfolio plays as a text adventure. Pick an option to learn more \
about its author.\n\nThe back command returns to the previous page and home returns \
here. Type help at any time; the interests area hides collectible items that open \
secret pages.",
        )
        .with_choice(Choice::navigate("Read the basic introduction", "intro"))
        .with_choice(Choice::navigate("Explore the academic record", "academic"))
        .with_choice(Choice::navigate("Browse project experience", "projects"))
        .with_choice(Choice::navigate("Discover hobbies and interests", "interests"))
        .with_choice(
            Choice::navigate("[Hidden area] (requires 3 collected items)", HIDDEN_SCENE_ID).when(
                ChoiceCondition::SecretUnlocked {
                    scene: HIDDEN_SCENE_ID.to_string(),
                },
            ),
        )
        .with_choice(
            Choice::navigate("[Ultimate secret] (requires 6 collected items)", ULTIMATE_SCENE_ID)
                .when(ChoiceCondition::SecretUnlocked {
                    scene: ULTIMATE_SCENE_ID.to_string(),
                }),
        ),
    )?;

    story.add_scene(
        Scene::new(
            "intro",
            "About Me",
            "Hello! I am a student who loves writing programs.\n\nI study information \
management, after finishing a rather competitive high school, and I enjoy poking \
at every field I can reach. The options below branch into the details:",
        )
        .with_choice(Choice::navigate("Academic background", "academic"))
        .with_choice(Choice::navigate("Project portfolio", "projects"))
        .with_choice(Choice::navigate("Interests", "interests")),
    )?;

    story.add_scene(
        Scene::new(
            "academic",
            "Academic Record",
            "A quick tour of my academic path so far.\n\nDegrees:\n  - Senior high \
school diploma\n  - B.B.A. in Information Management (in progress)\n\nCoursework \
by term:",
        )
        .with_choice(Choice::navigate("Courses from term 113-1", "courses_113_1"))
        .with_choice(Choice::navigate("Courses from term 113-2", "courses_113_2"))
        .with_choice(Choice::navigate("Courses from term 114-1", "courses_114_1")),
    )?;

    story.add_scene(
        Scene::new(
            "courses_113_1",
            "Term 113-1 Courses",
            "Courses taken in term 113-1.\n\nThese laid the groundwork for everything after:",
        )
        .with_on_enter(term_announcement("113-1"))
        .with_choice(Choice::navigate("See other terms", "academic"))
        .with_choice(Choice::navigate("On to the projects", "projects")),
    )?;

    story.add_scene(
        Scene::new(
            "courses_113_2",
            "Term 113-2 Courses",
            "Courses taken in term 113-2.\n\nThis term went deeper into the core of the field:",
        )
        .with_on_enter(term_announcement("113-2"))
        .with_choice(Choice::navigate("See other terms", "academic"))
        .with_choice(Choice::navigate("On to the projects", "projects")),
    )?;

    story.add_scene(
        Scene::new(
            "courses_114_1",
            "Term 114-1 Courses",
            "Courses taken in term 114-1.\n\nThe newest term, and the most specialized so far:",
        )
        .with_on_enter(term_announcement("114-1"))
        .with_choice(Choice::navigate("See other terms", "academic"))
        .with_choice(Choice::navigate("On to the projects", "projects")),
    )?;

    story.add_scene(
        Scene::new(
            "projects",
            "Project Experience",
            "Projects that show what I can build, and how I think while building it:",
        )
        .with_choice(Choice::navigate("The flagship GitHub project", "github_project"))
        .with_choice(Choice::navigate("The masked-face recognition capstone", "mask_recognition")),
    )?;

    story.add_scene(
        Scene::new(
            "github_project",
            "GitHub Project",
            "An academic-quest tracker built with classmates and published on GitHub.\n\n\
Highlights:\n  - A deliberately small, clear architecture\n  - Readable, commented \
code\n  - Features people actually use\n  - Tidy version-control history",
        )
        .with_choice(Choice::navigate("The masked-face recognition capstone", "mask_recognition")),
    )?;

    story.add_scene(
        Scene::new(
            "mask_recognition",
            "Masked-Face Recognition Capstone",
            "A capstone project mixing machine learning with image processing.\n\n\
Technical notes:\n  - Deep-learning model for face recognition\n  - Works on faces \
wearing masks\n  - Real-time video processing\n  - High recognition accuracy\n\n\
It taught me computer vision, image pipelines, and how models are actually \
trained and tuned.",
        )
        .with_choice(Choice::navigate("The flagship GitHub project", "github_project")),
    )?;

    story.add_scene(
        Scene::new(
            "interests",
            "My Interests",
            "Music is the constant companion to my programming. It is where most of \
my ideas come from:",
        )
        .with_choice(Choice::navigate("My taste in music", "music_taste"))
        .with_choice(Choice::navigate("Other interests", "other_interests")),
    )?;

    story.add_scene(
        Scene::new(
            "music_taste",
            "A World of Music",
            "Three kinds of music follow me everywhere:\n\nElectronic\n  - Rhythm and \
a sense of the future\n  - My focus soundtrack while coding\n\nJ-pop\n  - One duo's \
lyrics and melodies in particular\n  - The best companion for studying\n\nFrench \
musicals\n  - Elegant, romantic, theatrical\n  - Fuel for creative work\n\nMusic is \
not just entertainment here; it is where the inspiration starts.",
        )
        .with_choice(Choice::collect("Listen to electronic music", "electric_beat"))
        .with_choice(Choice::collect("Put on the duo's album", "soul_melody"))
        .with_choice(Choice::collect("Experience a French musical", "romantic_note"))
        .with_choice(Choice::navigate("Other interests", "other_interests")),
    )?;

    story.add_scene(
        Scene::new(
            "other_interests",
            "Other Interests",
            "Beyond music:\n\nProgramming\n  - The joy of a problem finally solved\n  \
- Always a new technique to learn\n\nLearning new things\n  - New languages, new \
frameworks, new trends\n  - Pushing at the edge of what I know\n\nGame design\n  - \
Mechanics and player experience\n  - One day: an interactive world of my own",
        )
        .with_choice(Choice::collect("Practice programming", "code_fragment"))
        .with_choice(Choice::collect("Chase new knowledge", "wisdom_crystal"))
        .with_choice(Choice::collect("Sketch a game mechanic", "creative_spark"))
        .with_choice(Choice::navigate("My taste in music", "music_taste")),
    )?;

    story.add_scene(
        Scene::new(
            HIDDEN_SCENE_ID,
            "[Hidden Area]",
            "You found the hidden area! A few things most visitors never learn:\n\n\
Creative habits\n  - The best algorithm ideas arrive late at night\n  - Sometimes \
they are too exciting to sleep on\n\nDaily life\n  - A night owl, sharpest between \
ten and two\n  - Cafe programming with background music, always\n  - An ever-growing \
sticker collection on the laptop lid\n\nDreams\n  - Build software that genuinely \
changes things\n  - Keep going deeper into machine learning",
        )
        .with_choice(Choice::collect(
            "Claim the hidden reward: Light of Inspiration",
            "inspiration_light",
        )),
    )?;

    story.add_scene(
        Scene::new(
            ULTIMATE_SCENE_ID,
            "[Ultimate Secret]",
            "Welcome to the ultimate secret. You collected everything, so here is the \
deepest layer:\n\nThe real me\n  - Programming is an art form as much as a skill\n  \
- Every finished project is a small celebration\n\nPhilosophy\n  - Every problem has \
a solution; it just wants time and patience\n  - Sharing knowledge is the best part \
of engineering\n\nThe goal\n  - Build software that truly helps people\n  - Someday, \
a company of my own\n\nThank you for playing all the way through. This adventure is \
itself one of my projects.",
        )
        .with_choice(Choice::collect("Claim the final reward: Wings of Dreams", "dream_wings"))
        .with_choice(Choice::restart("Start the adventure over")),
    )?;

    Ok(story)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_story_validates() {
        let story = portfolio_story().unwrap();
        assert!(story.validate().is_ok());
        assert_eq!(story.registry().len(), 14);
        assert_eq!(story.items().len(), 8);
    }

    #[test]
    fn unlock_table_matches_reference_thresholds() {
        let story = portfolio_story().unwrap();
        let rules = story.unlock_rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].threshold, HIDDEN_THRESHOLD);
        assert_eq!(rules[0].unlocks, HIDDEN_SCENE_ID);
        assert_eq!(rules[1].threshold, ULTIMATE_THRESHOLD);
        assert_eq!(rules[1].unlocks, ULTIMATE_SCENE_ID);
    }

    #[test]
    fn every_term_scene_announces_its_courses() {
        let story = portfolio_story().unwrap();
        for (id, term) in [
            ("courses_113_1", "113-1"),
            ("courses_113_2", "113-2"),
            ("courses_114_1", "114-1"),
        ] {
            let scene = story.registry().get(id).unwrap();
            match &scene.on_enter {
                Some(EnterEffect::Announce { lines }) => {
                    assert!(lines[0].contains(term));
                    // Heading plus six courses.
                    assert_eq!(lines.len(), 7);
                }
                None => panic!("term scene {} should announce courses", id),
            }
        }
    }

    #[test]
    fn collect_choices_record_their_reward() {
        let story = portfolio_story().unwrap();
        let music = story.registry().get("music_taste").unwrap();
        let rewards: Vec<_> = music
            .choices
            .iter()
            .filter_map(|c| c.reward.as_deref())
            .collect();
        assert_eq!(rewards, vec!["electric_beat", "soul_melody", "romantic_note"]);
    }
}
