//! The development roadmap `jirakit seed` loads into a fresh project.

#[derive(Debug, Clone, Copy)]
pub struct RoadmapItem {
    pub summary: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct RoadmapStory {
    pub item: RoadmapItem,
    pub tasks: &'static [RoadmapItem],
}

#[derive(Debug)]
pub struct RoadmapEpic {
    pub item: RoadmapItem,
    pub stories: &'static [RoadmapStory],
}

const fn item(summary: &'static str, description: &'static str) -> RoadmapItem {
    RoadmapItem {
        summary,
        description,
    }
}

pub static ROADMAP: &[RoadmapEpic] = &[
    RoadmapEpic {
        item: item(
            "Phase 1: Foundation & Core Systems",
            "This phase focuses on setting up the foundation and core systems of the BetterWYD game. Timeline: April 15 - May 15, 2025",
        ),
        stories: &[
            RoadmapStory {
                item: item(
                    "Project Setup & Architecture",
                    "Complete the initial project setup and architecture design for BetterWYD. This includes setting up the core systems framework.",
                ),
                tasks: &[
                    item(
                        "Complete project architecture design",
                        "Design the overall architecture of the game, including core systems, modules, and their interactions.",
                    ),
                    item(
                        "Set up core systems framework",
                        "Implement the basic framework for core game systems, including state management, event system, and object pooling.",
                    ),
                    item(
                        "Implement character controller and basic movement",
                        "Create a character controller with basic movement functionality, including walking, running, and jumping.",
                    ),
                    item(
                        "Design and create database schema for character data",
                        "Design the database schema for storing character data and implement the data access layer.",
                    ),
                ],
            },
            RoadmapStory {
                item: item(
                    "Core Game Systems Implementation",
                    "Implement the core game systems, including inventory, combat, character progression, and UI framework.",
                ),
                tasks: &[
                    item(
                        "Implement inventory system",
                        "Develop a flexible inventory system that supports different item types, stacking, and management operations.",
                    ),
                    item(
                        "Develop basic combat system framework",
                        "Create the framework for the combat system, including attack mechanics, damage calculation, and hit detection.",
                    ),
                    item(
                        "Create character progression system",
                        "Implement character progression mechanics, including leveling, attributes (Strength, Dexterity, Intelligence, Constitution), and experience points.",
                    ),
                    item(
                        "Set up basic UI framework and main menus",
                        "Design and implement the UI framework and create the main game menus, including character selection and options.",
                    ),
                ],
            },
        ],
    },
    RoadmapEpic {
        item: item(
            "Phase 2: Gameplay Implementation",
            "This phase focuses on implementing the core gameplay elements of BetterWYD. Timeline: May 16 - June 15, 2025",
        ),
        stories: &[
            RoadmapStory {
                item: item(
                    "Class System & Combat",
                    "Implement the character class system and enhance the combat mechanics with abilities and skills.",
                ),
                tasks: &[
                    item(
                        "Implement Transknight class",
                        "Create the Transknight class with melee combat specialization, including unique abilities and attributes.",
                    ),
                    item(
                        "Implement Hunter class",
                        "Create the Hunter class with ranged damage dealing capabilities, including unique abilities and attributes.",
                    ),
                    item(
                        "Implement Foema class",
                        "Create the Foema class with magical abilities and spells, including unique abilities and attributes.",
                    ),
                    item(
                        "Implement Beastmaster class",
                        "Create the Beastmaster class with creature summoning and control abilities, including unique abilities and attributes.",
                    ),
                    item(
                        "Develop class-specific abilities and skills",
                        "Implement the various abilities and skills for each character class, including visual effects and animations.",
                    ),
                    item(
                        "Enhance combat system with attacks, skills, and effects",
                        "Expand the combat system to include special attacks, skill usage, and visual/audio effects for combat actions.",
                    ),
                    item(
                        "Create skill tree and progression system",
                        "Implement a skill tree system allowing players to unlock and upgrade their class-specific abilities.",
                    ),
                ],
            },
            RoadmapStory {
                item: item(
                    "World Building & Environment",
                    "Create the game world, including terrain, maps, environmental effects, and day/night cycle.",
                ),
                tasks: &[
                    item(
                        "Develop terrain generation system",
                        "Create a system for generating and rendering terrain with various biomes and features.",
                    ),
                    item(
                        "Create the first playable map based on Kersef continent",
                        "Design and implement the first playable map based on the Kersef continent from the original game.",
                    ),
                    item(
                        "Implement day/night cycle",
                        "Create a day/night cycle system with appropriate lighting and environmental changes.",
                    ),
                    item(
                        "Add environmental effects and ambiance",
                        "Implement environmental effects such as weather, particles, and ambient sounds to enhance immersion.",
                    ),
                ],
            },
        ],
    },
    RoadmapEpic {
        item: item(
            "Phase 3: Polishing & Testing",
            "This phase focuses on polishing the game, implementing multiplayer features, and preparing for testing. Timeline: June 16 - July 15, 2025",
        ),
        stories: &[
            RoadmapStory {
                item: item(
                    "Multiplayer Framework & Social Features",
                    "Implement the multiplayer functionality and social features for player interaction.",
                ),
                tasks: &[
                    item(
                        "Implement basic client-server architecture",
                        "Create the client-server architecture for multiplayer functionality, handling connections and data synchronization.",
                    ),
                    item(
                        "Add player-to-player interaction",
                        "Implement mechanics for players to interact with each other, including proximity detection and interaction options.",
                    ),
                    item(
                        "Develop chat system",
                        "Create a chat system with different channels (global, local, private) for player communication.",
                    ),
                    item(
                        "Create basic guild framework",
                        "Implement a basic guild system allowing players to form groups with shared identity and chat.",
                    ),
                ],
            },
            RoadmapStory {
                item: item(
                    "Testing & Optimization",
                    "Focus on testing, optimization, and bug fixing to prepare for alpha release.",
                ),
                tasks: &[
                    item(
                        "Performance optimization",
                        "Identify and address performance bottlenecks, optimize resource usage, and improve frame rates.",
                    ),
                    item(
                        "Bug fixing",
                        "Identify and fix bugs throughout the game, focusing on critical issues that affect gameplay.",
                    ),
                    item(
                        "Balance adjustments",
                        "Review and adjust game balance, including character classes, skills, progression, and combat mechanics.",
                    ),
                    item(
                        "Prepare for alpha testing",
                        "Set up the infrastructure and processes for alpha testing, including test plans and feedback collection.",
                    ),
                ],
            },
        ],
    },
];

pub fn item_count(roadmap: &[RoadmapEpic]) -> usize {
    roadmap
        .iter()
        .map(|epic| {
            1 + epic
                .stories
                .iter()
                .map(|story| 1 + story.tasks.len())
                .sum::<usize>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roadmap_has_three_phases_with_two_stories_each() {
        assert_eq!(ROADMAP.len(), 3);
        assert!(ROADMAP.iter().all(|epic| epic.stories.len() == 2));
    }

    #[test]
    fn counts_every_item() {
        // 3 epics, 6 stories, 4 + 4 + 7 + 4 + 4 + 4 tasks
        assert_eq!(item_count(ROADMAP), 3 + 6 + 27);
    }
}
