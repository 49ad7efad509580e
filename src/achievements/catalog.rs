pub const GENERIC_DESCRIPTION: &str = "Congratulations on your sustainability achievement!";
pub const GENERIC_ICON: &str = "🌟";

/// Reward shown alongside every unlocked achievement.
pub const ACHIEVEMENT_POINTS: u32 = 50;

struct CatalogEntry {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        title: "LED Switching Champion",
        icon: "💡",
        description: "You've mastered the art of energy-efficient lighting! Your commitment to LED technology is reducing energy consumption and carbon emissions.",
    },
    CatalogEntry {
        title: "Carbon Calculator Expert",
        icon: "🌱",
        description: "You've successfully calculated your carbon footprint and taken the first step toward a more sustainable future.",
    },
    CatalogEntry {
        title: "ESG Pioneer",
        icon: "🏆",
        description: "Your dedication to environmental, social, and governance principles is making a real difference in the world.",
    },
];

fn lookup(title: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.title == title)
}

pub fn description_for(title: &str) -> &'static str {
    lookup(title).map_or(GENERIC_DESCRIPTION, |entry| entry.description)
}

pub fn icon_for(title: &str) -> &'static str {
    lookup(title).map_or(GENERIC_ICON, |entry| entry.icon)
}

pub fn known_titles() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.title)
}
