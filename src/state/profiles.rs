//! Team member profile records.
//!
//! DESIGN
//! ======
//! The roster is a closed set, so ids are an enum and the records form a
//! static table. Card links carry `#<id>` targets; anything that does not
//! name a roster member is simply "not found".

#[cfg(test)]
#[path = "profiles_test.rs"]
mod profiles_test;

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberId {
    Jondie,
    Billy,
    Yanmar,
    Nero,
}

impl MemberId {
    pub const ALL: [Self; 4] = [Self::Jondie, Self::Billy, Self::Yanmar, Self::Nero];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Jondie => "jondie",
            Self::Billy => "billy",
            Self::Yanmar => "yanmar",
            Self::Nero => "nero",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }

    /// Anchor target for a card link, e.g. `#jondie`.
    pub fn target(self) -> String {
        format!("#{}", self.slug())
    }
}

/// Everything after the first `#` in a card link's `href`.
///
/// An `href` without a fragment marker names no member and yields `""`.
pub fn target_slug(href: &str) -> &str {
    href.split_once('#').map_or("", |(_, slug)| slug)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

const ROSTER: [(MemberId, Profile); 4] = [
    (
        MemberId::Jondie,
        Profile {
            name: "Jondie Caguioa",
            image: "images/jondie.png",
            description: "Elite frontend IT developer forged in Apex-level secure environments, crafting \
                pixel-perfect, mission-critical interfaces with extreme precision, performance, and resilience, \
                engineered to operate flawlessly under pressure, complexity, and zero-failure conditions.",
        },
    ),
    (
        MemberId::Billy,
        Profile {
            name: "Billy Jay A. Lorenzo",
            image: "images/billy.png",
            description: "Elite backend IT developer forged in Apex-level secure environments, architecting \
                mission-critical, zero-failure systems, hardened APIs, and ultra-scalable infrastructure built to \
                survive extreme loads, precision demands, and unforgiving real-world conditions.",
        },
    ),
    (
        MemberId::Yanmar,
        Profile {
            name: "Yanmar J. Lachica Jr.",
            image: "images/yanmar.png",
            description: "Elite software tester and debugger, trained to detect even the most elusive bugs, \
                ensuring mission-critical systems remain stable under extreme conditions. Expert in stress-testing, \
                automation, and precision validation to guarantee flawless performance in real-world environments.",
        },
    ),
    (
        MemberId::Nero,
        Profile {
            name: "Nero Marron Elazegui",
            image: "images/nero.png",
            description: "Elite technical documenter, skilled in creating clear, precise, and comprehensive \
                documentation for complex IT systems. Adept at translating intricate processes into user-friendly \
                guides, ensuring teams and clients can operate software efficiently and accurately under \
                demanding conditions.",
        },
    ),
];

/// Read-only profile table, built once at startup and shared via context.
#[derive(Clone, Debug)]
pub struct ProfileDirectory {
    entries: HashMap<MemberId, Profile>,
}

impl ProfileDirectory {
    pub fn builtin() -> Self {
        Self { entries: ROSTER.into_iter().collect() }
    }

    pub fn get(&self, id: MemberId) -> Option<&Profile> {
        self.entries.get(&id)
    }

    /// Look up a raw slug. Unknown slugs are `None`, never an error.
    pub fn lookup(&self, slug: &str) -> Option<(MemberId, &Profile)> {
        let id = MemberId::from_slug(slug)?;
        self.get(id).map(|profile| (id, profile))
    }

    /// Members in roster order.
    pub fn members(&self) -> impl Iterator<Item = (MemberId, &Profile)> {
        MemberId::ALL.into_iter().filter_map(|id| self.get(id).map(|p| (id, p)))
    }
}

impl Default for ProfileDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
