//! Named body parts and the texture groups they draw with.

/// Number of simulated body parts.
pub const PART_COUNT: usize = 10;

/// One of the ten rectangular segments of the skeleton.
///
/// The discriminant is the part's slot in every per-part array, and
/// [`Part::ALL`] is the fixed draw order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Head = 0,
    Torso,
    LeftUpperArm,
    RightUpperArm,
    LeftForearm,
    RightForearm,
    LeftThigh,
    RightThigh,
    LeftShin,
    RightShin,
}

impl Part {
    /// Every part in declaration (and draw) order.
    pub const ALL: [Part; PART_COUNT] = [
        Part::Head,
        Part::Torso,
        Part::LeftUpperArm,
        Part::RightUpperArm,
        Part::LeftForearm,
        Part::RightForearm,
        Part::LeftThigh,
        Part::RightThigh,
        Part::LeftShin,
        Part::RightShin,
    ];

    /// Array slot for this part.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Part::Head => "head",
            Part::Torso => "torso",
            Part::LeftUpperArm => "left_upper_arm",
            Part::RightUpperArm => "right_upper_arm",
            Part::LeftForearm => "left_forearm",
            Part::RightForearm => "right_forearm",
            Part::LeftThigh => "left_thigh",
            Part::RightThigh => "right_thigh",
            Part::LeftShin => "left_shin",
            Part::RightShin => "right_shin",
        }
    }

    /// Texture group shared by left and right instances of a limb segment.
    pub fn group(self) -> PartGroup {
        match self {
            Part::Head => PartGroup::Head,
            Part::Torso => PartGroup::Torso,
            Part::LeftUpperArm | Part::RightUpperArm => PartGroup::UpperArm,
            Part::LeftForearm | Part::RightForearm => PartGroup::Forearm,
            Part::LeftThigh | Part::RightThigh => PartGroup::Thigh,
            Part::LeftShin | Part::RightShin => PartGroup::Shin,
        }
    }
}

/// Number of texture groups.
pub const GROUP_COUNT: usize = 6;

/// Semantic group used to look up a part's texture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PartGroup {
    Head = 0,
    Torso,
    UpperArm,
    Forearm,
    Thigh,
    Shin,
}

impl PartGroup {
    pub const ALL: [PartGroup; GROUP_COUNT] = [
        PartGroup::Head,
        PartGroup::Torso,
        PartGroup::UpperArm,
        PartGroup::Forearm,
        PartGroup::Thigh,
        PartGroup::Shin,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Texture key as used by asset tables.
    pub fn name(self) -> &'static str {
        match self {
            PartGroup::Head => "head",
            PartGroup::Torso => "torso",
            PartGroup::UpperArm => "upper_arm",
            PartGroup::Forearm => "forearm",
            PartGroup::Thigh => "thigh",
            PartGroup::Shin => "shin",
        }
    }

    pub fn from_name(name: &str) -> Option<PartGroup> {
        PartGroup::ALL.iter().copied().find(|g| g.name() == name)
    }

    /// True for the four limb groups, which share a fallback color.
    pub fn is_limb(self) -> bool {
        !matches!(self, PartGroup::Head | PartGroup::Torso)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_order() {
        for (i, part) in Part::ALL.iter().enumerate() {
            assert_eq!(part.index(), i);
        }
        for (i, group) in PartGroup::ALL.iter().enumerate() {
            assert_eq!(group.index(), i);
        }
    }

    #[test]
    fn forearm_and_shin_have_own_groups() {
        assert_eq!(Part::LeftForearm.group(), PartGroup::Forearm);
        assert_eq!(Part::RightShin.group(), PartGroup::Shin);
        assert_ne!(Part::LeftForearm.group(), Part::LeftUpperArm.group());
        assert_ne!(Part::LeftShin.group(), Part::LeftThigh.group());
    }

    #[test]
    fn group_names_round_trip() {
        assert_eq!(PartGroup::from_name("upper_arm"), Some(PartGroup::UpperArm));
        assert_eq!(PartGroup::from_name("elbow"), None);
    }
}
