#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum MenuItem {
    Continue,
    Map,
    Play,
    Load,
    Sound,
    Look,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 7] = [
        MenuItem::Continue,
        MenuItem::Map,
        MenuItem::Play,
        MenuItem::Load,
        MenuItem::Sound,
        MenuItem::Look,
        MenuItem::Exit,
    ];

    pub const fn text(self) -> &'static str {
        match self {
            MenuItem::Continue => "continue",
            MenuItem::Map => "map",
            MenuItem::Play => "play",
            MenuItem::Load => "load",
            MenuItem::Sound => "sound",
            MenuItem::Look => "look",
            MenuItem::Exit => "exit",
        }
    }
}

pub const TEXT_KILLS: &str = "kills";
pub const TEXT_SAVE_PROMPT: &str = "save? L no yes R";
pub const TEXT_SAVED: &str = "saved";
pub const TEXT_LEVEL_COMPLETE: &str = "level done";

/// Stable releases are `major.minor`; a trailing `d` marks a development
/// build after that release.
pub const VERSION: &str = "1.02d";

pub const INTRO_TEXT: &str = concat!(
    "Year 20XX, technology has advanced to an unimaginable level.",
    "Artificial intelligence and machine learning are what drive our civilization forward.",
    "But the peace did not last long.",
    "The machines have gone rogue.",
    "That is why we have engineered you - our perfect bionic metaverse warrior. ",
    "Grab your gear and bring this army of robotic evil to an end.",
    "You are our only hope.",
);

pub const OUTRO_TEXT: &str = concat!(
    "You have successfully destroyed the virus-infected mainframe, ",
    "the source of the virus and the robotic evil.",
    "The metaverse is saved.",
    "Artificial intelligence is more dangerous and complex than what we have been able to understand.",
    "We now have the opportunity to rebuild the mainframe.",
    "We will make it better and safer. We have the technology.",
    "Long live the technology.",
    "May the technology save us all.",
);

#[cfg(feature = "malware-os-warning")]
pub const MALWARE_WARNING: &str = "MALWARE OS DETECTED";
#[cfg(not(feature = "malware-os-warning"))]
pub const MALWARE_WARNING: &str = "";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_texts() {
        let texts: std::vec::Vec<_> = MenuItem::ALL.iter().map(|i| i.text()).collect();
        assert_eq!(
            texts,
            ["continue", "map", "play", "load", "sound", "look", "exit"]
        );
        assert_eq!(MenuItem::Exit as u8, 6);
    }

    #[test]
    fn test_story_texts_are_single_runs() {
        assert!(INTRO_TEXT.starts_with("Year 20XX"));
        assert!(INTRO_TEXT.contains("level.Artificial"));
        assert!(INTRO_TEXT.ends_with("only hope."));
        assert!(OUTRO_TEXT.contains("mainframe, the source"));
        assert!(OUTRO_TEXT.ends_with("save us all."));
        assert!(!INTRO_TEXT.contains('\n'));
    }

    #[test]
    fn test_malware_warning_follows_feature() {
        assert_eq!(MALWARE_WARNING.is_empty(), !cfg!(feature = "malware-os-warning"));
    }
}
