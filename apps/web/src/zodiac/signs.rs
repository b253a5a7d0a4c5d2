//! Static sign metadata and element color schemes.
//!
//! These tables are read-only process-wide constants. Lookups by string id
//! default on miss instead of failing: an unknown sign reads as Aries, an
//! unknown element as Fire.

use serde::Serialize;

use crate::zodiac::Sign;

/// One of the four classical element groupings. Each holds exactly three signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    pub fn from_name(name: &str) -> Option<Element> {
        Element::ALL.into_iter().find(|e| e.name() == name)
    }

    pub fn colors(self) -> &'static ElementColors {
        match self {
            Element::Fire => &FIRE_COLORS,
            Element::Earth => &EARTH_COLORS,
            Element::Air => &AIR_COLORS,
            Element::Water => &WATER_COLORS,
        }
    }
}

/// Display colors for an element: CSS color values used by the reading page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub glow: &'static str,
}

const FIRE_COLORS: ElementColors = ElementColors {
    primary: "#ff6b35",
    secondary: "#f7931e",
    glow: "rgba(255, 107, 53, 0.4)",
};

const EARTH_COLORS: ElementColors = ElementColors {
    primary: "#7cb342",
    secondary: "#558b2f",
    glow: "rgba(124, 179, 66, 0.4)",
};

const AIR_COLORS: ElementColors = ElementColors {
    primary: "#29b6f6",
    secondary: "#0288d1",
    glow: "rgba(41, 182, 246, 0.4)",
};

const WATER_COLORS: ElementColors = ElementColors {
    primary: "#7e57c2",
    secondary: "#5e35b1",
    glow: "rgba(126, 87, 194, 0.4)",
};

/// Color scheme for an element name. Unknown names get the Fire scheme.
pub fn element_colors(element: &str) -> &'static ElementColors {
    Element::from_name(element).unwrap_or(Element::Fire).colors()
}

/// Static metadata for a single sign.
#[derive(Debug, Clone, Serialize)]
pub struct SignInfo {
    pub element: Element,
    pub traits: [&'static str; 4],
    /// Display-only date window, e.g. "Mar 21 - Apr 19".
    pub dates: &'static str,
    pub symbol: &'static str,
    pub constellation: &'static str,
}

impl Sign {
    pub fn info(self) -> &'static SignInfo {
        &SIGN_TABLE[self as usize]
    }
}

/// Metadata for a sign id. Unknown ids fall back to Aries.
pub fn sign_info_or_default(id: &str) -> &'static SignInfo {
    Sign::from_id(id).unwrap_or(Sign::Aries).info()
}

// Indexed by `Sign as usize`; order must follow the enum declaration.
static SIGN_TABLE: [SignInfo; 12] = [
    SignInfo {
        element: Element::Fire,
        traits: ["bold", "ambitious", "energetic", "pioneering"],
        dates: "Mar 21 - Apr 19",
        symbol: "♈",
        constellation: "🐏",
    },
    SignInfo {
        element: Element::Earth,
        traits: ["reliable", "patient", "practical", "devoted"],
        dates: "Apr 20 - May 20",
        symbol: "♉",
        constellation: "🐂",
    },
    SignInfo {
        element: Element::Air,
        traits: ["adaptable", "curious", "expressive", "witty"],
        dates: "May 21 - Jun 20",
        symbol: "♊",
        constellation: "👯",
    },
    SignInfo {
        element: Element::Water,
        traits: ["intuitive", "emotional", "protective", "nurturing"],
        dates: "Jun 21 - Jul 22",
        symbol: "♋",
        constellation: "🦀",
    },
    SignInfo {
        element: Element::Fire,
        traits: ["confident", "dramatic", "generous", "charismatic"],
        dates: "Jul 23 - Aug 22",
        symbol: "♌",
        constellation: "🦁",
    },
    SignInfo {
        element: Element::Earth,
        traits: ["analytical", "practical", "diligent", "modest"],
        dates: "Aug 23 - Sep 22",
        symbol: "♍",
        constellation: "👼",
    },
    SignInfo {
        element: Element::Air,
        traits: ["diplomatic", "gracious", "fair-minded", "social"],
        dates: "Sep 23 - Oct 22",
        symbol: "♎",
        constellation: "⚖️",
    },
    SignInfo {
        element: Element::Water,
        traits: ["passionate", "resourceful", "brave", "mysterious"],
        dates: "Oct 23 - Nov 21",
        symbol: "♏",
        constellation: "🦂",
    },
    SignInfo {
        element: Element::Fire,
        traits: ["optimistic", "adventurous", "philosophical", "honest"],
        dates: "Nov 22 - Dec 21",
        symbol: "♐",
        constellation: "🏹",
    },
    SignInfo {
        element: Element::Earth,
        traits: ["disciplined", "responsible", "ambitious", "practical"],
        dates: "Dec 22 - Jan 19",
        symbol: "♑",
        constellation: "🐐",
    },
    SignInfo {
        element: Element::Air,
        traits: ["progressive", "original", "independent", "humanitarian"],
        dates: "Jan 20 - Feb 18",
        symbol: "♒",
        constellation: "🏺",
    },
    SignInfo {
        element: Element::Water,
        traits: ["compassionate", "artistic", "intuitive", "gentle"],
        dates: "Feb 19 - Mar 20",
        symbol: "♓",
        constellation: "🐟",
    },
];
